use dioxus::prelude::*;
use tracing::{info, warn};

use crate::{
    config::AppConfig,
    domain::{chat::welcome_messages, AppState},
    infra::{
        assessments::{resolve_assessment, AssessmentSource, LoadedAssessment},
        fraud_api::FraudCheckClient,
    },
    ui::{
        components::{chat_widget::ChatWidget, toast::Toast, toast::ToastMessage},
        pages::{CheckPage, ContactPage, MessagesPage, SettingsPage, TransactionsPage, WidgetPage},
        shell::Shell,
    },
    util::{
        assets,
        persistence::{load_persisted_state, save_persisted_state},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Check {},
    #[route("/widget?:domain&:lang&:size")]
    Widget {
        domain: String,
        lang: String,
        size: String,
    },
    #[route("/transactions")]
    Transactions {},
    #[route("/messages")]
    Messages {},
    #[route("/settings")]
    Settings {},
    #[route("/contact")]
    Contact {},
}

#[component]
pub fn App() -> Element {
    let config = use_hook(load_config);
    let client = use_hook({
        let config = config.clone();
        move || build_client(&config)
    });
    use_context_provider(|| config.clone());
    use_context_provider(|| client.clone());

    let state = use_signal(|| AppState {
        messages: welcome_messages(),
        ..AppState::default()
    });
    use_hook({
        let mut state = state;
        move || {
            if let Some(saved) = load_persisted_state() {
                state.with_mut(|st| st.apply_persisted(saved));
            }
        }
    });
    use_context_provider(|| state);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        if let Some(tailwind) = assets::tailwind_css() {
            document::Style { "{tailwind}" }
        }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

fn load_config() -> AppConfig {
    match AppConfig::from_env() {
        Ok(config) => {
            match &config.api_base_url {
                Some(url) => info!(
                    %url,
                    ttl_secs = config.cache_ttl.as_secs(),
                    "fraud-check service configured"
                ),
                None => info!("no fraud-check service configured; running on demo data"),
            }
            config
        }
        Err(err) => {
            warn!(%err, "invalid configuration; running on demo data");
            AppConfig::default()
        }
    }
}

fn build_client(config: &AppConfig) -> Option<FraudCheckClient> {
    let url = config.api_base_url.clone()?;
    match FraudCheckClient::new(url) {
        Ok(client) => Some(client.with_ttl(config.cache_ttl)),
        Err(err) => {
            warn!(%err, "failed to initialise fraud-check client");
            None
        }
    }
}

pub fn persist_user_state(state: &Signal<AppState>) {
    let snapshot = state.with(|st| st.to_persisted());
    if let Err(err) = save_persisted_state(&snapshot) {
        warn!(%err, "failed to persist preferences");
    }
}

/// Resolves `domain` and records the lookup. Pending and failed fetches are
/// covered by demo data, so this always yields something to show.
pub async fn load_assessment(
    client: Option<FraudCheckClient>,
    mut state: Signal<AppState>,
    domain: String,
) -> LoadedAssessment {
    let loaded = resolve_assessment(client.as_ref(), &domain).await;
    let key = loaded.assessment.domain.clone();
    state.with_mut(|st| {
        st.remember_lookup(&key);
        if let (Some(fetched_at), AssessmentSource::Live) = (loaded.fetched_at, loaded.source) {
            st.cache.record_fetch(&key, fetched_at);
        }
    });
    loaded
}

#[component]
pub fn Check() -> Element {
    rsx! { Shell { CheckPage {} } ChatWidget {} }
}

/// Rendered without the shell so it can live inside an iframe.
#[component]
pub fn Widget(domain: String, lang: String, size: String) -> Element {
    rsx! { WidgetPage { domain, lang, size } }
}

#[component]
pub fn Transactions() -> Element {
    rsx! { Shell { TransactionsPage {} } ChatWidget {} }
}

#[component]
pub fn Messages() -> Element {
    rsx! { Shell { MessagesPage {} } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { Shell { SettingsPage {} } }
}

#[component]
pub fn Contact() -> Element {
    rsx! { Shell { ContactPage {} } }
}
