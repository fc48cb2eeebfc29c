use dioxus::prelude::*;

use crate::{
    app::persist_user_state,
    config::AppConfig,
    domain::{AppState, Preferences},
    infra::fraud_api::FraudCheckClient,
    ui::{
        components::toast::{push_toast, ToastKind, ToastMessage},
        pages::check::humanize_age,
        theme,
    },
    util::version::{version_label, APP_NAME},
};

#[component]
pub fn SettingsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let config = use_context::<AppConfig>();
    let client = use_context::<Option<FraudCheckClient>>();

    let ttl = config.cache_ttl;
    let mut cache_entries = state.with(|st| {
        st.cache
            .iter()
            .map(|(domain, time)| (domain.clone(), humanize_age(*time), st.is_stale(domain, ttl)))
            .collect::<Vec<_>>()
    });
    cache_entries.sort_by(|a, b| a.0.cmp(&b.0));
    let preferences = state.with(|st| st.preferences);

    let service_label = match &config.api_base_url {
        Some(url) => url.to_string(),
        None => "Not configured (demo data only)".to_string(),
    };
    let ttl_label = format!("{}s", ttl.as_secs());

    let on_clear_cache = {
        let mut state = state;
        move |_| {
            state.with_mut(|st| st.cache.clear());
            if let Some(client) = client.clone() {
                spawn(async move {
                    client.clear_cache().await;
                });
            }
            push_toast(
                toasts,
                ToastKind::Info,
                "Cleared cached assessments. The next lookup fetches fresh data.",
            );
        }
    };

    let on_reset = {
        let mut state = state;
        move |_| {
            state.with_mut(|st| st.preferences = Preferences::default());
            persist_user_state(&state);
            push_toast(toasts, ToastKind::Info, "Restored default widget preferences.");
        }
    };

    rsx! {
        div { class: "space-y-8",
            section { class: "{theme::PANEL} p-6",
                h2 { class: "{theme::SECTION_TITLE}", "Fraud-check service" }
                dl { class: "mt-4 grid gap-4 text-sm sm:grid-cols-3",
                    div {
                        dt { class: "{theme::LABEL}", "Endpoint" }
                        dd { class: "mt-1 break-all text-slate-200", "{service_label}" }
                    }
                    div {
                        dt { class: "{theme::LABEL}", "Cache window" }
                        dd { class: "mt-1 text-slate-200", "{ttl_label}" }
                    }
                    div {
                        dt { class: "{theme::LABEL}", "Embed origin" }
                        dd { class: "mt-1 break-all text-slate-200", "{config.public_url}" }
                    }
                }
            }

            section { class: "{theme::PANEL} p-6",
                h2 { class: "{theme::SECTION_TITLE}", "Cache Status" }
                if cache_entries.is_empty() {
                    p { class: "mt-3 text-sm text-slate-400", "No live lookups yet." }
                } else {
                    ul { class: "mt-3 space-y-2 text-sm text-slate-300",
                        for (domain, age, stale) in cache_entries {
                            li {
                                key: "{domain}",
                                class: "flex items-center justify-between rounded-lg border border-slate-800 bg-slate-900/60 px-3 py-2",
                                span { "{domain}" }
                                span { class: "text-xs text-slate-500",
                                    if stale { "{age} · expired" } else { "{age}" }
                                }
                            }
                        }
                    }
                }
                button { class: "mt-4 {theme::BTN_WARNING}", onclick: on_clear_cache, "Clear Cache" }
            }

            section { class: "{theme::PANEL} p-6",
                h2 { class: "{theme::SECTION_TITLE}", "Widget Preferences" }
                p { class: "mt-2 text-sm text-slate-400",
                    "Embed snippets default to language "
                    span { class: "font-semibold text-slate-200", "{preferences.lang.code()}" }
                    " and size "
                    span { class: "font-semibold text-slate-200", "{preferences.size.code()}" }
                    "."
                }
                button { class: "mt-4 {theme::BTN_SECONDARY}", onclick: on_reset, "Reset Defaults" }
            }

            section { class: "flex flex-col items-center gap-2 {theme::PANEL} p-6 text-center text-slate-400",
                h2 { class: "{theme::SECTION_TITLE}", "About" }
                p { class: "text-sm", "{APP_NAME} {version_label()}" }
                p { class: "text-xs text-slate-500",
                    "Trust scores are advisory. Cert IDs are display references, not certificates."
                }
            }
        }
    }
}
