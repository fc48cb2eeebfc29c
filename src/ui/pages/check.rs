use std::time::SystemTime;

use dioxus::prelude::*;
use time::OffsetDateTime;
use tracing::warn;

use crate::{
    app::{load_assessment, persist_user_state},
    config::AppConfig,
    domain::{
        embed_snippet, normalize_domain, render_badge, AppState, BadgeVariant, Language,
        RiskAssessment, WidgetSize,
    },
    infra::{
        assessments::{AssessmentSource, LoadedAssessment},
        fraud_api::FraudCheckClient,
    },
    ui::{
        components::{
            risk_badge::RiskBadge,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        pages::widget::WidgetCard,
        theme,
    },
};

#[component]
pub fn CheckPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let client = use_context::<Option<FraudCheckClient>>();

    let mut query = use_signal(String::new);
    let mut active_domain = use_signal(|| None::<String>);

    let lookup = use_resource(move || {
        let client = client.clone();
        let domain = active_domain();
        async move {
            match domain {
                Some(domain) => Some(load_assessment(client, state, domain).await),
                None => None,
            }
        }
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let domain = normalize_domain(&query());
        if domain.is_empty() {
            push_toast(toasts, ToastKind::Warning, "Enter a domain to check.");
            return;
        }
        query.set(domain.clone());
        active_domain.set(Some(domain));
    };

    let recent = state.with(|st| st.recent_lookups.clone());

    // A result for a previous domain counts as pending.
    let current = active_domain().map(|domain| {
        let loaded = lookup
            .read()
            .as_ref()
            .and_then(|result| result.clone())
            .filter(|loaded| loaded.assessment.domain == domain);
        match loaded {
            Some(loaded) => (loaded, false),
            None => (LoadedAssessment::demo(&domain), true),
        }
    });

    rsx! {
        div { class: "space-y-8",
            section { class: "{theme::PANEL} p-6",
                h2 { class: "{theme::SECTION_TITLE}", "Check a website" }
                form { class: "mt-4 flex flex-wrap gap-3", onsubmit: on_submit,
                    input {
                        class: "flex-1 {theme::INPUT}",
                        placeholder: "example.com",
                        value: query(),
                        oninput: move |evt| query.set(evt.value()),
                    }
                    button { class: "{theme::BTN_PRIMARY}", r#type: "submit", "Check" }
                }
                if !recent.is_empty() {
                    div { class: "mt-4 flex flex-wrap items-center gap-2",
                        span { class: "text-xs {theme::TEXT_MUTED}", "Recent:" }
                        for domain in recent {
                            RecentChip {
                                key: "{domain}",
                                active: active_domain().as_deref() == Some(domain.as_str()),
                                domain: domain.clone(),
                                on_select: move |domain: String| {
                                    query.set(domain.clone());
                                    active_domain.set(Some(domain));
                                },
                            }
                        }
                    }
                }
            }
            match current {
                Some((loaded, pending)) => rsx! {
                    AssessmentPanel { loaded, pending }
                },
                None => rsx! {
                    p { class: "text-sm {theme::TEXT_MUTED}",
                        "Enter a domain above to see its trust score, risk level and badge layouts."
                    }
                },
            }
        }
    }
}

#[component]
fn RecentChip(domain: String, active: bool, on_select: EventHandler<String>) -> Element {
    let target = domain.clone();
    rsx! {
        button {
            class: "{theme::chip(active)}",
            onclick: move |_| on_select.call(target.clone()),
            "{domain}"
        }
    }
}

#[component]
fn AssessmentPanel(loaded: LoadedAssessment, pending: bool) -> Element {
    let now = OffsetDateTime::now_utc();
    let views = BadgeVariant::ALL.map(|variant| render_badge(&loaded.assessment, variant, now));
    let caption = if pending {
        "Checking… showing demo data until the service answers".to_string()
    } else {
        match loaded.fetched_at {
            Some(fetched_at) if loaded.source != AssessmentSource::Demo => {
                format!("{} · fetched {}", loaded.source.caption(), humanize_age(fetched_at))
            }
            _ => loaded.source.caption().to_string(),
        }
    };

    rsx! {
        section { class: "space-y-6",
            div { class: "flex items-center justify-between",
                h2 { class: "{theme::SECTION_TITLE}", "Badges for {loaded.assessment.domain}" }
                span { class: "text-xs {theme::TEXT_MUTED}", "{caption}" }
            }
            div { class: "grid gap-6 lg:grid-cols-2",
                for view in views {
                    div { key: "{view.variant.name()}", class: "space-y-2",
                        p { class: "{theme::LABEL}", "{view.variant.name()}" }
                        RiskBadge { view }
                    }
                }
            }
            EmbedBuilder { assessment: loaded.assessment.clone() }
        }
    }
}

#[component]
fn EmbedBuilder(assessment: RiskAssessment) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let config = use_context::<AppConfig>();

    let preferences = state.with(|st| st.preferences);
    let snippet = embed_snippet(
        config.public_url.as_str(),
        &assessment.domain,
        preferences.lang,
        preferences.size,
    );

    let on_copy = {
        let snippet = snippet.clone();
        move |_| copy_snippet(toasts, &snippet)
    };

    rsx! {
        section { class: "{theme::PANEL} space-y-4 p-6",
            h2 { class: "{theme::SECTION_TITLE}", "Embed on your site" }
            div { class: "flex flex-wrap gap-6",
                div { class: "space-y-2",
                    span { class: "{theme::LABEL}", "Language" }
                    div { class: "flex gap-2",
                        for lang in Language::ALL {
                            button {
                                key: "{lang.code()}",
                                class: "{theme::chip(lang == preferences.lang)}",
                                onclick: move |_| {
                                    state.with_mut(|st| st.preferences.lang = lang);
                                    persist_user_state(&state);
                                },
                                "{lang.code()}"
                            }
                        }
                    }
                }
                div { class: "space-y-2",
                    span { class: "{theme::LABEL}", "Size" }
                    div { class: "flex gap-2",
                        for size in WidgetSize::ALL {
                            button {
                                key: "{size.code()}",
                                class: "{theme::chip(size == preferences.size)}",
                                onclick: move |_| {
                                    state.with_mut(|st| st.preferences.size = size);
                                    persist_user_state(&state);
                                },
                                "{size.code()}"
                            }
                        }
                    }
                }
            }
            WidgetCard {
                assessment: assessment.clone(),
                lang: preferences.lang,
                size: preferences.size,
                caption: None,
            }
            pre { class: "overflow-x-auto rounded-lg border border-slate-800 bg-slate-950 p-3 text-xs text-slate-300",
                code { "{snippet}" }
            }
            button { class: "{theme::BTN_SECONDARY}", onclick: on_copy, "Copy snippet" }
        }
    }
}

fn copy_snippet(toasts: Signal<Vec<ToastMessage>>, snippet: &str) {
    if snippet.is_empty() {
        push_toast(toasts, ToastKind::Warning, "No snippet to copy; check TRUSTVERIFY_PUBLIC_URL.");
        return;
    }
    let script = match clipboard_script(snippet) {
        Ok(script) => script,
        Err(err) => {
            warn!(%err, "failed to encode embed snippet");
            return;
        }
    };
    spawn(async move {
        match document::eval(&script).await {
            Ok(_) => push_toast(toasts, ToastKind::Success, "Embed snippet copied to clipboard."),
            Err(err) => {
                warn!(error = ?err, "clipboard write failed");
                push_toast(
                    toasts,
                    ToastKind::Warning,
                    "Could not copy to the clipboard. Select the snippet and copy it manually.",
                );
            }
        }
    });
}

/// Script resolving once the browser accepted the write; a rejection surfaces
/// as an eval error.
fn clipboard_script(snippet: &str) -> Result<String, serde_json::Error> {
    let literal = serde_json::to_string(snippet)?;
    Ok(format!("await navigator.clipboard.writeText({literal}); return true;"))
}

pub fn humanize_age(fetched_at: SystemTime) -> String {
    let age = SystemTime::now()
        .duration_since(fetched_at)
        .unwrap_or_default()
        .as_secs();
    if age < 60 {
        format!("{age}s ago")
    } else if age < 3_600 {
        format!("{}m ago", age / 60)
    } else if age < 86_400 {
        format!("{}h ago", age / 3_600)
    } else {
        format!("{}d ago", age / 86_400)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn clipboard_script_awaits_an_escaped_literal() {
        let script = clipboard_script(r#"<iframe src="https://x/widget"></iframe>"#)
            .expect("encodes");
        assert_eq!(
            script,
            r#"await navigator.clipboard.writeText("<iframe src=\"https://x/widget\"></iframe>"); return true;"#
        );
    }

    #[test]
    fn humanize_age_picks_the_largest_unit() {
        let now = SystemTime::now();
        assert_eq!(humanize_age(now + Duration::from_secs(30)), "0s ago");
        assert_eq!(humanize_age(now - Duration::from_secs(90)), "1m ago");
        assert_eq!(humanize_age(now - Duration::from_secs(2 * 3_600 + 5)), "2h ago");
        assert_eq!(humanize_age(now - Duration::from_secs(3 * 86_400)), "3d ago");
    }
}
