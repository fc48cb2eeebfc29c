use dioxus::prelude::*;

use crate::{
    domain::{
        badge::format_count, classify, demo_assessment, Language, RiskAssessment, WidgetParams,
        WidgetSize,
    },
    infra::{assessments::resolve_assessment, fraud_api::FraudCheckClient},
    ui::{components::score_circle::ScoreCircle, theme},
};

/// Bare widget for iframes, driven entirely by the query string.
#[component]
pub fn WidgetPage(domain: String, lang: String, size: String) -> Element {
    let params = WidgetParams::from_query(&domain, &lang, &size);
    let client = use_context::<Option<FraudCheckClient>>();

    let query_domain = params.domain.clone();
    let lookup = use_resource(use_reactive!(|(query_domain,)| {
        let client = client.clone();
        async move {
            let domain = query_domain?;
            Some(resolve_assessment(client.as_ref(), &domain).await)
        }
    }));

    let WidgetParams { domain, lang, size } = params;
    let strings = lang.strings();

    let Some(domain) = domain else {
        return rsx! {
            div { class: "{theme::widget_frame(size)} border-slate-700 bg-slate-950 text-slate-400",
                p { class: "text-sm", "{strings.no_domain}" }
            }
        };
    };

    let loaded = lookup.read().as_ref().and_then(|result| result.clone());
    let (assessment, caption) = match loaded {
        Some(loaded) => (loaded.assessment, None),
        None => (demo_assessment(&domain), Some(strings.loading.to_string())),
    };

    rsx! {
        WidgetCard { assessment, lang, size, caption }
    }
}

#[component]
pub fn WidgetCard(
    assessment: RiskAssessment,
    lang: Language,
    size: WidgetSize,
    caption: Option<String>,
) -> Element {
    let strings = lang.strings();
    let tier = classify(assessment.risk_level);
    let risk_label = strings.risk_label(assessment.risk_level);
    let score = format!("{:.0}", assessment.trust_score);
    let transactions = format_count(assessment.completed_transactions);
    let show_details = size != WidgetSize::Small;
    let accent = tier.color.hex();

    rsx! {
        div {
            class: "{theme::widget_frame(size)} {tier.border_color} bg-slate-950 text-slate-100",
            title: "{strings.title}",
            style: "border-left: 4px solid {accent}",
            div { class: "flex items-center gap-3",
                ScoreCircle {
                    score: assessment.score_out_of_ten(),
                    size: theme::widget_ring_size(size),
                    show_label: show_details,
                }
                div { class: "min-w-0",
                    p { class: "truncate {theme::widget_title(size)}", "{assessment.domain}" }
                    p { class: "text-xs font-semibold {tier.text_color}", "{tier.icon} {risk_label}" }
                    if show_details {
                        p { class: "text-xs text-slate-400", "{strings.trust_score}: {score}/100" }
                        p { class: "text-xs text-slate-400", "{transactions} {strings.transactions}" }
                    }
                }
            }
            if let Some(caption) = caption {
                p { class: "mt-1 text-[0.65rem] text-slate-500", "{caption}" }
            }
            p { class: "mt-1 text-[0.6rem] uppercase tracking-wide text-slate-600", "{strings.powered_by}" }
        }
    }
}
