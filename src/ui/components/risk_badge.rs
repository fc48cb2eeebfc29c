use dioxus::prelude::*;

use super::score_circle::ScoreCircle;
use super::verification_badge::VerificationBadge;
use crate::domain::{BadgeVariant, BadgeView};
use crate::ui::theme;

/// Lays out a pre-computed [`BadgeView`]; no classification happens here.
#[component]
pub fn RiskBadge(view: BadgeView) -> Element {
    match view.variant {
        BadgeVariant::Compact => rsx! { CompactBadge { view } },
        BadgeVariant::Detailed => rsx! { DetailedBadge { view } },
        BadgeVariant::Embeddable => rsx! { EmbeddableBadge { view } },
    }
}

#[component]
fn CompactBadge(view: BadgeView) -> Element {
    let tier = view.tier;
    rsx! {
        span {
            class: "{theme::badge_container(view.variant)} {tier.border_color} {tier.bg_color} {tier.text_color}",
            title: "{view.domain}: {tier.label}",
            span { "{tier.icon}" }
            span { class: "text-xs font-semibold", "{tier.label}" }
            span { class: "text-xs opacity-80", "{view.score_display}/100" }
        }
    }
}

#[component]
fn DetailedBadge(view: BadgeView) -> Element {
    let tier = view.tier;
    rsx! {
        div {
            class: "{theme::badge_container(view.variant)} {tier.border_color} {tier.bg_color}",
            div { class: "flex items-start justify-between gap-4",
                div {
                    p { class: "text-xs uppercase tracking-wide text-slate-400", "Trust report" }
                    h3 { class: "text-lg font-semibold text-slate-100", "{view.domain}" }
                    p { class: "mt-1 text-sm font-semibold {tier.text_color}", "{tier.icon} {tier.label}" }
                }
                ScoreCircle { score: view.score_out_of_ten, size: theme::badge_ring_size(view.variant) }
            }
            div { class: "flex flex-wrap items-center gap-2",
                VerificationBadge { descriptor: view.verification }
                if let Some(cert) = view.certification {
                    span { class: "inline-flex items-center rounded-full border px-2 py-0.5 text-xs font-medium {cert.classes()}", "{cert.label()}" }
                }
            }
            dl { class: "grid grid-cols-2 gap-3 text-sm",
                div {
                    dt { class: "{theme::LABEL}", "Trust score" }
                    dd { class: "text-slate-200", "{view.score_display} / 100 ({view.score_label.as_str()})" }
                }
                div {
                    dt { class: "{theme::LABEL}", "Completed transactions" }
                    dd { class: "text-slate-200", "{view.transactions_display}" }
                }
            }
            CertFooter { view: view.clone() }
        }
    }
}

#[component]
fn EmbeddableBadge(view: BadgeView) -> Element {
    let tier = view.tier;
    rsx! {
        div {
            class: "{theme::badge_container(view.variant)} {tier.border_color}",
            div { class: "flex items-center gap-3",
                ScoreCircle { score: view.score_out_of_ten, size: theme::badge_ring_size(view.variant), show_label: false }
                div {
                    p { class: "text-sm font-semibold text-slate-100", "{view.domain}" }
                    p { class: "text-xs font-semibold {tier.text_color}", "{tier.icon} {tier.label}" }
                    if let Some(cert) = view.certification {
                        p { class: "text-[0.65rem] text-slate-400", "{cert.label()}" }
                    }
                }
            }
            CertFooter { view: view.clone() }
        }
    }
}

#[component]
fn CertFooter(view: BadgeView) -> Element {
    rsx! {
        div { class: "flex flex-wrap items-center justify-between gap-2 border-t border-slate-800 pt-2 text-[0.65rem] text-slate-500",
            if let Some(cert_id) = view.cert_id.as_ref() {
                span { title: "Display reference only, not a verifiable certificate", "Cert ID {cert_id}" }
            }
            div { class: "flex gap-3",
                a { class: "hover:text-slate-300", href: "{view.report_href}", "Report" }
                a { class: "hover:text-slate-300", href: "{view.contact_href}", "Contact" }
            }
        }
    }
}
