use dioxus::prelude::*;

use crate::domain::risk::{progress_percent, ring_dash_offset, score_color, score_label};

const RADIUS: f64 = 42.0;

/// Circular progress for a 0–10 trust score.
#[component]
pub fn ScoreCircle(score: f64, size: u32, #[props(default = true)] show_label: bool) -> Element {
    let percent = progress_percent(score);
    let circumference = 2.0 * std::f64::consts::PI * RADIUS;
    let offset = ring_dash_offset(RADIUS, percent);
    let color = score_color(score);
    let label = score_label(score);
    let score_text = format!("{:.1}", score.clamp(0.0, 10.0));
    let dash_array = format!("{circumference:.2}");
    let dash_offset = format!("{offset:.2}");

    rsx! {
        div {
            class: "relative inline-flex items-center justify-center",
            style: "width: {size}px; height: {size}px;",
            svg {
                class: "score-ring absolute inset-0",
                width: "{size}",
                height: "{size}",
                view_box: "0 0 100 100",
                circle { class: "score-ring-track", cx: "50", cy: "50", r: "{RADIUS}" }
                circle {
                    class: "score-ring-value {color.stroke_class()}",
                    cx: "50",
                    cy: "50",
                    r: "{RADIUS}",
                    stroke_dasharray: "{dash_array}",
                    stroke_dashoffset: "{dash_offset}",
                }
            }
            div { class: "relative flex flex-col items-center leading-none",
                span { class: "font-semibold {color.text_class()}", "{score_text}" }
                if show_label {
                    span { class: "mt-1 text-[0.6rem] uppercase tracking-wide text-slate-400", "{label.as_str()}" }
                }
            }
        }
    }
}
