use dioxus::prelude::*;

use crate::app::Route;
use crate::config::AppConfig;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();
    let config = use_context::<AppConfig>();

    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100 font-sans",
            header { class: "border-b border-slate-900/60 bg-slate-950/80 backdrop-blur px-6 py-4",
                div { class: "mx-auto flex max-w-6xl items-center justify-between gap-4",
                    div { class: "flex items-center gap-3",
                        span { class: "text-2xl", "🛡️" }
                        div {
                            h1 { class: "text-xl font-semibold tracking-tight", "{APP_NAME}" }
                            p { class: "text-xs text-slate-500 italic", "know who you're paying" }
                        }
                        if config.demo_only() {
                            span { class: "rounded-full border border-amber-500/40 px-2 py-0.5 text-[0.65rem] uppercase tracking-wide text-amber-200",
                                "Demo mode"
                            }
                        }
                    }
                    nav { class: "flex gap-2 text-sm",
                        NavButton { active: matches!(current_route, Route::Check {}), onclick: move |_| { nav.push(Route::Check {}); }, label: "🔍 Check" }
                        NavButton { active: matches!(current_route, Route::Transactions {}), onclick: move |_| { nav.push(Route::Transactions {}); }, label: "🔒 Escrow" }
                        NavButton { active: matches!(current_route, Route::Messages {}), onclick: move |_| { nav.push(Route::Messages {}); }, label: "💬 Messages" }
                        NavButton { active: matches!(current_route, Route::Settings {}), onclick: move |_| { nav.push(Route::Settings {}); }, label: "⚙️" }
                    }
                }
            }
            main { class: "mx-auto max-w-6xl px-6 py-10",
                {children}
            }
            footer { class: "mx-auto max-w-6xl px-6 pb-8 text-xs text-slate-600",
                "{APP_NAME} {version_label()}"
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    let class = if active {
        "min-w-[5.5rem] rounded-lg border border-indigo-500/60 bg-indigo-500/15 px-4 py-2 font-semibold text-indigo-300"
    } else {
        "min-w-[5.5rem] rounded-lg border border-transparent px-4 py-2 text-slate-400 transition hover:border-slate-700 hover:bg-slate-900/80 hover:text-slate-200"
    };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
