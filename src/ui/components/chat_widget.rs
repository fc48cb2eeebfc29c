//! Floating support chat. Visibility is driven purely by `ChatWidgetState`.

use dioxus::prelude::*;

use super::toast::{push_toast, ToastKind, ToastMessage};
use crate::domain::{AppState, ChatEvent, ChatMessage, ChatWidgetState, Sender};

#[component]
pub fn ChatWidget() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let chat = state.with(|st| st.chat);
    let message_count = state.with(|st| st.messages.len());

    rsx! {
        div { class: "chat-launcher flex flex-col items-end gap-3",
            match chat {
                ChatWidgetState::Open => rsx! {
                    ChatPanel {
                        on_minimize: move |_| state.with_mut(|st| st.chat = st.chat.apply(ChatEvent::Minimize)),
                        on_close: move |_| state.with_mut(|st| st.chat = st.chat.apply(ChatEvent::Close)),
                    }
                },
                ChatWidgetState::Minimized => rsx! {
                    button {
                        class: "rounded-full border border-indigo-500/40 bg-slate-900 px-4 py-2 text-xs font-semibold text-indigo-200 shadow-lg",
                        onclick: move |_| state.with_mut(|st| st.chat = st.chat.apply(ChatEvent::Restore)),
                        "💬 Support chat ({message_count})"
                    }
                },
                ChatWidgetState::Closed => rsx! {
                    button {
                        class: "h-12 w-12 rounded-full bg-indigo-500 text-xl text-white shadow-lg hover:bg-indigo-400",
                        title: "Open support chat",
                        onclick: move |_| state.with_mut(|st| st.chat = st.chat.apply(ChatEvent::Toggle)),
                        "💬"
                    }
                },
            }
        }
    }
}

#[component]
fn ChatPanel(on_minimize: EventHandler<()>, on_close: EventHandler<()>) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let mut draft = use_signal(String::new);

    let messages = state.with(|st| {
        st.messages
            .iter()
            .map(|message| (message.clone(), st.flagged.is_flagged(&message.id)))
            .collect::<Vec<_>>()
    });

    rsx! {
        div { class: "w-80 rounded-xl border border-slate-800 bg-slate-950 shadow-2xl",
            header { class: "flex items-center justify-between border-b border-slate-800 px-4 py-3",
                h2 { class: "text-sm font-semibold text-slate-100", "Support chat" }
                div { class: "flex gap-2 text-xs text-slate-400",
                    button { class: "hover:text-slate-100", onclick: move |_| on_minimize.call(()), "Minimize" }
                    button { class: "hover:text-slate-100", onclick: move |_| on_close.call(()), "Close" }
                }
            }
            ul { class: "max-h-72 space-y-2 overflow-y-auto px-4 py-3",
                for (message, flagged) in messages {
                    MessageRow {
                        key: "{message.id}",
                        message,
                        flagged,
                        on_flag: move |id: String| {
                            let now_flagged = state.with_mut(|st| st.flagged.toggle(&id));
                            if now_flagged {
                                push_toast(toasts, ToastKind::Warning, "Message reported to the trust & safety team.");
                            }
                        },
                    }
                }
            }
            div { class: "flex gap-2 border-t border-slate-800 p-3",
                input {
                    class: "flex-1 rounded-lg border border-slate-700 bg-slate-900 px-3 py-2 text-sm text-slate-100 focus:border-indigo-500 focus:outline-none",
                    placeholder: "Type a message…",
                    value: draft(),
                    oninput: move |evt| draft.set(evt.value()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            submit_draft(state, draft);
                        }
                    },
                }
                button {
                    class: "rounded-lg bg-indigo-500 px-3 py-2 text-xs font-semibold text-white hover:bg-indigo-400",
                    onclick: move |_| submit_draft(state, draft),
                    "Send"
                }
            }
        }
    }
}

fn submit_draft(mut state: Signal<AppState>, mut draft: Signal<String>) {
    let text = draft().trim().to_string();
    if text.is_empty() {
        return;
    }
    state.with_mut(|st| st.messages.push(ChatMessage::new(Sender::Me, text)));
    draft.set(String::new());
}

#[component]
pub fn MessageRow(message: ChatMessage, flagged: bool, on_flag: EventHandler<String>) -> Element {
    let (align, bubble) = match message.sender {
        Sender::Me => ("justify-end", "bg-indigo-500/20 text-indigo-100"),
        Sender::Counterparty => ("justify-start", "bg-slate-800 text-slate-100"),
        Sender::System => ("justify-center", "bg-amber-500/10 text-amber-200 text-xs"),
    };
    let can_flag = message.sender == Sender::Counterparty;
    let id = message.id.clone();
    let flag_class = if flagged {
        "mt-1 text-[0.65rem] font-semibold text-rose-300"
    } else {
        "mt-1 text-[0.65rem] text-slate-500 hover:text-rose-300"
    };

    rsx! {
        li { class: "flex {align}",
            div { class: "max-w-[85%] rounded-lg px-3 py-2 text-sm {bubble}",
                p { "{message.text}" }
                if can_flag {
                    button {
                        class: "{flag_class}",
                        onclick: move |_| on_flag.call(id.clone()),
                        if flagged { "🚩 Reported" } else { "Report" }
                    }
                }
            }
        }
    }
}
