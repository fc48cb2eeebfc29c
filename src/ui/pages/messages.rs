use dioxus::prelude::*;

use crate::{
    domain::{AppState, ChatMessage, Sender},
    ui::{
        components::{
            chat_widget::MessageRow,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
};

/// Full-page view of the support conversation shared with the floating chat.
#[component]
pub fn MessagesPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let mut draft = use_signal(String::new);

    let (messages, flagged_count) = state.with(|st| {
        let rows = st
            .messages
            .iter()
            .map(|message| (message.clone(), st.flagged.is_flagged(&message.id)))
            .collect::<Vec<_>>();
        (rows, st.flagged.len())
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let text = draft().trim().to_string();
        if text.is_empty() {
            return;
        }
        state.with_mut(|st| st.messages.push(ChatMessage::new(Sender::Me, text)));
        draft.set(String::new());
    };

    rsx! {
        section { class: "{theme::PANEL} p-6",
            div { class: "flex items-center justify-between",
                h2 { class: "{theme::SECTION_TITLE}", "Messages" }
                if flagged_count > 0 {
                    span { class: "rounded-full border border-rose-500/40 px-2 py-0.5 text-xs text-rose-200",
                        "{flagged_count} reported"
                    }
                }
            }
            ul { class: "mt-4 space-y-2",
                for (message, flagged) in messages {
                    MessageRow {
                        key: "{message.id}",
                        message,
                        flagged,
                        on_flag: move |id: String| {
                            let now_flagged = state.with_mut(|st| st.flagged.toggle(&id));
                            let (kind, text) = if now_flagged {
                                (ToastKind::Warning, "Message reported to the trust & safety team.")
                            } else {
                                (ToastKind::Info, "Report withdrawn.")
                            };
                            push_toast(toasts, kind, text);
                        },
                    }
                }
            }
            form { class: "mt-4 flex gap-3", onsubmit: on_submit,
                input {
                    class: "flex-1 {theme::INPUT}",
                    placeholder: "Write a reply…",
                    value: draft(),
                    oninput: move |evt| draft.set(evt.value()),
                }
                button { class: "{theme::BTN_PRIMARY}", r#type: "submit", "Send" }
            }
        }
    }
}
