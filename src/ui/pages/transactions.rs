use dioxus::prelude::*;

use crate::{
    domain::{permitted_actions, sample_transactions, PartyRole, Transaction, TransactionAction},
    ui::{
        components::{
            status_badge::StatusBadge,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
};

#[component]
pub fn TransactionsPage() -> Element {
    let transactions = use_hook(sample_transactions);
    let open = transactions.iter().filter(|tx| !tx.status.is_terminal()).count();

    rsx! {
        section { class: "{theme::PANEL} p-6",
            div { class: "flex items-center justify-between",
                h2 { class: "{theme::SECTION_TITLE}", "Escrow transactions" }
                span { class: "text-xs {theme::TEXT_MUTED}", "{open} open" }
            }
            div { class: "mt-4 overflow-x-auto",
                table { class: "min-w-full text-sm",
                    thead {
                        tr { class: "text-left text-xs uppercase tracking-wide text-slate-500",
                            th { class: "px-3 py-2", "ID" }
                            th { class: "px-3 py-2", "Item" }
                            th { class: "px-3 py-2", "Counterparty" }
                            th { class: "px-3 py-2 text-right", "Amount" }
                            th { class: "px-3 py-2", "Status" }
                            th { class: "px-3 py-2", "Actions" }
                        }
                    }
                    tbody {
                        for transaction in transactions {
                            TransactionRow { key: "{transaction.id}", transaction }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TransactionRow(transaction: Transaction) -> Element {
    let actions = permitted_actions(transaction.status, transaction.role);
    let role = match transaction.role {
        PartyRole::Buyer => "buying from",
        PartyRole::Seller => "selling to",
    };

    rsx! {
        tr { class: "border-t border-slate-800",
            td { class: "px-3 py-3 font-mono text-xs text-slate-400", "{transaction.id}" }
            td { class: "px-3 py-3 text-slate-100", "{transaction.title}" }
            td { class: "px-3 py-3 text-slate-300",
                span { class: "text-xs {theme::TEXT_MUTED}", "{role} " }
                "{transaction.counterparty}"
            }
            td { class: "px-3 py-3 text-right tabular-nums text-slate-200", "{transaction.amount_display()}" }
            td { class: "px-3 py-3", StatusBadge { status: transaction.status } }
            td { class: "px-3 py-3",
                div { class: "flex flex-wrap gap-2",
                    for action in actions {
                        ActionButton { key: "{action.label()}", action, transaction_id: transaction.id.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn ActionButton(action: TransactionAction, transaction_id: String) -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    if let Some(href) = action.href() {
        return rsx! {
            Link { class: "{theme::BTN_SECONDARY}", to: href, "{action.label()}" }
        };
    }

    let class = match action {
        TransactionAction::OpenDispute | TransactionAction::Cancel => theme::BTN_WARNING,
        _ => theme::BTN_SECONDARY,
    };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| {
                push_toast(
                    toasts,
                    ToastKind::Info,
                    format!("{} requested for {transaction_id}.", action.label()),
                );
            },
            "{action.label()}"
        }
    }
}
