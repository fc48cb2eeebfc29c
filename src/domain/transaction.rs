//! Escrow transaction status display and per-status action gating.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Pending,
    Funded,
    InProgress,
    Delivered,
    Completed,
    Disputed,
    Cancelled,
    Refunded,
}

impl TransactionStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TransactionStatus::Completed
                | TransactionStatus::Cancelled
                | TransactionStatus::Refunded
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusDescriptor {
    pub label: &'static str,
    pub icon: &'static str,
    pub classes: &'static str,
}

pub fn status_descriptor(status: TransactionStatus) -> StatusDescriptor {
    let (label, icon, classes) = match status {
        TransactionStatus::Pending => (
            "Awaiting Payment",
            "⏳",
            "border-slate-500/40 bg-slate-500/10 text-slate-200",
        ),
        TransactionStatus::Funded => (
            "Funds in Escrow",
            "🔒",
            "border-sky-500/40 bg-sky-500/10 text-sky-200",
        ),
        TransactionStatus::InProgress => (
            "In Progress",
            "🚚",
            "border-indigo-500/40 bg-indigo-500/10 text-indigo-200",
        ),
        TransactionStatus::Delivered => (
            "Delivered",
            "📦",
            "border-amber-500/40 bg-amber-500/10 text-amber-200",
        ),
        TransactionStatus::Completed => (
            "Completed",
            "✅",
            "border-emerald-500/40 bg-emerald-500/10 text-emerald-200",
        ),
        TransactionStatus::Disputed => (
            "Disputed",
            "⚖️",
            "border-rose-500/40 bg-rose-500/10 text-rose-200",
        ),
        TransactionStatus::Cancelled => (
            "Cancelled",
            "✖️",
            "border-slate-700 bg-slate-800/40 text-slate-400",
        ),
        TransactionStatus::Refunded => (
            "Refunded",
            "↩️",
            "border-violet-500/40 bg-violet-500/10 text-violet-200",
        ),
    };
    StatusDescriptor {
        label,
        icon,
        classes,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PartyRole {
    Buyer,
    Seller,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransactionAction {
    Fund,
    MarkDelivered,
    ConfirmReceipt,
    OpenDispute,
    Cancel,
    ContactSupport,
}

impl TransactionAction {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionAction::Fund => "Fund Escrow",
            TransactionAction::MarkDelivered => "Mark as Delivered",
            TransactionAction::ConfirmReceipt => "Confirm Receipt",
            TransactionAction::OpenDispute => "Open Dispute",
            TransactionAction::Cancel => "Cancel",
            TransactionAction::ContactSupport => "Contact Support",
        }
    }

    /// Declarative target for the support link; other actions have none.
    pub fn href(&self) -> Option<&'static str> {
        match self {
            TransactionAction::ContactSupport => Some("/contact"),
            _ => None,
        }
    }
}

/// Actions offered to `role` for a transaction in `status`. Always ends with support.
pub fn permitted_actions(status: TransactionStatus, role: PartyRole) -> Vec<TransactionAction> {
    use PartyRole::*;
    use TransactionAction::*;
    use TransactionStatus::*;

    let mut actions = match (status, role) {
        (Pending, Buyer) => vec![Fund, Cancel],
        (Pending, Seller) => vec![Cancel],
        (Funded, Seller) | (InProgress, Seller) => vec![MarkDelivered, OpenDispute],
        (Funded, Buyer) | (InProgress, Buyer) => vec![OpenDispute],
        (Delivered, Buyer) => vec![ConfirmReceipt, OpenDispute],
        (Delivered, Seller) => vec![OpenDispute],
        (Disputed, _) => vec![],
        (Completed, _) | (Cancelled, _) | (Refunded, _) => vec![],
    };
    actions.push(ContactSupport);
    actions
}

/// One row of the escrow dashboard.
#[derive(Clone, Debug, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub title: String,
    pub counterparty: String,
    pub amount_cents: u64,
    pub currency: &'static str,
    pub status: TransactionStatus,
    pub role: PartyRole,
}

impl Transaction {
    pub fn amount_display(&self) -> String {
        format!(
            "{}.{:02} {}",
            self.amount_cents / 100,
            self.amount_cents % 100,
            self.currency
        )
    }
}

/// Static rows for the escrow dashboard.
pub fn sample_transactions() -> Vec<Transaction> {
    use PartyRole::*;
    use TransactionStatus::*;

    let row = |id: &str, title: &str, counterparty: &str, amount_cents, status, role| Transaction {
        id: id.to_string(),
        title: title.to_string(),
        counterparty: counterparty.to_string(),
        amount_cents,
        currency: "USD",
        status,
        role,
    };
    vec![
        row("TX-1041", "Vintage camera lens", "lens-hub.shop", 45_000, Pending, Buyer),
        row("TX-1038", "Logo design package", "studio-ember.io", 120_000, Funded, Seller),
        row("TX-1032", "Refurbished laptop", "tech-renew.com", 89_999, Delivered, Buyer),
        row("TX-1027", "Domain transfer", "names-market.net", 250_000, Disputed, Buyer),
        row("TX-1019", "Handmade rug", "loom-and-co.com", 32_050, Completed, Seller),
        row("TX-1012", "Concert tickets", "cheap-deals-online.net", 18_000, Refunded, Buyer),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [TransactionStatus; 8] = [
        TransactionStatus::Pending,
        TransactionStatus::Funded,
        TransactionStatus::InProgress,
        TransactionStatus::Delivered,
        TransactionStatus::Completed,
        TransactionStatus::Disputed,
        TransactionStatus::Cancelled,
        TransactionStatus::Refunded,
    ];

    #[test]
    fn terminal_statuses_only_offer_support() {
        for status in ALL.iter().filter(|s| s.is_terminal()) {
            for role in [PartyRole::Buyer, PartyRole::Seller] {
                assert_eq!(
                    permitted_actions(*status, role),
                    vec![TransactionAction::ContactSupport]
                );
            }
        }
    }

    #[test]
    fn only_buyer_funds_and_confirms() {
        assert!(permitted_actions(TransactionStatus::Pending, PartyRole::Buyer)
            .contains(&TransactionAction::Fund));
        assert!(!permitted_actions(TransactionStatus::Pending, PartyRole::Seller)
            .contains(&TransactionAction::Fund));
        assert!(permitted_actions(TransactionStatus::Delivered, PartyRole::Buyer)
            .contains(&TransactionAction::ConfirmReceipt));
        assert!(!permitted_actions(TransactionStatus::Delivered, PartyRole::Seller)
            .contains(&TransactionAction::ConfirmReceipt));
    }

    #[test]
    fn seller_marks_delivery_once_funded() {
        assert!(permitted_actions(TransactionStatus::Funded, PartyRole::Seller)
            .contains(&TransactionAction::MarkDelivered));
        assert!(!permitted_actions(TransactionStatus::Pending, PartyRole::Seller)
            .contains(&TransactionAction::MarkDelivered));
    }

    #[test]
    fn every_status_has_a_descriptor_and_support_link() {
        for status in ALL {
            assert!(!status_descriptor(status).label.is_empty());
            let actions = permitted_actions(status, PartyRole::Buyer);
            assert_eq!(actions.last(), Some(&TransactionAction::ContactSupport));
        }
        assert_eq!(TransactionAction::ContactSupport.href(), Some("/contact"));
    }

    #[test]
    fn amount_formats_cents() {
        let tx = &sample_transactions()[2];
        assert_eq!(tx.amount_display(), "899.99 USD");
    }
}
