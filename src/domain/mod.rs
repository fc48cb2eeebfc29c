//! Trust classification, badge view models and escrow/chat state live here.

pub mod app_state;
pub mod badge;
pub mod chat;
pub mod demo;
pub mod entities;
pub mod risk;
pub mod transaction;
pub mod widget;

pub use app_state::{AppState, PersistedState, Preferences};
pub use badge::{embed_snippet, render as render_badge, BadgeVariant, BadgeView};
pub use chat::{ChatEvent, ChatMessage, ChatWidgetState, Sender};
pub use demo::demo_assessment;
pub use entities::{normalize_domain, RiskAssessment, VerificationLevel};
pub use risk::{classify, RiskLevel};
pub use transaction::{
    permitted_actions, sample_transactions, status_descriptor, PartyRole, Transaction,
    TransactionAction, TransactionStatus,
};
pub use widget::{Language, WidgetParams, WidgetSize};
