pub mod chat_widget;
pub mod risk_badge;
pub mod score_circle;
pub mod status_badge;
pub mod toast;
pub mod verification_badge;
