pub mod check;
pub mod contact;
pub mod messages;
pub mod settings;
pub mod transactions;
pub mod widget;

pub use check::CheckPage;
pub use contact::ContactPage;
pub use messages::MessagesPage;
pub use settings::SettingsPage;
pub use transactions::TransactionsPage;
pub use widget::WidgetPage;
