//! Support chat widget state and message flagging.

use std::collections::HashSet;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ChatWidgetState {
    #[default]
    Closed,
    Open,
    Minimized,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChatEvent {
    Open,
    Close,
    Minimize,
    Restore,
    /// Launcher button: opens a closed widget, closes anything else.
    Toggle,
}

impl ChatWidgetState {
    pub fn apply(self, event: ChatEvent) -> Self {
        use ChatEvent as E;
        use ChatWidgetState as S;

        match (self, event) {
            (_, E::Close) => S::Closed,
            (S::Closed, E::Open | E::Toggle) => S::Open,
            (_, E::Toggle) => S::Closed,
            (S::Open, E::Minimize) => S::Minimized,
            (S::Minimized, E::Restore | E::Open) => S::Open,
            (state, _) => state,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    Me,
    Counterparty,
    System,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            sender,
            text: text.into(),
        }
    }
}

/// Ids of messages the user has reported.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlaggedMessages {
    ids: HashSet<String>,
}

impl FlaggedMessages {
    /// Flags or unflags `id`; returns whether it is flagged afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    pub fn is_flagged(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

pub fn welcome_messages() -> Vec<ChatMessage> {
    vec![
        ChatMessage::new(
            Sender::System,
            "Messages are monitored for fraud. Never share passwords or pay outside escrow.",
        ),
        ChatMessage::new(
            Sender::Counterparty,
            "Hi! The lens ships as soon as the escrow is funded.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_minimize_restore_close() {
        let state = ChatWidgetState::default()
            .apply(ChatEvent::Open)
            .apply(ChatEvent::Minimize);
        assert_eq!(state, ChatWidgetState::Minimized);
        let state = state.apply(ChatEvent::Restore);
        assert_eq!(state, ChatWidgetState::Open);
        assert_eq!(state.apply(ChatEvent::Close), ChatWidgetState::Closed);
    }

    #[test]
    fn toggle_from_every_state() {
        assert_eq!(
            ChatWidgetState::Closed.apply(ChatEvent::Toggle),
            ChatWidgetState::Open
        );
        assert_eq!(
            ChatWidgetState::Open.apply(ChatEvent::Toggle),
            ChatWidgetState::Closed
        );
        assert_eq!(
            ChatWidgetState::Minimized.apply(ChatEvent::Toggle),
            ChatWidgetState::Closed
        );
    }

    #[test]
    fn meaningless_events_are_ignored() {
        assert_eq!(
            ChatWidgetState::Closed.apply(ChatEvent::Minimize),
            ChatWidgetState::Closed
        );
        assert_eq!(
            ChatWidgetState::Closed.apply(ChatEvent::Restore),
            ChatWidgetState::Closed
        );
        assert_eq!(
            ChatWidgetState::Open.apply(ChatEvent::Restore),
            ChatWidgetState::Open
        );
    }

    #[test]
    fn flagging_toggles() {
        let mut flagged = FlaggedMessages::default();
        assert!(flagged.toggle("m1"));
        assert!(flagged.is_flagged("m1"));
        assert_eq!(flagged.len(), 1);
        assert!(!flagged.toggle("m1"));
        assert!(flagged.is_empty());
    }

    #[test]
    fn messages_get_unique_ids() {
        let messages = welcome_messages();
        assert_ne!(messages[0].id, messages[1].id);
    }
}
