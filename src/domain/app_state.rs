use std::{
    collections::HashMap,
    time::{Duration, SystemTime},
};

use serde::{Deserialize, Serialize};

use super::chat::{ChatMessage, ChatWidgetState, FlaggedMessages};
use super::widget::{Language, WidgetSize};

/// Preferences for the badge builder; the only state written to disk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub lang: Language,
    #[serde(default)]
    pub size: WidgetSize,
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub preferences: Preferences,
    pub cache: CacheTimestamps,
    /// Most recent first, without duplicates.
    pub recent_lookups: Vec<String>,
    pub chat: ChatWidgetState,
    pub messages: Vec<ChatMessage>,
    pub flagged: FlaggedMessages,
}

const RECENT_LIMIT: usize = 6;

impl AppState {
    pub fn is_stale(&self, domain: &str, ttl: Duration) -> bool {
        self.cache.is_stale(domain, ttl)
    }

    pub fn remember_lookup(&mut self, domain: &str) {
        self.recent_lookups.retain(|existing| existing != domain);
        self.recent_lookups.insert(0, domain.to_string());
        self.recent_lookups.truncate(RECENT_LIMIT);
    }

    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.preferences = persisted.preferences;
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            preferences: self.preferences,
        }
    }
}

/// When each domain's assessment was last fetched from the service.
#[derive(Clone, Debug, Default)]
pub struct CacheTimestamps {
    entries: HashMap<String, SystemTime>,
}

impl CacheTimestamps {
    pub fn record_fetch(&mut self, domain: &str, fetched_at: SystemTime) {
        self.entries.insert(domain.to_string(), fetched_at);
    }

    pub fn fetched_at(&self, domain: &str) -> Option<SystemTime> {
        self.entries.get(domain).copied()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &SystemTime)> {
        self.entries.iter()
    }

    pub fn is_stale(&self, domain: &str, ttl: Duration) -> bool {
        self.fetched_at(domain)
            .map(|time| time.elapsed().map(|elapsed| elapsed > ttl).unwrap_or(true))
            .unwrap_or(true)
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub preferences: Preferences,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn recent_lookups_are_deduplicated_and_bounded() {
        let mut state = AppState::default();
        for domain in ["a.com", "b.com", "a.com"] {
            state.remember_lookup(domain);
        }
        assert_eq!(state.recent_lookups, vec!["a.com", "b.com"]);

        for idx in 0..10 {
            state.remember_lookup(&format!("site{idx}.com"));
        }
        assert_eq!(state.recent_lookups.len(), RECENT_LIMIT);
        assert_eq!(state.recent_lookups[0], "site9.com");
    }

    #[test]
    fn unknown_domain_is_stale() {
        let mut cache = CacheTimestamps::default();
        assert!(cache.is_stale("google.com", Duration::from_secs(300)));
        cache.record_fetch("google.com", SystemTime::now());
        assert!(!cache.is_stale("google.com", Duration::from_secs(300)));

        let old = SystemTime::now() - Duration::from_secs(600);
        cache.record_fetch("github.com", old);
        assert!(cache.is_stale("github.com", Duration::from_secs(300)));
    }

    #[test]
    fn persisted_state_tolerates_missing_fields() {
        let parsed: PersistedState = serde_json::from_str("{}").expect("empty object");
        assert_eq!(parsed.preferences, Preferences::default());

        let parsed: PersistedState =
            serde_json::from_str(r#"{"preferences":{"lang":"fr"}}"#).expect("partial");
        assert_eq!(parsed.preferences.lang, Language::Fr);
        assert_eq!(parsed.preferences.size, WidgetSize::Medium);
    }
}
