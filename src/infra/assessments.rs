//! Resolves the assessment to display for a domain: the service's answer when
//! available, the demo table otherwise. Never fails.

use std::time::SystemTime;

use tracing::debug;

use super::fraud_api::{CacheStatus, FraudCheckClient};
use crate::domain::{demo_assessment, RiskAssessment};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssessmentSource {
    Live,
    Cached,
    Stale,
    Demo,
}

impl AssessmentSource {
    pub fn caption(&self) -> &'static str {
        match self {
            AssessmentSource::Live => "Live result",
            AssessmentSource::Cached => "Cached result (under 5 minutes old)",
            AssessmentSource::Stale => "Service unavailable, showing last known result",
            AssessmentSource::Demo => "Demo data",
        }
    }
}

impl From<CacheStatus> for AssessmentSource {
    fn from(status: CacheStatus) -> Self {
        match status {
            CacheStatus::Fresh => AssessmentSource::Live,
            CacheStatus::Cached => AssessmentSource::Cached,
            CacheStatus::Stale => AssessmentSource::Stale,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LoadedAssessment {
    pub assessment: RiskAssessment,
    pub source: AssessmentSource,
    /// When the service produced the data; `None` for demo data.
    pub fetched_at: Option<SystemTime>,
}

impl LoadedAssessment {
    pub fn demo(domain: &str) -> Self {
        Self {
            assessment: demo_assessment(domain),
            source: AssessmentSource::Demo,
            fetched_at: None,
        }
    }
}

pub async fn resolve_assessment(
    client: Option<&FraudCheckClient>,
    domain: &str,
) -> LoadedAssessment {
    let Some(client) = client else {
        debug!(domain, "no fraud-check service configured; using demo data");
        return LoadedAssessment::demo(domain);
    };

    match client.get_assessment(domain).await {
        Ok(payload) => LoadedAssessment {
            assessment: payload.data,
            source: payload.status.into(),
            fetched_at: Some(payload.fetched_at),
        },
        Err(err) => {
            debug!(domain, %err, "falling back to demo data");
            LoadedAssessment::demo(domain)
        }
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Url;

    use super::*;
    use crate::domain::RiskLevel;

    #[tokio::test]
    async fn demo_mode_uses_demo_table() {
        let loaded = resolve_assessment(None, "google.com").await;
        assert_eq!(loaded.source, AssessmentSource::Demo);
        assert_eq!(loaded.assessment.trust_score, 95.0);
        assert_eq!(loaded.assessment.risk_level, RiskLevel::Low);
        assert_eq!(loaded.fetched_at, None);
    }

    #[tokio::test]
    async fn failed_fetch_degrades_to_demo() {
        let client = FraudCheckClient::new(Url::parse("http://127.0.0.1:9/").expect("url"))
            .expect("client");
        let loaded = resolve_assessment(Some(&client), "phishing-test.org").await;
        assert_eq!(loaded.source, AssessmentSource::Demo);
        assert_eq!(loaded.assessment.trust_score, 15.0);
        assert_eq!(loaded.assessment.risk_level, RiskLevel::Critical);
    }
}
