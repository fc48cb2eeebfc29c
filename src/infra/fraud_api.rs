//! Thin asynchronous client for the fraud-check service.
//!
//! - One endpoint: `GET api/fraud-check?domain=<host>` returning
//!   `{trustScore, riskLevel, ...}`.
//! - Keeps a per-domain in-memory cache (5 minutes by default) and serves a
//!   stale entry when a request fails. There is no retry.

use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, SystemTime},
};

use reqwest::{Client, Url};
use serde::Deserialize;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::config::DEFAULT_CACHE_TTL;
use crate::domain::{normalize_domain, RiskAssessment, RiskLevel, VerificationLevel};

const USER_AGENT: &str = concat!("trustverify/", env!("CARGO_PKG_VERSION"));
const ASSESSMENT_PATH: &str = "api/fraud-check";

#[derive(Debug, Error)]
pub enum FraudApiError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("no domain given")]
    EmptyDomain,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CacheStatus {
    Fresh,
    Cached,
    Stale,
}

#[derive(Clone, Debug)]
pub struct CachedPayload<T> {
    pub data: T,
    pub fetched_at: SystemTime,
    pub status: CacheStatus,
}

impl<T> CachedPayload<T> {
    fn new(data: T, fetched_at: SystemTime, status: CacheStatus) -> Self {
        Self {
            data,
            fetched_at,
            status,
        }
    }
}

#[derive(Clone)]
pub struct FraudCheckClient {
    http: Client,
    base_url: Url,
    cache: Arc<Mutex<HashMap<String, Cached<RiskAssessment>>>>,
    ttl: Duration,
}

impl FraudCheckClient {
    pub fn new(base_url: Url) -> Result<Self, FraudApiError> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            base_url,
            cache: Arc::new(Mutex::new(HashMap::new())),
            ttl: DEFAULT_CACHE_TTL,
        })
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub async fn get_assessment(
        &self,
        domain: &str,
    ) -> Result<CachedPayload<RiskAssessment>, FraudApiError> {
        let key = normalize_domain(domain);
        if key.is_empty() {
            return Err(FraudApiError::EmptyDomain);
        }

        if let Some(payload) = self.cached(&key).await {
            debug!(domain = %key, "serving cached assessment");
            return Ok(payload);
        }

        let url = self.assessment_url(&key)?;
        info!(%url, "requesting fraud check");

        match self.fetch(url).await {
            Ok(dto) => {
                let assessment = dto.into_assessment(&key);
                Ok(self.store(&key, assessment).await)
            }
            Err(error) => {
                if let Some(stale) = self.cached_stale(&key).await {
                    warn!(domain = %key, %error, "fraud check failed; serving stale assessment");
                    return Ok(stale);
                }
                warn!(domain = %key, %error, "fraud check failed");
                Err(error)
            }
        }
    }

    pub async fn clear_cache(&self) {
        self.cache.lock().await.clear();
    }

    fn assessment_url(&self, domain: &str) -> Result<Url, FraudApiError> {
        let mut url = self.base_url.join(ASSESSMENT_PATH)?;
        url.query_pairs_mut().append_pair("domain", domain);
        Ok(url)
    }

    async fn fetch(&self, url: Url) -> Result<AssessmentDto, FraudApiError> {
        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    async fn cached(&self, key: &str) -> Option<CachedPayload<RiskAssessment>> {
        let cache = self.cache.lock().await;
        cache.get(key).and_then(|entry| entry.if_fresh(self.ttl))
    }

    async fn cached_stale(&self, key: &str) -> Option<CachedPayload<RiskAssessment>> {
        let cache = self.cache.lock().await;
        cache.get(key).map(Cached::stale)
    }

    async fn store(&self, key: &str, data: RiskAssessment) -> CachedPayload<RiskAssessment> {
        self.store_at(key, data, SystemTime::now()).await
    }

    async fn store_at(
        &self,
        key: &str,
        data: RiskAssessment,
        fetched_at: SystemTime,
    ) -> CachedPayload<RiskAssessment> {
        let payload = CachedPayload::new(data.clone(), fetched_at, CacheStatus::Fresh);
        let mut cache = self.cache.lock().await;
        cache.insert(key.to_string(), Cached::new(data, fetched_at));
        payload
    }
}

struct Cached<T> {
    value: T,
    fetched_at: SystemTime,
}

impl<T: Clone> Cached<T> {
    fn new(value: T, fetched_at: SystemTime) -> Self {
        Self { value, fetched_at }
    }

    fn if_fresh(&self, ttl: Duration) -> Option<CachedPayload<T>> {
        if self
            .fetched_at
            .elapsed()
            .map(|elapsed| elapsed <= ttl)
            .unwrap_or(false)
        {
            Some(CachedPayload::new(
                self.value.clone(),
                self.fetched_at,
                CacheStatus::Cached,
            ))
        } else {
            None
        }
    }

    fn stale(&self) -> CachedPayload<T> {
        CachedPayload::new(self.value.clone(), self.fetched_at, CacheStatus::Stale)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AssessmentDto {
    trust_score: f64,
    #[serde(default)]
    risk_level: Option<String>,
    #[serde(default)]
    verification_level: Option<String>,
    #[serde(default)]
    completed_transactions: Option<u32>,
}

impl AssessmentDto {
    fn into_assessment(self, domain: &str) -> RiskAssessment {
        RiskAssessment {
            domain: domain.to_string(),
            trust_score: self.trust_score,
            risk_level: self
                .risk_level
                .as_deref()
                .map(RiskLevel::parse_lenient)
                .unwrap_or(RiskLevel::Critical),
            verification_level: self
                .verification_level
                .as_deref()
                .map(VerificationLevel::parse_lenient)
                .unwrap_or_default(),
            completed_transactions: self.completed_transactions.unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::demo_assessment;
    use pretty_assertions::assert_eq;

    // Nothing listens on the discard port, so every request fails fast.
    fn unreachable_client() -> FraudCheckClient {
        let base = Url::parse("http://127.0.0.1:9/").expect("static url");
        FraudCheckClient::new(base).expect("client builds")
    }

    #[test]
    fn dto_maps_camel_case_payload() {
        let dto: AssessmentDto =
            serde_json::from_str(r#"{"trustScore": 72, "riskLevel": "MEDIUM"}"#).expect("json");
        let assessment = dto.into_assessment("shop.example");
        assert_eq!(
            assessment,
            RiskAssessment {
                domain: "shop.example".to_string(),
                trust_score: 72.0,
                risk_level: RiskLevel::Medium,
                verification_level: VerificationLevel::None,
                completed_transactions: 0,
            }
        );
    }

    #[test]
    fn unknown_or_missing_risk_level_is_critical() {
        let dto: AssessmentDto =
            serde_json::from_str(r#"{"trustScore": 90, "riskLevel": "unclear"}"#).expect("json");
        assert_eq!(dto.into_assessment("a.com").risk_level, RiskLevel::Critical);

        let dto: AssessmentDto = serde_json::from_str(r#"{"trustScore": 90}"#).expect("json");
        assert_eq!(dto.into_assessment("a.com").risk_level, RiskLevel::Critical);
    }

    #[test]
    fn url_carries_normalized_domain() {
        let client = unreachable_client();
        let url = client.assessment_url("google.com").expect("url");
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:9/api/fraud-check?domain=google.com"
        );
    }

    #[test]
    fn freshness_window() {
        let fresh = Cached::new(1_u8, SystemTime::now());
        assert_eq!(
            fresh.if_fresh(Duration::from_secs(300)).map(|p| p.status),
            Some(CacheStatus::Cached)
        );

        let old = Cached::new(1_u8, SystemTime::now() - Duration::from_secs(301));
        assert!(old.if_fresh(Duration::from_secs(300)).is_none());
        assert_eq!(old.stale().status, CacheStatus::Stale);
    }

    #[tokio::test]
    async fn empty_domain_is_rejected_without_request() {
        let client = unreachable_client();
        assert!(matches!(
            client.get_assessment("   ").await,
            Err(FraudApiError::EmptyDomain)
        ));
    }

    #[tokio::test]
    async fn fresh_entry_is_served_from_cache() {
        let client = unreachable_client();
        client
            .store("google.com", demo_assessment("google.com"))
            .await;

        let payload = client
            .get_assessment("https://www.google.com")
            .await
            .expect("cached");
        assert_eq!(payload.status, CacheStatus::Cached);
        assert_eq!(payload.data.trust_score, 95.0);
    }

    #[tokio::test]
    async fn failed_request_falls_back_to_stale_entry() {
        let client = unreachable_client().with_ttl(Duration::from_secs(60));
        let old = SystemTime::now() - Duration::from_secs(120);
        client
            .store_at("example.com", demo_assessment("example.com"), old)
            .await;

        let payload = client.get_assessment("example.com").await.expect("stale");
        assert_eq!(payload.status, CacheStatus::Stale);
    }

    #[tokio::test]
    async fn failed_request_without_cache_is_an_error() {
        let client = unreachable_client();
        assert!(matches!(
            client.get_assessment("nowhere.example").await,
            Err(FraudApiError::Http(_))
        ));
    }

    #[tokio::test]
    async fn clear_cache_drops_entries() {
        let client = unreachable_client();
        client
            .store("google.com", demo_assessment("google.com"))
            .await;
        client.clear_cache().await;
        assert!(client.cached("google.com").await.is_none());
    }
}
