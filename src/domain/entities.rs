use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::risk::{RiskLevel, UnknownVariant};

/// Account/domain verification status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationLevel {
    #[default]
    None,
    Basic,
    Full,
}

impl VerificationLevel {
    pub fn parse_lenient(raw: &str) -> Self {
        raw.parse().unwrap_or_default()
    }

    pub fn descriptor(&self) -> VerificationDescriptor {
        match self {
            VerificationLevel::Full => VerificationDescriptor {
                label: "Fully Verified",
                icon: "✅",
                classes: "border-emerald-500/40 bg-emerald-500/10 text-emerald-200",
            },
            VerificationLevel::Basic => VerificationDescriptor {
                label: "Basic Verification",
                icon: "☑️",
                classes: "border-sky-500/40 bg-sky-500/10 text-sky-200",
            },
            VerificationLevel::None => VerificationDescriptor {
                label: "Unverified",
                icon: "❔",
                classes: "border-slate-600/60 bg-slate-700/40 text-slate-300",
            },
        }
    }
}

impl FromStr for VerificationLevel {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(VerificationLevel::None),
            "basic" => Ok(VerificationLevel::Basic),
            "full" => Ok(VerificationLevel::Full),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerificationDescriptor {
    pub label: &'static str,
    pub icon: &'static str,
    pub classes: &'static str,
}

/// Risk data for one subject, produced by the fraud-check service or the demo table.
///
/// `risk_level` and `trust_score` are both taken as given; they are never
/// reconciled against each other.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub domain: String,
    /// 0–100, higher is more trustworthy.
    pub trust_score: f64,
    pub risk_level: RiskLevel,
    pub verification_level: VerificationLevel,
    pub completed_transactions: u32,
}

impl RiskAssessment {
    /// The trust score on the 0–10 scale used by the score circle.
    pub fn score_out_of_ten(&self) -> f64 {
        self.trust_score / 10.0
    }
}

/// Canonical host form used for cache keys and demo lookups:
/// scheme, `www.`, path and port are dropped, case is folded.
pub fn normalize_domain(raw: &str) -> String {
    let trimmed = raw.trim();
    let without_scheme = trimmed
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(trimmed);
    let host = without_scheme
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    let host = host.split(':').next().unwrap_or_default();
    let host = host.to_ascii_lowercase();
    match host.strip_prefix("www.") {
        Some(rest) => rest.to_string(),
        None => host,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_noise() {
        assert_eq!(normalize_domain("  Google.COM "), "google.com");
        assert_eq!(normalize_domain("https://www.github.com/rust-lang"), "github.com");
        assert_eq!(normalize_domain("http://localhost:8080?x=1"), "localhost");
        assert_eq!(normalize_domain(""), "");
    }

    #[test]
    fn verification_parse_defaults_to_none() {
        assert_eq!(VerificationLevel::parse_lenient("FULL"), VerificationLevel::Full);
        assert_eq!(VerificationLevel::parse_lenient("basic"), VerificationLevel::Basic);
        assert_eq!(VerificationLevel::parse_lenient("kyc"), VerificationLevel::None);
    }

    #[test]
    fn descriptors_have_labels() {
        for level in [
            VerificationLevel::None,
            VerificationLevel::Basic,
            VerificationLevel::Full,
        ] {
            assert!(!level.descriptor().label.is_empty());
        }
    }
}
