//! Deterministic stand-in assessments shown while the fraud-check service is
//! pending, unreachable, or not configured.

use super::entities::{normalize_domain, RiskAssessment, VerificationLevel};
use super::risk::RiskLevel;

struct KnownDomain {
    domain: &'static str,
    trust_score: f64,
    risk_level: RiskLevel,
    verification_level: VerificationLevel,
    completed_transactions: u32,
}

const KNOWN_DOMAINS: &[KnownDomain] = &[
    KnownDomain {
        domain: "google.com",
        trust_score: 95.0,
        risk_level: RiskLevel::Low,
        verification_level: VerificationLevel::Full,
        completed_transactions: 12_840,
    },
    KnownDomain {
        domain: "github.com",
        trust_score: 93.0,
        risk_level: RiskLevel::Low,
        verification_level: VerificationLevel::Full,
        completed_transactions: 8_215,
    },
    KnownDomain {
        domain: "amazon.com",
        trust_score: 91.0,
        risk_level: RiskLevel::Low,
        verification_level: VerificationLevel::Full,
        completed_transactions: 21_402,
    },
    KnownDomain {
        domain: "paypal.com",
        trust_score: 88.0,
        risk_level: RiskLevel::Low,
        verification_level: VerificationLevel::Full,
        completed_transactions: 15_377,
    },
    KnownDomain {
        domain: "example.com",
        trust_score: 62.0,
        risk_level: RiskLevel::Medium,
        verification_level: VerificationLevel::Basic,
        completed_transactions: 14,
    },
    KnownDomain {
        domain: "cheap-deals-online.net",
        trust_score: 38.0,
        risk_level: RiskLevel::High,
        verification_level: VerificationLevel::None,
        completed_transactions: 3,
    },
    KnownDomain {
        domain: "phishing-test.org",
        trust_score: 15.0,
        risk_level: RiskLevel::Critical,
        verification_level: VerificationLevel::None,
        completed_transactions: 0,
    },
    KnownDomain {
        domain: "malware-test.com",
        trust_score: 8.0,
        risk_level: RiskLevel::Critical,
        verification_level: VerificationLevel::None,
        completed_transactions: 0,
    },
];

pub fn demo_assessment(domain: &str) -> RiskAssessment {
    let normalized = normalize_domain(domain);
    if let Some(known) = KNOWN_DOMAINS.iter().find(|k| k.domain == normalized) {
        return RiskAssessment {
            domain: normalized,
            trust_score: known.trust_score,
            risk_level: known.risk_level,
            verification_level: known.verification_level,
            completed_transactions: known.completed_transactions,
        };
    }

    let checksum = checksum(&normalized);
    let trust_score = 40.0 + (checksum % 41) as f64;
    RiskAssessment {
        domain: normalized,
        trust_score,
        risk_level: risk_level_for_score(trust_score),
        verification_level: if trust_score >= 70.0 {
            VerificationLevel::Basic
        } else {
            VerificationLevel::None
        },
        completed_transactions: checksum % 50,
    }
}

/// Buckets a 0–100 score. Only used to synthesize demo data; real assessments
/// carry their own risk level.
pub fn risk_level_for_score(score: f64) -> RiskLevel {
    match score {
        s if s >= 80.0 => RiskLevel::Low,
        s if s >= 60.0 => RiskLevel::Medium,
        s if s >= 40.0 => RiskLevel::High,
        _ => RiskLevel::Critical,
    }
}

fn checksum(input: &str) -> u32 {
    input
        .bytes()
        .enumerate()
        .fold(0_u32, |acc, (idx, byte)| {
            acc.wrapping_add((idx as u32 + 1).wrapping_mul(byte as u32))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn google_is_low_risk() {
        let assessment = demo_assessment("google.com");
        assert_eq!(assessment.trust_score, 95.0);
        assert_eq!(assessment.risk_level, RiskLevel::Low);
    }

    #[test]
    fn phishing_test_is_critical() {
        let assessment = demo_assessment("phishing-test.org");
        assert_eq!(assessment.trust_score, 15.0);
        assert_eq!(assessment.risk_level, RiskLevel::Critical);
    }

    #[test]
    fn known_lookup_ignores_case_and_www() {
        assert_eq!(
            demo_assessment("https://WWW.Google.com/search"),
            demo_assessment("google.com")
        );
    }

    #[test]
    fn unknown_domains_are_deterministic_and_bounded() {
        let first = demo_assessment("some-shop.example");
        let second = demo_assessment("some-shop.example");
        assert_eq!(first, second);
        assert!((40.0..=80.0).contains(&first.trust_score));
        assert_eq!(first.risk_level, risk_level_for_score(first.trust_score));
    }
}
