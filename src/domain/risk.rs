//! Risk classification: risk level → tier descriptor, and the 0–10 score tables
//! used by the trust-score circle.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Coarse risk bucket supplied by the fraud-check service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    #[default]
    Critical,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Low,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }

    /// Lenient parse: anything unrecognised is treated as critical.
    pub fn parse_lenient(raw: &str) -> Self {
        raw.parse().unwrap_or(RiskLevel::Critical)
    }
}

impl FromStr for RiskLevel {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            "critical" => Ok(RiskLevel::Critical),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown variant `{0}`")]
pub struct UnknownVariant(pub String);

/// Palette used by tier descriptors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TierColor {
    Green,
    Yellow,
    Orange,
    Red,
}

impl TierColor {
    pub fn hex(&self) -> &'static str {
        match self {
            TierColor::Green => "#22c55e",
            TierColor::Yellow => "#eab308",
            TierColor::Orange => "#f97316",
            TierColor::Red => "#ef4444",
        }
    }
}

/// Fixed visual record associated with a risk level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TierDescriptor {
    pub color: TierColor,
    pub icon: &'static str,
    pub label: &'static str,
    pub text_color: &'static str,
    pub border_color: &'static str,
    pub bg_color: &'static str,
}

const LOW_TIER: TierDescriptor = TierDescriptor {
    color: TierColor::Green,
    icon: "🛡️",
    label: "Low Risk",
    text_color: "text-emerald-300",
    border_color: "border-emerald-500/40",
    bg_color: "bg-emerald-500/10",
};

const MEDIUM_TIER: TierDescriptor = TierDescriptor {
    color: TierColor::Yellow,
    icon: "⚠️",
    label: "Medium Risk",
    text_color: "text-amber-300",
    border_color: "border-amber-500/40",
    bg_color: "bg-amber-500/10",
};

const HIGH_TIER: TierDescriptor = TierDescriptor {
    color: TierColor::Orange,
    icon: "🚩",
    label: "High Risk",
    text_color: "text-orange-300",
    border_color: "border-orange-500/40",
    bg_color: "bg-orange-500/10",
};

const CRITICAL_TIER: TierDescriptor = TierDescriptor {
    color: TierColor::Red,
    icon: "⛔",
    label: "Critical Risk",
    text_color: "text-rose-300",
    border_color: "border-rose-500/40",
    bg_color: "bg-rose-500/10",
};

pub fn classify(level: RiskLevel) -> TierDescriptor {
    match level {
        RiskLevel::Low => LOW_TIER,
        RiskLevel::Medium => MEDIUM_TIER,
        RiskLevel::High => HIGH_TIER,
        RiskLevel::Critical => CRITICAL_TIER,
    }
}

/// Five-bucket label for a 0–10 trust score. Variants are ordered worst → best.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScoreLabel {
    Poor,
    Fair,
    Good,
    VeryGood,
    Excellent,
}

impl ScoreLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreLabel::Poor => "Poor",
            ScoreLabel::Fair => "Fair",
            ScoreLabel::Good => "Good",
            ScoreLabel::VeryGood => "Very Good",
            ScoreLabel::Excellent => "Excellent",
        }
    }
}

pub fn score_label(score: f64) -> ScoreLabel {
    match score {
        s if s >= 9.0 => ScoreLabel::Excellent,
        s if s >= 7.0 => ScoreLabel::VeryGood,
        s if s >= 5.0 => ScoreLabel::Good,
        s if s >= 3.0 => ScoreLabel::Fair,
        _ => ScoreLabel::Poor,
    }
}

/// Three-bucket color for a 0–10 trust score. Deliberately coarser than [`score_label`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScoreColor {
    Green,
    Yellow,
    Red,
}

impl ScoreColor {
    pub fn stroke_class(&self) -> &'static str {
        match self {
            ScoreColor::Green => "stroke-emerald-400",
            ScoreColor::Yellow => "stroke-amber-400",
            ScoreColor::Red => "stroke-rose-400",
        }
    }

    pub fn text_class(&self) -> &'static str {
        match self {
            ScoreColor::Green => "text-emerald-300",
            ScoreColor::Yellow => "text-amber-300",
            ScoreColor::Red => "text-rose-300",
        }
    }
}

pub fn score_color(score: f64) -> ScoreColor {
    match score {
        s if s >= 8.0 => ScoreColor::Green,
        s if s >= 5.0 => ScoreColor::Yellow,
        _ => ScoreColor::Red,
    }
}

/// Percentage of the progress ring to fill for a 0–10 score, always in `[0, 100]`.
pub fn progress_percent(score: f64) -> f64 {
    let pct = score / 10.0 * 100.0;
    if pct.is_nan() {
        return 0.0;
    }
    pct.clamp(0.0, 100.0)
}

/// Stroke dash offset for a ring of the given radius filled to `percent`.
pub fn ring_dash_offset(radius: f64, percent: f64) -> f64 {
    let circumference = 2.0 * std::f64::consts::PI * radius;
    circumference * (1.0 - percent.clamp(0.0, 100.0) / 100.0)
}

/// Cosmetic certification banding of a 0–100 trust score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CertificationTier {
    Uncertified,
    Bronze,
    Silver,
    Gold,
}

impl CertificationTier {
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 90.0 => CertificationTier::Gold,
            s if s >= 75.0 => CertificationTier::Silver,
            s if s >= 60.0 => CertificationTier::Bronze,
            _ => CertificationTier::Uncertified,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CertificationTier::Gold => "Gold Certified",
            CertificationTier::Silver => "Silver Certified",
            CertificationTier::Bronze => "Bronze Certified",
            CertificationTier::Uncertified => "Not Certified",
        }
    }

    pub fn classes(&self) -> &'static str {
        match self {
            CertificationTier::Gold => "border-yellow-400/50 bg-yellow-400/10 text-yellow-200",
            CertificationTier::Silver => "border-slate-300/50 bg-slate-300/10 text-slate-200",
            CertificationTier::Bronze => "border-orange-700/50 bg-orange-700/10 text-orange-200",
            CertificationTier::Uncertified => "border-slate-700 bg-slate-800/40 text-slate-400",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_is_total_with_labels_from_palette() {
        let palette = [
            TierColor::Green,
            TierColor::Yellow,
            TierColor::Orange,
            TierColor::Red,
        ];
        for level in RiskLevel::ALL {
            let tier = classify(level);
            assert!(!tier.label.is_empty());
            assert!(palette.contains(&tier.color));
            assert_eq!(tier, classify(level));
        }
    }

    #[test]
    fn each_level_gets_its_own_color() {
        assert_eq!(classify(RiskLevel::Low).color, TierColor::Green);
        assert_eq!(classify(RiskLevel::Medium).color, TierColor::Yellow);
        assert_eq!(classify(RiskLevel::High).color, TierColor::Orange);
        assert_eq!(classify(RiskLevel::Critical).color, TierColor::Red);
    }

    #[test]
    fn unknown_risk_level_falls_back_to_critical() {
        assert_eq!(RiskLevel::parse_lenient("LOW"), RiskLevel::Low);
        assert_eq!(RiskLevel::parse_lenient(" medium "), RiskLevel::Medium);
        assert_eq!(RiskLevel::parse_lenient("severe"), RiskLevel::Critical);
        assert_eq!(RiskLevel::parse_lenient(""), RiskLevel::Critical);
    }

    #[test]
    fn score_label_thresholds() {
        assert_eq!(score_label(9.0), ScoreLabel::Excellent);
        assert_eq!(score_label(8.99), ScoreLabel::VeryGood);
        assert_eq!(score_label(7.0), ScoreLabel::VeryGood);
        assert_eq!(score_label(5.0), ScoreLabel::Good);
        assert_eq!(score_label(3.0), ScoreLabel::Fair);
        assert_eq!(score_label(2.99), ScoreLabel::Poor);
        assert_eq!(score_label(-4.0), ScoreLabel::Poor);
        assert_eq!(ScoreLabel::VeryGood.as_str(), "Very Good");
    }

    #[test]
    fn score_label_is_monotonic() {
        let samples: Vec<f64> = (-20..=120).map(|n| n as f64 / 10.0).collect();
        for pair in samples.windows(2) {
            assert!(score_label(pair[1]) >= score_label(pair[0]), "{pair:?}");
        }
    }

    #[test]
    fn score_color_uses_its_own_thresholds() {
        assert_eq!(score_color(8.0), ScoreColor::Green);
        assert_eq!(score_color(7.9), ScoreColor::Yellow);
        assert_eq!(score_color(5.0), ScoreColor::Yellow);
        assert_eq!(score_color(4.9), ScoreColor::Red);
        // 7.5 is "Very Good" but only yellow.
        assert_eq!(score_label(7.5), ScoreLabel::VeryGood);
        assert_eq!(score_color(7.5), ScoreColor::Yellow);
    }

    #[test]
    fn progress_is_clamped() {
        for score in [-50.0, -0.1, 0.0, 3.3, 10.0, 11.0, 1e9, f64::NAN, f64::INFINITY] {
            let pct = progress_percent(score);
            assert!((0.0..=100.0).contains(&pct), "{score} -> {pct}");
        }
        assert_eq!(progress_percent(7.5), 75.0);
        assert_eq!(progress_percent(42.0), 100.0);
    }

    #[test]
    fn dash_offset_spans_full_ring() {
        let full = ring_dash_offset(40.0, 0.0);
        assert!((full - 2.0 * std::f64::consts::PI * 40.0).abs() < 1e-9);
        assert_eq!(ring_dash_offset(40.0, 100.0), 0.0);
    }

    #[test]
    fn certification_bands() {
        assert_eq!(CertificationTier::from_score(95.0), CertificationTier::Gold);
        assert_eq!(CertificationTier::from_score(75.0), CertificationTier::Silver);
        assert_eq!(CertificationTier::from_score(60.0), CertificationTier::Bronze);
        assert_eq!(
            CertificationTier::from_score(15.0),
            CertificationTier::Uncertified
        );
    }
}
