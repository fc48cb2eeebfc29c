//! Query parameters for the embeddable widget and its per-language labels.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::entities::normalize_domain;
use super::risk::{RiskLevel, UnknownVariant};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Es, Language::Fr];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
        }
    }

    pub fn strings(&self) -> &'static WidgetStrings {
        match self {
            Language::En => &EN,
            Language::Es => &ES,
            Language::Fr => &FR,
        }
    }
}

impl FromStr for Language {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "es" => Ok(Language::Es),
            "fr" => Ok(Language::Fr),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl WidgetSize {
    pub const ALL: [WidgetSize; 3] = [WidgetSize::Small, WidgetSize::Medium, WidgetSize::Large];

    pub fn code(&self) -> &'static str {
        match self {
            WidgetSize::Small => "small",
            WidgetSize::Medium => "medium",
            WidgetSize::Large => "large",
        }
    }

    /// Pixel dimensions used for the iframe snippet.
    pub fn frame_dimensions(&self) -> (u32, u32) {
        match self {
            WidgetSize::Small => (220, 90),
            WidgetSize::Medium => (300, 140),
            WidgetSize::Large => (380, 200),
        }
    }
}

impl FromStr for WidgetSize {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(WidgetSize::Small),
            "medium" => Ok(WidgetSize::Medium),
            "large" => Ok(WidgetSize::Large),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

/// Parsed widget query. `domain` is `None` when the parameter is absent or blank.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WidgetParams {
    pub domain: Option<String>,
    pub lang: Language,
    pub size: WidgetSize,
}

impl WidgetParams {
    /// Unrecognised `lang`/`size` values are ignored and the defaults kept.
    /// A domain that normalizes to nothing (`https://`, `/`) counts as absent.
    pub fn from_query(domain: &str, lang: &str, size: &str) -> Self {
        let domain = normalize_domain(domain);
        Self {
            domain: (!domain.is_empty()).then_some(domain),
            lang: lang.parse().unwrap_or_default(),
            size: size.parse().unwrap_or_default(),
        }
    }
}

pub struct WidgetStrings {
    pub title: &'static str,
    pub trust_score: &'static str,
    pub transactions: &'static str,
    pub no_domain: &'static str,
    pub loading: &'static str,
    pub powered_by: &'static str,
    pub low: &'static str,
    pub medium: &'static str,
    pub high: &'static str,
    pub critical: &'static str,
}

impl WidgetStrings {
    pub fn risk_label(&self, level: RiskLevel) -> &'static str {
        match level {
            RiskLevel::Low => self.low,
            RiskLevel::Medium => self.medium,
            RiskLevel::High => self.high,
            RiskLevel::Critical => self.critical,
        }
    }
}

static EN: WidgetStrings = WidgetStrings {
    title: "TrustVerify Check",
    trust_score: "Trust Score",
    transactions: "completed transactions",
    no_domain: "No domain specified. Add ?domain=example.com to the widget URL.",
    loading: "Checking…",
    powered_by: "Powered by TrustVerify",
    low: "Low Risk",
    medium: "Medium Risk",
    high: "High Risk",
    critical: "Critical Risk",
};

static ES: WidgetStrings = WidgetStrings {
    title: "Verificación TrustVerify",
    trust_score: "Puntuación de confianza",
    transactions: "transacciones completadas",
    no_domain: "No se especificó ningún dominio. Añade ?domain=ejemplo.com a la URL del widget.",
    loading: "Comprobando…",
    powered_by: "Con tecnología de TrustVerify",
    low: "Riesgo bajo",
    medium: "Riesgo medio",
    high: "Riesgo alto",
    critical: "Riesgo crítico",
};

static FR: WidgetStrings = WidgetStrings {
    title: "Vérification TrustVerify",
    trust_score: "Score de confiance",
    transactions: "transactions réalisées",
    no_domain: "Aucun domaine indiqué. Ajoutez ?domain=exemple.com à l'URL du widget.",
    loading: "Vérification…",
    powered_by: "Propulsé par TrustVerify",
    low: "Risque faible",
    medium: "Risque moyen",
    high: "Risque élevé",
    critical: "Risque critique",
};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn recognised_values_are_parsed() {
        let params = WidgetParams::from_query("google.com", "FR", "large");
        assert_eq!(
            params,
            WidgetParams {
                domain: Some("google.com".to_string()),
                lang: Language::Fr,
                size: WidgetSize::Large,
            }
        );
    }

    #[test]
    fn unknown_values_keep_defaults() {
        let params = WidgetParams::from_query("google.com", "de", "huge");
        assert_eq!(params.lang, Language::En);
        assert_eq!(params.size, WidgetSize::Medium);
    }

    #[test]
    fn blank_domain_is_none() {
        assert_eq!(WidgetParams::from_query("", "", "").domain, None);
        assert_eq!(WidgetParams::from_query("   ", "es", "small").domain, None);
    }

    #[test]
    fn domain_without_host_is_none() {
        for raw in ["https://", "/", "?x", "http:///path"] {
            assert_eq!(WidgetParams::from_query(raw, "", "").domain, None, "{raw}");
        }
    }

    #[test]
    fn domain_is_normalized() {
        let params = WidgetParams::from_query("https://WWW.Example.com/shop?x=1", "", "");
        assert_eq!(params.domain.as_deref(), Some("example.com"));
    }

    #[test]
    fn every_language_labels_every_level() {
        for lang in Language::ALL {
            for level in RiskLevel::ALL {
                assert!(!lang.strings().risk_label(level).is_empty());
            }
        }
    }
}
