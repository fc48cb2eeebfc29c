//! Badge view models. Each variant is a layout of the same tier descriptor;
//! components only lay these out.

use time::OffsetDateTime;

use super::entities::{RiskAssessment, VerificationDescriptor};
use super::risk::{
    classify, progress_percent, score_color, score_label, CertificationTier, ScoreColor,
    ScoreLabel, TierDescriptor,
};
use super::widget::{Language, WidgetSize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BadgeVariant {
    #[default]
    Compact,
    Detailed,
    Embeddable,
}

impl BadgeVariant {
    pub const ALL: [BadgeVariant; 3] = [
        BadgeVariant::Compact,
        BadgeVariant::Detailed,
        BadgeVariant::Embeddable,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BadgeVariant::Compact => "Compact",
            BadgeVariant::Detailed => "Detailed",
            BadgeVariant::Embeddable => "Embeddable",
        }
    }
}

pub const SUPPORT_EMAIL: &str = "support@trustverify.io";
pub const CONTACT_PATH: &str = "/contact";

#[derive(Clone, Debug, PartialEq)]
pub struct BadgeView {
    pub variant: BadgeVariant,
    pub domain: String,
    pub tier: TierDescriptor,
    pub score_display: String,
    pub score_out_of_ten: f64,
    pub score_label: ScoreLabel,
    pub score_color: ScoreColor,
    pub progress: f64,
    pub verification: VerificationDescriptor,
    pub transactions_display: String,
    /// Only set for detailed and embeddable layouts.
    pub certification: Option<CertificationTier>,
    /// Cosmetic display string; not a certificate and never persisted.
    pub cert_id: Option<String>,
    pub report_href: String,
    pub contact_href: &'static str,
}

pub fn render(
    assessment: &RiskAssessment,
    variant: BadgeVariant,
    now: OffsetDateTime,
) -> BadgeView {
    let score10 = assessment.score_out_of_ten();
    let with_extras = !matches!(variant, BadgeVariant::Compact);

    BadgeView {
        variant,
        domain: assessment.domain.clone(),
        tier: classify(assessment.risk_level),
        score_display: format!("{:.0}", assessment.trust_score),
        score_out_of_ten: score10,
        score_label: score_label(score10),
        score_color: score_color(score10),
        progress: progress_percent(score10),
        verification: assessment.verification_level.descriptor(),
        transactions_display: format_count(assessment.completed_transactions),
        certification: with_extras.then(|| CertificationTier::from_score(assessment.trust_score)),
        cert_id: with_extras.then(|| cert_id(now)),
        report_href: report_href(&assessment.domain),
        contact_href: CONTACT_PATH,
    }
}

/// `mailto:` link to support. The domain is percent-encoded so it cannot add
/// headers of its own.
pub fn report_href(domain: &str) -> String {
    let subject: String =
        url::form_urlencoded::byte_serialize(format!("Report {domain}").as_bytes()).collect();
    // mailto (RFC 6068) does not decode `+` as a space; literal pluses are already `%2B`.
    format!("mailto:{SUPPORT_EMAIL}?subject={}", subject.replace('+', "%20"))
}

/// `TV-` followed by the unix timestamp in upper-case base 36.
pub fn cert_id(now: OffsetDateTime) -> String {
    const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    let mut value = now.unix_timestamp().max(0) as u64;
    let mut out = Vec::new();
    loop {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
        if value == 0 {
            break;
        }
    }
    out.reverse();
    format!("TV-{}", String::from_utf8_lossy(&out))
}

/// Thousands-separated count, e.g. `12,840`.
pub fn format_count(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// HTML snippet site owners paste to embed the widget.
pub fn embed_snippet(origin: &str, domain: &str, lang: Language, size: WidgetSize) -> String {
    let (width, height) = size.frame_dimensions();
    let mut url = match url::Url::parse(origin).and_then(|base| base.join("widget")) {
        Ok(url) => url,
        Err(_) => return String::new(),
    };
    url.query_pairs_mut()
        .append_pair("domain", domain)
        .append_pair("lang", lang.code())
        .append_pair("size", size.code());
    format!(
        r#"<iframe src="{url}" width="{width}" height="{height}" style="border:0" title="TrustVerify badge"></iframe>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::demo::demo_assessment;
    use crate::domain::risk::RiskLevel;
    use pretty_assertions::assert_eq;

    fn fixed_now() -> OffsetDateTime {
        OffsetDateTime::from_unix_timestamp(1_700_000_000).expect("valid timestamp")
    }

    #[test]
    fn compact_has_no_certificate() {
        let view = render(&demo_assessment("google.com"), BadgeVariant::Compact, fixed_now());
        assert_eq!(view.certification, None);
        assert_eq!(view.cert_id, None);
        assert_eq!(view.score_display, "95");
        assert_eq!(view.score_label, ScoreLabel::Excellent);
        assert_eq!(view.tier, classify(RiskLevel::Low));
    }

    #[test]
    fn variants_share_the_same_tier() {
        let assessment = demo_assessment("phishing-test.org");
        let views: Vec<_> = BadgeVariant::ALL
            .iter()
            .map(|variant| render(&assessment, *variant, fixed_now()))
            .collect();
        for view in &views {
            assert_eq!(view.tier, classify(RiskLevel::Critical));
            assert!((view.progress - 15.0).abs() < 1e-9);
        }
        assert_eq!(views[1].certification, Some(CertificationTier::Uncertified));
    }

    #[test]
    fn disagreeing_inputs_are_both_shown() {
        let mut assessment = demo_assessment("google.com");
        assessment.risk_level = RiskLevel::High;
        let view = render(&assessment, BadgeVariant::Detailed, fixed_now());
        assert_eq!(view.tier.label, "High Risk");
        assert_eq!(view.score_label, ScoreLabel::Excellent);
    }

    #[test]
    fn cert_id_is_base36_timestamp() {
        assert_eq!(cert_id(fixed_now()), "TV-S44WE8");
        assert_eq!(
            cert_id(OffsetDateTime::from_unix_timestamp(0).expect("epoch")),
            "TV-0"
        );
    }

    #[test]
    fn report_link_encodes_the_domain() {
        assert_eq!(
            report_href("google.com"),
            "mailto:support@trustverify.io?subject=Report%20google.com"
        );
        let href = report_href("x.com&cc=a@b");
        assert_eq!(
            href,
            "mailto:support@trustverify.io?subject=Report%20x.com%26cc%3Da%40b"
        );
        assert_eq!(href.matches('&').count(), 0);
    }

    #[test]
    fn counts_are_grouped() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(12_840), "12,840");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn snippet_points_at_widget_route() {
        let snippet = embed_snippet(
            "https://trustverify.io/",
            "google.com",
            Language::Es,
            WidgetSize::Small,
        );
        assert_eq!(
            snippet,
            r#"<iframe src="https://trustverify.io/widget?domain=google.com&lang=es&size=small" width="220" height="90" style="border:0" title="TrustVerify badge"></iframe>"#
        );
    }
}
