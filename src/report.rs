//! Mock audit report generation and export.
//!
//! The generator fabricates a fixed-shape report from canned findings after a
//! simulated delay; nothing is derived from real analysis. Textual fields are
//! templated from the trimmed product name. Blank input is rejected with a
//! typed error so callers can refuse to start a generation at all.

use std::path::Path;
use std::time::Duration;

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Severity of a single finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// Cosmetic or minor friction.
    Low,
    /// Measurable impact on conversion or comprehension.
    Medium,
    /// Actively losing users.
    High,
}

impl Severity {
    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// One audit finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Short headline.
    pub title: String,
    /// What was observed and why it matters.
    pub description: String,
    /// How urgent the finding is.
    pub severity: Severity,
}

/// Score block, each value in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    /// User experience score.
    pub ux: u8,
    /// Technical health score.
    pub technical: u8,
    /// Accessibility score.
    pub accessibility: u8,
}

/// The fabricated audit report. Replaced wholesale by the next generation
/// request; it has no identity beyond the current one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditReport {
    /// Product the report was requested for.
    pub product_name: String,
    /// Templated executive summary.
    pub executive_summary: String,
    /// Canned score block.
    pub scores: Scores,
    /// UX findings, ordered most severe first.
    pub ux_findings: Vec<Finding>,
    /// Technical findings, ordered most severe first.
    pub tech_findings: Vec<Finding>,
}

fn canned_ux_findings(name: &str) -> Vec<Finding> {
    vec![
        Finding {
            title: "No proof of product above the fold".to_string(),
            description: format!(
                "Mobile visitors reach {name} looking for something live and leave \
                 before scrolling; the first screen shows no interactive evidence."
            ),
            severity: Severity::High,
        },
        Finding {
            title: "Touch targets below comfortable size".to_string(),
            description: "Primary action buttons render under 40px tall on common \
                          handsets, causing mistaps and abandoned flows."
                .to_string(),
            severity: Severity::Medium,
        },
        Finding {
            title: "Copy optimized for desktop line lengths".to_string(),
            description: "Paragraphs wrap awkwardly on vertical screens, burying the \
                          value proposition below three scrolls."
                .to_string(),
            severity: Severity::Low,
        },
    ]
}

fn canned_tech_findings(name: &str) -> Vec<Finding> {
    vec![
        Finding {
            title: "Render-blocking assets on first paint".to_string(),
            description: format!(
                "The {name} landing page ships unsplit bundles; first contentful \
                 paint lands well past the attention window on mid-range phones."
            ),
            severity: Severity::High,
        },
        Finding {
            title: "Non-idempotent form endpoints".to_string(),
            description: "Retries on flaky mobile connections can double-submit; \
                          endpoints should tolerate replays."
                .to_string(),
            severity: Severity::Medium,
        },
    ]
}

/// Fabricate a report for `product_name` after `delay`.
///
/// Rejects empty or whitespace-only names. The shape and scores are
/// deterministic; only the templated text varies with the input.
pub async fn generate(product_name: &str, delay: Duration) -> Result<AuditReport> {
    let name = product_name.trim();
    if name.is_empty() {
        return Err(Error::report_hint(
            "product name is empty",
            "Type a product name before generating",
        ));
    }

    // Simulated analysis window.
    tokio::time::sleep(delay).await;

    Ok(AuditReport {
        product_name: name.to_string(),
        executive_summary: format!(
            "{name} has a product users want and an interface that gets in the \
             way on mobile. The audit found strong desktop fundamentals, weak \
             proof-of-product signals on small screens, and a handful of \
             technical fixes that would recover most of the bounced traffic."
        ),
        scores: Scores { ux: 58, technical: 71, accessibility: 46 },
        ux_findings: canned_ux_findings(name),
        tech_findings: canned_tech_findings(name),
    })
}

/// Export envelope: the report plus its generation timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportExport {
    /// When the export was written, RFC 3339.
    pub generated_at: String,
    /// The exported report.
    pub report: AuditReport,
}

/// Write `report` to `path` as pretty-printed JSON.
pub fn export_report(report: &AuditReport, path: &Path) -> Result<()> {
    let stamped = ReportExport {
        generated_at: Local::now().to_rfc3339(),
        report: report.clone(),
    };
    let json = serde_json::to_string_pretty(&stamped)
        .map_err(|e| Error::export(path, e.to_string()))?;
    fs_err::write(path, json).map_err(|e| Error::export(path, e.to_string()))?;
    tracing::info!("Exported report for {} to {}", report.product_name, path.display());
    Ok(())
}

/// Read a previously exported report back from `path`.
pub fn import_report(path: &Path) -> Result<ReportExport> {
    let json = fs_err::read_to_string(path).map_err(|e| Error::export(path, e.to_string()))?;
    serde_json::from_str(&json).map_err(|e| Error::export(path, e.to_string()))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[tokio::test]
    async fn generation_templates_the_name() {
        let report = generate("Acme", Duration::from_millis(1)).await.unwrap();
        assert_eq!(report.product_name, "Acme");
        assert!(report.executive_summary.contains("Acme"));
        assert!(report.scores.ux <= 100);
        assert!(report.scores.technical <= 100);
        assert!(report.scores.accessibility <= 100);
        assert!(!report.ux_findings.is_empty());
        assert!(!report.tech_findings.is_empty());
    }

    #[tokio::test]
    async fn generation_trims_whitespace() {
        let report = generate("  Acme  ", Duration::from_millis(1)).await.unwrap();
        assert_eq!(report.product_name, "Acme");
    }

    #[tokio::test]
    async fn blank_input_is_rejected() {
        for input in ["", "   ", "\t\n"] {
            let result = generate(input, Duration::from_millis(1)).await;
            assert!(result.is_err(), "input {input:?} should be rejected");
        }
    }

    #[tokio::test]
    async fn findings_are_ordered_most_severe_first() {
        let report = generate("Acme", Duration::from_millis(1)).await.unwrap();
        assert_eq!(report.ux_findings[0].severity, Severity::High);
        assert_eq!(report.tech_findings[0].severity, Severity::High);
    }

    #[tokio::test]
    async fn export_round_trips() {
        let report = generate("Acme", Duration::from_millis(1)).await.unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("acme-audit.json");
        export_report(&report, &path).unwrap();
        let restored = import_report(&path).unwrap();
        assert_eq!(restored.report, report);
        assert!(!restored.generated_at.is_empty());
    }
}
