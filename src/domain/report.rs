//! Reconciliation result and report types

use serde::Serialize;
use std::fmt;

/// Terminal classification state for a single dependency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FreshnessStatus {
    /// Declared version matches the resolved latest version
    UpToDate,
    /// A newer version exists upstream
    Outdated,
    /// Latest or declared version could not be determined
    Unresolved,
}

impl fmt::Display for FreshnessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FreshnessStatus::UpToDate => write!(f, "up-to-date"),
            FreshnessStatus::Outdated => write!(f, "outdated"),
            FreshnessStatus::Unresolved => write!(f, "unresolved"),
        }
    }
}

/// Classification of a single dependency against its upstream
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// Dependency name
    pub name: String,
    /// Terminal state
    pub status: FreshnessStatus,
    /// Declared/installed version, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<String>,
    /// Resolved latest upstream version, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest: Option<String>,
    /// Failure reason for Unresolved classifications
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Classification {
    /// Creates an UpToDate classification
    pub fn up_to_date(name: impl Into<String>, version: impl Into<String>) -> Self {
        let version = version.into();
        Self {
            name: name.into(),
            status: FreshnessStatus::UpToDate,
            current: Some(version.clone()),
            latest: Some(version),
            detail: None,
        }
    }

    /// Creates an Outdated classification
    pub fn outdated(
        name: impl Into<String>,
        current: impl Into<String>,
        latest: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            status: FreshnessStatus::Outdated,
            current: Some(current.into()),
            latest: Some(latest.into()),
            detail: None,
        }
    }

    /// Creates an Unresolved classification with a failure reason
    pub fn unresolved(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: FreshnessStatus::Unresolved,
            current: None,
            latest: None,
            detail: Some(detail.into()),
        }
    }

    /// Human-readable report line for Outdated classifications
    pub fn report_line(&self) -> Option<String> {
        match (&self.status, &self.current, &self.latest) {
            (FreshnessStatus::Outdated, Some(current), Some(latest)) => Some(format!(
                "{} (current: {} → latest: {})",
                self.name, current, latest
            )),
            _ => None,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            FreshnessStatus::UpToDate => {
                write!(
                    f,
                    "{}: up-to-date ({})",
                    self.name,
                    self.current.as_deref().unwrap_or("?")
                )
            }
            FreshnessStatus::Outdated => write!(
                f,
                "{}: outdated ({} → {})",
                self.name,
                self.current.as_deref().unwrap_or("?"),
                self.latest.as_deref().unwrap_or("?")
            ),
            FreshnessStatus::Unresolved => write!(
                f,
                "{}: unresolved ({})",
                self.name,
                self.detail.as_deref().unwrap_or("unknown reason")
            ),
        }
    }
}

/// Aggregated result of one reconciliation run
///
/// Created fresh per run and returned by value from the engine; the
/// outdated sequence preserves classification order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReconciliationReport {
    /// Per-dependency classification events, in processing order
    pub classifications: Vec<Classification>,
    /// Outdated report lines, in classification order
    pub outdated: Vec<String>,
}

impl ReconciliationReport {
    /// Creates an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a classification, appending its report line when outdated
    pub fn push(&mut self, classification: Classification) {
        if let Some(line) = classification.report_line() {
            self.outdated.push(line);
        }
        self.classifications.push(classification);
    }

    /// Returns true when no dependency was classified Outdated
    pub fn is_fresh(&self) -> bool {
        self.outdated.is_empty()
    }

    /// Number of dependencies with a given status
    pub fn count(&self, status: FreshnessStatus) -> usize {
        self.classifications
            .iter()
            .filter(|c| c.status == status)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_line_format() {
        let classification =
            Classification::outdated("github.com/stretchr/testify", "v1.9.0", "v2.0.0");
        assert_eq!(
            classification.report_line().unwrap(),
            "github.com/stretchr/testify (current: v1.9.0 → latest: v2.0.0)"
        );
    }

    #[test]
    fn test_report_line_only_for_outdated() {
        assert!(Classification::up_to_date("lib", "1.0.0")
            .report_line()
            .is_none());
        assert!(Classification::unresolved("lib", "fetch failed")
            .report_line()
            .is_none());
    }

    #[test]
    fn test_push_accumulates_outdated_in_order() {
        let mut report = ReconciliationReport::new();
        report.push(Classification::outdated("a", "1.0.0", "2.0.0"));
        report.push(Classification::up_to_date("b", "1.0.0"));
        report.push(Classification::outdated("c", "0.1.0", "0.2.0"));

        assert_eq!(report.outdated.len(), 2);
        assert!(report.outdated[0].starts_with("a "));
        assert!(report.outdated[1].starts_with("c "));
        assert!(!report.is_fresh());
    }

    #[test]
    fn test_empty_report_is_fresh() {
        let report = ReconciliationReport::new();
        assert!(report.is_fresh());
    }

    #[test]
    fn test_unresolved_does_not_affect_freshness() {
        let mut report = ReconciliationReport::new();
        report.push(Classification::unresolved("lib", "404"));
        assert!(report.is_fresh());
        assert_eq!(report.count(FreshnessStatus::Unresolved), 1);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(format!("{}", FreshnessStatus::UpToDate), "up-to-date");
        assert_eq!(format!("{}", FreshnessStatus::Outdated), "outdated");
        assert_eq!(format!("{}", FreshnessStatus::Unresolved), "unresolved");
    }

    #[test]
    fn test_classification_display() {
        let c = Classification::outdated("lib", "1.0.0", "1.1.0");
        assert_eq!(format!("{}", c), "lib: outdated (1.0.0 → 1.1.0)");

        let c = Classification::unresolved("lib", "timeout");
        assert_eq!(format!("{}", c), "lib: unresolved (timeout)");
    }

    #[test]
    fn test_serialize_report() {
        let mut report = ReconciliationReport::new();
        report.push(Classification::outdated("a", "1.0.0", "2.0.0"));
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"status\":\"outdated\""));
        assert!(json.contains("current: 1.0.0"));
    }
}
