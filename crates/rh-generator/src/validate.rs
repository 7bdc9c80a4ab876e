//! Validation of the shipped table data.
//!
//! Checks every d100 table for contiguous 1..=100 coverage and the bonus
//! chart for complete 16..=30 coverage. Generation fails loudly on bad
//! data anyway; this surfaces problems before any dice are rolled.

use rh_mechanics::{Attribute, CHART_MAX, CHART_MIN, bonuses_for};

use crate::animal::{HABITATS, Habitat};
use crate::background::BACKGROUNDS;
use crate::error::GenError;
use crate::table::RangeTable;

/// A problem found in the shipped table data.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// The table or chart row where the issue was found.
    pub table: String,
    /// A human-readable description of the issue.
    pub message: String,
    /// Whether this is an error (true) or a warning (false).
    pub is_error: bool,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = if self.is_error { "error" } else { "warning" };
        write!(f, "{level}: {}: {}", self.table, self.message)
    }
}

/// Check one d100 table's coverage.
fn check_table<T: Copy>(table: RangeTable<T>, issues: &mut Vec<ValidationIssue>) {
    if let Err(e) = table.check_coverage() {
        let message = match e {
            GenError::MalformedTable { message, .. } => message,
            other => other.to_string(),
        };
        issues.push(ValidationIssue {
            table: table.name.to_string(),
            message,
            is_error: true,
        });
    }
}

/// Validate every shipped table and chart row.
///
/// Returns a list of issues found; empty means all tables cover 1..=100
/// and the bonus chart resolves for every score 16..=30.
pub fn validate_tables() -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    check_table(HABITATS, &mut issues);
    for habitat in Habitat::ALL {
        check_table(habitat.animals(), &mut issues);
    }
    check_table(BACKGROUNDS, &mut issues);

    for attribute in Attribute::ALL {
        for score in CHART_MIN..=CHART_MAX {
            if let Err(e) = bonuses_for(attribute, score) {
                issues.push(ValidationIssue {
                    table: format!("bonus chart ({attribute})"),
                    message: e.to_string(),
                    is_error: true,
                });
            }
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_tables_are_clean() {
        let issues = validate_tables();
        assert!(
            issues.is_empty(),
            "unexpected issues: {:?}",
            issues.iter().map(ToString::to_string).collect::<Vec<_>>()
        );
    }

    #[test]
    fn issue_display_includes_level_and_table() {
        let issue = ValidationIssue {
            table: "habitat".to_string(),
            message: "rows end at 90, expected 100".to_string(),
            is_error: true,
        };
        assert_eq!(
            issue.to_string(),
            "error: habitat: rows end at 90, expected 100"
        );
    }
}
