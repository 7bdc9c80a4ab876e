//! Error types for the mechanics crate.

use crate::attribute::Attribute;

/// Errors that can occur during mechanics operations.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// A bonus chart row does not cover a score it should.
    #[error("bonus chart row '{label}' for {attribute} has no entry for score {score}")]
    ChartGap {
        /// The attribute whose chart row is incomplete.
        attribute: Attribute,
        /// The chart row label.
        label: &'static str,
        /// The capped score the row failed to cover.
        score: u32,
    },
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
