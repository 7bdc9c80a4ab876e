//! Error types for the generation engine.

use rh_mechanics::{Attribute, MechError};

/// Errors that can occur during character generation.
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    /// A d100 roll landed outside every row of a table.
    #[error("table '{table}' has no row covering roll {roll}")]
    TableMiss {
        /// The table name.
        table: &'static str,
        /// The uncovered d100 roll.
        roll: u32,
    },

    /// A table failed structural validation.
    #[error("table '{table}' is malformed: {message}")]
    MalformedTable {
        /// The table name.
        table: &'static str,
        /// What is wrong with it.
        message: String,
    },

    /// An attribute is missing from a character sheet.
    #[error("attribute {0} missing from sheet")]
    MissingAttribute(Attribute),

    /// A bonus chart lookup failed.
    #[error(transparent)]
    Mech(#[from] MechError),
}

/// Convenience result type for generation operations.
pub type GenResult<T> = Result<T, GenError>;
