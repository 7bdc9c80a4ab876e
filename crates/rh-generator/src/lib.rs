//! Road Hogs character generation engine.
//!
//! Produces complete random character sheets: eight rolled attributes
//! with chart-derived bonuses, a two-stage d100 animal type, and a d100
//! mutant background. Generation is a pure function of its RNG; a seeded
//! [`Generator`] reproduces identical sheets.

pub mod animal;
pub mod background;
pub mod error;
pub mod generator;
pub mod render;
pub mod sheet;
pub mod table;
pub mod validate;

pub use animal::{AnimalType, Habitat};
pub use background::{Background, MutantBackground};
pub use error::{GenError, GenResult};
pub use generator::Generator;
pub use render::render_sheet;
pub use sheet::{AttributeScore, CharacterSheet};
pub use table::{RangeRow, RangeTable};
pub use validate::{ValidationIssue, validate_tables};
