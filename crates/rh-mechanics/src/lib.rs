//! Palladium-style dice and attribute mechanics for the Road Hogs generator.
//!
//! Provides polyhedral dice rolling, the eight-attribute roll routine
//! (4d6 drop lowest with bonus dice on high totals), and the attribute
//! bonus chart for scores 16 through 30.

pub mod attribute;
pub mod bonus;
pub mod dice;
pub mod error;

pub use attribute::{Attribute, roll_attribute};
pub use bonus::{Bonus, BonusKind, CHART_MAX, CHART_MIN, bonuses_for};
pub use dice::{DicePool, Die, DieResult, RollResult};
pub use error::{MechError, MechResult};
