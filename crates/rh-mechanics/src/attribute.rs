//! The eight Palladium attributes and the attribute roll routine.

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::dice::{DicePool, Die};

/// One of the eight Palladium attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    /// Intelligence Quotient.
    Iq,
    /// Mental Endurance.
    Me,
    /// Mental Affinity.
    Ma,
    /// Physical Strength.
    Ps,
    /// Physical Prowess.
    Pp,
    /// Physical Endurance.
    Pe,
    /// Physical Beauty.
    Pb,
    /// Speed.
    Spd,
}

impl Attribute {
    /// All attributes in canonical sheet order.
    pub const ALL: [Self; 8] = [
        Self::Iq,
        Self::Me,
        Self::Ma,
        Self::Ps,
        Self::Pp,
        Self::Pe,
        Self::Pb,
        Self::Spd,
    ];

    /// The chart abbreviation (IQ, ME, ...).
    pub fn abbrev(self) -> &'static str {
        match self {
            Self::Iq => "IQ",
            Self::Me => "ME",
            Self::Ma => "MA",
            Self::Ps => "PS",
            Self::Pp => "PP",
            Self::Pe => "PE",
            Self::Pb => "PB",
            Self::Spd => "SPD",
        }
    }

    /// The full attribute name.
    pub fn full_name(self) -> &'static str {
        match self {
            Self::Iq => "Intelligence Quotient",
            Self::Me => "Mental Endurance",
            Self::Ma => "Mental Affinity",
            Self::Ps => "Physical Strength",
            Self::Pp => "Physical Prowess",
            Self::Pe => "Physical Endurance",
            Self::Pb => "Physical Beauty",
            Self::Spd => "Speed",
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.abbrev())
    }
}

/// Roll a single attribute score.
///
/// The base roll is 4d6 drop lowest. A base total of 16-18 earns a bonus
/// d6; a bonus die showing 6 earns one more. Two bonus dice at most, so
/// the highest possible score is 30.
pub fn roll_attribute(rng: &mut StdRng) -> u32 {
    let base = DicePool::new()
        .add(Die::D6, 4)
        .roll(rng)
        .total_dropping_lowest(1);

    let mut total = base;
    if (16..=18).contains(&base) {
        let bonus = Die::D6.roll(rng);
        total += bonus;
        if bonus == 6 {
            total += Die::D6.roll(rng);
        }
    }
    total
}
