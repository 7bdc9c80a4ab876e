//! Mutant background table (Road Hogs character step three).

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use rh_mechanics::Die;

use crate::error::GenResult;
use crate::table::{RangeRow, RangeTable};

/// A mutant character's upbringing and training.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Background {
    /// Garage-trained repair specialist.
    Mechanic,
    /// Raised in a biker gang.
    Biker,
    /// Road Patrol tradition.
    Trooper,
    /// Raised wild, outside mutant society.
    FeralMutantAnimal,
    /// Adopted into a ninja school.
    Ninja,
    /// Armed convoy specialist.
    Trucker,
    /// Roads, bridges, and tunnels trade.
    HighwayEngineer,
    /// Innate, inexplicable machine intuition.
    NaturalMechanicalGenius,
}

impl Background {
    /// All backgrounds in chart order.
    pub const ALL: [Self; 8] = [
        Self::Mechanic,
        Self::Biker,
        Self::Trooper,
        Self::FeralMutantAnimal,
        Self::Ninja,
        Self::Trucker,
        Self::HighwayEngineer,
        Self::NaturalMechanicalGenius,
    ];

    /// One-line flavor summary for the sheet.
    pub fn summary(self) -> &'static str {
        match self {
            Self::Mechanic => {
                "Garage-trained; strong repair/diagnostics focus; significant vehicle expense."
            }
            Self::Biker => {
                "Biker-gang upbringing; piloting & combat skills; often revenge-motivated."
            }
            Self::Trooper => "Road Patrol tradition; military-style training; law & order focus.",
            Self::FeralMutantAnimal => {
                "Wilderness survivor; tougher/rougher; no vehicle expense."
            }
            Self::Ninja => {
                "Adopted into a ninja school; stealth & martial training; weapon proficiencies."
            }
            Self::Trucker => {
                "Armed convoy specialist; freight/semi piloting; practical combat training."
            }
            Self::HighwayEngineer => {
                "Roads/bridges/tunnels specialist; engineering & heavy machinery; respected trade."
            }
            Self::NaturalMechanicalGenius => {
                "Innate machine intuition; fixes are perfect but may only last while nearby."
            }
        }
    }
}

impl std::fmt::Display for Background {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mechanic => write!(f, "Mechanic"),
            Self::Biker => write!(f, "Biker"),
            Self::Trooper => write!(f, "Trooper"),
            Self::FeralMutantAnimal => write!(f, "Feral Mutant Animal"),
            Self::Ninja => write!(f, "Ninja"),
            Self::Trucker => write!(f, "Trucker"),
            Self::HighwayEngineer => write!(f, "Highway Engineer"),
            Self::NaturalMechanicalGenius => write!(f, "Natural Mechanical Genius"),
        }
    }
}

/// Background selection table.
pub const BACKGROUNDS: RangeTable<Background> = RangeTable {
    name: "mutant background",
    rows: &[
        RangeRow::new(1, 15, Background::Mechanic),
        RangeRow::new(16, 35, Background::Biker),
        RangeRow::new(36, 45, Background::Trooper),
        RangeRow::new(46, 55, Background::FeralMutantAnimal),
        RangeRow::new(56, 75, Background::Ninja),
        RangeRow::new(76, 85, Background::Trucker),
        RangeRow::new(86, 95, Background::HighwayEngineer),
        RangeRow::new(96, 100, Background::NaturalMechanicalGenius),
    ],
};

/// A rolled mutant background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutantBackground {
    /// The background rolled.
    pub background: Background,
    /// The d100 roll that selected it.
    pub roll: u32,
}

/// Roll a mutant background on the step-three table.
pub fn roll_background(rng: &mut StdRng) -> GenResult<MutantBackground> {
    let roll = Die::D100.roll(rng);
    let background = BACKGROUNDS.lookup(roll)?;
    Ok(MutantBackground { background, roll })
}
