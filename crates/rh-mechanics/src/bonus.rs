//! The Palladium attribute bonus chart for scores 16 through 30.
//!
//! Several bonuses follow closed-form steps; trust/intimidate, coma/death,
//! and charm/impress percentages come from fixed chart rows. Lookups for
//! scores above 30 are capped at the 30 column. A chart row that fails to
//! cover a capped in-range score is a hard error, never a silent default.

use serde::{Deserialize, Serialize};

use crate::attribute::Attribute;
use crate::error::{MechError, MechResult};

/// Lowest score with chart bonuses.
pub const CHART_MIN: u32 = 16;
/// Highest chart column; higher scores use this column.
pub const CHART_MAX: u32 = 30;

/// MA trust/intimidate percentages for scores 16..=30.
const MA_TRUST_INTIMIDATE: [u32; 15] = [40, 45, 50, 55, 60, 65, 70, 75, 80, 84, 88, 92, 94, 96, 97];

/// PE save vs coma/death percentages for scores 16..=30.
const PE_COMA_DEATH: [u32; 15] = [4, 5, 6, 8, 10, 12, 14, 16, 18, 20, 22, 24, 26, 28, 30];

/// PB charm/impress percentages for scores 16..=30.
const PB_CHARM_IMPRESS: [u32; 15] = [30, 35, 40, 45, 50, 55, 60, 65, 70, 75, 80, 83, 86, 90, 92];

/// How a bonus value is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BonusKind {
    /// A flat additive bonus: `+3`.
    Additive,
    /// An additive percentage: `+4%`.
    AdditivePercent,
    /// An absolute percentage: `55%`.
    Percent,
}

/// A single derived bonus on an attribute score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bonus {
    /// What the bonus applies to.
    pub label: &'static str,
    /// The bonus amount.
    pub value: u32,
    /// How the amount is displayed.
    pub kind: BonusKind,
}

impl std::fmt::Display for Bonus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            BonusKind::Additive => write!(f, "{} +{}", self.label, self.value),
            BonusKind::AdditivePercent => write!(f, "{} +{}%", self.label, self.value),
            BonusKind::Percent => write!(f, "{} {}%", self.label, self.value),
        }
    }
}

/// The chart column for a score, or `None` below the chart floor.
/// Scores above the chart cap use the last column.
fn chart_column(score: u32) -> Option<usize> {
    if score < CHART_MIN {
        None
    } else {
        Some((score.min(CHART_MAX) - CHART_MIN) as usize)
    }
}

/// Checked lookup into a fixed chart row.
fn row_lookup(
    attribute: Attribute,
    label: &'static str,
    row: &[u32],
    score: u32,
) -> MechResult<Option<u32>> {
    let Some(column) = chart_column(score) else {
        return Ok(None);
    };
    match row.get(column) {
        Some(value) => Ok(Some(*value)),
        None => Err(MechError::ChartGap {
            attribute,
            label,
            score: score.min(CHART_MAX),
        }),
    }
}

/// IQ skill bonus: +2% at 16 up to +16% at 30.
fn skill_bonus(iq: u32) -> Option<u32> {
    chart_column(iq).map(|column| column as u32 + 2)
}

/// Stepped bonus shared by several chart rows: 16-17 +1, 18-19 +2, ..., 30 +8.
fn step_every_two(score: u32) -> Option<u32> {
    chart_column(score).map(|column| column as u32 / 2 + 1)
}

/// ME save vs insanity: stepped up to 20, then +1 per point to +13 at 30.
fn insanity_save(me: u32) -> Option<u32> {
    let column = chart_column(me)?;
    let capped = me.min(CHART_MAX);
    if capped <= 20 {
        Some(column as u32 / 2 + 1)
    } else {
        Some(capped - 17)
    }
}

/// PS hand-to-hand damage bonus: +1 at 16 up to +15 at 30.
fn damage_bonus(ps: u32) -> Option<u32> {
    chart_column(ps).map(|column| column as u32 + 1)
}

/// All chart bonuses for an attribute at a given score.
///
/// Scores below the chart floor and SPD yield an empty list.
pub fn bonuses_for(attribute: Attribute, score: u32) -> MechResult<Vec<Bonus>> {
    let mut bonuses = Vec::new();

    match attribute {
        Attribute::Iq => {
            if let Some(value) = skill_bonus(score) {
                bonuses.push(Bonus {
                    label: "Skills",
                    value,
                    kind: BonusKind::AdditivePercent,
                });
            }
        }
        Attribute::Me => {
            if let Some(value) = step_every_two(score) {
                bonuses.push(Bonus {
                    label: "Save vs Psionic",
                    value,
                    kind: BonusKind::Additive,
                });
            }
            if let Some(value) = insanity_save(score) {
                bonuses.push(Bonus {
                    label: "Save vs Insanity",
                    value,
                    kind: BonusKind::Additive,
                });
            }
        }
        Attribute::Ma => {
            if let Some(value) =
                row_lookup(attribute, "Trust/Intimidate", &MA_TRUST_INTIMIDATE, score)?
            {
                bonuses.push(Bonus {
                    label: "Trust/Intimidate",
                    value,
                    kind: BonusKind::Percent,
                });
            }
        }
        Attribute::Ps => {
            if let Some(value) = damage_bonus(score) {
                bonuses.push(Bonus {
                    label: "Damage",
                    value,
                    kind: BonusKind::Additive,
                });
            }
        }
        Attribute::Pp => {
            if let Some(value) = step_every_two(score) {
                bonuses.push(Bonus {
                    label: "Parry/Dodge",
                    value,
                    kind: BonusKind::Additive,
                });
                bonuses.push(Bonus {
                    label: "Strike",
                    value,
                    kind: BonusKind::Additive,
                });
            }
        }
        Attribute::Pe => {
            if let Some(value) = row_lookup(attribute, "Save vs Coma/Death", &PE_COMA_DEATH, score)?
            {
                bonuses.push(Bonus {
                    label: "Save vs Coma/Death",
                    value,
                    kind: BonusKind::AdditivePercent,
                });
            }
            if let Some(value) = step_every_two(score) {
                bonuses.push(Bonus {
                    label: "Save vs Magic/Poison",
                    value,
                    kind: BonusKind::Additive,
                });
            }
        }
        Attribute::Pb => {
            if let Some(value) = row_lookup(attribute, "Charm/Impress", &PB_CHARM_IMPRESS, score)? {
                bonuses.push(Bonus {
                    label: "Charm/Impress",
                    value,
                    kind: BonusKind::Percent,
                });
            }
        }
        Attribute::Spd => {}
    }

    Ok(bonuses)
}
