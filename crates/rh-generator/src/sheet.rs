//! The generated character sheet value object.

use serde::{Deserialize, Serialize};

use rh_mechanics::Attribute;

use crate::animal::AnimalType;
use crate::background::MutantBackground;
use crate::error::{GenError, GenResult};

/// A single attribute score on a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeScore {
    /// Which attribute.
    pub attribute: Attribute,
    /// The rolled score.
    pub score: u32,
}

/// A complete generated character.
///
/// Immutable once generated; one sheet is created per invocation and
/// discarded after rendering. Nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSheet {
    /// Optional character name supplied by the caller.
    pub name: Option<String>,
    /// The eight attribute scores in canonical sheet order.
    pub attributes: Vec<AttributeScore>,
    /// The rolled animal type.
    pub animal: AnimalType,
    /// The rolled mutant background.
    pub background: MutantBackground,
}

impl CharacterSheet {
    /// The score for an attribute, erring if the sheet lacks it.
    pub fn score(&self, attribute: Attribute) -> GenResult<u32> {
        self.attributes
            .iter()
            .find(|entry| entry.attribute == attribute)
            .map(|entry| entry.score)
            .ok_or(GenError::MissingAttribute(attribute))
    }
}
