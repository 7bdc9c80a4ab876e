//! The character generator.
//!
//! Owns its RNG so that a seeded generator reproduces identical sheets.

use rand::SeedableRng;
use rand::rngs::StdRng;

use rh_mechanics::{Attribute, roll_attribute};

use crate::animal::roll_animal;
use crate::background::roll_background;
use crate::error::GenResult;
use crate::sheet::{AttributeScore, CharacterSheet};

/// Generates random character sheets from an owned RNG.
pub struct Generator {
    rng: StdRng,
}

impl Generator {
    /// A generator seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// A generator with a fixed seed.
    ///
    /// Identical seeds produce identical sheets.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate one complete character sheet.
    ///
    /// Attributes are rolled in canonical order, then animal type, then
    /// mutant background, so the draw order is fixed for a given seed.
    pub fn generate(&mut self, name: Option<&str>) -> GenResult<CharacterSheet> {
        let attributes = Attribute::ALL
            .into_iter()
            .map(|attribute| AttributeScore {
                attribute,
                score: roll_attribute(&mut self.rng),
            })
            .collect();
        let animal = roll_animal(&mut self.rng)?;
        let background = roll_background(&mut self.rng)?;

        Ok(CharacterSheet {
            name: name.map(str::to_string),
            attributes,
            animal,
            background,
        })
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_all_eight_attributes_in_order() {
        let mut generator = Generator::seeded(42);
        let sheet = generator.generate(None).unwrap();
        assert_eq!(sheet.attributes.len(), 8);
        for (entry, attribute) in sheet.attributes.iter().zip(Attribute::ALL) {
            assert_eq!(entry.attribute, attribute);
        }
    }

    #[test]
    fn scores_in_valid_range() {
        let mut generator = Generator::seeded(0);
        for _ in 0..200 {
            let sheet = generator.generate(None).unwrap();
            for entry in &sheet.attributes {
                assert!((3..=30).contains(&entry.score));
            }
        }
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let mut a = Generator::seeded(1337);
        let mut b = Generator::seeded(1337);
        for _ in 0..20 {
            assert_eq!(a.generate(None).unwrap(), b.generate(None).unwrap());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        // Not guaranteed for any single pair, but across 20 sheets two
        // seeds agreeing on everything would mean a broken RNG.
        let mut a = Generator::seeded(1);
        let mut b = Generator::seeded(2);
        let mut diverged = false;
        for _ in 0..20 {
            if a.generate(None).unwrap() != b.generate(None).unwrap() {
                diverged = true;
                break;
            }
        }
        assert!(diverged);
    }

    #[test]
    fn name_is_carried_onto_the_sheet() {
        let mut generator = Generator::seeded(42);
        let sheet = generator.generate(Some("Sprocket")).unwrap();
        assert_eq!(sheet.name.as_deref(), Some("Sprocket"));
        let sheet = generator.generate(None).unwrap();
        assert!(sheet.name.is_none());
    }

    #[test]
    fn animal_and_background_are_never_empty() {
        let mut generator = Generator::seeded(99);
        for _ in 0..100 {
            let sheet = generator.generate(None).unwrap();
            assert!(!sheet.animal.animal.is_empty());
            assert!(!sheet.background.background.summary().is_empty());
        }
    }
}
