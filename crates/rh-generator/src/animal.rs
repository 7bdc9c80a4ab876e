//! Animal type tables and the two-stage d100 animal roll.
//!
//! Step one rolls the habitat the mutant animal's stock came from; step
//! two rolls the animal within that habitat's own table. Both rolls are
//! recorded on the sheet.

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use rh_mechanics::Die;

use crate::error::GenResult;
use crate::table::{RangeRow, RangeTable};

/// Where a mutant animal's stock came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Habitat {
    /// City and suburb animals.
    Urban,
    /// Farm and countryside animals.
    Rural,
    /// Woodland animals.
    Forest,
    /// Desert and open-plains animals.
    DesertPlains,
    /// Rivers, lakes, and coastal waters.
    Aquatic,
    /// Wild bird species.
    WildBirds,
    /// Zoo escapees and exotics.
    Zoo,
}

impl Habitat {
    /// All habitats in chart order.
    pub const ALL: [Self; 7] = [
        Self::Urban,
        Self::Rural,
        Self::Forest,
        Self::DesertPlains,
        Self::Aquatic,
        Self::WildBirds,
        Self::Zoo,
    ];

    /// The d100 animal table for this habitat.
    pub fn animals(self) -> RangeTable<&'static str> {
        match self {
            Self::Urban => URBAN_ANIMALS,
            Self::Rural => RURAL_ANIMALS,
            Self::Forest => FOREST_ANIMALS,
            Self::DesertPlains => DESERT_PLAINS_ANIMALS,
            Self::Aquatic => AQUATIC_ANIMALS,
            Self::WildBirds => WILD_BIRD_ANIMALS,
            Self::Zoo => ZOO_ANIMALS,
        }
    }
}

impl std::fmt::Display for Habitat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Urban => write!(f, "Urban"),
            Self::Rural => write!(f, "Rural"),
            Self::Forest => write!(f, "Forest"),
            Self::DesertPlains => write!(f, "Desert/Plains"),
            Self::Aquatic => write!(f, "Aquatic"),
            Self::WildBirds => write!(f, "Wild Birds"),
            Self::Zoo => write!(f, "Zoo"),
        }
    }
}

/// Habitat selection table (step one).
pub const HABITATS: RangeTable<Habitat> = RangeTable {
    name: "habitat",
    rows: &[
        RangeRow::new(1, 15, Habitat::Urban),
        RangeRow::new(16, 25, Habitat::Rural),
        RangeRow::new(26, 45, Habitat::Forest),
        RangeRow::new(46, 70, Habitat::DesertPlains),
        RangeRow::new(71, 75, Habitat::Aquatic),
        RangeRow::new(76, 95, Habitat::WildBirds),
        RangeRow::new(96, 100, Habitat::Zoo),
    ],
};

const URBAN_ANIMALS: RangeTable<&str> = RangeTable {
    name: "urban animals",
    rows: &[
        RangeRow::new(1, 25, "Dog"),
        RangeRow::new(26, 45, "Cat"),
        RangeRow::new(46, 50, "Mouse"),
        RangeRow::new(51, 55, "Rat"),
        RangeRow::new(56, 58, "Hamster"),
        RangeRow::new(59, 60, "Guinea Pig"),
        RangeRow::new(61, 65, "Squirrel"),
        RangeRow::new(66, 75, "Sparrow"),
        RangeRow::new(76, 83, "Pigeon"),
        RangeRow::new(84, 85, "Parrot"),
        RangeRow::new(86, 88, "Bat"),
        RangeRow::new(89, 92, "Turtle"),
        RangeRow::new(93, 95, "Frog"),
        RangeRow::new(96, 97, "Lizard"),
        RangeRow::new(98, 100, "Chameleon"),
    ],
};

const RURAL_ANIMALS: RangeTable<&str> = RangeTable {
    name: "rural animals",
    rows: &[
        RangeRow::new(1, 10, "Dog"),
        RangeRow::new(11, 15, "Cat"),
        RangeRow::new(16, 20, "Cow"),
        RangeRow::new(21, 35, "Pig"),
        RangeRow::new(36, 45, "Chicken"),
        RangeRow::new(46, 50, "Duck"),
        RangeRow::new(51, 58, "Horse"),
        RangeRow::new(59, 62, "Donkey"),
        RangeRow::new(63, 65, "Rabbit"),
        RangeRow::new(66, 75, "Mouse"),
        RangeRow::new(76, 80, "Jumping Mouse"),
        RangeRow::new(81, 85, "Sheep"),
        RangeRow::new(86, 90, "Goat"),
        RangeRow::new(91, 94, "Turkey"),
        RangeRow::new(95, 100, "Bat"),
    ],
};

const FOREST_ANIMALS: RangeTable<&str> = RangeTable {
    name: "forest animals",
    rows: &[
        RangeRow::new(1, 3, "Wolf"),
        RangeRow::new(4, 6, "Fox"),
        RangeRow::new(7, 13, "Coyote"),
        RangeRow::new(14, 16, "Badger"),
        RangeRow::new(17, 20, "Black Bear"),
        RangeRow::new(21, 24, "Grizzly Bear"),
        RangeRow::new(25, 30, "Mountain Lion"),
        RangeRow::new(31, 32, "Bobcat"),
        RangeRow::new(33, 34, "Lynx"),
        RangeRow::new(35, 36, "Wolverine"),
        RangeRow::new(37, 40, "Weasel"),
        RangeRow::new(41, 45, "Raccoon"),
        RangeRow::new(46, 54, "Ringtail"),
        RangeRow::new(55, 60, "Opossum"),
        RangeRow::new(61, 65, "Skunk"),
        RangeRow::new(66, 70, "Porcupine"),
        RangeRow::new(71, 76, "Mole"),
        RangeRow::new(77, 78, "Squirrel"),
        RangeRow::new(79, 84, "Marten"),
        RangeRow::new(85, 94, "Deer"),
        RangeRow::new(95, 100, "Elk"),
    ],
};

const DESERT_PLAINS_ANIMALS: RangeTable<&str> = RangeTable {
    name: "desert/plains animals",
    rows: &[
        RangeRow::new(1, 15, "Coyote"),
        RangeRow::new(16, 20, "Mountain Lion"),
        RangeRow::new(21, 30, "Armadillo"),
        RangeRow::new(31, 35, "Peccary (treat as a Boar)"),
        RangeRow::new(36, 40, "Coati"),
        RangeRow::new(41, 45, "Gila Monster"),
        RangeRow::new(46, 55, "Lizard"),
        RangeRow::new(56, 65, "Pack Rat"),
        RangeRow::new(66, 75, "Prairie Dog"),
        RangeRow::new(76, 80, "Pronghorn"),
        RangeRow::new(81, 90, "Road Runner"),
        RangeRow::new(91, 95, "Kangaroo Rat"),
        RangeRow::new(96, 100, "Jumping Mouse"),
    ],
};

const AQUATIC_ANIMALS: RangeTable<&str> = RangeTable {
    name: "aquatic animals",
    rows: &[
        RangeRow::new(1, 20, "Otter"),
        RangeRow::new(21, 30, "Beaver"),
        RangeRow::new(31, 50, "Muskrat"),
        RangeRow::new(51, 55, "Dolphin"),
        RangeRow::new(56, 60, "Whale"),
        RangeRow::new(61, 65, "Octopus"),
        RangeRow::new(66, 70, "Sea Turtle"),
        RangeRow::new(71, 80, "Sea Lion"),
        RangeRow::new(81, 90, "Seal"),
        RangeRow::new(91, 100, "Walrus"),
    ],
};

const WILD_BIRD_ANIMALS: RangeTable<&str> = RangeTable {
    name: "wild bird animals",
    rows: &[
        RangeRow::new(1, 10, "Sparrow"),
        RangeRow::new(11, 15, "Robin"),
        RangeRow::new(16, 18, "Blue Jay"),
        RangeRow::new(19, 21, "Cardinal"),
        RangeRow::new(22, 23, "Wild Turkey"),
        RangeRow::new(24, 25, "Pheasant"),
        RangeRow::new(26, 27, "Grouse"),
        RangeRow::new(28, 29, "Quail"),
        RangeRow::new(30, 34, "Crow"),
        RangeRow::new(35, 39, "Duck"),
        RangeRow::new(40, 45, "Owl"),
        RangeRow::new(46, 50, "Condor"),
        RangeRow::new(51, 55, "Buzzard"),
        RangeRow::new(56, 65, "Vulture"),
        RangeRow::new(66, 70, "Hawk"),
        RangeRow::new(71, 75, "Falcon"),
        RangeRow::new(76, 85, "Goose"),
        RangeRow::new(86, 90, "Eagle"),
        RangeRow::new(91, 100, "Hummingbird"),
    ],
};

const ZOO_ANIMALS: RangeTable<&str> = RangeTable {
    name: "zoo animals",
    rows: &[
        RangeRow::new(1, 10, "Lion"),
        RangeRow::new(11, 15, "Tiger"),
        RangeRow::new(16, 20, "Leopard"),
        RangeRow::new(21, 25, "Cheetah"),
        RangeRow::new(26, 30, "Polar Bear"),
        RangeRow::new(31, 35, "Crocodile (or Alligator)"),
        RangeRow::new(36, 40, "Aardvark"),
        RangeRow::new(41, 45, "Rhinoceros"),
        RangeRow::new(46, 50, "Hippopotamus"),
        RangeRow::new(51, 60, "Elephant"),
        RangeRow::new(61, 65, "Chimpanzee"),
        RangeRow::new(66, 70, "Orangutan"),
        RangeRow::new(71, 75, "Gorilla"),
        RangeRow::new(76, 85, "Monkey"),
        RangeRow::new(86, 90, "Baboon"),
        RangeRow::new(91, 95, "Camel"),
        RangeRow::new(96, 100, "Buffalo"),
    ],
};

/// A rolled animal type with the d100 rolls that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimalType {
    /// The habitat rolled in step one.
    pub habitat: Habitat,
    /// The step-one d100 roll.
    pub habitat_roll: u32,
    /// The animal rolled within the habitat.
    pub animal: String,
    /// The step-two d100 roll.
    pub animal_roll: u32,
}

/// Roll an animal type: d100 for the habitat, then d100 within it.
pub fn roll_animal(rng: &mut StdRng) -> GenResult<AnimalType> {
    let habitat_roll = Die::D100.roll(rng);
    let habitat = HABITATS.lookup(habitat_roll)?;
    let animal_roll = Die::D100.roll(rng);
    let animal = habitat.animals().lookup(animal_roll)?;
    Ok(AnimalType {
        habitat,
        habitat_roll,
        animal: animal.to_string(),
        animal_roll,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn habitat_table_covers_d100() {
        assert!(HABITATS.check_coverage().is_ok());
    }

    #[test]
    fn every_animal_table_covers_d100() {
        for habitat in Habitat::ALL {
            let table = habitat.animals();
            assert!(
                table.check_coverage().is_ok(),
                "table '{}' has bad coverage",
                table.name
            );
        }
    }

    #[test]
    fn habitat_spans_match_chart() {
        assert_eq!(HABITATS.lookup(1).unwrap(), Habitat::Urban);
        assert_eq!(HABITATS.lookup(15).unwrap(), Habitat::Urban);
        assert_eq!(HABITATS.lookup(16).unwrap(), Habitat::Rural);
        assert_eq!(HABITATS.lookup(45).unwrap(), Habitat::Forest);
        assert_eq!(HABITATS.lookup(46).unwrap(), Habitat::DesertPlains);
        assert_eq!(HABITATS.lookup(71).unwrap(), Habitat::Aquatic);
        assert_eq!(HABITATS.lookup(76).unwrap(), Habitat::WildBirds);
        assert_eq!(HABITATS.lookup(96).unwrap(), Habitat::Zoo);
        assert_eq!(HABITATS.lookup(100).unwrap(), Habitat::Zoo);
    }

    #[test]
    fn animal_lookups_match_chart() {
        assert_eq!(Habitat::Forest.animals().lookup(1).unwrap(), "Wolf");
        assert_eq!(Habitat::Forest.animals().lookup(100).unwrap(), "Elk");
        assert_eq!(Habitat::Urban.animals().lookup(25).unwrap(), "Dog");
        assert_eq!(Habitat::Aquatic.animals().lookup(91).unwrap(), "Walrus");
        assert_eq!(Habitat::Zoo.animals().lookup(96).unwrap(), "Buffalo");
        assert_eq!(
            Habitat::WildBirds.animals().lookup(91).unwrap(),
            "Hummingbird"
        );
    }

    #[test]
    fn roll_animal_records_both_rolls() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let animal = roll_animal(&mut rng).unwrap();
            assert!((1..=100).contains(&animal.habitat_roll));
            assert!((1..=100).contains(&animal.animal_roll));
            assert!(!animal.animal.is_empty());
            assert_eq!(
                animal.habitat,
                HABITATS.lookup(animal.habitat_roll).unwrap()
            );
        }
    }

    #[test]
    fn roll_animal_deterministic() {
        let mut rng1 = StdRng::seed_from_u64(7);
        let mut rng2 = StdRng::seed_from_u64(7);
        assert_eq!(
            roll_animal(&mut rng1).unwrap(),
            roll_animal(&mut rng2).unwrap()
        );
    }

    #[test]
    fn habitat_display() {
        assert_eq!(Habitat::DesertPlains.to_string(), "Desert/Plains");
        assert_eq!(Habitat::WildBirds.to_string(), "Wild Birds");
    }
}
