//! Property tests over the public mechanics API.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use rh_mechanics::{Attribute, bonuses_for, roll_attribute};

proptest! {
    /// Attribute scores stay inside 3..=30 no matter how the RNG is seeded.
    #[test]
    fn roll_attribute_in_range_for_any_seed(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..8 {
            let score = roll_attribute(&mut rng);
            prop_assert!((3..=30).contains(&score));
        }
    }

    /// The bonus chart resolves for every attribute at any score,
    /// including scores past the 30 cap.
    #[test]
    fn bonuses_resolve_for_any_score(score in 0u32..=60) {
        for attribute in Attribute::ALL {
            prop_assert!(bonuses_for(attribute, score).is_ok());
        }
    }

    /// Bonuses are deterministic in the score alone.
    #[test]
    fn bonuses_are_deterministic(score in 0u32..=60) {
        for attribute in Attribute::ALL {
            let a = bonuses_for(attribute, score).unwrap();
            let b = bonuses_for(attribute, score).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
