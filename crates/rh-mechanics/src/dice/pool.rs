//! Dice pool construction and rolling.

use rand::rngs::StdRng;

use super::Die;
use super::roll::{DieResult, RollResult};

/// A collection of dice to be rolled together.
#[derive(Debug, Clone, Default)]
pub struct DicePool {
    /// The dice in this pool.
    pub dice: Vec<Die>,
}

impl DicePool {
    /// Create an empty dice pool.
    pub fn new() -> Self {
        Self { dice: Vec::new() }
    }

    /// Add `count` dice of the given type.
    pub fn add(mut self, die: Die, count: u32) -> Self {
        for _ in 0..count {
            self.dice.push(die);
        }
        self
    }

    /// Returns how many dice are in the pool.
    pub fn count(&self) -> usize {
        self.dice.len()
    }

    /// Returns true if the pool has no dice.
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Roll all dice in the pool using the given RNG.
    pub fn roll(&self, rng: &mut StdRng) -> RollResult {
        let dice = self
            .dice
            .iter()
            .map(|die| DieResult {
                die: *die,
                value: die.roll(rng),
            })
            .collect();
        RollResult { dice }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn empty_pool() {
        let pool = DicePool::new();
        assert_eq!(pool.count(), 0);
        assert!(pool.is_empty());
    }

    #[test]
    fn add_dice() {
        let pool = DicePool::new().add(Die::D6, 4).add(Die::D100, 1);
        assert_eq!(pool.count(), 5);
        assert!(!pool.is_empty());
    }

    #[test]
    fn roll_produces_valid_values() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = DicePool::new().add(Die::D6, 10);
        let result = pool.roll(&mut rng);
        assert_eq!(result.dice.len(), 10);
        for die_result in &result.dice {
            assert!((1..=6).contains(&die_result.value));
        }
    }

    #[test]
    fn roll_deterministic_with_seed() {
        let pool = DicePool::new().add(Die::D6, 4);
        let mut rng1 = StdRng::seed_from_u64(99);
        let mut rng2 = StdRng::seed_from_u64(99);
        let r1 = pool.roll(&mut rng1);
        let r2 = pool.roll(&mut rng2);
        for (a, b) in r1.dice.iter().zip(r2.dice.iter()) {
            assert_eq!(a.value, b.value);
        }
    }
}
