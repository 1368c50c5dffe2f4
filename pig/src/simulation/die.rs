use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Represents a single die of variable sides. The die owns its random source,
/// which is seeded once on creation.
#[derive(Debug, Clone)]
pub struct Die {
    sides: u8,
    rng: ChaCha8Rng,
    firsts: VecDeque<u8>,
}

impl Die {
    /// Creates a new die. Panics if it has fewer than 2 sides.
    pub fn new(sides: u8, seed: u64) -> Die {
        if sides < 2 {
            panic!("A die must have at least 2 sides");
        }
        Die {
            sides,
            rng: ChaCha8Rng::seed_from_u64(seed),
            firsts: VecDeque::new(),
        }
    }

    /// Makes sure the given outcomes are the next ones rolled, in order, before
    /// the random source is consulted again. Panics if any outcome is not a face
    /// of this die.
    pub fn load_firsts(&mut self, firsts: &[u8]) {
        for outcome in firsts {
            if *outcome == 0 || *outcome > self.sides {
                panic!("The given first outcomes are invalid");
            }
            self.firsts.push_back(*outcome);
        }
    }

    pub fn roll(&mut self) -> u8 {
        let outcome = match self.firsts.pop_front() {
            Some(outcome) => outcome,
            None => self.rng.gen_range(1..=self.sides),
        };
        assert!(
            (1..=self.sides).contains(&outcome),
            "Die outcome {} out of range",
            outcome
        );
        outcome
    }

    pub fn get_sides(&self) -> u8 {
        self.sides
    }

    /// Number of preloaded outcomes not rolled yet.
    pub fn get_remaining_firsts(&self) -> usize {
        self.firsts.len()
    }
}
