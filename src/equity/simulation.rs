use super::spot::Spot;
use super::tally::Tally;
use super::tally::Trial;
use crate::cards::category::Category;
use crate::cards::hand::Hand;
use crate::cards::strength::Strength;

use std::cmp::Ordering;

/// Monte Carlo equity estimator for one spot.
///
/// Every trial derives its own generator from the run seed and trial
/// index, so a run is reproducible regardless of how rayon schedules
/// the work.
#[derive(Debug, Clone, Copy)]
pub struct Simulator {
    spot: Spot,
    trials: usize,
    seed: u64,
}

impl Simulator {
    pub fn new(spot: Spot, trials: usize, seed: u64) -> Self {
        assert!(trials > 0);
        assert!(spot.deck().size() >= 5 - spot.public().size() + 2 * spot.rivals());
        Self { spot, trials, seed }
    }
    pub fn spot(&self) -> Spot {
        self.spot
    }
    /// Same run against a different number of opponents.
    pub fn with_rivals(&self, rivals: usize) -> Self {
        Self::new(self.spot.with_rivals(rivals), self.trials, self.seed)
    }

    pub fn run(&self) -> Tally {
        use rayon::prelude::*;
        log::debug!("simulating {} trials for {}", self.trials, self.spot);
        (0..self.trials)
            .into_par_iter()
            .map(|trial| self.sample(trial))
            .fold(Tally::default, Tally::absorb)
            .reduce(Tally::default, Tally::merge)
    }

    /// Play out one random deal and judge it from the hero's seat.
    fn sample(&self, trial: usize) -> Trial {
        let ref mut rng = self.rng(trial);
        let deck = self.spot.deck().shuffled(rng);
        let cards = deck.cards();
        let n = 5 - self.spot.public().size();
        let board = cards[..n]
            .iter()
            .copied()
            .map(Hand::from)
            .fold(self.spot.public(), Hand::add);
        let hero = Strength::from(Hand::add(self.spot.pocket(), board));
        let standing = cards[n..n + 2 * self.spot.rivals()]
            .chunks(2)
            .map(|held| held.iter().copied().map(Hand::from).fold(board, Hand::add))
            .map(Strength::from)
            .map(|villain| hero.cmp(&villain))
            .fold(Ordering::Greater, Ordering::min);
        Trial {
            standing,
            made: hero.category(),
            hit: hero.category() > self.spot.baseline().unwrap_or(Category::HighCard),
        }
    }

    fn rng(&self, trial: usize) -> rand::rngs::SmallRng {
        use rand::SeedableRng;
        use std::collections::hash_map::DefaultHasher;
        use std::hash::Hash;
        use std::hash::Hasher;
        let ref mut hasher = DefaultHasher::new();
        self.seed.hash(hasher);
        trial.hash(hasher);
        rand::rngs::SmallRng::seed_from_u64(hasher.finish())
    }
}
