use super::percent::Percent;
use crate::cards::category::Category;

use std::cmp::Ordering;

/// Outcome of one dealt trial from the hero's seat.
///
/// Standing is the worst comparison against any opponent. Greater means
/// the hero beat the whole table, Equal means at least one chop and no
/// loss, Less means somebody had it better.
#[derive(Debug, Clone, Copy)]
pub struct Trial {
    pub standing: Ordering,
    pub made: Category,
    pub hit: bool,
}

/// Counters accumulated over many trials.
///
/// Absorbing is the fold step, merging the reduce step; merge is
/// commutative and associative so partial tallies combine in any order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    trials: usize,
    wins: usize,
    ties: usize,
    hits: usize,
    histogram: [usize; 10],
}

impl Tally {
    pub fn absorb(mut self, trial: Trial) -> Self {
        self.trials += 1;
        match trial.standing {
            Ordering::Greater => self.wins += 1,
            Ordering::Equal => self.ties += 1,
            Ordering::Less => {}
        }
        if trial.hit {
            self.hits += 1;
        }
        self.histogram[u8::from(trial.made) as usize] += 1;
        self
    }
    pub fn merge(lhs: Self, rhs: Self) -> Self {
        let mut histogram = lhs.histogram;
        for (bin, count) in histogram.iter_mut().zip(rhs.histogram) {
            *bin += count;
        }
        Self {
            trials: lhs.trials + rhs.trials,
            wins: lhs.wins + rhs.wins,
            ties: lhs.ties + rhs.ties,
            hits: lhs.hits + rhs.hits,
            histogram,
        }
    }

    pub fn trials(&self) -> usize {
        self.trials
    }
    pub fn win(&self) -> Percent {
        Percent::ratio(self.wins, self.trials)
    }
    pub fn tie(&self) -> Percent {
        Percent::ratio(self.ties, self.trials)
    }
    /// Loss is the exact complement, so the three shares sum to 100.00.
    pub fn loss(&self) -> Percent {
        Percent::FULL - self.win() - self.tie()
    }
    pub fn hit(&self) -> Percent {
        Percent::ratio(self.hits, self.trials)
    }
    /// Final-hand category counts, ascending by category strength.
    pub fn histogram(&self) -> impl Iterator<Item = (Category, usize)> {
        Category::all().into_iter().zip(self.histogram)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trial(standing: Ordering, made: Category, hit: bool) -> Trial {
        Trial {
            standing,
            made,
            hit,
        }
    }

    #[test]
    fn classifies_standings() {
        let tally = [
            trial(Ordering::Greater, Category::OnePair, true),
            trial(Ordering::Equal, Category::HighCard, false),
            trial(Ordering::Less, Category::Flush, true),
            trial(Ordering::Greater, Category::TwoPair, false),
        ]
        .into_iter()
        .fold(Tally::default(), Tally::absorb);
        assert_eq!(tally.trials(), 4);
        assert_eq!(tally.win(), Percent::ratio(2, 4));
        assert_eq!(tally.tie(), Percent::ratio(1, 4));
        assert_eq!(tally.hit(), Percent::ratio(2, 4));
    }

    #[test]
    fn merge_matches_single_fold() {
        let head = [
            trial(Ordering::Greater, Category::Straight, true),
            trial(Ordering::Less, Category::HighCard, false),
        ];
        let tail = [
            trial(Ordering::Equal, Category::Straight, false),
            trial(Ordering::Greater, Category::FullHouse, true),
        ];
        let split = Tally::merge(
            head.into_iter().fold(Tally::default(), Tally::absorb),
            tail.into_iter().fold(Tally::default(), Tally::absorb),
        );
        let whole = head
            .into_iter()
            .chain(tail)
            .fold(Tally::default(), Tally::absorb);
        assert_eq!(split, whole);
    }

    #[test]
    fn shares_sum_to_full() {
        let tally = [
            trial(Ordering::Greater, Category::OnePair, false),
            trial(Ordering::Equal, Category::OnePair, false),
            trial(Ordering::Less, Category::OnePair, false),
        ]
        .into_iter()
        .fold(Tally::default(), Tally::absorb);
        assert_eq!(tally.win() + tally.tie() + tally.loss(), Percent::FULL);
    }

    #[test]
    fn histogram_counts_made_hands() {
        let tally = [
            trial(Ordering::Less, Category::Flush, true),
            trial(Ordering::Less, Category::Flush, true),
            trial(Ordering::Greater, Category::RoyalFlush, true),
        ]
        .into_iter()
        .fold(Tally::default(), Tally::absorb);
        let counts = tally
            .histogram()
            .filter(|(_, n)| *n > 0)
            .collect::<Vec<_>>();
        assert_eq!(
            counts,
            vec![(Category::Flush, 2), (Category::RoyalFlush, 1)]
        );
    }
}
