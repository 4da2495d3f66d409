use super::spot::Spot;
use crate::cards::card::Card;
use crate::cards::category::Category;
use crate::cards::hand::Hand;
use crate::cards::strength::Strength;

use std::collections::BTreeMap;

/// Exhaustive single-card lookahead.
///
/// With at least 3 board cards showing, every unseen card is tried
/// against the made hand; a card is an out iff it lifts the category.
/// Earlier streets have no meaningful current hand, so the scan comes
/// back empty there. Cards keep canonical deck order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Outs(Vec<(Card, Category)>);

impl From<&Spot> for Outs {
    fn from(spot: &Spot) -> Self {
        use rayon::prelude::*;
        match spot.baseline() {
            None => Self::default(),
            Some(floor) => Self(
                Vec::<Card>::from(spot.deck())
                    .into_par_iter()
                    .map(|card| (card, Hand::add(spot.knowns(), Hand::from(card))))
                    .map(|(card, drawn)| (card, Strength::from(drawn).category()))
                    .filter(|(_, made)| *made > floor)
                    .collect(),
            ),
        }
    }
}

impl Outs {
    pub fn cards(&self) -> impl Iterator<Item = (Card, Category)> + '_ {
        self.0.iter().copied()
    }
    pub fn total(&self) -> usize {
        self.0.len()
    }
    /// Out counts keyed by the category each card makes.
    pub fn breakdown(&self) -> BTreeMap<Category, usize> {
        self.0.iter().fold(BTreeMap::new(), |mut map, (_, made)| {
            *map.entry(*made).or_insert(0) += 1;
            map
        })
    }
}
