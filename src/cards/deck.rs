use super::card::Card;
use super::hand::Hand;

/// An ordered sequence of distinct cards.
///
/// Unlike [`Hand`], a Deck preserves order, which is what shuffling and
/// dealing are about. Operations are pure: filtering and shuffling return
/// new decks, so concurrent trials never observe each other's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Deck {
    /// the full 52-card deck in canonical order. 2c first, As last.
    pub fn new() -> Self {
        Self((0..52u8).map(Card::from).collect())
    }
    /// this deck minus the given cards. absent cards are a no-op.
    pub fn without(&self, used: Hand) -> Self {
        Self(
            self.0
                .iter()
                .copied()
                .filter(|card| !used.contains(card))
                .collect(),
        )
    }
    /// a new uniformly random permutation of this deck
    pub fn shuffled<R>(&self, rng: &mut R) -> Self
    where
        R: rand::Rng + ?Sized,
    {
        use rand::seq::SliceRandom;
        let mut cards = self.0.clone();
        cards.shuffle(rng);
        Self(cards)
    }
    pub fn size(&self) -> usize {
        self.0.len()
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

/// Hand isomorphism (ordering recovered as canonical ascending)
impl From<Hand> for Deck {
    fn from(hand: Hand) -> Self {
        Self(hand.into_iter().collect())
    }
}
impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        Self::from(deck.0)
    }
}

impl From<Deck> for Vec<Card> {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
