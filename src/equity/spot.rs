use super::error::InputError;
use crate::cards::card::Card;
use crate::cards::category::Category;
use crate::cards::deck::Deck;
use crate::cards::hand::Hand;
use crate::cards::strength::Strength;

use serde::{Deserialize, Serialize};

/// Wire shape of a calculation request.
///
/// Cards are 2-character codes, rank then suit, e.g. "Ah" or "Tc".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub player_cards: Vec<String>,
    #[serde(default)]
    pub board_cards: Vec<String>,
    #[serde(default = "Request::default_rivals")]
    pub num_opponents: usize,
}

impl Request {
    fn default_rivals() -> usize {
        crate::DEFAULT_RIVALS
    }
}

/// A validated table spot: the hero's pocket, the visible board, and
/// how many opponents are seated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spot {
    pocket: Hand,
    public: Hand,
    rivals: usize,
}

impl TryFrom<&Request> for Spot {
    type Error = InputError;
    fn try_from(request: &Request) -> Result<Self, Self::Error> {
        match request.player_cards.len() {
            1 | 2 => {}
            n => return Err(InputError::PocketCount(n)),
        }
        match request.board_cards.len() {
            0..=5 => {}
            n => return Err(InputError::BoardCount(n)),
        }
        match request.num_opponents {
            1..=9 => {}
            n => return Err(InputError::RivalCount(n)),
        }
        let mut seen = Hand::empty();
        let pocket = Self::gather(&request.player_cards, &mut seen)?;
        let public = Self::gather(&request.board_cards, &mut seen)?;
        Ok(Self {
            pocket,
            public,
            rivals: request.num_opponents,
        })
    }
}

impl Spot {
    pub fn pocket(&self) -> Hand {
        self.pocket
    }
    pub fn public(&self) -> Hand {
        self.public
    }
    pub fn rivals(&self) -> usize {
        self.rivals
    }
    /// Same cards, different number of opponents.
    pub fn with_rivals(&self, rivals: usize) -> Self {
        debug_assert!((1..=9).contains(&rivals));
        Self { rivals, ..*self }
    }
    /// Every card whose location is known.
    pub fn knowns(&self) -> Hand {
        Hand::add(self.pocket, self.public)
    }
    /// The unseen cards, in canonical order.
    pub fn deck(&self) -> Deck {
        Deck::from(self.knowns().complement())
    }
    /// The category already made, once at least 3 board cards show.
    pub fn baseline(&self) -> Option<Category> {
        match self.public.size() {
            n if n >= 3 => Some(Strength::from(self.knowns()).category()),
            _ => None,
        }
    }

    fn gather(codes: &[String], seen: &mut Hand) -> Result<Hand, InputError> {
        let mut hand = Hand::empty();
        for code in codes {
            let card = Card::try_from(code.as_str())
                .map_err(|_| InputError::MalformedCard(code.clone()))?;
            if seen.contains(&card) {
                return Err(InputError::DuplicateCard(card));
            }
            *seen = Hand::add(*seen, Hand::from(card));
            hand = Hand::add(hand, Hand::from(card));
        }
        Ok(hand)
    }
}

impl std::fmt::Display for Spot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ~ {}", self.pocket, self.public)
    }
}

impl crate::Arbitrary for Spot {
    fn random() -> Self {
        let ref mut rng = rand::rng();
        let deck = Deck::new().shuffled(rng);
        let cards = deck.cards();
        let pocket = cards[..2]
            .iter()
            .copied()
            .map(Hand::from)
            .fold(Hand::empty(), Hand::add);
        let public = cards[2..5]
            .iter()
            .copied()
            .map(Hand::from)
            .fold(Hand::empty(), Hand::add);
        Self {
            pocket,
            public,
            rivals: crate::DEFAULT_RIVALS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::rank::Rank;
    use crate::cards::suit::Suit;

    fn request(pocket: &[&str], board: &[&str], rivals: usize) -> Request {
        Request {
            player_cards: pocket.iter().map(|s| s.to_string()).collect(),
            board_cards: board.iter().map(|s| s.to_string()).collect(),
            num_opponents: rivals,
        }
    }

    #[test]
    fn rejects_pocket_counts() {
        let none = request(&[], &[], 1);
        let many = request(&["Ah", "Kh", "Qh"], &[], 1);
        assert_eq!(Spot::try_from(&none), Err(InputError::PocketCount(0)));
        assert_eq!(Spot::try_from(&many), Err(InputError::PocketCount(3)));
    }

    #[test]
    fn rejects_board_counts() {
        let req = request(&["Ah", "Kh"], &["2c", "3c", "4c", "5c", "6c", "7c"], 1);
        assert_eq!(Spot::try_from(&req), Err(InputError::BoardCount(6)));
    }

    #[test]
    fn rejects_rival_counts() {
        let none = request(&["Ah", "Kh"], &[], 0);
        let many = request(&["Ah", "Kh"], &[], 10);
        assert_eq!(Spot::try_from(&none), Err(InputError::RivalCount(0)));
        assert_eq!(Spot::try_from(&many), Err(InputError::RivalCount(10)));
    }

    #[test]
    fn rejects_malformed_codes() {
        let req = request(&["Ah", "Xx"], &[], 1);
        assert_eq!(
            Spot::try_from(&req),
            Err(InputError::MalformedCard("Xx".to_string()))
        );
    }

    #[test]
    fn rejects_duplicates_across_pocket_and_board() {
        let req = request(&["Ah", "Kh"], &["Qc", "Ah", "2d"], 1);
        let ace = Card::from((Rank::Ace, Suit::Heart));
        assert_eq!(Spot::try_from(&req), Err(InputError::DuplicateCard(ace)));
    }

    #[test]
    fn counts_precede_card_errors() {
        let req = request(&["Xx", "Yy", "Zz"], &[], 1);
        assert_eq!(Spot::try_from(&req), Err(InputError::PocketCount(3)));
    }

    #[test]
    fn baseline_needs_three_board_cards() {
        let preflop = request(&["Ah", "Kh"], &[], 1);
        let flopped = request(&["Ah", "Kh"], &["Ad", "Kd", "2c"], 1);
        assert_eq!(Spot::try_from(&preflop).unwrap().baseline(), None);
        assert_eq!(
            Spot::try_from(&flopped).unwrap().baseline(),
            Some(Category::TwoPair)
        );
    }

    #[test]
    fn deck_excludes_knowns() {
        let req = request(&["Ah", "Kh"], &["Ad", "Kd", "2c"], 1);
        let spot = Spot::try_from(&req).unwrap();
        let deck = spot.deck();
        assert_eq!(deck.size(), 47);
        assert!(deck.cards().iter().all(|c| !spot.knowns().contains(c)));
    }

    #[test]
    fn wire_defaults() {
        let req = serde_json::from_str::<Request>(r#"{"playerCards":["Ah","Kh"]}"#).unwrap();
        let spot = Spot::try_from(&req).unwrap();
        assert_eq!(spot.rivals(), 1);
        assert_eq!(spot.public(), Hand::empty());
    }
}
