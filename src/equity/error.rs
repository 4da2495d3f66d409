use crate::cards::card::Card;

use thiserror::Error;

/// Rejections for malformed equity requests.
///
/// Counts are checked before any card decoding; card codes are then
/// scanned left to right, pocket before board.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("player must hold 1 or 2 cards, got {0}")]
    PocketCount(usize),

    #[error("board must show 0 to 5 cards, got {0}")]
    BoardCount(usize),

    #[error("opponent count must be between 1 and 9, got {0}")]
    RivalCount(usize),

    #[error("malformed card code: {0}")]
    MalformedCard(String),

    #[error("duplicate card: {0}")]
    DuplicateCard(Card),
}
