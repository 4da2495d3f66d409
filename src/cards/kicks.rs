use super::rank::Rank;

/// A hand's kicker cards, as a 13-bit rank mask.
///
/// Numeric order on the mask is exactly highest-kicker-first comparison,
/// since more significant bits are higher ranks. Suits are irrelevant to
/// kickers and never stored.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Kickers(u16);

/// u16 isomorphism
impl From<Kickers> for u16 {
    fn from(k: Kickers) -> Self {
        k.0
    }
}
impl From<u16> for Kickers {
    fn from(n: u16) -> Self {
        Self(n)
    }
}

/// Vec<Rank> isomorphism
impl From<Kickers> for Vec<Rank> {
    fn from(k: Kickers) -> Self {
        let mut value = k.0;
        let mut index = 0u8;
        let mut ranks = Vec::new();
        while value > 0 {
            if value & 1 == 1 {
                ranks.push(Rank::from(index));
            }
            value = value >> 1;
            index = index + 1;
        }
        ranks
    }
}
impl From<Vec<Rank>> for Kickers {
    fn from(ranks: Vec<Rank>) -> Self {
        Self(ranks.iter().map(|r| u16::from(*r)).fold(0u16, |a, b| a | b))
    }
}

impl std::fmt::Display for Kickers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for rank in Vec::<Rank>::from(*self).into_iter().rev() {
            write!(f, "{} ", rank)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u16() {
        let kickers = Kickers::from(vec![Rank::King, Rank::Nine, Rank::Two]);
        assert_eq!(kickers, Kickers::from(u16::from(kickers)));
    }

    #[test]
    fn higher_kicker_wins() {
        let ace_low = Kickers::from(vec![Rank::Ace, Rank::Three]);
        let king_queen = Kickers::from(vec![Rank::King, Rank::Queen]);
        assert!(ace_low > king_queen);
    }
}
