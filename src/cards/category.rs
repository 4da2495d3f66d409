/// The ten hand classes, weakest to strongest.
///
/// Categories are a closed enum with an explicit total order, so comparison
/// and bookkeeping can never depend on display names. The canonical names
/// surface only at the wire boundary via Display.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Category {
    #[default]
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOAK = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOAK = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    /// all ten categories in ascending strength order
    pub const fn all() -> [Category; 10] {
        [
            Category::HighCard,
            Category::OnePair,
            Category::TwoPair,
            Category::ThreeOAK,
            Category::Straight,
            Category::Flush,
            Category::FullHouse,
            Category::FourOAK,
            Category::StraightFlush,
            Category::RoyalFlush,
        ]
    }
    pub const fn name(&self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOAK => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOAK => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

/// u8 isomorphism
impl From<u8> for Category {
    fn from(n: u8) -> Category {
        match n {
            0 => Category::HighCard,
            1 => Category::OnePair,
            2 => Category::TwoPair,
            3 => Category::ThreeOAK,
            4 => Category::Straight,
            5 => Category::Flush,
            6 => Category::FullHouse,
            7 => Category::FourOAK,
            8 => Category::StraightFlush,
            9 => Category::RoyalFlush,
            _ => panic!("Invalid category u8: {}", n),
        }
    }
}
impl From<Category> for u8 {
    fn from(c: Category) -> u8 {
        c as u8
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
