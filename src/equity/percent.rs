/// A probability in hundredths of a percent.
///
/// Integer centipercent keeps report arithmetic exact. Win and tie are
/// rounded half-up independently and loss is derived by subtraction, so
/// the three shares of any simulation sum to exactly 100.00.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Percent(i64);

impl Percent {
    pub const ZERO: Self = Self(0);
    pub const FULL: Self = Self(100_00);

    /// Share of part in whole, rounded half-up to the nearest 0.01%.
    pub fn ratio(part: usize, whole: usize) -> Self {
        assert!(whole > 0);
        let part = part as i64;
        let whole = whole as i64;
        Self((part * 100_00 * 2 + whole) / (whole * 2))
    }
}

impl std::ops::Add for Percent {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}
impl std::ops::Sub for Percent {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl std::fmt::Display for Percent {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let n = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, n / 100, n % 100)
    }
}
