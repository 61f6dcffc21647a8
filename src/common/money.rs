use bigdecimal::{BigDecimal, ParseBigDecimalError, Signed, ToPrimitive};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
const SCALE: i64 = 10_000;

#[derive(Debug, Clone, Copy, Default)]
/// A signed monetary amount stored in ten-thousandths of a currency unit.
///
/// Ledger arithmetic (postings, running balance) stays in integer space, so
/// `initial + Σ amounts` is exact no matter how many entries are applied.
/// `BigDecimal` is only used at the edges: parsing user input, percentage
/// arithmetic and fixed-width rendering.
///
/// # Examples
/// ```
/// use expense_tracker::common::money::Money;
///
/// let amount: Money = "-50".parse().unwrap();
/// assert_eq!(amount.as_i64(), -500_000);
/// assert_eq!(amount.to_string(), "-50");
/// assert_eq!(amount.to_string_4dp(), "-50.0000");
/// ```
pub struct Money(i64);

impl Money {
    /// Whole currency units, e.g. `Money::from_units(5)` is `5.0000`.
    pub fn from_units(units: i64) -> Self {
        Money(units.saturating_mul(SCALE))
    }

    pub fn zero() -> Self {
        Money(0)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// `None` when the sum leaves the `i64` range.
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    pub fn abs(&self) -> Money {
        Money(self.0.saturating_abs())
    }

    pub fn to_string_4dp(&self) -> String {
        let bd = BigDecimal::from(self.0) / BigDecimal::from(SCALE);
        format!("{:.4}", bd)
    }

    /// Renders without trailing zeros: `1102.5`, `-50`, `0`.
    pub fn to_plain_string(&self) -> String {
        let fixed = self.to_string_4dp();
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    }

    /// Returns `self + self * percent / 100`, rounded to the nearest
    /// ten-thousandth and clamped to the representable range.
    pub fn grown_by_percent(&self, percent: &BigDecimal) -> Money {
        let hundred = BigDecimal::from(100);
        let grown = (BigDecimal::from(self.0) * (&hundred + percent) / hundred).round(0);
        match grown.to_i64() {
            Some(value) => Money(value),
            None if grown.is_negative() => Money(i64::MIN),
            None => Money(i64::MAX),
        }
    }
}

impl std::str::FromStr for Money {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty amount".into()));
        }

        let bd: BigDecimal = t.parse()?;

        // Scale to 4 decimal places
        let scaled = (bd * BigDecimal::from(SCALE)).round(0);
        let value: i64 = scaled
            .to_i64()
            .ok_or_else(|| ParseBigDecimalError::Other("amount overflow".into()))?;

        Ok(Money(value))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_plain_string())
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl Eq for Money {}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;
    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl Neg for Money {
    type Output = Money;
    fn neg(self) -> Money {
        Money(-self.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        *self = *self - rhs;
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}
