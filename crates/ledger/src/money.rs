use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};

use serde::{Deserialize, Serialize};

/// Signed money amount represented as **integer cents**.
///
/// Use this type for **all** monetary values in the engine (totals, split
/// amounts, balances) to avoid floating-point drift. Balance accumulation
/// over an arbitrary expense history stays exact; rounding happens only in
/// the explicit share helpers below, half-up to the nearest cent.
///
/// The value is signed:
/// - positive = owed to the viewer
/// - negative = owed by the viewer
///
/// # Examples
///
/// ```rust
/// use ledger::MoneyCents;
///
/// let amount = MoneyCents::new(12_34);
/// assert_eq!(amount.cents(), 1234);
/// assert_eq!(amount.to_string(), "12.34");
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct MoneyCents(i64);

impl MoneyCents {
    pub const ZERO: MoneyCents = MoneyCents(0);

    /// Creates a new amount from integer cents.
    #[must_use]
    pub const fn new(cents: i64) -> Self {
        Self(cents)
    }

    /// Returns the raw value in cents.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Returns `true` if the amount is 0.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the amount is positive.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Returns the absolute value.
    #[must_use]
    pub const fn abs(self) -> MoneyCents {
        MoneyCents(self.0.abs())
    }

    /// One participant's share when this amount is divided equally among
    /// `n` heads, rounded half-up to the cent.
    ///
    /// The caller guarantees `n > 0` and a non-negative amount; the sum of
    /// `n` such shares may differ from the original amount by up to `n`
    /// half-cents, which is why the expense validator works with a one-cent
    /// tolerance instead of an exact match.
    #[must_use]
    pub const fn equal_share(self, n: u32) -> MoneyCents {
        let n = n as i64;
        MoneyCents((2 * self.0 + n) / (2 * n))
    }

    /// `percent` percent of this amount, rounded half-up to the cent.
    #[must_use]
    pub fn percent_share(self, percent: f64) -> MoneyCents {
        MoneyCents((self.0 as f64 * percent / 100.0).round() as i64)
    }

    /// This amount expressed as a percentage of `total`, rounded to two
    /// decimals. Informational only.
    #[must_use]
    pub fn percent_of(self, total: MoneyCents) -> f64 {
        round2(self.0 as f64 / total.0 as f64 * 100.0)
    }
}

/// Rounds half-up (away from zero) to two decimal places.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl fmt::Display for MoneyCents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl From<i64> for MoneyCents {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<MoneyCents> for i64 {
    fn from(value: MoneyCents) -> Self {
        value.0
    }
}

impl Add for MoneyCents {
    type Output = MoneyCents;

    fn add(self, rhs: MoneyCents) -> Self::Output {
        MoneyCents(self.0 + rhs.0)
    }
}

impl AddAssign for MoneyCents {
    fn add_assign(&mut self, rhs: MoneyCents) {
        self.0 += rhs.0;
    }
}

impl Sub for MoneyCents {
    type Output = MoneyCents;

    fn sub(self, rhs: MoneyCents) -> Self::Output {
        MoneyCents(self.0 - rhs.0)
    }
}

impl SubAssign for MoneyCents {
    fn sub_assign(&mut self, rhs: MoneyCents) {
        self.0 -= rhs.0;
    }
}

impl Neg for MoneyCents {
    type Output = MoneyCents;

    fn neg(self) -> Self::Output {
        MoneyCents(-self.0)
    }
}

impl Sum for MoneyCents {
    fn sum<I: Iterator<Item = MoneyCents>>(iter: I) -> Self {
        MoneyCents(iter.map(|m| m.0).sum())
    }
}
