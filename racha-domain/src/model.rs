use rust_decimal::{Decimal, prelude::FromPrimitive};
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};

use crate::error::{NumericField, SplitError};

/// Number of decimal places of the minor currency unit.
pub const CENT_SCALE: u32 = 2;

/// Signed amount of money in cents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "Decimal")]
pub struct Money(i64);

impl Money {
    pub const ZERO: Self = Self(0);

    pub fn zero() -> Self {
        Self::ZERO
    }

    pub fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub fn cents(self) -> i64 {
        self.0
    }

    /// Saturates at `i64::MAX` cents instead of overflowing on `i64::MIN`.
    pub fn abs(self) -> Self {
        Self(self.0.saturating_abs())
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    pub fn signum(self) -> i64 {
        self.0.signum()
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }

    pub fn as_decimal(self) -> Decimal {
        Decimal::new(self.0, CENT_SCALE)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.as_decimal()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_decimal())
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// One person taking part in a split.
///
/// `weight` scales the person's share of the total; 1 is an equal split.
/// Names are expected to be unique (case-insensitively) within a computation,
/// which is enforced by the roster layer rather than the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub paid: Decimal,
    #[serde(default = "default_weight")]
    pub weight: Decimal,
}

pub fn default_weight() -> Decimal {
    Decimal::ONE
}

impl Participant {
    pub fn new(name: impl Into<String>, paid: Decimal) -> Self {
        Self {
            name: name.into(),
            paid,
            weight: default_weight(),
        }
    }

    pub fn with_weight(mut self, weight: Decimal) -> Self {
        self.weight = weight;
        self
    }

    /// Builds a participant from binary floating point input.
    ///
    /// NaN and infinities have no decimal representation and are rejected here,
    /// before they can reach the engine.
    pub fn from_f64(name: impl Into<String>, paid: f64, weight: f64) -> Result<Self, SplitError> {
        let name = name.into();
        let paid = finite_decimal(&name, NumericField::Paid, paid)?;
        let weight = finite_decimal(&name, NumericField::Weight, weight)?;
        Ok(Self { name, paid, weight })
    }
}

fn finite_decimal(name: &str, field: NumericField, value: f64) -> Result<Decimal, SplitError> {
    if !value.is_finite() {
        return Err(SplitError::NonFinite {
            name: name.to_string(),
            field,
        });
    }
    Decimal::from_f64(value).ok_or_else(|| SplitError::AmountOutOfRange {
        name: name.to_string(),
    })
}

/// Paid amount, fair share and their difference for one participant.
///
/// A positive balance means the participant is owed money.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ParticipantBalance {
    pub name: String,
    pub paid: Money,
    pub fair_share: Money,
    pub balance: Money,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Transfer {
    pub from: String,
    pub to: String,
    pub amount: Money,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SplitResult {
    pub total: Money,
    /// Average cost per unit of weight. Informative only: with uneven weights
    /// it is not what any single participant owes.
    pub per_unit_weight: Decimal,
    pub transfers: Vec<Transfer>,
}

impl SplitResult {
    pub fn empty() -> Self {
        Self {
            total: Money::ZERO,
            per_unit_weight: Decimal::ZERO,
            transfers: Vec::new(),
        }
    }

    pub fn is_settled(&self) -> bool {
        self.transfers.is_empty()
    }
}
