//! Conversion between decimal amounts and the integer cent domain.
//!
//! Every money figure is moved into whole cents once, at the boundary, so the
//! settlement arithmetic never accumulates binary floating point error.

use crate::model::Money;
use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};

/// Rounds `amount × 100` half away from zero (0.005 -> 1 cent, -0.005 -> -1 cent).
///
/// Returns `None` when the result does not fit in an `i64` cent count.
pub fn to_cents(amount: Decimal) -> Option<Money> {
    amount
        .checked_mul(Decimal::ONE_HUNDRED)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .map(Money::from_cents)
}

/// Largest whole cent count not greater than `value`, already expressed in cents.
pub fn floor_to_cents(value: Decimal) -> Option<i64> {
    value.floor().to_i64()
}
