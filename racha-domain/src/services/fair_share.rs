use crate::{
    error::SplitError,
    model::{Money, Participant, ParticipantBalance},
    services::fixed_point::{floor_to_cents, to_cents},
};
use rust_decimal::Decimal;

/// Totals and per-participant balances of one split, in input order.
#[derive(Clone, Debug, PartialEq)]
pub struct Allocation {
    pub total: Money,
    pub total_weight: Decimal,
    pub balances: Vec<ParticipantBalance>,
}

/// Splits the cent total into weighted fair shares that add up to the total exactly.
pub struct FairShareAllocator;

impl FairShareAllocator {
    /// Computes every participant's fair share and balance.
    ///
    /// Returns `Ok(None)` for the degenerate split: no participants, or a total
    /// weight of zero.
    ///
    /// Each share is `floor(base_unit × weight)` where `base_unit` is the cent
    /// total divided by the total weight, rounded down. The cents left over are
    /// handed out one at a time in input order, wrapping around the list, so
    /// the shares always sum to the cent total.
    pub fn allocate(&self, participants: &[Participant]) -> Result<Option<Allocation>, SplitError> {
        if participants.is_empty() {
            return Ok(None);
        }

        let paid = participants
            .iter()
            .map(|participant| {
                to_cents(participant.paid).ok_or_else(|| SplitError::AmountOutOfRange {
                    name: participant.name.clone(),
                })
            })
            .collect::<Result<Vec<Money>, _>>()?;

        let total = paid
            .iter()
            .try_fold(Money::ZERO, |acc, amount| acc.checked_add(*amount))
            .ok_or(SplitError::TotalOverflow)?;
        let total_weight = participants
            .iter()
            .try_fold(Decimal::ZERO, |acc, participant| {
                acc.checked_add(participant.weight)
            })
            .ok_or(SplitError::TotalOverflow)?;

        if total_weight.is_zero() {
            tracing::debug!(
                participant_count = participants.len(),
                total = %total,
                "Total weight is zero; returning degenerate split"
            );
            return Ok(None);
        }

        let base_unit = Decimal::from(total.cents())
            .checked_div(total_weight)
            .and_then(floor_to_cents)
            .ok_or(SplitError::TotalOverflow)?;

        let mut shares = participants
            .iter()
            .map(|participant| {
                Decimal::from(base_unit)
                    .checked_mul(participant.weight)
                    .and_then(floor_to_cents)
                    .ok_or_else(|| SplitError::AmountOutOfRange {
                        name: participant.name.clone(),
                    })
            })
            .collect::<Result<Vec<i64>, _>>()?;

        let assigned = shares
            .iter()
            .try_fold(0_i64, |acc, share| acc.checked_add(*share))
            .ok_or(SplitError::TotalOverflow)?;
        let remainder = total
            .cents()
            .checked_sub(assigned)
            .ok_or(SplitError::TotalOverflow)?;
        distribute_remainder(&mut shares, remainder);

        tracing::debug!(
            participant_count = participants.len(),
            total = %total,
            total_weight = %total_weight,
            base_unit,
            remainder,
            "Fair shares allocated"
        );

        let balances = participants
            .iter()
            .zip(paid)
            .zip(shares)
            .map(|((participant, paid), share)| {
                let fair_share = Money::from_cents(share);
                let balance = paid
                    .checked_sub(fair_share)
                    .ok_or(SplitError::TotalOverflow)?;
                Ok(ParticipantBalance {
                    name: participant.name.clone(),
                    paid,
                    fair_share,
                    balance,
                })
            })
            .collect::<Result<Vec<_>, SplitError>>()?;

        debug_assert_eq!(
            balances.iter().map(|entry| entry.balance).sum::<Money>(),
            Money::ZERO
        );

        Ok(Some(Allocation {
            total,
            total_weight,
            balances,
        }))
    }
}

/// Hands `remainder` cents out one at a time by index, wrapping around.
///
/// Equivalent to the round-robin loop, computed in closed form. A negative
/// remainder (only reachable with a negative total weight) takes cents back
/// the same way.
fn distribute_remainder(shares: &mut [i64], remainder: i64) {
    if shares.is_empty() || remainder == 0 {
        return;
    }

    let count = shares.len() as i64;
    let base = remainder / count;
    let extra = (remainder % count).unsigned_abs() as usize;
    let step = remainder.signum();

    for (idx, share) in shares.iter_mut().enumerate() {
        *share += base;
        if idx < extra {
            *share += step;
        }
    }
}
