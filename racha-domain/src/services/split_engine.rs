use crate::{
    error::SplitError,
    model::{Participant, ParticipantBalance, SplitResult},
    services::{FairShareAllocator, SettlementCalculator},
};

/// Computes a full settlement plan from scratch for a list of participants.
///
/// Pure and synchronous; the same input in the same order always produces the
/// same transfers.
pub struct SplitEngine {
    allocator: FairShareAllocator,
    calculator: SettlementCalculator,
}

impl Default for SplitEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SplitEngine {
    pub const fn new() -> Self {
        Self {
            allocator: FairShareAllocator,
            calculator: SettlementCalculator,
        }
    }

    pub fn compute(&self, participants: &[Participant]) -> Result<SplitResult, SplitError> {
        let Some(allocation) = self.allocator.allocate(participants)? else {
            return Ok(SplitResult::empty());
        };

        let per_unit_weight = allocation
            .total
            .as_decimal()
            .checked_div(allocation.total_weight)
            .ok_or(SplitError::TotalOverflow)?
            .normalize();
        let transfers = self.calculator.calculate(&allocation.balances);

        Ok(SplitResult {
            total: allocation.total,
            per_unit_weight,
            transfers,
        })
    }

    /// Fair shares and balances without building transfers.
    ///
    /// Empty for the degenerate split.
    pub fn balances(
        &self,
        participants: &[Participant],
    ) -> Result<Vec<ParticipantBalance>, SplitError> {
        Ok(self
            .allocator
            .allocate(participants)?
            .map(|allocation| allocation.balances)
            .unwrap_or_default())
    }
}

pub fn compute_split(participants: &[Participant]) -> Result<SplitResult, SplitError> {
    SplitEngine::new().compute(participants)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Money, Transfer};
    use rstest::{fixture, rstest};
    use rust_decimal::Decimal;

    #[fixture]
    fn engine() -> SplitEngine {
        SplitEngine::new()
    }

    fn participant(name: &str, paid: &str, weight: &str) -> Participant {
        Participant::new(name, paid.parse().expect("paid"))
            .with_weight(weight.parse().expect("weight"))
    }

    fn transfers(expected: &[(&str, &str, i64)]) -> Vec<Transfer> {
        expected
            .iter()
            .map(|&(from, to, cents)| Transfer {
                from: from.to_string(),
                to: to.to_string(),
                amount: Money::from_cents(cents),
            })
            .collect()
    }

    #[rstest]
    #[case::three_way_even(
        vec![participant("A", "120", "1"), participant("B", "30", "1"), participant("C", "0", "1")],
        15_000,
        "50",
        &[("C", "A", 5000), ("B", "A", 2000)]
    )]
    #[case::weighted_two_people(
        vec![participant("A", "100", "2"), participant("B", "0", "1")],
        10_000,
        "33.3333333333",
        &[("B", "A", 3333)]
    )]
    #[case::single_participant(
        vec![participant("A", "42.50", "2")],
        4250,
        "21.25",
        &[]
    )]
    #[case::everyone_paid_their_share(
        vec![participant("A", "10", "1"), participant("B", "10", "1")],
        2000,
        "10",
        &[]
    )]
    #[case::fractional_weights(
        vec![participant("A", "10", "0.5"), participant("B", "0", "1.5")],
        1000,
        "5",
        &[("B", "A", 750)]
    )]
    #[case::sub_cent_amounts_rounded(
        vec![participant("A", "0.005", "1"), participant("B", "0.004", "1")],
        1,
        "0.005",
        &[]
    )]
    fn compute_cases(
        engine: SplitEngine,
        #[case] participants: Vec<Participant>,
        #[case] total_cents: i64,
        #[case] per_unit_weight: &str,
        #[case] expected_transfers: &[(&str, &str, i64)],
    ) {
        let result = engine.compute(&participants).expect("split should succeed");

        assert_eq!(result.total, Money::from_cents(total_cents));
        assert_eq!(
            result.per_unit_weight.round_dp(10),
            per_unit_weight.parse::<Decimal>().expect("decimal")
        );
        assert_eq!(result.transfers, transfers(expected_transfers));
    }

    #[rstest]
    #[case::empty(vec![])]
    #[case::all_zero_weights(vec![participant("A", "80", "0"), participant("B", "20", "0")])]
    fn compute_degenerate_cases(engine: SplitEngine, #[case] participants: Vec<Participant>) {
        assert_eq!(engine.compute(&participants), Ok(SplitResult::empty()));
    }

    #[test]
    fn compute_split_matches_engine() {
        let participants = vec![participant("A", "9.99", "1"), participant("B", "0", "1")];
        assert_eq!(
            compute_split(&participants),
            SplitEngine::new().compute(&participants)
        );
    }

    #[test]
    fn compute_propagates_range_errors() {
        let participants = vec![Participant::new("A", Decimal::MAX)];
        assert_eq!(
            compute_split(&participants),
            Err(SplitError::AmountOutOfRange {
                name: "A".to_string()
            })
        );
    }

    #[test]
    fn balances_are_empty_for_degenerate_split() {
        let balances = SplitEngine::new()
            .balances(&[participant("A", "10", "0")])
            .expect("degenerate split is not an error");
        assert!(balances.is_empty());
    }
}
