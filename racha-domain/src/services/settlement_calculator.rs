use crate::model::{Money, ParticipantBalance, Transfer};

/// Settlement calculation service
pub struct SettlementCalculator;

impl SettlementCalculator {
    /// Builds the transfers that bring every balance to zero.
    ///
    /// Balances are sorted ascending (stable, so ties keep input order), then
    /// the largest debtor at the front pays the largest creditor at the back.
    /// Each step closes at least one side, so at most `n - 1` transfers are
    /// emitted.
    ///
    /// # Arguments
    /// * `balances` - Per-participant balances; they must sum to zero
    ///
    /// # Returns
    /// Transfers in emission order
    pub fn calculate(&self, balances: &[ParticipantBalance]) -> Vec<Transfer> {
        debug_assert_eq!(
            balances.iter().map(|entry| entry.balance).sum::<Money>(),
            Money::ZERO
        );

        let mut ledger: Vec<(&str, Money)> = balances
            .iter()
            .map(|entry| (entry.name.as_str(), entry.balance))
            .collect();
        ledger.sort_by_key(|&(_, balance)| balance);

        let mut transfers = Vec::new();
        if ledger.len() < 2 {
            return transfers;
        }

        let mut debtor = 0;
        let mut creditor = ledger.len() - 1;

        while debtor < creditor {
            if ledger[debtor].1.is_zero() {
                debtor += 1;
                continue;
            }
            if ledger[creditor].1.is_zero() {
                creditor -= 1;
                continue;
            }

            let amount = ledger[debtor].1.abs().min(ledger[creditor].1);
            if amount.is_positive() {
                transfers.push(Transfer {
                    from: ledger[debtor].0.to_string(),
                    to: ledger[creditor].0.to_string(),
                    amount,
                });
            }

            ledger[debtor].1 += amount;
            ledger[creditor].1 -= amount;
        }

        tracing::debug!(
            participant_count = balances.len(),
            transfer_count = transfers.len(),
            "Settlement transfers built"
        );

        transfers
    }
}
