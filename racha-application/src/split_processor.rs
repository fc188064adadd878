use crate::{error::ImportError, ports::ExpenseExtractor, roster::Roster};
use racha_domain::{SplitEngine, SplitError, SplitResult};

#[derive(Debug, Clone, PartialEq)]
pub enum SplitOutcome {
    Settled(SplitResult),
    /// Calculation is skipped until every name is unique.
    DuplicateNames(Vec<String>),
    NoParticipants,
    Failed(SplitError),
}

#[derive(Clone, Copy)]
pub struct SplitProcessor<'a> {
    extractor: &'a dyn ExpenseExtractor,
    engine: &'a SplitEngine,
}

impl<'a> SplitProcessor<'a> {
    pub fn new(extractor: &'a dyn ExpenseExtractor, engine: &'a SplitEngine) -> Self {
        Self { extractor, engine }
    }

    pub fn evaluate(&self, roster: &Roster) -> SplitOutcome {
        let duplicates = roster.duplicate_names();
        if !duplicates.is_empty() {
            tracing::warn!(?duplicates, "roster has duplicate names");
            return SplitOutcome::DuplicateNames(duplicates);
        }

        let participants = roster.participants();
        if participants.is_empty() {
            tracing::warn!(entries = roster.len(), "roster has no named participants");
            return SplitOutcome::NoParticipants;
        }

        match self.engine.compute(&participants) {
            Ok(result) => {
                tracing::info!(
                    participants = participants.len(),
                    total = %result.total,
                    transfers = result.transfers.len(),
                    "split settled"
                );
                SplitOutcome::Settled(result)
            }
            Err(err) => {
                tracing::warn!(error = %err, "split calculation failed");
                SplitOutcome::Failed(err)
            }
        }
    }

    /// Extracts expenses from `text` and merges them into `roster`.
    ///
    /// Returns the number of records merged. The roster is left untouched when
    /// extraction fails or finds nothing.
    pub fn import(&self, text: &str, roster: &mut Roster) -> Result<usize, ImportError> {
        let records = self.extractor.extract(text)?;
        if records.is_empty() {
            tracing::warn!("import produced no records");
            return Err(ImportError::NothingExtracted);
        }

        let count = records.len();
        roster.merge_import(records);
        tracing::info!(records = count, entries = roster.len(), "expenses imported");
        Ok(count)
    }
}
