use crate::{
    error::{ExtractionError, RosterStoreError},
    model::ImportRecord,
    roster::Roster,
};

/// Turns free text describing who paid what into import records.
pub trait ExpenseExtractor: Send + Sync {
    fn extract(&self, text: &str) -> Result<Vec<ImportRecord>, ExtractionError>;
}

/// Keeps a roster across sessions.
pub trait RosterStore: Send + Sync {
    fn load(&self) -> Result<Roster, RosterStoreError>;
    fn save(&self, roster: &Roster) -> Result<(), RosterStoreError>;
}
