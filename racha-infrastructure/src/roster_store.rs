use racha_application::{Roster, RosterStore, RosterStoreError};
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

/// Stores the roster as a pretty-printed JSON array in a single file.
pub struct JsonFileRosterStore {
    path: PathBuf,
}

impl JsonFileRosterStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RosterStore for JsonFileRosterStore {
    fn load(&self) -> Result<Roster, RosterStoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no saved roster");
                return Ok(Roster::default());
            }
            Err(err) => return Err(err.into()),
        };
        if content.trim().is_empty() {
            return Ok(Roster::default());
        }

        let roster: Roster = serde_json::from_str(&content)
            .map_err(|err| RosterStoreError::Malformed(err.to_string()))?;
        tracing::debug!(path = %self.path.display(), entries = roster.len(), "roster loaded");
        Ok(roster)
    }

    fn save(&self, roster: &Roster) -> Result<(), RosterStoreError> {
        let json = serde_json::to_string_pretty(roster)
            .map_err(|err| RosterStoreError::Malformed(err.to_string()))?;
        fs::write(&self.path, json)?;
        tracing::debug!(path = %self.path.display(), entries = roster.len(), "roster saved");
        Ok(())
    }
}
