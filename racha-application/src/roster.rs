use indexmap::IndexMap;
use racha_domain::Participant;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::{ImportRecord, RosterEntry};

/// Case-insensitive identity of a participant name.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// The editable list of people in a split, in entry order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    pub fn new(entries: Vec<RosterEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<RosterEntry> {
        self.entries
    }

    pub fn push(&mut self, entry: RosterEntry) {
        self.entries.push(entry);
    }

    pub fn remove(&mut self, index: usize) -> Option<RosterEntry> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Normalized names used by more than one named row, in first-seen order.
    pub fn duplicate_names(&self) -> Vec<String> {
        let mut counts: IndexMap<String, usize> = IndexMap::new();
        for entry in self.valid_entries() {
            *counts.entry(normalize_name(&entry.name)).or_insert(0) += 1;
        }

        counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(name, _)| name)
            .collect()
    }

    pub fn has_duplicates(&self) -> bool {
        !self.duplicate_names().is_empty()
    }

    /// Rows that take part in a split: those with a non-blank name.
    pub fn valid_entries(&self) -> impl Iterator<Item = &RosterEntry> + '_ {
        self.entries.iter().filter(|entry| entry.has_name())
    }

    /// Engine input for the named rows, with names trimmed.
    pub fn participants(&self) -> Vec<Participant> {
        self.valid_entries()
            .map(|entry| Participant::new(entry.name.trim(), entry.paid).with_weight(entry.weight))
            .collect()
    }

    /// Payment key of the named row, if it has a non-blank one.
    pub fn pix_for(&self, name: &str) -> Option<&str> {
        let key = normalize_name(name);
        self.valid_entries()
            .find(|entry| normalize_name(&entry.name) == key)
            .map(|entry| entry.pix.trim())
            .filter(|pix| !pix.is_empty())
    }

    /// True when no row has a name or an amount yet.
    pub fn is_effectively_empty(&self) -> bool {
        self.entries
            .iter()
            .all(|entry| !entry.has_name() && entry.paid.is_zero())
    }

    /// Merges imported expenses into the roster.
    ///
    /// An effectively empty roster is replaced outright. Otherwise rows with
    /// no name, description or positive amount are dropped first. A record
    /// whose name matches an existing row (case-insensitively) adds to that
    /// row's amount and appends its description; any other record becomes a
    /// new row with weight 1.
    pub fn merge_import<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = ImportRecord>,
    {
        let mut merged = if self.is_effectively_empty() {
            Vec::new()
        } else {
            std::mem::take(&mut self.entries)
        };
        merged.retain(|entry| {
            entry.has_name() || !entry.description.trim().is_empty() || entry.paid > Decimal::ZERO
        });

        for record in records {
            let key = normalize_name(&record.name);
            match merged
                .iter_mut()
                .find(|entry| normalize_name(&entry.name) == key)
            {
                Some(existing) => {
                    existing.paid += record.paid;
                    existing.description = join_descriptions(&existing.description, &record.description);
                }
                None => merged.push(
                    RosterEntry::new(record.name, record.paid).with_description(record.description),
                ),
            }
        }

        self.entries = merged;
    }
}

impl FromIterator<RosterEntry> for Roster {
    fn from_iter<T: IntoIterator<Item = RosterEntry>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

fn join_descriptions(existing: &str, incoming: &str) -> String {
    [existing, incoming]
        .into_iter()
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
