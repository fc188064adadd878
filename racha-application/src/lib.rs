#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod model;
pub mod ports;
pub mod roster;
pub mod split_processor;

pub use error::{ExtractionError, ImportError, RosterStoreError};
pub use model::{ImportRecord, RosterEntry};
pub use ports::{ExpenseExtractor, RosterStore};
pub use roster::{Roster, normalize_name};
pub use split_processor::{SplitOutcome, SplitProcessor};
