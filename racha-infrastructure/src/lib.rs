#![warn(clippy::uninlined_format_args)]

pub mod json_extractor;
pub mod line_extractor;
pub mod roster_store;

pub use json_extractor::JsonExpenseExtractor;
pub use line_extractor::LineExpenseExtractor;
pub use roster_store::JsonFileRosterStore;
