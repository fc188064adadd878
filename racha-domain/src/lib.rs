#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod model;
pub mod services;

pub use error::{NumericField, SplitError};
pub use model::{Money, Participant, ParticipantBalance, SplitResult, Transfer};
pub use services::{
    Allocation, FairShareAllocator, SettlementCalculator, SplitEngine, compute_split, to_cents,
};
