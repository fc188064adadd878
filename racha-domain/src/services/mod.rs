pub mod fair_share;
pub mod fixed_point;
pub mod settlement_calculator;
pub mod split_engine;

pub use fair_share::{Allocation, FairShareAllocator};
pub use fixed_point::{floor_to_cents, to_cents};
pub use settlement_calculator::SettlementCalculator;
pub use split_engine::{SplitEngine, compute_split};
