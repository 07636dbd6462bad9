//! Build grouping, consolidation and publishing
//!
//! Per-fight grouping lives in [`FightBuilds`]; cross-fight merging in
//! [`BuildLedger`]; the publishing threshold in [`split_publishable`].

mod group;
mod ledger;
mod mundus;
mod stats;
mod threshold;

#[cfg(test)]
mod ledger_tests;

pub use group::{BuildGroup, FightBuilds, GroupKey};
pub use ledger::BuildLedger;
pub use mundus::backfill_mundus;
pub use stats::{BuildStatistics, RoleCounts};
pub use threshold::{ThresholdSplit, is_publishable, min_count_for, split_publishable};
