pub mod analysis;
pub mod builds;
pub mod context;
pub mod game_data;
pub mod telemetry;
pub mod trial;

// Re-exports for convenience
pub use analysis::analyze_player;
pub use builds::{
    BuildGroup, BuildLedger, BuildStatistics, FightBuilds, GroupKey, ThresholdSplit,
    backfill_mundus, is_publishable, split_publishable,
};
pub use context::{AnalysisConfig, AnalysisConfigExt, ConfigError};
pub use game_data::{GearSlot, Role, SkillLine};
pub use telemetry::{
    AbilityRef, CombatantParser, FightContext, FightParse, GearPiece, PlayerRecord, SetCounts,
    TelemetryError,
};
pub use trial::{
    FightInput, TrialScan, fight_context, scan_fights, select_best_fight, update_version,
};
