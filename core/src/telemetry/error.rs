//! Error types for telemetry parsing

use thiserror::Error;

/// A single malformed combatant record. Never fatal for the fight.
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("combatant entry {index} is not a valid record")]
    Malformed {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("combatant entry has no character name")]
    MissingName,

    #[error("invalid gear slot {slot} on {character}")]
    InvalidSlot { character: String, slot: u8 },

    #[error("{character} has {count} ability entries, expected at most 12")]
    TooManyAbilities { character: String, count: usize },

    #[error("negative or non-finite performance totals for {character}")]
    InvalidTotals { character: String },
}
