//! Raw combatant-info payloads as delivered by the report-fetching layer

use serde::Deserialize;

/// One participant entry of a fight table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCombatant {
    /// Character name
    #[serde(default)]
    pub name: String,
    /// Account handle ("@handle")
    #[serde(default)]
    pub display_name: String,
    /// Base class ("Nightblade", ...)
    #[serde(default, rename = "type")]
    pub class_name: String,
    /// Authoritative role tag, when the table supplies one
    #[serde(default)]
    pub role: Option<String>,
    /// Precomputed DPS, when the table supplies one
    #[serde(default)]
    pub dps: Option<f64>,
    /// Total damage done
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub healing_total: f64,
    /// Active time in milliseconds
    #[serde(default)]
    pub active_time: u64,
    /// Share of the fight's damage, in percent
    #[serde(default)]
    pub percent: Option<f64>,
    #[serde(default)]
    pub gear: Vec<RawGearItem>,
    /// Slotted abilities, bar 1 then bar 2
    #[serde(default)]
    pub talents: Vec<RawTalent>,
    #[serde(default)]
    pub mundus: Option<String>,
    /// Slotted champion point stars
    #[serde(default)]
    pub champion_points: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawGearItem {
    pub slot: u8,
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub set_name: Option<String>,
    #[serde(default, rename = "trait")]
    pub trait_id: Option<u16>,
    #[serde(default)]
    pub enchant_type: Option<u16>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTalent {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub guid: Option<u64>,
    #[serde(default)]
    pub ability_icon: String,
}

/// A fight as listed in a report's fight index
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFightInfo {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub difficulty: Option<u32>,
    #[serde(default)]
    pub kill: bool,
    #[serde(default)]
    pub start_time: u64,
    #[serde(default)]
    pub end_time: u64,
}

impl RawFightInfo {
    pub fn duration_ms(&self) -> u64 {
        self.end_time.saturating_sub(self.start_time)
    }
}

/// Report metadata with its fight index
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReport {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub title: String,
    /// Report start, epoch milliseconds
    #[serde(default)]
    pub start_time: u64,
    /// "10.2.5" style game version, when the host knows it
    #[serde(default)]
    pub game_version: Option<String>,
    #[serde(default)]
    pub fights: Vec<RawFightInfo>,
}
