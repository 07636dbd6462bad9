//! Shared configuration and output types for Build-O-Rama
//!
//! This crate contains serializable types shared between the analysis core
//! (buildorama-core) and the page renderer that consumes its published builds.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Analysis Config
// ─────────────────────────────────────────────────────────────────────────────

/// Thresholds used by build classification and publishing.
///
/// Every field has a serde default so partial config files stay valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Minimum population for a DPS (or unclassified) build to be published
    #[serde(default = "default_dps_min_count")]
    pub dps_min_count: usize,
    /// Minimum population for a tank or healer build to be published
    #[serde(default = "default_support_min_count")]
    pub support_min_count: usize,
    /// Pieces a set needs before it can appear in a build identity
    #[serde(default = "default_signature_set_min_pieces")]
    pub signature_set_min_pieces: u32,
    /// Maximum number of signature sets in a build identity
    #[serde(default = "default_signature_set_limit")]
    pub signature_set_limit: usize,
    /// Healing above this fraction of damage marks a player as healer
    #[serde(default = "default_healer_ratio")]
    pub healer_ratio: f64,
    /// Number of skill lines that make up a subclass signature
    #[serde(default = "default_max_subclasses")]
    pub max_subclasses: usize,
}

fn default_dps_min_count() -> usize {
    5
}

fn default_support_min_count() -> usize {
    3
}

fn default_signature_set_min_pieces() -> u32 {
    4
}

fn default_signature_set_limit() -> usize {
    2
}

fn default_healer_ratio() -> f64 {
    0.5
}

fn default_max_subclasses() -> usize {
    3
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            dps_min_count: default_dps_min_count(),
            support_min_count: default_support_min_count(),
            signature_set_min_pieces: default_signature_set_min_pieces(),
            signature_set_limit: default_signature_set_limit(),
            healer_ratio: default_healer_ratio(),
            max_subclasses: default_max_subclasses(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Published Builds (consumed by the page renderer)
// ─────────────────────────────────────────────────────────────────────────────

/// One equipped item as shown on a build page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishedGear {
    pub slot: String,
    pub item_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub set_name: String,
    pub trait_name: String,
    pub enchant_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishedAbility {
    pub name: String,
    pub icon: String,
}

/// The best-performing player of a published build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishedPlayer {
    pub character_name: String,
    pub account_handle: String,
    /// "dps", "healer", "tank" or "unknown"
    pub role: String,
    pub dps: f64,
    pub healing: f64,
    /// Share of the fight's damage, in percent
    #[serde(default)]
    pub dps_percentage: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mundus: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub champion_points: Vec<String>,
    pub report_code: String,
    pub fight_id: u32,
    pub gear: Vec<PublishedGear>,
    pub bar1: Vec<PublishedAbility>,
    pub bar2: Vec<PublishedAbility>,
}

/// A build group that met its publishing threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishedBuild {
    pub trial_name: String,
    pub boss_name: String,
    pub build_slug: String,
    pub display_name: String,
    /// Subclass abbreviations in detection order
    pub subclasses: Vec<String>,
    /// Up to two signature set names
    pub signature_sets: Vec<String>,
    pub count: usize,
    pub report_count: usize,
    #[serde(default)]
    pub update_version: String,
    pub best_player: PublishedPlayer,
}
