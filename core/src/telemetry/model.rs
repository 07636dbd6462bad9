use hashbrown::HashMap;

use crate::game_data::{GearSlot, Role, SkillLine, enchant_name, trait_name};

/// One equipped item
#[derive(Debug, Clone, PartialEq)]
pub struct GearPiece {
    pub slot: GearSlot,
    pub item_id: Option<u64>,
    pub item_name: String,
    /// Empty for unique (no-set) items
    pub set_name: String,
    /// 1 or 2, derived from the slot
    pub bar: u8,
    pub trait_id: Option<u16>,
    pub enchant_id: Option<u16>,
}

impl GearPiece {
    pub fn new(slot: GearSlot, item_name: impl Into<String>, set_name: impl Into<String>) -> Self {
        Self {
            slot,
            item_id: None,
            item_name: item_name.into(),
            set_name: set_name.into(),
            bar: slot.bar(),
            trait_id: None,
            enchant_id: None,
        }
    }

    /// Trimmed set name, or None for no-set items
    pub fn set(&self) -> Option<&str> {
        let name = self.set_name.trim();
        (!name.is_empty()).then_some(name)
    }

    pub fn trait_name(&self) -> &'static str {
        trait_name(self.trait_id)
    }

    pub fn enchant_name(&self) -> &'static str {
        enchant_name(self.enchant_id)
    }
}

/// One slotted ability
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbilityRef {
    pub name: String,
    pub icon_id: String,
    /// Class skill line this ability resolves to, for display
    pub skill_line: Option<SkillLine>,
}

impl AbilityRef {
    pub fn new(name: impl Into<String>, icon_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon_id: icon_id.into(),
            skill_line: None,
        }
    }
}

/// Equipped-piece counts per set, overall and per action bar
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetCounts {
    pub total: HashMap<String, u32>,
    pub bar1: HashMap<String, u32>,
    pub bar2: HashMap<String, u32>,
}

impl SetCounts {
    pub fn is_empty(&self) -> bool {
        self.total.is_empty()
    }

    pub fn total_of(&self, set_name: &str) -> u32 {
        self.total.get(set_name).copied().unwrap_or(0)
    }

    /// Sets sorted by total count descending, then name ascending
    pub fn ranked(&self) -> Vec<(&str, u32)> {
        let mut ranked: Vec<(&str, u32)> = self
            .total
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }
}

/// One player's performance in one fight.
///
/// Identity and telemetry fields are filled at parse time; the derived
/// fields (`detected_lines` onwards) are filled by [`crate::analysis::analyze_player`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerRecord {
    pub character_name: String,
    pub account_handle: String,
    pub class_name: String,
    pub role: Role,
    pub dps: f64,
    /// Healing per second over the same active window as `dps`
    pub healing: f64,
    /// Share of the fight's damage, in percent
    pub dps_percentage: f64,
    pub gear: Vec<GearPiece>,
    pub bar1: Vec<AbilityRef>,
    pub bar2: Vec<AbilityRef>,
    pub mundus: Option<String>,
    pub champion_points: Vec<String>,

    // Source
    pub report_code: String,
    pub fight_id: u32,

    // Derived
    pub detected_lines: Vec<SkillLine>,
    /// Subclass abbreviations in detection order, padded with "x"
    pub subclasses: Vec<String>,
    pub set_counts: SetCounts,
    pub build_slug: String,
}

impl PlayerRecord {
    pub fn has_gear(&self) -> bool {
        !self.gear.is_empty()
    }

    pub fn has_abilities(&self) -> bool {
        !self.bar1.is_empty() || !self.bar2.is_empty()
    }

    /// Names of all slotted abilities, bar 1 then bar 2, skipping blanks
    pub fn ability_names(&self) -> impl Iterator<Item = &str> {
        self.bar1
            .iter()
            .chain(self.bar2.iter())
            .map(|a| a.name.as_str())
            .filter(|name| !name.trim().is_empty())
    }

    /// Dedup key within one fight
    pub fn identity_key(&self) -> (&str, &str) {
        (self.account_handle.as_str(), self.character_name.as_str())
    }

    pub fn is_analyzed(&self) -> bool {
        !self.build_slug.is_empty()
    }
}
