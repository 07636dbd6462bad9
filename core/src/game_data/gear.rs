//! Gear slots, item keyword lists and trait/enchant display names
//!
//! Slot ids and trait ids follow the numbering used by the log host's
//! combatant-info payload.

use phf::phf_map;
use serde::{Deserialize, Serialize};

/// Equipment slot as reported in combatant info (ids 0-16)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GearSlot {
    Head,
    Shoulders,
    Chest,
    Belt,
    Legs,
    Boots,
    Hands,
    Necklace,
    Ring1,
    Ring2,
    MainHand,
    OffHand,
    BackupMainHand,
    BackupOffHand,
    BackupNecklace,
    BackupRing1,
    BackupRing2,
}

impl GearSlot {
    pub fn from_id(id: u8) -> Option<Self> {
        use GearSlot::*;
        match id {
            0 => Some(Head),
            1 => Some(Shoulders),
            2 => Some(Chest),
            3 => Some(Belt),
            4 => Some(Legs),
            5 => Some(Boots),
            6 => Some(Hands),
            7 => Some(Necklace),
            8 => Some(Ring1),
            9 => Some(Ring2),
            10 => Some(MainHand),
            11 => Some(OffHand),
            12 => Some(BackupMainHand),
            13 => Some(BackupOffHand),
            14 => Some(BackupNecklace),
            15 => Some(BackupRing1),
            16 => Some(BackupRing2),
            _ => None,
        }
    }

    pub const fn id(&self) -> u8 {
        *self as u8
    }

    pub const fn name(&self) -> &'static str {
        use GearSlot::*;
        match self {
            Head => "head",
            Shoulders => "shoulders",
            Chest => "chest",
            Belt => "belt",
            Legs => "legs",
            Boots => "boots",
            Hands => "hands",
            Necklace => "necklace",
            Ring1 => "ring1",
            Ring2 => "ring2",
            MainHand => "main_hand",
            OffHand => "off_hand",
            BackupMainHand => "backup_main_hand",
            BackupOffHand => "backup_off_hand",
            BackupNecklace => "backup_necklace",
            BackupRing1 => "backup_ring1",
            BackupRing2 => "backup_ring2",
        }
    }

    /// Action bar the slot is active on. Backup weapons and backup jewelry
    /// (ids 12-16) are bar 2; everything else is bar 1.
    pub const fn bar(&self) -> u8 {
        match self.id() {
            12..=16 => 2,
            _ => 1,
        }
    }

    /// Main-hand slots that can hold a two-handed weapon
    pub const fn is_main_hand(&self) -> bool {
        matches!(self, GearSlot::MainHand | GearSlot::BackupMainHand)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Item Keyword Lists
// ═══════════════════════════════════════════════════════════════════════════

/// Mythic items; they never contribute to 5-piece bonuses
const MYTHIC_KEYWORDS: &[&str] = &[
    "oakensoul",
    "death dealer's fete",
    "pale order",
    "wild hunt",
    "gaze of sithis",
    "malacath's band",
    "mythic",
    "ring of",
    "band of",
    "amulet of",
    "necklace of",
];

/// Arena weapons; their bonus is a 2-piece, so they stay out of bar counts
const ARENA_KEYWORDS: &[&str] = &[
    "maelstrom's",
    "vateshran's",
    "dragonstar arena",
    "brp",
    "blackrose prison",
    "imperial city prison",
    "vateshran hollows",
    "maelstrom arena",
];

/// Weapons that occupy both hands and count as two set pieces
const TWO_HANDED_KEYWORDS: &[&str] = &[
    "greatsword",
    "battleaxe",
    "warhammer",
    "bow",
    "inferno staff",
    "ice staff",
    "lightning staff",
    "restoration staff",
];

fn matches_any(item_name: &str, keywords: &[&str]) -> bool {
    if item_name.is_empty() {
        return false;
    }
    let lower = item_name.to_lowercase();
    keywords.iter().any(|kw| lower.contains(kw))
}

pub fn is_mythic_item(item_name: &str) -> bool {
    matches_any(item_name, MYTHIC_KEYWORDS)
}

pub fn is_arena_weapon(item_name: &str) -> bool {
    matches_any(item_name, ARENA_KEYWORDS)
}

pub fn is_two_handed_weapon(item_name: &str) -> bool {
    matches_any(item_name, TWO_HANDED_KEYWORDS)
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait / Enchant Display Names
// ═══════════════════════════════════════════════════════════════════════════

const UNKNOWN: &str = "Unknown";

static TRAIT_NAMES: phf::Map<u16, &'static str> = phf_map! {
    0u16 => "None",
    // Weapon
    1u16 => "Powered",
    2u16 => "Charged",
    3u16 => "Precise",
    4u16 => "Infused",
    5u16 => "Defending",
    6u16 => "Training",
    7u16 => "Sharpened",
    8u16 => "Decisive",
    26u16 => "Nirnhoned",
    // Armor
    11u16 => "Sturdy",
    12u16 => "Impenetrable",
    13u16 => "Reinforced",
    14u16 => "Well-Fitted",
    15u16 => "Training",
    16u16 => "Infused",
    17u16 => "Invigorating",
    18u16 => "Divines",
    25u16 => "Nirnhoned",
    // Jewelry
    21u16 => "Healthy",
    22u16 => "Arcane",
    23u16 => "Robust",
    28u16 => "Swift",
    29u16 => "Harmony",
    30u16 => "Triune",
    31u16 => "Bloodthirsty",
    32u16 => "Protective",
    33u16 => "Infused",
    // Crafting-only
    9u16 => "Intricate",
    10u16 => "Ornate",
    19u16 => "Ornate",
    20u16 => "Intricate",
    24u16 => "Ornate",
    27u16 => "Intricate",
};

static ENCHANT_NAMES: phf::Map<u16, &'static str> = phf_map! {
    0u16 => "None",
    // Weapon glyphs
    1u16 => "Absorb Health",
    2u16 => "Absorb Magicka",
    3u16 => "Absorb Stamina",
    4u16 => "Flame",
    5u16 => "Frost",
    6u16 => "Shock",
    7u16 => "Poison",
    8u16 => "Foulness",
    9u16 => "Decrease Health",
    10u16 => "Weapon Damage",
    11u16 => "Crushing",
    12u16 => "Weakening",
    13u16 => "Hardening",
    14u16 => "Prismatic Onslaught",
    // Armor glyphs
    20u16 => "Maximum Health",
    21u16 => "Maximum Magicka",
    22u16 => "Maximum Stamina",
    23u16 => "Prismatic Defense",
    // Jewelry glyphs
    30u16 => "Health Recovery",
    31u16 => "Magicka Recovery",
    32u16 => "Stamina Recovery",
    33u16 => "Increase Physical Harm",
    34u16 => "Increase Magical Harm",
    35u16 => "Reduce Spell Cost",
    36u16 => "Reduce Feat Cost",
    37u16 => "Bashing",
    38u16 => "Shielding",
    39u16 => "Potion Boost",
    40u16 => "Prismatic Recovery",
};

/// Display name for a trait id; unknown or missing ids render as "Unknown"
pub fn trait_name(id: Option<u16>) -> &'static str {
    id.and_then(|id| TRAIT_NAMES.get(&id).copied())
        .unwrap_or(UNKNOWN)
}

/// Display name for an enchant type id; unknown or missing ids render as "Unknown"
pub fn enchant_name(id: Option<u16>) -> &'static str {
    id.and_then(|id| ENCHANT_NAMES.get(&id).copied())
        .unwrap_or(UNKNOWN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_ids_round_trip() {
        for id in 0..=16u8 {
            let slot = GearSlot::from_id(id).unwrap();
            assert_eq!(slot.id(), id);
        }
        assert_eq!(GearSlot::from_id(17), None);
    }

    #[test]
    fn backup_slots_are_bar_two() {
        assert_eq!(GearSlot::MainHand.bar(), 1);
        assert_eq!(GearSlot::OffHand.bar(), 1);
        assert_eq!(GearSlot::Ring2.bar(), 1);
        assert_eq!(GearSlot::BackupMainHand.bar(), 2);
        assert_eq!(GearSlot::BackupOffHand.bar(), 2);
        assert_eq!(GearSlot::BackupNecklace.bar(), 2);
        assert_eq!(GearSlot::BackupRing1.bar(), 2);
        assert_eq!(GearSlot::BackupRing2.bar(), 2);
    }

    #[test]
    fn keyword_classification() {
        assert!(is_mythic_item("Oakensoul Ring"));
        assert!(is_mythic_item("Ring of the Pale Order"));
        assert!(!is_mythic_item("Perfected Relequen Bow"));

        assert!(is_arena_weapon("Maelstrom's Inferno Staff"));
        assert!(is_arena_weapon("Perfected Vateshran's Lightning Staff"));
        assert!(!is_arena_weapon("Lightning Staff of Bahsei"));

        assert!(is_two_handed_weapon("Lightning Staff of Bahsei"));
        assert!(is_two_handed_weapon("Perfected Relequen Bow"));
        assert!(is_two_handed_weapon("Greatsword of Kinras"));
        assert!(!is_two_handed_weapon("Dagger of Kinras"));
        assert!(!is_two_handed_weapon(""));
    }

    #[test]
    fn unresolved_ids_render_unknown() {
        assert_eq!(trait_name(Some(28)), "Swift");
        assert_eq!(trait_name(Some(250)), "Unknown");
        assert_eq!(trait_name(None), "Unknown");
        assert_eq!(enchant_name(Some(4)), "Flame");
        assert_eq!(enchant_name(Some(999)), "Unknown");
    }
}
