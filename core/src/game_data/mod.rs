mod gear;
mod role_keywords;
mod skill_lines;

pub use gear::{
    GearSlot, enchant_name, is_arena_weapon, is_mythic_item, is_two_handed_weapon, trait_name,
};
pub use role_keywords::{DPS_ABILITIES, HEALING_ABILITIES, TANK_ABILITIES};
pub use skill_lines::{Role, SkillLine, abbreviate, skill_line_for_ability};
pub(crate) use skill_lines::LOWERCASE_TABLES;
