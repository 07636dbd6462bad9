//! Role inference for records without an authoritative role tag
//!
//! Decision order: healing ratio, then ability keyword sets (healing, tank,
//! dps), then a skill-line default. Best effort only; damage-dealing tanks
//! can come out as dps.

use crate::game_data::{DPS_ABILITIES, HEALING_ABILITIES, Role, SkillLine, TANK_ABILITIES};
use crate::telemetry::PlayerRecord;

pub fn infer_role(player: &PlayerRecord, lines: &[SkillLine], healer_ratio: f64) -> Role {
    if player.healing > player.dps * healer_ratio {
        return Role::Healer;
    }

    let abilities: Vec<String> = player
        .ability_names()
        .map(|name| name.trim().to_lowercase())
        .collect();

    let keyword_sets = [
        (&HEALING_ABILITIES, Role::Healer),
        (&TANK_ABILITIES, Role::Tank),
        (&DPS_ABILITIES, Role::Dps),
    ];
    for (set, role) in keyword_sets {
        if abilities.iter().any(|a| set.contains(a.as_str())) {
            return role;
        }
    }

    if lines.iter().any(SkillLine::is_support) {
        Role::Healer
    } else {
        Role::Dps
    }
}
