//! Per-player build classification
//!
//! Turns a parsed [`PlayerRecord`] into a build identity: gear set counts,
//! detected subclasses, role (when untagged) and slug.

mod dedup;
mod gear_sets;
mod role;
mod slug;
mod subclass;

pub use dedup::dedup_players;
pub use gear_sets::count_sets;
pub use role::infer_role;
pub use slug::{UNKNOWN_SET, build_slug, set_slug, signature_sets};
pub use subclass::{
    NO_SUBCLASS, classify, detect_skill_lines, normalize_ability, subclass_signature,
};

use buildorama_types::AnalysisConfig;

use crate::game_data::Role;
use crate::telemetry::PlayerRecord;

/// Fill the derived fields of a player record. Idempotent: an already
/// analyzed record keeps its derived fields.
pub fn analyze_player(player: &mut PlayerRecord, config: &AnalysisConfig) {
    if player.is_analyzed() {
        return;
    }

    player.set_counts = count_sets(&player.gear);
    player.detected_lines = detect_skill_lines(player.ability_names());
    player.subclasses = subclass_signature(&player.detected_lines, config.max_subclasses);

    if player.role == Role::Unknown {
        player.role = infer_role(player, &player.detected_lines, config.healer_ratio);
    }

    player.build_slug = build_slug(
        &player.subclasses,
        &player.set_counts,
        config.signature_set_min_pieces,
        config.signature_set_limit,
    );

    tracing::debug!(
        character = %player.character_name,
        role = player.role.as_str(),
        slug = %player.build_slug,
        dps = player.dps,
        "Classified player"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_data::{GearSlot, SkillLine};
    use crate::telemetry::{AbilityRef, GearPiece};

    fn nightblade() -> PlayerRecord {
        let mut gear: Vec<GearPiece> = [0u8, 1, 2, 3, 4]
            .iter()
            .map(|id| GearPiece::new(GearSlot::from_id(*id).unwrap(), "Armor", "Relequen"))
            .collect();
        gear.extend([5u8, 6, 7, 8, 9].iter().map(|id| {
            GearPiece::new(GearSlot::from_id(*id).unwrap(), "Armor", "Deadly Strike")
        }));

        PlayerRecord {
            character_name: "Stabby".to_string(),
            account_handle: "@stab".to_string(),
            dps: 110_000.0,
            gear,
            bar1: [
                "Assassin's Blade",
                "Teleport Strike",
                "Grim Focus",
                "Shadow Cloak",
                "Siphoning Strikes",
            ]
            .iter()
            .map(|a| AbilityRef::new(*a, "icon"))
            .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn analyze_fills_every_derived_field() {
        let mut player = nightblade();
        analyze_player(&mut player, &AnalysisConfig::default());

        assert_eq!(player.set_counts.total_of("Relequen"), 5);
        assert_eq!(
            player.detected_lines,
            vec![SkillLine::Assassination, SkillLine::Shadow, SkillLine::Siphoning]
        );
        assert_eq!(player.subclasses, vec!["Ass", "Shadow", "Siphon"]);
        assert_eq!(player.role, Role::Dps);
        assert_eq!(player.build_slug, "ass-shadow-siphon-deadly-strike-relequen");
    }

    #[test]
    fn tagged_role_is_not_overridden() {
        let mut player = nightblade();
        player.role = Role::Tank;
        analyze_player(&mut player, &AnalysisConfig::default());
        assert_eq!(player.role, Role::Tank);
    }

    #[test]
    fn analysis_is_idempotent() {
        let mut player = nightblade();
        let config = AnalysisConfig::default();
        analyze_player(&mut player, &config);
        let once = player.clone();
        analyze_player(&mut player, &config);
        assert_eq!(player, once);
    }

    #[test]
    fn config_controls_signature_size() {
        let mut player = nightblade();
        let config = AnalysisConfig {
            max_subclasses: 2,
            signature_set_limit: 1,
            ..Default::default()
        };
        analyze_player(&mut player, &config);
        assert_eq!(player.subclasses, vec!["Ass", "Shadow"]);
        assert_eq!(player.build_slug, "ass-shadow-deadly-strike");
    }
}
