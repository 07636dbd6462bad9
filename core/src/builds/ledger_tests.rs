//! Tests for per-fight grouping and cross-fight consolidation
//!
//! Verifies that:
//! - Same-identity groups from different fights merge into one
//! - Counts, report counts and best players are computed across fights
//! - Output does not depend on the order players or fights arrive in

use buildorama_types::AnalysisConfig;

use crate::game_data::{GearSlot, Role};
use crate::telemetry::{AbilityRef, FightContext, GearPiece, PlayerRecord};

use super::{BuildGroup, BuildLedger, FightBuilds, GroupKey, split_publishable};

// ═══════════════════════════════════════════════════════════════════════════
// Test Helpers
// ═══════════════════════════════════════════════════════════════════════════

const NIGHTBLADE: [&str; 5] = [
    "Assassin's Blade",
    "Teleport Strike",
    "Grim Focus",
    "Shadow Cloak",
    "Siphoning Strikes",
];

const NECROMANCER: [&str; 4] = ["Blastbones", "Flame Skull", "Bitter Harvest", "Skeletal Mage"];

const NIGHTBLADE_SLUG: &str = "ass-shadow-siphon-deadly-strike-relequen";

fn fight(report: &str, fight_id: u32) -> FightContext {
    FightContext {
        report_code: report.to_string(),
        fight_id,
        trial_name: "Sunspire".to_string(),
        boss_name: "Nahviintaas".to_string(),
        update_version: "u46".to_string(),
    }
}

/// Five pieces each of Relequen and Deadly Strike
fn gear() -> Vec<GearPiece> {
    (0u8..10)
        .map(|id| {
            let set = if id < 5 { "Relequen" } else { "Deadly Strike" };
            GearPiece::new(GearSlot::from_id(id).unwrap(), "Armor", set)
        })
        .collect()
}

fn player(name: &str, report: &str, dps: f64, abilities: &[&str]) -> PlayerRecord {
    PlayerRecord {
        character_name: name.to_string(),
        account_handle: format!("@{}", name.to_lowercase()),
        dps,
        gear: gear(),
        bar1: abilities.iter().map(|a| AbilityRef::new(*a, "icon")).collect(),
        report_code: report.to_string(),
        ..Default::default()
    }
}

fn nightblades(prefix: &str, report: &str, count: usize, base_dps: f64) -> Vec<PlayerRecord> {
    (0..count)
        .map(|i| player(&format!("{prefix}{i}"), report, base_dps + i as f64, &NIGHTBLADE))
        .collect()
}

fn nightblade_key() -> GroupKey {
    GroupKey {
        trial_name: "Sunspire".to_string(),
        boss_name: "Nahviintaas".to_string(),
        build_slug: NIGHTBLADE_SLUG.to_string(),
    }
}

fn slug_counts(groups: &[BuildGroup]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = groups
        .iter()
        .map(|g| (g.build_slug.clone(), g.count))
        .collect();
    counts.sort();
    counts
}

// ═══════════════════════════════════════════════════════════════════════════
// Per-Fight Grouping
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_fight_groups_by_slug_and_dedups() {
    let config = AnalysisConfig::default();
    let mut players = nightblades("Nb", "r1", 3, 100_000.0);
    players.push(player("Nb0", "r1", 150_000.0, &NIGHTBLADE));
    players.push(player("Necro", "r1", 90_000.0, &NECROMANCER));

    let fight = FightBuilds::from_players(players, &fight("r1", 1), &config);

    assert_eq!(fight.groups.len(), 2);
    let nb = &fight.groups[0];
    assert_eq!(nb.build_slug, NIGHTBLADE_SLUG);
    assert_eq!(nb.count, 3);
    assert_eq!(nb.best_player.character_name, "Nb0");
    assert_eq!(nb.best_player.dps, 150_000.0);
    assert_eq!(nb.subclasses, vec!["Ass", "Shadow", "Siphon"]);
    assert_eq!(nb.signature_sets, vec!["Deadly Strike", "Relequen"]);
    assert_eq!(nb.update_version, "u46");
    assert_eq!(fight.statistics.total_players, 4);
    assert_eq!(fight.statistics.unique_builds, 2);
}

#[test]
fn test_display_name_and_sets_used() {
    let config = AnalysisConfig::default();
    let mut players = nightblades("Nb", "r1", 2, 100_000.0);
    players[1].gear.push(GearPiece::new(GearSlot::BackupRing1, "Ring", "Slimecraw"));

    let fight = FightBuilds::from_players(players, &fight("r1", 1), &config);
    let group = &fight.groups[0];

    assert_eq!(
        group.display_name(),
        "Assassination / Shadow / Siphoning (DPS)"
    );
    assert_eq!(
        group.all_sets_used(),
        vec!["Deadly Strike", "Relequen", "Slimecraw"]
    );
}

#[test]
fn test_unknown_subclasses_display_as_unknown() {
    let config = AnalysisConfig::default();
    let players = vec![player("Mystery", "r1", 10.0, &["Barbed Trap"])];

    let fight = FightBuilds::from_players(players, &fight("r1", 1), &config);

    assert_eq!(
        fight.groups[0].display_name(),
        "Unknown / Unknown / Unknown (DPS)"
    );
    assert_eq!(
        fight.groups[0].build_slug,
        "x-x-x-deadly-strike-relequen"
    );
}

#[test]
fn test_published_build_carries_best_player() {
    let config = AnalysisConfig::default();
    let mut players = nightblades("Nb", "r1", 2, 100_000.0);
    players[1].mundus = Some("The Thief".to_string());
    players[1].dps_percentage = 21.5;
    players[1].champion_points = vec!["Backstabber".to_string()];

    let fight = FightBuilds::from_players(players, &fight("r1", 7), &config);
    let published = fight.groups[0].to_published();

    assert_eq!(published.build_slug, NIGHTBLADE_SLUG);
    assert_eq!(published.count, 2);
    assert_eq!(published.report_count, 1);
    assert_eq!(published.best_player.character_name, "Nb1");
    assert_eq!(published.best_player.role, "dps");
    assert_eq!(published.best_player.mundus.as_deref(), Some("The Thief"));
    assert_eq!(published.best_player.dps_percentage, 21.5);
    assert_eq!(published.best_player.champion_points, vec!["Backstabber"]);
    assert_eq!(published.best_player.gear.len(), 10);
    assert_eq!(published.best_player.gear[0].slot, "head");
    assert_eq!(published.best_player.gear[0].trait_name, "Unknown");
    assert_eq!(published.best_player.bar1.len(), 5);
}

// ═══════════════════════════════════════════════════════════════════════════
// Cross-Fight Consolidation
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_consolidation_sums_counts_across_fights() {
    let config = AnalysisConfig::default();
    let fight_a = FightBuilds::from_players(
        nightblades("A", "report-a", 4, 100_000.0),
        &fight("report-a", 1),
        &config,
    );
    let mut b_players = nightblades("B", "report-b", 3, 100_000.0);
    b_players[2].dps = 140_000.0;
    let fight_b = FightBuilds::from_players(b_players, &fight("report-b", 3), &config);

    let mut ledger = BuildLedger::new();
    ledger.absorb(fight_a, &config);
    ledger.absorb(fight_b, &config);

    assert_eq!(ledger.fight_count(), 2);
    let merged = ledger.get(&nightblade_key()).unwrap();
    assert_eq!(merged.count, 7);
    assert_eq!(merged.report_count, 2);
    assert_eq!(merged.best_player.character_name, "B2");
    assert_eq!(merged.best_player.dps, 140_000.0);

    let consolidated = ledger.consolidate();
    assert_eq!(consolidated.len(), 1);
    assert_eq!(consolidated[0].all_players.len(), 7);
}

#[test]
fn test_same_report_counts_once() {
    let config = AnalysisConfig::default();
    let mut ledger = BuildLedger::new();
    ledger.absorb(
        FightBuilds::from_players(nightblades("A", "r1", 2, 1.0), &fight("r1", 1), &config),
        &config,
    );
    ledger.absorb(
        FightBuilds::from_players(nightblades("A", "r1", 2, 1.0), &fight("r1", 5), &config),
        &config,
    );

    let merged = ledger.get(&nightblade_key()).unwrap();
    // Same player in two fights is two observations
    assert_eq!(merged.count, 4);
    assert_eq!(merged.report_count, 1);
}

#[test]
fn test_different_bosses_stay_apart() {
    let config = AnalysisConfig::default();
    let mut other_boss = fight("r1", 2);
    other_boss.boss_name = "Lokkestiiz".to_string();

    let mut ledger = BuildLedger::new();
    ledger.absorb(
        FightBuilds::from_players(nightblades("A", "r1", 3, 1.0), &fight("r1", 1), &config),
        &config,
    );
    ledger.absorb(
        FightBuilds::from_players(nightblades("A", "r1", 2, 1.0), &other_boss, &config),
        &config,
    );

    let consolidated = ledger.consolidate();
    assert_eq!(consolidated.len(), 2);
    assert_eq!(consolidated[0].boss_name, "Nahviintaas");
    assert_eq!(consolidated[0].count, 3);
    assert_eq!(consolidated[1].boss_name, "Lokkestiiz");
}

#[test]
fn test_best_player_inherits_mundus_on_merge() {
    let config = AnalysisConfig::default();
    let mut early = nightblades("Nb", "r1", 1, 90_000.0);
    early[0].mundus = Some("The Thief".to_string());
    let late = nightblades("Nb", "r2", 1, 120_000.0);

    let mut ledger = BuildLedger::new();
    ledger.absorb(FightBuilds::from_players(early, &fight("r1", 1), &config), &config);
    ledger.absorb(FightBuilds::from_players(late, &fight("r2", 1), &config), &config);

    let merged = ledger.get(&nightblade_key()).unwrap();
    assert_eq!(merged.best_player.report_code, "r2");
    assert_eq!(merged.best_player.mundus.as_deref(), Some("The Thief"));
}

#[test]
fn test_update_version_follows_best_player() {
    let config = AnalysisConfig::default();
    let mut newer = fight("r2", 1);
    newer.update_version = "u47".to_string();

    let mut ledger = BuildLedger::new();
    ledger.absorb(
        FightBuilds::from_players(nightblades("A", "r1", 1, 90_000.0), &fight("r1", 1), &config),
        &config,
    );
    ledger.absorb(
        FightBuilds::from_players(nightblades("B", "r2", 1, 95_000.0), &newer, &config),
        &config,
    );

    assert_eq!(ledger.get(&nightblade_key()).unwrap().update_version, "u47");
}

// ═══════════════════════════════════════════════════════════════════════════
// Determinism
// ═══════════════════════════════════════════════════════════════════════════

fn population() -> Vec<Vec<PlayerRecord>> {
    let mut first = nightblades("A", "r1", 4, 100_000.0);
    first.push(player("Necro1", "r1", 80_000.0, &NECROMANCER));
    let mut second = nightblades("B", "r2", 2, 110_000.0);
    second.push(player("Necro2", "r2", 85_000.0, &NECROMANCER));
    second.push(player("Healy", "r2", 20_000.0, &["Combat Prayer", "Rune Focus"]));
    vec![first, second]
}

fn run(fights: Vec<Vec<PlayerRecord>>, config: &AnalysisConfig) -> Vec<BuildGroup> {
    let mut ledger = BuildLedger::new();
    for (i, players) in fights.into_iter().enumerate() {
        let ctx = fight(&format!("r{}", i + 1), 1);
        ledger.absorb(FightBuilds::from_players(players, &ctx, config), config);
    }
    ledger.consolidate()
}

#[test]
fn test_identity_is_independent_of_input_order() {
    let config = AnalysisConfig::default();
    let baseline = run(population(), &config);

    let mut reversed_players = population();
    for players in &mut reversed_players {
        players.reverse();
    }
    let reversed = run(reversed_players, &config);

    let mut rotated_players = population();
    rotated_players[0].rotate_left(2);
    rotated_players[1].rotate_left(1);
    let rotated = run(rotated_players, &config);

    assert_eq!(slug_counts(&baseline), slug_counts(&reversed));
    assert_eq!(slug_counts(&baseline), slug_counts(&rotated));

    for (a, b) in baseline.iter().zip(reversed.iter()) {
        assert_eq!(a.build_slug, b.build_slug);
        assert_eq!(a.best_player.character_name, b.best_player.character_name);
    }
}

#[test]
fn test_publishable_split_after_consolidation() {
    let config = AnalysisConfig::default();
    let split = split_publishable(run(population(), &config), &config);

    assert_eq!(split.published.len(), 1);
    assert_eq!(split.published[0].build_slug, NIGHTBLADE_SLUG);
    assert_eq!(split.published[0].count, 6);
    assert_eq!(split.published[0].role(), Role::Dps);
    assert_eq!(split.held_back.len(), 2);
}
