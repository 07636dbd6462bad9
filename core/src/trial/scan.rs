use buildorama_types::{AnalysisConfig, PublishedBuild};
use rayon::prelude::*;

use crate::builds::{
    BuildLedger, BuildStatistics, FightBuilds, ThresholdSplit, backfill_mundus, split_publishable,
};
use crate::telemetry::{CombatantParser, FightContext};

/// Combatant entries fetched for one fight
#[derive(Debug, Clone, Default)]
pub struct FightInput {
    pub context: FightContext,
    pub entries: Vec<serde_json::Value>,
}

/// Result of scanning a set of fights for one trial
#[derive(Debug, Default)]
pub struct TrialScan {
    pub ledger: BuildLedger,
    pub statistics: Vec<(FightContext, BuildStatistics)>,
    /// Records with neither gear nor abilities
    pub dropped: usize,
    /// Malformed records
    pub skipped: usize,
}

/// Parse and group every fight in parallel, then fold the per-fight groups
/// into one ledger on the calling thread.
pub fn scan_fights(inputs: &[FightInput], config: &AnalysisConfig) -> TrialScan {
    let per_fight: Vec<(FightBuilds, usize, usize)> = inputs
        .par_iter()
        .map(|input| {
            let parser = CombatantParser::new(input.context.clone());
            let parsed = parser.parse_fight(&input.entries);
            let builds = FightBuilds::from_players(parsed.players, &input.context, config);
            (builds, parsed.dropped, parsed.skipped)
        })
        .collect();

    let mut scan = TrialScan::default();
    for (builds, dropped, skipped) in per_fight {
        scan.dropped += dropped;
        scan.skipped += skipped;
        scan.statistics
            .push((builds.context.clone(), builds.statistics.clone()));
        scan.ledger.absorb(builds, config);
    }

    tracing::info!(
        fights = scan.ledger.fight_count(),
        builds = scan.ledger.len(),
        dropped = scan.dropped,
        skipped = scan.skipped,
        "Scanned fights"
    );
    scan
}

impl TrialScan {
    /// Consolidate, share known mundus stones and apply the publishing
    /// threshold.
    pub fn finish(self, config: &AnalysisConfig) -> ThresholdSplit {
        let mut groups = self.ledger.consolidate();
        backfill_mundus(&mut groups);
        split_publishable(groups, config)
    }

    /// Publishable builds in renderer form
    pub fn publish(self, config: &AnalysisConfig) -> Vec<PublishedBuild> {
        self.finish(config)
            .published
            .iter()
            .map(|group| group.to_published())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn context(report: &str, fight_id: u32) -> FightContext {
        FightContext {
            report_code: report.to_string(),
            fight_id,
            trial_name: "Rockgrove".to_string(),
            boss_name: "Xalvakka".to_string(),
            update_version: "u45".to_string(),
        }
    }

    fn combatant(name: &str, dps: f64) -> serde_json::Value {
        let armor = |slot: u8, set: &str| json!({ "slot": slot, "name": "Armor", "setName": set });
        let gear: Vec<serde_json::Value> = (0..5)
            .map(|slot| armor(slot, "Relequen"))
            .chain((5..10).map(|slot| armor(slot, "Deadly Strike")))
            .collect();
        json!({
            "name": name,
            "displayName": format!("@{name}"),
            "type": "Nightblade",
            "role": "dps",
            "dps": dps,
            "gear": gear,
            "talents": [
                { "name": "Assassin's Blade", "abilityIcon": "a" },
                { "name": "Teleport Strike", "abilityIcon": "b" },
                { "name": "Grim Focus", "abilityIcon": "c" },
                { "name": "Shadow Cloak", "abilityIcon": "d" },
                { "name": "Siphoning Strikes", "abilityIcon": "e" }
            ]
        })
    }

    fn input(report: &str, fight_id: u32, names: &[(&str, f64)]) -> FightInput {
        FightInput {
            context: context(report, fight_id),
            entries: names.iter().map(|(n, dps)| combatant(n, *dps)).collect(),
        }
    }

    #[test]
    fn scan_consolidates_across_fights() {
        let config = AnalysisConfig::default();
        let mut inputs = vec![
            input("r1", 1, &[("A", 100.0), ("B", 110.0), ("C", 120.0), ("D", 130.0)]),
            input("r2", 4, &[("E", 140.0), ("F", 150.0), ("G", 99.0)]),
        ];
        inputs[1].entries.push(json!({ "name": "Broken", "gear": [{ "slot": 99 }] }));
        inputs[1].entries.push(json!({ "name": "Idle" }));

        let scan = scan_fights(&inputs, &config);

        assert_eq!(scan.ledger.fight_count(), 2);
        assert_eq!(scan.skipped, 1);
        assert_eq!(scan.dropped, 1);
        assert_eq!(scan.statistics.len(), 2);

        let published = scan.publish(&config);
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].count, 7);
        assert_eq!(published[0].report_count, 2);
        assert_eq!(published[0].best_player.character_name, "F");
        assert_eq!(published[0].update_version, "u45");
        assert_eq!(published[0].display_name, "Assassination / Shadow / Siphoning (DPS)");
    }

    #[test]
    fn failed_fight_contributes_nothing() {
        let config = AnalysisConfig::default();
        let inputs = vec![
            input("r1", 1, &[("A", 100.0), ("B", 110.0)]),
            FightInput {
                context: context("r2", 1),
                entries: Vec::new(),
            },
        ];

        let split = scan_fights(&inputs, &config).finish(&config);

        assert!(split.published.is_empty());
        assert_eq!(split.held_back.len(), 1);
        assert_eq!(split.held_back[0].count, 2);
    }
}
