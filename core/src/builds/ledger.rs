//! Cross-fight consolidation
//!
//! A [`BuildLedger`] is the single-writer accumulator for one scan: per-fight
//! groups are produced independently (possibly in parallel), then absorbed
//! here one fight at a time.

use buildorama_types::AnalysisConfig;
use hashbrown::HashMap;
use hashbrown::hash_map::Entry;

use super::group::{BuildGroup, FightBuilds, GroupKey};

#[derive(Debug, Clone, Default)]
pub struct BuildLedger {
    groups: HashMap<GroupKey, BuildGroup>,
    fights: usize,
}

impl BuildLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of fights absorbed so far
    pub fn fight_count(&self) -> usize {
        self.fights
    }

    pub fn get(&self, key: &GroupKey) -> Option<&BuildGroup> {
        self.groups.get(key)
    }

    /// Fold every group of one fight into the ledger.
    pub fn absorb(&mut self, fight: FightBuilds, config: &AnalysisConfig) {
        self.fights += 1;
        for group in fight.groups {
            self.absorb_group(group, config);
        }
    }

    /// Fold a single group, merging with any group of the same
    /// (trial, boss, slug).
    pub fn absorb_group(&mut self, group: BuildGroup, config: &AnalysisConfig) {
        match self.groups.entry(group.key()) {
            Entry::Occupied(mut existing) => existing.get_mut().merge(group, config),
            Entry::Vacant(slot) => {
                slot.insert(group);
            }
        }
    }

    /// Consume the ledger into one group per build per boss, sorted by count
    /// descending, then trial, boss and slug.
    pub fn consolidate(self) -> Vec<BuildGroup> {
        let mut groups: Vec<BuildGroup> = self.groups.into_values().collect();
        groups.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.trial_name.cmp(&b.trial_name))
                .then_with(|| a.boss_name.cmp(&b.boss_name))
                .then_with(|| a.build_slug.cmp(&b.build_slug))
        });

        tracing::info!(
            fights = self.fights,
            builds = groups.len(),
            "Consolidated builds"
        );
        for group in &groups {
            tracing::debug!(
                slug = %group.build_slug,
                count = group.count,
                reports = group.report_count,
                best = %group.best_player.character_name,
                dps = group.best_player.dps,
                "Consolidated build"
            );
        }
        groups
    }
}
