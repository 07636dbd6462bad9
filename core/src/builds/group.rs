use std::collections::BTreeSet;

use buildorama_types::{
    AnalysisConfig, PublishedAbility, PublishedBuild, PublishedGear, PublishedPlayer,
};
use hashbrown::{HashMap, HashSet};

use crate::analysis::{NO_SUBCLASS, analyze_player, dedup_players, signature_sets};
use crate::game_data::{Role, SkillLine};
use crate::telemetry::{AbilityRef, FightContext, GearPiece, PlayerRecord};

use super::stats::BuildStatistics;

/// Consolidation key: one group per build per boss
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupKey {
    pub trial_name: String,
    pub boss_name: String,
    pub build_slug: String,
}

/// All players sharing one build identity on one boss
#[derive(Debug, Clone, PartialEq)]
pub struct BuildGroup {
    pub trial_name: String,
    pub boss_name: String,
    pub build_slug: String,
    /// Subclass abbreviations of the best player, in detection order
    pub subclasses: Vec<String>,
    /// Names of the best player's signature sets
    pub signature_sets: Vec<String>,
    pub count: usize,
    /// Distinct source reports among `all_players`
    pub report_count: usize,
    pub best_player: PlayerRecord,
    pub all_players: Vec<PlayerRecord>,
    pub update_version: String,
}

impl BuildGroup {
    /// Build a group from analyzed players sharing one slug.
    /// Returns None for an empty player list.
    pub fn from_players(
        context: &FightContext,
        build_slug: String,
        players: Vec<PlayerRecord>,
        config: &AnalysisConfig,
    ) -> Option<Self> {
        let best_player = players.first()?.clone();
        let mut group = Self {
            trial_name: context.trial_name.clone(),
            boss_name: context.boss_name.clone(),
            build_slug,
            subclasses: Vec::new(),
            signature_sets: Vec::new(),
            count: 0,
            report_count: 0,
            best_player,
            all_players: players,
            update_version: context.update_version.clone(),
        };
        group.refresh(config);
        Some(group)
    }

    pub fn key(&self) -> GroupKey {
        GroupKey {
            trial_name: self.trial_name.clone(),
            boss_name: self.boss_name.clone(),
            build_slug: self.build_slug.clone(),
        }
    }

    pub fn role(&self) -> Role {
        self.best_player.role
    }

    /// Fold another group with the same key into this one. Players are
    /// concatenated, not deduplicated again: each fight is an independent
    /// observation.
    pub fn merge(&mut self, other: BuildGroup, config: &AnalysisConfig) {
        if other.best_player.dps > self.best_player.dps && !other.update_version.is_empty() {
            self.update_version = other.update_version;
        } else if self.update_version.is_empty() {
            self.update_version = other.update_version;
        }
        self.all_players.extend(other.all_players);
        self.refresh(config);
    }

    /// Recompute count, report count, best player and the fields taken
    /// from the best player.
    fn refresh(&mut self, config: &AnalysisConfig) {
        self.count = self.all_players.len();
        self.report_count = self
            .all_players
            .iter()
            .map(|p| p.report_code.as_str())
            .filter(|code| !code.is_empty())
            .collect::<HashSet<_>>()
            .len();

        // Highest DPS wins; the first seen wins ties
        let Some(best) = self
            .all_players
            .iter()
            .reduce(|best, p| if p.dps > best.dps { p } else { best })
        else {
            return;
        };
        let mut best = best.clone();

        if best.mundus.is_none() {
            best.mundus = self
                .all_players
                .iter()
                .filter(|p| p.character_name == best.character_name)
                .find_map(|p| p.mundus.clone());
        }

        self.subclasses = best.subclasses.clone();
        self.signature_sets = signature_sets(
            &best.set_counts,
            config.signature_set_min_pieces,
            config.signature_set_limit,
        );
        self.best_player = best;
    }

    /// "Assassination / Shadow / Siphoning (DPS)"
    pub fn display_name(&self) -> String {
        let names: Vec<&str> = self
            .subclasses
            .iter()
            .map(|abbr| {
                if abbr == NO_SUBCLASS {
                    "Unknown"
                } else {
                    SkillLine::from_abbreviation(abbr).map_or(abbr.as_str(), |line| line.name())
                }
            })
            .collect();

        let mut name = names.join(" / ");
        if self.role() != Role::Unknown {
            name.push_str(&format!(" ({})", self.role().display_name()));
        }
        name
    }

    /// Every set worn by any player of the group, sorted by name
    pub fn all_sets_used(&self) -> Vec<String> {
        self.all_players
            .iter()
            .flat_map(|p| p.set_counts.total.keys().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn to_published(&self) -> PublishedBuild {
        PublishedBuild {
            trial_name: self.trial_name.clone(),
            boss_name: self.boss_name.clone(),
            build_slug: self.build_slug.clone(),
            display_name: self.display_name(),
            subclasses: self.subclasses.clone(),
            signature_sets: self.signature_sets.clone(),
            count: self.count,
            report_count: self.report_count,
            update_version: self.update_version.clone(),
            best_player: published_player(&self.best_player),
        }
    }
}

fn published_player(player: &PlayerRecord) -> PublishedPlayer {
    PublishedPlayer {
        character_name: player.character_name.clone(),
        account_handle: player.account_handle.clone(),
        role: player.role.as_str().to_string(),
        dps: player.dps,
        healing: player.healing,
        dps_percentage: player.dps_percentage,
        mundus: player.mundus.clone(),
        champion_points: player.champion_points.clone(),
        report_code: player.report_code.clone(),
        fight_id: player.fight_id,
        gear: player.gear.iter().map(published_gear).collect(),
        bar1: player.bar1.iter().map(published_ability).collect(),
        bar2: player.bar2.iter().map(published_ability).collect(),
    }
}

fn published_gear(piece: &GearPiece) -> PublishedGear {
    PublishedGear {
        slot: piece.slot.name().to_string(),
        item_name: piece.item_name.clone(),
        set_name: piece.set().unwrap_or_default().to_string(),
        trait_name: piece.trait_name().to_string(),
        enchant_name: piece.enchant_name().to_string(),
    }
}

fn published_ability(ability: &AbilityRef) -> PublishedAbility {
    PublishedAbility {
        name: ability.name.clone(),
        icon: ability.icon_id.clone(),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Per-Fight Grouping
// ─────────────────────────────────────────────────────────────────────────────

/// Build groups of a single fight
#[derive(Debug, Clone, Default)]
pub struct FightBuilds {
    pub context: FightContext,
    /// Sorted by count descending, then slug
    pub groups: Vec<BuildGroup>,
    pub statistics: BuildStatistics,
}

impl FightBuilds {
    /// Deduplicate, classify and group the players of one fight.
    pub fn from_players(
        players: Vec<PlayerRecord>,
        context: &FightContext,
        config: &AnalysisConfig,
    ) -> Self {
        let mut players = dedup_players(players);
        for player in &mut players {
            analyze_player(player, config);
        }

        let statistics = BuildStatistics::from_players(&players, config);

        let mut by_slug: HashMap<String, Vec<PlayerRecord>> = HashMap::new();
        for player in players {
            by_slug
                .entry(player.build_slug.clone())
                .or_default()
                .push(player);
        }

        let mut groups: Vec<BuildGroup> = by_slug
            .into_iter()
            .filter_map(|(slug, members)| {
                BuildGroup::from_players(context, slug, members, config)
            })
            .collect();
        groups.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.build_slug.cmp(&b.build_slug))
        });

        tracing::info!(
            report = %context.report_code,
            fight_id = context.fight_id,
            boss = %context.boss_name,
            players = statistics.total_players,
            builds = groups.len(),
            "Grouped fight builds"
        );

        Self {
            context: context.clone(),
            groups,
            statistics,
        }
    }
}
