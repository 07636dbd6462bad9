use buildorama_types::AnalysisConfig;
use hashbrown::{HashMap, HashSet};

use crate::game_data::Role;
use crate::telemetry::PlayerRecord;

/// Players per role
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoleCounts {
    pub dps: usize,
    pub healer: usize,
    pub tank: usize,
    pub unknown: usize,
}

impl RoleCounts {
    fn add(&mut self, role: Role) {
        match role {
            Role::Dps => self.dps += 1,
            Role::Healer => self.healer += 1,
            Role::Tank => self.tank += 1,
            Role::Unknown => self.unknown += 1,
        }
    }
}

/// Summary of the builds seen in one fight
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildStatistics {
    pub total_players: usize,
    pub unique_builds: usize,
    pub roles: RoleCounts,
    /// "Ass/Shadow/Siphon" -> players, in detection order
    pub subclass_distribution: HashMap<String, usize>,
    /// Set name -> summed piece count, signature sets only
    pub set_distribution: HashMap<String, u32>,
}

impl BuildStatistics {
    /// Summarize analyzed players
    pub fn from_players(players: &[PlayerRecord], config: &AnalysisConfig) -> Self {
        let mut stats = Self {
            total_players: players.len(),
            ..Default::default()
        };

        let mut slugs: HashSet<&str> = HashSet::new();
        for player in players {
            slugs.insert(player.build_slug.as_str());
            stats.roles.add(player.role);

            if !player.subclasses.is_empty() {
                *stats
                    .subclass_distribution
                    .entry(player.subclasses.join("/"))
                    .or_insert(0) += 1;
            }

            for (set_name, count) in &player.set_counts.total {
                if *count >= config.signature_set_min_pieces {
                    *stats.set_distribution.entry_ref(set_name.as_str()).or_insert(0) += count;
                }
            }
        }
        stats.unique_builds = slugs.len();
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(slug: &str, role: Role, subclasses: &[&str], sets: &[(&str, u32)]) -> PlayerRecord {
        let mut player = PlayerRecord {
            build_slug: slug.to_string(),
            role,
            subclasses: subclasses.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        };
        for (name, count) in sets {
            player.set_counts.total.insert(name.to_string(), *count);
        }
        player
    }

    #[test]
    fn summarizes_roles_builds_and_sets() {
        let players = vec![
            player(
                "a",
                Role::Dps,
                &["Ass", "Shadow", "Siphon"],
                &[("Relequen", 5), ("Slimecraw", 1)],
            ),
            player("a", Role::Dps, &["Ass", "Shadow", "Siphon"], &[("Relequen", 6)]),
            player("b", Role::Healer, &["Resto", "Green", "x"], &[("Spell Power Cure", 5)]),
            player("c", Role::Tank, &["Bone", "x", "x"], &[]),
        ];

        let stats = BuildStatistics::from_players(&players, &AnalysisConfig::default());

        assert_eq!(stats.total_players, 4);
        assert_eq!(stats.unique_builds, 3);
        assert_eq!(
            stats.roles,
            RoleCounts {
                dps: 2,
                healer: 1,
                tank: 1,
                unknown: 0
            }
        );
        assert_eq!(stats.subclass_distribution.get("Ass/Shadow/Siphon"), Some(&2));
        assert_eq!(stats.set_distribution.get("Relequen"), Some(&11));
        assert!(!stats.set_distribution.contains_key("Slimecraw"));
    }
}
