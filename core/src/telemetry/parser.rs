use super::*;
use serde::Deserialize;
use crate::game_data::{GearSlot, Role, skill_line_for_ability};


/// Five actives plus one ultimate
pub const ABILITIES_PER_BAR: usize = 6;
const MAX_ABILITIES: usize = ABILITIES_PER_BAR * 2;

/// Where a fight's records came from
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FightContext {
    pub report_code: String,
    pub fight_id: u32,
    pub trial_name: String,
    pub boss_name: String,
    /// Game update label of the report ("u45", "unknown-20250301", ...)
    pub update_version: String,
}

/// Outcome of parsing all combatant entries of one fight
#[derive(Debug, Clone, Default)]
pub struct FightParse {
    pub players: Vec<PlayerRecord>,
    /// Records with neither gear nor abilities
    pub dropped: usize,
    /// Malformed records
    pub skipped: usize,
}

/// Convert a damage or healing total into a per-second rate
pub fn per_second(total: f64, active_time_ms: u64) -> f64 {
    if active_time_ms == 0 {
        return 0.0;
    }
    total / active_time_ms as f64 * 1000.0
}

pub struct CombatantParser {
    context: FightContext,
}

impl CombatantParser {
    pub fn new(context: FightContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &FightContext {
        &self.context
    }

    /// Parse every entry of a fight table. Malformed entries are logged and
    /// skipped; they never abort the rest of the fight.
    pub fn parse_fight(&self, entries: &[serde_json::Value]) -> FightParse {
        let mut out = FightParse::default();

        for (index, entry) in entries.iter().enumerate() {
            match self.parse_entry(index, entry) {
                Ok(Some(player)) => out.players.push(player),
                Ok(None) => out.dropped += 1,
                Err(err) => {
                    tracing::warn!(
                        report = %self.context.report_code,
                        fight_id = self.context.fight_id,
                        error = %err,
                        "Skipping malformed combatant"
                    );
                    out.skipped += 1;
                }
            }
        }

        tracing::debug!(
            report = %self.context.report_code,
            fight_id = self.context.fight_id,
            players = out.players.len(),
            dropped = out.dropped,
            skipped = out.skipped,
            "Parsed fight"
        );
        out
    }

    pub fn parse_entry(
        &self,
        index: usize,
        entry: &serde_json::Value,
    ) -> Result<Option<PlayerRecord>, TelemetryError> {
        let raw = RawCombatant::deserialize(entry)
            .map_err(|source| TelemetryError::Malformed { index, source })?;
        self.parse_combatant(raw)
    }

    /// Build a player record. Returns `Ok(None)` for records carrying neither
    /// gear nor abilities, which cannot produce a build identity.
    pub fn parse_combatant(
        &self,
        raw: RawCombatant,
    ) -> Result<Option<PlayerRecord>, TelemetryError> {
        let character_name = raw.name.trim().to_string();
        if character_name.is_empty() {
            return Err(TelemetryError::MissingName);
        }

        if raw.gear.is_empty() && raw.talents.is_empty() {
            return Ok(None);
        }

        if raw.talents.len() > MAX_ABILITIES {
            return Err(TelemetryError::TooManyAbilities {
                character: character_name,
                count: raw.talents.len(),
            });
        }

        let dps = raw
            .dps
            .unwrap_or_else(|| per_second(raw.total, raw.active_time));
        let healing = healing_rate(&raw, dps, &character_name);
        let dps_percentage = raw.percent.unwrap_or(0.0);
        if !valid_total(dps) || !valid_total(healing) || !valid_total(dps_percentage) {
            return Err(TelemetryError::InvalidTotals {
                character: character_name,
            });
        }

        let gear = raw
            .gear
            .into_iter()
            .map(|item| Self::parse_gear(item, &character_name))
            .collect::<Result<Vec<_>, _>>()?;

        let mut abilities = raw.talents.into_iter().map(Self::parse_talent);
        let bar1: Vec<AbilityRef> = abilities.by_ref().take(ABILITIES_PER_BAR).collect();
        let bar2: Vec<AbilityRef> = abilities.collect();

        let role = match raw.role.as_deref() {
            Some(tag) => Role::from_tag(tag).unwrap_or_else(|| {
                tracing::debug!(character = %character_name, tag, "Unrecognized role tag");
                Role::Unknown
            }),
            None => Role::Unknown,
        };

        let mundus = raw.mundus.filter(|m| !m.trim().is_empty());

        let mut champion_points: Vec<String> = Vec::with_capacity(raw.champion_points.len());
        for star in raw.champion_points {
            let star = star.trim();
            if !star.is_empty() && !champion_points.iter().any(|s| s == star) {
                champion_points.push(star.to_string());
            }
        }

        Ok(Some(PlayerRecord {
            character_name,
            account_handle: raw.display_name.trim().to_string(),
            class_name: raw.class_name,
            role,
            dps,
            healing,
            dps_percentage,
            gear,
            bar1,
            bar2,
            mundus,
            champion_points,
            report_code: self.context.report_code.clone(),
            fight_id: self.context.fight_id,
            ..Default::default()
        }))
    }

    fn parse_gear(item: RawGearItem, character: &str) -> Result<GearPiece, TelemetryError> {
        let slot = GearSlot::from_id(item.slot).ok_or_else(|| TelemetryError::InvalidSlot {
            character: character.to_string(),
            slot: item.slot,
        })?;

        let mut piece = GearPiece::new(slot, item.name, item.set_name.unwrap_or_default());
        piece.item_id = item.id;
        piece.trait_id = item.trait_id;
        piece.enchant_id = item.enchant_type;
        Ok(piece)
    }

    fn parse_talent(talent: RawTalent) -> AbilityRef {
        let skill_line = skill_line_for_ability(&talent.name);
        AbilityRef {
            name: talent.name,
            icon_id: talent.ability_icon,
            skill_line,
        }
    }
}

/// Healing per second on the same footing as `dps`. Without an active time a
/// precomputed DPS is scaled by the healing to damage totals.
fn healing_rate(raw: &RawCombatant, dps: f64, character: &str) -> f64 {
    if raw.active_time > 0 {
        return per_second(raw.healing_total, raw.active_time);
    }
    if raw.total > 0.0 {
        return dps * raw.healing_total / raw.total;
    }
    if raw.healing_total > 0.0 {
        tracing::debug!(character, "No active time or damage total, healing rate unknown");
    }
    0.0
}

fn valid_total(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
