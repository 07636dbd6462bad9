use hashbrown::HashMap;
use hashbrown::hash_map::Entry;

use crate::telemetry::PlayerRecord;

/// Collapse records of the same (account, character) within one fight to
/// the one with the highest DPS. First-seen order is preserved; on equal
/// DPS the earlier record stays.
pub fn dedup_players(players: Vec<PlayerRecord>) -> Vec<PlayerRecord> {
    let mut kept: Vec<PlayerRecord> = Vec::with_capacity(players.len());
    let mut index: HashMap<(String, String), usize> = HashMap::new();

    for player in players {
        let (account, character) = player.identity_key();
        match index.entry((account.to_string(), character.to_string())) {
            Entry::Occupied(slot) => {
                let existing = &mut kept[*slot.get()];
                if player.dps > existing.dps {
                    tracing::debug!(
                        character = %player.character_name,
                        replaced = existing.dps,
                        dps = player.dps,
                        "Duplicate combatant record"
                    );
                    *existing = player;
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(kept.len());
                kept.push(player);
            }
        }
    }

    kept
}
