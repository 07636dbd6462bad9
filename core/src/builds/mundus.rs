use hashbrown::HashMap;

use super::group::BuildGroup;

/// Give best players without a mundus stone the one seen for the same
/// character anywhere else in `groups`. Mundus is character-wide, so any
/// fight will do. Returns the number of best players filled in.
pub fn backfill_mundus(groups: &mut [BuildGroup]) -> usize {
    let mut known: HashMap<String, String> = HashMap::new();
    for player in groups.iter().flat_map(|g| g.all_players.iter()) {
        if let Some(mundus) = &player.mundus {
            known
                .entry_ref(player.character_name.as_str())
                .or_insert_with(|| mundus.clone());
        }
    }

    let mut filled = 0;
    for group in groups.iter_mut() {
        let best = &mut group.best_player;
        if best.mundus.is_some() {
            continue;
        }
        if let Some(mundus) = known.get(best.character_name.as_str()) {
            best.mundus = Some(mundus.clone());
            filled += 1;
        }
    }

    if filled > 0 {
        tracing::debug!(filled, characters = known.len(), "Backfilled mundus stones");
    }
    filled
}
