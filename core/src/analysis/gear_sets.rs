//! Gear set counting
//!
//! Counts equipped pieces per set, overall and per action bar. Mythics and
//! arena weapons count towards the overall total but never towards a bar,
//! since neither contributes to a 5-piece bonus. Two-handed weapons and
//! staves count twice.

use crate::game_data::{is_arena_weapon, is_mythic_item, is_two_handed_weapon};
use crate::telemetry::{GearPiece, SetCounts};

pub fn count_sets(gear: &[GearPiece]) -> SetCounts {
    let mut counts = SetCounts::default();

    for piece in gear {
        add_piece(&mut counts, piece);
    }

    // Second pass: a two-handed main hand is worth one more piece
    for piece in gear.iter().filter(|p| p.slot.is_main_hand()) {
        if is_two_handed_weapon(&piece.item_name) {
            add_piece(&mut counts, piece);
        }
    }

    counts
}

fn add_piece(counts: &mut SetCounts, piece: &GearPiece) {
    let Some(set_name) = piece.set() else {
        return;
    };

    *counts.total.entry_ref(set_name).or_insert(0) += 1;

    if is_mythic_item(&piece.item_name) || is_arena_weapon(&piece.item_name) {
        return;
    }

    let bar = match piece.bar {
        2 => &mut counts.bar2,
        _ => &mut counts.bar1,
    };
    *bar.entry_ref(set_name).or_insert(0) += 1;
}
