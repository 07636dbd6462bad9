//! Trial-level helpers: choosing the fight to scan per report, labelling the
//! game update, and scanning many fights into publishable builds.

mod fights;
mod scan;

pub use fights::{fight_context, select_best_fight, update_version};
pub use scan::{FightInput, TrialScan, scan_fights};
