mod error;
mod model;
mod parser;
mod raw;

pub use error::TelemetryError;
pub use model::*;
pub use parser::{ABILITIES_PER_BAR, CombatantParser, FightContext, FightParse, per_second};
pub use raw::*;
