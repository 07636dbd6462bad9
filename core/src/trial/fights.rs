use chrono::DateTime;

use crate::telemetry::{FightContext, RawFightInfo, RawReport};

/// Pick the fastest successful kill of `encounter_name` from a report's
/// fight list. Only exact name matches with a difficulty set count; wipes
/// and trash pulls are ignored. Equal durations keep the earliest listed.
pub fn select_best_fight<'a>(
    fights: &'a [RawFightInfo],
    encounter_name: &str,
) -> Option<&'a RawFightInfo> {
    fights
        .iter()
        .filter(|f| f.name == encounter_name && f.difficulty.is_some_and(|d| d != 0) && f.kill)
        .reduce(|best, f| {
            if f.duration_ms() < best.duration_ms() {
                f
            } else {
                best
            }
        })
}

/// Game update label for a report.
///
/// Game versions `10.X.Y` map to `u{40 + X}`. Anything else falls back to
/// the report start date (`unknown-YYYYMMDD`, UTC), then to `unknown`.
pub fn update_version(game_version: Option<&str>, start_time_ms: u64) -> String {
    if let Some(label) = game_version.and_then(update_from_game_version) {
        return label;
    }

    if start_time_ms > 0
        && let Some(date) = i64::try_from(start_time_ms)
            .ok()
            .and_then(DateTime::from_timestamp_millis)
    {
        return format!("unknown-{}", date.format("%Y%m%d"));
    }

    "unknown".to_string()
}

/// Context for scanning `fight` of `report` as part of `trial_name`
pub fn fight_context(report: &RawReport, fight: &RawFightInfo, trial_name: &str) -> FightContext {
    FightContext {
        report_code: report.code.clone(),
        fight_id: fight.id,
        trial_name: trial_name.to_string(),
        boss_name: fight.name.clone(),
        update_version: update_version(report.game_version.as_deref(), report.start_time),
    }
}

fn update_from_game_version(version: &str) -> Option<String> {
    let mut parts = version.trim().split('.');
    let major: u32 = parts.next()?.parse().ok()?;
    let minor: u32 = parts.next()?.parse().ok()?;
    if major != 10 {
        tracing::debug!(version, "Unmapped game version");
        return None;
    }
    Some(format!("u{}", 40 + minor))
}
