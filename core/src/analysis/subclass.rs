//! Subclass detection from slotted abilities
//!
//! A skill line is detected when any of its table abilities and any slotted
//! ability contain one another (case-insensitive). This is deliberately
//! loose: renamed or decorated ability names still match, at the cost of
//! occasional false positives. For example "Blastbones" also matches the
//! Living Death morph "Animate Blastbones".

use crate::game_data::{LOWERCASE_TABLES, SkillLine};

/// Placeholder for an undetected subclass slot
pub const NO_SUBCLASS: &str = "x";

const ATTACK_MARKERS: [&str; 2] = ["heavy attack", "light attack"];

/// Lower-case an ability name and strip weapon attack markers and any
/// parenthetical suffix ("Heavy Attack (Lightning)" -> "").
pub fn normalize_ability(name: &str) -> String {
    let mut lower = name.to_lowercase();
    if let Some(idx) = lower.find('(') {
        lower.truncate(idx);
    }
    for marker in ATTACK_MARKERS {
        lower = lower.replace(marker, "");
    }
    lower.trim().to_string()
}

/// Skill lines matched by the given abilities, in table declaration order.
pub fn detect_skill_lines<'a>(abilities: impl IntoIterator<Item = &'a str>) -> Vec<SkillLine> {
    let normalized: Vec<String> = abilities
        .into_iter()
        .map(normalize_ability)
        .filter(|name| !name.is_empty())
        .collect();

    if normalized.is_empty() {
        return Vec::new();
    }

    LOWERCASE_TABLES
        .iter()
        .filter(|(_, known)| {
            known.iter().any(|k| {
                normalized
                    .iter()
                    .any(|n| k.contains(n.as_str()) || n.contains(k.as_str()))
            })
        })
        .map(|(line, _)| *line)
        .collect()
}

/// Abbreviations of the first `size` detected lines, padded with "x"
pub fn subclass_signature(lines: &[SkillLine], size: usize) -> Vec<String> {
    let mut signature: Vec<String> = lines
        .iter()
        .take(size)
        .map(|line| line.abbreviation().to_string())
        .collect();
    signature.resize(size, NO_SUBCLASS.to_string());
    signature
}

/// Detect and abbreviate in one step
pub fn classify<'a>(abilities: impl IntoIterator<Item = &'a str>, size: usize) -> Vec<String> {
    subclass_signature(&detect_skill_lines(abilities), size)
}
