use buildorama_types::AnalysisConfig;

use crate::game_data::Role;

use super::group::BuildGroup;

/// Minimum group size to publish a build played in `role`
pub fn min_count_for(role: Role, config: &AnalysisConfig) -> usize {
    if role.is_support() {
        config.support_min_count
    } else {
        config.dps_min_count
    }
}

/// Whether a group's population is large enough, judged by the best
/// player's role
pub fn is_publishable(group: &BuildGroup, config: &AnalysisConfig) -> bool {
    group.count >= min_count_for(group.role(), config)
}

/// Groups split by the publishing threshold, each side sorted by count
/// descending. Held-back groups are kept for diagnostics.
#[derive(Debug, Clone, Default)]
pub struct ThresholdSplit {
    pub published: Vec<BuildGroup>,
    pub held_back: Vec<BuildGroup>,
}

pub fn split_publishable(groups: Vec<BuildGroup>, config: &AnalysisConfig) -> ThresholdSplit {
    let (mut published, mut held_back): (Vec<_>, Vec<_>) = groups
        .into_iter()
        .partition(|group| is_publishable(group, config));

    published.sort_by(|a, b| b.count.cmp(&a.count));
    held_back.sort_by(|a, b| b.count.cmp(&a.count));

    tracing::info!(
        published = published.len(),
        held_back = held_back.len(),
        "Applied publishing threshold"
    );

    ThresholdSplit {
        published,
        held_back,
    }
}
