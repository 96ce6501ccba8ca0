//! Program list matching and per-program career outcomes.

use pathways_core::models::{Job, MatchedProgram, NodeType, PathwayNode, Profile, ProgramMatch};
use tracing::debug;

use super::predicates::ProfileMatcher;
use crate::graph::GraphStore;

/// Degree and bridge nodes passing eligibility, foundation, interest and
/// preference, ordered by label (code point order, then id).
///
/// The `fallback_id` node never matches on its own. When nothing matches, the
/// list holds just that node if the graph has one, and `show_advisor` is set.
pub fn match_programs(
    store: &GraphStore,
    matcher: &ProfileMatcher<'_>,
    fallback_id: &str,
) -> ProgramMatch {
    let mut programs: Vec<MatchedProgram> = store
        .nodes()
        .filter(|n| matches!(n.node_type, NodeType::Degree | NodeType::Bridge))
        .filter(|n| n.id != fallback_id)
        .filter(|n| {
            matcher.eligible(n)
                && matcher.matches_foundation(n)
                && matcher.matches_interest(n)
                && matcher.matches_preference(n)
        })
        .map(|n| matched(n, matcher.explicitly_recommended(n)))
        .collect();

    if programs.is_empty() {
        debug!(fallback = fallback_id, "no programs matched profile");
        return ProgramMatch {
            programs: store
                .node(fallback_id)
                .map(|n| matched(n, false))
                .into_iter()
                .collect(),
            show_advisor: true,
        };
    }

    programs.sort_by(|a, b| a.label.cmp(&b.label).then_with(|| a.id.cmp(&b.id)));
    ProgramMatch {
        programs,
        show_advisor: false,
    }
}

fn matched(node: &PathwayNode, recommended: bool) -> MatchedProgram {
    MatchedProgram {
        id: node.id.clone(),
        label: node.data.label.clone(),
        kind: node.data.kind,
        recommended,
    }
}

/// Jobs of `node` that serve the profile's career goal.
pub fn jobs_for<'n>(node: &'n PathwayNode, profile: &Profile) -> Vec<&'n Job> {
    let goal = profile.career_goal.as_deref();
    node.data
        .jobs
        .iter()
        .filter(|job| job.serves_goal(goal))
        .collect()
}
