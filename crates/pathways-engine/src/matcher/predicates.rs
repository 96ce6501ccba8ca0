//! Per-node profile predicates.

use pathways_core::models::{PathwayNode, Profile};
use pathways_core::types::collections::IdSet;

use super::eligibility::EligibilityTable;
use super::freeform::{match_freeform, FreeformMatch};
use super::preference;

/// A profile snapshot bound to the rule tables, evaluated node by node.
///
/// Each predicate is vacuously true when the profile field or the node
/// attribute it reads is unset. The free-text aspiration is matched once on
/// construction. It admits the programs it names; the visions it implies only
/// feed recommendations, never filtering.
#[derive(Debug, Clone)]
pub struct ProfileMatcher<'a> {
    profile: &'a Profile,
    eligibility: &'a EligibilityTable,
    freeform: FreeformMatch,
    /// Selected visions plus the ones the aspiration implies.
    recommended_visions: IdSet,
}

impl<'a> ProfileMatcher<'a> {
    pub fn new(profile: &'a Profile, eligibility: &'a EligibilityTable) -> Self {
        let freeform = profile
            .aspiration_text()
            .map(match_freeform)
            .unwrap_or_default();
        let recommended_visions = profile
            .visions
            .iter()
            .chain(freeform.vision_ids.iter())
            .cloned()
            .collect();
        Self {
            profile,
            eligibility,
            freeform,
            recommended_visions,
        }
    }

    pub fn profile(&self) -> &Profile {
        self.profile
    }

    pub fn freeform(&self) -> &FreeformMatch {
        &self.freeform
    }

    /// Starting-point eligibility.
    pub fn eligible(&self, node: &PathwayNode) -> bool {
        self.eligibility.permits(self.profile.starting_point, node)
    }

    /// Declared math and coding levels must both be accepted by a node that
    /// lists foundations.
    pub fn matches_foundation(&self, node: &PathwayNode) -> bool {
        let foundations = &node.data.foundations;
        if foundations.is_empty() {
            return true;
        }
        [&self.profile.math_level, &self.profile.coding_experience]
            .into_iter()
            .flatten()
            .all(|level| foundations.contains(level))
    }

    /// Selected visions intersect the node's, or the aspiration named it.
    pub fn matches_interest(&self, node: &PathwayNode) -> bool {
        if self.freeform.flags(&node.id) {
            return true;
        }
        let selected = &self.profile.visions;
        let interests = &node.data.interests;
        selected.is_empty()
            || interests.is_empty()
            || interests.iter().any(|v| selected.contains(v))
    }

    pub fn matches_preference(&self, node: &PathwayNode) -> bool {
        self.profile
            .preference
            .map_or(true, |pref| preference::admits(pref, node))
    }

    pub fn matches_goal(&self, node: &PathwayNode) -> bool {
        match &self.profile.career_goal {
            None => true,
            Some(_) if node.data.goals.is_empty() => true,
            Some(goal) => node.data.goals.contains(goal),
        }
    }

    /// Conjunction of the foundation, interest, preference and goal
    /// predicates. Eligibility is applied separately, during traversal.
    pub fn is_target(&self, node: &PathwayNode) -> bool {
        self.matches_foundation(node)
            && self.matches_interest(node)
            && self.matches_preference(node)
            && self.matches_goal(node)
    }

    /// Whether `node` serves a declared interest or readiness level outright,
    /// rather than passing because one side left it unset.
    pub fn explicitly_recommended(&self, node: &PathwayNode) -> bool {
        if self.freeform.flags(&node.id) {
            return true;
        }
        let data = &node.data;
        let interest = data
            .interests
            .iter()
            .any(|v| self.recommended_visions.contains(v));
        let foundation = [&self.profile.math_level, &self.profile.coding_experience]
            .into_iter()
            .flatten()
            .any(|level| data.foundations.contains(level));
        interest || foundation
    }
}
