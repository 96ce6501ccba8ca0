//! Activation resolution: which nodes and edges matter for a profile.
//!
//! The pipeline, for a profile with at least one answer:
//!
//! 1. Starts are the eligible nodes that list the profile's starting point.
//! 2. Reachable is the forward reach from the starts through eligible nodes,
//!    or every eligible node when there are no starts.
//! 3. Focus is the reachable programs passing the target predicates, plus any
//!    reachable program the free-text aspiration named. Entry points and
//!    outcomes are never focused. An empty focus makes the whole reachable
//!    set the target.
//! 4. Active is the reverse reach from the target, kept inside reachable, so
//!    every active node sits on a start-to-target path.
//! 5. Outcomes downstream of a focused program join the active set. The walk
//!    only passes through focused programs and outcomes.
//! 6. A category filter, when given, drops nodes outside it.
//! 7. An edge is active when both of its endpoints are.
//!
//! When no program ends up active, the advisor flag is raised and the
//! fallback overview node, if the graph has one, is shown alone.

use pathways_core::models::{ActivationResult, Category, Profile};
use pathways_core::types::collections::{FxHashSet, IdSet};
use petgraph::Direction;
use tracing::{debug, info};

use crate::graph::{AdjacencyIndex, GraphStore};
use crate::matcher::{EligibilityTable, ProfileMatcher};
use crate::traversal::reach_within;

/// Set sizes from one resolution, for logging and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolutionStats {
    pub start_count: usize,
    pub reachable_count: usize,
    pub focus_count: usize,
    /// Outcomes activated downstream of the focus.
    pub outcome_count: usize,
    /// The focus was empty, so everything reachable was the target.
    pub used_reachable_as_target: bool,
    /// No program was active; the fallback path was taken.
    pub fell_back_to_overview: bool,
}

/// Borrowed view over a loaded graph that resolves profiles.
#[derive(Debug, Clone, Copy)]
pub struct ActivationResolver<'a> {
    store: &'a GraphStore,
    adjacency: &'a AdjacencyIndex,
    eligibility: &'a EligibilityTable,
    fallback_node_id: &'a str,
}

impl<'a> ActivationResolver<'a> {
    pub fn new(
        store: &'a GraphStore,
        adjacency: &'a AdjacencyIndex,
        eligibility: &'a EligibilityTable,
        fallback_node_id: &'a str,
    ) -> Self {
        Self {
            store,
            adjacency,
            eligibility,
            fallback_node_id,
        }
    }

    /// Active nodes and edges for `profile`. An empty `categories` slice
    /// means no category filter.
    pub fn resolve(&self, profile: &Profile, categories: &[Category]) -> ActivationResult {
        self.resolve_detailed(profile, categories).0
    }

    pub fn resolve_detailed(
        &self,
        profile: &Profile,
        categories: &[Category],
    ) -> (ActivationResult, ResolutionStats) {
        let mut stats = ResolutionStats::default();
        if !profile.has_signal() {
            return (ActivationResult::empty(), stats);
        }

        let matcher = ProfileMatcher::new(profile, self.eligibility);
        // The overview node only ever appears as the fallback.
        let admitted = |id: &str| {
            id != self.fallback_node_id
                && self.store.node(id).is_some_and(|n| matcher.eligible(n))
        };

        let starts: Vec<&str> = match profile.starting_point {
            Some(sp) => self
                .store
                .nodes()
                .filter(|n| n.data.starting_points.contains(&sp) && admitted(n.id.as_str()))
                .map(|n| n.id.as_str())
                .collect(),
            None => Vec::new(),
        };
        stats.start_count = starts.len();

        let reachable: FxHashSet<String> = if starts.is_empty() {
            self.store
                .nodes()
                .filter(|n| admitted(n.id.as_str()))
                .map(|n| n.id.clone())
                .collect()
        } else {
            reach_within(starts, self.adjacency, Direction::Outgoing, admitted)
        };
        stats.reachable_count = reachable.len();

        let freeform = matcher.freeform();
        let focus: Vec<&str> = self
            .store
            .nodes()
            .filter(|n| reachable.contains(&n.id))
            .filter(|n| n.is_program() && (matcher.is_target(n) || freeform.flags(&n.id)))
            .map(|n| n.id.as_str())
            .collect();
        stats.focus_count = focus.len();

        let mut outcomes = FxHashSet::default();
        let target: Vec<&str> = if focus.is_empty() {
            stats.used_reachable_as_target = true;
            reachable.iter().map(String::as_str).collect()
        } else {
            let focused: FxHashSet<&str> = focus.iter().copied().collect();
            let downstream = |id: &str| {
                focused.contains(id)
                    || (reachable.contains(id)
                        && self.store.node(id).is_some_and(|n| n.is_outcome()))
            };
            outcomes = reach_within(
                focus.iter().copied(),
                self.adjacency,
                Direction::Outgoing,
                downstream,
            );
            outcomes.retain(|id| !focused.contains(id.as_str()));
            stats.outcome_count = outcomes.len();
            focus
        };

        let mut active = reach_within(target, self.adjacency, Direction::Incoming, |id| {
            reachable.contains(id)
        });
        active.extend(outcomes);

        debug!(
            starts = stats.start_count,
            reachable = stats.reachable_count,
            focus = stats.focus_count,
            outcomes = stats.outcome_count,
            active = active.len(),
            "resolved activation sets"
        );

        let has_program = active
            .iter()
            .any(|id| self.store.node(id).is_some_and(|n| n.is_program()));

        let active_node_ids: IdSet = if has_program {
            active
                .into_iter()
                .filter(|id| {
                    categories.is_empty()
                        || self
                            .store
                            .node(id)
                            .is_some_and(|n| categories.contains(&n.category()))
                })
                .collect()
        } else {
            stats.fell_back_to_overview = true;
            info!(
                fallback = self.fallback_node_id,
                present = self.store.contains(self.fallback_node_id),
                "no program matched profile, showing advisor"
            );
            self.store
                .node(self.fallback_node_id)
                .map(|n| n.id.clone())
                .into_iter()
                .collect()
        };

        let active_edge_ids = self.edges_between(&active_node_ids);
        let result = ActivationResult {
            active_node_ids,
            active_edge_ids,
            show_advisor: stats.fell_back_to_overview,
        };
        (result, stats)
    }

    /// Edges whose endpoints are both in `nodes`.
    pub fn edges_between(&self, nodes: &IdSet) -> IdSet {
        self.store
            .edges()
            .filter(|e| nodes.contains(&e.source) && nodes.contains(&e.target))
            .map(|e| e.id.clone())
            .collect()
    }
}
