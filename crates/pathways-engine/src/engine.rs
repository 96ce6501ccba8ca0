//! PathwayEngine: a loaded graph plus everything derived from it once.

use std::path::Path;

use pathways_core::config::PathwaysConfig;
use pathways_core::errors::GraphResult;
use pathways_core::models::{
    ActivationResult, Category, GradSpotlight, HoverHighlight, Job, PathwayDataset, Profile,
    ProfileField, ProgramMatch,
};
use tracing::info;

use crate::graph::{AdjacencyIndex, GraphStore};
use crate::matcher::{self, EligibilityTable, ProfileMatcher};
use crate::resolver::{ActivationResolver, ResolutionStats};
use crate::traversal::HoverIndex;
use crate::visibility::{GraphView, ViewOptions};

/// Immutable after construction; every query takes the profile by reference
/// and returns a fresh result.
#[derive(Debug, Clone)]
pub struct PathwayEngine {
    store: GraphStore,
    adjacency: AdjacencyIndex,
    hover: HoverIndex,
    eligibility: EligibilityTable,
    fallback_node_id: String,
    required_fields: Vec<ProfileField>,
}

impl PathwayEngine {
    /// Validate `dataset` and build the indexes.
    pub fn from_dataset(dataset: PathwayDataset, config: &PathwaysConfig) -> GraphResult<Self> {
        let store = GraphStore::load(dataset, &config.graph)?;
        let adjacency = AdjacencyIndex::build(store.edges());
        let hover = HoverIndex::build(&store, &adjacency);
        let eligibility = EligibilityTable::new(config.matcher.effective_transfer_bridge_ids());
        let fallback_node_id = config.matcher.effective_fallback_node_id().to_string();

        if !store.contains(&fallback_node_id) {
            info!(fallback = %fallback_node_id, "fallback node not in graph, advisor flag only");
        }

        Ok(Self {
            store,
            adjacency,
            hover,
            eligibility,
            fallback_node_id,
            required_fields: config.matcher.effective_required_fields(),
        })
    }

    /// Read a dataset file and build the engine.
    pub fn load(path: &Path, config: &PathwaysConfig) -> GraphResult<Self> {
        let dataset = PathwayDataset::from_path(path)?;
        Self::from_dataset(dataset, config)
    }

    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    pub fn adjacency(&self) -> &AdjacencyIndex {
        &self.adjacency
    }

    pub fn resolver(&self) -> ActivationResolver<'_> {
        ActivationResolver::new(
            &self.store,
            &self.adjacency,
            &self.eligibility,
            &self.fallback_node_id,
        )
    }

    pub fn matcher<'p>(&'p self, profile: &'p Profile) -> ProfileMatcher<'p> {
        ProfileMatcher::new(profile, &self.eligibility)
    }

    /// Active nodes and edges for `profile`, unfiltered.
    pub fn resolve(&self, profile: &Profile) -> ActivationResult {
        self.resolver().resolve(profile, &[])
    }

    /// Active nodes and edges restricted to `categories` (empty = all).
    pub fn resolve_filtered(&self, profile: &Profile, categories: &[Category]) -> ActivationResult {
        self.resolver().resolve(profile, categories)
    }

    pub fn resolve_detailed(
        &self,
        profile: &Profile,
        categories: &[Category],
    ) -> (ActivationResult, ResolutionStats) {
        self.resolver().resolve_detailed(profile, categories)
    }

    /// Highlight for a hovered node id. Unknown ids highlight nothing.
    pub fn hover(&self, node_id: &str) -> HoverHighlight {
        self.hover.highlight(&self.store, &self.adjacency, node_id)
    }

    pub fn match_programs(&self, profile: &Profile) -> ProgramMatch {
        matcher::match_programs(
            &self.store,
            &self.matcher(profile),
            &self.fallback_node_id,
        )
    }

    /// Jobs of `program_id` serving the profile's career goal. Unknown ids
    /// have no jobs.
    pub fn jobs_for(&self, program_id: &str, profile: &Profile) -> Vec<&Job> {
        self.store
            .node(program_id)
            .map(|node| matcher::jobs_for(node, profile))
            .unwrap_or_default()
    }

    /// Spotlights for the selected program, or all of them with none selected.
    pub fn recent_grads(&self, program_id: Option<&str>) -> Vec<&GradSpotlight> {
        let program = program_id.and_then(|id| self.store.node(id));
        matcher::recent_grads(self.store.grads(), program)
    }

    /// Display state for every node and edge.
    pub fn view(
        &self,
        activation: &ActivationResult,
        hovered: Option<&str>,
        options: &ViewOptions,
    ) -> GraphView {
        let highlight = hovered.map(|id| self.hover(id));
        GraphView::classify(&self.store, activation, highlight.as_ref(), options)
    }

    /// Whether the configured required questions are all answered.
    pub fn is_profile_complete(&self, profile: &Profile) -> bool {
        profile.is_complete(&self.required_fields)
    }

    pub fn fallback_node_id(&self) -> &str {
        &self.fallback_node_id
    }
}
