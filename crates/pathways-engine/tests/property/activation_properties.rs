//! Property tests for activation resolution and reachability.

use std::sync::OnceLock;

use proptest::prelude::*;

use pathways_core::config::PathwaysConfig;
use pathways_core::models::{PathwayEdge, Preference, Profile, StartingPoint};
use pathways_core::types::collections::{FxHashSet, IdSet};
use pathways_engine::{reach, reach_within, AdjacencyIndex, PathwayEngine};
use petgraph::Direction;
use test_fixtures::{CAREER_GOALS, CODING_LEVELS, MATH_LEVELS, VISIONS};

const ASPIRATIONS: [&str; 5] = [
    "I want to work in cybersecurity",
    "I like fixing computers",
    "something with AI and games",
    "banking",
    "I enjoy painting",
];

fn engine() -> &'static PathwayEngine {
    static ENGINE: OnceLock<PathwayEngine> = OnceLock::new();
    ENGINE.get_or_init(|| {
        PathwayEngine::from_dataset(test_fixtures::sample_dataset(), &PathwaysConfig::default())
            .expect("sample graph is valid")
    })
}

fn profile_strategy() -> impl Strategy<Value = Profile> {
    (
        prop::option::of(prop::sample::select(StartingPoint::ALL.to_vec())),
        prop::option::of(prop::sample::select(MATH_LEVELS.to_vec())),
        prop::option::of(prop::sample::select(CODING_LEVELS.to_vec())),
        prop::sample::subsequence(VISIONS.to_vec(), 0..=2),
        prop::option::of(prop::sample::select(Preference::ALL.to_vec())),
        prop::option::of(prop::sample::select(CAREER_GOALS.to_vec())),
        prop::option::of(prop::sample::select(ASPIRATIONS.to_vec())),
    )
        .prop_map(|(sp, math, coding, visions, preference, goal, aspiration)| Profile {
            starting_point: sp,
            math_level: math.map(str::to_string),
            coding_experience: coding.map(str::to_string),
            visions: visions.into_iter().map(str::to_string).collect(),
            preference,
            career_goal: goal.map(str::to_string),
            aspiration: aspiration.map(str::to_string),
        })
}

/// One extra answer layered onto a profile.
#[derive(Debug, Clone)]
enum Constraint {
    StartingPoint(StartingPoint),
    Math(&'static str),
    Coding(&'static str),
    Preference(Preference),
    Goal(&'static str),
    Vision(&'static str),
}

fn constraint_strategy() -> impl Strategy<Value = Constraint> {
    prop_oneof![
        prop::sample::select(StartingPoint::ALL.to_vec()).prop_map(Constraint::StartingPoint),
        prop::sample::select(MATH_LEVELS.to_vec()).prop_map(Constraint::Math),
        prop::sample::select(CODING_LEVELS.to_vec()).prop_map(Constraint::Coding),
        prop::sample::select(Preference::ALL.to_vec()).prop_map(Constraint::Preference),
        prop::sample::select(CAREER_GOALS.to_vec()).prop_map(Constraint::Goal),
        prop::sample::select(VISIONS.to_vec()).prop_map(Constraint::Vision),
    ]
}

/// `profile` with `constraint` added, or `None` when that question is
/// already answered. A vision only narrows when the selection starts empty.
fn with_constraint(profile: &Profile, constraint: &Constraint) -> Option<Profile> {
    let mut next = profile.clone();
    match *constraint {
        Constraint::StartingPoint(sp) if profile.starting_point.is_none() => {
            next.starting_point = Some(sp)
        }
        Constraint::Math(level) if profile.math_level.is_none() => {
            next.math_level = Some(level.to_string())
        }
        Constraint::Coding(level) if profile.coding_experience.is_none() => {
            next.coding_experience = Some(level.to_string())
        }
        Constraint::Preference(pref) if profile.preference.is_none() => {
            next.preference = Some(pref)
        }
        Constraint::Goal(goal) if profile.career_goal.is_none() => {
            next.career_goal = Some(goal.to_string())
        }
        Constraint::Vision(vision) if profile.visions.is_empty() => {
            next.visions.insert(vision.to_string());
        }
        _ => return None,
    }
    Some(next)
}

fn within(active: &IdSet) -> impl Fn(&str) -> bool + '_ {
    move |id: &str| active.contains(id)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        max_global_rejects: 8192,
        ..ProptestConfig::default()
    })]

    #[test]
    fn resolution_is_idempotent(profile in profile_strategy()) {
        let engine = engine();
        prop_assert_eq!(engine.resolve(&profile), engine.resolve(&profile));
    }

    #[test]
    fn edge_active_iff_both_endpoints_active(profile in profile_strategy()) {
        let engine = engine();
        let result = engine.resolve(&profile);
        for edge in engine.store().edges() {
            let both = result.is_node_active(&edge.source) && result.is_node_active(&edge.target);
            prop_assert_eq!(result.is_edge_active(&edge.id), both, "edge {}", edge.id);
        }
    }

    #[test]
    fn advisor_means_overview_only(profile in profile_strategy()) {
        let engine = engine();
        let result = engine.resolve(&profile);
        if result.show_advisor {
            prop_assert!(profile.has_signal());
            let ids: Vec<&str> = result.active_node_ids.iter().map(String::as_str).collect();
            prop_assert_eq!(ids, vec!["general-overview"]);
        } else if profile.has_signal() {
            prop_assert!(result
                .active_node_ids
                .iter()
                .any(|id| engine.store().node(id).is_some_and(|n| n.is_program())));
        } else {
            prop_assert!(result.is_empty());
        }
    }

    #[test]
    fn adding_a_constraint_never_grows_the_active_set(
        profile in profile_strategy(),
        constraint in constraint_strategy(),
    ) {
        let engine = engine();
        let narrowed = with_constraint(&profile, &constraint);
        prop_assume!(narrowed.is_some() && profile.has_signal());
        let narrowed = narrowed.unwrap_or_default();

        let (wide, wide_stats) = engine.resolve_detailed(&profile, &[]);
        let (narrow, narrow_stats) = engine.resolve_detailed(&narrowed, &[]);
        // The documented fallbacks may widen the result.
        prop_assume!(!wide.show_advisor && !narrow.show_advisor);
        prop_assume!(!wide_stats.used_reachable_as_target && !narrow_stats.used_reachable_as_target);

        prop_assert!(
            narrow.active_node_ids.is_subset(&wide.active_node_ids),
            "{:?} added {:?}",
            constraint,
            narrow.active_node_ids.difference(&wide.active_node_ids).collect::<Vec<_>>()
        );
    }

    #[test]
    fn active_nodes_lie_on_start_to_target_paths(profile in profile_strategy()) {
        let engine = engine();
        let (result, stats) = engine.resolve_detailed(&profile, &[]);
        prop_assume!(!result.show_advisor && !result.is_empty());
        let active = &result.active_node_ids;

        if let (Some(sp), true) = (profile.starting_point, stats.start_count > 0) {
            let starts = active.iter().filter(|id| {
                engine
                    .store()
                    .node(id)
                    .is_some_and(|n| n.data.starting_points.contains(&sp))
            });
            let from_starts =
                reach_within(starts, engine.adjacency(), Direction::Outgoing, within(active));
            prop_assert_eq!(from_starts.len(), active.len());
        }

        if !stats.used_reachable_as_target {
            let matcher = engine.matcher(&profile);
            let targets: Vec<&String> = active
                .iter()
                .filter(|id| {
                    engine.store().node(id).is_some_and(|n| {
                        n.is_program() && (matcher.is_target(n) || matcher.freeform().flags(&n.id))
                    })
                })
                .collect();
            let upstream = reach_within(
                targets.iter().copied(),
                engine.adjacency(),
                Direction::Incoming,
                within(active),
            );
            let downstream =
                reach_within(targets, engine.adjacency(), Direction::Outgoing, within(active));
            for id in active {
                let outcome = engine.store().node(id).is_some_and(|n| n.is_outcome());
                prop_assert!(
                    upstream.contains(id) || (outcome && downstream.contains(id)),
                    "{} is off every start-to-target path",
                    id
                );
            }
        }
    }

    #[test]
    fn outcomes_of_focused_programs_are_active(profile in profile_strategy()) {
        let engine = engine();
        let (result, stats) = engine.resolve_detailed(&profile, &[]);
        prop_assume!(!result.show_advisor && !stats.used_reachable_as_target);

        let matcher = engine.matcher(&profile);
        for id in &result.active_node_ids {
            let Some(node) = engine.store().node(id) else { continue };
            if !(node.is_program() && (matcher.is_target(node) || matcher.freeform().flags(id))) {
                continue;
            }
            for next in engine.adjacency().successors(id) {
                if engine.store().node(next).is_some_and(|n| n.is_outcome()) {
                    prop_assert!(result.is_node_active(next), "{} -> {}", id, next);
                }
            }
        }
    }

    #[test]
    fn reach_matches_fixpoint_closure(
        edges in prop::collection::vec((0..12usize, 0..12usize), 0..40),
        start in 0..12usize,
    ) {
        let edges: Vec<PathwayEdge> = edges
            .iter()
            .enumerate()
            .map(|(i, (s, t))| PathwayEdge::new(format!("e{i}"), format!("n{s}"), format!("n{t}")))
            .collect();
        let adjacency = AdjacencyIndex::build(&edges);
        let reached = reach([format!("n{start}")], &adjacency, Direction::Outgoing);

        let mut closure: FxHashSet<String> = FxHashSet::default();
        closure.insert(format!("n{start}"));
        loop {
            let before = closure.len();
            for edge in &edges {
                if closure.contains(&edge.source) {
                    closure.insert(edge.target.clone());
                }
            }
            if closure.len() == before {
                break;
            }
        }
        prop_assert_eq!(reached, closure);
    }
}
