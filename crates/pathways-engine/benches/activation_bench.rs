use criterion::{criterion_group, criterion_main, Criterion};

use pathways_core::config::PathwaysConfig;
use pathways_core::models::{
    NodeData, NodeType, PathwayDataset, PathwayEdge, PathwayNode, Preference, Profile,
    ProgramKind, StartingPoint,
};
use pathways_engine::PathwayEngine;

const VISIONS: [&str; 4] = ["build-software", "protect-systems", "computers-learn", "data-patterns"];

/// Layered graph: 4 entries, 3 program tiers of 100, 50 outcomes, with each
/// node feeding 5 nodes of the next layer (~1.6K edges).
fn build_layered_graph() -> PathwayDataset {
    let mut nodes = Vec::new();
    let mut edges = Vec::new();

    for (i, sp) in StartingPoint::ALL.into_iter().enumerate() {
        nodes.push(PathwayNode::new(
            format!("entry-{i}"),
            NodeType::Entry,
            NodeData {
                starting_points: vec![sp],
                ..Default::default()
            },
        ));
    }

    let tiers = [
        ProgramKind::Undergraduate,
        ProgramKind::Graduate,
        ProgramKind::GradCertificate,
    ];
    for (t, kind) in tiers.into_iter().enumerate() {
        for i in 0..100 {
            nodes.push(PathwayNode::new(
                format!("p{t}-{i}"),
                NodeType::Degree,
                NodeData {
                    label: format!("Program {t}-{i}"),
                    kind: Some(kind),
                    interests: vec![VISIONS[i % VISIONS.len()].to_string()],
                    goals: vec![if i % 2 == 0 { "industry" } else { "research" }.to_string()],
                    ..Default::default()
                },
            ));
        }
    }
    for i in 0..50 {
        nodes.push(PathwayNode::new(
            format!("career-{i}"),
            NodeType::Career,
            NodeData::default(),
        ));
    }

    for e in 0..4 {
        for i in (e * 25)..(e * 25 + 25) {
            edges.push(PathwayEdge::between(format!("entry-{e}"), format!("p0-{i}")));
        }
    }
    for t in 0..2 {
        for i in 0..100 {
            for j in 0..5 {
                let target = (i * 7 + j * 13) % 100;
                edges.push(PathwayEdge::between(
                    format!("p{t}-{i}"),
                    format!("p{}-{target}", t + 1),
                ));
            }
        }
    }
    for i in 0..100 {
        for j in 0..5 {
            edges.push(PathwayEdge::between(
                format!("p2-{i}"),
                format!("career-{}", (i + j * 11) % 50),
            ));
        }
    }

    PathwayDataset {
        nodes,
        edges,
        grads: Vec::new(),
    }
}

fn engine() -> PathwayEngine {
    PathwayEngine::from_dataset(build_layered_graph(), &PathwaysConfig::default())
        .expect("synthetic graph is valid")
}

fn bench_resolve_student(c: &mut Criterion) {
    let engine = engine();
    let profile = Profile::new()
        .with_starting_point(StartingPoint::CurrentStudent)
        .with_vision("computers-learn")
        .with_career_goal("research");

    c.bench_function("resolve_current_student_1600_edges", |b| {
        b.iter(|| engine.resolve(&profile));
    });
}

fn bench_resolve_freeform(c: &mut Criterion) {
    let engine = engine();
    let profile = Profile::new()
        .with_preference(Preference::Master)
        .with_aspiration("I like fixing computers and machine learning");

    c.bench_function("resolve_freeform_no_start_1600_edges", |b| {
        b.iter(|| engine.resolve(&profile));
    });
}

fn bench_hover(c: &mut Criterion) {
    let engine = engine();

    c.bench_function("hover_mid_tier_1600_edges", |b| {
        b.iter(|| engine.hover("p1-42"));
    });
}

criterion_group!(
    benches,
    bench_resolve_student,
    bench_resolve_freeform,
    bench_hover
);
criterion_main!(benches);
