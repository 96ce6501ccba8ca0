//! Graduate spotlight selection by program topic.

use pathways_core::models::{GradSpotlight, PathwayNode};

pub const TOPIC_AI: &str = "Artificial Intelligence";
pub const TOPIC_CYBERSECURITY: &str = "Cybersecurity";
pub const TOPIC_COMPUTING: &str = "Computing";

struct TopicRule {
    topic: &'static str,
    /// Substrings of the lowercased label.
    label_terms: &'static [&'static str],
    /// Whole `-`-separated tokens of the node id.
    id_tokens: &'static [&'static str],
}

static TOPIC_RULES: &[TopicRule] = &[
    TopicRule {
        topic: TOPIC_AI,
        label_terms: &["artificial intelligence"],
        id_tokens: &["ai"],
    },
    TopicRule {
        topic: TOPIC_CYBERSECURITY,
        label_terms: &["cyber"],
        id_tokens: &["cys"],
    },
    TopicRule {
        topic: TOPIC_COMPUTING,
        label_terms: &["computer", "computing", "information technology"],
        id_tokens: &[],
    },
];

/// Spotlight topics a program belongs to, in table order.
pub fn spotlight_topics(node: &PathwayNode) -> Vec<&'static str> {
    let label = node.data.label.to_lowercase();
    TOPIC_RULES
        .iter()
        .filter(|rule| {
            rule.label_terms.iter().any(|t| label.contains(t))
                || node
                    .id
                    .split('-')
                    .any(|token| rule.id_tokens.contains(&token))
        })
        .map(|rule| rule.topic)
        .collect()
}

/// Spotlights sharing a topic with `program`; all of them when no program is
/// selected.
pub fn recent_grads<'g>(
    grads: &'g [GradSpotlight],
    program: Option<&PathwayNode>,
) -> Vec<&'g GradSpotlight> {
    let Some(program) = program else {
        return grads.iter().collect();
    };
    let topics = spotlight_topics(program);
    grads
        .iter()
        .filter(|grad| {
            grad.tags
                .iter()
                .any(|tag| topics.iter().any(|topic| tag.as_str() == *topic))
        })
        .collect()
}
