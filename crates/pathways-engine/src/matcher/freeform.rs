//! Free-text aspiration matching.
//!
//! The learner's "what do you want to do?" answer is lowercased, reduced to
//! alphanumeric words, and checked against an ordered keyword table. Every
//! rule that fires contributes its program ids and vision ids; results are
//! unioned in table order.

use pathways_core::types::collections::IdSet;

/// How a keyword is found in normalized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    /// Substring of the normalized text ("cyber" fires on "cybersecurity").
    Phrase(&'static str),
    /// Whole word only. Short tokens like "ai" would otherwise fire inside
    /// "repair" or "said".
    Word(&'static str),
}

impl Keyword {
    fn found_in(&self, normalized: &str) -> bool {
        match self {
            Self::Phrase(phrase) => normalized.contains(phrase),
            Self::Word(word) => normalized.contains(&format!(" {word} ")),
        }
    }
}

/// One row of the keyword table.
#[derive(Debug)]
pub struct KeywordRule {
    pub keywords: &'static [Keyword],
    pub program_ids: &'static [&'static str],
    pub vision_ids: &'static [&'static str],
}

impl KeywordRule {
    fn fires_on(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|k| k.found_in(normalized))
    }
}

use Keyword::{Phrase, Word};

pub static FREEFORM_RULES: &[KeywordRule] = &[
    KeywordRule {
        keywords: &[Phrase("game"), Phrase("video game"), Phrase("gaming")],
        program_ids: &["cs-software-architect"],
        vision_ids: &["build-software"],
    },
    KeywordRule {
        keywords: &[Phrase("bank"), Phrase("finance"), Phrase("fintech")],
        program_ids: &["bs-business-analytics", "ms-business-analytics"],
        vision_ids: &["tech-business"],
    },
    KeywordRule {
        keywords: &[
            Phrase("fix computer"),
            Phrase("fixing computer"),
            Phrase("repair"),
            Phrase("help desk"),
            Phrase("tech support"),
            Phrase("it support"),
        ],
        program_ids: &[
            "bs-information-technology",
            "ms-information-technology",
            "cloud-infrastructure",
        ],
        vision_ids: &["hardware-devices"],
    },
    KeywordRule {
        keywords: &[Phrase("hardware"), Phrase("circuit"), Phrase("device")],
        program_ids: &["bs-computer-engineering"],
        vision_ids: &["hardware-devices"],
    },
    KeywordRule {
        keywords: &[Phrase("security"), Phrase("cyber"), Phrase("hack")],
        program_ids: &["ms-cybersecurity", "bs-cybersecurity"],
        vision_ids: &["protect-systems"],
    },
    KeywordRule {
        keywords: &[
            Word("ai"),
            Phrase("artificial intelligence"),
            Phrase("machine learning"),
            Word("ml"),
        ],
        program_ids: &["bs-artificial-intelligence", "ms-artificial-intelligence"],
        vision_ids: &["computers-learn"],
    },
];

/// Program and vision ids inferred from free text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FreeformMatch {
    pub program_ids: IdSet,
    pub vision_ids: IdSet,
}

impl FreeformMatch {
    pub fn is_empty(&self) -> bool {
        self.program_ids.is_empty() && self.vision_ids.is_empty()
    }

    /// Whether the text named `node_id` directly.
    pub fn flags(&self, node_id: &str) -> bool {
        self.program_ids.contains(node_id)
    }
}

/// Lowercase, replace every non-alphanumeric run with one space, and pad with
/// a space on each side so whole-word checks can look for `" word "`.
fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push(' ');
    for ch in text.chars().flat_map(char::to_lowercase) {
        if ch.is_alphanumeric() {
            out.push(ch);
        } else if !out.ends_with(' ') {
            out.push(' ');
        }
    }
    if !out.ends_with(' ') {
        out.push(' ');
    }
    out
}

/// Match free text against [`FREEFORM_RULES`]. Blank text matches nothing.
pub fn match_freeform(text: &str) -> FreeformMatch {
    let normalized = normalize(text);
    let mut result = FreeformMatch::default();
    if normalized.trim().is_empty() {
        return result;
    }
    for rule in FREEFORM_RULES.iter().filter(|r| r.fires_on(&normalized)) {
        result
            .program_ids
            .extend(rule.program_ids.iter().map(|id| id.to_string()));
        result
            .vision_ids
            .extend(rule.vision_ids.iter().map(|id| id.to_string()));
    }
    result
}
