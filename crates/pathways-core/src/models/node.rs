//! Pathway graph nodes: entry points, programs, bridges, and career outcomes.

use serde::{Deserialize, Deserializer, Serialize};
use ::tracing::debug;

use super::profile::StartingPoint;

/// Which column of the pathway a node belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeType {
    /// Where a learner begins (high school, transfer, working professional).
    #[serde(rename = "inputNode", alias = "entry")]
    Entry,
    /// Connector program that bridges a background into a degree.
    #[serde(rename = "bridgeNode", alias = "bridge")]
    Bridge,
    /// Degree, minor, certificate, or microcredential.
    #[serde(rename = "degreeNode", alias = "degree")]
    Degree,
    /// Career outcome.
    #[serde(rename = "careerNode", alias = "career")]
    Career,
}

impl NodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Entry => "inputNode",
            Self::Bridge => "bridgeNode",
            Self::Degree => "degreeNode",
            Self::Career => "careerNode",
        }
    }

    /// Programs are the nodes a learner enrolls in.
    pub fn is_program(&self) -> bool {
        matches!(self, Self::Bridge | Self::Degree)
    }
}

/// Category kind of a program node.
///
/// Datasets spell kinds as free strings ("undergraduate", "grad certificate");
/// parsing is containment-based so "undergraduate minor" reads as a minor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProgramKind {
    Undergraduate,
    Graduate,
    GradCertificate,
    Microcredential,
    Minor,
    Interdisciplinary,
    /// Bridging pathway into graduate study.
    Pathway,
    Other,
}

impl ProgramKind {
    /// Containment order matters: "grad certificate" must win over "graduate",
    /// and "undergraduate" over "graduate".
    const PARSE_ORDER: [(&'static str, ProgramKind); 7] = [
        ("minor", Self::Minor),
        ("microcredential", Self::Microcredential),
        ("grad certificate", Self::GradCertificate),
        ("undergraduate", Self::Undergraduate),
        ("graduate", Self::Graduate),
        ("interdisciplinary", Self::Interdisciplinary),
        ("pathway", Self::Pathway),
    ];

    pub fn parse(raw: &str) -> Self {
        let lowered = raw.trim().to_lowercase();
        Self::PARSE_ORDER
            .iter()
            .find(|(needle, _)| lowered.contains(needle))
            .map(|(_, kind)| *kind)
            .unwrap_or(Self::Other)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Undergraduate => "undergraduate",
            Self::Graduate => "graduate",
            Self::GradCertificate => "grad certificate",
            Self::Microcredential => "microcredential",
            Self::Minor => "minor",
            Self::Interdisciplinary => "interdisciplinary",
            Self::Pathway => "pathway",
            Self::Other => "other",
        }
    }

    /// Optional add-on credentials, drawn as dashed edges by renderers.
    pub fn is_optional_credential(&self) -> bool {
        matches!(self, Self::Minor | Self::Microcredential | Self::GradCertificate)
    }
}

impl From<String> for ProgramKind {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<ProgramKind> for String {
    fn from(kind: ProgramKind) -> Self {
        kind.as_str().to_string()
    }
}

impl std::fmt::Display for ProgramKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Explicit degree level. Replaces reading "PhD" out of a display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DegreeLevel {
    #[serde(alias = "BS", alias = "bs")]
    Bachelor,
    #[serde(alias = "MS", alias = "ms")]
    Master,
    #[serde(alias = "PhD", alias = "phd")]
    Doctoral,
}

impl DegreeLevel {
    /// Level implied by a kind when a node does not declare one.
    pub fn implied_by(kind: ProgramKind) -> Option<Self> {
        match kind {
            ProgramKind::Undergraduate | ProgramKind::Interdisciplinary => Some(Self::Bachelor),
            ProgramKind::Graduate | ProgramKind::Pathway => Some(Self::Master),
            _ => None,
        }
    }
}

/// Filterable category shown in the renderer's legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Career,
    Minor,
    Microcredential,
    GradCertificate,
    Undergraduate,
    Graduate,
    Interdisciplinary,
    Other,
}

impl Category {
    pub fn of(node: &PathwayNode) -> Self {
        if node.node_type == NodeType::Career {
            return Self::Career;
        }
        match node.data.kind {
            Some(ProgramKind::Minor) => Self::Minor,
            Some(ProgramKind::Microcredential) => Self::Microcredential,
            Some(ProgramKind::GradCertificate) => Self::GradCertificate,
            Some(ProgramKind::Undergraduate) => Self::Undergraduate,
            // Bridging pathways sit with graduate study.
            Some(ProgramKind::Graduate) | Some(ProgramKind::Pathway) => Self::Graduate,
            Some(ProgramKind::Interdisciplinary) => Self::Interdisciplinary,
            Some(ProgramKind::Other) | None => Self::Other,
        }
    }
}

/// Step of the compact list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Inputs,
    Programs,
    Credentials,
    Outcomes,
}

impl Stage {
    pub const ALL: [Stage; 4] = [Self::Inputs, Self::Programs, Self::Credentials, Self::Outcomes];

    pub fn of(node: &PathwayNode) -> Self {
        match node.node_type {
            NodeType::Career => Self::Outcomes,
            NodeType::Entry => Self::Inputs,
            NodeType::Bridge | NodeType::Degree => match node.data.kind {
                Some(ProgramKind::Microcredential) | Some(ProgramKind::GradCertificate) => {
                    Self::Credentials
                }
                _ => Self::Programs,
            },
        }
    }
}

/// A career outcome record attached to a program.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "JobRepr", rename_all = "camelCase")]
pub struct Job {
    pub title: String,
    pub source: Option<String>,
    pub description: Option<String>,
    pub salary: Option<String>,
    pub source_url: Option<String>,
    /// Career goals this job serves. Empty means it serves every goal.
    pub goals: Vec<String>,
}

impl Job {
    /// Whether this job fits the selected career goal.
    pub fn serves_goal(&self, goal: Option<&str>) -> bool {
        match goal {
            None => true,
            Some(_) if self.goals.is_empty() => true,
            Some(goal) => self.goals.iter().any(|g| g == goal),
        }
    }
}

/// Jobs appear either as a bare title or as a full record.
#[derive(Deserialize)]
#[serde(untagged)]
enum JobRepr {
    Title(String),
    Full {
        title: String,
        #[serde(default)]
        source: Option<String>,
        #[serde(default)]
        description: Option<String>,
        #[serde(default, alias = "salaryRange")]
        salary: Option<String>,
        #[serde(default, rename = "sourceUrl", alias = "source_url")]
        source_url: Option<String>,
        #[serde(default)]
        goals: Vec<String>,
    },
}

impl From<JobRepr> for Job {
    fn from(repr: JobRepr) -> Self {
        match repr {
            JobRepr::Title(title) => Job {
                title,
                ..Default::default()
            },
            JobRepr::Full {
                title,
                source,
                description,
                salary,
                source_url,
                goals,
            } => Job {
                title,
                source,
                description,
                salary,
                source_url,
                goals,
            },
        }
    }
}

/// Attribute bag of a node. Every set may be empty; an empty set never filters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NodeData {
    pub label: String,
    pub kind: Option<ProgramKind>,
    pub level: Option<DegreeLevel>,
    pub tags: Vec<String>,
    pub skills: Vec<String>,
    /// Readiness levels this program accepts.
    pub foundations: Vec<String>,
    /// Vision tags this node serves.
    #[serde(alias = "visions")]
    pub interests: Vec<String>,
    /// Starting points that begin at this node. Unrecognized entries are
    /// dropped on load.
    #[serde(
        rename = "startingPoint",
        alias = "startingPoints",
        deserialize_with = "known_starting_points"
    )]
    pub starting_points: Vec<StartingPoint>,
    /// Career goals this node serves.
    pub goals: Vec<String>,
    #[serde(alias = "jobsDetailed")]
    pub jobs: Vec<Job>,
    pub url: Option<String>,
    pub story_id: Option<String>,
    pub is_new: bool,
    pub available_to_all: bool,
}

fn known_starting_points<'de, D>(deserializer: D) -> Result<Vec<StartingPoint>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<String>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|value| {
            let parsed = StartingPoint::from_str_name(&value);
            if parsed.is_none() {
                debug!(value = %value, "skipping unknown starting point");
            }
            parsed
        })
        .collect())
}

impl NodeData {
    /// Declared level, or the one implied by the kind.
    pub fn effective_level(&self) -> Option<DegreeLevel> {
        self.level.or_else(|| self.kind.and_then(DegreeLevel::implied_by))
    }
}

/// A vertex in the pathway graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathwayNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    #[serde(default)]
    pub data: NodeData,
}

impl PathwayNode {
    pub fn new(id: impl Into<String>, node_type: NodeType, data: NodeData) -> Self {
        Self {
            id: id.into(),
            node_type,
            data,
        }
    }

    pub fn label(&self) -> &str {
        &self.data.label
    }

    pub fn is_program(&self) -> bool {
        self.node_type.is_program()
    }

    pub fn is_outcome(&self) -> bool {
        self.node_type == NodeType::Career
    }

    pub fn category(&self) -> Category {
        Category::of(self)
    }

    pub fn stage(&self) -> Stage {
        Stage::of(self)
    }
}
