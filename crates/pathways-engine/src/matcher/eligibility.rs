//! Starting-point eligibility: which program kinds each starting point may reach.

use pathways_core::models::{DegreeLevel, PathwayNode, ProgramKind, StartingPoint};
use rustc_hash::{FxHashMap, FxHashSet};

/// Permitted program kinds for one starting point.
#[derive(Debug)]
pub struct EligibilityRule {
    pub starting_point: StartingPoint,
    pub allowed_kinds: &'static [ProgramKind],
    /// Doctoral pathway (bridge) nodes are off limits.
    pub exclude_doctoral_pathways: bool,
}

const UNDERGRAD_KINDS: &[ProgramKind] = &[
    ProgramKind::Undergraduate,
    ProgramKind::Interdisciplinary,
    ProgramKind::Minor,
    ProgramKind::Microcredential,
];

const ALL_KINDS: &[ProgramKind] = &[
    ProgramKind::Undergraduate,
    ProgramKind::Interdisciplinary,
    ProgramKind::Minor,
    ProgramKind::Microcredential,
    ProgramKind::Graduate,
    ProgramKind::GradCertificate,
    ProgramKind::Pathway,
];

const PROFESSIONAL_KINDS: &[ProgramKind] = &[
    ProgramKind::Graduate,
    ProgramKind::GradCertificate,
    ProgramKind::Microcredential,
    ProgramKind::Pathway,
];

/// One rule per starting point, in `StartingPoint::ALL` order.
pub static ELIGIBILITY_RULES: [EligibilityRule; 4] = [
    EligibilityRule {
        starting_point: StartingPoint::HighSchool,
        allowed_kinds: UNDERGRAD_KINDS,
        exclude_doctoral_pathways: false,
    },
    EligibilityRule {
        starting_point: StartingPoint::CurrentStudent,
        allowed_kinds: ALL_KINDS,
        exclude_doctoral_pathways: false,
    },
    EligibilityRule {
        starting_point: StartingPoint::Transfer,
        allowed_kinds: UNDERGRAD_KINDS,
        exclude_doctoral_pathways: false,
    },
    EligibilityRule {
        starting_point: StartingPoint::WorkingProfessional,
        allowed_kinds: PROFESSIONAL_KINDS,
        exclude_doctoral_pathways: true,
    },
];

/// Eligibility rules plus per-starting-point node carve-outs.
#[derive(Debug, Clone, Default)]
pub struct EligibilityTable {
    carve_outs: FxHashMap<StartingPoint, FxHashSet<String>>,
}

impl EligibilityTable {
    /// Table whose transfer carve-out admits `transfer_bridge_ids`.
    pub fn new<I, S>(transfer_bridge_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut carve_outs = FxHashMap::default();
        carve_outs.insert(
            StartingPoint::Transfer,
            transfer_bridge_ids.into_iter().map(Into::into).collect(),
        );
        Self { carve_outs }
    }

    pub fn rule_for(starting_point: StartingPoint) -> &'static EligibilityRule {
        let rule = &ELIGIBILITY_RULES[starting_point as usize];
        debug_assert_eq!(rule.starting_point, starting_point);
        rule
    }

    /// Whether a learner starting at `starting_point` may be shown `node`.
    ///
    /// Entry points and outcomes are always eligible, as are programs without
    /// a recognized kind. No starting point means no restriction.
    pub fn permits(&self, starting_point: Option<StartingPoint>, node: &PathwayNode) -> bool {
        let Some(sp) = starting_point else {
            return true;
        };
        if !node.is_program() {
            return true;
        }
        if self
            .carve_outs
            .get(&sp)
            .is_some_and(|ids| ids.contains(&node.id))
        {
            return true;
        }
        let kind = match node.data.kind {
            None | Some(ProgramKind::Other) => return true,
            Some(kind) => kind,
        };

        let rule = Self::rule_for(sp);
        if !rule.allowed_kinds.contains(&kind) {
            return false;
        }
        !(rule.exclude_doctoral_pathways
            && kind == ProgramKind::Pathway
            && node.data.effective_level() == Some(DegreeLevel::Doctoral))
    }
}
