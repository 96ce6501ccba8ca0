//! Credential-level preference → node predicate table.

use pathways_core::models::{DegreeLevel, NodeData, PathwayNode, Preference, ProgramKind};

/// Predicate deciding whether a program's attributes satisfy a preference.
pub type PreferencePredicate = fn(&NodeData) -> bool;

fn bachelor(data: &NodeData) -> bool {
    matches!(
        data.kind,
        Some(ProgramKind::Undergraduate) | Some(ProgramKind::Interdisciplinary)
    )
}

fn master(data: &NodeData) -> bool {
    match data.kind {
        Some(ProgramKind::Graduate) => data.effective_level() != Some(DegreeLevel::Doctoral),
        Some(ProgramKind::Pathway) => true,
        _ => false,
    }
}

fn doctorate(data: &NodeData) -> bool {
    data.kind == Some(ProgramKind::Graduate)
        && data.effective_level() == Some(DegreeLevel::Doctoral)
}

fn minor(data: &NodeData) -> bool {
    data.kind == Some(ProgramKind::Minor)
}

fn certificate(data: &NodeData) -> bool {
    data.kind == Some(ProgramKind::GradCertificate)
}

fn microcredential(data: &NodeData) -> bool {
    data.kind == Some(ProgramKind::Microcredential)
}

/// One entry per preference, in `Preference::ALL` order.
pub static PREFERENCE_RULES: [(Preference, PreferencePredicate); 6] = [
    (Preference::Bachelor, bachelor),
    (Preference::Master, master),
    (Preference::Doctorate, doctorate),
    (Preference::Minor, minor),
    (Preference::Certificate, certificate),
    (Preference::Microcredential, microcredential),
];

/// Whether `node` satisfies `preference`. Only programs can.
pub fn admits(preference: Preference, node: &PathwayNode) -> bool {
    if !node.is_program() {
        return false;
    }
    PREFERENCE_RULES
        .iter()
        .find(|(p, _)| *p == preference)
        .is_some_and(|(_, predicate)| predicate(&node.data))
}

#[cfg(test)]
mod tests {
    use pathways_core::models::NodeType;

    use super::*;

    fn node(node_type: NodeType, kind: ProgramKind, level: Option<DegreeLevel>) -> PathwayNode {
        PathwayNode::new(
            "n",
            node_type,
            NodeData {
                label: "Program".into(),
                kind: Some(kind),
                level,
                ..Default::default()
            },
        )
    }

    #[test]
    fn table_covers_every_preference() {
        for pref in Preference::ALL {
            assert!(PREFERENCE_RULES.iter().any(|(p, _)| *p == pref), "{pref} missing");
        }
    }

    #[test]
    fn doctorate_uses_level_not_label() {
        let mut phd = node(NodeType::Degree, ProgramKind::Graduate, Some(DegreeLevel::Doctoral));
        phd.data.label = "Doctor of Philosophy in Computing".into();
        assert!(admits(Preference::Doctorate, &phd));
        assert!(!admits(Preference::Master, &phd));

        let mut ms = node(NodeType::Degree, ProgramKind::Graduate, None);
        ms.data.label = "MS track toward PhD".into();
        assert!(!admits(Preference::Doctorate, &ms));
        assert!(admits(Preference::Master, &ms));
    }

    #[test]
    fn master_accepts_bridging_pathways() {
        let bridge = node(NodeType::Bridge, ProgramKind::Pathway, None);
        assert!(admits(Preference::Master, &bridge));
        assert!(!admits(Preference::Bachelor, &bridge));
    }

    #[test]
    fn bachelor_accepts_interdisciplinary() {
        let inter = node(NodeType::Degree, ProgramKind::Interdisciplinary, None);
        assert!(admits(Preference::Bachelor, &inter));
        assert!(!admits(Preference::Minor, &inter));
    }

    #[test]
    fn non_programs_never_match() {
        let career = node(NodeType::Career, ProgramKind::Graduate, None);
        for pref in Preference::ALL {
            assert!(!admits(pref, &career));
        }
    }
}
