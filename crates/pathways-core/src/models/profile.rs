//! Triage answers: a partially filled learner profile.
//!
//! Every field is optional and an unset field imposes no constraint. The
//! engine only ever reads a profile; the triage UI owns and mutates it.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::errors::ProfileError;

/// Normalize a triage option for comparison: trim, lowercase, collapse spaces.
fn normalize(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Where the learner begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StartingPoint {
    HighSchool,
    CurrentStudent,
    Transfer,
    WorkingProfessional,
}

impl StartingPoint {
    pub const ALL: [StartingPoint; 4] = [
        Self::HighSchool,
        Self::CurrentStudent,
        Self::Transfer,
        Self::WorkingProfessional,
    ];

    /// Display string offered by the triage form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HighSchool => "High school or first-year",
            Self::CurrentStudent => "Current USF student",
            Self::Transfer => "Transfer student",
            Self::WorkingProfessional => "Working professional / career switcher",
        }
    }

    fn short_name(&self) -> &'static str {
        match self {
            Self::HighSchool => "high_school",
            Self::CurrentStudent => "current_student",
            Self::Transfer => "transfer",
            Self::WorkingProfessional => "working_professional",
        }
    }

    /// Parse a display string or short name, ignoring case and spacing.
    pub fn from_str_name(raw: &str) -> Option<Self> {
        let wanted = normalize(raw);
        Self::ALL
            .into_iter()
            .find(|sp| normalize(sp.as_str()) == wanted || sp.short_name() == wanted)
    }
}

impl TryFrom<String> for StartingPoint {
    type Error = ProfileError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::from_str_name(&raw).ok_or(ProfileError::UnknownOption {
            field: "starting point",
            value: raw,
        })
    }
}

impl From<StartingPoint> for String {
    fn from(sp: StartingPoint) -> Self {
        sp.as_str().to_string()
    }
}

impl std::fmt::Display for StartingPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requested credential level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Preference {
    Bachelor,
    Master,
    Doctorate,
    Minor,
    Certificate,
    Microcredential,
}

impl Preference {
    pub const ALL: [Preference; 6] = [
        Self::Bachelor,
        Self::Master,
        Self::Doctorate,
        Self::Minor,
        Self::Certificate,
        Self::Microcredential,
    ];

    /// Token offered by the triage form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bachelor => "BS",
            Self::Master => "MS",
            Self::Doctorate => "PhD",
            Self::Minor => "Minor",
            Self::Certificate => "Certificate",
            Self::Microcredential => "Microcredential",
        }
    }

    pub fn from_str_name(raw: &str) -> Option<Self> {
        let wanted = normalize(raw);
        Self::ALL
            .into_iter()
            .find(|p| normalize(p.as_str()) == wanted)
    }
}

impl TryFrom<String> for Preference {
    type Error = ProfileError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::from_str_name(&raw).ok_or(ProfileError::UnknownOption {
            field: "preference",
            value: raw,
        })
    }
}

impl From<Preference> for String {
    fn from(p: Preference) -> Self {
        p.as_str().to_string()
    }
}

impl std::fmt::Display for Preference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Individually answerable triage questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    StartingPoint,
    Interest,
    Foundation,
    CodingExperience,
    Preference,
    CareerGoal,
    Aspiration,
}

impl ProfileField {
    /// Questions the triage form asks before revealing matches.
    pub const DEFAULT_REQUIRED: [ProfileField; 5] = [
        Self::StartingPoint,
        Self::Interest,
        Self::Foundation,
        Self::Preference,
        Self::CareerGoal,
    ];

    pub fn is_answered(&self, profile: &Profile) -> bool {
        match self {
            Self::StartingPoint => profile.starting_point.is_some(),
            Self::Interest => !profile.visions.is_empty(),
            Self::Foundation => profile.math_level.is_some(),
            Self::CodingExperience => profile.coding_experience.is_some(),
            Self::Preference => profile.preference.is_some(),
            Self::CareerGoal => profile.career_goal.is_some(),
            Self::Aspiration => profile.aspiration_text().is_some(),
        }
    }
}

/// The learner's triage answers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    pub starting_point: Option<StartingPoint>,
    /// Declared math readiness ("Pre-Calculus / Trig").
    #[serde(alias = "foundation")]
    pub math_level: Option<String>,
    /// Declared coding readiness ("New to coding").
    pub coding_experience: Option<String>,
    /// Selected vision (interest) tags.
    pub visions: BTreeSet<String>,
    pub preference: Option<Preference>,
    pub career_goal: Option<String>,
    /// Free-text "what do you want to do?" answer.
    pub aspiration: Option<String>,
}

impl Profile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_starting_point(mut self, sp: StartingPoint) -> Self {
        self.starting_point = Some(sp);
        self
    }

    pub fn with_math_level(mut self, level: impl Into<String>) -> Self {
        self.math_level = Some(level.into());
        self
    }

    pub fn with_coding_experience(mut self, level: impl Into<String>) -> Self {
        self.coding_experience = Some(level.into());
        self
    }

    pub fn with_vision(mut self, vision: impl Into<String>) -> Self {
        self.visions.insert(vision.into());
        self
    }

    pub fn with_preference(mut self, preference: Preference) -> Self {
        self.preference = Some(preference);
        self
    }

    pub fn with_career_goal(mut self, goal: impl Into<String>) -> Self {
        self.career_goal = Some(goal.into());
        self
    }

    pub fn with_aspiration(mut self, text: impl Into<String>) -> Self {
        self.aspiration = Some(text.into());
        self
    }

    /// Answer the starting-point question. Later answers depend on it, so they
    /// are cleared; the free-text aspiration is kept.
    pub fn select_starting_point(&mut self, sp: StartingPoint) {
        self.starting_point = Some(sp);
        self.math_level = None;
        self.coding_experience = None;
        self.visions.clear();
        self.preference = None;
        self.career_goal = None;
    }

    /// Aspiration text, if it has any non-whitespace content.
    pub fn aspiration_text(&self) -> Option<&str> {
        self.aspiration
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }

    /// Whether any answer at all has been given.
    pub fn has_signal(&self) -> bool {
        self.starting_point.is_some()
            || self.math_level.is_some()
            || self.coding_experience.is_some()
            || !self.visions.is_empty()
            || self.preference.is_some()
            || self.career_goal.is_some()
            || self.aspiration_text().is_some()
    }

    /// Whether every `required` question is answered.
    pub fn is_complete(&self, required: &[ProfileField]) -> bool {
        required.iter().all(|field| field.is_answered(self))
    }
}
