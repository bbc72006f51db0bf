//! Assignment domain records.
//!
//! Type-specific sections (rubric, answer key, peer evaluation, ...) are plain
//! text by contract: the system prompt instructs the model to emit them as
//! strings, never nested objects, so deserialization here stays flat.

use serde::{Deserialize, Serialize};

/// Kind of assignment being generated. Drives which optional sections the
/// model is expected to fill in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentType {
    Homework,
    Quiz,
    Exam,
    Essay,
    Project,
    Lab,
    Discussion,
    Presentation,
    PeerReview,
}

impl AssignmentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentType::Homework => "homework",
            AssignmentType::Quiz => "quiz",
            AssignmentType::Exam => "exam",
            AssignmentType::Essay => "essay",
            AssignmentType::Project => "project",
            AssignmentType::Lab => "lab",
            AssignmentType::Discussion => "discussion",
            AssignmentType::Presentation => "presentation",
            AssignmentType::PeerReview => "peer_review",
        }
    }
}

impl std::fmt::Display for AssignmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully generated assignment content as returned by the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub title: String,
    pub description: String,
    pub learning_objectives: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rubric: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub questions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checklist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participation_criteria: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peer_evaluation: Option<String>,
}

/// Partial assignment fields supplied by the caller to steer generation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentDetails {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, rename = "type")]
    pub assignment_type: Option<AssignmentType>,
    #[serde(default)]
    pub course_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub learning_objectives: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
}
