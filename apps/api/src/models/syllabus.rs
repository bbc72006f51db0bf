//! Syllabus domain records. Field names follow the provider's camelCase JSON
//! so generated content deserializes without a mapping layer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Course format a syllabus is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyllabusType {
    Undergraduate,
    Graduate,
    HighSchool,
    MiddleSchool,
    Online,
    Blended,
    Professional,
    ShortCourse,
    Seminar,
    Workshop,
    Certification,
}

impl SyllabusType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SyllabusType::Undergraduate => "undergraduate",
            SyllabusType::Graduate => "graduate",
            SyllabusType::HighSchool => "high_school",
            SyllabusType::MiddleSchool => "middle_school",
            SyllabusType::Online => "online",
            SyllabusType::Blended => "blended",
            SyllabusType::Professional => "professional",
            SyllabusType::ShortCourse => "short_course",
            SyllabusType::Seminar => "seminar",
            SyllabusType::Workshop => "workshop",
            SyllabusType::Certification => "certification",
        }
    }
}

impl std::fmt::Display for SyllabusType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A textbook or other material entry in a generated syllabus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequiredMaterial {
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub year: String,
    pub required: bool,
}

/// One grading category. Percentages across all categories must sum to 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradingCategory {
    pub percentage: f64,
    pub description: String,
}

/// One row of the weekly schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyEntry {
    pub week: u32,
    pub topic: String,
    pub readings: String,
    pub assignments: String,
}

/// Fully generated syllabus content as returned by the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Syllabus {
    pub course_title: String,
    pub instructor: String,
    pub term: String,
    pub course_description: String,
    /// Requested in the prompt but not schema-enforced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Requested in the prompt but not schema-enforced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade_level: Option<String>,
    pub learning_objectives: Vec<String>,
    pub required_materials: Vec<RequiredMaterial>,
    pub grading_policy: BTreeMap<String, GradingCategory>,
    pub weekly_schedule: Vec<WeeklyEntry>,
    pub policies: BTreeMap<String, String>,
}

/// Partial syllabus fields supplied by the caller to steer generation.
/// Missing fields render as empty strings in the prompt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyllabusDetails {
    #[serde(default)]
    pub course_title: Option<String>,
    #[serde(default)]
    pub syllabus_type: Option<SyllabusType>,
    #[serde(default)]
    pub course_description: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub grade_level: Option<String>,
}
