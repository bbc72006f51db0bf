//! Prompt construction for syllabus and assignment generation.
//!
//! Pure string assembly — this stage cannot fail. Missing detail fields
//! render as empty strings so the model never sees placeholder junk.

use crate::models::assignment::AssignmentDetails;
use crate::models::syllabus::SyllabusDetails;

/// System directive for syllabus generation. Embeds the exact JSON shape the
/// validator expects so the model has no room to improvise field names.
pub const SYLLABUS_SYSTEM: &str = r#"You are an AI assistant that generates educational syllabi in JSON format. The output MUST be a valid JSON object matching this structure:
{
  "courseTitle": "string",
  "instructor": "string",
  "term": "string",
  "courseDescription": "string",
  "subject": "string",
  "gradeLevel": "string",
  "learningObjectives": ["string"],
  "requiredMaterials": [
    {
      "title": "string",
      "author": "string",
      "publisher": "string",
      "year": "string",
      "required": "boolean"
    }
  ],
  "gradingPolicy": {
    "<category>": {
      "percentage": "number",
      "description": "string"
    }
  },
  "weeklySchedule": [
    {
      "week": "number",
      "topic": "string",
      "readings": "string",
      "assignments": "string"
    }
  ],
  "policies": {
    "<policy>": "string"
  }
}
All fields are required, and the output must conform to the schema. For example, learningObjectives must be an array of strings, requiredMaterials must be an array of objects with the specified fields, gradingPolicy must be an object with percentages summing to 100%, weeklySchedule must be an array of objects, and policies must be an object with string values. Do NOT include any text outside the JSON object. Do NOT use markdown code fences."#;

/// System directive for assignment generation. The string-sections rule keeps
/// rubric/answer-key style fields flat so deserialization never hits nested
/// objects where text is expected.
pub const ASSIGNMENT_SYSTEM: &str = "You are an AI assistant that generates assignment content \
    in JSON format. The output MUST be a valid JSON object with a title (string), a description \
    (string), a learningObjectives array of strings, and any of the following sections that fit \
    the assignment type: instructions, rubric, questions, answerKey, checklist, \
    participationCriteria, peerEvaluation. \
    Ensure fields like instructions, rubric, questions, answerKey, checklist, \
    participationCriteria, and peerEvaluation are strings (e.g., JSON strings or formatted \
    text), not nested objects. \
    Do NOT include any text outside the JSON object. Do NOT use markdown code fences.";

/// Builds the user message for syllabus generation.
pub fn build_syllabus_prompt(
    prompt: &str,
    details: &SyllabusDetails,
    file_content: Option<&str>,
) -> String {
    let mut message = format!(
        "Syllabus: {}\nType: {}\nDescription: {}\nSubject: {}\nGrade Level: {}\nPrompt: {}",
        details.course_title.as_deref().unwrap_or(""),
        details.syllabus_type.map(|t| t.as_str()).unwrap_or(""),
        details.course_description.as_deref().unwrap_or(""),
        details.subject.as_deref().unwrap_or(""),
        details.grade_level.as_deref().unwrap_or(""),
        prompt,
    );
    append_file_content(&mut message, file_content);
    message
}

/// Builds the user message for assignment generation.
pub fn build_assignment_prompt(
    prompt: &str,
    details: &AssignmentDetails,
    file_content: Option<&str>,
) -> String {
    let mut message = format!(
        "Assignment: {}\nType: {}\nCourse: {}\nDescription: {}\nObjectives: {}\nDue Date: {}\nPrompt: {}",
        details.title.as_deref().unwrap_or(""),
        details.assignment_type.map(|t| t.as_str()).unwrap_or(""),
        details.course_id.as_deref().unwrap_or(""),
        details.description.as_deref().unwrap_or(""),
        details.learning_objectives.as_deref().unwrap_or(""),
        details.due_date.as_deref().unwrap_or(""),
        prompt,
    );
    append_file_content(&mut message, file_content);
    message
}

fn append_file_content(message: &mut String, file_content: Option<&str>) {
    if let Some(text) = file_content {
        message.push_str("\n\nAdditional context:\n");
        message.push_str(text);
    }
}
