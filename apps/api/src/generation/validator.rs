//! Domain schema validation for generated content.
//!
//! Pure functions returning every violation found, not just the first. The
//! service layer turns a non-empty list into a `SchemaValidation` error.
//!
//! The grading-policy sum check is exact — 99.5 fails just like 99. This
//! mirrors the platform's original semantics and is deliberate; loosening it
//! to a tolerance band would change what counts as a complete policy.

use crate::models::assignment::Assignment;
use crate::models::syllabus::Syllabus;

/// Validates generated syllabus content. Returns all violations found.
pub fn validate_syllabus(content: &Syllabus) -> Vec<String> {
    let mut violations = Vec::new();

    require_text(&mut violations, &content.course_title, "Course title is required");
    require_text(&mut violations, &content.instructor, "Instructor is required");
    require_text(&mut violations, &content.term, "Term is required");
    require_text(
        &mut violations,
        &content.course_description,
        "Course description is required",
    );

    if content.learning_objectives.is_empty() {
        violations.push("At least one learning objective is required".to_string());
    }

    for material in &content.required_materials {
        require_text(&mut violations, &material.title, "Material title is required");
        require_text(&mut violations, &material.author, "Material author is required");
        require_text(
            &mut violations,
            &material.publisher,
            "Material publisher is required",
        );
        require_text(&mut violations, &material.year, "Material year is required");
    }

    let mut total_percentage = 0.0;
    for category in content.grading_policy.values() {
        if !(0.0..=100.0).contains(&category.percentage) {
            violations.push("Percentage must be between 0 and 100".to_string());
        }
        require_text(
            &mut violations,
            &category.description,
            "Grading description is required",
        );
        total_percentage += category.percentage;
    }
    if total_percentage != 100.0 {
        violations.push("Grading policy percentages must sum to 100%".to_string());
    }

    if content.weekly_schedule.is_empty() {
        violations.push("At least one week is required".to_string());
    }
    for entry in &content.weekly_schedule {
        if entry.week < 1 {
            violations.push("Week number must be positive".to_string());
        }
        require_text(&mut violations, &entry.topic, "Topic is required");
        require_text(&mut violations, &entry.readings, "Readings are required");
        require_text(&mut violations, &entry.assignments, "Assignments are required");
    }

    for description in content.policies.values() {
        require_text(&mut violations, description, "Policy description is required");
    }

    violations
}

/// Validates generated assignment content. Returns all violations found.
pub fn validate_assignment(content: &Assignment) -> Vec<String> {
    let mut violations = Vec::new();

    require_text(&mut violations, &content.title, "Assignment title is required");
    require_text(
        &mut violations,
        &content.description,
        "Assignment description is required",
    );

    if content.learning_objectives.is_empty() {
        violations.push("At least one learning objective is required".to_string());
    }

    let sections = [
        (&content.instructions, "Instructions must not be empty"),
        (&content.rubric, "Rubric must not be empty"),
        (&content.questions, "Questions must not be empty"),
        (&content.answer_key, "Answer key must not be empty"),
        (&content.checklist, "Checklist must not be empty"),
        (
            &content.participation_criteria,
            "Participation criteria must not be empty",
        ),
        (&content.peer_evaluation, "Peer evaluation must not be empty"),
    ];
    for (section, message) in sections {
        if let Some(text) = section {
            require_text(&mut violations, text, message);
        }
    }

    violations
}

fn require_text(violations: &mut Vec<String>, value: &str, message: &str) {
    if value.trim().is_empty() {
        violations.push(message.to_string());
    }
}
