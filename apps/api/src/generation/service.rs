//! Content services — orchestrate the full pipeline for each content kind.
//!
//! Flow: build prompt → fallback invocation (parse included) → schema
//! validation → typed content. Validation failures are terminal; the invoker
//! never retries across models for them.

use std::sync::Arc;

use tracing::info;

use crate::generation::fallback::FallbackInvoker;
use crate::generation::prompts::{
    build_assignment_prompt, build_syllabus_prompt, ASSIGNMENT_SYSTEM, SYLLABUS_SYSTEM,
};
use crate::generation::validator::{validate_assignment, validate_syllabus};
use crate::generation::GenerationError;
use crate::models::assignment::{Assignment, AssignmentDetails};
use crate::models::syllabus::{Syllabus, SyllabusDetails};

pub struct SyllabusContentService {
    invoker: Arc<FallbackInvoker>,
}

impl SyllabusContentService {
    pub fn new(invoker: Arc<FallbackInvoker>) -> Self {
        Self { invoker }
    }

    pub async fn generate(
        &self,
        prompt: &str,
        details: &SyllabusDetails,
        file_content: Option<&str>,
    ) -> Result<Syllabus, GenerationError> {
        let user = build_syllabus_prompt(prompt, details, file_content);
        info!(
            "Generating syllabus content for '{}'",
            details.course_title.as_deref().unwrap_or("")
        );

        let content: Syllabus = self.invoker.generate(SYLLABUS_SYSTEM, &user).await?;

        let violations = validate_syllabus(&content);
        if !violations.is_empty() {
            return Err(GenerationError::SchemaValidation { violations });
        }

        info!(
            "Syllabus content generated: {} objectives, {} scheduled weeks",
            content.learning_objectives.len(),
            content.weekly_schedule.len()
        );
        Ok(content)
    }
}

pub struct AssignmentContentService {
    invoker: Arc<FallbackInvoker>,
}

impl AssignmentContentService {
    pub fn new(invoker: Arc<FallbackInvoker>) -> Self {
        Self { invoker }
    }

    pub async fn generate(
        &self,
        prompt: &str,
        details: &AssignmentDetails,
        file_content: Option<&str>,
    ) -> Result<Assignment, GenerationError> {
        let user = build_assignment_prompt(prompt, details, file_content);
        info!(
            "Generating assignment content for '{}'",
            details.title.as_deref().unwrap_or("")
        );

        let content: Assignment = self.invoker.generate(ASSIGNMENT_SYSTEM, &user).await?;

        let violations = validate_assignment(&content);
        if !violations.is_empty() {
            return Err(GenerationError::SchemaValidation { violations });
        }

        Ok(content)
    }
}
