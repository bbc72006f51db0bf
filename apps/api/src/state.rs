use std::sync::Arc;

use crate::generation::backend::OpenRouterBackend;
use crate::generation::service::{AssignmentContentService, SyllabusContentService};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub syllabi: Arc<SyllabusContentService>,
    pub assignments: Arc<AssignmentContentService>,
    /// Concrete provider handle, kept alongside the services for the model
    /// catalog endpoint.
    pub provider: Arc<OpenRouterBackend>,
}
