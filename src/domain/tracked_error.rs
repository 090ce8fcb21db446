use uuid::Uuid;

use super::ProjectId;

/// Boundary view of the error entity owned by the ingestion side. The
/// membership core only needs enough of it to drive the project counter
/// contract: which project it belongs to and whether it has been resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedError {
    pub id: Uuid,
    pub project_id: ProjectId,
    pub resolved: bool,
}

impl TrackedError {
    pub fn new(project_id: ProjectId) -> Self {
        Self {
            id: Uuid::new_v4(),
            project_id,
            resolved: false,
        }
    }
}
