use color_eyre::eyre::Report;
use thiserror::Error;

/// Errors surfaced by the project/membership operations.
///
/// Authorization denial is not an exception inside the domain model: it is
/// `Project::is_member` returning false, or a project being excluded from
/// `access_by`. Only the service layer translates that into
/// `NotAuthorized`, so a non-member gets a not-authorized outcome rather
/// than a not-found one.
#[derive(Debug, Error)]
pub enum ProjectServiceError {
    #[error("Not authorized")]
    NotAuthorized,
    #[error("Project not found: {0}")]
    ProjectNotFound(uuid::Uuid),
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
    #[error("Validation error")]
    ValidationError(#[from] ValidationError),
}

#[derive(Debug, Error)]
#[error("Validation error: {0}")]
pub struct ValidationError(String);

impl ValidationError {
    pub fn new(message: String) -> Self {
        Self(message)
    }

    pub fn as_ref(&self) -> &String {
        &self.0
    }
}
