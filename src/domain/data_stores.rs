use super::{Project, ProjectId, User, UserId, ValidationError};
use color_eyre::eyre::Report;
use thiserror::Error;

/// Lookup capability for user accounts. `confirm_user` is the external
/// confirmation event; the membership core itself never mutates users.
#[async_trait::async_trait]
pub trait UserStore {
    async fn add_user(&mut self, user: User) -> Result<(), UserStoreError>;
    async fn get_user(&self, id: &UserId) -> Result<User, UserStoreError>;
    async fn confirm_user(
        &mut self,
        id: &UserId,
    ) -> Result<(), UserStoreError>;
}

#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("User not found")]
    UserNotFound,
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UserAlreadyExists, Self::UserAlreadyExists)
                | (Self::UserNotFound, Self::UserNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Document persistence for projects and their embedded members. A member
/// has no query surface of its own; everything goes through the owning
/// project document.
///
/// The counter methods are atomic increments against the stored integer
/// fields, not read-modify-write of a deserialized copy, so concurrent
/// error events on one project cannot lose updates. Both validate-on-write
/// methods (`add_project`, `save_project`) reject documents that fail
/// `Project::validate`.
#[async_trait::async_trait]
pub trait ProjectStore {
    async fn add_project(
        &mut self,
        project: Project,
    ) -> Result<(), ProjectStoreError>;
    async fn get_project(
        &self,
        id: &ProjectId,
    ) -> Result<Project, ProjectStoreError>;
    async fn save_project(
        &mut self,
        project: Project,
    ) -> Result<(), ProjectStoreError>;
    /// The authorization gate: projects where `user_id` appears among the
    /// embedded members, in stable insertion order.
    async fn access_by(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Project>, ProjectStoreError>;
    /// Removes the document and with it every embedded member.
    async fn delete_project(
        &mut self,
        id: &ProjectId,
    ) -> Result<(), ProjectStoreError>;
    /// Error creation hook: `nb_errors_reported += 1`,
    /// `nb_errors_unresolved += 1`.
    async fn record_error_reported(
        &mut self,
        id: &ProjectId,
    ) -> Result<(), ProjectStoreError>;
    /// Resolution hook: `nb_errors_resolved += 1`,
    /// `nb_errors_unresolved -= 1`. Fails if nothing is unresolved, since
    /// saturating would break the counter invariant.
    async fn record_error_resolved(
        &mut self,
        id: &ProjectId,
    ) -> Result<(), ProjectStoreError>;
}

#[derive(Debug, Error)]
pub enum ProjectStoreError {
    #[error("Project ID exists")]
    ProjectIdExists,
    #[error("Project ID not found")]
    ProjectIdNotFound,
    #[error("Invalid project")]
    InvalidProject(#[from] ValidationError),
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}

impl PartialEq for ProjectStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::ProjectIdExists, Self::ProjectIdExists)
                | (Self::ProjectIdNotFound, Self::ProjectIdNotFound)
                | (Self::InvalidProject(_), Self::InvalidProject(_))
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}
