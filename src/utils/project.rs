use tracing::Level;

use crate::{
    app_state::ProjectStoreType,
    domain::{
        Project, ProjectId, ProjectServiceError, ProjectStoreError, UserId,
    },
    utils::tracing::log_error_chain,
};

/// Single-object authorization guard. Applies the same membership
/// predicate that backs `access_by`, so a listing and a per-object check
/// can never disagree: a non-member gets `NotAuthorized`, never a
/// not-found.
#[tracing::instrument(name = "Check user access to project", skip_all)]
pub async fn check_access_for_project(
    project_store: &ProjectStoreType,
    user_id: &UserId,
    project_id: &ProjectId,
) -> Result<Project, ProjectServiceError> {
    let project = project_store
        .read()
        .await
        .get_project(project_id)
        .await
        .map_err(|e| match e {
            ProjectStoreError::ProjectIdNotFound => {
                ProjectServiceError::ProjectNotFound(*project_id.as_ref())
            }
            e => {
                log_error_chain(&e, Level::ERROR);
                ProjectServiceError::UnexpectedError(e.into())
            }
        })?;

    if !project.is_member(user_id) {
        return Err(ProjectServiceError::NotAuthorized);
    }

    Ok(project)
}
