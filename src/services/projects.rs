use color_eyre::eyre::eyre;
use tracing::Level;

use crate::{
    app_state::AppState,
    domain::{
        Member, Project, ProjectId, ProjectName, ProjectServiceError,
        ProjectStoreError, User, UserId,
    },
    utils::{project::check_access_for_project, tracing::log_error_chain},
};

fn unexpected(e: ProjectStoreError) -> ProjectServiceError {
    log_error_chain(&e, Level::ERROR);
    ProjectServiceError::UnexpectedError(eyre!(e))
}

/// Creates a project with `creator` as its admin member and persists it.
#[tracing::instrument(name = "Create project", skip_all)]
pub async fn create_project(
    state: &AppState,
    name: &str,
    creator: &User,
) -> Result<Project, ProjectServiceError> {
    let name = ProjectName::parse(name)?;
    let project = Project::new(name, creator);

    state
        .project_store
        .write()
        .await
        .add_project(project.clone())
        .await
        .map_err(|e| match e {
            ProjectStoreError::InvalidProject(e) => {
                ProjectServiceError::ValidationError(e)
            }
            e => unexpected(e),
        })?;

    Ok(project)
}

/// The projects `user_id` may see, in stable creation order. Every "my
/// projects" surface goes through this one query.
#[tracing::instrument(name = "List accessible projects", skip_all)]
pub async fn accessible_projects(
    state: &AppState,
    user_id: &UserId,
) -> Result<Vec<Project>, ProjectServiceError> {
    state
        .project_store
        .read()
        .await
        .access_by(user_id)
        .await
        .map_err(unexpected)
}

/// Adds `user` as admin member, on behalf of `acting_user_id` who must be
/// a member already. Duplicate memberships are not defended against.
#[tracing::instrument(name = "Add admin member", skip_all)]
pub async fn add_admin_member(
    state: &AppState,
    acting_user_id: &UserId,
    project_id: &ProjectId,
    user: &User,
) -> Result<Project, ProjectServiceError> {
    let mut project =
        check_access_for_project(&state.project_store, acting_user_id, project_id)
            .await?;

    project.add_admin_member(user);

    state
        .project_store
        .write()
        .await
        .save_project(project.clone())
        .await
        .map_err(|e| match e {
            ProjectStoreError::InvalidProject(e) => {
                ProjectServiceError::ValidationError(e)
            }
            e => unexpected(e),
        })?;

    Ok(project)
}

/// The `notify_by_email!` operation: turns the member's email
/// notifications on (idempotently) and saves the enclosing project
/// document.
#[tracing::instrument(name = "Enable member notifications", skip_all)]
pub async fn enable_member_notifications(
    state: &AppState,
    project_id: &ProjectId,
    user_id: &UserId,
) -> Result<(), ProjectServiceError> {
    let mut project =
        check_access_for_project(&state.project_store, user_id, project_id)
            .await?;

    project
        .member_for_mut(user_id)
        .ok_or(ProjectServiceError::NotAuthorized)?
        .enable_email_notifications();

    state
        .project_store
        .write()
        .await
        .save_project(project)
        .await
        .map_err(unexpected)
}

/// Re-derives the member's status and email mirror from the linked user
/// account and persists the refreshed membership.
#[tracing::instrument(name = "Refresh member from linked user", skip_all)]
pub async fn refresh_member(
    state: &AppState,
    project_id: &ProjectId,
    user_id: &UserId,
) -> Result<Member, ProjectServiceError> {
    let mut project =
        check_access_for_project(&state.project_store, user_id, project_id)
            .await?;

    let users = state.user_store.read().await;
    let member = project
        .member_for_mut(user_id)
        .ok_or(ProjectServiceError::NotAuthorized)?;
    member
        .update_data(&*users)
        .await
        .map_err(|e| ProjectServiceError::UnexpectedError(eyre!(e)))?;
    let refreshed = member.clone();
    drop(users);

    state
        .project_store
        .write()
        .await
        .save_project(project)
        .await
        .map_err(unexpected)?;

    Ok(refreshed)
}
