use color_eyre::eyre::eyre;
use tracing::Level;

use crate::{
    app_state::AppState,
    domain::{
        ProjectId, ProjectServiceError, ProjectStoreError, TrackedError,
    },
    utils::tracing::log_error_chain,
};

fn map_counter_error(
    project_id: &ProjectId,
    e: ProjectStoreError,
) -> ProjectServiceError {
    match e {
        ProjectStoreError::ProjectIdNotFound => {
            ProjectServiceError::ProjectNotFound(*project_id.as_ref())
        }
        e => {
            log_error_chain(&e, Level::ERROR);
            ProjectServiceError::UnexpectedError(eyre!(e))
        }
    }
}

/// Error-creation hook at the ingestion boundary. The project's reported
/// and unresolved counters are durably bumped in the store before the
/// tracked error is handed back.
#[tracing::instrument(name = "Record reported error", skip_all)]
pub async fn report_error(
    state: &AppState,
    project_id: &ProjectId,
) -> Result<TrackedError, ProjectServiceError> {
    state
        .project_store
        .write()
        .await
        .record_error_reported(project_id)
        .await
        .map_err(|e| map_counter_error(project_id, e))?;

    Ok(TrackedError::new(project_id.clone()))
}

/// Resolution hook. Counters move only on the unresolved-to-resolved
/// transition; resolving an already-resolved error is a no-op.
#[tracing::instrument(name = "Resolve error", skip_all)]
pub async fn resolve_error(
    state: &AppState,
    error: &mut TrackedError,
) -> Result<(), ProjectServiceError> {
    if error.resolved {
        return Ok(());
    }

    state
        .project_store
        .write()
        .await
        .record_error_resolved(&error.project_id)
        .await
        .map_err(|e| map_counter_error(&error.project_id, e))?;

    error.resolved = true;
    Ok(())
}
