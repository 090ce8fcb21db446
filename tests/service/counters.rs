use crate::helpers::TestApp;
use error_tracker::{
    domain::{ProjectId, ProjectServiceError},
    services::{
        error_events::{report_error, resolve_error},
        projects::accessible_projects,
    },
};
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_count_reported_and_resolved_errors(app: &mut TestApp) {
    let user = app.signup("ted@example.com").await;
    let other_user = app.signup("jack@example.com").await;
    let project = app.create_project("Craggy Island", &user).await;

    let mut errors = Vec::new();
    for nb in 1..=3u64 {
        errors.push(
            report_error(&app.state, &project.id)
                .await
                .expect("Failed to report error"),
        );

        let stored = app.reload_project(&project.id).await;
        assert_eq!(stored.nb_errors_reported, nb);
        assert_eq!(stored.nb_errors_unresolved, nb);
        assert_eq!(stored.nb_errors_resolved, 0);
    }

    resolve_error(&app.state, &mut errors[0])
        .await
        .expect("Failed to resolve error");
    assert!(errors[0].resolved);

    let stored = app.reload_project(&project.id).await;
    assert_eq!(stored.nb_errors_reported, 3);
    assert_eq!(stored.nb_errors_resolved, 1);
    assert_eq!(stored.nb_errors_unresolved, 2);

    // Visibility is untouched by error traffic
    let listed = accessible_projects(&app.state, &user.id).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, project.id);
    let listed = accessible_projects(&app.state, &other_user.id)
        .await
        .unwrap();
    assert!(listed.is_empty());
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_resolve_each_error_once(app: &mut TestApp) {
    let user = app.signup("ted@example.com").await;
    let project = app.create_project("Craggy Island", &user).await;

    let mut errors = Vec::new();
    for _ in 0..3 {
        errors.push(report_error(&app.state, &project.id).await.unwrap());
    }

    for (index, error) in errors.iter_mut().enumerate() {
        resolve_error(&app.state, error)
            .await
            .expect("Failed to resolve error");

        let stored = app.reload_project(&project.id).await;
        assert_eq!(stored.nb_errors_resolved, index as u64 + 1);
        assert_eq!(stored.nb_errors_unresolved, 3 - (index as u64 + 1));
    }

    // Resolving again does not move the counters
    resolve_error(&app.state, &mut errors[0])
        .await
        .expect("Second resolve should be a no-op");
    let stored = app.reload_project(&project.id).await;
    assert_eq!(stored.nb_errors_resolved, 3);
    assert_eq!(stored.nb_errors_unresolved, 0);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_report_missing_project_on_error_event(app: &mut TestApp) {
    let unknown = ProjectId::default();

    let result = report_error(&app.state, &unknown).await;
    assert!(
        matches!(result, Err(ProjectServiceError::ProjectNotFound(id)) if id == *unknown.as_ref())
    );
}

#[quickcheck_macros::quickcheck]
fn counters_stay_consistent_over_any_event_order(events: Vec<bool>) -> bool {
    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(async move {
        let app = TestApp::new().await;
        let user = app.signup("ted@example.com").await;
        let project = app.create_project("Craggy Island", &user).await;

        let mut open = Vec::new();
        for report in events {
            if report {
                open.push(
                    report_error(&app.state, &project.id).await.unwrap(),
                );
            } else if let Some(mut error) = open.pop() {
                resolve_error(&app.state, &mut error).await.unwrap();
            }

            let stored = app.reload_project(&project.id).await;
            if stored.nb_errors_reported
                != stored.nb_errors_resolved + stored.nb_errors_unresolved
            {
                return false;
            }
        }
        true
    })
}
