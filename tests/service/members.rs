use crate::helpers::TestApp;
use error_tracker::{
    domain::{MemberStatus, ProjectServiceError},
    services::projects::{
        add_admin_member, enable_member_notifications, refresh_member,
    },
};
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_track_linked_user_confirmation(app: &mut TestApp) {
    let owner = app.signup("ted@example.com").await;
    let user = app.signup("dougal@example.com").await;
    let project = app.create_project("Craggy Island", &owner).await;
    add_admin_member(&app.state, &owner.id, &project.id, &user)
        .await
        .expect("Failed to add admin member");

    let member = refresh_member(&app.state, &project.id, &user.id)
        .await
        .expect("Failed to refresh member");
    assert_eq!(
        member.status,
        MemberStatus::Unvalidate,
        "An unconfirmed account should leave the member unvalidated"
    );
    assert_eq!(member.email, Some(user.email.clone()));

    app.confirm(&user).await;

    let member = refresh_member(&app.state, &project.id, &user.id)
        .await
        .expect("Failed to refresh member");
    assert_eq!(member.status, MemberStatus::Validate);
    assert_eq!(
        member.email,
        Some(user.email.clone()),
        "The member email should mirror the account email"
    );

    // The refreshed membership is durable
    let stored = app.reload_project(&project.id).await;
    let stored_member = stored.member_for(&user.id).unwrap();
    assert_eq!(stored_member.status, MemberStatus::Validate);
    assert_eq!(stored_member.email, Some(user.email));
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_refresh_idempotently(app: &mut TestApp) {
    let owner = app.signup("ted@example.com").await;
    let project = app.create_project("Craggy Island", &owner).await;
    app.confirm(&owner).await;

    let first = refresh_member(&app.state, &project.id, &owner.id)
        .await
        .expect("Failed to refresh member");
    let second = refresh_member(&app.state, &project.id, &owner.id)
        .await
        .expect("Failed to refresh member");

    assert_eq!(first, second, "Refresh should be re-entrant");
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_refuse_refresh_for_non_member(app: &mut TestApp) {
    let owner = app.signup("ted@example.com").await;
    let outsider = app.signup("jack@example.com").await;
    let project = app.create_project("Craggy Island", &owner).await;

    let result = refresh_member(&app.state, &project.id, &outsider.id).await;
    assert!(matches!(result, Err(ProjectServiceError::NotAuthorized)));
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_enable_member_notifications(app: &mut TestApp) {
    let owner = app.signup("ted@example.com").await;
    let mut project = app.create_project("Craggy Island", &owner).await;

    // A member who previously opted out
    project.member_for_mut(&owner.id).unwrap().notify_by_email = false;
    app.project_store
        .write()
        .await
        .save_project(project.clone())
        .await
        .unwrap();

    enable_member_notifications(&app.state, &project.id, &owner.id)
        .await
        .expect("Failed to enable notifications");

    let stored = app.reload_project(&project.id).await;
    assert!(stored.member_for(&owner.id).unwrap().notify_by_email);

    // Idempotent: enabling again changes nothing
    enable_member_notifications(&app.state, &project.id, &owner.id)
        .await
        .expect("Failed to enable notifications");
    let stored = app.reload_project(&project.id).await;
    assert!(stored.member_for(&owner.id).unwrap().notify_by_email);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_refuse_notification_toggle_for_non_member(app: &mut TestApp) {
    let owner = app.signup("ted@example.com").await;
    let outsider = app.signup("jack@example.com").await;
    let project = app.create_project("Craggy Island", &owner).await;

    let result =
        enable_member_notifications(&app.state, &project.id, &outsider.id)
            .await;
    assert!(matches!(result, Err(ProjectServiceError::NotAuthorized)));
}
