use error_tracker::{
    app_state::{AppState, ProjectStoreType, UserStoreType},
    domain::{Email, Project, ProjectId, User},
    services::{
        data_stores::{HashmapProjectStore, HashmapUserStore},
        projects,
    },
};
use std::sync::Arc;
use test_context::AsyncTestContext;
use tokio::sync::RwLock;

pub struct TestApp {
    pub state: AppState,
    pub user_store: UserStoreType,
    pub project_store: ProjectStoreType,
}

impl TestApp {
    pub async fn new() -> Self {
        let user_store: UserStoreType =
            Arc::new(RwLock::new(HashmapUserStore::default()));
        let project_store: ProjectStoreType =
            Arc::new(RwLock::new(HashmapProjectStore::default()));
        let state = AppState::new(user_store.clone(), project_store.clone());

        Self {
            state,
            user_store,
            project_store,
        }
    }

    /// Registers an unconfirmed account, the state a user is in right
    /// after signup.
    pub async fn signup(&self, email: &str) -> User {
        let user = User::new(Email::parse(email).expect(email));
        self.user_store
            .write()
            .await
            .add_user(user.clone())
            .await
            .expect("Failed to add user");
        user
    }

    pub async fn confirm(&self, user: &User) {
        self.user_store
            .write()
            .await
            .confirm_user(&user.id)
            .await
            .expect("Failed to confirm user");
    }

    pub async fn create_project(&self, name: &str, owner: &User) -> Project {
        projects::create_project(&self.state, name, owner)
            .await
            .expect("Failed to create project")
    }

    /// The stored document, fresh from the store ("reload" semantics).
    pub async fn reload_project(&self, id: &ProjectId) -> Project {
        self.project_store
            .read()
            .await
            .get_project(id)
            .await
            .expect("Failed to get project")
    }
}

impl AsyncTestContext for TestApp {
    async fn setup() -> TestApp {
        TestApp::new().await
    }

    async fn teardown(self) {}
}
