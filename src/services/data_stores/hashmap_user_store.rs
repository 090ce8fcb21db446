use crate::domain::{User, UserId, UserStore, UserStoreError};
use std::collections::HashMap;

#[derive(Default)]
pub struct HashmapUserStore {
    users: HashMap<UserId, User>,
}

#[async_trait::async_trait]
impl UserStore for HashmapUserStore {
    async fn add_user(&mut self, user: User) -> Result<(), UserStoreError> {
        if self.users.contains_key(&user.id) {
            return Err(UserStoreError::UserAlreadyExists);
        }

        self.users.insert(user.id.clone(), user);
        Ok(())
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserStoreError> {
        match self.users.get(id) {
            Some(user) => Ok(user.clone()),
            None => Err(UserStoreError::UserNotFound),
        }
    }

    async fn confirm_user(
        &mut self,
        id: &UserId,
    ) -> Result<(), UserStoreError> {
        match self.users.get_mut(id) {
            Some(user) => {
                user.confirmed = true;
                Ok(())
            }
            None => Err(UserStoreError::UserNotFound),
        }
    }
}
