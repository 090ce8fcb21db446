use super::{Email, UserId};

/// Account record owned by the authentication side of the application.
/// The membership core reads it (id, email, confirmation state) and never
/// mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub confirmed: bool,
}

impl User {
    pub fn new(email: Email) -> Self {
        Self {
            id: UserId::default(),
            email,
            confirmed: false,
        }
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }
}
