use serde::{Deserialize, Serialize};

use super::{Email, User, UserId, UserStore, UserStoreError, ValidationError};

/// Validation state of a membership, stored as its integer discriminant in
/// the project document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum MemberStatus {
    /// Invited by email only, no account linked yet.
    Awaiting = 0,
    /// An account is linked but not confirmed.
    Unvalidate = 1,
    /// The linked account is confirmed.
    Validate = 2,
}

impl Default for MemberStatus {
    fn default() -> Self {
        Self::Awaiting
    }
}

impl From<MemberStatus> for u8 {
    fn from(status: MemberStatus) -> Self {
        status as u8
    }
}

impl TryFrom<u8> for MemberStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Awaiting),
            1 => Ok(Self::Unvalidate),
            2 => Ok(Self::Validate),
            other => Err(format!("Invalid member status: {other}")),
        }
    }
}

/// Per-member flags with their defaults made explicit, rather than spread
/// over field initializers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberSettings {
    pub admin: bool,
    pub notify_by_email: bool,
    pub notify_removal_by_email: bool,
}

impl Default for MemberSettings {
    fn default() -> Self {
        Self {
            admin: false,
            notify_by_email: true,
            notify_removal_by_email: true,
        }
    }
}

impl MemberSettings {
    pub fn admin() -> Self {
        Self {
            admin: true,
            ..Self::default()
        }
    }
}

/// A membership embedded in a project document. A member has no identity
/// outside its project; lookups go through the owning project's `members`
/// collection. `user_id` is an id-only back reference into the user store,
/// never an owning handle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub admin: bool,
    pub notify_by_email: bool,
    pub notify_removal_by_email: bool,
    pub email: Option<Email>,
    pub status: MemberStatus,
    pub user_id: Option<UserId>,
}

impl Member {
    /// Membership for an existing account. The email mirror stays empty
    /// until `update_data` pulls it from the account.
    pub fn for_user(user: &User, settings: MemberSettings) -> Self {
        Self {
            admin: settings.admin,
            notify_by_email: settings.notify_by_email,
            notify_removal_by_email: settings.notify_removal_by_email,
            email: None,
            status: MemberStatus::default(),
            user_id: Some(user.id.clone()),
        }
    }

    /// Membership for an invitee without an account; the email is the only
    /// identity channel until a user links up.
    pub fn invited(email: Email, settings: MemberSettings) -> Self {
        Self {
            admin: settings.admin,
            notify_by_email: settings.notify_by_email,
            notify_removal_by_email: settings.notify_removal_by_email,
            email: Some(email),
            status: MemberStatus::default(),
            user_id: None,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.admin
    }

    /// Recomputes `status` and the denormalized `email` from the linked
    /// account, through the injected user lookup. Re-entrant: every call
    /// re-derives the same state from the same account.
    ///
    /// A `user_id` pointing at an account the store no longer knows is
    /// treated as an unconfirmed account; genuine store faults propagate.
    pub async fn update_data(
        &mut self,
        users: &(dyn UserStore + Send + Sync),
    ) -> Result<(), UserStoreError> {
        let user_id = match &self.user_id {
            None => {
                self.status = MemberStatus::Awaiting;
                return Ok(());
            }
            Some(user_id) => user_id,
        };

        match users.get_user(user_id).await {
            Ok(user) => {
                self.status = if user.is_confirmed() {
                    MemberStatus::Validate
                } else {
                    MemberStatus::Unvalidate
                };
                self.email = Some(user.email);
            }
            Err(UserStoreError::UserNotFound) => {
                self.status = MemberStatus::Unvalidate;
            }
            Err(e) => return Err(e),
        }

        Ok(())
    }

    /// The `notify_by_email!` operation: idempotent, the caller persists
    /// the enclosing project document.
    pub fn enable_email_notifications(&mut self) {
        self.notify_by_email = true;
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.user_id.is_none() && self.email.is_none() {
            return Err(ValidationError::new(
                "Member needs a linked user or an email".to_string(),
            ));
        }
        Ok(())
    }
}
