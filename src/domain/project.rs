use serde::{Deserialize, Serialize};

use super::{
    Member, MemberSettings, ProjectId, ProjectName, User, UserId,
    ValidationError,
};

/// A project and its embedded memberships, persisted as a single document.
/// The error counters are maintained by the store's atomic increments
/// (`record_error_reported` / `record_error_resolved`) and are never
/// recomputed on read; `nb_errors_reported` always equals
/// `nb_errors_resolved + nb_errors_unresolved`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: ProjectName,
    pub members: Vec<Member>,
    pub nb_errors_reported: u64,
    pub nb_errors_resolved: u64,
    pub nb_errors_unresolved: u64,
}

impl Project {
    /// A fresh project starts with its creator as admin member, which is
    /// what makes it pass validation.
    pub fn new(name: ProjectName, creator: &User) -> Self {
        let mut project = Self {
            id: ProjectId::default(),
            name,
            members: Vec::new(),
            nb_errors_reported: 0,
            nb_errors_resolved: 0,
            nb_errors_unresolved: 0,
        };
        project.add_admin_member(creator);
        project
    }

    /// Appends an admin membership for `user`. No deduplication is done:
    /// adding the same user twice leaves two entries.
    pub fn add_admin_member(&mut self, user: &User) {
        self.members
            .push(Member::for_user(user, MemberSettings::admin()));
    }

    /// The single authorization predicate. Both `access_by` listings and
    /// per-object guards go through here so the two can never diverge.
    pub fn is_member(&self, user_id: &UserId) -> bool {
        self.members
            .iter()
            .any(|member| member.user_id.as_ref() == Some(user_id))
    }

    pub fn include_member(&self, user: &User) -> bool {
        self.is_member(&user.id)
    }

    pub fn member_for(&self, user_id: &UserId) -> Option<&Member> {
        self.members
            .iter()
            .find(|member| member.user_id.as_ref() == Some(user_id))
    }

    pub fn member_for_mut(&mut self, user_id: &UserId) -> Option<&mut Member> {
        self.members
            .iter_mut()
            .find(|member| member.user_id.as_ref() == Some(user_id))
    }

    /// Validates the embedded collection as a whole: at least one member,
    /// every member individually valid, at least one admin.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.members.is_empty() {
            return Err(ValidationError::new(
                "Project needs at least one member".to_string(),
            ));
        }
        for member in &self.members {
            member.validate()?;
        }
        if !self.members.iter().any(Member::is_admin) {
            return Err(ValidationError::new(
                "Project needs at least one admin member".to_string(),
            ));
        }
        Ok(())
    }
}
