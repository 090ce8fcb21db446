use color_eyre::eyre::eyre;
use serde_json::Value;
use std::collections::HashMap;
use uuid::Uuid;

use crate::domain::{
    Project, ProjectId, ProjectStore, ProjectStoreError, UserId,
};

/// In-memory document store. Projects are held as JSON documents keyed by
/// id, with an insertion-order index so `access_by` listings are stable.
/// Counter updates mutate the stored integer fields in place; callers
/// serialize through the store handle's lock, so an increment can never be
/// lost to a stale deserialized copy.
#[derive(Default)]
pub struct HashmapProjectStore {
    documents: HashMap<Uuid, Value>,
    insertion_order: Vec<Uuid>,
}

const REPORTED: &str = "nb_errors_reported";
const RESOLVED: &str = "nb_errors_resolved";
const UNRESOLVED: &str = "nb_errors_unresolved";

impl HashmapProjectStore {
    fn encode(project: &Project) -> Result<Value, ProjectStoreError> {
        serde_json::to_value(project)
            .map_err(|e| ProjectStoreError::UnexpectedError(eyre!(e)))
    }

    fn decode(document: &Value) -> Result<Project, ProjectStoreError> {
        serde_json::from_value(document.clone())
            .map_err(|e| ProjectStoreError::UnexpectedError(eyre!(e)))
    }

    fn counter(
        document: &Value,
        field: &str,
    ) -> Result<u64, ProjectStoreError> {
        document.get(field).and_then(Value::as_u64).ok_or_else(|| {
            ProjectStoreError::UnexpectedError(eyre!(
                "Missing counter field: {field}"
            ))
        })
    }

    fn document_mut(
        &mut self,
        id: &ProjectId,
    ) -> Result<&mut Value, ProjectStoreError> {
        self.documents
            .get_mut(id.as_ref())
            .ok_or(ProjectStoreError::ProjectIdNotFound)
    }
}

#[async_trait::async_trait]
impl ProjectStore for HashmapProjectStore {
    async fn add_project(
        &mut self,
        project: Project,
    ) -> Result<(), ProjectStoreError> {
        project.validate()?;

        let id = *project.id.as_ref();
        if self.documents.contains_key(&id) {
            return Err(ProjectStoreError::ProjectIdExists);
        }

        self.documents.insert(id, Self::encode(&project)?);
        self.insertion_order.push(id);
        Ok(())
    }

    async fn get_project(
        &self,
        id: &ProjectId,
    ) -> Result<Project, ProjectStoreError> {
        match self.documents.get(id.as_ref()) {
            Some(document) => Self::decode(document),
            None => Err(ProjectStoreError::ProjectIdNotFound),
        }
    }

    async fn save_project(
        &mut self,
        project: Project,
    ) -> Result<(), ProjectStoreError> {
        project.validate()?;

        let encoded = Self::encode(&project)?;
        let document = self.document_mut(&project.id)?;
        *document = encoded;
        Ok(())
    }

    async fn access_by(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Project>, ProjectStoreError> {
        let mut projects = Vec::new();
        for id in &self.insertion_order {
            let document = self
                .documents
                .get(id)
                .ok_or(ProjectStoreError::ProjectIdNotFound)?;
            let project = Self::decode(document)?;
            if project.is_member(user_id) {
                projects.push(project);
            }
        }
        Ok(projects)
    }

    async fn delete_project(
        &mut self,
        id: &ProjectId,
    ) -> Result<(), ProjectStoreError> {
        self.documents
            .remove(id.as_ref())
            .ok_or(ProjectStoreError::ProjectIdNotFound)?;
        self.insertion_order.retain(|entry| entry != id.as_ref());
        Ok(())
    }

    async fn record_error_reported(
        &mut self,
        id: &ProjectId,
    ) -> Result<(), ProjectStoreError> {
        let document = self.document_mut(id)?;
        let reported = Self::counter(document, REPORTED)? + 1;
        let unresolved = Self::counter(document, UNRESOLVED)? + 1;
        document[REPORTED] = Value::from(reported);
        document[UNRESOLVED] = Value::from(unresolved);
        Ok(())
    }

    async fn record_error_resolved(
        &mut self,
        id: &ProjectId,
    ) -> Result<(), ProjectStoreError> {
        let document = self.document_mut(id)?;
        let unresolved = Self::counter(document, UNRESOLVED)?
            .checked_sub(1)
            .ok_or_else(|| {
                ProjectStoreError::UnexpectedError(eyre!(
                    "No unresolved errors to resolve"
                ))
            })?;
        let resolved = Self::counter(document, RESOLVED)? + 1;
        document[RESOLVED] = Value::from(resolved);
        document[UNRESOLVED] = Value::from(unresolved);
        Ok(())
    }
}
