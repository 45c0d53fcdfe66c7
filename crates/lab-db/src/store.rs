//! lab-core store traits over `LabService`, so the analysis workflows can
//! run against the database.

use lab_core::entities::{Answers, ResearchSchema, Response, Study};
use lab_core::store::{ResponseStore, SchemaStore, StudyStore};

use crate::error::DatabaseError;
use crate::service::LabService;

/// Turn a lookup miss into `Ok(None)`.
fn found<T>(result: Result<T, DatabaseError>) -> Result<Option<T>, DatabaseError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

impl SchemaStore for LabService {
    type Error = DatabaseError;

    async fn find_schema(&self, id: &str) -> Result<Option<ResearchSchema>, DatabaseError> {
        found(self.get_schema(id).await)
    }
}

impl StudyStore for LabService {
    type Error = DatabaseError;

    async fn find_study(&self, id: &str) -> Result<Option<Study>, DatabaseError> {
        found(self.get_study(id).await)
    }
}

impl ResponseStore for LabService {
    type Error = DatabaseError;

    async fn responses_for_study(&self, study_id: &str) -> Result<Vec<Response>, DatabaseError> {
        self.list_responses_for_study(study_id).await
    }

    async fn insert_response(
        &self,
        study_id: &str,
        answers: Answers,
    ) -> Result<Response, DatabaseError> {
        self.create_response(study_id, answers).await
    }
}
