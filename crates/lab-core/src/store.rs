//! Store traits the analysis layer is written against.
//!
//! The persistence client is passed in explicitly as a value implementing
//! these traits; nothing in the core reaches for a global connection.
//! `lab-db` implements them over libSQL. Lookups return `Ok(None)` for a
//! missing entity so callers can tell "absent" from "store failed".

use crate::entities::{Answers, ResearchSchema, Response, Study};

#[allow(async_fn_in_trait)]
pub trait SchemaStore {
    type Error;

    async fn find_schema(&self, id: &str) -> Result<Option<ResearchSchema>, Self::Error>;
}

#[allow(async_fn_in_trait)]
pub trait StudyStore {
    type Error;

    async fn find_study(&self, id: &str) -> Result<Option<Study>, Self::Error>;
}

#[allow(async_fn_in_trait)]
pub trait ResponseStore {
    type Error;

    /// All responses of a study, oldest first.
    async fn responses_for_study(&self, study_id: &str) -> Result<Vec<Response>, Self::Error>;

    /// Persist a new response. No dedup: two identical submissions create two rows.
    async fn insert_response(
        &self,
        study_id: &str,
        answers: Answers,
    ) -> Result<Response, Self::Error>;
}
