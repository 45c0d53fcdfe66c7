//! Response repository.
//!
//! Answers are stored as a JSON object keyed by question id. This layer does
//! not validate them; the submission workflow does that before calling
//! [`LabService::create_response`].

use chrono::Utc;
use lab_core::codec::serialize_answers;
use lab_core::entities::{Answers, Response};
use lab_core::errors::CoreError;
use lab_core::ids::PREFIX_RESPONSE;
use tracing::{debug, info};

use crate::error::DatabaseError;
use crate::helpers::{answers_or_empty, parse_datetime};
use crate::service::LabService;

fn row_to_response(row: &libsql::Row) -> Result<Response, DatabaseError> {
    let id: String = row.get(0)?;
    let answers = answers_or_empty(&row.get::<String>(2)?, &id);
    Ok(Response {
        study_id: row.get(1)?,
        answers,
        created_at: parse_datetime(&row.get::<String>(3)?)?,
        id,
    })
}

const RESPONSE_COLS: &str = "id, study_id, answers, created_at";

impl LabService {
    /// Persist a response for an existing study.
    ///
    /// # Errors
    ///
    /// `CoreError::NotFound` (wrapped) when the study does not exist.
    pub async fn create_response(
        &self,
        study_id: &str,
        answers: Answers,
    ) -> Result<Response, DatabaseError> {
        match self.get_study(study_id).await {
            Ok(_) => {}
            Err(DatabaseError::NoResult) => {
                return Err(CoreError::NotFound {
                    entity_type: "study".into(),
                    id: study_id.into(),
                }
                .into());
            }
            Err(e) => return Err(e),
        }

        let id = self.db().generate_id(PREFIX_RESPONSE).await?;
        let now = Utc::now();
        let encoded = serialize_answers(&answers)?;

        self.db()
            .conn()
            .execute(
                "INSERT INTO responses (id, study_id, answers, created_at) VALUES (?1, ?2, ?3, ?4)",
                libsql::params![id.as_str(), study_id, encoded, now.to_rfc3339()],
            )
            .await?;

        info!(response_id = %id, study_id, answers = answers.len(), "response stored");

        Ok(Response {
            id,
            study_id: study_id.to_string(),
            answers,
            created_at: now,
        })
    }

    pub async fn get_response(&self, id: &str) -> Result<Response, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {RESPONSE_COLS} FROM responses WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_response(&row)
    }

    /// All responses of a study in submission order.
    pub async fn list_responses_for_study(
        &self,
        study_id: &str,
    ) -> Result<Vec<Response>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {RESPONSE_COLS} FROM responses WHERE study_id = ?1
                     ORDER BY created_at ASC, rowid ASC"
                ),
                [study_id],
            )
            .await?;

        let mut responses = Vec::new();
        while let Some(row) = rows.next().await? {
            responses.push(row_to_response(&row)?);
        }
        debug!(study_id, count = responses.len(), "loaded responses");
        Ok(responses)
    }

    pub async fn count_responses(&self, study_id: &str) -> Result<u64, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT COUNT(*) FROM responses WHERE study_id = ?1",
                [study_id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let count = row.get::<i64>(0)?;
        u64::try_from(count)
            .map_err(|_| DatabaseError::InvalidState(format!("negative response count {count}")))
    }

    pub async fn delete_response(&self, id: &str) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM responses WHERE id = ?1", [id])
            .await?;
        if affected == 0 {
            return Err(DatabaseError::NoResult);
        }
        info!(response_id = id, "response deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use lab_core::enums::StudyStatus;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::test_support::helpers::{seed_study, test_service};

    fn answers(operator: &str, load: serde_json::Value) -> Answers {
        Answers::from([
            ("operator".to_string(), json!(operator)),
            ("load".to_string(), load),
        ])
    }

    #[tokio::test]
    async fn create_response_roundtrip() {
        let svc = test_service().await;
        let study = seed_study(&svc, StudyStatus::Active).await;

        let response = svc
            .create_response(&study.id, answers("Ada", json!("12.5")))
            .await
            .unwrap();
        assert!(response.id.starts_with("rsp-"));

        let fetched = svc.get_response(&response.id).await.unwrap();
        assert_eq!(fetched, response);
        assert_eq!(fetched.answers["load"], json!("12.5"));
    }

    #[tokio::test]
    async fn create_response_for_unknown_study() {
        let svc = test_service().await;
        let err = svc
            .create_response("stu-missing", Answers::new())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn list_in_submission_order_and_count() {
        let svc = test_service().await;
        let study = seed_study(&svc, StudyStatus::Active).await;
        let other = seed_study(&svc, StudyStatus::Active).await;

        let mut ids = Vec::new();
        for name in ["a", "b", "c"] {
            ids.push(
                svc.create_response(&study.id, answers(name, json!(1)))
                    .await
                    .unwrap()
                    .id,
            );
        }
        svc.create_response(&other.id, answers("x", json!(2)))
            .await
            .unwrap();

        let listed: Vec<String> = svc
            .list_responses_for_study(&study.id)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(listed, ids);
        assert_eq!(svc.count_responses(&study.id).await.unwrap(), 3);
        assert_eq!(svc.count_responses(&other.id).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn deleting_study_cascades_to_responses() {
        let svc = test_service().await;
        let study = seed_study(&svc, StudyStatus::Active).await;
        let response = svc
            .create_response(&study.id, answers("Ada", json!(3)))
            .await
            .unwrap();

        svc.delete_study(&study.id).await.unwrap();
        assert!(matches!(
            svc.get_response(&response.id).await,
            Err(DatabaseError::NoResult)
        ));
        assert_eq!(svc.count_responses(&study.id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn corrupt_answers_read_as_empty() {
        let svc = test_service().await;
        let study = seed_study(&svc, StudyStatus::Active).await;
        let response = svc
            .create_response(&study.id, answers("Ada", json!(3)))
            .await
            .unwrap();
        svc.db()
            .conn()
            .execute(
                "UPDATE responses SET answers = '{broken' WHERE id = ?1",
                [response.id.as_str()],
            )
            .await
            .unwrap();

        let fetched = svc.get_response(&response.id).await.unwrap();
        assert!(fetched.answers.is_empty());
    }

    #[tokio::test]
    async fn delete_response_once() {
        let svc = test_service().await;
        let study = seed_study(&svc, StudyStatus::Active).await;
        let response = svc
            .create_response(&study.id, Answers::new())
            .await
            .unwrap();
        svc.delete_response(&response.id).await.unwrap();
        assert!(svc.delete_response(&response.id).await.is_err());
    }
}
