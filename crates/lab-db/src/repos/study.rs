//! Study repository: CRUD plus status transitions.
//!
//! Any status may move to any other. Only `ACTIVE` studies accept responses,
//! which is enforced by the submission workflow, not here.

use chrono::{DateTime, Utc};
use lab_core::entities::Study;
use lab_core::enums::StudyStatus;
use lab_core::errors::CoreError;
use lab_core::ids::PREFIX_STUDY;
use tracing::{debug, info};

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime, parse_enum, parse_optional_datetime};
use crate::service::LabService;
use crate::updates::study::{StudyUpdate, StudyUpdateBuilder};

fn row_to_study(row: &libsql::Row) -> Result<Study, DatabaseError> {
    Ok(Study {
        id: row.get(0)?,
        title: row.get(1)?,
        description: get_opt_string(row, 2)?,
        schema_id: row.get(3)?,
        status: parse_enum(&row.get::<String>(4)?)?,
        start_date: parse_optional_datetime(get_opt_string(row, 5)?.as_deref())?,
        end_date: parse_optional_datetime(get_opt_string(row, 6)?.as_deref())?,
        created_at: parse_datetime(&row.get::<String>(7)?)?,
        updated_at: parse_datetime(&row.get::<String>(8)?)?,
    })
}

const STUDY_COLS: &str =
    "id, title, description, schema_id, status, start_date, end_date, created_at, updated_at";

fn check_study_fields(
    title: &str,
    start_date: Option<DateTime<Utc>>,
    end_date: Option<DateTime<Utc>>,
) -> Result<(), CoreError> {
    let mut reasons = Vec::new();
    if title.trim().is_empty() {
        reasons.push("study title must not be empty".to_string());
    }
    if let (Some(start), Some(end)) = (start_date, end_date) {
        if end < start {
            reasons.push("study end date precedes its start date".to_string());
        }
    }
    if reasons.is_empty() {
        Ok(())
    } else {
        Err(CoreError::Validation(reasons))
    }
}

impl LabService {
    /// Create a study referencing an existing schema.
    ///
    /// # Errors
    ///
    /// `CoreError::NotFound` (wrapped) when the schema does not exist,
    /// `CoreError::Validation` for an empty title or inverted dates.
    pub async fn create_study(
        &self,
        schema_id: &str,
        title: &str,
        description: Option<&str>,
        status: StudyStatus,
        start_date: Option<DateTime<Utc>>,
        end_date: Option<DateTime<Utc>>,
    ) -> Result<Study, DatabaseError> {
        check_study_fields(title, start_date, end_date)?;
        match self.get_schema(schema_id).await {
            Ok(_) => {}
            Err(DatabaseError::NoResult) => {
                return Err(CoreError::NotFound {
                    entity_type: "schema".into(),
                    id: schema_id.into(),
                }
                .into());
            }
            Err(e) => return Err(e),
        }

        let id = self.db().generate_id(PREFIX_STUDY).await?;
        let now = Utc::now();

        self.db()
            .conn()
            .execute(
                "INSERT INTO studies (id, title, description, schema_id, status, start_date, end_date, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                libsql::params![
                    id.as_str(),
                    title.trim(),
                    description,
                    schema_id,
                    status.as_str(),
                    start_date.map(|d| d.to_rfc3339()),
                    end_date.map(|d| d.to_rfc3339()),
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        info!(study_id = %id, schema_id, %status, "study created");

        Ok(Study {
            id,
            title: title.trim().to_string(),
            description: description.map(String::from),
            schema_id: schema_id.to_string(),
            status,
            start_date,
            end_date,
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn get_study(&self, id: &str) -> Result<Study, DatabaseError> {
        debug!(study_id = id, "loading study");
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {STUDY_COLS} FROM studies WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_study(&row)
    }

    /// Most recently created first, optionally restricted to one status.
    pub async fn list_studies(
        &self,
        status: Option<StudyStatus>,
        limit: u32,
    ) -> Result<Vec<Study>, DatabaseError> {
        let mut rows = match status {
            Some(status) => {
                self.db()
                    .conn()
                    .query(
                        &format!(
                            "SELECT {STUDY_COLS} FROM studies WHERE status = ?1
                             ORDER BY created_at DESC, rowid DESC LIMIT ?2"
                        ),
                        libsql::params![status.as_str(), i64::from(limit)],
                    )
                    .await?
            }
            None => {
                self.db()
                    .conn()
                    .query(
                        &format!(
                            "SELECT {STUDY_COLS} FROM studies ORDER BY created_at DESC, rowid DESC LIMIT ?1"
                        ),
                        [i64::from(limit)],
                    )
                    .await?
            }
        };

        let mut studies = Vec::new();
        while let Some(row) = rows.next().await? {
            studies.push(row_to_study(&row)?);
        }
        Ok(studies)
    }

    pub async fn update_study(
        &self,
        study_id: &str,
        update: StudyUpdate,
    ) -> Result<Study, DatabaseError> {
        let current = self.get_study(study_id).await?;
        let title = update.title.as_deref().unwrap_or(&current.title);
        let start_date = update.start_date.unwrap_or(current.start_date);
        let end_date = update.end_date.unwrap_or(current.end_date);
        check_study_fields(title, start_date, end_date)?;

        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1;

        if let Some(ref title) = update.title {
            sets.push(format!("title = ?{idx}"));
            params.push(title.trim().into());
            idx += 1;
        }
        if let Some(ref description) = update.description {
            sets.push(format!("description = ?{idx}"));
            params.push(description.as_deref().into());
            idx += 1;
        }
        if let Some(status) = update.status {
            sets.push(format!("status = ?{idx}"));
            params.push(status.as_str().into());
            idx += 1;
        }
        if let Some(start_date) = update.start_date {
            sets.push(format!("start_date = ?{idx}"));
            params.push(start_date.map(|d| d.to_rfc3339()).into());
            idx += 1;
        }
        if let Some(end_date) = update.end_date {
            sets.push(format!("end_date = ?{idx}"));
            params.push(end_date.map(|d| d.to_rfc3339()).into());
            idx += 1;
        }

        if sets.is_empty() {
            return Ok(current);
        }

        sets.push(format!("updated_at = ?{idx}"));
        params.push(Utc::now().to_rfc3339().into());
        idx += 1;

        let sql = format!("UPDATE studies SET {} WHERE id = ?{idx}", sets.join(", "));
        params.push(study_id.into());

        self.db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;

        info!(study_id, "study updated");
        self.get_study(study_id).await
    }

    /// Move a study to `status`. Any transition is allowed.
    pub async fn set_study_status(
        &self,
        study_id: &str,
        status: StudyStatus,
    ) -> Result<Study, DatabaseError> {
        let study = self
            .update_study(study_id, StudyUpdateBuilder::new().status(status).build())
            .await?;
        info!(study_id, %status, "study status changed");
        Ok(study)
    }

    /// Delete a study together with all of its responses.
    pub async fn delete_study(&self, study_id: &str) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM studies WHERE id = ?1", [study_id])
            .await?;
        if affected == 0 {
            return Err(DatabaseError::NoResult);
        }
        info!(study_id, "study deleted");
        Ok(())
    }
}
