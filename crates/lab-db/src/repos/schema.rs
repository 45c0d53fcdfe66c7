//! Research schema repository.
//!
//! A schema's question list is stored as one JSON text column and is only
//! ever replaced wholesale. Every write re-runs the draft checks on the
//! resulting schema, so a stored schema always satisfies them.

use chrono::Utc;
use lab_core::codec::serialize_questions;
use lab_core::entities::{Question, ResearchSchema, check_schema_draft};
use lab_core::ids::PREFIX_SCHEMA;
use tracing::{debug, info};

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime, questions_or_empty};
use crate::service::LabService;
use crate::updates::schema::SchemaUpdate;

fn row_to_schema(row: &libsql::Row) -> Result<ResearchSchema, DatabaseError> {
    let id: String = row.get(0)?;
    let questions = questions_or_empty(&row.get::<String>(3)?, &id);
    Ok(ResearchSchema {
        title: row.get(1)?,
        description: get_opt_string(row, 2)?,
        questions,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
        updated_at: parse_datetime(&row.get::<String>(5)?)?,
        id,
    })
}

const SCHEMA_COLS: &str = "id, title, description, questions, created_at, updated_at";

impl LabService {
    /// Create a schema after checking the draft.
    ///
    /// # Errors
    ///
    /// `DatabaseError::Core(CoreError::Validation)` when the draft breaks a
    /// schema rule; `DatabaseError` on storage failure.
    pub async fn create_schema(
        &self,
        title: &str,
        description: Option<&str>,
        questions: Vec<Question>,
    ) -> Result<ResearchSchema, DatabaseError> {
        check_schema_draft(title, description, &questions)?;

        let id = self.db().generate_id(PREFIX_SCHEMA).await?;
        let now = Utc::now();
        let encoded = serialize_questions(&questions)?;

        self.db()
            .conn()
            .execute(
                "INSERT INTO research_schemas (id, title, description, questions, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                libsql::params![
                    id.as_str(),
                    title.trim(),
                    description,
                    encoded,
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        info!(schema_id = %id, questions = questions.len(), "schema created");

        Ok(ResearchSchema {
            id,
            title: title.trim().to_string(),
            description: description.map(String::from),
            questions,
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn get_schema(&self, id: &str) -> Result<ResearchSchema, DatabaseError> {
        debug!(schema_id = id, "loading schema");
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SCHEMA_COLS} FROM research_schemas WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_schema(&row)
    }

    /// Most recently created first.
    pub async fn list_schemas(&self, limit: u32) -> Result<Vec<ResearchSchema>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SCHEMA_COLS} FROM research_schemas ORDER BY created_at DESC, rowid DESC LIMIT ?1"
                ),
                [i64::from(limit)],
            )
            .await?;

        let mut schemas = Vec::new();
        while let Some(row) = rows.next().await? {
            schemas.push(row_to_schema(&row)?);
        }
        Ok(schemas)
    }

    /// Change the title and/or description.
    ///
    /// # Errors
    ///
    /// `DatabaseError::NoResult` for an unknown id, validation errors when
    /// the merged schema breaks a rule.
    pub async fn update_schema(
        &self,
        id: &str,
        update: SchemaUpdate,
    ) -> Result<ResearchSchema, DatabaseError> {
        let current = self.get_schema(id).await?;
        if update.is_empty() {
            return Ok(current);
        }

        let mut candidate = current.clone();
        if let Some(ref title) = update.title {
            candidate.title.clone_from(title);
        }
        if let Some(ref description) = update.description {
            candidate.description.clone_from(description);
        }
        candidate.check()?;

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

        sets.push(format!("updated_at = ?{idx}"));
        params.push(Utc::now().to_rfc3339().into());
        idx += 1;

        let sql = format!(
            "UPDATE research_schemas SET {} WHERE id = ?{idx}",
            sets.join(", ")
        );
        params.push(id.into());

        self.db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;

        info!(schema_id = id, "schema updated");
        self.get_schema(id).await
    }

    /// Replace the whole question list.
    ///
    /// Existing responses keep their answers; answers to removed questions
    /// simply stop being reported.
    pub async fn replace_schema_questions(
        &self,
        id: &str,
        questions: Vec<Question>,
    ) -> Result<ResearchSchema, DatabaseError> {
        let candidate = ResearchSchema {
            questions,
            ..self.get_schema(id).await?
        };
        candidate.check()?;
        let questions = candidate.questions;

        let encoded = serialize_questions(&questions)?;
        self.db()
            .conn()
            .execute(
                "UPDATE research_schemas SET questions = ?1, updated_at = ?2 WHERE id = ?3",
                libsql::params![encoded, Utc::now().to_rfc3339(), id],
            )
            .await?;

        info!(schema_id = id, questions = questions.len(), "schema questions replaced");
        self.get_schema(id).await
    }

    /// Delete a schema. Studies that reference it are left in place.
    pub async fn delete_schema(&self, id: &str) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM research_schemas WHERE id = ?1", [id])
            .await?;
        if affected == 0 {
            return Err(DatabaseError::NoResult);
        }
        info!(schema_id = id, "schema deleted");
        Ok(())
    }
}
