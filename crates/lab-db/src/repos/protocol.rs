//! Test-protocol catalog repository (ISO / ASTM / in-house methods).

use chrono::Utc;
use lab_core::entities::Protocol;
use lab_core::enums::StandardBody;
use lab_core::errors::CoreError;
use lab_core::ids::PREFIX_PROTOCOL;
use tracing::info;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, like_pattern, parse_datetime, parse_enum};
use crate::service::LabService;

fn row_to_protocol(row: &libsql::Row) -> Result<Protocol, DatabaseError> {
    Ok(Protocol {
        id: row.get(0)?,
        code: row.get(1)?,
        title: row.get(2)?,
        body: parse_enum(&row.get::<String>(3)?)?,
        category: get_opt_string(row, 4)?,
        description: get_opt_string(row, 5)?,
        created_at: parse_datetime(&row.get::<String>(6)?)?,
    })
}

const PROTOCOL_COLS: &str = "id, code, title, body, category, description, created_at";

impl LabService {
    /// Register a protocol. Codes are unique across the catalog.
    ///
    /// # Errors
    ///
    /// `CoreError::Validation` for a blank code or title, or when the code is
    /// already registered.
    pub async fn create_protocol(
        &self,
        code: &str,
        title: &str,
        body: StandardBody,
        category: Option<&str>,
        description: Option<&str>,
    ) -> Result<Protocol, DatabaseError> {
        let code = code.trim();
        let title = title.trim();
        let mut reasons = Vec::new();
        if code.is_empty() {
            reasons.push("protocol code must not be empty".to_string());
        }
        if title.is_empty() {
            reasons.push("protocol title must not be empty".to_string());
        }
        if !reasons.is_empty() {
            return Err(CoreError::Validation(reasons).into());
        }

        match self.get_protocol(code).await {
            Ok(_) => {
                return Err(
                    CoreError::Validation(vec![format!("protocol {code} already exists")]).into(),
                );
            }
            Err(DatabaseError::NoResult) => {}
            Err(e) => return Err(e),
        }

        let id = self.db().generate_id(PREFIX_PROTOCOL).await?;
        let now = Utc::now();

        self.db()
            .conn()
            .execute(
                "INSERT INTO protocols (id, code, title, body, category, description, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                libsql::params![
                    id.as_str(),
                    code,
                    title,
                    body.as_str(),
                    category,
                    description,
                    now.to_rfc3339()
                ],
            )
            .await?;

        info!(protocol_id = %id, code, %body, "protocol registered");

        Ok(Protocol {
            id,
            code: code.to_string(),
            title: title.to_string(),
            body,
            category: category.map(String::from),
            description: description.map(String::from),
            created_at: now,
        })
    }

    /// Look up a protocol by id or by its code (e.g. `ASTM D638`).
    pub async fn get_protocol(&self, id_or_code: &str) -> Result<Protocol, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {PROTOCOL_COLS} FROM protocols WHERE id = ?1 OR code = ?1"),
                [id_or_code],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_protocol(&row)
    }

    /// Protocols ordered by code, optionally restricted to one standards body.
    pub async fn list_protocols(
        &self,
        body: Option<StandardBody>,
        limit: u32,
    ) -> Result<Vec<Protocol>, DatabaseError> {
        let mut rows = match body {
            Some(body) => {
                self.db()
                    .conn()
                    .query(
                        &format!(
                            "SELECT {PROTOCOL_COLS} FROM protocols WHERE body = ?1 ORDER BY code LIMIT ?2"
                        ),
                        libsql::params![body.as_str(), i64::from(limit)],
                    )
                    .await?
            }
            None => {
                self.db()
                    .conn()
                    .query(
                        &format!("SELECT {PROTOCOL_COLS} FROM protocols ORDER BY code LIMIT ?1"),
                        [i64::from(limit)],
                    )
                    .await?
            }
        };

        let mut protocols = Vec::new();
        while let Some(row) = rows.next().await? {
            protocols.push(row_to_protocol(&row)?);
        }
        Ok(protocols)
    }

    /// Case-insensitive substring match on code, title and category.
    pub async fn search_protocols(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<Protocol>, DatabaseError> {
        let pattern = like_pattern(query.trim());
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {PROTOCOL_COLS} FROM protocols
                     WHERE code LIKE ?1 ESCAPE '\\'
                        OR title LIKE ?1 ESCAPE '\\'
                        OR category LIKE ?1 ESCAPE '\\'
                     ORDER BY code LIMIT ?2"
                ),
                libsql::params![pattern, i64::from(limit)],
            )
            .await?;

        let mut protocols = Vec::new();
        while let Some(row) = rows.next().await? {
            protocols.push(row_to_protocol(&row)?);
        }
        Ok(protocols)
    }
}
