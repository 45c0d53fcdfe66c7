use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::StandardBody;

/// A published test protocol, e.g. `ISO 527-2` or `ASTM D638`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Protocol {
    pub id: String,
    pub code: String,
    pub title: String,
    pub body: StandardBody,
    pub category: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}
