//! Schema update builder. The question list is replaced separately.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct SchemaUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
}

impl SchemaUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }
}

pub struct SchemaUpdateBuilder(SchemaUpdate);

impl SchemaUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(SchemaUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: Option<String>) -> Self {
        self.0.description = Some(description);
        self
    }

    #[must_use]
    pub fn build(self) -> SchemaUpdate {
        self.0
    }
}

impl Default for SchemaUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
