//! Study update builder.

use chrono::{DateTime, Utc};
use lab_core::enums::StudyStatus;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct StudyUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StudyStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Option<DateTime<Utc>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Option<DateTime<Utc>>>,
}

pub struct StudyUpdateBuilder(StudyUpdate);

impl StudyUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(StudyUpdate::default())
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
    pub fn status(mut self, status: StudyStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    #[must_use]
    pub fn start_date(mut self, start_date: Option<DateTime<Utc>>) -> Self {
        self.0.start_date = Some(start_date);
        self
    }

    #[must_use]
    pub fn end_date(mut self, end_date: Option<DateTime<Utc>>) -> Self {
        self.0.end_date = Some(end_date);
        self
    }

    #[must_use]
    pub fn build(self) -> StudyUpdate {
        self.0
    }
}

impl Default for StudyUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
