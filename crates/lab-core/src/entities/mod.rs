//! Entity structs for all protolab domain objects.
//!
//! Each entity maps to a table in the libSQL store. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema`; field names are camelCase on
//! the wire because the UI consumes them directly.

mod protocol;
mod question;
mod response;
mod schema;
mod study;

pub use protocol::Protocol;
pub use question::{NumberRange, Question, QuestionKind, ScaleRange, TextRules};
pub use response::{Answers, Response, is_blank};
pub use schema::{
    MAX_SCHEMA_DESCRIPTION_CHARS, MAX_SCHEMA_TITLE_CHARS, ResearchSchema, check_schema_draft,
};
pub use study::Study;
