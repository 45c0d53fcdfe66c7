//! Repository modules implementing CRUD operations for every protolab entity.
//!
//! Each module adds methods to `LabService` via `impl LabService` blocks.

pub mod protocol;
pub mod response;
pub mod schema;
pub mod study;
