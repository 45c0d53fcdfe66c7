//! # lab-core
//!
//! Core types, ID prefixes, and error types for protolab.
//!
//! This crate provides the foundational types shared across all protolab crates:
//! - Entity structs for schemas, studies, responses, and protocols
//! - The polymorphic `Question` model and its JSON string codec
//! - Status and category enums
//! - ID prefix constants
//! - Statistics report types consumed by the UI
//! - Store traits the analysis layer is written against

pub mod codec;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod reports;
pub mod store;
