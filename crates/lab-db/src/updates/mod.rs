//! Partial-update builders for the mutable entities.
//!
//! `None` leaves a column untouched. For nullable columns the inner `Option`
//! distinguishes "clear" (`Some(None)`) from "set" (`Some(Some(_))`).

pub mod schema;
pub mod study;
