//! ID prefix constants.
//!
//! IDs are formatted as `{prefix}-{8 hex chars}`, e.g. `stu-a3f8b2c1`.
//! The random part is generated by the store.

pub const PREFIX_SCHEMA: &str = "sch";
pub const PREFIX_STUDY: &str = "stu";
pub const PREFIX_RESPONSE: &str = "rsp";
pub const PREFIX_PROTOCOL: &str = "prt";

/// Every prefix in use, for tests and id sanity checks.
pub const ALL_PREFIXES: &[&str] = &[
    PREFIX_SCHEMA,
    PREFIX_STUDY,
    PREFIX_RESPONSE,
    PREFIX_PROTOCOL,
];
