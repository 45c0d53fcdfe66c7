pub mod dispatch;
pub mod protocol;
pub mod response;
pub mod schema;
pub mod shared;
pub mod stats;
pub mod study;
pub mod validate;
