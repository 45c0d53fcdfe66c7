mod protocol;
mod response;
mod schema;
mod study;

pub use protocol::ProtocolCommands;
pub use response::ResponseCommands;
pub use schema::SchemaCommands;
pub use study::StudyCommands;
