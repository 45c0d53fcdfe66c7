use clap::Subcommand;

/// Research schema commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SchemaCommands {
    /// Create a schema.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        /// Question list: inline JSON array, a file path, or `-` for stdin.
        #[arg(long)]
        questions: String,
    },
    /// Get a schema with its questions.
    Get { id: String },
    /// List schemas, newest first.
    List,
    /// Replace a schema's whole question list.
    Replace {
        id: String,
        #[arg(long)]
        questions: String,
    },
    /// Delete a schema. Studies using it are kept.
    Delete { id: String },
}
