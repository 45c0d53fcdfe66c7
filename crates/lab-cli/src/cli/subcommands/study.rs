use clap::Subcommand;

/// Study commands.
#[derive(Clone, Debug, Subcommand)]
pub enum StudyCommands {
    /// Create a study against an existing schema.
    Create {
        #[arg(long)]
        schema: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        /// draft (default), active, paused, completed
        #[arg(long)]
        status: Option<String>,
        /// `YYYY-MM-DD` or RFC 3339
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
    },
    /// Get a study with its response count.
    Get { id: String },
    /// List studies, newest first.
    List {
        #[arg(long)]
        status: Option<String>,
    },
    /// Move a study to another status.
    Status { id: String, status: String },
    /// Delete a study and all its responses.
    Delete { id: String },
}
