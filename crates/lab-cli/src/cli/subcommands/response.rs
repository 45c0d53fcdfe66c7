use clap::Subcommand;

/// Response commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ResponseCommands {
    /// Validate and store a response for an active study.
    Submit {
        study_id: String,
        /// Answers: inline JSON object, a file path, or `-` for stdin.
        #[arg(long)]
        answers: String,
    },
    /// List a study's responses in submission order.
    List { study_id: String },
    /// Delete one response.
    Delete { id: String },
}
