use clap::{Args, Subcommand};

use crate::cli::subcommands::{ProtocolCommands, ResponseCommands, SchemaCommands, StudyCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Research schemas (question lists).
    Schema {
        #[command(subcommand)]
        action: SchemaCommands,
    },
    /// Studies collecting responses against a schema.
    Study {
        #[command(subcommand)]
        action: StudyCommands,
    },
    /// Study responses.
    Response {
        #[command(subcommand)]
        action: ResponseCommands,
    },
    /// Check answers against a schema without storing them.
    Validate(ValidateArgs),
    /// Per-question statistics for a study.
    Stats(StatsArgs),
    /// Test-protocol catalog.
    Protocol {
        #[command(subcommand)]
        action: ProtocolCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct ValidateArgs {
    /// Schema to validate against.
    pub schema_id: String,
    /// Answers: inline JSON object, a file path, or `-` for stdin.
    #[arg(long)]
    pub answers: String,
}

#[derive(Clone, Debug, Args)]
pub struct StatsArgs {
    pub study_id: String,
    /// Skip pairwise correlations between numeric questions.
    #[arg(long)]
    pub no_correlations: bool,
}
