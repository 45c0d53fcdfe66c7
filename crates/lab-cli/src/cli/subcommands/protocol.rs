use clap::Subcommand;

/// Protocol catalog commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProtocolCommands {
    /// Register a protocol.
    Add {
        /// Unique code, e.g. "ASTM D638".
        #[arg(long)]
        code: String,
        #[arg(long)]
        title: String,
        /// iso, astm, other
        #[arg(long)]
        body: String,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Get a protocol by id or code.
    Get { id: String },
    /// List or search protocols.
    List {
        #[arg(long)]
        body: Option<String>,
        /// Substring match on code, title or category.
        #[arg(long)]
        search: Option<String>,
    },
}
