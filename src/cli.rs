use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "dbook",
    version,
    about = "Design catalog register with duplicate and near-duplicate detection"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a .designbook/ directory in the current directory
    Init,
    /// Add a design to the catalog, confirming any duplicate conflicts
    Add {
        /// Design identifier (normalized to uppercase on insert)
        name: String,
        /// Accept all duplicate confirmations without prompting
        #[arg(long)]
        yes: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check a candidate identifier against the catalog without inserting
    Check {
        /// Candidate design identifier
        name: String,
        /// Override the similarity threshold percentage for this check
        #[arg(long)]
        threshold: Option<f64>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List designs in the catalog
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
