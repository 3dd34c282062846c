use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "pdbkit", version, about = "Utilities for the PDB data release pipeline", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Group residue ranges into rows of non-overlapping segments
    GroupRanges {
        /// Input file with one range per line (start:stop or start-stop)
        #[arg(short, long)]
        input: String,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Output format: text or json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Write the list of release entry files under a repository tree
    MakePathList {
        /// Repository root to scan
        #[arg(short, long)]
        repo_path: String,

        /// Path list output file
        #[arg(short, long)]
        output: String,

        /// Optional file with one entry id per line to skip
        #[arg(long)]
        skip_file: Option<String>,
    },

    /// Decode XML/HTML character references in a text file
    Unescape {
        /// Input text file
        #[arg(short, long)]
        input: String,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}
