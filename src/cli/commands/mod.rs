use std::path::PathBuf;

use clap::Subcommand;

pub mod convert;

#[derive(Subcommand)]
pub enum Commands {
    /// Convert an OverBlog export into WordPress import files
    Convert {
        /// Source export file (.xml)
        #[arg(short, long)]
        source: PathBuf,

        /// Output directory for the three import files
        #[arg(short, long)]
        destination: PathBuf,

        /// Last id already used in the target WordPress database
        #[arg(short, long, default_value_t = 0)]
        last_id: u64,
    },
}

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying command fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Convert {
                source,
                destination,
                last_id,
            } => convert::execute(source, destination, *last_id),
        }
    }
}
