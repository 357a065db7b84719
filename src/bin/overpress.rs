//! Overpress command-line binary

fn main() -> anyhow::Result<()> {
    overpress::cli::run_cli()
}
