//! CLI interface for export conversion
use std::path::Path;

pub fn execute(source: &Path, destination: &Path, last_id: u64) -> anyhow::Result<()> {
    println!("Converting {source:?} to {destination:?}");

    let summary = crate::converter::convert_export(source, destination, last_id)?;

    println!(
        "Wrote {} post(s), {} page(s), {} comment(s):",
        summary.posts, summary.pages, summary.comments
    );
    for path in &summary.files {
        println!("  {}", path.display());
    }

    Ok(())
}
