//! Write the document to another file

use super::Context;
use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::Path;

pub fn run(ctx: &Context, file: &Path) -> Result<()> {
    let session = ctx.load()?;
    checkpoints::files::save_document_to(&session, file)?;

    println!("{} Exported document to {}", "✓".green(), file.display().cyan());
    Ok(())
}
