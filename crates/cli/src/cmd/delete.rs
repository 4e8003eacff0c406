//! Delete a value from a sequence

use super::Context;
use crate::util;
use anyhow::Result;
use owo_colors::OwoColorize;

pub fn run(ctx: &Context, checkpoint: &str, index: usize) -> Result<()> {
    let removed = ctx.edit_document(|session| session.delete_at(checkpoint, index))?;

    println!(
        "{} Deleted from '{}' at position {}: {}",
        "✓".green(),
        checkpoint.yellow(),
        index.to_string().cyan(),
        util::truncate(&util::format_value(&removed), 80)
    );
    Ok(())
}
