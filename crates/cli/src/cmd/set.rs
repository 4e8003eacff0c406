//! Update a scalar through a checkpoint

use super::Context;
use crate::util;
use anyhow::Result;
use owo_colors::OwoColorize;

pub fn run(ctx: &Context, checkpoint: &str, value: &str) -> Result<()> {
    let (old, new) = ctx.edit_document(|session| session.update_scalar(checkpoint, value))?;

    println!(
        "{} Updated '{}' from {} to {}",
        "✓".green(),
        checkpoint.yellow(),
        util::format_value(&old).dimmed(),
        util::format_value(&new).cyan()
    );
    Ok(())
}
