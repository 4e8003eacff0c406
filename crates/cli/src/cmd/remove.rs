//! Remove an element from a sequence with index renumbering

use super::Context;
use crate::util;
use anyhow::Result;
use owo_colors::OwoColorize;

pub fn run(
    ctx: &Context,
    checkpoint: &str,
    position: usize,
    index_field: Option<&str>,
    no_reindex: bool,
) -> Result<()> {
    let index_field = if no_reindex {
        None
    } else {
        Some(index_field.unwrap_or(&ctx.index_field))
    };

    let removed = ctx.edit_document(|session| {
        session.delete_from_sequence(checkpoint, position, index_field)
    })?;

    println!(
        "{} Removed from '{}' at position {}: {}",
        "✓".green(),
        checkpoint.yellow(),
        position.to_string().cyan(),
        util::truncate(&util::format_value(&removed), 80)
    );
    Ok(())
}
