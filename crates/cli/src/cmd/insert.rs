//! Insert an element into a sequence with index renumbering

use super::Context;
use crate::util;
use anyhow::{Context as _, Result};
use owo_colors::OwoColorize;

pub fn run(
    ctx: &Context,
    checkpoint: &str,
    element: &str,
    position: Option<usize>,
    index_field: Option<&str>,
) -> Result<()> {
    let element = util::parse_json_arg(element).context("Element must be valid JSON")?;
    let index_field = index_field.unwrap_or(&ctx.index_field);
    let rendered = util::truncate(&util::format_value(&element), 80);

    let at = ctx.edit_document(|session| {
        session.insert_into_sequence(checkpoint, element, position, index_field)
    })?;

    println!(
        "{} Inserted into '{}' at position {}: {}",
        "✓".green(),
        checkpoint.yellow(),
        at.to_string().cyan(),
        rendered
    );
    Ok(())
}
