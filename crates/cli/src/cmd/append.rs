//! Append a value to a sequence

use super::Context;
use crate::util;
use anyhow::Result;
use owo_colors::OwoColorize;

pub fn run(ctx: &Context, checkpoint: &str, value: &str) -> Result<()> {
    let value = util::parse_json_or_string(value);
    let rendered = util::truncate(&util::format_value(&value), 80);

    ctx.edit_document(|session| session.append_to_sequence(checkpoint, value))?;

    println!("{} Appended to '{}': {}", "✓".green(), checkpoint.yellow(), rendered);
    Ok(())
}
