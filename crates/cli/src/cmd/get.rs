//! Print the value a checkpoint points at

use super::Context;
use anyhow::Result;

pub fn run(ctx: &Context, checkpoint: &str) -> Result<()> {
    let session = ctx.load()?;
    let value = session.read(checkpoint)?;

    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
