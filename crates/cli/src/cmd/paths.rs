//! List the locations a checkpoint can point at

use super::Context;
use anyhow::Result;
use owo_colors::OwoColorize;
use waypoint_core::{outline, OutlineKind};

pub fn run(ctx: &Context) -> Result<()> {
    let session = ctx.load()?;
    let entries = outline(session.document());

    if entries.is_empty() {
        println!("{}", "Document is empty".dimmed());
        return Ok(());
    }

    println!("{}", "Current JSON structure:".bold());
    for (i, entry) in entries.iter().enumerate() {
        let kind = match entry.kind {
            OutlineKind::Sequence => "[Array]".yellow().to_string(),
            OutlineKind::Value => "[Value]".dimmed().to_string(),
        };
        println!("{}. {} {}", i + 1, entry.path.to_string().cyan(), kind);
    }
    Ok(())
}
