//! Add, list and remove checkpoints

use super::Context;
use crate::util;
use anyhow::Result;
use owo_colors::OwoColorize;

pub fn run_add(ctx: &Context, name: &str, path: &str) -> Result<()> {
    let (replaced, session) = ctx.edit_checkpoints(|session| session.add_checkpoint(name, path))?;

    println!(
        "{} Checkpoint '{}' added for path '{}'",
        "✓".green(),
        name.yellow(),
        path.cyan()
    );
    if let Some(previous) = replaced {
        println!("  {}", format!("(replaced '{}')", previous).dimmed());
    }
    if session.read(name).is_err() {
        println!(
            "  {}",
            "Note: path does not resolve in the current document".yellow()
        );
    }
    Ok(())
}

pub fn run_list(ctx: &Context, sequences_only: bool) -> Result<()> {
    let session = ctx.load()?;

    let entries: Vec<(&str, &str)> = if sequences_only {
        session.sequence_checkpoints()
    } else {
        session.checkpoints().iter().collect()
    };

    if entries.is_empty() {
        if sequences_only {
            println!("{}", "No checkpoints pointing to sequences".dimmed());
        } else {
            println!("{}", "No checkpoints yet".dimmed());
            println!("  {}", "Tip: add one with 'wp checkpoint add <name> <path>'".dimmed());
        }
        return Ok(());
    }

    for (i, (name, path)) in entries.iter().enumerate() {
        let kind = match session.read_path(path) {
            Ok(value) => util::kind_label(value).dimmed().to_string(),
            Err(_) => "unresolved".red().to_string(),
        };
        println!("{}. {} → {} {}", i + 1, name.yellow(), path.cyan(), kind);
    }
    Ok(())
}

pub fn run_rm(ctx: &Context, name: &str) -> Result<()> {
    let (path, _) = ctx.edit_checkpoints(|session| session.remove_checkpoint(name))?;

    println!(
        "{} Removed checkpoint '{}' ({})",
        "✓".green(),
        name.yellow(),
        path.dimmed()
    );
    Ok(())
}
