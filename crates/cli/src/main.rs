//! Waypoint CLI - wp command

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

mod cmd;
mod config;
mod locks;
mod util;

/// Waypoint - edit JSON documents through named checkpoints
#[derive(Parser)]
#[command(name = "wp")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Document file (overrides config)
    #[arg(long, global = true)]
    document: Option<PathBuf>,

    /// Checkpoint file (overrides config)
    #[arg(long, global = true)]
    checkpoints: Option<PathBuf>,

    /// Config file (default: ./waypoint.toml, then the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the value a checkpoint points at
    Get {
        /// Checkpoint name
        checkpoint: String,
    },
    /// Update a number or string, keeping its type
    Set {
        /// Checkpoint name
        checkpoint: String,
        /// New value
        value: String,
    },
    /// Insert a JSON element into a sequence and renumber its index field
    Insert {
        /// Checkpoint name
        checkpoint: String,
        /// Element as JSON (e.g. '{"name": "x"}')
        element: String,
        /// Position to insert at (default: end)
        #[arg(long)]
        at: Option<usize>,
        /// Index field to renumber (default from config: "index")
        #[arg(long)]
        index_field: Option<String>,
    },
    /// Remove an element from a sequence and renumber its index field
    Remove {
        /// Checkpoint name
        checkpoint: String,
        /// Position of the element to remove
        position: usize,
        /// Index field to renumber (default from config: "index")
        #[arg(long, conflicts_with = "no_reindex")]
        index_field: Option<String>,
        /// Leave index fields as they are
        #[arg(long)]
        no_reindex: bool,
    },
    /// Append a value to a sequence (JSON, or plain text)
    Append {
        /// Checkpoint name
        checkpoint: String,
        /// Value to append
        value: String,
    },
    /// Delete a value from a sequence without renumbering
    Delete {
        /// Checkpoint name
        checkpoint: String,
        /// Position of the value to delete
        index: usize,
    },
    /// Manage checkpoints
    #[command(subcommand)]
    Checkpoint(CheckpointCommands),
    /// List the locations a checkpoint can point at
    Paths,
    /// Write the document to another file
    Export {
        /// Output file
        file: PathBuf,
    },
    /// View and edit configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum CheckpointCommands {
    /// Bind a name to a path expression (e.g. $.user.hobbies)
    Add {
        /// Checkpoint name
        name: String,
        /// Path expression
        path: String,
    },
    /// List checkpoints
    List {
        /// Only checkpoints that currently point at a sequence
        #[arg(long)]
        sequences: bool,
    },
    /// Remove a checkpoint
    Rm {
        /// Checkpoint name
        name: String,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show all configuration values
    List,
    /// Show one configuration value
    Get { key: String },
    /// Set a configuration value
    Set { key: String, value: String },
    /// Show the config file path
    Path {
        /// Create the file with defaults if missing
        #[arg(long)]
        create: bool,
    },
    /// Print an example configuration
    Example,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = config::config_file_path(cli.config.as_deref());
    let config = match &config_path {
        Some(path) => config::load_from(path)?,
        None => config::Config::default(),
    };

    let level = match cli.verbose {
        0 => tracing::Level::from_str(&config.log_level)?,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let ctx = cmd::Context::new(&config, cli.document, cli.checkpoints);

    match cli.command {
        Commands::Get { checkpoint } => cmd::get::run(&ctx, &checkpoint),
        Commands::Set { checkpoint, value } => cmd::set::run(&ctx, &checkpoint, &value),
        Commands::Insert { checkpoint, element, at, index_field } => {
            cmd::insert::run(&ctx, &checkpoint, &element, at, index_field.as_deref())
        }
        Commands::Remove { checkpoint, position, index_field, no_reindex } => {
            cmd::remove::run(&ctx, &checkpoint, position, index_field.as_deref(), no_reindex)
        }
        Commands::Append { checkpoint, value } => cmd::append::run(&ctx, &checkpoint, &value),
        Commands::Delete { checkpoint, index } => cmd::delete::run(&ctx, &checkpoint, index),
        Commands::Checkpoint(checkpoint_cmd) => match checkpoint_cmd {
            CheckpointCommands::Add { name, path } => cmd::checkpoint::run_add(&ctx, &name, &path),
            CheckpointCommands::List { sequences } => cmd::checkpoint::run_list(&ctx, sequences),
            CheckpointCommands::Rm { name } => cmd::checkpoint::run_rm(&ctx, &name),
        },
        Commands::Paths => cmd::paths::run(&ctx),
        Commands::Export { file } => cmd::export::run(&ctx, &file),
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::List => cmd::config::run_list(config_path.as_deref()),
            ConfigCommands::Get { key } => cmd::config::run_get(config_path.as_deref(), &key),
            ConfigCommands::Set { key, value } => {
                cmd::config::run_set(config_path.as_deref(), &key, &value)
            }
            ConfigCommands::Path { create } => cmd::config::run_path(config_path.as_deref(), create),
            ConfigCommands::Example => cmd::config::run_example(),
        },
    }
}
