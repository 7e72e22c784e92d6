pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod id;
pub mod models;
pub mod output;
pub mod similarity;
pub mod workflow;

use anyhow::{anyhow, Context, Result};
use std::path::PathBuf;

use cli::{Cli, Commands};
use config::Config;
use db::Database;

pub const DESIGNBOOK_DIR: &str = ".designbook";
pub const REDIRECT_FILE: &str = "redirect";

/// Finds the `.designbook/` directory by walking up from the current directory.
/// Returns `None` if no `.designbook/` directory is found.
pub fn find_designbook_dir() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    let mut dir = current_dir.as_path();

    loop {
        let book_path = dir.join(DESIGNBOOK_DIR);
        if book_path.is_dir() {
            return Some(book_path);
        }

        dir = dir.parent()?;
    }
}

/// Resolves the final designbook directory, following any redirect file.
/// A redirect file contains a path (absolute or relative) to another
/// `.designbook/` directory, for catalogs shared between checkouts.
pub fn resolve_designbook_dir() -> Option<PathBuf> {
    let book_dir = find_designbook_dir()?;
    let redirect_path = book_dir.join(REDIRECT_FILE);

    if redirect_path.is_file() {
        let target = std::fs::read_to_string(&redirect_path).ok()?;
        let target = target.trim();

        let target_path = if PathBuf::from(target).is_absolute() {
            PathBuf::from(target)
        } else {
            book_dir.parent()?.join(target)
        };

        if target_path.is_dir() {
            return Some(target_path);
        }
    }

    Some(book_dir)
}

fn ensure_initialized() -> Result<(PathBuf, Database)> {
    let dir = resolve_designbook_dir()
        .ok_or_else(|| anyhow!("designbook not initialized. Run 'dbook init' first."))?;

    let db = Database::open(&dir).context("Failed to open design catalog")?;
    Ok((dir, db))
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init => commands::init::run(),
        Commands::Add { name, yes, json } => {
            let (dir, mut db) = ensure_initialized()?;
            let config = Config::load(&dir)?;
            commands::add::run(name, yes, json, config.similarity_threshold, &mut db)
        }
        Commands::Check {
            name,
            threshold,
            json,
        } => {
            let (dir, db) = ensure_initialized()?;
            let config = Config::load(&dir)?;
            let threshold = threshold.unwrap_or(config.similarity_threshold);
            commands::check::run(name, threshold, json, &db)
        }
        Commands::List { json } => {
            let (_, db) = ensure_initialized()?;
            commands::list::run(json, &db)
        }
    }
}
