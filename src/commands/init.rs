use std::fs;

use anyhow::{bail, Context, Result};

use crate::db::Database;
use crate::{output, DESIGNBOOK_DIR};

pub fn run() -> Result<()> {
    let dir = std::env::current_dir()
        .context("Failed to determine current directory")?
        .join(DESIGNBOOK_DIR);

    if dir.exists() {
        bail!("Already initialized: {}", dir.display());
    }

    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let db = Database::open(&dir)?;
    db.init_schema()?;

    output::initialized(&dir)
}
