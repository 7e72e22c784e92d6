use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use fs2::FileExt;

use crate::models::Design;

const DESIGNS_FILE: &str = "designs.jsonl";

pub struct Database {
    path: PathBuf,
    designs: HashMap<String, Design>,
}

impl Database {
    /// Open an existing database from the given directory
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            bail!("Database directory does not exist: {}", path.display());
        }

        let mut db = Self {
            path,
            designs: HashMap::new(),
        };

        db.load()?;
        Ok(db)
    }

    /// Initialize a new database (creates an empty designs file)
    pub fn init_schema(&self) -> Result<()> {
        let designs_path = self.path.join(DESIGNS_FILE);

        if !designs_path.exists() {
            File::create(&designs_path).context("Failed to create designs.jsonl")?;
        }

        Ok(())
    }

    /// Load all design records from the JSONL file into memory
    fn load(&mut self) -> Result<()> {
        let designs_path = self.path.join(DESIGNS_FILE);
        if !designs_path.exists() {
            return Ok(());
        }

        let file = File::open(&designs_path).context("Failed to open designs.jsonl")?;
        let reader = BufReader::new(file);

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.context("Failed to read line from designs.jsonl")?;
            if line.trim().is_empty() {
                continue;
            }

            let design: Design = serde_json::from_str(&line)
                .with_context(|| format!("Failed to parse design at line {}", line_num + 1))?;

            self.designs.insert(design.id.clone(), design);
        }

        Ok(())
    }

    /// Write all design records to disk atomically
    fn persist_designs(&self) -> Result<()> {
        let temp_path = self.path.join("designs.jsonl.tmp");
        let final_path = self.path.join(DESIGNS_FILE);

        let mut file =
            File::create(&temp_path).context("Failed to create temporary designs file")?;

        file.lock_exclusive()
            .context("Failed to acquire lock on designs file")?;

        for design in self.designs.values() {
            serde_json::to_writer(&mut file, design)?;
            writeln!(file)?;
        }

        file.sync_all().context("Failed to sync designs file")?;
        file.unlock().context("Failed to unlock designs file")?;

        fs::rename(&temp_path, &final_path).context("Failed to rename designs file")?;

        Ok(())
    }

    /// Insert a design record. Record IDs are unique; names are deliberately
    /// not checked here — duplicate prevention is the advisory similarity
    /// check upstream, confirmed by a human.
    pub fn add_design(&mut self, design: &Design) -> Result<()> {
        if self.designs.contains_key(&design.id) {
            bail!("Design record already exists: {}", design.id);
        }

        self.designs.insert(design.id.clone(), design.clone());
        self.persist_designs()?;

        Ok(())
    }

    pub fn get_design(&self, id: &str) -> Result<Option<Design>> {
        Ok(self.designs.get(id).cloned())
    }

    /// All records sharing a stored name, oldest first.
    pub fn find_by_name(&self, name: &str) -> Result<Vec<Design>> {
        let mut designs: Vec<Design> = self
            .designs
            .values()
            .filter(|d| d.name == name)
            .cloned()
            .collect();
        designs.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(designs)
    }

    pub fn list_designs(&self) -> Result<Vec<Design>> {
        let mut designs: Vec<Design> = self.designs.values().cloned().collect();
        designs.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(designs)
    }

    /// Read-only catalog snapshot handed to the similarity checker,
    /// ordered by creation time.
    pub fn design_names(&self) -> Result<Vec<String>> {
        Ok(self
            .list_designs()?
            .into_iter()
            .map(|d| d.name)
            .collect())
    }
}
