use anyhow::{bail, Result};

use crate::db::Database;
use crate::output;
use crate::similarity;

pub fn run(name: String, threshold: f64, json: bool, db: &Database) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        bail!("Design name is required");
    }

    let catalog = db.design_names()?;
    let verdict = similarity::evaluate_with_threshold(name, &catalog, threshold);

    output::check_report(name, &verdict, json)
}
