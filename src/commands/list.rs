use anyhow::Result;

use crate::db::Database;
use crate::output;

pub fn run(json: bool, db: &Database) -> Result<()> {
    let designs = db.list_designs()?;
    output::design_list(&designs, json)
}
