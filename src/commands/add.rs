use anyhow::Result;
use console::{style, Term};

use crate::db::Database;
use crate::output;
use crate::workflow::{self, AddOutcome};

pub fn run(name: String, yes: bool, json: bool, threshold: f64, db: &mut Database) -> Result<()> {
    let outcome = if yes {
        workflow::add_design(db, &name, threshold, |_| true)?
    } else {
        let term = Term::stderr();
        workflow::add_design(db, &name, threshold, |question| prompt(&term, question))?
    };

    match outcome {
        AddOutcome::Added { ref design } => output::design_added(design, json)?,
        ref declined => output::add_declined(declined, json)?,
    }

    Ok(())
}

/// Ask a yes/no question on the terminal. Anything but y/yes declines,
/// matching the advisory nature of the check.
fn prompt(term: &Term, question: &str) -> bool {
    if term
        .write_str(&format!("{} [y/N] ", style(question).yellow()))
        .is_err()
    {
        return false;
    }

    match term.read_line() {
        Ok(answer) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
        Err(_) => false,
    }
}
