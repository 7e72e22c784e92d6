use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;
use console::{style, Term};
use serde::Serialize;
use textwrap::wrap;

use crate::models::Design;
use crate::similarity::{self, CheckStatus, SimilarityVerdict};
use crate::workflow::AddOutcome;

/// Print as JSON if `json` is true, otherwise call `human` with a writer.
fn json_or<T: Serialize + ?Sized>(
    value: &T,
    json: bool,
    human: impl FnOnce(&mut dyn Write) -> Result<()>,
) -> Result<()> {
    let mut stdout = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut stdout, value)?;
        writeln!(stdout)?;
    } else {
        human(&mut stdout)?;
    }
    Ok(())
}

fn terminal_width() -> usize {
    let (_, cols) = Term::stdout().size();
    cols as usize
}

/// Write a labeled field, wrapping long or multiline values.
///
/// Short values print inline: `{prefix}{label}: {value}`
/// Long or multiline values wrap onto indented continuation lines.
pub fn write_field(w: &mut dyn Write, prefix: &str, label: &str, value: &str) -> Result<()> {
    let width = terminal_width();
    let inline_prefix = format!("{prefix}{label}: ");
    let inline_len = inline_prefix.len() + value.len();

    if !value.contains('\n') && inline_len <= width {
        writeln!(w, "{inline_prefix}{value}")?;
    } else {
        writeln!(w, "{prefix}{label}:")?;
        let continuation = format!("{prefix}  ");
        let wrap_width = width.saturating_sub(continuation.len()).max(20);
        for paragraph in value.split('\n') {
            if paragraph.is_empty() {
                writeln!(w)?;
            } else {
                for line in wrap(paragraph, wrap_width) {
                    writeln!(w, "{continuation}{line}")?;
                }
            }
        }
    }
    Ok(())
}

// -- Init --

pub fn initialized(dir: &Path) -> Result<()> {
    let mut w = io::stdout().lock();
    writeln!(
        w,
        "{} {}",
        style("Initialized designbook in:").green(),
        style(dir.display()).cyan().bold()
    )?;
    Ok(())
}

// -- Add outputs --

pub fn design_added(design: &Design, json: bool) -> Result<()> {
    json_or(design, json, |w| {
        writeln!(
            w,
            "{} {}",
            style("Added design:").green(),
            style(&design.name).cyan().bold()
        )?;
        writeln!(w, "  Record: {}", style(&design.id).dim())?;
        Ok(())
    })
}

pub fn add_declined(outcome: &AddOutcome, json: bool) -> Result<()> {
    json_or(outcome, json, |w| {
        match outcome {
            AddOutcome::DeclinedNumericDuplicate { verdict } => {
                writeln!(
                    w,
                    "{}",
                    style("Not added: design number already in the catalog.").red()
                )?;
                write_field(
                    w,
                    "  ",
                    "Conflicts",
                    &verdict.conflicting_numeric_matches.join(", "),
                )?;
            }
            AddOutcome::DeclinedSimilar { verdict } => {
                writeln!(
                    w,
                    "{}",
                    style("Not added: similar designs already in the catalog.").red()
                )?;
                write_field(w, "  ", "Similar", &verdict.similar_matches.join(", "))?;
            }
            AddOutcome::Added { .. } => {}
        }
        Ok(())
    })
}

// -- Check outputs --

#[derive(Serialize)]
struct CheckReport<'a> {
    candidate: &'a str,
    status: CheckStatus,
    #[serde(flatten)]
    verdict: &'a SimilarityVerdict,
}

pub fn check_report(candidate: &str, verdict: &SimilarityVerdict, json: bool) -> Result<()> {
    let report = CheckReport {
        candidate,
        status: verdict.status(),
        verdict,
    };

    json_or(&report, json, |w| {
        writeln!(
            w,
            "Candidate: {} [{}]",
            style(candidate).cyan().bold(),
            style(report.status.as_ref()).yellow()
        )?;

        if verdict.is_clear() {
            writeln!(w, "  No conflicts found.")?;
            return Ok(());
        }

        if verdict.is_numeric_duplicate {
            writeln!(w)?;
            writeln!(w, "{}", style("Numeric duplicates:").bold())?;
            for name in &verdict.conflicting_numeric_matches {
                writeln!(w, "  - {}", style(name).red())?;
            }
        }

        if !verdict.similar_matches.is_empty() {
            writeln!(w)?;
            writeln!(w, "{}", style("Similar designs:").bold())?;
            for name in &verdict.similar_matches {
                let score = similarity::similarity(name, candidate);
                writeln!(w, "  - {} ({score:.1}%)", style(name).yellow())?;
            }
        }

        Ok(())
    })
}

// -- List outputs --

pub fn design_list(designs: &[Design], json: bool) -> Result<()> {
    json_or(designs, json, |w| {
        if designs.is_empty() {
            writeln!(w, "No designs found.")?;
            return Ok(());
        }

        writeln!(w, "{} design(s):\n", style(designs.len()).green().bold())?;

        for design in designs {
            writeln!(w, "{}", style(&design.name).cyan().bold())?;
            writeln!(w, "  Record: {}", style(&design.id).dim())?;
            writeln!(w, "  Created: {}", design.created_at)?;
        }
        Ok(())
    })
}
