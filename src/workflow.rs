use anyhow::{bail, Result};
use serde::Serialize;
use strum::AsRefStr;

use crate::db::Database;
use crate::models::Design;
use crate::similarity::{self, SimilarityVerdict};

/// Result of one add-design attempt. Declines are normal outcomes, not
/// errors: the similarity check is advisory and the human said no.
#[derive(Debug, Clone, Serialize, AsRefStr)]
#[serde(rename_all = "snake_case", tag = "outcome")]
#[strum(serialize_all = "snake_case")]
pub enum AddOutcome {
    Added { design: Design },
    DeclinedNumericDuplicate { verdict: SimilarityVerdict },
    DeclinedSimilar { verdict: SimilarityVerdict },
}

/// Add a design to the catalog, surfacing duplicate conflicts through the
/// caller-supplied `confirm` callback before anything is written.
///
/// The callback receives a human-readable question and answers whether to
/// proceed; a terminal caller prompts, a scripted caller passes `|_| true`.
/// Numeric conflicts are confirmed first, then fuzzy matches. The candidate
/// must be non-empty after trimming; that is the only failure here.
pub fn add_design(
    db: &mut Database,
    name: &str,
    threshold: f64,
    mut confirm: impl FnMut(&str) -> bool,
) -> Result<AddOutcome> {
    let name = name.trim();
    if name.is_empty() {
        bail!("Design name is required");
    }

    // Fresh snapshot per check; the store is the source of truth.
    let catalog = db.design_names()?;
    let verdict = similarity::evaluate_with_threshold(name, &catalog, threshold);

    if verdict.is_numeric_duplicate {
        let question = format!(
            "Design number already exists as: {}. Add anyway?",
            verdict.conflicting_numeric_matches.join(", ")
        );
        if !confirm(&question) {
            return Ok(AddOutcome::DeclinedNumericDuplicate { verdict });
        }
    }

    if !verdict.similar_matches.is_empty() {
        let question = format!(
            "Similar designs found: {}. Add anyway?",
            verdict.similar_matches.join(", ")
        );
        if !confirm(&question) {
            return Ok(AddOutcome::DeclinedSimilar { verdict });
        }
    }

    let design = Design::new(name);
    db.add_design(&design)?;
    Ok(AddOutcome::Added { design })
}
