use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::generate_id;

/// A design record in the catalog. The identifier is normalized to uppercase
/// before persistence; comparison against candidates happens on the stored
/// form. Names are NOT unique at the storage level — duplicates are prevented
/// only by the advisory similarity check plus human judgment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Design {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Design {
    /// Build a new record from a trimmed identifier, uppercasing it.
    pub fn new(name: &str) -> Self {
        let now = Utc::now();
        Self {
            id: generate_id(),
            name: name.to_uppercase(),
            created_at: now,
            updated_at: now,
        }
    }
}
