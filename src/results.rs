use serde::{Deserialize, Serialize};

/// One ranked entry scraped from the source page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// 1-based position in the processed list (assigned, not scraped)
    pub rank: usize,

    /// Entry title
    pub title: String,

    /// Entry description (may be empty)
    pub description: String,
}

impl Record {
    /// Create a new record
    pub fn new(rank: usize, title: String, description: String) -> Self {
        Self {
            rank,
            title,
            description,
        }
    }
}
