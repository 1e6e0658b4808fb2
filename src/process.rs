use serde::{Deserialize, Serialize};

use crate::results::Record;

/// Sort order for the processed list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending rank, the order ranks were assigned in
    Rank,
    /// Ascending lexicographic title
    Title,
}

/// Build ranked records from the extracted title and description
/// sequences.
///
/// The source page lists entries in descending rank order, so both
/// sequences are reversed before pairing. The filter keyword is applied
/// to the raw extracted entries first; ranks are assigned after that
/// and are always contiguous from 1, so a filtered list no longer
/// reflects original page positions.
pub fn build_records(
    titles: Vec<String>,
    descriptions: Vec<String>,
    filter: Option<&str>,
) -> Vec<Record> {
    let (titles, descriptions) = match filter {
        Some(keyword) => filter_entries(titles, descriptions, keyword),
        None => (titles, descriptions),
    };

    titles
        .into_iter()
        .rev()
        .zip(descriptions.into_iter().rev())
        .enumerate()
        .map(|(i, (title, description))| Record::new(i + 1, title, description))
        .collect()
}

/// Drop every entry whose title does not contain the keyword,
/// case-insensitively. The positionally matching description is dropped
/// with it, keeping the two sequences aligned.
fn filter_entries(
    titles: Vec<String>,
    descriptions: Vec<String>,
    keyword: &str,
) -> (Vec<String>, Vec<String>) {
    let keyword = keyword.to_lowercase();
    let mut kept_titles = Vec::new();
    let mut kept_descriptions = Vec::new();

    for (i, title) in titles.into_iter().enumerate() {
        if title.to_lowercase().contains(&keyword) {
            if let Some(description) = descriptions.get(i) {
                kept_descriptions.push(description.clone());
            }
            kept_titles.push(title);
        }
    }

    (kept_titles, kept_descriptions)
}

/// Sort records in place by the requested order (stable)
pub fn sort_records(records: &mut [Record], order: SortOrder) {
    match order {
        SortOrder::Rank => records.sort_by_key(|r| r.rank),
        SortOrder::Title => records.sort_by(|a, b| a.title.cmp(&b.title)),
    }
}
