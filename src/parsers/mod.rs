pub mod html;


use serde::{Deserialize, Serialize};
use std::error::Error;

/// Selectors locating the ranked entries on the source page.
///
/// The defaults match the supported list site's markup. Alternate
/// sources can supply their own selectors through configuration; the
/// contract (two parallel ordered sequences) stays the same.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractRule {
    /// Selector for entry titles
    #[serde(default = "default_title_selector")]
    pub title_selector: String,

    /// Selector for entry descriptions
    #[serde(default = "default_description_selector")]
    pub description_selector: String,
}

/// Default title selector
fn default_title_selector() -> String {
    "h3.title".to_string()
}

/// Default description selector (every paragraph on the page)
fn default_description_selector() -> String {
    "p".to_string()
}

impl Default for ExtractRule {
    fn default() -> Self {
        Self {
            title_selector: default_title_selector(),
            description_selector: default_description_selector(),
        }
    }
}

/// Parallel sequences of title and description text, in document order
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Text of every element matching the title selector
    pub titles: Vec<String>,

    /// Text of every element matching the description selector
    pub descriptions: Vec<String>,
}

/// Extract the title and description sequences from raw page content
pub fn extract(content: &str, rule: &ExtractRule) -> Result<Extraction, Box<dyn Error>> {
    html::extract(content, rule)
}
