use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::output::OutputFormat;
use crate::parsers::ExtractRule;
use crate::process::SortOrder;

/// Configuration for one scrape run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// Source page listing the ranked entries
    #[serde(default = "default_url")]
    pub url: String,

    /// Destination file for the serialized list
    #[serde(default = "default_output")]
    pub output: String,

    /// Output serialization format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Sort order applied to the final list
    #[serde(default = "default_sort")]
    pub sort: SortOrder,

    /// Case-insensitive substring filter on entry titles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,

    /// File holding the fingerprint of the last seen page content
    #[serde(default = "default_cache_file")]
    pub cache_file: String,

    /// Selectors locating titles and descriptions on the page
    #[serde(default)]
    pub extract: ExtractRule,
}

/// Default source page
fn default_url() -> String {
    "https://www.empireonline.com/movies/features/best-movies-2/".to_string()
}

/// Default destination file
fn default_output() -> String {
    "./movies.txt".to_string()
}

/// Default output format
fn default_format() -> OutputFormat {
    OutputFormat::Txt
}

/// Default sort order
fn default_sort() -> SortOrder {
    SortOrder::Rank
}

/// Default fingerprint file
fn default_cache_file() -> String {
    "./cache.txt".to_string()
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            output: default_output(),
            format: default_format(),
            sort: default_sort(),
            filter: None,
            cache_file: default_cache_file(),
            extract: ExtractRule::default(),
        }
    }
}

impl ScrapeConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }
}
