// Re-export modules
pub mod cache;
pub mod config;
pub mod fetch;
pub mod output;
pub mod parsers;
pub mod process;
pub mod results;

// Re-export commonly used types for convenience
pub use cache::UpdateStatus;
pub use config::ScrapeConfig;
pub use output::OutputFormat;
pub use parsers::Extraction;
pub use process::SortOrder;
pub use results::Record;

use std::error::Error;
use std::path::Path;

/// Builder for scraping a ranked list page into records
pub struct ListPage {
    config: ScrapeConfig,
}

impl ListPage {
    /// Create a new builder for the given source page
    pub fn new(url: &str) -> Self {
        let config = ScrapeConfig {
            url: url.to_string(),
            ..ScrapeConfig::default()
        };
        Self { config }
    }

    /// Create a builder from a complete configuration
    pub fn with_config(config: ScrapeConfig) -> Self {
        Self { config }
    }

    /// Load the configuration from a JSON file
    pub fn with_config_file(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        Ok(Self::with_config(ScrapeConfig::from_file(path)?))
    }

    /// Set the title filter keyword
    pub fn with_filter(mut self, keyword: &str) -> Self {
        self.config.filter = Some(keyword.to_string());
        self
    }

    /// Set the sort order
    pub fn with_sort(mut self, order: SortOrder) -> Self {
        self.config.sort = order;
        self
    }

    /// Access the effective configuration
    pub fn config(&self) -> &ScrapeConfig {
        &self.config
    }

    /// Check whether the source page changed since the stored fingerprint
    pub fn check_for_updates(&self) -> Result<UpdateStatus, Box<dyn Error>> {
        cache::check_for_updates(&self.config.url, &self.config.cache_file)
    }

    /// Fetch the source page and extract the raw entry sequences
    pub fn load(&self) -> Result<Extraction, Box<dyn Error>> {
        let body = fetch::fetch_text(&self.config.url)?;
        parsers::extract(&body, &self.config.extract)
    }

    /// Filter, pair, number and sort the extracted entries
    pub fn process(&self, extraction: Extraction) -> Vec<Record> {
        let mut records = process::build_records(
            extraction.titles,
            extraction.descriptions,
            self.config.filter.as_deref(),
        );
        process::sort_records(&mut records, self.config.sort);
        records
    }

    /// Fetch, extract and process in one call
    pub fn scrape(&self) -> Result<Vec<Record>, Box<dyn Error>> {
        Ok(self.process(self.load()?))
    }
}
