use clap::{Parser, ValueEnum};
use toplist::{OutputFormat, ScrapeConfig, SortOrder};

#[derive(Parser, Debug)]
#[command(name = "toplist")]
#[command(about = "Fetch, filter and save a ranked list of titles from a web page")]
#[command(version)]
pub struct Args {
    /// URL of the list page
    #[arg(short, long)]
    pub url: Option<String>,

    /// Output file path
    #[arg(short, long)]
    pub output: Option<String>,

    /// Filter entries by a keyword (case-insensitive substring on titles)
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Sort by rank or title
    #[arg(short, long, value_enum)]
    pub sort: Option<SortArg>,

    /// Display the sorted list in the console
    #[arg(short, long)]
    pub display: bool,

    /// Output file format
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Print the number of loaded entries before filtering
    #[arg(short, long)]
    pub verbose: bool,

    /// Check whether the list has been updated since the last run
    #[arg(long)]
    pub check_updates: bool,

    /// File holding the fingerprint of the last seen page content
    #[arg(long)]
    pub cache_file: Option<String>,

    /// JSON configuration file used as the baseline for the flags above
    #[arg(long)]
    pub config: Option<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Rank,
    Title,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Txt,
    Json,
    Csv,
}

/// Convert from the CLI sort argument to the internal sort order
pub fn convert_sort(arg: SortArg) -> SortOrder {
    match arg {
        SortArg::Rank => SortOrder::Rank,
        SortArg::Title => SortOrder::Title,
    }
}

/// Convert from the CLI format argument to the internal output format
pub fn convert_format(arg: FormatArg) -> OutputFormat {
    match arg {
        FormatArg::Txt => OutputFormat::Txt,
        FormatArg::Json => OutputFormat::Json,
        FormatArg::Csv => OutputFormat::Csv,
    }
}

/// Fold the parsed flags into a configuration, starting from the
/// config-file baseline when one was given. Explicit flags win.
pub fn resolve_config(args: &Args) -> Result<ScrapeConfig, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => ScrapeConfig::from_file(path)?,
        None => ScrapeConfig::default(),
    };

    if let Some(url) = &args.url {
        config.url = url.clone();
    }
    if let Some(output) = &args.output {
        config.output = output.clone();
    }
    if let Some(filter) = &args.filter {
        config.filter = Some(filter.clone());
    }
    if let Some(sort) = args.sort {
        config.sort = convert_sort(sort);
    }
    if let Some(format) = args.format {
        config.format = convert_format(format);
    }
    if let Some(cache_file) = &args.cache_file {
        config.cache_file = cache_file.clone();
    }

    Ok(config)
}
