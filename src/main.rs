use clap::Parser;
use toplist::{ListPage, UpdateStatus, output};

mod args;
use args::Args;

fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let config = match args::resolve_config(&args) {
        Ok(config) => config,
        Err(e) => fail(&format!("Invalid configuration: {}", e)),
    };

    ::log::info!("Starting scrape for URL: {}", config.url);

    let page = ListPage::with_config(config);

    // Compare the page fingerprint before doing any further work
    if args.check_updates {
        match page.check_for_updates() {
            Ok(UpdateStatus::Unchanged) => {
                println!("No updates found.");
                fail("The list has not been updated. Exiting.");
            }
            Ok(UpdateStatus::Changed) => {
                ::log::info!("Page content changed, fetching new data");
            }
            Err(e) => fail(&format!("Failed to check for updates: {}", e)),
        }
    }

    // Fetch the page and extract the raw entry sequences
    let extraction = match page.load() {
        Ok(extraction) => extraction,
        Err(e) => fail(&format!("Failed to load the site: {}", e)),
    };

    if args.verbose {
        println!(
            "Loaded {} entries from {}",
            extraction.titles.len(),
            page.config().url
        );
    }

    // Filter, number and sort
    let records = page.process(extraction);

    if args.display {
        output::display_records(&records);
    }

    match output::write_records(&records, &page.config().output, page.config().format) {
        Ok(()) => println!("List saved to {}", page.config().output),
        Err(e) => fail(&format!("Failed to save the file: {}", e)),
    }
}

/// Print a final message to the diagnostic stream and terminate with a
/// non-zero status
fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    std::process::exit(1);
}
