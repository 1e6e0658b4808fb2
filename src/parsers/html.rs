use scraper::{ElementRef, Html, Selector};
use std::error::Error;

use super::{ExtractRule, Extraction};

/// Extracts the title and description sequences from an HTML document.
///
/// There is no validation that the two sequences line up. A structural
/// change on the source page shortens or empties them instead of
/// raising an error.
pub fn extract(html: &str, rule: &ExtractRule) -> Result<Extraction, Box<dyn Error>> {
    let doc = Html::parse_document(html);

    let title_selector = compile(&rule.title_selector)?;
    let description_selector = compile(&rule.description_selector)?;

    let titles = doc
        .select(&title_selector)
        .map(element_text)
        .collect::<Vec<_>>();

    let descriptions = doc
        .select(&description_selector)
        .map(element_text)
        .collect::<Vec<_>>();

    ::log::debug!(
        "Extracted {} titles and {} descriptions",
        titles.len(),
        descriptions.len()
    );

    Ok(Extraction {
        titles,
        descriptions,
    })
}

/// Compile a selector string, surfacing bad configuration as an error
fn compile(selector: &str) -> Result<Selector, Box<dyn Error>> {
    Selector::parse(selector).map_err(|e| format!("Invalid selector {:?}: {}", selector, e).into())
}

/// Collect the trimmed text content of an element
fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
