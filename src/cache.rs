use sha2::{Digest, Sha256};
use std::error::Error;
use std::fs;
use std::path::Path;

use crate::fetch;

/// Outcome of comparing the current page against the stored fingerprint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateStatus {
    /// Page content differs from the stored fingerprint, or none was stored
    Changed,
    /// Page content matches the stored fingerprint
    Unchanged,
}

/// Calculate the content fingerprint of a page body
pub fn content_hash(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}

/// Fetch the page and compare its fingerprint against the cache file.
///
/// The cache file holds exactly one digest and nothing else. It is
/// created on the first run and rewritten whenever the page content
/// changes. This fetch is independent of the one later used for
/// extraction.
pub fn check_for_updates(
    url: &str,
    cache_file: impl AsRef<Path>,
) -> Result<UpdateStatus, Box<dyn Error>> {
    let body = fetch::fetch_bytes(url)?;
    let digest = content_hash(&body);
    compare_and_store(&digest, cache_file.as_ref())
}

/// Compare a digest against the stored slot, rewriting it on change
fn compare_and_store(digest: &str, cache_file: &Path) -> Result<UpdateStatus, Box<dyn Error>> {
    if cache_file.exists() {
        let cached = fs::read_to_string(cache_file)?;
        if cached == digest {
            ::log::debug!("Fingerprint unchanged: {}", digest);
            return Ok(UpdateStatus::Unchanged);
        }
    }

    fs::write(cache_file, digest)?;
    ::log::debug!("Stored new fingerprint: {}", digest);
    Ok(UpdateStatus::Changed)
}
