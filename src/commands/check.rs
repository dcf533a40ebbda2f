use crate::core::{
    config::{Config, ConfigEntry},
    gng::{self, GngClient},
};
use crate::error::{Result, UpdaterError};
use std::path::Path;

/// Resolve and print the current download link for each FIR without
/// downloading anything.
pub fn check(config_path: Option<&Path>, fir: Option<&str>) -> Result<()> {
    let config = Config::load(config_path)?;
    let entries: Vec<ConfigEntry> = match fir {
        Some(fir) => vec![config.entry_for(fir)?.clone()],
        None => config.entries,
    };

    let gng = GngClient::new();

    let total = entries.len();
    let mut failed = 0;
    for entry in &entries {
        match resolve_link(&gng, entry) {
            Ok(url) => println!("{}: {url}", entry.fir),
            Err(e) => {
                eprintln!("⚠️  {}: {e}", entry.fir);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(UpdaterError::BatchFailed { failed, total });
    }
    Ok(())
}

fn resolve_link(gng: &GngClient, entry: &ConfigEntry) -> Result<String> {
    let listing = gng.listing_page(&entry.fir)?;
    gng::find_download_url(&listing, &entry.fir, &entry.package_name)
}
