use crate::core::{
    config::{Config, ConfigEntry},
    download::Downloader,
    gng::{self, GngClient},
    package::SectorPackage,
    profile, scope,
};
use crate::error::{Result, UpdaterError};
use std::path::Path;
use tempfile::Builder;

/// Run the update for every configured FIR, or a single one.
///
/// Entries are independent: a failure aborts that FIR but the remaining
/// entries still run. The command fails if any entry failed.
pub fn update_all(config_path: Option<&Path>, fir: Option<&str>) -> Result<()> {
    let config = Config::load(config_path)?;
    let entries: Vec<ConfigEntry> = match fir {
        Some(fir) => vec![config.entry_for(fir)?.clone()],
        None => config.entries,
    };

    let gng = GngClient::new();
    let downloader = Downloader::new()?;

    let total = entries.len();
    let mut failed = 0;
    for entry in &entries {
        if let Err(e) = update_entry(entry, &gng, &downloader) {
            eprintln!("⚠️  FIR {} not updated: {e}", entry.fir);
            failed += 1;
        }
    }

    if failed > 0 {
        return Err(UpdaterError::BatchFailed { failed, total });
    }
    println!("✅ {total} FIR(s) up to date");
    Ok(())
}

fn update_entry(entry: &ConfigEntry, gng: &GngClient, downloader: &Downloader) -> Result<()> {
    println!("-- FIR {} --", entry.fir);

    let listing = gng.listing_page(&entry.fir)?;
    let url = gng::find_download_url(&listing, &entry.fir, &entry.package_name)?;
    println!("Current package link: {url}");

    let tmp_dir = Builder::new().prefix("sectorup-").tempdir()?;
    let archive_path = tmp_dir.path().join(gng::archive_file_name(&url));
    downloader.download_file(&url, &archive_path)?;
    downloader.extract_archive(&archive_path, tmp_dir.path())?;
    // The archive itself must not end up in the EuroScope directory
    std::fs::remove_file(&archive_path)?;

    let package = SectorPackage::new(tmp_dir.path().to_path_buf());
    let sector_file = package.sector_file_name()?;
    println!("Sector file: {sector_file}");

    package.install_into(&entry.es_path)?;
    package.install_navdata(&entry.es_path, &entry.navdata_path)?;

    // EuroScope references the sector file relative to its own directory,
    // with a leading backslash
    let sector_ref = format!("\\{sector_file}");
    let sector_title = sector_file.trim_end_matches(".sct");

    let profiles = profile::update_prf(&entry.es_path, &entry.prf_prefix, &sector_ref)?;
    println!("Updated {profiles} profile(s)");

    let scopes = scope::update_asr(
        &entry.es_path,
        &entry.asr_path,
        &entry.fir,
        &sector_ref,
        sector_title,
    )?;
    println!("Updated {scopes} scope file(s)");

    Ok(())
}
