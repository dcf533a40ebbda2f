use crate::core::config::Config;
use crate::error::{Result, UpdaterError};
use std::path::{Path, PathBuf};

/// Write a starter configuration file for editing.
pub fn init_config(config_path: Option<&Path>) -> Result<()> {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("config.json"));

    if path.exists() {
        return Err(UpdaterError::config_error(format!(
            "{} already exists, refusing to overwrite",
            path.display()
        )));
    }

    let sample = Config::sample();
    let content = serde_json::to_string_pretty(&sample)?;
    std::fs::write(&path, content)?;

    println!("Wrote starter configuration to {}", path.display());
    println!();
    println!("Edit it to match your installation:");
    println!("  - fir: the FIR listing name on the distribution site");
    println!("  - package_name: marker the download link must contain");
    println!("  - es_path: your EuroScope directory");
    println!("  - prf_prefix: which profiles to point at the new sector file");

    Ok(())
}
