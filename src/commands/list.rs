use crate::core::config::Config;
use crate::error::Result;
use std::path::Path;

pub fn list_entries(config_path: Option<&Path>) -> Result<()> {
    let config = Config::load(config_path)?;

    if config.entries.is_empty() {
        println!("No FIRs configured.");
        println!();
        println!("Run 'sectorup init' and edit the generated config.json.");
        return Ok(());
    }

    println!("Configured FIRs:");
    println!();

    for entry in &config.entries {
        println!("  {} (package '{}')", entry.fir, entry.package_name);
        println!("    EuroScope directory: {}", entry.es_path.display());
        println!("    Profile prefix: {}", entry.prf_prefix);
        println!("    Scope folder: {}", entry.asr_dir().display());
    }

    Ok(())
}
