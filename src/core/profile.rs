use crate::error::{Result, UpdaterError};
use regex::{NoExpand, Regex};
use std::path::Path;

/// Rewrite the sector reference in every profile under `es_path` whose file
/// name starts with `prf_prefix`. Returns how many profiles were updated.
pub fn update_prf(es_path: &Path, prf_prefix: &str, sector_path: &str) -> Result<usize> {
    println!("Updating sector reference in profiles");

    let mut updated = 0;
    for entry in std::fs::read_dir(es_path)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if !name.ends_with(".prf") || !name.starts_with(prf_prefix) {
            continue;
        }

        println!("\t{name}");
        let contents = std::fs::read_to_string(entry.path())?;
        let rewritten = rewrite_sector_line(&contents, sector_path);
        std::fs::write(entry.path(), rewritten)?;
        updated += 1;
    }

    if updated == 0 {
        return Err(UpdaterError::NoPrfFound {
            prefix: prf_prefix.to_string(),
            path: es_path.to_path_buf(),
        });
    }
    Ok(updated)
}

/// Replace the `Settings<TAB>sector<TAB>…` line of a profile.
fn rewrite_sector_line(contents: &str, sector_path: &str) -> String {
    let sector_line = Regex::new(r"Settings\tsector.*\n").expect("hardcoded pattern");
    let replacement = format!("Settings\tsector\t{sector_path}\n");
    sector_line
        .replace_all(contents, NoExpand(&replacement))
        .into_owned()
}
