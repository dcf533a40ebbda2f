use crate::error::Result;
use regex::{NoExpand, Regex};
use std::path::Path;

/// Rewrite the sector binding of every radar scope file in the FIR's ASR
/// folder (`<es_path>/<asr_path>/<fir>/`). Scope files anywhere else are
/// never touched. Returns how many files were updated.
pub fn update_asr(
    es_path: &Path,
    asr_path: &Path,
    fir: &str,
    sector_path: &str,
    sector_title: &str,
) -> Result<usize> {
    let asr_dir = es_path.join(asr_path).join(fir);
    if !asr_dir.is_dir() {
        println!("No ASR folder for {fir}, skipping scope files");
        return Ok(0);
    }

    println!("Updating sector binding in scope files");

    let mut updated = 0;
    for entry in std::fs::read_dir(&asr_dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if !name.ends_with(".asr") {
            continue;
        }

        println!("\t{name}");
        let contents = std::fs::read_to_string(entry.path())?;
        let rewritten = rewrite_sector_binding(&contents, sector_path, sector_title);
        std::fs::write(entry.path(), rewritten)?;
        updated += 1;
    }
    Ok(updated)
}

/// Replace the `SECTORFILE:`/`SECTORTITLE:` pair of a scope file.
fn rewrite_sector_binding(contents: &str, sector_path: &str, sector_title: &str) -> String {
    let binding = Regex::new(r"SECTORFILE:.*\nSECTORTITLE:.*\n").expect("hardcoded pattern");
    let replacement = format!("SECTORFILE:{sector_path}\nSECTORTITLE:{sector_title}\n");
    binding
        .replace_all(contents, NoExpand(&replacement))
        .into_owned()
}
