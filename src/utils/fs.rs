use crate::error::{Result, UpdaterError};
use std::path::Path;

pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::PermissionDenied => UpdaterError::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => UpdaterError::from(e),
        })?;
    }
    Ok(())
}

pub fn copy_file(from: &Path, to: &Path) -> Result<()> {
    if let Some(parent) = to.parent() {
        ensure_dir_exists(parent)?;
    }

    std::fs::copy(from, to)?;
    Ok(())
}

/// Copy a tree into `dst`, overwriting files that already exist there but
/// leaving unrelated files in place.
pub fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<()> {
    ensure_dir_exists(dst)?;

    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_dir_recursive_merges_into_existing_tree() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src");
        let dst = dir.path().join("dst");

        std::fs::create_dir_all(src.join("NavData")).unwrap();
        std::fs::write(src.join("NavData/airway.txt"), "new").unwrap();
        std::fs::write(src.join("top.txt"), "top").unwrap();

        std::fs::create_dir_all(dst.join("NavData")).unwrap();
        std::fs::write(dst.join("NavData/airway.txt"), "old").unwrap();
        std::fs::write(dst.join("keep.txt"), "keep").unwrap();

        copy_dir_recursive(&src, &dst).unwrap();

        assert_eq!(
            std::fs::read_to_string(dst.join("NavData/airway.txt")).unwrap(),
            "new"
        );
        assert_eq!(std::fs::read_to_string(dst.join("top.txt")).unwrap(), "top");
        assert_eq!(
            std::fs::read_to_string(dst.join("keep.txt")).unwrap(),
            "keep"
        );
    }

    #[test]
    fn test_copy_file_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let from = dir.path().join("a.txt");
        let to = dir.path().join("nested/deeper/b.txt");
        std::fs::write(&from, "x").unwrap();

        copy_file(&from, &to).unwrap();
        assert_eq!(std::fs::read_to_string(&to).unwrap(), "x");
    }
}
