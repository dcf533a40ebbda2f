use crate::error::{Result, UpdaterError};
use crate::utils::fs;
use std::path::{Path, PathBuf};

/// An extracted sector data package on disk.
pub struct SectorPackage {
    root: PathBuf,
}

impl SectorPackage {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Name of the sector file shipped at the package root.
    pub fn sector_file_name(&self) -> Result<String> {
        for entry in std::fs::read_dir(&self.root)? {
            let entry = entry?;
            let name = entry.file_name();
            if let Some(name) = name.to_str() {
                if name.ends_with(".sct") {
                    return Ok(name.to_string());
                }
            }
        }
        Err(UpdaterError::MissingSectorFile {
            path: self.root.clone(),
        })
    }

    /// Copy the package contents into the EuroScope directory.
    pub fn install_into(&self, es_path: &Path) -> Result<()> {
        println!("Copying files to {}", es_path.display());
        fs::copy_dir_recursive(&self.root, es_path)
    }

    /// Copy the package's NavData subtree into `<es_path>/NavData`.
    pub fn install_navdata(&self, es_path: &Path, navdata_path: &Path) -> Result<()> {
        let src = self.root.join(navdata_path);
        if !src.is_dir() {
            return Err(UpdaterError::config_error(format!(
                "navdata path '{}' not present in the downloaded package",
                navdata_path.display()
            )));
        }

        let dest = es_path.join("NavData");
        println!("Copying NavData to {}", dest.display());
        fs::copy_dir_recursive(&src, &dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake_package(dir: &Path) -> SectorPackage {
        std::fs::write(dir.join("EDMM_2024.sct"), "[INFO]\n").unwrap();
        std::fs::write(dir.join("EDMM_2024.ese"), "[POSITIONS]\n").unwrap();
        std::fs::create_dir_all(dir.join("NavData")).unwrap();
        std::fs::write(dir.join("NavData/airway.txt"), "UL601\n").unwrap();
        SectorPackage::new(dir.to_path_buf())
    }

    #[test]
    fn test_sector_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let package = fake_package(dir.path());
        assert_eq!(package.sector_file_name().unwrap(), "EDMM_2024.sct");
    }

    #[test]
    fn test_sector_file_name_missing() {
        let dir = tempfile::tempdir().unwrap();
        let package = SectorPackage::new(dir.path().to_path_buf());
        assert!(matches!(
            package.sector_file_name(),
            Err(UpdaterError::MissingSectorFile { .. })
        ));
    }

    #[test]
    fn test_install_into_copies_tree() {
        let dir = tempfile::tempdir().unwrap();
        let pkg_dir = dir.path().join("pkg");
        std::fs::create_dir_all(&pkg_dir).unwrap();
        let package = fake_package(&pkg_dir);

        let es = dir.path().join("EuroScope");
        std::fs::create_dir_all(&es).unwrap();
        std::fs::write(es.join("existing.prf"), "keep me").unwrap();

        package.install_into(&es).unwrap();

        assert!(es.join("EDMM_2024.sct").exists());
        assert!(es.join("NavData/airway.txt").exists());
        assert_eq!(
            std::fs::read_to_string(es.join("existing.prf")).unwrap(),
            "keep me"
        );
    }

    #[test]
    fn test_install_navdata() {
        let dir = tempfile::tempdir().unwrap();
        let pkg_dir = dir.path().join("pkg");
        std::fs::create_dir_all(&pkg_dir).unwrap();
        let package = fake_package(&pkg_dir);

        let es = dir.path().join("EuroScope");
        package
            .install_navdata(&es, Path::new("NavData"))
            .unwrap();

        assert_eq!(
            std::fs::read_to_string(es.join("NavData/airway.txt")).unwrap(),
            "UL601\n"
        );
    }

    #[test]
    fn test_install_navdata_missing_subtree() {
        let dir = tempfile::tempdir().unwrap();
        let pkg_dir = dir.path().join("pkg");
        std::fs::create_dir_all(&pkg_dir).unwrap();
        let package = fake_package(&pkg_dir);

        let es = dir.path().join("EuroScope");
        assert!(package
            .install_navdata(&es, Path::new("DoesNotExist"))
            .is_err());
    }
}
