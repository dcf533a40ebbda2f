use crate::error::{Result, UpdaterError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One FIR to keep up to date.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ConfigEntry {
    /// FIR identifier, also the listing page name on the distribution site
    pub fir: String,
    /// Marker string that the download link must contain
    pub package_name: String,
    /// EuroScope installation directory
    pub es_path: PathBuf,
    /// ASR directory, relative to `es_path`
    pub asr_path: PathBuf,
    /// NavData directory inside the downloaded archive
    pub navdata_path: PathBuf,
    /// Only profiles whose file name starts with this prefix are updated
    pub prf_prefix: String,
}

impl ConfigEntry {
    /// Directory holding this FIR's radar scope files.
    pub fn asr_dir(&self) -> PathBuf {
        self.es_path.join(&self.asr_path).join(&self.fir)
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Config {
    pub entries: Vec<ConfigEntry>,
}

impl Config {
    /// Load the configuration, preferring an explicit path, then
    /// `./config.json`, then `~/.sectorup/config.json`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            if !path.exists() {
                return Err(UpdaterError::config_error(format!(
                    "configuration file not found: {}",
                    path.display()
                )));
            }
            return Self::load_from(path);
        }

        let local = Path::new("config.json");
        if local.exists() {
            return Self::load_from(local);
        }

        let home = home_config_path()?;
        if home.exists() {
            return Self::load_from(&home);
        }

        Err(UpdaterError::config_error(
            "no config.json found; run 'sectorup init' to create one",
        ))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn entry_for(&self, fir: &str) -> Result<&ConfigEntry> {
        self.entries
            .iter()
            .find(|e| e.fir.eq_ignore_ascii_case(fir))
            .ok_or_else(|| UpdaterError::UnknownFir {
                fir: fir.to_string(),
            })
    }

    /// Starter configuration written by `sectorup init`.
    pub fn sample() -> Self {
        Config {
            entries: vec![ConfigEntry {
                fir: "EDMM".to_string(),
                package_name: "EDMM_FIR".to_string(),
                es_path: PathBuf::from("/path/to/EuroScope"),
                asr_path: PathBuf::from("ASR"),
                navdata_path: PathBuf::from("NavData"),
                prf_prefix: "EDMM".to_string(),
            }],
        }
    }
}

fn home_config_path() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(".sectorup").join("config.json"))
        .ok_or(UpdaterError::HomeDirectoryNotFound)
}
