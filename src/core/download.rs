use crate::error::{Result, UpdaterError};
use flate2::read::GzDecoder;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::redirect;
use std::fs::File;
use std::path::Path;
use tar::Archive;
use zip::ZipArchive;

pub struct Downloader {
    client: reqwest::blocking::Client,
}

impl Downloader {
    pub fn new() -> Result<Self> {
        // The distribution host rejects clients that don't look like a
        // browser, and its file links must not be re-resolved through
        // mirror redirects.
        let client = reqwest::blocking::Client::builder()
            .default_headers(browser_headers())
            .redirect(redirect::Policy::none())
            .build()?;
        Ok(Self { client })
    }

    pub fn download_file(&self, url: &str, destination: &Path) -> Result<()> {
        println!("Downloading from {url}...");

        // Ensure parent directory exists
        if let Some(parent) = destination.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut response = self.client.get(url).send()?;
        if !response.status().is_success() {
            return Err(UpdaterError::DownloadError {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        let mut file = File::create(destination)?;
        response.copy_to(&mut file)?;

        println!("Downloaded to {}", destination.display());
        Ok(())
    }

    pub fn extract_archive(&self, archive_path: &Path, destination: &Path) -> Result<()> {
        println!(
            "Extracting {} to {}",
            archive_path.display(),
            destination.display()
        );

        std::fs::create_dir_all(destination)?;

        let file_name = archive_path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| UpdaterError::ExtractionError {
                path: archive_path.to_path_buf(),
            })?;

        if file_name.ends_with(".tar.gz") || file_name.ends_with(".tgz") {
            self.extract_tar_gz(archive_path, destination)?;
        } else if file_name.ends_with(".zip") {
            self.extract_zip(archive_path, destination)?;
        } else {
            return Err(UpdaterError::ExtractionError {
                path: archive_path.to_path_buf(),
            });
        }

        println!("Extraction completed");
        Ok(())
    }

    fn extract_tar_gz(&self, archive_path: &Path, destination: &Path) -> Result<()> {
        let file = File::open(archive_path)?;
        let decoder = GzDecoder::new(file);
        let mut archive = Archive::new(decoder);
        archive.unpack(destination)?;
        Ok(())
    }

    fn extract_zip(&self, archive_path: &Path, destination: &Path) -> Result<()> {
        let file = File::open(archive_path)?;
        let mut archive = ZipArchive::new(file)?;

        for i in 0..archive.len() {
            let mut file = archive.by_index(i)?;
            let outpath = match file.enclosed_name() {
                Some(path) => destination.join(path),
                None => continue,
            };

            if file.name().ends_with('/') {
                std::fs::create_dir_all(&outpath)?;
            } else {
                if let Some(p) = outpath.parent() {
                    if !p.exists() {
                        std::fs::create_dir_all(p)?;
                    }
                }
                let mut outfile = File::create(&outpath)?;
                std::io::copy(&mut file, &mut outfile)?;
            }

            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Some(mode) = file.unix_mode() {
                    std::fs::set_permissions(&outpath, std::fs::Permissions::from_mode(mode))?;
                }
            }
        }
        Ok(())
    }
}

fn browser_headers() -> HeaderMap {
    let mut hdr = HeaderMap::new();
    hdr.insert(
        header::ACCEPT,
        HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8",
        ),
    );
    hdr.insert(
        header::ACCEPT_LANGUAGE,
        HeaderValue::from_static("en-US;q=0.7,en;q=0.3"),
    );
    hdr.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
    hdr.insert(header::DNT, HeaderValue::from_static("1"));
    hdr.insert(
        header::REFERER,
        HeaderValue::from_static("http://files.aero-nav.com/"),
    );
    hdr.insert("Sec-Fetch-Dest", HeaderValue::from_static("document"));
    hdr.insert("Sec-Fetch-Mode", HeaderValue::from_static("navigate"));
    hdr.insert("Sec-Fetch-Site", HeaderValue::from_static("cross-site"));
    hdr.insert("Sec-Fetch-User", HeaderValue::from_static("?1"));
    hdr.insert(
        header::UPGRADE_INSECURE_REQUESTS,
        HeaderValue::from_static("1"),
    );
    hdr.insert(
        header::USER_AGENT,
        HeaderValue::from_static(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:108.0) Gecko/20100101 Firefox/108.0",
        ),
    );
    hdr
}
