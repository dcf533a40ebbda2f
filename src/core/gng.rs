use crate::error::{Result, UpdaterError};
use scraper::{Html, Selector};

const LISTING_BASE: &str = "http://files.aero-nav.com";

/// Link targets the listing may offer for download.
const ARCHIVE_EXTENSIONS: &[&str] = &[".zip", ".tar.gz", ".tgz"];

/// Client for the sector data distribution site.
pub struct GngClient {
    client: reqwest::blocking::Client,
}

impl Default for GngClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GngClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }

    pub fn listing_url(fir: &str) -> String {
        format!("{LISTING_BASE}/{fir}")
    }

    /// Fetch the listing page for a FIR.
    pub fn listing_page(&self, fir: &str) -> Result<String> {
        let url = Self::listing_url(fir);
        let response = self.client.get(&url).send()?;
        if !response.status().is_success() {
            return Err(UpdaterError::DownloadError {
                status: response.status().as_u16(),
                url,
            });
        }
        Ok(response.text()?)
    }
}

/// Scan a listing page for the download link of a package.
///
/// A link matches when its href or its text contains `package_name` and the
/// href points at an archive. The listing presents one table row per released
/// package; new releases are appended at the bottom, so the last matching
/// link is the current one.
pub fn find_download_url(listing_html: &str, fir: &str, package_name: &str) -> Result<String> {
    let document = Html::parse_document(listing_html);
    let link_selector = Selector::parse("td > a").expect("static selector");

    let mut current = None;
    for link in document.select(&link_selector) {
        let Some(href) = link.value().attr("href") else {
            continue;
        };
        if !has_archive_extension(href) {
            continue;
        }
        let text: String = link.text().collect();
        if href.contains(package_name) || text.contains(package_name) {
            current = Some(href.to_string());
        }
    }

    current.ok_or_else(|| UpdaterError::LinkNotFound {
        fir: fir.to_string(),
        package: package_name.to_string(),
    })
}

fn has_archive_extension(href: &str) -> bool {
    ARCHIVE_EXTENSIONS.iter().any(|ext| href.ends_with(ext))
}

/// File name under which a download link should be stored locally.
pub fn archive_file_name(url: &str) -> String {
    let name = url
        .rsplit('/')
        .next()
        .and_then(|n| n.split('?').next())
        .unwrap_or("");
    if name.is_empty() {
        "sector.zip".to_string()
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"
<html><body><table>
<tr><td><a href="/changelog">Changelog</a></td></tr>
<tr><td><a href="http://files.example.com/sector/EuroScope_FIR_2023.zip">old</a></td></tr>
<tr><td><a href="http://files.example.com/sector/EuroScope_FIR_2024.zip">new</a></td></tr>
<tr><td><a href="http://files.example.com/sector/EuroScope_FIR_2024.pdf">briefing</a></td></tr>
<tr><td><a href="http://files.example.com/sector/OTHER_2024.zip">other</a></td></tr>
</table>
<a href="http://files.example.com/sector/EuroScope_FIR_2025.zip">not in a table cell</a>
</body></html>
"#;

    #[test]
    fn test_find_download_url_picks_last_match() {
        let url = find_download_url(LISTING, "TEST", "FIR").unwrap();
        assert_eq!(url, "http://files.example.com/sector/EuroScope_FIR_2024.zip");
    }

    #[test]
    fn test_find_download_url_ignores_links_outside_table_cells() {
        // The 2025 link matches but sits outside td > a
        let url = find_download_url(LISTING, "TEST", "FIR_2").unwrap();
        assert!(!url.contains("2025"));
    }

    #[test]
    fn test_find_download_url_no_match() {
        let err = find_download_url(LISTING, "TEST", "ZZZZ").unwrap_err();
        assert!(matches!(err, UpdaterError::LinkNotFound { .. }));
    }

    #[test]
    fn test_find_download_url_matches_link_text() {
        let listing = r#"
<table><tr><td><a href="http://files.example.com/dl/4711.zip">EuroScope_FIR_2024</a></td></tr></table>
"#;
        let url = find_download_url(listing, "TEST", "FIR").unwrap();
        assert_eq!(url, "http://files.example.com/dl/4711.zip");
    }

    #[test]
    fn test_has_archive_extension() {
        assert!(has_archive_extension("/pkg/EDMM_FIR_2024.zip"));
        assert!(has_archive_extension("/pkg/EDMM_FIR_2024.tar.gz"));
        assert!(has_archive_extension("/pkg/EDMM_FIR_2024.tgz"));
        assert!(!has_archive_extension("/pkg/EDMM_FIR_2024.pdf"));
    }

    #[test]
    fn test_archive_file_name() {
        assert_eq!(
            archive_file_name("http://x.test/pkg/EDMM_2024.zip"),
            "EDMM_2024.zip"
        );
        assert_eq!(
            archive_file_name("http://x.test/pkg/EDMM_2024.zip?token=abc"),
            "EDMM_2024.zip"
        );
        assert_eq!(archive_file_name("http://x.test/pkg/"), "sector.zip");
    }

    #[test]
    fn test_listing_url() {
        assert_eq!(GngClient::listing_url("EDMM"), "http://files.aero-nav.com/EDMM");
    }
}
