use std::fs;
use std::path::PathBuf;

use crate::error::ScanError;

/// Where the form document comes from: a live Google Forms URL or a
/// previously saved HTML snapshot.
#[derive(Debug, Clone)]
pub enum PageSource {
    Url(String),
    File(PathBuf),
}

/// A loaded document plus a printable origin for status and trace lines.
#[derive(Debug)]
pub struct LoadedPage {
    pub origin: String,
    pub html: String,
}

/// The only site this scraper understands.
pub fn is_forms_url(url: &str) -> bool {
    url.contains("docs.google.com/forms")
}

impl PageSource {
    /// Resolve the CLI's `--url` / `--file` pair into a source.
    pub fn from_args(url: Option<&str>, file: Option<&str>) -> Result<Self, ScanError> {
        match (url, file) {
            (Some(u), None) => Ok(PageSource::Url(u.to_string())),
            (None, Some(f)) => Ok(PageSource::File(PathBuf::from(f))),
            (Some(_), Some(_)) => Err(ScanError::Usage(
                "give either --url or --file, not both".into(),
            )),
            (None, None) => Err(ScanError::Usage(
                "a page source is required: --url or --file".into(),
            )),
        }
    }

    pub fn load(&self) -> Result<LoadedPage, ScanError> {
        match self {
            PageSource::Url(url) => {
                if !is_forms_url(url) {
                    return Err(ScanError::NotAForm { url: url.clone() });
                }

                let response = reqwest::blocking::get(url.as_str()).map_err(|e| ScanError::Http {
                    context: format!("fetching {}", url),
                    source: e,
                })?;

                let status = response.status();
                if !status.is_success() {
                    return Err(ScanError::Fetch {
                        url: url.clone(),
                        status: status.as_u16(),
                    });
                }

                let html = response.text().map_err(|e| ScanError::Http {
                    context: format!("reading body of {}", url),
                    source: e,
                })?;

                Ok(LoadedPage {
                    origin: url.clone(),
                    html,
                })
            }
            PageSource::File(path) => {
                let html = fs::read_to_string(path).map_err(|e| ScanError::Io {
                    context: format!("reading {}", path.display()),
                    source: e,
                })?;

                Ok(LoadedPage {
                    origin: path.display().to_string(),
                    html,
                })
            }
        }
    }
}
