use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ScanError;
use crate::i18n::catalog::Lang;

/// Persisted user preferences: the Gemini key and the UI language.
/// Key names match the original extension storage keys.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Prefs {
    #[serde(rename = "geminiApiKey", default, skip_serializing_if = "Option::is_none")]
    pub gemini_api_key: Option<String>,

    #[serde(rename = "selectedLanguage", default, skip_serializing_if = "Option::is_none")]
    pub selected_language: Option<String>,
}

impl Prefs {
    /// Load preferences. A missing or corrupt file loads as defaults.
    pub fn load(path: &Path) -> Prefs {
        match fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Prefs::default(),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ScanError> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|e| ScanError::Io {
                context: format!("creating {}", dir.display()),
                source: e,
            })?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|e| ScanError::Json {
            context: "serializing prefs".into(),
            source: e,
        })?;

        fs::write(path, json).map_err(|e| ScanError::Io {
            context: format!("writing {}", path.display()),
            source: e,
        })
    }

    /// Stored language preference, if it parses.
    pub fn lang(&self) -> Option<Lang> {
        self.selected_language.as_deref().and_then(Lang::from_code)
    }
}

/// Default prefs location: `~/.forms-scanner/prefs.json`, or the
/// current directory when HOME is unset.
pub fn default_prefs_path() -> PathBuf {
    let base = std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    base.join(".forms-scanner").join("prefs.json")
}
