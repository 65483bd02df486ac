use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "forms-scanner",
    version,
    about = "Scrape Google Forms questions and ask Gemini for answer suggestions"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// UI language: uk or en (default: stored preference, then uk)
    #[arg(long, global = true)]
    pub lang: Option<String>,

    /// Path to config file (default: forms-scanner.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Path to prefs file (default: ~/.forms-scanner/prefs.json)
    #[arg(long, global = true)]
    pub prefs: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a form and print the extracted questions as JSON
    Scan {
        /// Live Google Forms URL to fetch
        #[arg(long)]
        url: Option<String>,

        /// Saved HTML snapshot to read instead of fetching
        #[arg(long)]
        file: Option<String>,

        /// Write the question JSON here instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Scan (or reuse a dump) and copy the formatted questions to the clipboard
    Copy {
        #[arg(long)]
        url: Option<String>,

        #[arg(long)]
        file: Option<String>,

        /// Question JSON from a previous scan, instead of a page source
        #[arg(long)]
        input: Option<String>,
    },

    /// Scan (or reuse a dump) and send the questions to Gemini
    Ask {
        #[arg(long)]
        url: Option<String>,

        #[arg(long)]
        file: Option<String>,

        /// Question JSON from a previous scan, instead of a page source
        #[arg(long)]
        input: Option<String>,

        /// Gemini API key (default: stored preference)
        #[arg(long)]
        api_key: Option<String>,

        /// Gemini model name
        #[arg(long)]
        model: Option<String>,
    },

    /// Get or set persisted preferences (geminiApiKey, selectedLanguage)
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print a stored preference
    Get { key: String },

    /// Store a preference
    Set { key: String, value: String },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `forms-scanner.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub trace: TraceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GeminiConfig {
    pub endpoint: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_trace_path")]
    pub path: String,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            path: default_trace_path(),
        }
    }
}

fn default_trace_path() -> String {
    "scan_trace.jsonl".to_string()
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("forms-scanner.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}
