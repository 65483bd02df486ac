use clap::Parser;
use forms_scanner::cli::commands::{cmd_ask, cmd_config_get, cmd_config_set, cmd_copy, cmd_scan};
use forms_scanner::cli::config::{Cli, Commands, ConfigAction, load_config};
use forms_scanner::gemini::client::GeminiClient;
use forms_scanner::i18n::catalog::{Catalog, Lang};
use forms_scanner::store::prefs::{Prefs, default_prefs_path};
use forms_scanner::trace::logger::TraceLogger;

use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    let prefs_path = cli
        .prefs
        .as_deref()
        .map(PathBuf::from)
        .unwrap_or_else(default_prefs_path);
    let mut prefs = Prefs::load(&prefs_path);

    // Resolve language: CLI > stored preference > uk
    let lang = cli
        .lang
        .as_deref()
        .and_then(Lang::from_code)
        .or_else(|| prefs.lang())
        .unwrap_or_default();
    let catalog = Catalog::new(lang);

    let tracer = if config.trace.enabled {
        TraceLogger::new(&config.trace.path)
    } else {
        TraceLogger::disabled()
    };

    match cli.command {
        Commands::Scan { url, file, output } => {
            cmd_scan(
                url.as_deref(),
                file.as_deref(),
                output.as_deref(),
                &catalog,
                &tracer,
                cli.verbose,
            )?;
        }
        Commands::Copy { url, file, input } => {
            cmd_copy(
                url.as_deref(),
                file.as_deref(),
                input.as_deref(),
                &catalog,
                &tracer,
                cli.verbose,
            )?;
        }
        Commands::Ask {
            url,
            file,
            input,
            api_key,
            model,
        } => {
            // Key: CLI > stored preference. Endpoint/model: CLI > config.
            let key = api_key.or_else(|| prefs.gemini_api_key.clone());
            let client = key.map(|k| {
                let mut client = GeminiClient::new(&k);
                if let Some(endpoint) = config.gemini.endpoint.as_deref() {
                    client = client.with_endpoint(endpoint);
                }
                if let Some(model) = model.as_deref().or(config.gemini.model.as_deref()) {
                    client = client.with_model(model);
                }
                client
            });

            cmd_ask(
                url.as_deref(),
                file.as_deref(),
                input.as_deref(),
                client,
                &catalog,
                &tracer,
                cli.verbose,
            )?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Get { key } => cmd_config_get(&prefs, &key)?,
            ConfigAction::Set { key, value } => {
                cmd_config_set(&mut prefs, &prefs_path, &key, &value)?
            }
        },
    }

    Ok(())
}
