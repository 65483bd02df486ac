use crate::error::ScanError;
use crate::gemini::client::GeminiClient;
use crate::gemini::prompt::build_prompt;
use crate::i18n::catalog::{Catalog, Lang};
use crate::output::clipboard::copy_text;
use crate::output::format::format_questions_for_copy;
use crate::page::source::PageSource;
use crate::scan::parser::parse_form;
use crate::scan::question::{Question, ScanOutcome};
use crate::store::prefs::Prefs;
use crate::trace::event::TraceEvent;
use crate::trace::logger::TraceLogger;

use std::path::Path;

use scraper::Html;

// ============================================================================
// scan subcommand
// ============================================================================

pub fn cmd_scan(
    url: Option<&str>,
    file: Option<&str>,
    output: Option<&str>,
    catalog: &Catalog,
    tracer: &TraceLogger,
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = PageSource::from_args(url, file)?;
    println!("{}", catalog.text("scanning"));

    let outcome = match scan_source(&source, catalog, tracer, verbose) {
        Ok(o) => o,
        Err(e) => {
            report_scan_failure(&e, catalog);
            return Ok(());
        }
    };

    if outcome.questions.is_empty() {
        println!("{}", catalog.text("no_questions"));
        return Ok(());
    }

    println!(
        "{}",
        catalog.format(
            "questions_found",
            &[("count", &outcome.questions.len().to_string())]
        )
    );

    let json = serde_json::to_string_pretty(&outcome.questions).map_err(|e| ScanError::Json {
        context: "serializing questions".into(),
        source: e,
    })?;

    match output {
        Some(path) => std::fs::write(path, &json).map_err(|e| ScanError::Io {
            context: format!("writing {}", path),
            source: e,
        })?,
        None => println!("{}", json),
    }

    Ok(())
}

// ============================================================================
// copy subcommand
// ============================================================================

pub fn cmd_copy(
    url: Option<&str>,
    file: Option<&str>,
    input: Option<&str>,
    catalog: &Catalog,
    tracer: &TraceLogger,
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let questions = match load_questions(url, file, input, catalog, tracer, verbose) {
        Ok(q) => q,
        Err(e @ ScanError::Usage(_)) => return Err(e.into()),
        Err(e) => {
            report_scan_failure(&e, catalog);
            return Ok(());
        }
    };

    if questions.is_empty() {
        println!("{}", catalog.text("scan_first"));
        return Ok(());
    }

    let formatted = format_questions_for_copy(&questions, catalog);
    match copy_text(&formatted) {
        Ok(()) => println!("{}", catalog.text("data_copied")),
        Err(e) => {
            if verbose > 0 {
                eprintln!("{}", e);
            }
            println!("{}", catalog.text("copy_error"));
        }
    }

    Ok(())
}

// ============================================================================
// ask subcommand
// ============================================================================

pub fn cmd_ask(
    url: Option<&str>,
    file: Option<&str>,
    input: Option<&str>,
    client: Option<GeminiClient>,
    catalog: &Catalog,
    tracer: &TraceLogger,
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let questions = match load_questions(url, file, input, catalog, tracer, verbose) {
        Ok(q) => q,
        Err(e @ ScanError::Usage(_)) => return Err(e.into()),
        Err(e) => {
            report_scan_failure(&e, catalog);
            return Ok(());
        }
    };

    if questions.is_empty() {
        println!("{}", catalog.text("scan_first"));
        return Ok(());
    }

    let Some(client) = client else {
        println!("{}", catalog.text("enter_api_key"));
        return Ok(());
    };

    println!("{}", catalog.text("sending_to_gemini"));

    let prompt = build_prompt(&questions, catalog);
    if verbose > 1 {
        eprintln!("--- prompt ---\n{}\n--------------", prompt);
    }

    match client.generate(&prompt) {
        Ok(answer) => {
            tracer.log(
                &TraceEvent::now("gemini_response")
                    .with_questions(questions.len())
                    .with_status(200),
            );
            println!("{}", answer);
            println!("{}", catalog.text("response_received"));
        }
        Err(e) => {
            let status = match &e {
                ScanError::Api { status } => Some(*status),
                _ => None,
            };
            let mut event = TraceEvent::now("gemini_error").with_detail(&e);
            if let Some(s) = status {
                event = event.with_status(s);
            }
            tracer.log(&event);
            println!("{} {}", catalog.text("gemini_error"), e);
        }
    }

    Ok(())
}

// ============================================================================
// config subcommand
// ============================================================================

pub fn cmd_config_get(prefs: &Prefs, key: &str) -> Result<(), Box<dyn std::error::Error>> {
    let value = match key {
        "geminiApiKey" => prefs.gemini_api_key.as_deref(),
        "selectedLanguage" => prefs.selected_language.as_deref(),
        _ => return Err(ScanError::Usage(format!("unknown preference: {}", key)).into()),
    };
    println!("{}", value.unwrap_or(""));
    Ok(())
}

pub fn cmd_config_set(
    prefs: &mut Prefs,
    prefs_path: &Path,
    key: &str,
    value: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    match key {
        "geminiApiKey" => prefs.gemini_api_key = Some(value.to_string()),
        "selectedLanguage" => {
            if Lang::from_code(value).is_none() {
                return Err(
                    ScanError::Usage(format!("unsupported language: {}", value)).into()
                );
            }
            prefs.selected_language = Some(value.to_string());
        }
        _ => return Err(ScanError::Usage(format!("unknown preference: {}", key)).into()),
    }

    prefs.save(prefs_path)?;
    Ok(())
}

// ============================================================================
// shared helpers
// ============================================================================

/// Scan a page source: load, parse, trace.
fn scan_source(
    source: &PageSource,
    catalog: &Catalog,
    tracer: &TraceLogger,
    verbose: u8,
) -> Result<ScanOutcome, ScanError> {
    let page = source.load()?;

    if verbose > 0 {
        eprintln!("Scanning {} ({} bytes)", page.origin, page.html.len());
    }

    let doc = Html::parse_document(&page.html);
    let outcome = parse_form(&doc, catalog);

    tracer.log(
        &TraceEvent::now("scan")
            .with_origin(&page.origin)
            .with_stats(&outcome.stats)
            .with_questions(outcome.questions.len())
            .with_question_keys(outcome.question_keys.clone()),
    );

    if verbose > 0 {
        eprintln!(
            "Blocks: {} seen, {} header-only, {} duplicate, {} empty",
            outcome.stats.blocks_seen,
            outcome.stats.header_only_skipped,
            outcome.stats.duplicate_skipped,
            outcome.stats.empty_skipped
        );
    }

    Ok(outcome)
}

/// Questions for copy/ask: either a prior scan's JSON dump or a fresh scan.
fn load_questions(
    url: Option<&str>,
    file: Option<&str>,
    input: Option<&str>,
    catalog: &Catalog,
    tracer: &TraceLogger,
    verbose: u8,
) -> Result<Vec<Question>, ScanError> {
    if let Some(path) = input {
        let content = std::fs::read_to_string(path).map_err(|e| ScanError::Io {
            context: format!("reading {}", path),
            source: e,
        })?;
        let questions: Vec<Question> =
            serde_json::from_str(&content).map_err(|e| ScanError::Json {
                context: format!("parsing {}", path),
                source: e,
            })?;
        return Ok(questions);
    }

    let source = PageSource::from_args(url, file)?;
    Ok(scan_source(&source, catalog, tracer, verbose)?.questions)
}

/// Map scan-stage failures onto the status vocabulary.
fn report_scan_failure(error: &ScanError, catalog: &Catalog) {
    match error {
        ScanError::NotAForm { .. } => println!("{}", catalog.text("not_a_form")),
        e => println!("{} {}", catalog.text("scan_error"), e),
    }
}
