//! Centum: a bilingual percentage calculator with a local history.

mod config;
mod display;

use anyhow::bail;
use centum_core::session::DEFAULT_PACING;
use centum_core::storage::FileStorageProvider;
use centum_core::{CalculationSession, HistoryLog, preferences};
use centum_types::{CalculationKind, Locale, texts};
use chrono::Local;
use clap::{Parser, Subcommand};
use config::AppConfig;
use display::{ConsoleDisplay, ConsoleSpeech};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "centum", version, about = "Percentage calculator with local history")]
struct Cli {
    /// Read the result aloud after presenting it
    #[arg(long, global = true)]
    speak: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Calculate X% of a value
    PercentOf {
        #[arg(allow_negative_numbers = true)]
        percentage: String,
        #[arg(allow_negative_numbers = true)]
        value: String,
    },
    /// Find what percent one value is of another
    WhatPercent {
        #[arg(allow_negative_numbers = true)]
        part: String,
        #[arg(allow_negative_numbers = true)]
        total: String,
    },
    /// Increase or decrease a value by a signed percentage
    PercentIncrease {
        #[arg(allow_negative_numbers = true)]
        original: String,
        #[arg(allow_negative_numbers = true)]
        percentage: String,
    },
    /// Absolute percentage difference between two values
    PercentDifference {
        #[arg(allow_negative_numbers = true)]
        first: String,
        #[arg(allow_negative_numbers = true)]
        second: String,
    },
    /// Find the value a percentage represents of a total
    ValueFromPercent {
        #[arg(allow_negative_numbers = true)]
        percentage: String,
        #[arg(allow_negative_numbers = true)]
        total: String,
    },
    /// Show the recent calculations
    History {
        /// Remove all stored history
        #[arg(long)]
        clear: bool,
    },
    /// Show or change the display language (vi/en)
    Lang { code: Option<String> },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("centum=info").with_target(false).init();

    let cli = Cli::parse();
    let config = AppConfig::from_environment();
    let storage = Arc::new(FileStorageProvider::new(&config.data_dir));
    let locale = preferences::init_locale(storage.as_ref(), config.language_tag.as_deref());

    info!(
        version = env!("CARGO_PKG_VERSION"),
        locale = locale.as_str(),
        "Starting Centum calculator"
    );

    match cli.command {
        Command::PercentOf { percentage, value } => run_calculation(
            storage,
            locale,
            cli.speak,
            CalculationKind::PercentOf,
            vec![("percentage", percentage), ("value", value)],
        ),
        Command::WhatPercent { part, total } => run_calculation(
            storage,
            locale,
            cli.speak,
            CalculationKind::WhatPercent,
            vec![("partValue", part), ("totalValue", total)],
        ),
        Command::PercentIncrease { original, percentage } => run_calculation(
            storage,
            locale,
            cli.speak,
            CalculationKind::PercentIncrease,
            vec![("originalValue", original), ("percentage", percentage)],
        ),
        Command::PercentDifference { first, second } => run_calculation(
            storage,
            locale,
            cli.speak,
            CalculationKind::PercentDifference,
            vec![("firstValue", first), ("secondValue", second)],
        ),
        Command::ValueFromPercent { percentage, total } => run_calculation(
            storage,
            locale,
            cli.speak,
            CalculationKind::ValueFromPercent,
            vec![("percentage", percentage), ("totalValue", total)],
        ),
        Command::History { clear } => {
            if clear {
                clear_history(storage)
            } else {
                show_history(storage, locale);
                Ok(())
            }
        }
        Command::Lang { code } => change_language(storage, code),
    }
}

fn run_calculation(
    storage: Arc<FileStorageProvider>,
    locale: Locale,
    speak: bool,
    kind: CalculationKind,
    fields: Vec<(&str, String)>,
) -> anyhow::Result<()> {
    let raw: HashMap<String, String> =
        fields.into_iter().map(|(name, value)| (name.to_string(), value)).collect();

    let mut session = CalculationSession::new(storage).with_pacing(DEFAULT_PACING);
    session.register_display(Box::new(ConsoleDisplay::new(locale)));
    session.set_speech(Box::new(ConsoleSpeech));
    session.set_voice_enabled(speak);

    match session.calculate(kind, &raw) {
        Ok(_) => Ok(()),
        Err(err) => bail!("{}", err.user_message(locale)),
    }
}

fn show_history(storage: Arc<FileStorageProvider>, locale: Locale) {
    let log = HistoryLog::load(storage);
    println!("{}", texts::recent_calculations(locale));
    if log.is_empty() {
        println!("  {}", texts::no_recent_calculations(locale));
        return;
    }
    for entry in log.list() {
        let time = entry.timestamp.with_timezone(&Local).format("%H:%M");
        println!(
            "  [{time}] {}: {}",
            texts::kind_title(entry.kind, locale),
            entry.result
        );
        println!("         {}", entry.explanation);
    }
}

fn clear_history(storage: Arc<FileStorageProvider>) -> anyhow::Result<()> {
    let mut log = HistoryLog::load(storage);
    log.clear()?;
    info!("Calculation history cleared");
    Ok(())
}

fn change_language(storage: Arc<FileStorageProvider>, code: Option<String>) -> anyhow::Result<()> {
    match code {
        None => {
            println!("{}", preferences::active_locale().as_str());
            Ok(())
        }
        Some(code) => {
            let locale = match code.as_str() {
                "vi" => Locale::Vi,
                "en" => Locale::En,
                other => bail!("unsupported language '{other}' (expected 'vi' or 'en')"),
            };
            preferences::set_locale(storage.as_ref(), locale)?;
            println!("{}", locale.as_str());
            Ok(())
        }
    }
}
