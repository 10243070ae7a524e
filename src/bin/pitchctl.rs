//! Command-line tool for the pitch form.
//!
//! Runs the same sanitizer and validation rules as the HTTP service, without
//! starting a server.
//!
//! # Usage
//!
//! ```bash
//! # Validate a record stored as JSON
//! cargo run --bin pitchctl -- check pitch.json
//!
//! # Skip the remote image check
//! cargo run --bin pitchctl -- check pitch.json --offline
//!
//! # Fill in the form interactively and save the accepted record
//! cargo run --bin pitchctl -- form --output pitch.json
//! ```
//!
//! # Environment Variables
//!
//! - `PROBE_TIMEOUT_SECS`, `PROBE_USER_AGENT`: see the service configuration

use pitch_form::application::form_session::FormSession;
use pitch_form::config::Config;
use pitch_form::domain::entities::{ErrorSet, Field, PitchRecord};
use pitch_form::server::build_pitch_service;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use std::path::PathBuf;
use std::sync::Arc;

/// CLI tool for the pitch form.
#[derive(Parser)]
#[command(name = "pitchctl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a pitch record stored as JSON
    Check {
        /// Path to the JSON record
        file: PathBuf,

        /// Run only the local rules, without probing the image link
        #[arg(long)]
        offline: bool,
    },

    /// Fill in the pitch form interactively
    Form {
        /// Write the accepted record to this file as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    config.validate()?;

    match cli.command {
        Commands::Check { file, offline } => check(&config, file, offline).await,
        Commands::Form { output } => form(&config, output).await,
    }
}

/// Validates a record file and prints per-field results.
///
/// # Output Format
///
/// ```text
/// Checking pitch.json
///
///   title        ok
///   description  Must be at least 20 characters
///   ...
/// ```
async fn check(config: &Config, file: PathBuf, offline: bool) -> Result<()> {
    let raw = std::fs::read_to_string(&file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let record: PitchRecord = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a valid pitch record", file.display()))?;

    println!(
        "{} {}",
        "Checking".bright_blue().bold(),
        file.display().to_string().cyan()
    );
    if offline {
        println!("{}", "  (offline: image link not probed)".bright_black());
    }
    println!();

    let service = build_pitch_service(config)?;
    let errors = if offline {
        service.precheck(&record)
    } else {
        service.validate(&record).await
    };

    print_errors(&errors);

    if errors.is_empty() {
        println!("{}", "Record is valid".green().bold());
        Ok(())
    } else {
        anyhow::bail!("{} field(s) failed validation", errors.len())
    }
}

/// Interactive form: prompts for every field, submits, and re-prompts the
/// fields that failed until the record is accepted.
async fn form(config: &Config, output: Option<PathBuf>) -> Result<()> {
    println!("{}", "Submit your pitch".bright_blue().bold());
    println!();

    let session = FormSession::new(Arc::new(build_pitch_service(config)?));
    let mut pending: Vec<Field> = Field::ALL.to_vec();

    loop {
        for field in &pending {
            prompt_field(&session, *field)?;
        }

        let confirmed = Confirm::new()
            .with_prompt("Submit this pitch?")
            .default(true)
            .interact()?;
        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }

        println!("{}", "Submitting...".bright_black());
        let submission = session.submit().await?;

        if submission.result.is_success() {
            break;
        }

        println!();
        if submission.errors.is_empty() {
            anyhow::bail!("Submission failed: {:?}", submission.result);
        }
        print_errors(&submission.errors);
        pending = submission.errors.fields().collect();
    }

    let record = session.snapshot().record;
    println!();
    println!("{}", "Pitch accepted".green().bold());
    if let Some(target) = session.redirect_target() {
        println!("  Page: {}", target.bright_yellow());
    }

    if let Some(path) = output {
        let json = serde_json::to_string_pretty(&record)?;
        std::fs::write(&path, json)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("  Saved to {}", path.display().to_string().cyan());
    }

    Ok(())
}

/// Prompts for one field, feeding the answer through the sanitizer.
fn prompt_field(session: &FormSession, field: Field) -> Result<()> {
    let current = session.value(field);
    let label = match field {
        Field::Title => "Title",
        Field::Description => "Description",
        Field::Category => "Category (Tech, Health, Education...)",
        Field::Link => "Image URL",
        Field::Pitch => "Pitch",
    };

    loop {
        let answer: String = Input::new()
            .with_prompt(label)
            .with_initial_text(current.clone())
            .allow_empty(true)
            .interact_text()?;

        if let Some(value) = session.try_input(field, &answer) {
            if value != answer {
                println!("  {} {}", "normalized to".bright_black(), value.cyan());
            }
            return Ok(());
        }

        println!(
            "  {}",
            "Input refused: must start with a letter and stay within the length limit".yellow()
        );
    }
}

fn print_errors(errors: &ErrorSet) {
    for field in Field::ALL {
        match errors.get(field) {
            Some(message) => println!("  {:<12} {}", field.as_str().bold(), message.red()),
            None => println!("  {:<12} {}", field.as_str().bold(), "ok".green()),
        }
    }
    println!();
}
