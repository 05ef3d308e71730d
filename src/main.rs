mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use quickcalc::calculator::{CALCULATOR_EXAMPLES, Dispatch, Dispatcher, copy_to_clipboard};
use quickcalc::converter::{CATEGORIES, CONVERTER_EXAMPLES};
use quickcalc::{Config, logging};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing::{debug, warn};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = Config::load(cli.config.as_deref())?;
    logging::init(if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    });
    debug!(?config, "loaded configuration");

    let dispatcher = Dispatcher::from_config(&config);
    let output = Output {
        json: cli.json || config.json,
        copy: cli.copy || config.copy_to_clipboard,
    };

    match cli.command {
        Some(Command::Examples) => {
            print_examples(&dispatcher, &output)?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Units) => {
            print_units()?;
            Ok(ExitCode::SUCCESS)
        }
        None if !cli.input.is_empty() => {
            let outcome = dispatcher.dispatch(&cli.input.join(" "));
            output.emit_result(&outcome)?;
            if let Some(text) = outcome.clipboard() {
                output.copy(text);
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        None => {
            run_interactive(&dispatcher, &output)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// One dispatch per stdin line, like the launcher's per-keystroke updates.
fn run_interactive(dispatcher: &Dispatcher, output: &Output) -> Result<()> {
    let stdin = io::stdin();
    let mut last_result: Option<String> = None;

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        let outcome = dispatcher.dispatch(&line);
        output.emit_line(&outcome)?;

        if let Some(text) = outcome.clipboard() {
            last_result = Some(text.to_string());
        }
    }

    if let Some(text) = last_result {
        output.copy(&text);
    }

    Ok(())
}

fn print_examples(dispatcher: &Dispatcher, output: &Output) -> Result<()> {
    let mut stdout = io::stdout().lock();

    for example in CALCULATOR_EXAMPLES.iter().chain(CONVERTER_EXAMPLES) {
        let outcome = dispatcher.dispatch(example);
        if output.json {
            writeln!(stdout, "{}", serde_json::to_string(&outcome)?)?;
        } else {
            let display = outcome.display().unwrap_or_default();
            writeln!(stdout, "{:<16} {}", example, display)?;
        }
    }

    Ok(())
}

fn print_units() -> Result<()> {
    let mut stdout = io::stdout().lock();

    for category in CATEGORIES {
        writeln!(stdout, "{}", category.name())?;
        for rule in category.rules() {
            writeln!(
                stdout,
                "  {:>6} → {:<6} {}",
                rule.from,
                rule.to,
                rule.describe()
            )?;
        }
    }

    Ok(())
}

struct Output {
    json: bool,
    copy: bool,
}

impl Output {
    /// Single-shot mode: the bare result, or nothing.
    fn emit_result(&self, outcome: &Dispatch) -> Result<()> {
        let mut stdout = io::stdout().lock();
        if self.json {
            writeln!(stdout, "{}", serde_json::to_string(outcome)?)?;
        } else if let Some(result) = &outcome.result {
            writeln!(stdout, "{}", result)?;
        }
        // the clipboard copy that follows may block
        stdout.flush()?;
        Ok(())
    }

    /// Interactive mode: the prefixed display line, or nothing.
    fn emit_line(&self, outcome: &Dispatch) -> Result<()> {
        let mut stdout = io::stdout().lock();
        if self.json {
            writeln!(stdout, "{}", serde_json::to_string(outcome)?)?;
        } else if let Some(display) = outcome.display() {
            writeln!(stdout, "{}", display)?;
        }
        stdout.flush()?;
        Ok(())
    }

    fn copy(&self, text: &str) {
        if !self.copy {
            return;
        }
        if let Err(err) = copy_to_clipboard(text) {
            warn!("{:#}", err);
        }
    }
}
