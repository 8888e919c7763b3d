//! Run reporting: console output plus an optional append-only log file.

use anyhow::{Context, Result};
use chrono::Local;
use colored::Colorize;
use std::fmt::Display;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Console and log-file sink for a single run.
///
/// Constructed once in `main` and passed explicitly into each pipeline
/// stage, so stages stay testable without process-global logging state.
/// Info lines go to stdout, warnings and errors to stderr; when a log file
/// is attached every line is also appended there with a timestamp.
pub struct Reporter {
    verbose: bool,
    quiet: bool,
    log_file: Option<File>,
}

impl Reporter {
    /// `quiet` suppresses everything on the console except errors; the log
    /// file, when attached, still receives all lines. Used by `--json` to
    /// keep stdout machine-readable.
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Reporter {
            verbose,
            quiet,
            log_file: None,
        }
    }

    /// Attach an append-only log file. Lines are formatted as
    /// `2025-08-06 14:03:55 - WARNING - message`.
    pub fn with_log_file(mut self, path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        self.log_file = Some(file);
        Ok(self)
    }

    pub fn info(&self, message: impl Display) {
        let message = message.to_string();
        if !self.quiet {
            println!("{message}");
        }
        self.append("INFO", &message);
    }

    pub fn warn(&self, message: impl Display) {
        let message = message.to_string();
        if !self.quiet {
            eprintln!("{} {}", "warning:".yellow().bold(), message);
        }
        self.append("WARNING", &message);
    }

    /// Errors are always shown on the console, even in quiet mode.
    pub fn error(&self, message: impl Display) {
        let message = message.to_string();
        eprintln!("{} {}", "error:".red().bold(), message);
        self.append("ERROR", &message);
    }

    /// Extra per-file diagnostics, shown only with `--verbose`.
    pub fn debug(&self, message: impl Display) {
        if self.verbose && !self.quiet {
            eprintln!("DEBUG: {message}");
        }
    }

    fn append(&self, level: &str, message: &str) {
        if let Some(file) = &self.log_file {
            let stamp = Local::now().format("%Y-%m-%d %H:%M:%S");
            let mut file = file;
            if let Err(err) = writeln!(file, "{stamp} - {level} - {message}") {
                eprintln!(
                    "{} failed to write log file: {}",
                    "warning:".yellow().bold(),
                    err
                );
            }
        }
    }
}
