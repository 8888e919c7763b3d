use anyhow::Result;
use clap::Parser;
use humansize::{format_size, BINARY};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

use appsweep::executor::{execute_plan, ExecutionSummary};
use appsweep::report::Reporter;
use appsweep::scanner::{find_app_files, group_by_name};
use appsweep::selector::{build_deletion_plan, DeletionPlan};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Remove duplicate .app files, keeping the highest-versioned file of each app",
    long_about = None
)]
struct Args {
    /// Directory to scan (defaults to the current directory)
    #[arg(default_value = ".")]
    directory: PathBuf,

    /// Only report what would be deleted, without touching the filesystem
    #[arg(long)]
    dry_run: bool,

    /// Show extra per-file diagnostics
    #[arg(long, short)]
    verbose: bool,

    /// Append a timestamped run log to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print a machine-readable JSON summary to stdout
    #[arg(long)]
    json: bool,
}

/// Machine-readable run summary, printed to stdout with --json.
#[derive(Serialize)]
struct RunSummary<'a> {
    directory: String,
    dry_run: bool,
    scanned: usize,
    groups: usize,
    plan: &'a DeletionPlan,
    outcome: &'a ExecutionSummary,
}

fn run(args: &Args) -> Result<()> {
    let mut reporter = Reporter::new(args.verbose, args.json);
    if let Some(path) = &args.log_file {
        reporter = reporter.with_log_file(path)?;
    }

    let directory = &args.directory;
    reporter.info(format!(
        "Starting app file duplicate removal in: {}",
        fs::canonicalize(directory)
            .unwrap_or_else(|_| directory.clone())
            .display()
    ));
    reporter.info(format!(
        "Mode: {}",
        if args.dry_run {
            "DRY RUN"
        } else {
            "LIVE DELETION"
        }
    ));

    let files = find_app_files(directory, &reporter)?;

    let (groups_len, plan, outcome) = if files.is_empty() {
        reporter.info("No .app files found.");
        (0, DeletionPlan::default(), ExecutionSummary::default())
    } else {
        let groups = group_by_name(&files, &reporter);

        reporter.info(format!("Found {} unique app names:", groups.len()));
        for (name, entries) in groups.iter() {
            if entries.len() > 1 {
                reporter.info(format!("  {}: {} versions", name, entries.len()));
            } else {
                reporter.info(format!("  {name}: 1 version (no duplicates)"));
            }
        }

        let plan = build_deletion_plan(&groups, &reporter);
        let outcome = execute_plan(&plan, directory, args.dry_run, &reporter);
        (groups.len(), plan, outcome)
    };

    if !files.is_empty() {
        if args.dry_run {
            reporter.info(format!(
                "DRY RUN COMPLETE. {} files would be removed, reclaiming {}.",
                outcome.would_delete,
                format_size(outcome.bytes_reclaimed, BINARY)
            ));
        } else {
            reporter.info(format!(
                "Deletion complete. {} files removed, {} reclaimed.",
                outcome.deleted,
                format_size(outcome.bytes_reclaimed, BINARY)
            ));
            if outcome.failed > 0 {
                reporter.warn(format!(
                    "{} files could not be removed; see messages above.",
                    outcome.failed
                ));
            }
        }
    }

    if args.json {
        let summary = RunSummary {
            directory: directory.display().to_string(),
            dry_run: args.dry_run,
            scanned: files.len(),
            groups: groups_len,
            plan: &plan,
            outcome: &outcome,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    run(&args)
}
