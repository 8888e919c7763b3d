//! Deletion execution and dry-run reporting.

use crate::report::Reporter;
use crate::selector::DeletionPlan;

use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;

/// Per-run totals from the delete pass.
#[derive(Debug, Default, Serialize)]
pub struct ExecutionSummary {
    pub deleted: usize,
    pub would_delete: usize,
    pub not_found: usize,
    pub failed: usize,
    /// Bytes freed, or under dry-run the bytes that would be freed.
    pub bytes_reclaimed: u64,
}

/// Delete every file in the plan, or under dry-run only report what would be
/// deleted.
///
/// Paths are resolved inside `dir`. One file's failure never aborts the
/// remaining files: a missing file is reported as not found, a failed unlink
/// is reported with the OS error, and the pass continues either way.
/// Deletion is permanent; there are no trash or backup semantics.
pub fn execute_plan(
    plan: &DeletionPlan,
    dir: &Path,
    dry_run: bool,
    reporter: &Reporter,
) -> ExecutionSummary {
    let mut summary = ExecutionSummary::default();
    let filenames = plan.filenames();

    if filenames.is_empty() {
        reporter.info("No duplicate files found to delete.");
        return summary;
    }

    reporter.info(format!(
        "{} {} files:",
        if dry_run {
            "DRY RUN: Would delete"
        } else {
            "Deleting"
        },
        filenames.len()
    ));

    for filename in filenames {
        let path = dir.join(filename);

        // Size is taken before the unlink so reclaimed bytes can be
        // reported; symlinks are not followed.
        let size = match fs::symlink_metadata(&path) {
            Ok(metadata) => metadata.len(),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                reporter.warn(format!("  File not found: {filename}"));
                summary.not_found += 1;
                continue;
            }
            // Unreadable metadata: let the unlink below report the failure.
            Err(_) => 0,
        };

        if dry_run {
            reporter.info(format!("  Would delete: {filename}"));
            summary.would_delete += 1;
            summary.bytes_reclaimed += size;
            continue;
        }

        match fs::remove_file(&path) {
            Ok(()) => {
                reporter.info(format!("  Deleted: {filename}"));
                summary.deleted += 1;
                summary.bytes_reclaimed += size;
            }
            Err(err) => {
                reporter.error(format!("  Failed to delete {filename}: {err}"));
                summary.failed += 1;
            }
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::group_by_name;
    use crate::selector::build_deletion_plan;

    fn quiet() -> Reporter {
        Reporter::new(false, true)
    }

    fn plan_for(filenames: &[&str]) -> DeletionPlan {
        let files: Vec<String> = filenames.iter().map(|s| s.to_string()).collect();
        let groups = group_by_name(&files, &quiet());
        build_deletion_plan(&groups, &quiet())
    }

    #[test]
    fn test_dry_run_never_mutates() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["App_1.0.app", "App_2.0.app"] {
            std::fs::write(dir.path().join(name), b"payload").unwrap();
        }
        let plan = plan_for(&["App_1.0.app", "App_2.0.app"]);

        let summary = execute_plan(&plan, dir.path(), true, &quiet());

        assert_eq!(summary.would_delete, 1);
        assert_eq!(summary.deleted, 0);
        assert_eq!(summary.bytes_reclaimed, 7);
        assert!(dir.path().join("App_1.0.app").exists());
        assert!(dir.path().join("App_2.0.app").exists());
    }

    #[test]
    fn test_live_run_deletes_only_the_losers() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["App_1.0.app", "App_2.0.app", "Other_1.0.app"] {
            std::fs::write(dir.path().join(name), b"payload").unwrap();
        }
        let plan = plan_for(&["App_1.0.app", "App_2.0.app", "Other_1.0.app"]);

        let summary = execute_plan(&plan, dir.path(), false, &quiet());

        assert_eq!(summary.deleted, 1);
        assert_eq!(summary.failed, 0);
        assert!(!dir.path().join("App_1.0.app").exists());
        assert!(dir.path().join("App_2.0.app").exists());
        assert!(dir.path().join("Other_1.0.app").exists());
    }

    #[test]
    fn test_missing_file_is_reported_and_skipped() {
        let dir = tempfile::tempdir().unwrap();
        // Both candidates exist at plan time; one vanishes before delete.
        for name in ["App_1.0.app", "App_1.5.app", "App_2.0.app"] {
            std::fs::write(dir.path().join(name), b"payload").unwrap();
        }
        let plan = plan_for(&["App_1.0.app", "App_1.5.app", "App_2.0.app"]);
        std::fs::remove_file(dir.path().join("App_1.5.app")).unwrap();

        let summary = execute_plan(&plan, dir.path(), false, &quiet());

        // The vanished file is a not-found, and processing continued to the
        // remaining candidate.
        assert_eq!(summary.not_found, 1);
        assert_eq!(summary.deleted, 1);
        assert!(!dir.path().join("App_1.0.app").exists());
    }

    #[test]
    fn test_empty_plan_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let summary = execute_plan(&DeletionPlan::default(), dir.path(), false, &quiet());
        assert_eq!(summary.deleted, 0);
        assert_eq!(summary.bytes_reclaimed, 0);
    }
}
