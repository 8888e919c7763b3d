//! appsweep - duplicate `.app` file remover
//!
//! Scans a directory (non-recursive) for files following the
//! `<name>_<version>.app` naming convention, groups them by name part, and
//! removes every file except the highest-versioned one in each group.
//!
//! The run is a single sequential pass:
//! scan -> parse -> group -> select -> delete (or dry-run report).
//!
//! Per-file problems (unparseable names, unparseable versions, failed
//! deletions) are reported and skipped; they never abort the rest of the run.

pub mod executor;
pub mod parse;
pub mod report;
pub mod scanner;
pub mod selector;
pub mod version;

// Re-export commonly used items
pub use executor::{execute_plan, ExecutionSummary};
pub use parse::{parse_app_filename, ParsedName, APP_SUFFIX};
pub use report::Reporter;
pub use scanner::{find_app_files, group_by_name, AppGroups, FileEntry};
pub use selector::{build_deletion_plan, DeletionPlan, GroupDecision};
pub use version::{parse_version, VersionKey, VersionParse};
