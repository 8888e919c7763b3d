//! Directory scanning and grouping.

use crate::parse::{parse_app_filename, APP_SUFFIX};
use crate::report::Reporter;

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// A candidate file with its version string. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    pub filename: String,
    pub version: String,
}

/// List the names of regular files directly inside `dir` (non-recursive)
/// whose name ends with `.app`, sorted by filename so a run is deterministic
/// regardless of directory-listing order.
///
/// Directory entries are skipped even when their name ends in `.app`; the
/// filter is over files. An unreadable single entry is reported and skipped,
/// only an unreadable `dir` itself is fatal.
pub fn find_app_files(dir: &Path, reporter: &Reporter) -> Result<Vec<String>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                reporter.warn(format!(
                    "Failed to access entry in {}: {}",
                    dir.display(),
                    err
                ));
                continue;
            }
        };

        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            reporter.warn(format!("Skipping non-UTF-8 filename: {:?}", name));
            continue;
        };
        if !name.ends_with(APP_SUFFIX) {
            continue;
        }

        match entry.file_type() {
            Ok(file_type) if file_type.is_file() => files.push(name.to_string()),
            Ok(_) => reporter.debug(format!("Skipping non-file entry: {name}")),
            Err(err) => {
                reporter.warn(format!("Could not determine type of {name}: {err}"));
            }
        }
    }

    files.sort();
    reporter.info(format!(
        "Found {} .app files in {}",
        files.len(),
        dir.display()
    ));
    Ok(files)
}

/// Parsed entries partitioned by name part.
///
/// Group keys keep first-seen order and entries within a group keep scan
/// order; the selector's stable sort relies on the latter for its
/// first-encountered-wins tie-break. Key equality is exact string equality,
/// no normalization.
#[derive(Debug, Default)]
pub struct AppGroups {
    order: Vec<String>,
    entries: HashMap<String, Vec<FileEntry>>,
}

impl AppGroups {
    fn push(&mut self, name: &str, entry: FileEntry) {
        if let Some(group) = self.entries.get_mut(name) {
            group.push(entry);
        } else {
            self.order.push(name.to_string());
            self.entries.insert(name.to_string(), vec![entry]);
        }
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate groups in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[FileEntry])> {
        self.order
            .iter()
            .map(|name| (name.as_str(), self.entries[name].as_slice()))
    }
}

/// Group filenames by their name part.
///
/// Filenames that do not follow the `<name>_<version>.app` convention are
/// reported and excluded entirely; they never form a group of their own.
pub fn group_by_name(filenames: &[String], reporter: &Reporter) -> AppGroups {
    let mut groups = AppGroups::default();

    for filename in filenames {
        match parse_app_filename(filename) {
            Some(parsed) => groups.push(
                &parsed.name,
                FileEntry {
                    filename: filename.clone(),
                    version: parsed.version,
                },
            ),
            None => reporter.warn(format!("Could not parse filename: {filename}")),
        }
    }

    groups
}
