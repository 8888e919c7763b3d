//! Duplicate selection: which file in each group survives.

use crate::report::Reporter;
use crate::scanner::{AppGroups, FileEntry};
use crate::version::parse_version;

use serde::Serialize;

/// Keep/delete decision for one group that had duplicates.
#[derive(Debug, Clone, Serialize)]
pub struct GroupDecision {
    pub name: String,
    pub keep: FileEntry,
    /// Entries marked for deletion, in descending version order.
    pub delete: Vec<FileEntry>,
}

/// The files chosen for removal this run, with the per-group decisions that
/// produced them. Recomputed each run, never persisted.
#[derive(Debug, Default, Serialize)]
pub struct DeletionPlan {
    pub decisions: Vec<GroupDecision>,
}

impl DeletionPlan {
    /// Filenames to delete: group order first, descending version within a
    /// group.
    pub fn filenames(&self) -> Vec<&str> {
        self.decisions
            .iter()
            .flat_map(|decision| decision.delete.iter())
            .map(|entry| entry.filename.as_str())
            .collect()
    }

    pub fn total(&self) -> usize {
        self.decisions.iter().map(|d| d.delete.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }
}

/// For every group with more than one entry, rank entries by version
/// (descending) and mark everything except the top entry for deletion.
///
/// The sort is stable, so entries with equal version keys keep their scan
/// order and the first-encountered one wins the keep. Groups with a single
/// entry are never deletion candidates, whatever their version.
pub fn build_deletion_plan(groups: &AppGroups, reporter: &Reporter) -> DeletionPlan {
    let mut plan = DeletionPlan::default();

    for (name, entries) in groups.iter() {
        if entries.len() <= 1 {
            continue;
        }

        reporter.info(format!("Processing duplicates for: {name}"));

        let mut ranked: Vec<_> = entries
            .iter()
            .map(|entry| {
                let parsed = parse_version(&entry.version);
                if parsed.is_degraded() {
                    reporter.warn(format!(
                        "Could not parse version '{}' of {}; ranking it lowest",
                        entry.version, entry.filename
                    ));
                }
                (parsed.into_key(), entry)
            })
            .collect();
        ranked.sort_by(|a, b| b.0.cmp(&a.0));

        let Some(((_, keep), rest)) = ranked.split_first() else {
            continue;
        };
        reporter.info(format!(
            "  Keeping: {} (version {})",
            keep.filename, keep.version
        ));

        let mut delete = Vec::with_capacity(rest.len());
        for (_, entry) in rest {
            reporter.info(format!(
                "  Marking for deletion: {} (version {})",
                entry.filename, entry.version
            ));
            delete.push((*entry).clone());
        }

        plan.decisions.push(GroupDecision {
            name: name.to_string(),
            keep: (*keep).clone(),
            delete,
        });
    }

    plan
}
