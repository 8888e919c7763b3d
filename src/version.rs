//! Version string parsing and ordering.

/// Integer-sequence representation of a version string, used to rank files
/// within a group.
///
/// Comparison is lexicographic over the components, so `25.0.11.0` outranks
/// `24.9.9.0` and a strict prefix sorts below any sequence that extends it
/// (`1.0` < `1.0.1`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionKey(Vec<u64>);

impl VersionKey {
    /// The lowest possible rank, assigned to unparseable version strings.
    pub fn degenerate() -> Self {
        VersionKey(vec![0])
    }

    pub fn components(&self) -> &[u64] {
        &self.0
    }
}

/// Outcome of parsing a version string.
///
/// `Degraded` means at least one segment was not a non-negative integer. The
/// whole string then carries the degenerate key rather than being rejected,
/// so the entry still participates in grouping and selection, it just ranks
/// below everything parseable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionParse {
    Parsed(VersionKey),
    Degraded(VersionKey),
}

impl VersionParse {
    pub fn key(&self) -> &VersionKey {
        match self {
            VersionParse::Parsed(key) | VersionParse::Degraded(key) => key,
        }
    }

    pub fn into_key(self) -> VersionKey {
        match self {
            VersionParse::Parsed(key) | VersionParse::Degraded(key) => key,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, VersionParse::Degraded(_))
    }
}

/// Parse a version string like `25.0.11.0` into a [`VersionKey`].
///
/// The string is split on `.` and every segment must parse as an integer.
/// A single malformed segment degrades the entire string to `[0]`; the
/// fallback is all-or-nothing, not per-segment.
pub fn parse_version(version: &str) -> VersionParse {
    let components: Result<Vec<u64>, _> =
        version.split('.').map(|segment| segment.parse()).collect();

    match components {
        Ok(components) => VersionParse::Parsed(VersionKey(components)),
        Err(_) => VersionParse::Degraded(VersionKey::degenerate()),
    }
}
