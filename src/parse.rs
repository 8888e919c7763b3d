//! Filename parsing for the `<name>_<version>.app` convention.

/// Filename suffix (case-sensitive) that marks a candidate file.
pub const APP_SUFFIX: &str = ".app";

/// A filename successfully split into its name and version parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    pub name: String,
    pub version: String,
}

/// Split an `.app` filename into its name part and version string.
///
/// The version is the portion after the final underscore of the stripped
/// filename and must consist of one or more digit groups separated by single
/// dots. Everything before that underscore is the name part, which may
/// itself contain dots and underscores:
/// `Vendor_Module.Sub_24.0.1.3.app` -> `("Vendor_Module.Sub", "24.0.1.3")`.
///
/// A valid version suffix cannot contain `_`, so only the final underscore
/// can delimit it; checking that one position reproduces the greedy
/// longest-name match of `^(.+)_(\d+(?:\.\d+)*)$`.
///
/// Returns `None` for filenames that do not follow the convention; such
/// files take no further part in grouping or deletion.
pub fn parse_app_filename(filename: &str) -> Option<ParsedName> {
    let base = filename.strip_suffix(APP_SUFFIX)?;
    let sep = base.rfind('_')?;
    let (name, version) = (&base[..sep], &base[sep + 1..]);

    if name.is_empty() || !is_version_literal(version) {
        return None;
    }

    Some(ParsedName {
        name: name.to_string(),
        version: version.to_string(),
    })
}

/// True if `s` is one or more all-digit groups separated by single dots.
fn is_version_literal(s: &str) -> bool {
    !s.is_empty()
        && s.split('.')
            .all(|group| !group.is_empty() && group.bytes().all(|b| b.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(filename: &str) -> Option<(String, String)> {
        parse_app_filename(filename).map(|p| (p.name, p.version))
    }

    #[test]
    fn test_standard_format() {
        assert_eq!(
            parts("EOS Solutions_Common Data Layer_25.0.11.0.app"),
            Some((
                "EOS Solutions_Common Data Layer".to_string(),
                "25.0.11.0".to_string()
            ))
        );
        assert_eq!(
            parts("Marcus Fabian_EPCIS Migros_24.9.9.0.app"),
            Some((
                "Marcus Fabian_EPCIS Migros".to_string(),
                "24.9.9.0".to_string()
            ))
        );
    }

    #[test]
    fn test_name_part_may_contain_dots_and_underscores() {
        assert_eq!(
            parts("Vendor_Module.Sub_24.0.1.3.app"),
            Some(("Vendor_Module.Sub".to_string(), "24.0.1.3".to_string()))
        );
        // Trailing underscore in the name survives: the version delimiter is
        // the final underscore only.
        assert_eq!(
            parts("App__1.0.app"),
            Some(("App_".to_string(), "1.0".to_string()))
        );
    }

    #[test]
    fn test_single_component_version() {
        assert_eq!(parts("App1_2.app"), Some(("App1".to_string(), "2".to_string())));
    }

    #[test]
    fn test_non_app_files_do_not_match() {
        assert_eq!(parts("README.md"), None);
        assert_eq!(parts("config.json"), None);
        assert_eq!(parts("App1_1.0.0.0.App"), None); // suffix is case-sensitive
    }

    #[test]
    fn test_app_files_without_version_suffix_do_not_match() {
        assert_eq!(parts("README.app"), None); // no underscore at all
        assert_eq!(parts("App_beta.app"), None); // non-numeric tail
        assert_eq!(parts("App_1.2_beta.app"), None); // version not at the end
        assert_eq!(parts("App_.app"), None); // empty version
        assert_eq!(parts("App_1..2.app"), None); // empty digit group
        assert_eq!(parts("App_1.2..app"), None); // trailing dot
        assert_eq!(parts("_1.0.app"), None); // empty name part
    }
}
