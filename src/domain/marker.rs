use std::fmt;

/// Recognized marker lines in the version and documentation files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    BuildNumber,
    BuildIncrement,
    BuildDate,
    BuildTime,
    BuildID,
    MajorVersion,
    MinorVersion,
    VersionTag,
    MostRecentBuild,
}

impl MarkerKind {
    /// Markers stamped on every run of the version file
    pub const BUILD_FIELDS: [MarkerKind; 4] = [
        MarkerKind::BuildNumber,
        MarkerKind::BuildDate,
        MarkerKind::BuildTime,
        MarkerKind::BuildID,
    ];

    /// Literal text a line must contain to be this marker
    pub fn prefix(&self) -> &'static str {
        match self {
            MarkerKind::BuildNumber => "public static let Build:",
            MarkerKind::BuildIncrement => "private static let BuildIncrement",
            MarkerKind::BuildDate => "public static let BuildDate:",
            MarkerKind::BuildTime => "public static let BuildTime:",
            MarkerKind::BuildID => "public static let BuildID:",
            MarkerKind::MajorVersion => "public static let MajorVersion",
            MarkerKind::MinorVersion => "public static let MinorVersion",
            MarkerKind::VersionTag => "public static let Tag:",
            MarkerKind::MostRecentBuild => "Most recent build:",
        }
    }

    /// Label (including the declared type) written in front of " = " when the line is rebuilt.
    ///
    /// Only the build fields are ever rewritten, every other marker is read-only.
    pub fn declaration(&self) -> Option<&'static str> {
        match self {
            MarkerKind::BuildNumber => Some("public static let Build: Int"),
            MarkerKind::BuildDate => Some("public static let BuildDate: String"),
            MarkerKind::BuildTime => Some("public static let BuildTime: String"),
            MarkerKind::BuildID => Some("public static let BuildID: String"),
            _ => None,
        }
    }
}

impl fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MarkerKind::BuildNumber => "build number",
            MarkerKind::BuildIncrement => "build increment",
            MarkerKind::BuildDate => "build date",
            MarkerKind::BuildTime => "build time",
            MarkerKind::BuildID => "build ID",
            MarkerKind::MajorVersion => "major version",
            MarkerKind::MinorVersion => "minor version",
            MarkerKind::VersionTag => "version tag",
            MarkerKind::MostRecentBuild => "most recent build line",
        };
        write!(f, "{}", name)
    }
}

/// Index of the first line containing the marker's prefix.
///
/// Case-sensitive containment test, first match wins.
pub fn locate(lines: &[String], kind: MarkerKind) -> Option<usize> {
    let needle = kind.prefix();
    lines.iter().position(|line| line.contains(needle))
}

/// Number of lines containing the marker's prefix
pub fn count_occurrences(lines: &[String], kind: MarkerKind) -> usize {
    let needle = kind.prefix();
    lines.iter().filter(|line| line.contains(needle)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &[&str]) -> Vec<String> {
        text.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_locate_build_number_not_confused_with_build_date() {
        let doc = lines(&[
            "    public static let BuildDate: String = \"1 May 2020\"",
            "    public static let Build: Int = 10",
        ]);
        assert_eq!(locate(&doc, MarkerKind::BuildNumber), Some(1));
        assert_eq!(locate(&doc, MarkerKind::BuildDate), Some(0));
    }

    #[test]
    fn test_locate_first_match_wins() {
        let doc = lines(&[
            "// header",
            "    public static let BuildID: String = \"A\"",
            "    public static let BuildID: String = \"B\"",
        ]);
        assert_eq!(locate(&doc, MarkerKind::BuildID), Some(1));
        assert_eq!(count_occurrences(&doc, MarkerKind::BuildID), 2);
    }

    #[test]
    fn test_locate_is_case_sensitive() {
        let doc = lines(&["most recent build: something"]);
        assert_eq!(locate(&doc, MarkerKind::MostRecentBuild), None);
    }

    #[test]
    fn test_locate_empty_document() {
        assert_eq!(locate(&[], MarkerKind::BuildNumber), None);
    }

    #[test]
    fn test_only_build_fields_have_declarations() {
        for kind in MarkerKind::BUILD_FIELDS {
            let decl = kind.declaration().unwrap();
            assert!(decl.contains(kind.prefix().trim_end_matches(':')));
        }
        assert!(MarkerKind::BuildIncrement.declaration().is_none());
        assert!(MarkerKind::MostRecentBuild.declaration().is_none());
    }
}
