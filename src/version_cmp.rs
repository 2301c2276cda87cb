//! Lenient semantic version comparison for the report template

use semver::Version;

/// Strip a leading `v`/`V` tag prefix, as commonly used on GitHub tags.
pub fn normalize_version(version: &str) -> &str {
    version
        .strip_prefix('v')
        .or_else(|| version.strip_prefix('V'))
        .unwrap_or(version)
}

/// Parse a version string into a semver::Version.
///
/// Strips a leading tag prefix and pads short versions ("v1", "1.2") out
/// to three components, so GitHub tags and abbreviated index versions
/// both become comparable.
pub fn parse_version(version: &str) -> Option<Version> {
    let mut padded = normalize_version(version.trim()).to_string();
    for _ in padded.split('.').count()..3 {
        padded.push_str(".0");
    }
    Version::parse(&padded).ok()
}

/// Semantic greater-than over two version strings.
///
/// Returns `false` when either side fails to parse, so unknown formats
/// never trigger a "newer than" marker in the report.
pub fn is_greater(left: &str, right: &str) -> bool {
    match (parse_version(left), parse_version(right)) {
        (Some(left), Some(right)) => left > right,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1.2.3", Some((1, 2, 3)))]
    #[case("v1.2.3", Some((1, 2, 3)))]
    #[case("V2.0.1", Some((2, 0, 1)))]
    #[case("1.2", Some((1, 2, 0)))]
    #[case("1", Some((1, 0, 0)))]
    #[case(" 1.2.3 ", Some((1, 2, 3)))]
    #[case("not-a-version", None)]
    #[case("", None)]
    fn parse_version_pads_and_strips_prefix(
        #[case] raw: &str,
        #[case] expected: Option<(u64, u64, u64)>,
    ) {
        let parsed = parse_version(raw).map(|v| (v.major, v.minor, v.patch));
        assert_eq!(parsed, expected);
    }

    #[rstest]
    #[case("2.10.0", "2.9.0", true)] // semantic, not lexical
    #[case("1.10.0", "1.2.0", true)]
    #[case("2.9.0", "2.10.0", false)]
    #[case("1.2.3", "1.2.3", false)]
    #[case("v2.0.0", "1.9.9", true)]
    #[case("2", "1.9", true)]
    #[case("abc", "1.0.0", false)]
    #[case("1.0.0", "abc", false)]
    fn is_greater_uses_semantic_ordering(
        #[case] left: &str,
        #[case] right: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(is_greater(left, right), expected);
    }
}
