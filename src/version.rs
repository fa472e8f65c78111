use regex::Regex;
use std::fmt;

/// Semantic version representation
///
/// Ordering is lexicographic over (major, minor, patch), which the derived
/// `Ord` provides given the field declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Create a new version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version from a tag string (e.g., "v1.2.3" -> Version(1,2,3)).
    ///
    /// Strips a single leading 'v' marker if present, then requires exactly
    /// three dot-separated groups of 1-2 digits. Anything else (extra
    /// groups, non-digit characters, 3+ digit groups) is not a version.
    ///
    /// # Example
    /// ```
    /// use git_release::version::Version;
    ///
    /// assert_eq!(Version::parse_tag("v1.2.3"), Some(Version::new(1, 2, 3)));
    /// assert_eq!(Version::parse_tag("1.2.3"), Some(Version::new(1, 2, 3)));
    /// assert_eq!(Version::parse_tag("1.2.345"), None);
    /// ```
    pub fn parse_tag(tag: &str) -> Option<Self> {
        let body = tag.strip_prefix('v').unwrap_or(tag);

        let re = Regex::new(r"^(\d{1,2})\.(\d{1,2})\.(\d{1,2})$").ok()?;
        let caps = re.captures(body)?;

        let major = caps.get(1)?.as_str().parse::<u32>().ok()?;
        let minor = caps.get(2)?.as_str().parse::<u32>().ok()?;
        let patch = caps.get(3)?.as_str().parse::<u32>().ok()?;

        Some(Version::new(major, minor, patch))
    }

    /// Next patch release (major/minor unchanged)
    pub fn next_patch(&self) -> Self {
        Version {
            major: self.major,
            minor: self.minor,
            patch: self.patch + 1,
        }
    }

    /// Canonical marker-prefixed tag spelling (e.g., "v1.2.3")
    pub fn tag_name(&self) -> String {
        format!("v{}", self)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Check whether a tag string is a valid release tag
/// (##.##.## with optional 'v' prefix).
pub fn is_valid_format(tag: &str) -> bool {
    Version::parse_tag(tag).is_some()
}

/// Find the highest semantic version among a list of tags.
///
/// Tags that do not parse as versions are ignored. Returns `None` if no
/// tag parses.
pub fn highest_version(tags: &[String]) -> Option<Version> {
    tags.iter()
        .filter_map(|tag| Version::parse_tag(tag))
        .max()
}

/// Suggest the next release version from the existing tag list.
///
/// Starts at 1.0.0 when no tag parses; otherwise increments the patch
/// component of the highest existing version. Minor/major bumps are an
/// explicit operator decision made via the tag override.
pub fn suggest_next(tags: &[String]) -> Version {
    match highest_version(tags) {
        Some(highest) => highest.next_patch(),
        None => Version::new(1, 0, 0),
    }
}

/// Check whether a candidate tag already names an existing release.
///
/// Tags in the wild may or may not carry the 'v' marker, so the candidate
/// is matched verbatim, as its marker-prefixed normalized form, and as its
/// bare normalized body.
pub fn tag_exists(candidate: &str, existing: &[String]) -> bool {
    let body = candidate.strip_prefix('v').unwrap_or(candidate);
    let prefixed = format!("v{}", body);

    existing
        .iter()
        .any(|tag| tag == candidate || *tag == prefixed || *tag == body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_tag_with_marker() {
        let v = Version::parse_tag("v1.2.3").unwrap();
        assert_eq!(v, Version::new(1, 2, 3));
    }

    #[test]
    fn test_parse_tag_without_marker() {
        let v = Version::parse_tag("10.20.30").unwrap();
        assert_eq!(v, Version::new(10, 20, 30));
    }

    #[test]
    fn test_parse_tag_rejects_wrong_shapes() {
        assert_eq!(Version::parse_tag("1.2"), None);
        assert_eq!(Version::parse_tag("1.2.3.4"), None);
        assert_eq!(Version::parse_tag("1.2.345"), None);
        assert_eq!(Version::parse_tag("a.b.c"), None);
        assert_eq!(Version::parse_tag("1.2.x"), None);
        assert_eq!(Version::parse_tag("release-1.2.3"), None);
        assert_eq!(Version::parse_tag(""), None);
    }

    #[test]
    fn test_parse_tag_marker_is_case_sensitive() {
        assert_eq!(Version::parse_tag("V1.2.3"), None);
    }

    #[test]
    fn test_parse_tag_single_marker_only() {
        assert_eq!(Version::parse_tag("vv1.2.3"), None);
    }

    #[test]
    fn test_is_valid_format() {
        assert!(is_valid_format("1.2.3"));
        assert!(is_valid_format("v99.99.99"));
        assert!(!is_valid_format("1.2.3-rc1"));
        assert!(!is_valid_format("100.0.0"));
    }

    #[test]
    fn test_version_ordering() {
        assert!(Version::new(2, 0, 0) > Version::new(1, 99, 99));
        assert!(Version::new(1, 10, 0) > Version::new(1, 9, 99));
        assert!(Version::new(1, 2, 10) > Version::new(1, 2, 9));
    }

    #[test]
    fn test_highest_version_ignores_non_versions() {
        let list = tags(&["v1.0.0", "nightly", "v1.2.0", "v0.9.9"]);
        assert_eq!(highest_version(&list), Some(Version::new(1, 2, 0)));
    }

    #[test]
    fn test_highest_version_order_independent() {
        let forward = tags(&["1.0.0", "1.9.9", "v1.2.3"]);
        let backward = tags(&["v1.2.3", "1.9.9", "1.0.0"]);
        assert_eq!(highest_version(&forward), highest_version(&backward));
        assert_eq!(highest_version(&forward), Some(Version::new(1, 9, 9)));
    }

    #[test]
    fn test_highest_version_empty() {
        assert_eq!(highest_version(&[]), None);
        assert_eq!(highest_version(&tags(&["not-a-version"])), None);
    }

    #[test]
    fn test_suggest_next_initial() {
        assert_eq!(suggest_next(&[]), Version::new(1, 0, 0));
    }

    #[test]
    fn test_suggest_next_bumps_patch() {
        assert_eq!(suggest_next(&tags(&["1.2.3"])), Version::new(1, 2, 4));
    }

    #[test]
    fn test_suggest_next_mixed_markers() {
        let list = tags(&["v1.2.3", "1.9.9"]);
        assert_eq!(suggest_next(&list), Version::new(1, 9, 10));
    }

    #[test]
    fn test_tag_exists_across_marker_spellings() {
        assert!(tag_exists("2.0.0", &tags(&["v2.0.0"])));
        assert!(tag_exists("v2.0.0", &tags(&["2.0.0"])));
        assert!(tag_exists("v2.0.0", &tags(&["v2.0.0"])));
        assert!(!tag_exists("2.0.1", &tags(&["2.0.0"])));
    }

    #[test]
    fn test_display_and_tag_name() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.to_string(), "1.2.3");
        assert_eq!(v.tag_name(), "v1.2.3");
    }
}
