//! Interpreter version parsing and comparison.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// A `major.minor.patch` interpreter version.
///
/// Ordering compares major, then minor, then patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PythonVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl PythonVersion {
    /// Create a version.
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Extract the first version number from interpreter output.
    ///
    /// Accepts `Python 3.11.4`, `3.12.0rc1` and bare `3.8`. A missing patch
    /// component is treated as zero.
    pub fn parse_output(output: &str) -> Option<Self> {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let re = PATTERN.get_or_init(|| {
            Regex::new(r"(\d+)\.(\d+)(?:\.(\d+))?").expect("version pattern is valid")
        });

        let caps = re.captures(output)?;
        let major = caps.get(1)?.as_str().parse().ok()?;
        let minor = caps.get(2)?.as_str().parse().ok()?;
        let patch = caps
            .get(3)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0);

        Some(Self::new(major, minor, patch))
    }

    /// Whether this version satisfies `minimum`.
    ///
    /// Only major and minor are compared: any patch release of a supported
    /// minor version is accepted.
    pub fn satisfies(&self, minimum: &PythonVersion) -> bool {
        (self.major, self.minor) >= (minimum.major, minimum.minor)
    }

    /// Render as `major.minor`.
    pub fn short(&self) -> String {
        format!("{}.{}", self.major, self.minor)
    }
}

impl fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for PythonVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let valid = !trimmed.is_empty()
            && trimmed
                .split('.')
                .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()));
        if !valid {
            return Err(format!("invalid version: {}", s));
        }
        Self::parse_output(trimmed).ok_or_else(|| format!("invalid version: {}", s))
    }
}

impl TryFrom<String> for PythonVersion {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PythonVersion> for String {
    fn from(version: PythonVersion) -> Self {
        version.short()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_python_version_banner() {
        let v = PythonVersion::parse_output("Python 3.11.4\n").unwrap();
        assert_eq!(v, PythonVersion::new(3, 11, 4));
    }

    #[test]
    fn parses_prerelease_banner() {
        let v = PythonVersion::parse_output("Python 3.13.0rc2").unwrap();
        assert_eq!(v, PythonVersion::new(3, 13, 0));
    }

    #[test]
    fn parses_without_patch() {
        let v = PythonVersion::parse_output("3.8").unwrap();
        assert_eq!(v, PythonVersion::new(3, 8, 0));
    }

    #[test]
    fn parse_output_rejects_garbage() {
        assert!(PythonVersion::parse_output("command not found").is_none());
        assert!(PythonVersion::parse_output("").is_none());
    }

    #[test]
    fn supported_versions() {
        let min = PythonVersion::new(3, 8, 0);
        assert!(PythonVersion::new(3, 8, 0).satisfies(&min));
        assert!(PythonVersion::new(3, 12, 1).satisfies(&min));
        assert!(PythonVersion::new(4, 0, 0).satisfies(&min));
    }

    #[test]
    fn unsupported_versions() {
        let min = PythonVersion::new(3, 8, 0);
        assert!(!PythonVersion::new(3, 7, 9).satisfies(&min));
        assert!(!PythonVersion::new(2, 7, 18).satisfies(&min));
        assert!(!PythonVersion::new(2, 9, 0).satisfies(&min));
    }

    #[test]
    fn patch_is_ignored_against_minimum() {
        let min = PythonVersion::new(3, 8, 5);
        assert!(PythonVersion::new(3, 8, 0).satisfies(&min));
    }

    #[test]
    fn from_str_accepts_short_and_full() {
        assert_eq!(
            "3.8".parse::<PythonVersion>(),
            Ok(PythonVersion::new(3, 8, 0))
        );
        assert_eq!(
            "3.10.2".parse::<PythonVersion>(),
            Ok(PythonVersion::new(3, 10, 2))
        );
    }

    #[test]
    fn from_str_rejects_non_numeric() {
        assert!("three.eight".parse::<PythonVersion>().is_err());
        assert!("3.x".parse::<PythonVersion>().is_err());
        assert!("".parse::<PythonVersion>().is_err());
    }

    #[test]
    fn display_is_full_triple() {
        assert_eq!(PythonVersion::new(3, 9, 1).to_string(), "3.9.1");
        assert_eq!(PythonVersion::new(3, 9, 1).short(), "3.9");
    }
}
