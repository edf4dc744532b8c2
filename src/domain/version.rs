use crate::error::ParseError;
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// `MAJOR.MINOR.PATCH[-PRE][+META]`, anchored at both ends.
///
/// ASCII classes only, so any non-ASCII input fails to match. `None` would
/// mean the pattern failed to compile, in which case nothing parses.
static VERSION_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"^(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)(?:-([0-9A-Za-z.-]+))?(?:\+([0-9A-Za-z.-]+))?$",
    )
    .ok()
});

/// A validated Semantic Versioning 2.0 version.
///
/// Only [`Version::parse`] (or `str::parse`) produces values of this type, so
/// every instance upholds the grammar: no leading zeroes in the numeric
/// components or numeric pre-release identifiers, and no empty identifiers.
///
/// Equality is value equality over every field, build metadata included.
/// Precedence is a different relation and lives in
/// [`compare`](crate::domain::comparator::compare); two versions that differ
/// only in metadata are unequal values with equal precedence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    pre: String,
    pre_identifiers: Vec<String>,
    meta: String,
    meta_identifiers: Vec<String>,
    original: String,
}

impl Version {
    /// Parses `input` as a semantic version.
    ///
    /// # Returns
    /// * `Ok(Version)` - `input` follows the grammar exactly
    /// * `Err(ParseError::InvalidVersionFormat)` - anything else, with no
    ///   partial result
    ///
    /// # Example
    /// ```
    /// use semantic_versioning::Version;
    ///
    /// let version = Version::parse("1.0.0-beta+exp.sha.5114f85").unwrap();
    /// assert_eq!(version.major(), 1);
    /// assert_eq!(version.pre(), "beta");
    /// assert_eq!(version.meta_identifiers(), ["exp", "sha", "5114f85"]);
    ///
    /// assert!(Version::parse("01.0.0").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let captures = VERSION_PATTERN
            .as_ref()
            .and_then(|re| re.captures(input))
            .ok_or_else(|| {
                ParseError::invalid(input, "does not match MAJOR.MINOR.PATCH[-PRE][+META]")
            })?;

        let numeric = |index: usize, name: &str| -> Result<u64, ParseError> {
            let digits = captures.get(index).map_or("", |m| m.as_str());
            digits.parse::<u64>().map_err(|_| {
                ParseError::invalid(input, format!("{} version `{}` is out of range", name, digits))
            })
        };

        let major = numeric(1, "major")?;
        let minor = numeric(2, "minor")?;
        let patch = numeric(3, "patch")?;

        let pre = captures.get(4).map_or("", |m| m.as_str());
        let meta = captures.get(5).map_or("", |m| m.as_str());

        let pre_identifiers = split_identifiers(pre);
        for identifier in &pre_identifiers {
            if identifier.is_empty() {
                return Err(ParseError::invalid(input, "empty pre-release identifier"));
            }
            if is_numeric_with_leading_zero(identifier) {
                return Err(ParseError::invalid(
                    input,
                    format!(
                        "numeric pre-release identifier `{}` has a leading zero",
                        identifier
                    ),
                ));
            }
        }

        let meta_identifiers = split_identifiers(meta);
        if meta_identifiers.iter().any(String::is_empty) {
            return Err(ParseError::invalid(input, "empty build metadata identifier"));
        }

        Ok(Version {
            major,
            minor,
            patch,
            pre: pre.to_string(),
            pre_identifiers,
            meta: meta.to_string(),
            meta_identifiers,
            original: input.to_string(),
        })
    }

    /// Parses an optional input; a missing value is rejected like any other
    /// malformed input.
    pub fn parse_opt(input: Option<&str>) -> Result<Self, ParseError> {
        match input {
            Some(input) => Version::parse(input),
            None => Err(ParseError::invalid("", "no version given")),
        }
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// Pre-release without the leading `-`; empty when there is none
    pub fn pre(&self) -> &str {
        &self.pre
    }

    /// Pre-release split on `.`; empty iff [`pre`](Self::pre) is empty
    pub fn pre_identifiers(&self) -> &[String] {
        &self.pre_identifiers
    }

    /// Build metadata without the leading `+`; empty when there is none
    pub fn meta(&self) -> &str {
        &self.meta
    }

    /// Build metadata split on `.`; empty iff [`meta`](Self::meta) is empty
    pub fn meta_identifiers(&self) -> &[String] {
        &self.meta_identifiers
    }

    /// The exact string this version was parsed from
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Rebuilds `MAJOR.MINOR.PATCH[-PRE][+META]` from the parsed fields.
    ///
    /// Every successfully parsed input is already canonical, so this equals
    /// [`original`](Self::original).
    pub fn canonical(&self) -> String {
        let mut canonical = format!("{}.{}.{}", self.major, self.minor, self.patch);
        if !self.pre.is_empty() {
            canonical.push('-');
            canonical.push_str(&self.pre);
        }
        if !self.meta.is_empty() {
            canonical.push('+');
            canonical.push_str(&self.meta);
        }
        canonical
    }

    /// `X.0.0` without a pre-release
    pub fn is_major_release(&self) -> bool {
        self.minor == 0 && self.patch == 0 && self.pre.is_empty()
    }

    /// `X.Y.0` with `Y > 0` and without a pre-release
    pub fn is_minor_release(&self) -> bool {
        self.minor > 0 && self.patch == 0 && self.pre.is_empty()
    }

    /// `X.Y.Z` with `Z > 0` and without a pre-release
    pub fn is_patch_release(&self) -> bool {
        self.patch > 0 && self.pre.is_empty()
    }

    pub fn is_pre_release(&self) -> bool {
        !self.pre.is_empty()
    }

    /// Orders `self` against `other` by SemVer precedence, ignoring build
    /// metadata.
    pub fn cmp_precedence(&self, other: &Version) -> Ordering {
        crate::domain::comparator::compare(self, other)
    }

    /// `true` when both versions have the same precedence
    pub fn precedence_eq(&self, other: &Version) -> bool {
        self.cmp_precedence(other) == Ordering::Equal
    }
}

fn split_identifiers(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        Vec::new()
    } else {
        raw.split('.').map(str::to_string).collect()
    }
}

fn is_numeric_with_leading_zero(identifier: &str) -> bool {
    identifier.len() > 1
        && identifier.starts_with('0')
        && identifier.bytes().all(|b| b.is_ascii_digit())
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Version::parse(value)
    }
}

impl TryFrom<&Version> for semver::Version {
    type Error = semver::Error;

    fn try_from(version: &Version) -> Result<Self, Self::Error> {
        let pre = if version.pre.is_empty() {
            semver::Prerelease::EMPTY
        } else {
            semver::Prerelease::new(&version.pre)?
        };
        let build = if version.meta.is_empty() {
            semver::BuildMetadata::EMPTY
        } else {
            semver::BuildMetadata::new(&version.meta)?
        };

        Ok(semver::Version {
            major: version.major,
            minor: version.minor,
            patch: version.patch,
            pre,
            build,
        })
    }
}

impl serde::Serialize for Version {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.original)
    }
}

impl<'de> serde::Deserialize<'de> for Version {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Version::parse(&raw).map_err(serde::de::Error::custom)
    }
}
