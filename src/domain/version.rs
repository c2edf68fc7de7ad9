use crate::domain::prerelease::PreRelease;
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

/// Prefix stripped from tag names before parsing
pub const VERSION_TAG_PREFIX: char = 'v';

static CORE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)$")
        .expect("version core pattern is valid")
});

static BUILD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Za-z.-]+$").expect("build metadata pattern is valid"));

/// Reason a string was rejected as a semantic version
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Empty version string")]
    Empty,

    #[error("Invalid version core '{0}' - expected MAJOR.MINOR.PATCH")]
    InvalidCore(String),

    #[error("Invalid pre-release '{0}'")]
    InvalidPreRelease(String),

    #[error("Invalid build metadata '{0}'")]
    InvalidBuildMetadata(String),
}

/// Semantic version representation
///
/// Ordering, equality and hashing ignore `build`: `1.0.0+001` and `1.0.0+002` are
/// the same version.
#[derive(Debug, Clone)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre: PreRelease,
    pub build: Option<String>,
}

impl Version {
    /// `0.0.0`, returned when no tag matches a query
    pub const EMPTY: Version = Version {
        major: 0,
        minor: 0,
        patch: 0,
        pre: PreRelease::EMPTY,
        build: None,
    };

    /// Create a release version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre: PreRelease::EMPTY,
            build: None,
        }
    }

    /// Parse a version from a tag string (e.g., "v1.2.3-rc.1+build.5").
    ///
    /// A single leading `v` is accepted and dropped. Leading zeros are rejected
    /// rather than normalized, so a successful parse always prints back as its input.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        if raw.is_empty() {
            return Err(ParseError::Empty);
        }

        let unprefixed = raw.strip_prefix(VERSION_TAG_PREFIX).unwrap_or(raw);

        let (rest, build) = match unprefixed.split_once('+') {
            Some((rest, build)) => {
                if !BUILD_RE.is_match(build) {
                    return Err(ParseError::InvalidBuildMetadata(build.to_string()));
                }
                (rest, Some(build.to_string()))
            }
            None => (unprefixed, None),
        };

        let (core, pre) = match rest.split_once('-') {
            Some((core, pre)) => (core, Some(pre)),
            None => (rest, None),
        };

        let captures = CORE_RE
            .captures(core)
            .ok_or_else(|| ParseError::InvalidCore(core.to_string()))?;
        let number = |i: usize| {
            captures[i]
                .parse::<u64>()
                .map_err(|_| ParseError::InvalidCore(core.to_string()))
        };

        Ok(Version {
            major: number(1)?,
            minor: number(2)?,
            patch: number(3)?,
            pre: pre.map(PreRelease::parse).transpose()?.unwrap_or_default(),
            build,
        })
    }

    /// True when the version carries a pre-release suffix
    pub fn is_pre_release(&self) -> bool {
        !self.pre.is_empty()
    }
}

/// Semantic-version precedence of two versions.
///
/// Same as `a.cmp(b)`; kept as a free function for callers that sort or reduce
/// borrowed versions.
pub fn compare(a: &Version, b: &Version) -> Ordering {
    a.major
        .cmp(&b.major)
        .then_with(|| a.minor.cmp(&b.minor))
        .then_with(|| a.patch.cmp(&b.patch))
        .then_with(|| a.pre.cmp(&b.pre))
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.pre.hash(state);
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.pre.is_empty() {
            write!(f, "-{}", self.pre)?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}
