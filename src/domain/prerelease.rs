//! Pre-release identifiers for semantic versions
//!
//! A pre-release is a dot-separated sequence of identifiers, each either numeric or
//! alphanumeric. Precedence follows semver.org: https://semver.org/#spec-item-11

use crate::domain::version::ParseError;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A single dot-separated pre-release identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    /// Digits only, compared by value
    Numeric(u64),
    /// `[0-9A-Za-z-]+` with at least one non-digit, compared by ASCII order
    AlphaNumeric(String),
}

impl Identifier {
    /// Parse and classify one identifier token.
    ///
    /// The error carries only the token; [`PreRelease::parse`] reports the whole
    /// pre-release string instead.
    pub fn parse(token: &str) -> Result<Self, ParseError> {
        if token.is_empty() || !token.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(ParseError::InvalidPreRelease(token.to_string()));
        }

        if token.bytes().all(|b| b.is_ascii_digit()) {
            if token.len() > 1 && token.starts_with('0') {
                return Err(ParseError::InvalidPreRelease(token.to_string()));
            }
            return token
                .parse::<u64>()
                .map(Identifier::Numeric)
                .map_err(|_| ParseError::InvalidPreRelease(token.to_string()));
        }

        Ok(Identifier::AlphaNumeric(token.to_string()))
    }
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Identifier::Numeric(a), Identifier::Numeric(b)) => a.cmp(b),
            (Identifier::Numeric(_), Identifier::AlphaNumeric(_)) => Ordering::Less,
            (Identifier::AlphaNumeric(_), Identifier::Numeric(_)) => Ordering::Greater,
            (Identifier::AlphaNumeric(a), Identifier::AlphaNumeric(b)) => {
                a.as_bytes().cmp(b.as_bytes())
            }
        }
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(n) => write!(f, "{}", n),
            Identifier::AlphaNumeric(s) => write!(f, "{}", s),
        }
    }
}

/// Pre-release part of a version, e.g. `rc.1` or `beta.2.exp-3`
///
/// An empty sequence marks a release version and sorts above every non-empty one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PreRelease {
    identifiers: Vec<Identifier>,
}

impl PreRelease {
    /// The empty pre-release of a release version
    pub const EMPTY: PreRelease = PreRelease {
        identifiers: Vec::new(),
    };

    /// Parse a pre-release string (without the leading `-`).
    ///
    /// Empty tokens (an empty string, `a..b`, `rc.`) are rejected, as are numeric
    /// identifiers with leading zeros.
    ///
    /// # Examples
    /// ```
    /// use git_semver::domain::{Identifier, PreRelease};
    ///
    /// let pre = PreRelease::parse("rc.1").unwrap();
    /// assert_eq!(
    ///     pre.identifiers(),
    ///     &[Identifier::AlphaNumeric("rc".to_string()), Identifier::Numeric(1)]
    /// );
    /// assert!(PreRelease::parse("rc..1").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let identifiers = s
            .split('.')
            .map(Identifier::parse)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| ParseError::InvalidPreRelease(s.to_string()))?;

        Ok(PreRelease { identifiers })
    }

    pub fn identifiers(&self) -> &[Identifier] {
        &self.identifiers
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }
}

impl FromStr for PreRelease {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        PreRelease::parse(s)
    }
}

impl Ord for PreRelease {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            // Lexicographic by position; a strict prefix sorts first.
            (false, false) => self.identifiers.cmp(&other.identifiers),
        }
    }
}

impl PartialOrd for PreRelease {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, identifier) in self.identifiers.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", identifier)?;
        }
        Ok(())
    }
}
