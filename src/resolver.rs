//! Latest-version resolution over a set of tags

use crate::domain::{ParseError, Tag, Version, VERSION_TAG_PREFIX};
use crate::error::Result;
use crate::git::Repository;
use std::convert::Infallible;
use tracing::debug;

/// Anything that carries a tag name
pub trait VersionTag {
    fn tag_name(&self) -> &str;

    /// True when the name follows the `v<version>` naming convention
    fn has_version_prefix(&self) -> bool {
        self.tag_name().starts_with(VERSION_TAG_PREFIX)
    }

    /// Parse the tag name as a version (e.g., "v1.2.3" -> 1.2.3)
    fn version(&self) -> std::result::Result<Version, ParseError> {
        Version::parse(self.tag_name())
    }
}

impl VersionTag for Tag {
    fn tag_name(&self) -> &str {
        &self.name
    }
}

impl VersionTag for str {
    fn tag_name(&self) -> &str {
        self
    }
}

impl VersionTag for String {
    fn tag_name(&self) -> &str {
        self
    }
}

impl<T: VersionTag + ?Sized> VersionTag for &T {
    fn tag_name(&self) -> &str {
        (**self).tag_name()
    }
}

/// Which versions take part in a latest-version query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LatestFilter {
    /// Consider versions with a pre-release suffix
    pub include_pre_releases: bool,
    /// Only consider versions with this major number
    pub major_version: Option<u64>,
}

impl LatestFilter {
    pub fn accepts(&self, version: &Version) -> bool {
        if !self.include_pre_releases && version.is_pre_release() {
            return false;
        }
        self.major_version
            .map_or(true, |major| version.major == major)
    }
}

/// Options for [latest_version]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LatestOptions {
    pub filter: LatestFilter,
    /// Only consider tags reachable from this branch
    pub branch: Option<String>,
}

/// Outcome of a latest-version query
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// The latest version, or [Version::EMPTY] when nothing matched
    pub version: Version,
    /// Name of the tag the version came from
    pub tag: Option<String>,
}

impl Resolution {
    /// The `0.0.0` result of a query that matched no tag
    pub fn unmatched() -> Self {
        Resolution {
            version: Version::EMPTY,
            tag: None,
        }
    }

    /// False when no tag survived filtering
    pub fn matched(&self) -> bool {
        self.tag.is_some()
    }
}

/// Picks the highest version out of a sequence of tags
///
/// Tags without the `v` prefix or that fail to parse are skipped silently. Among
/// tags whose versions compare equal (e.g. differing only in build metadata) the
/// first one in iteration order wins.
pub struct LatestResolver {
    filter: LatestFilter,
}

impl LatestResolver {
    /// Create a resolver applying `filter`
    pub fn new(filter: LatestFilter) -> Self {
        LatestResolver { filter }
    }

    /// Resolve the latest version among all `tags`
    pub fn resolve<'a, T, I>(&self, tags: I) -> Resolution
    where
        T: VersionTag + ?Sized + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        match self.resolve_reachable(tags, |_| Ok::<bool, Infallible>(true)) {
            Ok(resolution) => resolution,
            Err(never) => match never {},
        }
    }

    /// Resolve the latest version among the `tags` for which `reachable` holds.
    ///
    /// The predicate is only asked about candidates that pass the filter and would
    /// beat the current best, so it typically runs far fewer times than there are
    /// tags. Its first error aborts the scan and is returned unchanged; tags that
    /// could not win are never checked, so their errors are not observed.
    pub fn resolve_reachable<'a, T, I, F, E>(
        &self,
        tags: I,
        mut reachable: F,
    ) -> std::result::Result<Resolution, E>
    where
        T: VersionTag + ?Sized + 'a,
        I: IntoIterator<Item = &'a T>,
        F: FnMut(&T) -> std::result::Result<bool, E>,
    {
        let mut best: Option<(Version, &'a T)> = None;

        for tag in tags {
            let Some(version) = self.candidate(tag) else {
                continue;
            };

            if let Some((current, _)) = &best {
                if version <= *current {
                    continue;
                }
            }

            if !reachable(tag)? {
                debug!(tag = tag.tag_name(), "skipping unreachable tag");
                continue;
            }

            best = Some((version, tag));
        }

        Ok(match best {
            Some((version, tag)) => Resolution {
                version,
                tag: Some(tag.tag_name().to_string()),
            },
            None => Resolution::unmatched(),
        })
    }

    /// Every version among `tags` that passes the filter, ascending.
    ///
    /// Versions comparing equal are reported once, keeping the first occurrence.
    pub fn versions<'a, T, I>(&self, tags: I) -> Vec<Version>
    where
        T: VersionTag + ?Sized + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let mut versions: Vec<Version> = tags
            .into_iter()
            .filter_map(|tag| self.candidate(tag))
            .collect();

        versions.sort();
        versions.dedup();
        versions
    }

    fn candidate<T: VersionTag + ?Sized>(&self, tag: &T) -> Option<Version> {
        let name = tag.tag_name();
        if !tag.has_version_prefix() {
            debug!(tag = name, "skipping tag without version prefix");
            return None;
        }

        match tag.version() {
            Ok(version) if self.filter.accepts(&version) => Some(version),
            Ok(_) => None,
            Err(e) => {
                debug!(tag = name, error = %e, "skipping tag that is not a semantic version");
                None
            }
        }
    }
}

/// Resolve the latest version tag of `repo`.
///
/// With `options.branch` set, only tags whose commit is reachable from that branch
/// count; a missing branch is an error.
pub fn latest_version<R: Repository + ?Sized>(
    repo: &R,
    options: &LatestOptions,
) -> Result<Resolution> {
    let tags = repo.list_tags()?;
    let resolver = LatestResolver::new(options.filter.clone());

    let resolution = match &options.branch {
        Some(branch) => {
            let tip = repo.branch_head_oid(branch)?;
            debug!(branch = %branch, tip = %tip, "scoping tags to branch");
            resolver.resolve_reachable(&tags, |tag: &Tag| repo.is_ancestor(tag.target, tip))?
        }
        None => resolver.resolve(&tags),
    };

    debug!(
        tags = tags.len(),
        version = %resolution.version,
        matched = resolution.matched(),
        "resolved latest version"
    );
    Ok(resolution)
}

/// Every version tagged in `repo` that passes `filter`, ascending
pub fn list_versions<R: Repository + ?Sized>(repo: &R, filter: &LatestFilter) -> Result<Vec<Version>> {
    let tags = repo.list_tags()?;
    Ok(LatestResolver::new(filter.clone()).versions(&tags))
}
