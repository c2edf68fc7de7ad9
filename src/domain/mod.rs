//! Domain logic - pure semantic-version rules independent of git operations

pub mod prerelease;
pub mod tag;
pub mod version;

pub use prerelease::{Identifier, PreRelease};
pub use tag::Tag;
pub use version::{compare, ParseError, Version, VERSION_TAG_PREFIX};
