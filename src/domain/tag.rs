use git2::Oid;

/// A git tag: its short name and the commit it points at
///
/// Annotated tags are peeled, so `target` is always a commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub target: Oid,
}

impl Tag {
    /// Create a new tag record
    pub fn new(name: impl Into<String>, target: Oid) -> Self {
        Tag {
            name: name.into(),
            target,
        }
    }
}
