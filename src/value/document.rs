use std::ops::Index;

use crate::{Compound, NbtString, Tag};

/// A decoded NBT document: the root compound and its name.
///
/// The root name is almost always empty, but files are free to name it. A
/// document behaves like a compound holding exactly one entry, the root.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    name: NbtString,
    root: Compound,
}

impl Document {
    pub fn new(name: impl Into<NbtString>, root: Compound) -> Self {
        Self {
            name: name.into(),
            root,
        }
    }

    pub fn root_name(&self) -> &NbtString {
        &self.name
    }

    pub fn root(&self) -> &Compound {
        &self.root
    }

    pub fn into_root(self) -> Compound {
        self.root
    }

    pub fn into_parts(self) -> (NbtString, Compound) {
        (self.name, self.root)
    }

    /// Look up a tag directly inside the root compound.
    pub fn get(&self, name: &str) -> Option<&Tag> {
        self.root.get(name)
    }

    /// The single (name, root) entry of the document.
    pub fn iter(&self) -> std::iter::Once<(&NbtString, &Compound)> {
        std::iter::once((&self.name, &self.root))
    }
}

impl Index<&str> for Document {
    type Output = Tag;

    fn index(&self, name: &str) -> &Tag {
        &self.root[name]
    }
}

impl From<Document> for Compound {
    /// Convert to a compound with the root as its only member.
    fn from(doc: Document) -> Self {
        let (name, root) = doc.into_parts();
        let mut outer = Compound::new();
        outer.insert(name, root);
        outer
    }
}
