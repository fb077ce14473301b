use std::ops::Index;

use crate::{NbtString, Tag};

#[cfg(not(feature = "preserve-order"))]
type Map = std::collections::HashMap<NbtString, Tag>;

#[cfg(feature = "preserve-order")]
type Map = indexmap::IndexMap<NbtString, Tag>;

#[cfg(not(feature = "preserve-order"))]
pub type Iter<'a> = std::collections::hash_map::Iter<'a, NbtString, Tag>;

#[cfg(feature = "preserve-order")]
pub type Iter<'a> = indexmap::map::Iter<'a, NbtString, Tag>;

/// An NBT compound: a mapping of unique names to tags.
///
/// Iteration order is unspecified unless the `preserve-order` feature is
/// enabled, in which case entries iterate in the order they were first seen
/// in the input. Equality never depends on order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Compound {
    map: Map,
}

impl Compound {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a tag, returning the previous tag of the same name. When NBT
    /// repeats a name inside one compound the last value wins.
    pub fn insert(&mut self, name: impl Into<NbtString>, tag: impl Into<Tag>) -> Option<Tag> {
        self.map.insert(name.into(), tag.into())
    }

    /// Look up a tag by name. The name is compared in its modified UTF-8
    /// encoding, which is identical to UTF-8 for everything but NUL and
    /// characters outside the basic multilingual plane.
    pub fn get(&self, name: &str) -> Option<&Tag> {
        self.map.get(&*cesu8::to_java_cesu8(name))
    }

    /// Look up a tag by the raw bytes of its name.
    pub fn get_bytes(&self, name: &[u8]) -> Option<&Tag> {
        self.map.get(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> Iter<'_> {
        self.map.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &NbtString> {
        self.map.keys()
    }
}

impl Index<&str> for Compound {
    type Output = Tag;

    /// Panics if there is no tag with the given name, like indexing a
    /// `HashMap`.
    fn index(&self, name: &str) -> &Tag {
        match self.get(name) {
            Some(tag) => tag,
            None => panic!("no tag named {:?} in compound", name),
        }
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = (&'a NbtString, &'a Tag);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Compound
where
    K: Into<NbtString>,
    V: Into<Tag>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut compound = Compound::new();
        for (k, v) in iter {
            compound.insert(k, v);
        }
        compound
    }
}
