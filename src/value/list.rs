use std::ops::Index;

use crate::{Tag, TagId};

/// An NBT list. Every element has the same type, given by
/// [`element_id`][List::element_id]. An empty list may have an element type of
/// End, which is how Minecraft often writes lists it has no type for.
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    element_id: TagId,
    items: Vec<Tag>,
}

impl List {
    /// Create a list, checking every element is of type `element_id`. Returns
    /// `None` if they are not, or if a non-empty list is given End as its type.
    pub fn new(element_id: TagId, items: Vec<Tag>) -> Option<Self> {
        if element_id == TagId::End && !items.is_empty() {
            return None;
        }
        if items.iter().any(|t| t.id() != element_id) {
            return None;
        }
        Some(Self { element_id, items })
    }

    /// An empty list with an End element type.
    pub fn empty() -> Self {
        Self {
            element_id: TagId::End,
            items: vec![],
        }
    }

    /// Only the decoder calls this, after reading each element as
    /// `element_id`.
    pub(crate) fn from_decoded(element_id: TagId, items: Vec<Tag>) -> Self {
        debug_assert!(items.iter().all(|t| t.id() == element_id));
        Self { element_id, items }
    }

    pub fn element_id(&self) -> TagId {
        self.element_id
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Tag> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Tag] {
        &self.items
    }

    pub fn into_inner(self) -> Vec<Tag> {
        self.items
    }
}

impl Default for List {
    fn default() -> Self {
        Self::empty()
    }
}

impl Index<usize> for List {
    type Output = Tag;

    fn index(&self, index: usize) -> &Tag {
        &self.items[index]
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for List {
    type Item = Tag;
    type IntoIter = std::vec::IntoIter<Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
