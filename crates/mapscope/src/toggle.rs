//! Named visibility toggles.
//!
//! A toggle is a named, user-controllable bucket of elements spanning any
//! number of plot objects. Both the bucket order and the member order inside
//! each bucket follow insertion order; later toggle application iterates in
//! exactly that order.

use crate::element::ElementId;

/// One named bucket of elements.
#[derive(Debug)]
pub struct Toggle {
    name: String,
    members: Vec<ElementId>,
}

impl Toggle {
    /// The toggle's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The member elements in addition order.
    pub fn members(&self) -> &[ElementId] {
        &self.members
    }
}

/// Insertion-ordered registry of visibility toggles.
#[derive(Debug, Default)]
pub struct ToggleRegistry {
    toggles: Vec<Toggle>,
}

impl ToggleRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an element to the named bucket, creating the bucket on first
    /// use. Existing buckets keep their position.
    pub fn add(&mut self, name: &str, element: ElementId) {
        if let Some(toggle) = self.toggles.iter_mut().find(|t| t.name == name) {
            toggle.members.push(element);
        } else {
            self.toggles.push(Toggle {
                name: name.to_string(),
                members: vec![element],
            });
        }
    }

    /// Looks up a bucket by name.
    pub fn get(&self, name: &str) -> Option<&Toggle> {
        self.toggles.iter().find(|t| t.name == name)
    }

    /// Iterates buckets in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Toggle> {
        self.toggles.iter()
    }

    /// Bucket names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.toggles.iter().map(|t| t.name.as_str())
    }

    /// Number of buckets.
    pub fn len(&self) -> usize {
        self.toggles.len()
    }

    /// Returns true if no bucket exists.
    pub fn is_empty(&self) -> bool {
        self.toggles.is_empty()
    }
}
