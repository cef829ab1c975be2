//! Disjoint union of sequences with an element-to-part membership index.

use std::collections::hash_map;
use std::collections::HashMap;
use std::hash::Hash;

/// A collection of disjoint ordered parts (circuits, orbits, ...) together
/// with a map sending every stored element to the id of its part.
///
/// Both views are built together; the map is the source of truth for
/// membership tests.
#[derive(Debug, Clone)]
pub struct Partition<T> {
    parts: Vec<Vec<T>>,
    index: HashMap<T, usize>,
}

impl<T> Default for Partition<T> {
    fn default() -> Self {
        Self {
            parts: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Hash + Eq + Clone> Partition<T> {
    /// Creates an empty partition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new part and indexes its elements. Returns the part id.
    ///
    /// Linear in the length of the part. Elements must not already be stored.
    pub fn insert(&mut self, part: Vec<T>) -> usize {
        let id = self.parts.len();
        for element in &part {
            let previous = self.index.insert(element.clone(), id);
            debug_assert!(previous.is_none(), "element stored in two parts");
        }
        self.parts.push(part);
        id
    }

    /// Membership test.
    pub fn contains(&self, element: &T) -> bool {
        self.index.contains_key(element)
    }

    /// Returns the id of the part holding `element`.
    pub fn part_of(&self, element: &T) -> Option<usize> {
        self.index.get(element).copied()
    }

    /// All parts, in insertion order.
    pub fn parts(&self) -> &[Vec<T>] {
        &self.parts
    }

    /// The part with the given id.
    pub fn part(&self, id: usize) -> &[T] {
        &self.parts[id]
    }

    /// Number of parts.
    pub fn number_of_parts(&self) -> usize {
        self.parts.len()
    }

    /// Total number of stored elements.
    pub fn cardinality(&self) -> usize {
        self.index.len()
    }

    /// Sizes of the parts, in insertion order.
    pub fn part_sizes(&self) -> Vec<usize> {
        self.parts.iter().map(Vec::len).collect()
    }

    /// Iterates over all stored elements, in no particular order.
    pub fn iter(&self) -> hash_map::Keys<'_, T, usize> {
        self.index.keys()
    }
}
