//! # Vocabulary Indexer
//!
//! Bidirectional mapping between feature strings and dense integer slots.
//! Slots are handed out in first-seen order starting at zero and are never
//! reassigned or removed.

use std::collections::HashMap;

/// Maps feature strings to dense indices and back.
#[derive(Debug, Clone, Default)]
pub struct Indexer {
    objs_to_ints: HashMap<String, usize>,
    ints_to_objs: Vec<String>,
}

impl Indexer {
    /// Create an empty indexer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.ints_to_objs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ints_to_objs.is_empty()
    }

    /// Look up the index of `obj` without registering it.
    pub fn index_of(&self, obj: &str) -> Option<usize> {
        self.objs_to_ints.get(obj).copied()
    }

    /// Look up the string registered at `index`.
    pub fn get_object(&self, index: usize) -> Option<&str> {
        self.ints_to_objs.get(index).map(String::as_str)
    }

    pub fn contains(&self, obj: &str) -> bool {
        self.objs_to_ints.contains_key(obj)
    }

    /// Return the index of `obj`, registering it first when `add` is true.
    ///
    /// With `add == false` this is a pure lookup and unseen strings yield
    /// `None`.
    ///
    /// # Examples
    /// ```
    /// use senti_core::Indexer;
    ///
    /// let mut indexer = Indexer::new();
    /// assert_eq!(indexer.add_and_get_index("good", true), Some(0));
    /// assert_eq!(indexer.add_and_get_index("bad", false), None);
    /// assert_eq!(indexer.len(), 1);
    /// ```
    pub fn add_and_get_index(&mut self, obj: &str, add: bool) -> Option<usize> {
        if !add {
            return self.index_of(obj);
        }
        if let Some(&idx) = self.objs_to_ints.get(obj) {
            return Some(idx);
        }

        let idx = self.ints_to_objs.len();
        self.objs_to_ints.insert(obj.to_string(), idx);
        self.ints_to_objs.push(obj.to_string());
        Some(idx)
    }

    /// Iterate over registered strings in index order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ints_to_objs.iter().map(String::as_str)
    }
}
