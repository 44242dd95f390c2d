//! Working cache for the pair matcher
//!
//! Entries are keyed by arrival identity, so iteration follows insertion
//! order and repeated labels never collide. An entry leaves the cache the
//! instant it has appeared in two emitted tuples.

use std::collections::BTreeMap;

use seam_core::SeqId;

/// Times an element may appear in emitted tuples before it retires.
pub(crate) const MAX_USES: u8 = 2;

#[derive(Debug)]
struct CacheEntry<T> {
    element: T,
    uses: u8,
}

/// Insertion-ordered working set of elements still awaiting a partner.
#[derive(Debug)]
pub(crate) struct MatchCache<T> {
    entries: BTreeMap<SeqId, CacheEntry<T>>,
}

impl<T> MatchCache<T> {
    pub(crate) fn new() -> Self {
        MatchCache {
            entries: BTreeMap::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Admits an element that finished its arrival scan below the use cap.
    pub(crate) fn admit(&mut self, id: SeqId, element: T, uses: u8) {
        self.entries.insert(id, CacheEntry { element, uses });
    }

    /// Cached elements in insertion order, oldest first.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (SeqId, &T)> {
        self.entries.iter().map(|(id, entry)| (*id, &entry.element))
    }

    /// Charges one emitted tuple against a cached entry and hands the
    /// element back for emission. Reaching the use cap evicts the entry.
    pub(crate) fn bump(&mut self, id: SeqId) -> Option<T>
    where
        T: Clone,
    {
        let uses = {
            let entry = self.entries.get_mut(&id)?;
            entry.uses += 1;
            entry.uses
        };
        if uses >= MAX_USES {
            self.entries.remove(&id).map(|entry| entry.element)
        } else {
            self.entries.get(&id).map(|entry| entry.element.clone())
        }
    }

    /// Removes and returns the oldest entry, for the end-of-stream drain.
    pub(crate) fn pop_oldest(&mut self) -> Option<T> {
        self.entries.pop_first().map(|(_, entry)| entry.element)
    }
}
