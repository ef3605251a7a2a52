//! Free-list node arena with generation-checked handles.
//!
//! - Insertion: O(1) amortized (pop from free list or grow)
//! - Removal: O(1) (push to free list, bump the slot generation)

use std::ops::{Index, IndexMut};

use super::NodeId;

#[derive(Debug, Clone)]
struct Slot<T> {
    generation: u32,
    value: Option<T>,
}

/// Owns the nodes of one tree.
#[derive(Debug, Clone)]
pub(crate) struct NodeArena<T> {
    slots: Vec<Slot<T>>,
    free_indices: Vec<usize>,
    len: usize,
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            free_indices: Vec::new(),
            len: 0,
        }
    }
}

impl<T> NodeArena<T> {
    /// Stores `value` and returns its handle, reusing a freed slot if any.
    pub(crate) fn insert(&mut self, value: T) -> NodeId {
        self.len += 1;
        if let Some(index) = self.free_indices.pop() {
            let slot = &mut self.slots[index];
            slot.value = Some(value);
            return NodeId {
                index,
                generation: slot.generation,
            };
        }
        self.slots.push(Slot {
            generation: 0,
            value: Some(value),
        });
        NodeId {
            index: self.slots.len() - 1,
            generation: 0,
        }
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&T> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.value.as_ref())
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.value.as_mut())
    }

    /// Removes the node, invalidating `id` and every copy of it.
    pub(crate) fn remove(&mut self, id: NodeId) -> Option<T> {
        let slot = self
            .slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)?;
        let value = slot.value.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free_indices.push(id.index);
        self.len -= 1;
        Some(value)
    }

    /// Number of live nodes.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_indices.clear();
        self.len = 0;
    }
}

/// Follows an internal link.
///
/// # Panics
///
/// Panics if `id` is stale. Links stored inside a tree always point at live
/// nodes, so this only fires on a broken tree invariant.
impl<T> Index<NodeId> for NodeArena<T> {
    type Output = T;

    fn index(&self, id: NodeId) -> &T {
        match self.get(id) {
            Some(value) => value,
            None => panic!("dangling node link {id}"),
        }
    }
}

impl<T> IndexMut<NodeId> for NodeArena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut T {
        match self.get_mut(id) {
            Some(value) => value,
            None => panic!("dangling node link {id}"),
        }
    }
}
