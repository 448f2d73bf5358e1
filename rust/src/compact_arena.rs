//! Compact arena holding tree nodes in a single `Vec<T>`.
//! Freed slots are recycled through a free list so node ids stay stable.

use std::ops::{Index, IndexMut};

pub type NodeId = u32;
pub const NULL_NODE: NodeId = u32::MAX;

/// Statistics for a compact arena
#[derive(Debug, Clone, Copy)]
pub struct CompactArenaStats {
    pub total_capacity: usize,
    pub allocated_count: usize,
    pub free_count: usize,
    pub utilization: f64,
    pub fragmentation: f64,
}

/// Arena allocator with a free list and an allocation mask
#[derive(Debug, Clone)]
pub struct CompactArena<T> {
    /// Direct storage without Option wrapper
    storage: Vec<T>,
    /// Free slot indices for reuse
    free_list: Vec<usize>,
    /// Track which slots are actually allocated
    allocated_mask: Vec<bool>,
}

impl<T> CompactArena<T> {
    /// Create a new empty compact arena
    pub fn new() -> Self {
        Self {
            storage: Vec::new(),
            free_list: Vec::new(),
            allocated_mask: Vec::new(),
        }
    }

    /// Create a new compact arena with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Vec::with_capacity(capacity),
            free_list: Vec::new(),
            allocated_mask: Vec::with_capacity(capacity),
        }
    }

    /// Allocate a new item in the arena and return its ID
    #[inline]
    pub fn allocate(&mut self, item: T) -> NodeId {
        let index = if let Some(free_index) = self.free_list.pop() {
            // Reuse a free slot
            self.storage[free_index] = item;
            self.allocated_mask[free_index] = true;
            free_index
        } else {
            let index = self.storage.len();
            self.storage.push(item);
            self.allocated_mask.push(true);
            index
        };

        Self::id_for(index)
    }

    /// Convert a storage index to its id. `NULL_NODE` is never handed out.
    fn id_for(index: usize) -> NodeId {
        NodeId::try_from(index)
            .ok()
            .filter(|&id| id != NULL_NODE)
            .expect("arena index should fit in a NodeId")
    }

    /// Deallocate an item from the arena and return it
    #[inline]
    pub fn deallocate(&mut self, id: NodeId) -> Option<T>
    where
        T: Default,
    {
        let index = self.slot(id)?;

        self.allocated_mask[index] = false;
        self.free_list.push(index);

        Some(std::mem::take(&mut self.storage[index]))
    }

    /// Get a reference to an item in the arena
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.slot(id).map(|index| &self.storage[index])
    }

    /// Get a mutable reference to an item in the arena
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        let index = self.slot(id)?;
        Some(&mut self.storage[index])
    }

    /// Check if an ID is valid and allocated
    pub fn contains(&self, id: NodeId) -> bool {
        self.slot(id).is_some()
    }

    /// Resolve an id to a storage index if it is allocated
    #[inline]
    fn slot(&self, id: NodeId) -> Option<usize> {
        if id == NULL_NODE {
            return None;
        }

        let index = usize::try_from(id).ok()?;
        self.allocated_mask
            .get(index)
            .copied()
            .unwrap_or(false)
            .then_some(index)
    }

    /// Get arena statistics
    pub fn stats(&self) -> CompactArenaStats {
        let total_capacity = self.storage.capacity();
        let allocated_count = self.len();
        let free_count = self.free_list.len();
        let utilization = if total_capacity > 0 {
            allocated_count as f64 / total_capacity as f64
        } else {
            0.0
        };
        let fragmentation = if allocated_count > 0 {
            free_count as f64 / (allocated_count + free_count) as f64
        } else {
            0.0
        };

        CompactArenaStats {
            total_capacity,
            allocated_count,
            free_count,
            utilization,
            fragmentation,
        }
    }

    /// Get the number of allocated items
    pub fn len(&self) -> usize {
        self.storage.len() - self.free_list.len()
    }

    /// Check if the arena is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all items from the arena
    pub fn clear(&mut self) {
        self.storage.clear();
        self.allocated_mask.clear();
        self.free_list.clear();
    }

    /// Get the number of free slots
    pub fn free_count(&self) -> usize {
        self.free_list.len()
    }

    /// Get the number of allocated items
    pub fn allocated_count(&self) -> usize {
        self.len()
    }
}

impl<T> Default for CompactArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<NodeId> for CompactArena<T> {
    type Output = T;

    fn index(&self, id: NodeId) -> &T {
        match self.get(id) {
            Some(item) => item,
            None => panic!("arena slot {} is not allocated", id),
        }
    }
}

impl<T> IndexMut<NodeId> for CompactArena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut T {
        match self.slot(id) {
            Some(index) => &mut self.storage[index],
            None => panic!("arena slot {} is not allocated", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_arena_basic_operations() {
        let mut arena = CompactArena::new();

        let id1 = arena.allocate(42);
        let id2 = arena.allocate(84);
        let id3 = arena.allocate(126);

        assert_eq!(arena.get(id1), Some(&42));
        assert_eq!(arena.get(id2), Some(&84));
        assert_eq!(arena[id3], 126);

        assert!(arena.contains(id1));
        assert!(!arena.contains(NULL_NODE));

        let stats = arena.stats();
        assert_eq!(stats.allocated_count, 3);
        assert_eq!(stats.free_count, 0);
    }

    #[test]
    fn test_deallocate_recycles_slot() {
        let mut arena: CompactArena<i32> = CompactArena::new();

        let id1 = arena.allocate(42);
        let id2 = arena.allocate(84);

        assert_eq!(arena.deallocate(id1), Some(42));
        assert!(!arena.contains(id1));
        assert!(arena.contains(id2));
        assert_eq!(arena.deallocate(id1), None);
        assert_eq!(arena.free_count(), 1);

        let id3 = arena.allocate(168);
        assert_eq!(id3, id1);
        assert_eq!(arena.get(id3), Some(&168));
        assert_eq!(arena.allocated_count(), 2);
        assert_eq!(arena.free_count(), 0);
    }

    #[test]
    #[should_panic(expected = "not allocated")]
    fn test_index_unallocated_panics() {
        let mut arena = CompactArena::new();
        let id = arena.allocate(1);
        arena.deallocate(id);
        let _value: i32 = arena[id];
    }

    #[test]
    fn test_id_for_fits_node_id() {
        assert_eq!(CompactArena::<i32>::id_for(0), 0);
        let last = usize::try_from(NULL_NODE - 1).unwrap();
        assert_eq!(CompactArena::<i32>::id_for(last), NULL_NODE - 1);
    }

    #[test]
    #[should_panic(expected = "should fit in a NodeId")]
    fn test_id_for_rejects_null_node() {
        let index = usize::try_from(NULL_NODE).unwrap();
        CompactArena::<i32>::id_for(index);
    }

    #[test]
    fn test_clear() {
        let mut arena = CompactArena::with_capacity(4);
        arena.allocate(1);
        arena.allocate(2);
        arena.clear();
        assert!(arena.is_empty());
        assert_eq!(arena.stats().allocated_count, 0);
    }
}
