use ferrous_neighbors_domain::Neighbor;
use std::sync::{Arc, RwLock};

/// Holder of the published neighbor snapshot.
///
/// The lock only guards the `Arc` itself: readers clone the pointer and copy
/// outside the critical section, writers swap in a fully built slice. A
/// reader therefore sees either the previous or the next snapshot, never a
/// mix of both.
pub struct NeighborStore {
    snapshot: RwLock<Arc<[Neighbor]>>,
}

impl NeighborStore {
    pub fn new() -> Self {
        Self {
            snapshot: RwLock::new(Arc::from(Vec::new())),
        }
    }

    /// Immutable view of the current snapshot.
    pub fn snapshot(&self) -> Arc<[Neighbor]> {
        let guard = self.snapshot.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    /// Owned copy of the current snapshot.
    pub fn neighbors(&self) -> Vec<Neighbor> {
        self.snapshot().to_vec()
    }

    /// Replaces the whole snapshot.
    pub fn set_all(&self, neighbors: Vec<Neighbor>) {
        let next: Arc<[Neighbor]> = Arc::from(neighbors);
        let mut guard = self.snapshot.write().unwrap_or_else(|e| e.into_inner());
        *guard = next;
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for NeighborStore {
    fn default() -> Self {
        Self::new()
    }
}
