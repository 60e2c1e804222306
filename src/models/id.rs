//! Job ID allocation.

use std::sync::atomic::{AtomicU64, Ordering};

use super::{JobDescriptor, JobId};

/// Hands out monotonically increasing [`JobId`]s, starting at 1.
///
/// Each allocator is its own allocation context: IDs are unique per
/// allocator, not per process. Share one (e.g. behind an `Arc`) between
/// everything that builds jobs for the same scheduler.
#[derive(Debug)]
pub struct IdAllocator {
    next: AtomicU64,
}

impl IdAllocator {
    /// Creates an allocator whose first ID is 1.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Creates an allocator whose first ID is `first`.
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    /// Allocates the next ID.
    pub fn allocate(&self) -> JobId {
        JobId::new(self.next.fetch_add(1, Ordering::Relaxed))
    }

    /// Builds a job with a freshly allocated ID.
    pub fn job(&self, name: impl Into<String>, duration: i64) -> JobDescriptor {
        JobDescriptor::new(self.allocate(), name, duration)
    }

    /// The ID the next call to [`allocate`](Self::allocate) will return.
    pub fn peek(&self) -> JobId {
        JobId::new(self.next.load(Ordering::Relaxed))
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn test_sequential_ids() {
        let ids = IdAllocator::new();
        assert_eq!(ids.allocate(), JobId::new(1));
        assert_eq!(ids.allocate(), JobId::new(2));
        assert_eq!(ids.job("J3", 5).id(), JobId::new(3));
        assert_eq!(ids.peek(), JobId::new(4));
    }

    #[test]
    fn test_allocators_are_independent() {
        let a = IdAllocator::new();
        let b = IdAllocator::starting_at(100);
        a.allocate();
        assert_eq!(a.allocate(), JobId::new(2));
        assert_eq!(b.allocate(), JobId::new(100));
    }

    #[test]
    fn test_concurrent_allocation_unique() {
        let ids = Arc::new(IdAllocator::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let ids = Arc::clone(&ids);
                std::thread::spawn(move || (0..250).map(|_| ids.allocate()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for h in handles {
            for id in h.join().unwrap() {
                assert!(seen.insert(id), "ID {id} allocated twice");
            }
        }
        assert_eq!(seen.len(), 1000);
    }
}
