/*!
 * Safe Queue
 *
 * FIFO container guarded by a single mutex. Each method is one lock
 * round-trip; a caller chaining `len()` and `pop()` gets no atomicity
 * across the two calls. Use `pop_batch` when several items must leave the
 * queue together.
 *
 * Empty is not an error: `pop` on an empty queue returns `None`.
 */

use parking_lot::Mutex;
use std::collections::VecDeque;
use std::fmt;

/// Thread-safe FIFO queue
pub struct SafeQueue<T> {
    items: Mutex<VecDeque<T>>,
}

impl<T> SafeQueue<T> {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            items: Mutex::new(VecDeque::new()),
        }
    }

    /// Create an empty queue with room for `capacity` items
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Number of queued items
    #[inline]
    pub fn len(&self) -> usize {
        self.items.lock().len()
    }

    /// Whether the queue holds no items
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.lock().is_empty()
    }

    /// Push an item at the tail
    #[inline]
    pub fn append(&self, item: T) {
        self.items.lock().push_back(item);
    }

    /// Remove and return the oldest item, `None` if empty
    #[inline]
    pub fn pop(&self) -> Option<T> {
        self.items.lock().pop_front()
    }

    /// Remove and return the item at `index` (0 = oldest)
    ///
    /// Returns `None` when `index` is out of range, including on an empty
    /// queue.
    pub fn pop_at(&self, index: usize) -> Option<T> {
        self.items.lock().remove(index)
    }

    /// Remove up to `max` oldest items in a single lock acquisition
    ///
    /// Items come back in FIFO order. Returns an empty vector if the queue
    /// is empty or `max` is zero.
    pub fn pop_batch(&self, max: usize) -> Vec<T> {
        let mut items = self.items.lock();
        let take = max.min(items.len());
        items.drain(..take).collect()
    }

    /// Drop every queued item
    pub fn clear(&self) {
        self.items.lock().clear();
    }
}

impl<T> Default for SafeQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for SafeQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: Mutex::new(iter.into_iter().collect()),
        }
    }
}

impl<T> fmt::Debug for SafeQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SafeQueue")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_pop_empty_returns_none() {
        let queue: SafeQueue<u32> = SafeQueue::new();
        assert_eq!(queue.pop(), None);
        assert_eq!(queue.pop_at(3), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_fifo_order() {
        let queue = SafeQueue::new();
        queue.append("a");
        queue.append("b");
        queue.append("c");

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.pop(), Some("a"));
        assert_eq!(queue.pop(), Some("b"));
        assert_eq!(queue.pop(), Some("c"));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_pop_at_index() {
        let queue: SafeQueue<_> = (0..5).collect();

        assert_eq!(queue.pop_at(2), Some(2));
        assert_eq!(queue.pop_at(10), None);
        assert_eq!(queue.len(), 4);
        assert_eq!(queue.pop(), Some(0));
    }

    #[test]
    fn test_pop_batch() {
        let queue: SafeQueue<_> = (0..5).collect();

        assert_eq!(queue.pop_batch(3), vec![0, 1, 2]);
        assert_eq!(queue.pop_batch(10), vec![3, 4]);
        assert!(queue.pop_batch(1).is_empty());
        assert!(queue.pop_batch(0).is_empty());
    }

    #[test]
    fn test_clear() {
        let queue: SafeQueue<_> = (0..100).collect();
        queue.clear();
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_concurrent_consumers_never_duplicate() {
        let queue: Arc<SafeQueue<u32>> = Arc::new((0..10_000).collect());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let queue = queue.clone();
                thread::spawn(move || {
                    let mut seen = Vec::new();
                    while let Some(item) = queue.pop() {
                        seen.push(item);
                    }
                    seen
                })
            })
            .collect();

        let mut all = HashSet::new();
        for handle in handles {
            for item in handle.join().unwrap() {
                assert!(all.insert(item), "item {} popped twice", item);
            }
        }
        assert_eq!(all.len(), 10_000);
    }
}
