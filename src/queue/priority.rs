use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Heap entry ordered so that `BinaryHeap` (a max-heap) pops the lowest
/// priority first, and among equal priorities the earliest insertion.
#[derive(Debug, Clone)]
struct Entry<T, P> {
    priority: P,
    seq: u64,
    item: T,
}

impl<T, P: Ord> PartialEq for Entry<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T, P: Ord> Eq for Entry<T, P> {}

impl<T, P: Ord> PartialOrd for Entry<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, P: Ord> Ord for Entry<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Min-priority queue: lower priority values are served first.
///
/// Items with equal priority come out in insertion order.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T, P: Ord> {
    heap: BinaryHeap<Entry<T, P>>,
    next_seq: u64,
}

impl<T, P: Ord> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }
}

impl<T, P: Ord> PriorityQueue<T, P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `item` with `priority` (lower = more urgent).
    pub fn enqueue(&mut self, item: T, priority: P) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { priority, seq, item });
    }

    /// Remove and return the most urgent item.
    pub fn dequeue(&mut self) -> Option<T> {
        self.heap.pop().map(|entry| entry.item)
    }

    pub fn peek(&self) -> Option<&T> {
        self.heap.peek().map(|entry| &entry.item)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// `(priority, item)` pairs in the order they would be dequeued.
    pub fn iter_sorted(&self) -> Vec<(&P, &T)> {
        let mut entries: Vec<&Entry<T, P>> = self.heap.iter().collect();
        entries.sort_by(|a, b| b.cmp(a));
        entries
            .into_iter()
            .map(|entry| (&entry.priority, &entry.item))
            .collect()
    }

    /// Consume the queue, yielding `(priority, item)` pairs in dequeue order.
    pub fn into_sorted_vec(self) -> Vec<(P, T)> {
        // Ascending by `Ord` means least urgent first; reverse for dequeue order.
        let mut entries = self.heap.into_sorted_vec();
        entries.reverse();
        entries
            .into_iter()
            .map(|entry| (entry.priority, entry.item))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowest_priority_first() {
        let mut queue = PriorityQueue::new();
        queue.enqueue("Low priority task", 5);
        queue.enqueue("High priority task", 1);
        queue.enqueue("Medium priority task", 3);
        queue.enqueue("Critical task", 0);

        assert_eq!(queue.peek(), Some(&"Critical task"));
        assert_eq!(queue.len(), 4);

        let order: Vec<_> = std::iter::from_fn(|| queue.dequeue()).collect();
        assert_eq!(
            order,
            vec![
                "Critical task",
                "High priority task",
                "Medium priority task",
                "Low priority task"
            ]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn test_equal_priorities_are_fifo() {
        let mut queue = PriorityQueue::new();
        queue.enqueue('z', 2);
        queue.enqueue('a', 2);
        queue.enqueue('m', 1);
        queue.enqueue('b', 2);
        assert_eq!(queue.dequeue(), Some('m'));
        assert_eq!(queue.dequeue(), Some('z'));
        assert_eq!(queue.dequeue(), Some('a'));
        assert_eq!(queue.dequeue(), Some('b'));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn test_sorted_views_match_dequeue_order() {
        let mut queue = PriorityQueue::new();
        queue.enqueue("b", 2);
        queue.enqueue("a", 1);
        queue.enqueue("c", 2);

        let view: Vec<(i32, &str)> = queue
            .iter_sorted()
            .into_iter()
            .map(|(p, item)| (*p, *item))
            .collect();
        assert_eq!(view, vec![(1, "a"), (2, "b"), (2, "c")]);
        assert_eq!(queue.len(), 3);

        assert_eq!(queue.into_sorted_vec(), vec![(1, "a"), (2, "b"), (2, "c")]);
    }

    #[test]
    fn test_items_need_not_be_ordered() {
        #[derive(Debug, PartialEq)]
        struct Job(&'static str);

        let mut queue = PriorityQueue::new();
        queue.enqueue(Job("later"), 10u8);
        queue.enqueue(Job("sooner"), 1u8);
        assert_eq!(queue.dequeue(), Some(Job("sooner")));
    }
}
