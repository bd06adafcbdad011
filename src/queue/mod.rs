//! A priority queue with first-in-first-out tie-breaking.
//!
//! Larger priorities are served first. Entries of equal priority leave the
//! queue in the order they arrived.

mod item;

use crate::error::EmptyQueue;
use item::Item;
use std::collections::BinaryHeap;
use std::fmt;
use std::iter::FromIterator;
use std::mem;

/// Values of type `T` ordered by a priority of type `P`.
///
/// `dequeue` always returns the value with the greatest priority present.
/// If several values share that priority, the one enqueued first wins.
///
/// ```
/// use triage::queue::PriorityQueue;
///
/// let mut queue = PriorityQueue::new();
/// queue.enqueue("Low", 1);
/// queue.enqueue("High", 10);
/// queue.enqueue("Also high", 10);
/// assert_eq!(queue.dequeue(), Ok("High"));
/// assert_eq!(queue.dequeue(), Ok("Also high"));
/// assert_eq!(queue.dequeue(), Ok("Low"));
/// assert!(queue.dequeue().is_err());
/// ```
pub struct PriorityQueue<T, P = i64> {
    heap: BinaryHeap<Item<T, P>>,
    sequence: u64,
}

impl<T, P: Ord> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        let heap = BinaryHeap::default();
        let sequence = 0;
        Self { heap, sequence }
    }
}

impl<T, P: Ord> PriorityQueue<T, P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let heap = BinaryHeap::with_capacity(capacity);
        let sequence = 0;
        Self { heap, sequence }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Add `value` behind everything already waiting at `priority`.
    pub fn enqueue(&mut self, value: T, priority: P) {
        let sequence = self.sequence;
        self.sequence += 1;
        self.heap.push(Item {
            value,
            priority,
            sequence,
        });
    }

    /// Remove and return the next value to be served.
    ///
    /// Fails with [`EmptyQueue`] if nothing is waiting, in which case the
    /// queue is left untouched.
    pub fn dequeue(&mut self) -> Result<T, EmptyQueue> {
        let item = self.heap.pop().ok_or(EmptyQueue)?;
        Ok(item.value)
    }

    /// The value `dequeue` would return next, with its priority.
    pub fn peek(&self) -> Option<(&T, &P)> {
        self.heap.peek().map(|item| (&item.value, &item.priority))
    }

    /// Remove every entry.
    ///
    /// Sequence numbers are not reused afterwards.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Entries in arrival order, regardless of priority.
    pub fn iter<'a>(&'a self) -> impl Iterator<Item = (&'a T, &'a P)> {
        let mut items: Vec<&'a Item<T, P>> = self.heap.iter().collect();
        items.sort_unstable_by_key(|item| item.sequence);
        items.into_iter().map(|item| (&item.value, &item.priority))
    }

    /// Empty the queue, yielding values in the order they would be served.
    pub fn drain(&mut self) -> impl Iterator<Item = T> {
        let heap = mem::take(&mut self.heap);
        heap.into_sorted_vec().into_iter().rev().map(|item| item.value)
    }
}

impl<T, P: Ord> Extend<(T, P)> for PriorityQueue<T, P> {
    fn extend<I: IntoIterator<Item = (T, P)>>(&mut self, entries: I) {
        for (value, priority) in entries {
            self.enqueue(value, priority);
        }
    }
}

impl<T, P: Ord> FromIterator<(T, P)> for PriorityQueue<T, P> {
    fn from_iter<I: IntoIterator<Item = (T, P)>>(entries: I) -> Self {
        let mut queue = Self::new();
        queue.extend(entries);
        queue
    }
}

impl<T: fmt::Debug, P: Ord + fmt::Debug> fmt::Debug for PriorityQueue<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display, P: Ord + fmt::Display> fmt::Display
    for PriorityQueue<T, P>
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (index, (value, priority)) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} (Pri:{})", value, priority)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain_all<T, P: Ord>(queue: &mut PriorityQueue<T, P>) -> Vec<T> {
        let mut values = vec![];
        while let Ok(value) = queue.dequeue() {
            values.push(value);
        }
        values
    }

    #[test]
    fn serves_highest_priority_first() {
        let mut queue = PriorityQueue::new();
        queue.enqueue("Low", 1);
        queue.enqueue("High", 10);
        queue.enqueue("Medium", 5);

        assert_eq!(queue.dequeue(), Ok("High"));
        assert_eq!(queue.dequeue(), Ok("Medium"));
        assert_eq!(queue.dequeue(), Ok("Low"));
        assert_eq!(queue.dequeue(), Err(EmptyQueue));
    }

    #[test]
    fn last_entry_is_considered() {
        let mut queue = PriorityQueue::new();
        queue.enqueue("First", 1);
        queue.enqueue("Second", 2);
        queue.enqueue("Third", 3);
        queue.enqueue("Last", 100);

        assert_eq!(queue.dequeue(), Ok("Last"));
        assert_eq!(queue.dequeue(), Ok("Third"));
        assert_eq!(queue.dequeue(), Ok("Second"));
        assert_eq!(queue.dequeue(), Ok("First"));
    }

    #[test]
    fn first_entry_is_considered() {
        let mut queue = PriorityQueue::new();
        queue.enqueue("First", 100);
        queue.enqueue("Second", 2);
        queue.enqueue("Third", 3);

        assert_eq!(queue.dequeue(), Ok("First"));
    }

    #[test]
    fn ties_are_broken_by_arrival() {
        let mut queue = PriorityQueue::new();
        queue.enqueue("A", 5);
        queue.enqueue("B", 5);

        assert_eq!(queue.dequeue(), Ok("A"));
        assert_eq!(queue.dequeue(), Ok("B"));
    }

    #[test]
    fn ties_survive_interleaving() {
        let mut queue = PriorityQueue::new();
        queue.enqueue("a1", 2);
        queue.enqueue("b1", 7);
        queue.enqueue("a2", 2);
        queue.enqueue("c1", -3);
        queue.enqueue("b2", 7);
        assert_eq!(queue.dequeue(), Ok("b1"));
        queue.enqueue("b3", 7);
        queue.enqueue("a3", 2);

        assert_eq!(drain_all(&mut queue), ["b2", "b3", "a1", "a2", "a3", "c1"]);
    }

    #[test]
    fn empty_dequeue_leaves_queue_empty() {
        let mut queue: PriorityQueue<&str> = PriorityQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.dequeue(), Err(EmptyQueue));
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);

        queue.enqueue("x", 0);
        assert_eq!(queue.dequeue(), Ok("x"));
        assert_eq!(queue.dequeue(), Err(EmptyQueue));
        assert!(queue.is_empty());
    }

    #[test]
    fn length_tracks_every_operation() {
        let mut queue = PriorityQueue::new();
        let priorities = [3, -1, 3, 0, 9, 9, -1, 4];
        for (count, priority) in priorities.iter().enumerate() {
            assert_eq!(queue.len(), count);
            queue.enqueue(count, *priority);
        }
        for remaining in (0..priorities.len()).rev() {
            assert!(queue.dequeue().is_ok());
            assert_eq!(queue.len(), remaining);
        }
        assert!(queue.is_empty());
    }

    #[test]
    fn duplicates_are_distinct_entries() {
        let mut queue = PriorityQueue::new();
        let entries = [("x", 1), ("y", 1), ("x", 1), ("x", 4), ("y", 0)];
        queue.extend(entries.iter().copied());

        let mut served = drain_all(&mut queue);
        let mut expected: Vec<_> =
            entries.iter().map(|(value, _)| *value).collect();
        served.sort_unstable();
        expected.sort_unstable();
        assert_eq!(served, expected);
    }

    #[test]
    fn distinct_priorities_come_out_descending() {
        let priorities = [17, -4, 0, 256, 3, -90, 42, 8];
        let mut queue: PriorityQueue<i64> =
            priorities.iter().map(|p| (*p, *p)).collect();

        let served = drain_all(&mut queue);
        let mut expected = priorities.to_vec();
        expected.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(served, expected);
    }

    #[test]
    fn peek_matches_dequeue() {
        let mut queue = PriorityQueue::new();
        assert!(queue.peek().is_none());
        queue.enqueue('a', 1);
        queue.enqueue('b', 3);
        queue.enqueue('c', 3);

        assert_eq!(queue.peek(), Some((&'b', &3)));
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.dequeue(), Ok('b'));
        assert_eq!(queue.peek(), Some((&'c', &3)));
    }

    #[test]
    fn clear_keeps_sequence_running() {
        let mut queue = PriorityQueue::new();
        queue.enqueue("old", 1);
        queue.clear();
        assert!(queue.is_empty());

        queue.enqueue("new", 1);
        queue.enqueue("newer", 1);
        assert_eq!(queue.dequeue(), Ok("new"));
        assert_eq!(queue.dequeue(), Ok("newer"));
    }

    #[test]
    fn drain_yields_service_order() {
        let mut queue = PriorityQueue::new();
        queue.extend(vec![("c", 1), ("a", 9), ("d", 1), ("b", 5)]);

        let served: Vec<_> = queue.drain().collect();
        assert_eq!(served, ["a", "b", "c", "d"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn display_lists_arrival_order() {
        let mut queue = PriorityQueue::new();
        assert_eq!(queue.to_string(), "[]");
        queue.enqueue("Low", 1);
        queue.enqueue("High", 10);
        assert_eq!(queue.to_string(), "[Low (Pri:1), High (Pri:10)]");

        let arrivals: Vec<_> = queue.iter().map(|(value, _)| *value).collect();
        assert_eq!(arrivals, ["Low", "High"]);
    }

    #[test]
    fn works_with_other_priority_types() {
        let mut queue = PriorityQueue::new();
        queue.enqueue("later", (1u8, 'b'));
        queue.enqueue("sooner", (1u8, 'z'));
        queue.enqueue("first", (2u8, 'a'));

        assert_eq!(drain_all(&mut queue), ["first", "sooner", "later"]);
    }
}
