use std::cmp::{Ordering, Reverse};

pub(super) struct Item<T, P> {
    pub(super) value: T,
    pub(super) priority: P,
    pub(super) sequence: u64,
}

impl<T, P: Ord> Item<T, P> {
    fn key(&self) -> (&P, Reverse<u64>) {
        (&self.priority, Reverse(self.sequence))
    }
}

impl<T, P: Ord> PartialEq for Item<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<T, P: Ord> Eq for Item<T, P> {}

impl<T, P: Ord> PartialOrd for Item<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// greatest item: highest priority, then earliest arrival
impl<T, P: Ord> Ord for Item<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}
