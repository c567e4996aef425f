use core::cmp::Ordering;
use core::fmt::{self, Display, Formatter};

/// Which end of the ordering a heap keeps at its root.
///
/// Fixed when a queue is constructed and never changed afterwards.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HeapKind {
    Min,
    Max,
}

/// A (priority, value) pair stored in a `PriorityQueue`.
///
/// Immutable once constructed. Equality is structural (both fields equal) and
/// independent of heap orientation; ordering is only defined relative to a
/// `HeapKind`, via [`cmp_in`](Node::cmp_in).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Node<P, V> {
    priority: P,
    value: V,
}

impl<P, V> Node<P, V> {
    pub fn new(priority: P, value: V) -> Self {
        Self { priority, value }
    }

    pub fn priority(&self) -> &P {
        &self.priority
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn into_value(self) -> V {
        self.value
    }
}

impl<P: Ord, V: Ord> Node<P, V> {
    /// Compares two nodes under the given orientation.
    ///
    /// `Less` always means "belongs nearer the root". For `Min` that is the
    /// lower priority, ties broken by lower value; for `Max` the higher
    /// priority, ties broken by higher value. Encoding the orientation here
    /// lets the queue engine run a single comparison in both modes.
    pub fn cmp_in(&self, other: &Self, kind: HeapKind) -> Ordering {
        let forward = (&self.priority, &self.value).cmp(&(&other.priority, &other.value));
        match kind {
            HeapKind::Min => forward,
            HeapKind::Max => forward.reverse(),
        }
    }
}

impl<P: Display, V: Display> Display for Node<P, V> {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> fmt::Result {
        write!(fmt, "<{}, {}>", self.priority, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_ordering() {
        let a = Node::new(1, 10);
        let b = Node::new(2, 10);
        assert_eq!(a.cmp_in(&b, HeapKind::Min), Ordering::Less);
        assert_eq!(b.cmp_in(&a, HeapKind::Min), Ordering::Greater);
    }

    #[test]
    fn max_ordering() {
        let a = Node::new(1, 10);
        let b = Node::new(2, 10);
        assert_eq!(a.cmp_in(&b, HeapKind::Max), Ordering::Greater);
        assert_eq!(b.cmp_in(&a, HeapKind::Max), Ordering::Less);
    }

    #[test]
    fn ties_break_on_value() {
        let a = Node::new(5, 1);
        let b = Node::new(5, 2);
        // min: lower value sorts first
        assert_eq!(a.cmp_in(&b, HeapKind::Min), Ordering::Less);
        // max: higher value sorts first
        assert_eq!(a.cmp_in(&b, HeapKind::Max), Ordering::Greater);
    }

    #[test]
    fn equality_ignores_orientation() {
        assert_eq!(Node::new(3, 7), Node::new(3, 7));
        assert_ne!(Node::new(3, 7), Node::new(3, 8));
        assert_ne!(Node::new(3, 7), Node::new(4, 7));
        let a = Node::new(3, 7);
        assert_eq!(a.cmp_in(&a.clone(), HeapKind::Min), Ordering::Equal);
        assert_eq!(a.cmp_in(&a.clone(), HeapKind::Max), Ordering::Equal);
    }

    #[test]
    fn display() {
        assert_eq!(Node::new(2, 9).to_string(), "<2, 9>");
    }
}
