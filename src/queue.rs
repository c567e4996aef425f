use core::cmp::Ordering;
use core::fmt::{self, Debug, Display, Formatter};

use crate::node::{HeapKind, Node};

// Complete-binary-tree index arithmetic, root at 0.
fn left(parent: usize) -> usize {
    parent * 2 + 1
}
fn right(parent: usize) -> usize {
    parent * 2 + 2
}
fn parent(child: usize) -> usize {
    (child - 1) / 2
}

/// An array-backed binary heap of (priority, value) nodes.
///
/// The orientation (`Min` or `Max`) is fixed at construction. Invariant: for
/// every non-root index `i`, `data[i]` does not compare `Less` (per the
/// orientation) than its parent, so the root is always the extremal node.
///
/// `peek` and `pop` on an empty queue return `None`; emptiness is a normal
/// outcome here, not a fault.
pub struct PriorityQueue<P, V> {
    data: Vec<Node<P, V>>,
    kind: HeapKind,
}

impl<P: Ord, V: Ord> PriorityQueue<P, V> {
    pub fn new(kind: HeapKind) -> Self {
        Self {
            data: Vec::new(),
            kind,
        }
    }

    pub fn with_capacity(kind: HeapKind, capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            kind,
        }
    }

    pub fn kind(&self) -> HeapKind {
        self.kind
    }

    pub fn is_min(&self) -> bool {
        self.kind == HeapKind::Min
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// The root node, without removing it.
    pub fn peek(&self) -> Option<&Node<P, V>> {
        self.data.first()
    }

    /// Index of the left child of `index`, if it is inside the heap.
    pub fn left_child(&self, index: usize) -> Option<usize> {
        let child = left(index);
        if child < self.data.len() {
            Some(child)
        } else {
            None
        }
    }

    /// Index of the right child of `index`, if it is inside the heap.
    pub fn right_child(&self, index: usize) -> Option<usize> {
        let child = right(index);
        if child < self.data.len() {
            Some(child)
        } else {
            None
        }
    }

    /// Index of the parent of `index`; the root has none.
    pub fn parent(&self, index: usize) -> Option<usize> {
        if index == 0 {
            None
        } else {
            Some(parent(index))
        }
    }

    /// Inserts a node, then restores the heap invariant along the path to the
    /// root. O(log n).
    pub fn push(&mut self, priority: P, value: V) {
        let index = self.data.len();
        self.data.push(Node::new(priority, value));
        self.percolate_up(index);
        self.check();
    }

    /// Removes and returns the root node, or `None` if the queue is empty.
    ///
    /// The root is swapped with the last leaf, detached, and the displaced
    /// leaf percolates down from the root. O(log n).
    pub fn pop(&mut self) -> Option<Node<P, V>> {
        if self.data.is_empty() {
            return None;
        }
        let last = self.data.len() - 1;
        self.data.swap(0, last);
        let root = self.data.pop();
        if !self.data.is_empty() {
            self.percolate_down(0);
        }
        self.check();
        root
    }

    /// The child index to compare against during percolate-down: `None` for a
    /// leaf, the only child if there is one, otherwise whichever of the two
    /// belongs higher per the orientation. A tie keeps the left child.
    pub fn child_to_compare(&self, index: usize) -> Option<usize> {
        let left = self.left_child(index)?;
        match self.right_child(index) {
            Some(right)
                if self.data[left].cmp_in(&self.data[right], self.kind) == Ordering::Greater =>
            {
                Some(right)
            }
            _ => Some(left),
        }
    }

    fn percolate_up(&mut self, mut index: usize) {
        while let Some(parent) = self.parent(index) {
            if self.data[index].cmp_in(&self.data[parent], self.kind) != Ordering::Less {
                break;
            }
            self.data.swap(index, parent);
            index = parent;
        }
    }

    fn percolate_down(&mut self, mut index: usize) {
        while let Some(child) = self.child_to_compare(index) {
            if self.data[child].cmp_in(&self.data[index], self.kind) != Ordering::Less {
                break;
            }
            self.data.swap(child, index);
            index = child;
        }
    }

    // Full heap-order verification; debug builds only, so push/pop stay
    // O(log n) in release.
    fn check(&self) {
        if !cfg!(debug_assertions) {
            return;
        }
        for i in 1..self.data.len() {
            assert_ne!(
                self.data[i].cmp_in(&self.data[parent(i)], self.kind),
                Ordering::Less
            );
        }
    }
}

impl<P: Display, V: Display> PriorityQueue<P, V> {
    /// Breadth-first dump of the heap, one tree level per line, each node
    /// centered in a column that narrows as the levels widen. Presentation
    /// only; nothing in the queue depends on it.
    pub fn tree_string(&self) -> String {
        let mut out = String::new();
        let mut on_level = 0;
        let mut level_limit = 1;
        let spaces = 10 * (1 + self.data.len());
        for node in self.data.iter() {
            let width = spaces / level_limit;
            out.push_str(&format!("{:^width$}", node.to_string(), width = width));
            on_level += 1;
            if on_level == level_limit {
                out.push('\n');
                level_limit *= 2;
                on_level = 0;
            }
        }
        out
    }
}

impl<P: Display, V: Display> Display for PriorityQueue<P, V> {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> fmt::Result {
        write!(fmt, "PriorityQueue [")?;
        for (i, node) in self.data.iter().enumerate() {
            if i > 0 {
                write!(fmt, ", ")?;
            }
            write!(fmt, "{}", node)?;
        }
        write!(fmt, "]")
    }
}

impl<P: Debug, V: Debug> Debug for PriorityQueue<P, V> {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> fmt::Result {
        write!(fmt, "{:?} Q: ", self.kind)?;
        for node in self.data.iter() {
            write!(fmt, "{:?} ", node)?;
        }
        Ok(())
    }
}
