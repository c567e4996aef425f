use core::fmt::Display;

use crate::node::HeapKind;
use crate::queue::PriorityQueue;

/// A max-heap over plain values: each value serves as its own priority.
///
/// A thin configuration of [`PriorityQueue`]; `MinHeap` is the same shape
/// with the opposite orientation.
pub struct MaxHeap<T> {
    queue: PriorityQueue<T, T>,
}

impl<T: Ord + Clone> MaxHeap<T> {
    pub fn new() -> Self {
        Self {
            queue: PriorityQueue::new(HeapKind::Max),
        }
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn push(&mut self, value: T) {
        self.queue.push(value.clone(), value);
    }

    /// The greatest value, without removing it. `None` when empty.
    pub fn peek(&self) -> Option<&T> {
        self.queue.peek().map(|node| node.value())
    }

    /// Removes and returns the greatest value. `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        self.queue.pop().map(|node| node.into_value())
    }
}

impl<T: Ord + Clone + Display> MaxHeap<T> {
    pub fn tree_string(&self) -> String {
        self.queue.tree_string()
    }
}

/// A min-heap over plain values; see [`MaxHeap`].
pub struct MinHeap<T> {
    queue: PriorityQueue<T, T>,
}

impl<T: Ord + Clone> MinHeap<T> {
    pub fn new() -> Self {
        Self {
            queue: PriorityQueue::new(HeapKind::Min),
        }
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn push(&mut self, value: T) {
        self.queue.push(value.clone(), value);
    }

    /// The least value, without removing it. `None` when empty.
    pub fn peek(&self) -> Option<&T> {
        self.queue.peek().map(|node| node.value())
    }

    /// Removes and returns the least value. `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        self.queue.pop().map(|node| node.into_value())
    }
}

impl<T: Ord + Clone + Display> MinHeap<T> {
    pub fn tree_string(&self) -> String {
        self.queue.tree_string()
    }
}
