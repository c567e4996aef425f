//! Binary-heap priority queues, plus the two classic algorithms built on top
//! of them.
//!
//! The core is [`PriorityQueue`], an array-backed binary heap of
//! (priority, value) nodes whose orientation (min or max) is chosen at
//! construction via [`HeapKind`]. [`MinHeap`] and [`MaxHeap`] are thin
//! value-only facades over it, and [`heap_sort`] / [`running_median`] are
//! consumers of the public queue contract only.
//!
//! ```
//! use binheap::MinHeap;
//!
//! let mut heap = MinHeap::new();
//! heap.push(3);
//! heap.push(1);
//! heap.push(2);
//! assert_eq!(heap.pop(), Some(1));
//! ```
//!
//! Everything here is single-threaded and synchronous; a queue assumes
//! exclusive ownership by its caller.

pub mod heap;
pub mod median;
pub mod node;
pub mod queue;
pub mod sort;

#[cfg(test)]
mod testing;

pub use crate::heap::{MaxHeap, MinHeap};
pub use crate::median::running_median;
pub use crate::node::{HeapKind, Node};
pub use crate::queue::PriorityQueue;
pub use crate::sort::heap_sort;
