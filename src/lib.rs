//! A double-ended priority queue backed by an interval heap.
//!
//! This crate provides [`PriorityDeque`], a container adaptor that keeps
//! its elements arranged as an interval heap inside a single `Vec`, giving
//! constant-time access to both the least and the greatest element and
//! logarithmic insertion, removal, and in-place replacement.
//!
//! # Features
//!
//! | Operation | Complexity |
//! |-----------------------------------|------------|
//! | `push` / `pop_min` / `pop_max`    | O(log n)   |
//! | `min` / `max`                     | O(1)       |
//! | `update` / `erase` at a position  | O(log n)   |
//! | `merge` of a range, bulk build    | O(n)       |
//!
//! - Custom orderings through the [`compare`] crate's comparators.
//! - Fallible comparators through [`TryCompare`]: every mutating operation
//!   has a `try_` form that restores the previous state before reporting a
//!   comparison error.
//! - The slice-level building blocks ([`heap::make_heap`],
//!   [`heap::push_heap`], [`heap::pop_heap_min`], ...) are exported as free
//!   functions for callers that manage their own storage.
//!
//! # Example
//!
//! ```rust
//! use priority_deque::PriorityDeque;
//!
//! let mut deque: PriorityDeque<i32> = (1..=5).collect();
//! deque.push(0);
//! assert_eq!(deque.min_max(), Some((&0, &5)));
//! assert_eq!(deque.pop_max(), Some(5));
//! assert_eq!(deque.pop_min(), Some(0));
//! ```
//!
//! Iteration visits elements in heap-storage order, not in priority order;
//! pop into a vector (or use
//! [`into_sorted_vec`](PriorityDeque::into_sorted_vec)) for an ordered
//! traversal.

pub mod deque;
pub mod heap;
pub mod order;
mod sift;

pub use deque::PriorityDeque;
pub use order::TryCompare;
