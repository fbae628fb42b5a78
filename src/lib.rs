//! # seqlab - Array and linked sequences side by side
//!
//! Two interchangeable implementations of one ordered-sequence contract
//! ([`Sequence`]):
//! 1. [`ArraySequence`]: contiguous storage, O(1) indexed access, shifting
//!    inserts and removals, capacity growing to `2 * len + 1` when full.
//! 2. [`LinkedSequence`]: a singly-linked chain with O(1) splicing around a
//!    [`NodeHandle`] and O(index) indexed access.
//!
//! Both support two ways of cutting a sequence in two: `split_copy` clones
//! the suffix and leaves the receiver alone, `split_transfer` moves the suffix
//! out and truncates the receiver.
//!
//! ## Example
//!
//! ```
//! use seqlab::{LinkedSequence, Sequence};
//!
//! let mut list: LinkedSequence<char> = "abcde".chars().collect();
//! let copy = list.split_copy(3).unwrap();
//! let moved = list.split_transfer(2).unwrap();
//!
//! assert_eq!(copy.to_string(), "[d, e]");
//! assert_eq!(moved.to_string(), "[c, d, e]");
//! assert_eq!(list.to_string(), "[a, b]");
//! ```
//!
//! The [`harness`] module times both implementations against each other.

mod array;
mod error;
mod iter;
mod linked;
mod node;
mod node_ops;
mod sequence;

pub mod harness;

#[cfg(test)]
mod tests;

pub use array::{ArraySequence, DEFAULT_CAPACITY};
pub use error::{Result, SequenceError};
pub use iter::{Handles, LinkedIntoIter, LinkedIter};
pub use linked::LinkedSequence;
pub use node::NodeHandle;
pub use sequence::Sequence;
