use crate::error::{check_index, check_position, Result};
use crate::node::{Link, Node, NodeHandle};
use crate::sequence::{fmt_elements, Sequence};
use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;
use tracing::trace;

/// Singly-linked sequence.
///
/// Each node is its own allocation, owned by the `next` link of its
/// predecessor or by `head`. The chain holds exactly `len` nodes and ends in a
/// node whose `next` is `None`. The tail is not cached, so reaching it walks
/// the whole chain.
///
/// Index-based operations walk from `head`; node-level operations (see
/// [`add_after`](Self::add_after)) work in O(1) given a [`NodeHandle`].
/// Because a node never moves, `split_transfer` hands the suffix over by
/// rewriting a single link.
pub struct LinkedSequence<T> {
    pub(crate) head: Link<T>,
    pub(crate) len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

impl<T> LinkedSequence<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::from_chain(None, 0)
    }

    /// Takes ownership of a chain of exactly `len` nodes.
    fn from_chain(head: Link<T>, len: usize) -> Self {
        Self {
            head,
            len,
            _marker: PhantomData,
        }
    }

    /// Returns the handle of the node at `index`.
    pub fn handle_at(&self, index: usize) -> Result<NodeHandle<T>> {
        check_index(index, self.len)?;
        Ok(NodeHandle::new(self.walk(index)))
    }

    /// Follows `steps` links from `head`.
    ///
    /// Callers guarantee `steps < len`.
    pub(crate) fn walk(&self, steps: usize) -> NonNull<Node<T>> {
        let Some(mut current) = self.head else {
            unreachable!("walk on an empty chain");
        };
        for _ in 0..steps {
            // SAFETY: `current` is linked into this chain.
            let Some(next) = (unsafe { current.as_ref() }).next else {
                unreachable!("chain shorter than len");
            };
            current = next;
        }
        current
    }

    /// Links a new node holding `value` directly after `prev`.
    ///
    /// # Safety
    ///
    /// `prev` is linked into this chain.
    pub(crate) unsafe fn link_after(
        &mut self,
        prev: NonNull<Node<T>>,
        value: T,
    ) -> NonNull<Node<T>> {
        let prev = unsafe { &mut *prev.as_ptr() };
        let key = Node::alloc(value, prev.next);
        prev.next = Some(key);
        self.len += 1;
        key
    }

    /// Unlinks the node following `prev`, if any, and returns its value.
    ///
    /// # Safety
    ///
    /// `prev` is linked into this chain.
    pub(crate) unsafe fn unlink_after(&mut self, prev: NonNull<Node<T>>) -> Option<T> {
        let prev = unsafe { &mut *prev.as_ptr() };
        let target = prev.next?;
        prev.next = unsafe { target.as_ref() }.next;
        self.len -= 1;
        // SAFETY: `target` was owned by `prev.next` alone and is now unlinked.
        Some(unsafe { Node::free(target) }.value)
    }

    /// Appends `value` after `tail`, or as the head when `tail` is `None`.
    ///
    /// `tail` must be the current last node; used to build chains in one pass.
    fn append_after_tail(&mut self, tail: Link<T>, value: T) -> NonNull<Node<T>> {
        match tail {
            // SAFETY: `tail` is the last node of this chain.
            Some(tail) => unsafe { self.link_after(tail, value) },
            None => {
                let key = Node::alloc(value, None);
                self.head = Some(key);
                self.len += 1;
                key
            }
        }
    }
}

impl<T> Sequence<T> for LinkedSequence<T> {
    fn len(&self) -> usize {
        self.len
    }

    fn get(&self, index: usize) -> Result<&T> {
        let node = self.handle_at(index)?.ptr;
        // SAFETY: `node` is linked into this chain and borrowed through `self`.
        Ok(unsafe { &node.as_ref().value })
    }

    fn set(&mut self, index: usize, value: T) -> Result<T> {
        let node = self.handle_at(index)?.ptr;
        // SAFETY: as in `get`, with exclusive access through `&mut self`.
        Ok(std::mem::replace(unsafe { &mut (*node.as_ptr()).value }, value))
    }

    fn insert(&mut self, index: usize, value: T) -> Result<()> {
        check_position(index, self.len)?;
        if index == 0 {
            self.add_first(value);
        } else if index == self.len {
            self.add_last(value);
        } else {
            let prev = self.walk(index - 1);
            // SAFETY: `walk` only returns nodes of this chain.
            unsafe { self.link_after(prev, value) };
        }
        Ok(())
    }

    fn push(&mut self, value: T) {
        self.add_last(value);
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        check_index(index, self.len)?;
        if index == 0 {
            return self.remove_first();
        }
        let prev = self.walk(index - 1);
        // SAFETY: `walk` only returns nodes of this chain.
        match unsafe { self.unlink_after(prev) } {
            Some(value) => Ok(value),
            None => unreachable!("chain shorter than len"),
        }
    }

    fn split_copy(&self, index: usize) -> Result<Self>
    where
        T: Clone,
    {
        check_position(index, self.len)?;
        let out: Self = self.iter().skip(index).cloned().collect();
        trace!(index, copied = out.len, "split list by copy");
        Ok(out)
    }

    fn split_transfer(&mut self, index: usize) -> Result<Self> {
        check_position(index, self.len)?;
        if index == 0 {
            trace!(moved = self.len, "split list by transfer at head");
            return Ok(std::mem::take(self));
        }

        let prev = self.walk(index - 1);
        // SAFETY: `walk` only returns nodes of this chain.
        let suffix = unsafe { (*prev.as_ptr()).next.take() };
        let out = Self::from_chain(suffix, self.len - index);
        self.len = index;
        trace!(index, moved = out.len, "split list by transfer");
        Ok(out)
    }

    fn append(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        self.iter().chain(other.iter()).cloned().collect()
    }

    fn add_all(&self, index: usize, other: &Self) -> Result<Self>
    where
        T: Clone,
    {
        check_position(index, self.len)?;
        Ok(self
            .iter()
            .take(index)
            .chain(other.iter())
            .chain(self.iter().skip(index))
            .cloned()
            .collect())
    }
}

impl<T> Drop for LinkedSequence<T> {
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(node) = current {
            // SAFETY: the link owning `node` was just taken, nothing else reaches it.
            current = unsafe { Node::free(node) }.next;
        }
    }
}

/// Builds a fresh chain holding clones of every value.
impl<T: Clone> Clone for LinkedSequence<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> Default for LinkedSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for LinkedSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedSequence<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_elements(f, self.iter())
    }
}

impl<T> Extend<T> for LinkedSequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = self.tail().map(|h| h.ptr);
        for value in iter {
            tail = Some(self.append_after_tail(tail, value));
        }
    }
}

impl<T> FromIterator<T> for LinkedSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SequenceError;

    fn abc() -> LinkedSequence<&'static str> {
        ["A", "B", "C"].into_iter().collect()
    }

    #[test]
    fn test_new() {
        let list = LinkedSequence::<char>::new();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
        assert_eq!(list.to_string(), "[]");
    }

    #[test]
    fn test_insert_by_index() {
        let mut list = LinkedSequence::new();
        for (i, value) in ["A", "B", "C"].into_iter().enumerate() {
            list.insert(i, value).unwrap();
        }
        assert_eq!(list.to_string(), "[A, B, C]");
        list.insert(1, "X").unwrap();
        assert_eq!(list.to_string(), "[A, X, B, C]");
        list.insert(0, "Y").unwrap();
        assert_eq!(list.to_string(), "[Y, A, X, B, C]");
        assert_eq!(
            list.insert(6, "Z"),
            Err(SequenceError::OutOfRange { index: 6, len: 5 })
        );
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn test_get_and_set() {
        let mut list = abc();
        assert_eq!(list.get(0), Ok(&"A"));
        assert_eq!(list.get(2), Ok(&"C"));
        assert_eq!(list.set(1, "X"), Ok("B"));
        assert_eq!(list.to_string(), "[A, X, C]");
        assert!(list.set(3, "Y").is_err());
    }

    #[test]
    fn test_get_out_of_range() {
        let list = abc();
        assert!(matches!(list.get(3), Err(SequenceError::OutOfRange { .. })));
        assert!(matches!(
            list.get(usize::MAX),
            Err(SequenceError::OutOfRange { .. })
        ));
        assert!(LinkedSequence::<u8>::new().get(0).is_err());
    }

    #[test]
    fn test_remove_by_index() {
        let mut list = abc();
        assert_eq!(list.remove(1), Ok("B"));
        assert_eq!(list.to_string(), "[A, C]");
        assert_eq!(list.remove(1), Ok("C"));
        assert_eq!(list.remove(0), Ok("A"));
        assert!(list.is_empty());
        assert!(list.head().is_none());
        assert!(list.remove(0).is_err());
    }

    #[test]
    fn test_split_copy() {
        let list = abc();
        let tail = list.split_copy(1).unwrap();
        assert_eq!(tail.to_string(), "[B, C]");
        assert_eq!(list.to_string(), "[A, B, C]");

        let empty = list.split_copy(3).unwrap();
        assert!(empty.is_empty());
        assert_eq!(list.len(), 3);
        assert!(list.split_copy(4).is_err());
    }

    #[test]
    fn test_split_transfer_middle() {
        let mut list = abc();
        let tail = list.split_transfer(1).unwrap();
        assert_eq!(tail.to_string(), "[B, C]");
        assert_eq!(tail.len(), 2);
        assert_eq!(list.to_string(), "[A]");
        assert_eq!(list.len(), 1);
        assert_eq!(list.tail(), list.head());
        assert_eq!(tail.tail(), Some(tail.handle_at(1).unwrap()));
    }

    #[test]
    fn test_split_transfer_at_head() {
        let mut list = abc();
        let all = list.split_transfer(0).unwrap();
        assert_eq!(all.to_string(), "[A, B, C]");
        assert_eq!(list.to_string(), "[]");
        assert!(list.head().is_none());
    }

    #[test]
    fn test_split_transfer_at_end_and_out_of_range() {
        let mut list = abc();
        assert!(list.split_transfer(3).unwrap().is_empty());
        assert_eq!(list.len(), 3);
        assert!(list.split_transfer(4).is_err());
        assert_eq!(list, abc());
    }

    #[test]
    fn test_split_transfer_keeps_prefix_handles() {
        let mut list: LinkedSequence<u32> = (0..6).collect();
        let second = list.handle_at(1).unwrap();
        let mut tail = list.split_transfer(3).unwrap();
        unsafe { list.add_after(Some(second), 99) };
        tail.add_first(7);
        assert_eq!(list.to_string(), "[0, 1, 99, 2]");
        assert_eq!(tail.to_string(), "[7, 3, 4, 5]");
    }

    #[test]
    fn test_split_transfer_moves_suffix_nodes() {
        let mut list: LinkedSequence<u32> = (0..5).collect();
        let first_moved = list.handle_at(2).unwrap();
        let later = list.handle_at(3).unwrap();
        let mut out = list.split_transfer(2).unwrap();

        assert_eq!(out.head(), Some(first_moved));
        assert_eq!(out.handles().nth(1), Some(later));
        assert_eq!(unsafe { *out.node_value(later) }, 3);

        unsafe { out.add_after(Some(later), 9) };
        assert_eq!(out.to_string(), "[2, 3, 9, 4]");
        assert_eq!(list.to_string(), "[0, 1]");
        assert_eq!(list.tail(), Some(list.handle_at(1).unwrap()));
    }

    #[test]
    fn test_append_and_add_all() {
        let base = abc();
        let extra: LinkedSequence<_> = ["X", "Y"].into_iter().collect();
        assert_eq!(base.append(&extra).to_string(), "[A, B, C, X, Y]");
        assert_eq!(base.add_all(0, &extra).unwrap().to_string(), "[X, Y, A, B, C]");
        assert_eq!(base.add_all(2, &extra).unwrap().to_string(), "[A, B, X, Y, C]");
        assert_eq!(base.add_all(3, &extra).unwrap(), base.append(&extra));
        assert!(base.add_all(4, &extra).is_err());
        assert_eq!(base, abc());
    }

    #[test]
    fn test_clone_is_independent() {
        let original = abc();
        let mut copy = original.clone();
        copy.set(0, "Z").unwrap();
        copy.add_last("D");
        assert_eq!(original.to_string(), "[A, B, C]");
        assert_eq!(copy.to_string(), "[Z, B, C, D]");
    }

    #[test]
    fn test_extend_appends() {
        let mut list = abc();
        list.extend(["D", "E"]);
        assert_eq!(list.to_string(), "[A, B, C, D, E]");
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", abc()), r#"["A", "B", "C"]"#);
    }
}
