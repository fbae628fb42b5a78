use crate::error::{Result, SequenceError};
use crate::linked::LinkedSequence;
use crate::node::{Node, NodeHandle};

impl<T> LinkedSequence<T> {
    /// Handle of the first node, or `None` when empty.
    pub fn head(&self) -> Option<NodeHandle<T>> {
        self.head.map(NodeHandle::new)
    }

    /// Handle of the last node, or `None` when empty.
    ///
    /// Walks the whole chain.
    pub fn tail(&self) -> Option<NodeHandle<T>> {
        match self.len {
            0 => None,
            len => Some(NodeHandle::new(self.walk(len - 1))),
        }
    }

    /// Handle of the node following `node`, or `None` at the tail.
    ///
    /// # Safety
    ///
    /// `node` is linked into `self`.
    pub unsafe fn next_node(&self, node: NodeHandle<T>) -> Option<NodeHandle<T>> {
        unsafe { node.ptr.as_ref() }.next.map(NodeHandle::new)
    }

    /// # Safety
    ///
    /// `node` is linked into `self`.
    pub unsafe fn node_value(&self, node: NodeHandle<T>) -> &T {
        unsafe { &node.ptr.as_ref().value }
    }

    /// # Safety
    ///
    /// `node` is linked into `self`.
    pub unsafe fn node_value_mut(&mut self, node: NodeHandle<T>) -> &mut T {
        unsafe { &mut (*node.ptr.as_ptr()).value }
    }

    /// Inserts `value` at the front. O(1).
    pub fn add_first(&mut self, value: T) -> NodeHandle<T> {
        let key = Node::alloc(value, self.head);
        self.head = Some(key);
        self.len += 1;
        NodeHandle::new(key)
    }

    /// Inserts `value` at the back. O(len), the tail is located by walking.
    pub fn add_last(&mut self, value: T) -> NodeHandle<T> {
        match self.tail() {
            // SAFETY: `tail` came from this chain a moment ago.
            Some(tail) => NodeHandle::new(unsafe { self.link_after(tail.ptr, value) }),
            None => self.add_first(value),
        }
    }

    /// Removes and returns the first element.
    pub fn remove_first(&mut self) -> Result<T> {
        let head = self.head.ok_or(SequenceError::EmptyState)?;
        // SAFETY: `head` is owned by `self.head`, which is overwritten before
        // anything else can reach the node.
        let node = unsafe { Node::free(head) };
        self.head = node.next;
        self.len -= 1;
        Ok(node.value)
    }

    /// Removes and returns the last element. O(len).
    pub fn remove_last(&mut self) -> Result<T> {
        match self.len {
            0 => Err(SequenceError::EmptyState),
            1 => self.remove_first(),
            len => {
                let new_tail = self.walk(len - 2);
                // SAFETY: `walk` only returns nodes of this chain.
                match unsafe { self.unlink_after(new_tail) } {
                    Some(value) => Ok(value),
                    None => unreachable!("chain shorter than len"),
                }
            }
        }
    }

    /// Inserts `value` directly after `node`, or at the front when `node` is
    /// `None`. Returns the new node's handle. O(1).
    ///
    /// On an empty list `value` becomes the sole element and `node` is not
    /// looked at.
    ///
    /// # Safety
    ///
    /// On a non-empty list, a `Some` handle names a node linked into `self`.
    pub unsafe fn add_after(&mut self, node: Option<NodeHandle<T>>, value: T) -> NodeHandle<T> {
        if self.head.is_none() {
            return self.add_first(value);
        }
        match node {
            Some(prev) => NodeHandle::new(unsafe { self.link_after(prev.ptr, value) }),
            None => self.add_first(value),
        }
    }

    /// Removes and returns the element after `node`, or the first element when
    /// `node` is `None`. O(1).
    ///
    /// Fails with [`SequenceError::EmptyState`] when the list is empty or
    /// `node` is the tail.
    ///
    /// # Safety
    ///
    /// On a non-empty list, a `Some` handle names a node linked into `self`.
    /// Handles of the removed node dangle afterwards.
    pub unsafe fn remove_after(&mut self, node: Option<NodeHandle<T>>) -> Result<T> {
        if self.head.is_none() {
            return Err(SequenceError::EmptyState);
        }
        match node {
            Some(prev) => unsafe { self.unlink_after(prev.ptr) }.ok_or(SequenceError::EmptyState),
            None => self.remove_first(),
        }
    }
}
