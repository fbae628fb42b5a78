use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NonNull<Node<T>>>;

/// A node in the singly-linked chain.
///
/// Every node is a separate heap allocation owned by its predecessor's `next`
/// (or by the list's `head`). Moving a link moves ownership of the whole rest
/// of the chain; the nodes themselves never move in memory.
pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}

impl<T> Node<T> {
    /// Allocates a node; the caller links it into a chain, which owns it from
    /// then on.
    pub(crate) fn alloc(value: T, next: Link<T>) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node { value, next })))
    }

    /// Frees a node and returns its contents.
    ///
    /// # Safety
    ///
    /// `ptr` came from [`Node::alloc`], has not been freed, is no longer
    /// reachable from any chain, and no reference into it is alive.
    pub(crate) unsafe fn free(ptr: NonNull<Node<T>>) -> Node<T> {
        unsafe { *Box::from_raw(ptr.as_ptr()) }
    }
}

/// Opaque reference to one node of a [`LinkedSequence`](crate::LinkedSequence).
///
/// Obtained from `head`, `tail`, `handle_at`, `handles` or `add_after`. A
/// handle names a node, not a position: it follows the node when
/// `split_transfer` hands it to a new list, and it dangles once the node is
/// removed. Operations that dereference a handle are `unsafe` for that reason.
pub struct NodeHandle<T> {
    pub(crate) ptr: NonNull<Node<T>>,
    _marker: PhantomData<*const T>,
}

impl<T> NodeHandle<T> {
    pub(crate) fn new(ptr: NonNull<Node<T>>) -> Self {
        Self {
            ptr,
            _marker: PhantomData,
        }
    }
}

impl<T> Clone for NodeHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeHandle<T> {}

impl<T> PartialEq for NodeHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr == other.ptr
    }
}

impl<T> Eq for NodeHandle<T> {}

impl<T> fmt::Debug for NodeHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeHandle").field(&self.ptr).finish()
    }
}
