use crate::linked::LinkedSequence;
use crate::node::{Link, NodeHandle};
use std::iter::FusedIterator;
use std::marker::PhantomData;

/// Iterator over the values of a [`LinkedSequence`], from head to tail.
pub struct LinkedIter<'a, T> {
    current: Link<T>,
    remaining: usize,
    _marker: PhantomData<&'a T>,
}

impl<'a, T> Iterator for LinkedIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.current?;
        // SAFETY: the list is borrowed for `'a`, so every linked node outlives
        // the returned reference.
        let node = unsafe { key.as_ref() };
        self.current = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for LinkedIter<'_, T> {}

impl<T> FusedIterator for LinkedIter<'_, T> {}

/// Iterator over the node handles of a [`LinkedSequence`], from head to tail.
pub struct Handles<'a, T> {
    current: Link<T>,
    _marker: PhantomData<&'a T>,
}

impl<T> Iterator for Handles<'_, T> {
    type Item = NodeHandle<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.current?;
        // SAFETY: as in `LinkedIter::next`.
        self.current = unsafe { key.as_ref() }.next;
        Some(NodeHandle::new(key))
    }
}

/// Owning iterator that unlinks values from the front.
pub struct LinkedIntoIter<T> {
    list: LinkedSequence<T>,
}

impl<T> Iterator for LinkedIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.remove_first().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> ExactSizeIterator for LinkedIntoIter<T> {}

impl<T> LinkedSequence<T> {
    /// Returns an iterator over the values, starting at `head`.
    ///
    /// Each call starts a fresh traversal.
    pub fn iter(&self) -> LinkedIter<'_, T> {
        LinkedIter {
            current: self.head,
            remaining: self.len,
            _marker: PhantomData,
        }
    }

    /// Returns an iterator over the node handles, starting at `head`.
    pub fn handles(&self) -> Handles<'_, T> {
        Handles {
            current: self.head,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> IntoIterator for &'a LinkedSequence<T> {
    type Item = &'a T;
    type IntoIter = LinkedIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for LinkedSequence<T> {
    type Item = T;
    type IntoIter = LinkedIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        LinkedIntoIter { list: self }
    }
}
