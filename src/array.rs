use crate::error::{check_index, check_position, Result};
use crate::sequence::{fmt_elements, Sequence};
use std::fmt;
use tracing::trace;

/// Capacity reserved by [`ArraySequence::new`].
pub const DEFAULT_CAPACITY: usize = 10;

/// Contiguous, index-addressed sequence.
///
/// Elements `0..len` are live and stored without gaps. The backing store only
/// grows, and only when a single-slot insert finds it full: capacity then
/// becomes `2 * len + 1`. Removing elements never shrinks it.
pub struct ArraySequence<T> {
    data: Vec<T>,
}

impl<T> ArraySequence<T> {
    /// Creates an empty sequence with [`DEFAULT_CAPACITY`] slots reserved.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty sequence with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Number of slots in the backing store.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns an iterator over the elements in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Grows the backing store to `2 * len + 1` if there is no free slot.
    fn reserve_slot(&mut self) {
        let len = self.data.len();
        if len == self.data.capacity() {
            let old_capacity = self.data.capacity();
            self.data.reserve_exact(len + 1);
            trace!(
                old_capacity,
                new_capacity = self.data.capacity(),
                "grew array backing store"
            );
        }
    }
}

impl<T> Sequence<T> for ArraySequence<T> {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn get(&self, index: usize) -> Result<&T> {
        check_index(index, self.data.len())?;
        Ok(&self.data[index])
    }

    fn set(&mut self, index: usize, value: T) -> Result<T> {
        check_index(index, self.data.len())?;
        Ok(std::mem::replace(&mut self.data[index], value))
    }

    fn insert(&mut self, index: usize, value: T) -> Result<()> {
        check_position(index, self.data.len())?;
        self.reserve_slot();
        self.data.insert(index, value);
        Ok(())
    }

    fn push(&mut self, value: T) {
        self.reserve_slot();
        self.data.push(value);
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        check_index(index, self.data.len())?;
        Ok(self.data.remove(index))
    }

    fn split_copy(&self, index: usize) -> Result<Self>
    where
        T: Clone,
    {
        check_position(index, self.data.len())?;
        let mut data = Vec::with_capacity(self.data.len() - index);
        data.extend_from_slice(&self.data[index..]);
        trace!(index, copied = data.len(), "split array by copy");
        Ok(Self { data })
    }

    fn split_transfer(&mut self, index: usize) -> Result<Self> {
        check_position(index, self.data.len())?;
        let data = self.data.split_off(index);
        trace!(index, moved = data.len(), "split array by transfer");
        Ok(Self { data })
    }

    fn append(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        let mut data = Vec::with_capacity(self.data.len() + other.data.len());
        data.extend_from_slice(&self.data);
        data.extend_from_slice(&other.data);
        Self { data }
    }

    fn add_all(&self, index: usize, other: &Self) -> Result<Self>
    where
        T: Clone,
    {
        check_position(index, self.data.len())?;
        let mut data = Vec::with_capacity(self.data.len() + other.data.len());
        data.extend_from_slice(&self.data[..index]);
        data.extend_from_slice(&other.data);
        data.extend_from_slice(&self.data[index..]);
        Ok(Self { data })
    }
}

/// Copies into a fresh backing store of the same capacity.
impl<T: Clone> Clone for ArraySequence<T> {
    fn clone(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.capacity());
        data.extend_from_slice(&self.data);
        Self { data }
    }
}

impl<T> Default for ArraySequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for ArraySequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Eq> Eq for ArraySequence<T> {}

impl<T: fmt::Debug> fmt::Debug for ArraySequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for ArraySequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_elements(f, self.data.iter())
    }
}

impl<T> Extend<T> for ArraySequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for ArraySequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = Self::new();
        seq.extend(iter);
        seq
    }
}

impl<'a, T> IntoIterator for &'a ArraySequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for ArraySequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}
