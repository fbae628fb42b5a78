use crate::error::Result;
use std::fmt;

/// An ordered, index-addressed collection.
///
/// Both [`ArraySequence`](crate::ArraySequence) and
/// [`LinkedSequence`](crate::LinkedSequence) implement this contract, so code
/// written against it (such as the measurement harness) runs unchanged on
/// either storage strategy. The two differ only in cost.
///
/// Indices are valid in `0..len()` for access and in `0..=len()` for
/// insertion and split points. A failed call leaves the sequence unchanged.
pub trait Sequence<T>: Sized {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, index: usize) -> Result<&T>;

    /// Overwrites the element at `index`, returning the previous one.
    fn set(&mut self, index: usize, value: T) -> Result<T>;

    /// Inserts `value` so that it ends up at `index`.
    fn insert(&mut self, index: usize, value: T) -> Result<()>;

    /// Inserts `value` at the end.
    fn push(&mut self, value: T);

    fn remove(&mut self, index: usize) -> Result<T>;

    /// Returns a new sequence holding copies of `index..len`.
    ///
    /// The receiver is not modified.
    fn split_copy(&self, index: usize) -> Result<Self>
    where
        T: Clone;

    /// Moves `index..len` into a new sequence and truncates the receiver to
    /// `0..index`.
    ///
    /// No element is cloned and the receiver keeps no reference to the moved
    /// elements.
    fn split_transfer(&mut self, index: usize) -> Result<Self>;

    /// Returns a new sequence holding `self` followed by `other`.
    fn append(&self, other: &Self) -> Self
    where
        T: Clone;

    /// Returns a new sequence holding `self[..index]`, then `other`, then
    /// `self[index..]`.
    fn add_all(&self, index: usize, other: &Self) -> Result<Self>
    where
        T: Clone;
}

/// Renders elements as `[e0, e1, ..., en]`.
pub(crate) fn fmt_elements<'a, T, I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    T: fmt::Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    f.write_str("[")?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    f.write_str("]")
}
