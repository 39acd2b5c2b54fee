use num_traits::PrimInt;

use crate::{
    error::{ListError, Result},
    util::position::{checked_count, checked_index, wrapping_index},
};

/// A read-only handle on a list that may be absent.
///
/// An absent list behaves as an empty one for every traversal. Only the
/// strict accessors ([`ListView::size`], [`ListView::fetch`],
/// [`ListView::take`], [`ListView::drop`]) report an error instead.
#[derive(Debug)]
pub struct ListView<'a, T> {
    list: Option<&'a [T]>,
}

impl<T> Clone for ListView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ListView<'_, T> {}

impl<'a, T> ListView<'a, T> {
    pub fn new(list: &'a [T]) -> Self {
        ListView { list: Some(list) }
    }

    pub fn absent() -> Self {
        ListView { list: None }
    }

    fn items(&self) -> &'a [T] {
        self.list.unwrap_or(&[])
    }

    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.items().iter()
    }

    // Iterating

    pub fn each<F>(&self, func: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(func);
    }

    /// Returns a new list with `func` applied to every element.
    pub fn map<F>(&self, func: F) -> Vec<T>
    where
        F: FnMut(&T) -> T,
    {
        self.iter().map(func).collect()
    }

    pub fn transform<R, F>(&self, func: F) -> Vec<R>
    where
        F: FnMut(&T) -> R,
    {
        self.iter().map(func).collect()
    }

    // Selecting

    pub fn select<F>(&self, mut pred: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        self.iter().filter(|t| pred(*t)).cloned().collect()
    }

    pub fn reject<F>(&self, mut pred: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        self.iter().filter(|t| !pred(*t)).cloned().collect()
    }

    /// The first element matching `pred`.
    pub fn detect<F>(&self, mut pred: F) -> Option<&'a T>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().find(|t| pred(*t))
    }

    pub fn find<F>(&self, pred: F) -> Option<&'a T>
    where
        F: FnMut(&T) -> bool,
    {
        self.detect(pred)
    }

    // Accessing

    /// The element at `index`, where negative indices count back from the
    /// end. Out of range in either direction gives `None`.
    pub fn at<I>(&self, index: I) -> Option<&'a T>
    where
        I: PrimInt,
    {
        let items = self.items();
        wrapping_index(index, items.len()).and_then(|i| items.get(i))
    }

    /// Strict access: `index` must lie in `0..len`. Negative indices are
    /// not translated.
    pub fn fetch<I>(&self, index: I) -> Result<&'a T>
    where
        I: PrimInt,
    {
        let items = self.items();
        checked_index(index, items.len()).map(|i| &items[i])
    }

    pub fn fetch_or<I>(&self, index: I, default: T) -> T
    where
        I: PrimInt,
        T: Clone,
    {
        self.fetch(index).map_or(default, T::clone)
    }

    pub fn first(&self) -> Option<&'a T> {
        self.at(0)
    }

    pub fn last(&self) -> Option<&'a T> {
        self.at(-1)
    }

    pub fn take<I>(&self, count: I) -> Result<&'a [T]>
    where
        I: PrimInt,
    {
        let items = self.items();
        checked_count(count, items.len()).map(|n| &items[..n])
    }

    pub fn drop<I>(&self, count: I) -> Result<&'a [T]>
    where
        I: PrimInt,
    {
        let items = self.items();
        checked_count(count, items.len()).map(|n| &items[n..])
    }

    // Information

    pub fn is_empty(&self) -> bool {
        self.list.map_or(true, <[T]>::is_empty)
    }

    pub fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    /// The exact length. Unlike [`ListView::count`], fails on an absent list.
    pub fn size(&self) -> Result<usize> {
        self.list.map(<[T]>::len).ok_or(ListError::AbsentList)
    }

    pub fn length(&self) -> Result<usize> {
        self.size()
    }

    pub fn count(&self) -> usize {
        self.items().len()
    }

    pub fn count_by<F>(&self, mut pred: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().filter(|t| pred(*t)).count()
    }

    pub fn all<F>(&self, pred: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().all(pred)
    }

    pub fn every<F>(&self, pred: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.all(pred)
    }

    /// True if at least one element matches. Returns false when no element
    /// matches, including on an empty or absent list.
    pub fn any<F>(&self, pred: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().any(pred)
    }

    pub fn some<F>(&self, pred: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.any(pred)
    }

    /// Left fold starting from `seed`.
    pub fn reduce<R, F>(&self, seed: R, func: F) -> R
    where
        F: FnMut(R, &T) -> R,
    {
        self.iter().fold(seed, func)
    }
}

impl<'a, U> ListView<'a, Option<U>> {
    /// The present elements, in order.
    pub fn compact(&self) -> Vec<&'a U> {
        self.iter().flatten().collect()
    }
}

impl<'a, T> From<&'a [T]> for ListView<'a, T> {
    fn from(list: &'a [T]) -> Self {
        ListView::new(list)
    }
}

impl<'a, T> From<&'a Vec<T>> for ListView<'a, T> {
    fn from(list: &'a Vec<T>) -> Self {
        ListView::new(list)
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for ListView<'a, T> {
    fn from(list: &'a [T; N]) -> Self {
        ListView::new(list)
    }
}

impl<'a, T> From<Option<&'a [T]>> for ListView<'a, T> {
    fn from(list: Option<&'a [T]>) -> Self {
        ListView { list }
    }
}

impl<'a, T> From<Option<&'a Vec<T>>> for ListView<'a, T> {
    fn from(list: Option<&'a Vec<T>>) -> Self {
        ListView {
            list: list.map(Vec::as_slice),
        }
    }
}
