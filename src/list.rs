//! Free-function forms of the [`ListView`] and [`ListHelper`] operations,
//! taking the list as the first argument.
//!
//! [`drop`] and [`take`] share their names with the prelude's `drop` and
//! `Iterator::take`, so call them qualified (`list::drop(..)`) rather than
//! glob-importing this module.
//!
//! ```
//! use listkit::list;
//!
//! let mut numbers: Vec<i32> = (1..=9).collect();
//! assert_eq!(list::select(&numbers, |&n| n < 4), [1, 2, 3]);
//!
//! list::select_in_place(&mut numbers, |&n| n < 4);
//! list::insert(&mut numbers, 10).insert(11);
//! assert_eq!(numbers, [1, 2, 3, 10, 11]);
//! assert_eq!(list::at(&numbers, -1), Some(&11));
//! ```

use num_traits::PrimInt;

use crate::{error::Result, helper::ListHelper, view::ListView};

// Iterating

pub fn each<'a, T: 'a, F>(list: impl Into<ListView<'a, T>>, func: F)
where
    F: FnMut(&T),
{
    list.into().each(func)
}

pub fn map<'a, T: 'a, F>(list: impl Into<ListView<'a, T>>, func: F) -> Vec<T>
where
    F: FnMut(&T) -> T,
{
    list.into().map(func)
}

pub fn transform<'a, T: 'a, R, F>(list: impl Into<ListView<'a, T>>, func: F) -> Vec<R>
where
    F: FnMut(&T) -> R,
{
    list.into().transform(func)
}

// Selecting

pub fn select<'a, T: Clone + 'a, F>(list: impl Into<ListView<'a, T>>, pred: F) -> Vec<T>
where
    F: FnMut(&T) -> bool,
{
    list.into().select(pred)
}

pub fn reject<'a, T: Clone + 'a, F>(list: impl Into<ListView<'a, T>>, pred: F) -> Vec<T>
where
    F: FnMut(&T) -> bool,
{
    list.into().reject(pred)
}

pub fn compact<'a, U: 'a>(list: impl Into<ListView<'a, Option<U>>>) -> Vec<&'a U> {
    list.into().compact()
}

pub fn detect<'a, T: 'a, F>(list: impl Into<ListView<'a, T>>, pred: F) -> Option<&'a T>
where
    F: FnMut(&T) -> bool,
{
    list.into().detect(pred)
}

pub fn find<'a, T: 'a, F>(list: impl Into<ListView<'a, T>>, pred: F) -> Option<&'a T>
where
    F: FnMut(&T) -> bool,
{
    list.into().find(pred)
}

// Modifying

pub fn map_in_place<T, F>(list: &mut Vec<T>, func: F)
where
    F: FnMut(&T) -> T,
{
    ListHelper::new(list).map_in_place(func)
}

pub fn select_in_place<T, F>(list: &mut Vec<T>, pred: F)
where
    F: FnMut(&T) -> bool,
{
    ListHelper::new(list).select_in_place(pred)
}

pub fn reject_in_place<T, F>(list: &mut Vec<T>, pred: F)
where
    F: FnMut(&T) -> bool,
{
    ListHelper::new(list).reject_in_place(pred)
}

pub fn compact_in_place<U>(list: &mut Vec<Option<U>>) {
    ListHelper::new(list).compact_in_place()
}

/// Appends `item` and hands back a helper on the same list for chaining.
pub fn push<T>(list: &mut Vec<T>, item: T) -> ListHelper<'_, T> {
    let mut helper = ListHelper::new(list);
    helper.push(item);
    helper
}

pub fn insert<T>(list: &mut Vec<T>, item: T) -> ListHelper<'_, T> {
    push(list, item)
}

pub fn push_all<T, I>(list: &mut Vec<T>, items: I) -> ListHelper<'_, T>
where
    I: IntoIterator<Item = T>,
{
    let mut helper = ListHelper::new(list);
    helper.push_all(items);
    helper
}

pub fn insert_all<T, I>(list: &mut Vec<T>, items: I) -> ListHelper<'_, T>
where
    I: IntoIterator<Item = T>,
{
    push_all(list, items)
}

// Accessing

pub fn at<'a, T: 'a, I>(list: impl Into<ListView<'a, T>>, index: I) -> Option<&'a T>
where
    I: PrimInt,
{
    list.into().at(index)
}

pub fn fetch<'a, T: 'a, I>(list: impl Into<ListView<'a, T>>, index: I) -> Result<&'a T>
where
    I: PrimInt,
{
    list.into().fetch(index)
}

pub fn fetch_or<'a, T: Clone + 'a, I>(list: impl Into<ListView<'a, T>>, index: I, default: T) -> T
where
    I: PrimInt,
{
    list.into().fetch_or(index, default)
}

pub fn first<'a, T: 'a>(list: impl Into<ListView<'a, T>>) -> Option<&'a T> {
    list.into().first()
}

pub fn last<'a, T: 'a>(list: impl Into<ListView<'a, T>>) -> Option<&'a T> {
    list.into().last()
}

pub fn take<'a, T: 'a, I>(list: impl Into<ListView<'a, T>>, count: I) -> Result<&'a [T]>
where
    I: PrimInt,
{
    list.into().take(count)
}

pub fn drop<'a, T: 'a, I>(list: impl Into<ListView<'a, T>>, count: I) -> Result<&'a [T]>
where
    I: PrimInt,
{
    list.into().drop(count)
}

// Information

pub fn is_empty<'a, T: 'a>(list: impl Into<ListView<'a, T>>) -> bool {
    list.into().is_empty()
}

pub fn is_not_empty<'a, T: 'a>(list: impl Into<ListView<'a, T>>) -> bool {
    list.into().is_not_empty()
}

pub fn size<'a, T: 'a>(list: impl Into<ListView<'a, T>>) -> Result<usize> {
    list.into().size()
}

pub fn length<'a, T: 'a>(list: impl Into<ListView<'a, T>>) -> Result<usize> {
    list.into().length()
}

pub fn count<'a, T: 'a>(list: impl Into<ListView<'a, T>>) -> usize {
    list.into().count()
}

pub fn count_by<'a, T: 'a, F>(list: impl Into<ListView<'a, T>>, pred: F) -> usize
where
    F: FnMut(&T) -> bool,
{
    list.into().count_by(pred)
}

pub fn all<'a, T: 'a, F>(list: impl Into<ListView<'a, T>>, pred: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    list.into().all(pred)
}

pub fn every<'a, T: 'a, F>(list: impl Into<ListView<'a, T>>, pred: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    list.into().every(pred)
}

/// See [`ListView::any`]: false when no element matches.
pub fn any<'a, T: 'a, F>(list: impl Into<ListView<'a, T>>, pred: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    list.into().any(pred)
}

pub fn some<'a, T: 'a, F>(list: impl Into<ListView<'a, T>>, pred: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    list.into().some(pred)
}

pub fn reduce<'a, T: 'a, R, F>(list: impl Into<ListView<'a, T>>, seed: R, func: F) -> R
where
    F: FnMut(R, &T) -> R,
{
    list.into().reduce(seed, func)
}
