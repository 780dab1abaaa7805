//! Lazy query operators over any iterator.
//!
//! [`CollectionQuery`] is implemented for every [`Iterator`]. `filter_by`
//! and `select` are lazy adapters; `to_dynamic_array` materialises into a
//! [`DynamicArray`]; `sort_query` / `sort_query_by` return a [`SortQuery`]
//! that does not touch its source until the first element is pulled, then
//! drains it into a buffer, sorts it with [`KeyedQuickSort`] and yields the
//! result.
//!
//! ```
//! use ringkit::query::CollectionQuery;
//!
//! let names = ["delta", "alpha", "charlie", "bravo"];
//! let sorted: Vec<_> = names
//!     .iter()
//!     .filter_by(|n| n.len() == 5)
//!     .select(|n| n.to_uppercase())
//!     .sort_query(|n| n.clone())
//!     .collect();
//! assert_eq!(sorted, vec!["ALPHA", "BRAVO", "DELTA"]);
//! ```

pub mod sort;

use std::cmp::Ordering;
use std::iter::{Filter, Map};

use crate::ds::DynamicArray;

pub use sort::{KeyedQuickSort, NaturalOrder};

/// Query operators available on every iterator.
pub trait CollectionQuery: Iterator + Sized {
    /// Lazily keeps the items matching `predicate`.
    fn filter_by<P>(self, predicate: P) -> Filter<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.filter(predicate)
    }

    /// Lazily projects each item through `projection`.
    fn select<R, F>(self, projection: F) -> Map<Self, F>
    where
        F: FnMut(Self::Item) -> R,
    {
        self.map(projection)
    }

    /// Drains the iterator into a [`DynamicArray`].
    fn to_dynamic_array(self) -> DynamicArray<Self::Item> {
        self.collect()
    }

    /// Orders items ascending by the natural order of `selector`'s key.
    fn sort_query<K, F>(self, selector: F) -> SortQuery<Self, K, F, NaturalOrder<K>>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        SortQuery::new(self, KeyedQuickSort::new(selector))
    }

    /// Orders items by `selector`'s key under `comparator`.
    fn sort_query_by<K, F, C>(self, selector: F, comparator: C) -> SortQuery<Self, K, F, C>
    where
        F: FnMut(&Self::Item) -> K,
        C: FnMut(&K, &K) -> Ordering,
    {
        SortQuery::new(self, KeyedQuickSort::with_comparator(selector, comparator))
    }
}

impl<I: Iterator> CollectionQuery for I {}

/// Deferred sort returned by [`CollectionQuery::sort_query`].
pub struct SortQuery<I: Iterator, K, F, C> {
    source: Option<I>,
    sorter: KeyedQuickSort<I::Item, K, F, C>,
    sorted: std::vec::IntoIter<I::Item>,
}

impl<I, K, F, C> SortQuery<I, K, F, C>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    C: FnMut(&K, &K) -> Ordering,
{
    fn new(source: I, sorter: KeyedQuickSort<I::Item, K, F, C>) -> Self {
        Self {
            source: Some(source),
            sorter,
            sorted: Vec::new().into_iter(),
        }
    }

    /// Returns `true` once the source has been drained and sorted.
    pub fn is_evaluated(&self) -> bool {
        self.source.is_none()
    }

    fn evaluate(&mut self) {
        if let Some(source) = self.source.take() {
            self.sorted = self.sorter.sorted(source).into_iter();
        }
    }
}

impl<I, K, F, C> Iterator for SortQuery<I, K, F, C>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    C: FnMut(&K, &K) -> Ordering,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.evaluate();
        self.sorted.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.source {
            Some(source) => source.size_hint(),
            None => self.sorted.size_hint(),
        }
    }
}
