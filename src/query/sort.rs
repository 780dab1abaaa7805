//! In-place keyed quicksort.
//!
//! Hoare-style partitioning around the key of the middle element of each
//! range. The smaller partition is sorted recursively and the larger one by
//! looping, so stack depth stays logarithmic in the input length. Keys are
//! recomputed from the element for every comparison. The sort is unstable.

use std::cmp::Ordering;
use std::marker::PhantomData;

/// Comparator used when the key type's natural order applies.
pub type NaturalOrder<K> = fn(&K, &K) -> Ordering;

/// Sorts sequences of `T` by a key `K` extracted with a selector.
///
/// # Example
///
/// ```
/// use ringkit::query::KeyedQuickSort;
///
/// let mut words = vec!["pear", "fig", "banana"];
/// KeyedQuickSort::new(|w: &&str| w.len()).sort(&mut words);
/// assert_eq!(words, vec!["fig", "pear", "banana"]);
///
/// let mut numbers = vec![3, 1, 2];
/// KeyedQuickSort::with_comparator(|n: &i32| *n, |a: &i32, b: &i32| b.cmp(a))
///     .sort(&mut numbers);
/// assert_eq!(numbers, vec![3, 2, 1]);
/// ```
pub struct KeyedQuickSort<T, K, F, C> {
    selector: F,
    comparator: C,
    _marker: PhantomData<fn(&T) -> K>,
}

impl<T, K, F> KeyedQuickSort<T, K, F, NaturalOrder<K>>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    /// Sorts ascending by the natural order of the selected key.
    pub fn new(selector: F) -> Self {
        Self::with_comparator(selector, K::cmp)
    }
}

impl<T, K, F, C> KeyedQuickSort<T, K, F, C>
where
    F: FnMut(&T) -> K,
    C: FnMut(&K, &K) -> Ordering,
{
    /// Sorts so that `comparator(key(a), key(b))` is never `Greater` for
    /// adjacent `a`, `b` in the output.
    pub fn with_comparator(selector: F, comparator: C) -> Self {
        Self {
            selector,
            comparator,
            _marker: PhantomData,
        }
    }

    /// Sorts `items` in place.
    pub fn sort(&mut self, items: &mut [T]) {
        if items.len() < 2 {
            return;
        }
        tracing::trace!(len = items.len(), "keyed quicksort");
        self.sort_range(items, 0, items.len() as isize - 1);
    }

    /// Drains `source` into a working buffer and returns it sorted.
    pub fn sorted<I>(&mut self, source: I) -> Vec<T>
    where
        I: IntoIterator<Item = T>,
    {
        let mut items: Vec<T> = source.into_iter().collect();
        self.sort(&mut items);
        items
    }

    fn compare_to(&mut self, item: &T, pivot: &K) -> Ordering {
        let key = (self.selector)(item);
        (self.comparator)(&key, pivot)
    }

    fn sort_range(&mut self, items: &mut [T], mut left: isize, mut right: isize) {
        while left < right {
            let mut i = left;
            let mut j = right;
            let pivot = (self.selector)(&items[(i + ((j - i) >> 1)) as usize]);

            while i <= j {
                // Bounded scans keep an inconsistent comparator from running
                // the cursors out of the range.
                while i < right && self.compare_to(&items[i as usize], &pivot) == Ordering::Less {
                    i += 1;
                }
                while j > left && self.compare_to(&items[j as usize], &pivot) == Ordering::Greater {
                    j -= 1;
                }
                if i > j {
                    break;
                }
                if i < j {
                    items.swap(i as usize, j as usize);
                }
                i += 1;
                j -= 1;
            }

            if j - left <= right - i {
                if left < j {
                    self.sort_range(items, left, j);
                }
                left = i;
            } else {
                if i < right {
                    self.sort_range(items, i, right);
                }
                right = j;
            }
        }
    }
}
