//! Sequence adaptors: joins, zips, counting checks, indexing, combinations
//! and partial top-K ordering over any iterator.
//!
//! Everything lives on the [`SequenceExt`] extension trait, blanket-implemented
//! for all iterators. Absent values in join and zip results are expressed as
//! [`Maybe`] rather than `Option` so joined rows render and compose with the
//! rest of the crate.
//!
//! # Examples
//!
//! ```rust
//! use millpond::seq::SequenceExt;
//! use millpond::Maybe;
//!
//! let users = vec![(1, "ada"), (2, "grace")];
//! let orders = vec![(2, "book"), (3, "pen")];
//!
//! let rows: Vec<_> = users
//!     .into_iter()
//!     .full_outer_join(orders, |u| u.0, |o| o.0)
//!     .collect();
//!
//! assert_eq!(rows, vec![
//!     (Maybe::new((1, "ada")), Maybe::empty()),
//!     (Maybe::new((2, "grace")), Maybe::new((2, "book"))),
//!     (Maybe::empty(), Maybe::new((3, "pen"))),
//! ]);
//! ```

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;
use std::iter;

use crate::maybe::Maybe;
use crate::partial_order::{Direction, PartialOrdered};

/// Iterator adaptors for joining, zipping, counting and partially ordering
/// sequences.
pub trait SequenceExt: Iterator + Sized {
    // ========== Appending & Inserting ==========

    /// Append a single element to the end of the sequence.
    ///
    /// # Example
    ///
    /// ```rust
    /// use millpond::seq::SequenceExt;
    ///
    /// let items: Vec<i32> = [1, 2].into_iter().continue_with(3).collect();
    /// assert_eq!(items, vec![1, 2, 3]);
    /// ```
    fn continue_with(self, item: Self::Item) -> iter::Chain<Self, iter::Once<Self::Item>> {
        self.chain(iter::once(item))
    }

    /// Insert an element before position `index`, lazily.
    ///
    /// When the sequence has fewer than `index` elements, the item is
    /// appended at the end instead.
    ///
    /// # Example
    ///
    /// ```rust
    /// use millpond::seq::SequenceExt;
    ///
    /// let items: Vec<i32> = [1, 3].into_iter().insert_at(1, 2).collect();
    /// assert_eq!(items, vec![1, 2, 3]);
    ///
    /// let items: Vec<i32> = [1, 2].into_iter().insert_at(9, 3).collect();
    /// assert_eq!(items, vec![1, 2, 3]);
    /// ```
    fn insert_at(self, index: usize, item: Self::Item) -> InsertAt<Self> {
        InsertAt {
            source: self,
            index,
            item: Some(item),
            position: 0,
        }
    }

    // ========== Counting Checks ==========

    /// Returns `true` if the sequence contains at least `count` elements.
    ///
    /// Stops consuming the source as soon as the answer is known.
    ///
    /// # Example
    ///
    /// ```rust
    /// use millpond::seq::SequenceExt;
    ///
    /// assert!([1, 2, 3].into_iter().at_least(2));
    /// assert!(![1].into_iter().at_least(2));
    /// assert!(std::iter::empty::<i32>().at_least(0));
    /// ```
    fn at_least(mut self, count: usize) -> bool {
        if count == 0 {
            return true;
        }
        let mut seen = 0usize;
        while self.next().is_some() {
            seen += 1;
            if seen >= count {
                return true;
            }
        }
        false
    }

    /// Returns `true` if at least `count` elements satisfy the predicate.
    fn at_least_by<P>(self, count: usize, predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.filter(predicate).at_least(count)
    }

    /// Returns `true` if the sequence contains at most `count` elements.
    ///
    /// Stops consuming the source as soon as the answer is known.
    ///
    /// # Example
    ///
    /// ```rust
    /// use millpond::seq::SequenceExt;
    ///
    /// assert!([1, 2].into_iter().at_most(3));
    /// assert!(![1, 2, 3, 4].into_iter().at_most(3));
    /// ```
    fn at_most(mut self, count: usize) -> bool {
        let mut seen = 0usize;
        while self.next().is_some() {
            seen += 1;
            if seen > count {
                return false;
            }
        }
        true
    }

    /// Returns `true` if at most `count` elements satisfy the predicate.
    fn at_most_by<P>(self, count: usize, predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.filter(predicate).at_most(count)
    }

    // ========== Membership & Indexing ==========

    /// Returns `true` if any element occurs more than once.
    ///
    /// Short-circuits on the first duplicate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use millpond::seq::SequenceExt;
    ///
    /// assert!([1, 2, 1].into_iter().has_duplicates());
    /// assert!(![1, 2, 3].into_iter().has_duplicates());
    /// ```
    fn has_duplicates(self) -> bool
    where
        Self::Item: Eq + Hash,
    {
        let mut seen = HashSet::new();
        for item in self {
            if !seen.insert(item) {
                return true;
            }
        }
        false
    }

    /// Returns `true` if both sequences contain the same set of elements,
    /// ignoring order and multiplicity.
    ///
    /// # Example
    ///
    /// ```rust
    /// use millpond::seq::SequenceExt;
    ///
    /// assert!([3, 1, 2].into_iter().set_equal([1, 2, 3]));
    /// assert!([1, 1, 2].into_iter().set_equal([2, 1]));
    /// assert!(![1, 2].into_iter().set_equal([1, 2, 3]));
    /// ```
    fn set_equal<J>(self, other: J) -> bool
    where
        Self::Item: Eq + Hash,
        J: IntoIterator<Item = Self::Item>,
    {
        let first: HashSet<Self::Item> = self.collect();
        let second: HashSet<Self::Item> = other.into_iter().collect();
        first == second
    }

    /// Position of the first element equal to `element`, or `None`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use millpond::seq::SequenceExt;
    ///
    /// assert_eq!([10, 20, 30].into_iter().index_of(&20), Some(1));
    /// assert_eq!([10, 20].into_iter().index_of(&99), None);
    /// ```
    fn index_of(mut self, element: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq,
    {
        self.position(|item| &item == element)
    }

    /// Position of the first element satisfying the predicate, or `None`.
    fn index_of_by<P>(mut self, predicate: P) -> Option<usize>
    where
        P: FnMut(Self::Item) -> bool,
    {
        self.position(predicate)
    }

    // ========== Zipping ==========

    /// Zip two sequences to the length of the longer one, padding the
    /// shorter side with [`Maybe::Empty`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use millpond::seq::SequenceExt;
    /// use millpond::Maybe;
    ///
    /// let pairs: Vec<_> = [1, 2, 3].into_iter().zip_all(["a"]).collect();
    /// assert_eq!(pairs, vec![
    ///     (Maybe::new(1), Maybe::new("a")),
    ///     (Maybe::new(2), Maybe::empty()),
    ///     (Maybe::new(3), Maybe::empty()),
    /// ]);
    /// ```
    fn zip_all<J>(self, other: J) -> ZipAll<Self, J::IntoIter>
    where
        J: IntoIterator,
    {
        ZipAll {
            left: self,
            right: other.into_iter(),
        }
    }

    // ========== Joins ==========

    /// Hash join keeping unmatched rows from both sides.
    ///
    /// Matched pairs come first in outer order (one row per inner match),
    /// followed by the unmatched inner groups in their first-occurrence
    /// order. The inner sequence is materialized immediately; outer rows
    /// stream lazily.
    ///
    /// # Example
    ///
    /// ```rust
    /// use millpond::seq::SequenceExt;
    /// use millpond::Maybe;
    ///
    /// let rows: Vec<_> = [1, 2].into_iter()
    ///     .full_outer_join([20, 30], |o| *o, |i| i / 10)
    ///     .collect();
    /// assert_eq!(rows, vec![
    ///     (Maybe::new(1), Maybe::empty()),
    ///     (Maybe::new(2), Maybe::new(20)),
    ///     (Maybe::empty(), Maybe::new(30)),
    /// ]);
    /// ```
    fn full_outer_join<J, K, FO, FI>(
        self,
        inner: J,
        outer_key: FO,
        inner_key: FI,
    ) -> FullOuterJoin<Self, J::Item, K, FO>
    where
        Self::Item: Clone,
        J: IntoIterator,
        J::Item: Clone,
        K: Eq + Hash + Clone,
        FO: FnMut(&Self::Item) -> K,
        FI: FnMut(&J::Item) -> K,
    {
        FullOuterJoin {
            outer: self,
            outer_key,
            lookup: Lookup::build(inner.into_iter(), inner_key),
            matched: HashSet::new(),
            pending: Vec::new().into_iter(),
            unmatched_group: None,
        }
    }

    /// Hash join keeping every outer row, pairing it with
    /// [`Maybe::Empty`] when no inner row matches.
    ///
    /// # Example
    ///
    /// ```rust
    /// use millpond::seq::SequenceExt;
    /// use millpond::Maybe;
    ///
    /// let rows: Vec<_> = [1, 2].into_iter()
    ///     .left_outer_join([20], |o| *o, |i| i / 10)
    ///     .collect();
    /// assert_eq!(rows, vec![
    ///     (1, Maybe::empty()),
    ///     (2, Maybe::new(20)),
    /// ]);
    /// ```
    fn left_outer_join<J, K, FO, FI>(
        self,
        inner: J,
        outer_key: FO,
        inner_key: FI,
    ) -> LeftOuterJoin<Self, J::Item, K, FO>
    where
        Self::Item: Clone,
        J: IntoIterator,
        J::Item: Clone,
        K: Eq + Hash + Clone,
        FO: FnMut(&Self::Item) -> K,
        FI: FnMut(&J::Item) -> K,
    {
        LeftOuterJoin {
            outer: self,
            outer_key,
            lookup: Lookup::build(inner.into_iter(), inner_key),
            pending: Vec::new().into_iter(),
        }
    }

    /// Hash join keeping every inner row: matched pairs in outer order,
    /// then unmatched inner groups with [`Maybe::Empty`] on the outer side.
    fn right_outer_join<J, K, FO, FI>(
        self,
        inner: J,
        outer_key: FO,
        inner_key: FI,
    ) -> RightOuterJoin<Self, J::Item, K, FO>
    where
        Self::Item: Clone,
        J: IntoIterator,
        J::Item: Clone,
        K: Eq + Hash + Clone,
        FO: FnMut(&Self::Item) -> K,
        FI: FnMut(&J::Item) -> K,
    {
        RightOuterJoin {
            outer: self,
            outer_key,
            lookup: Lookup::build(inner.into_iter(), inner_key),
            matched: HashSet::new(),
            pending: Vec::new().into_iter(),
            unmatched_group: None,
        }
    }

    // ========== Combinations ==========

    /// All non-empty subsequences, preserving the relative order of
    /// elements within each one. Enumeration order is unspecified.
    ///
    /// # Panics
    ///
    /// Panics if the sequence has 128 elements or more; the output size is
    /// exponential long before that.
    ///
    /// # Example
    ///
    /// ```rust
    /// use millpond::seq::SequenceExt;
    ///
    /// let mut combos: Vec<Vec<i32>> = [1, 2].into_iter().combinations().collect();
    /// combos.sort();
    /// assert_eq!(combos, vec![vec![1], vec![1, 2], vec![2]]);
    /// ```
    fn combinations(self) -> Combinations<Self::Item>
    where
        Self::Item: Clone,
    {
        let items: Vec<Self::Item> = self.collect();
        assert!(
            items.len() < 128,
            "combinations: sequence of {} elements is too long",
            items.len()
        );
        Combinations { items, mask: 0 }
    }

    // ========== Partial Ordering ==========

    /// The first `count` elements ordered by ascending key.
    ///
    /// Equivalent to a full sort by key followed by `take(count)`, but only
    /// the K-prefix gets ordered. The relative order of equal keys is
    /// unspecified.
    ///
    /// # Example
    ///
    /// ```rust
    /// use millpond::seq::SequenceExt;
    ///
    /// let smallest: Vec<i32> = [5, 3, 8, 1, 9, 2]
    ///     .into_iter()
    ///     .partial_order_by_key(|x| *x, 3)
    ///     .collect();
    /// assert_eq!(smallest, vec![1, 2, 3]);
    /// ```
    fn partial_order_by_key<K, F>(
        self,
        key_fn: F,
        count: usize,
    ) -> PartialOrdered<Self, K, F, fn(&K, &K) -> Ordering>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        PartialOrdered::new(self, key_fn, K::cmp, Direction::Ascending, count)
    }

    /// The first `count` elements ordered by descending key.
    ///
    /// # Example
    ///
    /// ```rust
    /// use millpond::seq::SequenceExt;
    ///
    /// let largest: Vec<i32> = [5, 3, 8, 1, 9, 2]
    ///     .into_iter()
    ///     .partial_order_by_key_desc(|x| *x, 3)
    ///     .collect();
    /// assert_eq!(largest, vec![9, 8, 5]);
    /// ```
    fn partial_order_by_key_desc<K, F>(
        self,
        key_fn: F,
        count: usize,
    ) -> PartialOrdered<Self, K, F, fn(&K, &K) -> Ordering>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        PartialOrdered::new(self, key_fn, K::cmp, Direction::Descending, count)
    }

    /// The first `count` elements ordered ascending by key with an explicit
    /// comparator.
    fn partial_order_by<K, F, C>(
        self,
        key_fn: F,
        compare: C,
        count: usize,
    ) -> PartialOrdered<Self, K, F, C>
    where
        F: FnMut(&Self::Item) -> K,
        C: Fn(&K, &K) -> Ordering,
    {
        PartialOrdered::new(self, key_fn, compare, Direction::Ascending, count)
    }

    /// The first `count` elements ordered descending by key with an explicit
    /// comparator.
    fn partial_order_by_desc<K, F, C>(
        self,
        key_fn: F,
        compare: C,
        count: usize,
    ) -> PartialOrdered<Self, K, F, C>
    where
        F: FnMut(&Self::Item) -> K,
        C: Fn(&K, &K) -> Ordering,
    {
        PartialOrdered::new(self, key_fn, compare, Direction::Descending, count)
    }
}

impl<I: Iterator> SequenceExt for I {}

// ========== Free Functions ==========

/// Cartesian product of a list of sequences.
///
/// The product over an empty list is a single empty sequence, matching the
/// usual fold identity.
///
/// # Example
///
/// ```rust
/// use millpond::seq::cartesian_product;
///
/// let product = cartesian_product(vec![vec![1, 2], vec![10, 20]]);
/// assert_eq!(product, vec![
///     vec![1, 10],
///     vec![1, 20],
///     vec![2, 10],
///     vec![2, 20],
/// ]);
/// ```
pub fn cartesian_product<T, S>(sequences: S) -> Vec<Vec<T>>
where
    T: Clone,
    S: IntoIterator<Item = Vec<T>>,
{
    sequences
        .into_iter()
        .fold(vec![Vec::new()], |accumulator, sequence| {
            accumulator
                .iter()
                .flat_map(|prefix| {
                    sequence.iter().map(move |item| {
                        let mut extended = prefix.clone();
                        extended.push(item.clone());
                        extended
                    })
                })
                .collect()
        })
}

// ========== Adaptor Types ==========

/// Iterator for [`SequenceExt::insert_at`].
pub struct InsertAt<I: Iterator> {
    source: I,
    index: usize,
    item: Option<I::Item>,
    position: usize,
}

impl<I: Iterator> Iterator for InsertAt<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.item.is_some() && self.position == self.index {
            return self.item.take();
        }
        match self.source.next() {
            Some(value) => {
                self.position += 1;
                Some(value)
            }
            // Source too short: append at the end.
            None => self.item.take(),
        }
    }
}

impl<I: Iterator> fmt::Debug for InsertAt<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InsertAt")
            .field("index", &self.index)
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}

/// Iterator for [`SequenceExt::zip_all`].
pub struct ZipAll<L, R> {
    left: L,
    right: R,
}

impl<L: Iterator, R: Iterator> Iterator for ZipAll<L, R> {
    type Item = (Maybe<L::Item>, Maybe<R::Item>);

    fn next(&mut self) -> Option<Self::Item> {
        match (self.left.next(), self.right.next()) {
            (Some(l), Some(r)) => Some((Maybe::new(l), Maybe::new(r))),
            (Some(l), None) => Some((Maybe::new(l), Maybe::empty())),
            (None, Some(r)) => Some((Maybe::empty(), Maybe::new(r))),
            (None, None) => None,
        }
    }
}

impl<L, R> fmt::Debug for ZipAll<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZipAll").finish_non_exhaustive()
    }
}

/// Iterator for [`SequenceExt::combinations`].
pub struct Combinations<T> {
    items: Vec<T>,
    mask: u128,
}

impl<T: Clone> Iterator for Combinations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        let limit = 1u128 << self.items.len();
        self.mask += 1;
        if self.mask >= limit {
            return None;
        }
        Some(
            self.items
                .iter()
                .enumerate()
                .filter(|(i, _)| self.mask & (1 << i) != 0)
                .map(|(_, item)| item.clone())
                .collect(),
        )
    }
}

impl<T> fmt::Debug for Combinations<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Combinations")
            .field("len", &self.items.len())
            .field("mask", &self.mask)
            .finish_non_exhaustive()
    }
}

/// Inner-side grouping shared by the join adaptors: groups in
/// first-occurrence key order with a hash index for probing.
struct Lookup<K, V> {
    groups: Vec<(K, Vec<V>)>,
    index: HashMap<K, usize>,
}

impl<K: Eq + Hash + Clone, V> Lookup<K, V> {
    fn build<I, F>(items: I, mut key_fn: F) -> Self
    where
        I: Iterator<Item = V>,
        F: FnMut(&V) -> K,
    {
        let mut groups: Vec<(K, Vec<V>)> = Vec::new();
        let mut index: HashMap<K, usize> = HashMap::new();
        for item in items {
            let key = key_fn(&item);
            match index.get(&key) {
                Some(&slot) => groups[slot].1.push(item),
                None => {
                    index.insert(key.clone(), groups.len());
                    groups.push((key, vec![item]));
                }
            }
        }
        Lookup { groups, index }
    }

    fn get(&self, key: &K) -> Option<&[V]> {
        self.index.get(key).map(|&slot| &self.groups[slot].1[..])
    }
}

/// Iterator for [`SequenceExt::full_outer_join`].
pub struct FullOuterJoin<O: Iterator, I, K, F> {
    outer: O,
    outer_key: F,
    lookup: Lookup<K, I>,
    matched: HashSet<K>,
    pending: std::vec::IntoIter<(Maybe<O::Item>, Maybe<I>)>,
    // None while streaming outer rows, then an index into lookup.groups
    unmatched_group: Option<usize>,
}

impl<O, I, K, F> Iterator for FullOuterJoin<O, I, K, F>
where
    O: Iterator,
    O::Item: Clone,
    I: Clone,
    K: Eq + Hash + Clone,
    F: FnMut(&O::Item) -> K,
{
    type Item = (Maybe<O::Item>, Maybe<I>);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(pair) = self.pending.next() {
                return Some(pair);
            }

            match self.unmatched_group {
                None => match self.outer.next() {
                    Some(outer_item) => {
                        let key = (self.outer_key)(&outer_item);
                        match self.lookup.get(&key) {
                            Some(group) => {
                                self.matched.insert(key);
                                self.pending = group
                                    .iter()
                                    .map(|inner| {
                                        (Maybe::new(outer_item.clone()), Maybe::new(inner.clone()))
                                    })
                                    .collect::<Vec<_>>()
                                    .into_iter();
                            }
                            None => return Some((Maybe::new(outer_item), Maybe::empty())),
                        }
                    }
                    None => self.unmatched_group = Some(0),
                },
                Some(slot) => {
                    if slot >= self.lookup.groups.len() {
                        return None;
                    }
                    self.unmatched_group = Some(slot + 1);
                    let (key, group) = &self.lookup.groups[slot];
                    if !self.matched.contains(key) {
                        self.pending = group
                            .iter()
                            .map(|inner| (Maybe::empty(), Maybe::new(inner.clone())))
                            .collect::<Vec<_>>()
                            .into_iter();
                    }
                }
            }
        }
    }
}

impl<O: Iterator, I, K, F> fmt::Debug for FullOuterJoin<O, I, K, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FullOuterJoin").finish_non_exhaustive()
    }
}

/// Iterator for [`SequenceExt::left_outer_join`].
pub struct LeftOuterJoin<O: Iterator, I, K, F> {
    outer: O,
    outer_key: F,
    lookup: Lookup<K, I>,
    pending: std::vec::IntoIter<(O::Item, Maybe<I>)>,
}

impl<O, I, K, F> Iterator for LeftOuterJoin<O, I, K, F>
where
    O: Iterator,
    O::Item: Clone,
    I: Clone,
    K: Eq + Hash + Clone,
    F: FnMut(&O::Item) -> K,
{
    type Item = (O::Item, Maybe<I>);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(pair) = self.pending.next() {
                return Some(pair);
            }

            let outer_item = self.outer.next()?;
            let key = (self.outer_key)(&outer_item);
            match self.lookup.get(&key) {
                Some(group) => {
                    self.pending = group
                        .iter()
                        .map(|inner| (outer_item.clone(), Maybe::new(inner.clone())))
                        .collect::<Vec<_>>()
                        .into_iter();
                }
                None => return Some((outer_item, Maybe::empty())),
            }
        }
    }
}

impl<O: Iterator, I, K, F> fmt::Debug for LeftOuterJoin<O, I, K, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeftOuterJoin").finish_non_exhaustive()
    }
}

/// Iterator for [`SequenceExt::right_outer_join`].
pub struct RightOuterJoin<O: Iterator, I, K, F> {
    outer: O,
    outer_key: F,
    lookup: Lookup<K, I>,
    matched: HashSet<K>,
    pending: std::vec::IntoIter<(Maybe<O::Item>, I)>,
    unmatched_group: Option<usize>,
}

impl<O, I, K, F> Iterator for RightOuterJoin<O, I, K, F>
where
    O: Iterator,
    O::Item: Clone,
    I: Clone,
    K: Eq + Hash + Clone,
    F: FnMut(&O::Item) -> K,
{
    type Item = (Maybe<O::Item>, I);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(pair) = self.pending.next() {
                return Some(pair);
            }

            match self.unmatched_group {
                None => match self.outer.next() {
                    Some(outer_item) => {
                        let key = (self.outer_key)(&outer_item);
                        if let Some(group) = self.lookup.get(&key) {
                            self.matched.insert(key);
                            self.pending = group
                                .iter()
                                .map(|inner| (Maybe::new(outer_item.clone()), inner.clone()))
                                .collect::<Vec<_>>()
                                .into_iter();
                        }
                        // Unmatched outer rows are dropped.
                    }
                    None => self.unmatched_group = Some(0),
                },
                Some(slot) => {
                    if slot >= self.lookup.groups.len() {
                        return None;
                    }
                    self.unmatched_group = Some(slot + 1);
                    let (key, group) = &self.lookup.groups[slot];
                    if !self.matched.contains(key) {
                        self.pending = group
                            .iter()
                            .map(|inner| (Maybe::empty(), inner.clone()))
                            .collect::<Vec<_>>()
                            .into_iter();
                    }
                }
            }
        }
    }
}

impl<O: Iterator, I, K, F> fmt::Debug for RightOuterJoin<O, I, K, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RightOuterJoin").finish_non_exhaustive()
    }
}
