//! Partial top-K ordering: the first K elements by key, without fully
//! sorting the rest.
//!
//! The engine materializes `(key, item)` pairs for one selection call,
//! partitions them quickselect-style, and only orders subranges that
//! intersect the K-prefix. Equal keys have no guaranteed relative order.
//!
//! Use the adaptors on [`SequenceExt`](crate::seq::SequenceExt) rather than
//! constructing [`PartialOrdered`] directly.
//!
//! # Examples
//!
//! ```rust
//! use millpond::seq::SequenceExt;
//!
//! let smallest: Vec<i32> = [5, 3, 8, 1, 9, 2]
//!     .into_iter()
//!     .partial_order_by_key(|x| *x, 3)
//!     .collect();
//! assert_eq!(smallest, vec![1, 2, 3]);
//! ```

use std::cmp::Ordering;
use std::fmt;

/// Sort direction for a partial ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Smallest keys first.
    Ascending,
    /// Largest keys first.
    Descending,
}

/// A lazy sequence of at most `count` elements ordered by key.
///
/// Nothing is consumed from the source until the first call to `next()`; at
/// that point the whole source is materialized, the K-prefix is selected,
/// and the prefix is drained element by element. With `count == 0` the
/// source is never consumed at all.
pub struct PartialOrdered<I: Iterator, K, F, C> {
    state: State<I, K, F, C>,
}

impl<I: Iterator, K, F, C> fmt::Debug for PartialOrdered<I, K, F, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phase = match self.state {
            State::Pending { count, .. } => format!("pending(count={count})"),
            State::Selected(_) => "selected".to_string(),
        };
        f.debug_struct("PartialOrdered").field("phase", &phase).finish()
    }
}

enum State<I: Iterator, K, F, C> {
    Pending {
        source: I,
        key_fn: F,
        compare: C,
        direction: Direction,
        count: usize,
        // keeps the K type parameter anchored before selection runs
        _marker: std::marker::PhantomData<K>,
    },
    Selected(std::vec::IntoIter<I::Item>),
}

impl<I, K, F, C> PartialOrdered<I, K, F, C>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    C: Fn(&K, &K) -> Ordering,
{
    pub(crate) fn new(source: I, key_fn: F, compare: C, direction: Direction, count: usize) -> Self {
        PartialOrdered {
            state: State::Pending {
                source,
                key_fn,
                compare,
                direction,
                count,
                _marker: std::marker::PhantomData,
            },
        }
    }

    fn select(
        source: I,
        mut key_fn: F,
        compare: C,
        direction: Direction,
        count: usize,
    ) -> std::vec::IntoIter<I::Item> {
        if count == 0 {
            return Vec::new().into_iter();
        }

        let mut pairs: Vec<(K, I::Item)> = source.map(|item| (key_fn(&item), item)).collect();
        if pairs.is_empty() {
            return Vec::new().into_iter();
        }

        partial_select(&mut pairs, count, &compare, direction);

        let upper = count.min(pairs.len());
        pairs.truncate(upper);
        pairs
            .into_iter()
            .map(|(_, item)| item)
            .collect::<Vec<_>>()
            .into_iter()
    }
}

impl<I, K, F, C> Iterator for PartialOrdered<I, K, F, C>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    C: Fn(&K, &K) -> Ordering,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if let State::Pending { .. } = self.state {
            let pending = std::mem::replace(&mut self.state, State::Selected(Vec::new().into_iter()));
            if let State::Pending {
                source,
                key_fn,
                compare,
                direction,
                count,
                ..
            } = pending
            {
                self.state =
                    State::Selected(Self::select(source, key_fn, compare, direction, count));
            }
        }

        match &mut self.state {
            State::Selected(front) => front.next(),
            State::Pending { .. } => unreachable!(),
        }
    }
}

/// Order the first `count` positions of `pairs` by key, leaving the rest in
/// unspecified order.
///
/// Iterative partial quicksort: middle-element pivot tracked by index across
/// swaps, two-pointer partition scan, and an explicit work stack instead of
/// recursion so adversarial inputs cannot overflow the call stack. Subranges
/// that lie entirely beyond the `count`-prefix are dropped without sorting.
fn partial_select<K, T, C>(pairs: &mut [(K, T)], count: usize, compare: &C, direction: Direction)
where
    C: Fn(&K, &K) -> Ordering,
{
    let cmp = |a: &K, b: &K| match direction {
        Direction::Ascending => compare(a, b),
        Direction::Descending => compare(b, a),
    };

    let len = pairs.len() as isize;
    let mut work: Vec<(isize, isize, isize)> = vec![(0, len - 1, count.min(pairs.len()) as isize)];

    while let Some((left, right, wanted)) = work.pop() {
        if wanted <= 0 || left >= right {
            continue;
        }

        let mut i = left;
        let mut j = right;
        let mut pivot = (left + right) / 2;

        while i <= j {
            while cmp(&pairs[i as usize].0, &pairs[pivot as usize].0) == Ordering::Less {
                i += 1;
            }
            while cmp(&pairs[j as usize].0, &pairs[pivot as usize].0) == Ordering::Greater {
                j -= 1;
            }

            if i <= j {
                if i < j {
                    pairs.swap(i as usize, j as usize);
                    if pivot == i {
                        pivot = j;
                    } else if pivot == j {
                        pivot = i;
                    }
                }
                i += 1;
                j -= 1;
            }
        }

        if left < j {
            work.push((left, j, wanted));
        }
        // The right subrange only matters while the prefix extends past i.
        if i < right {
            work.push((i, right, left + wanted - i));
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_prefix_matches_full_sort(
            items in prop::collection::vec(any::<i32>(), 0..200),
            count in 0usize..250,
        ) {
            let selected: Vec<i32> = PartialOrdered::new(
                items.clone().into_iter(),
                |x| *x,
                i32::cmp,
                Direction::Ascending,
                count,
            )
            .collect();

            let mut sorted = items;
            sorted.sort_unstable();
            sorted.truncate(count);

            prop_assert_eq!(selected, sorted);
        }

        #[test]
        fn prop_descending_matches_reverse_sort(
            items in prop::collection::vec(any::<i32>(), 0..200),
            count in 0usize..250,
        ) {
            let selected: Vec<i32> = PartialOrdered::new(
                items.clone().into_iter(),
                |x| *x,
                i32::cmp,
                Direction::Descending,
                count,
            )
            .collect();

            let mut sorted = items;
            sorted.sort_unstable_by(|a, b| b.cmp(a));
            sorted.truncate(count);

            prop_assert_eq!(selected, sorted);
        }

        #[test]
        fn prop_selection_is_a_subset_of_the_input(
            items in prop::collection::vec(any::<i8>(), 0..100),
            count in 0usize..120,
        ) {
            let selected: Vec<i8> = PartialOrdered::new(
                items.clone().into_iter(),
                |x| *x,
                i8::cmp,
                Direction::Ascending,
                count,
            )
            .collect();

            prop_assert!(selected.len() <= count.min(items.len()));

            let mut remaining = items;
            for s in &selected {
                let pos = remaining.iter().position(|x| x == s);
                prop_assert!(pos.is_some());
                remaining.swap_remove(pos.unwrap());
            }
        }
    }
}
