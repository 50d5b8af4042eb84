use crate::box_iterator;
use crate::comparators::NaturalSortComparator;
use binary_heap_plus::BinaryHeap;
use compare::{Compare, Rev};
use std::cmp::Ordering;
use std::marker::PhantomData;

/// Iterator source holding its head item in a buffer the heap comparator
/// can inspect without mutation, tagged with the index of the source it
/// came from. The tag is emitted with every item and breaks ties between
/// sources, keeping the merge stable.
struct TaggedSource<I: Iterator> {
    inner: I,
    buf: Option<(I::Item, usize)>,
}

impl<I: Iterator> TaggedSource<I> {
    fn new(mut inner: I, index: usize) -> Self {
        let buf = inner.next().map(|item| (item, index));
        Self { inner, buf }
    }
}

impl<I: Iterator> Iterator for TaggedSource<I> {
    type Item = (I::Item, usize);

    fn next(&mut self) -> Option<Self::Item> {
        match self.buf.take() {
            None => None,
            Some((inner_item, index)) => {
                if let Some(next_item) =
                    self.inner.next().map(|inner_item| (inner_item, index))
                {
                    self.buf.get_or_insert(next_item);
                }
                Some((inner_item, index))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (min, max) = self.inner.size_hint();
        match self.buf {
            None => (min, max),
            // Account for the buffered item.
            Some(_) => (min + 1, max.map(|max| max + 1)),
        }
    }
}

/// Orders two sources by their buffered head items, falling back to the
/// source index on equal heads. An exhausted source counts as infinity so
/// that it sinks below every live one.
struct SourceComparator<T, C: Compare<T, T>> {
    inner: C,
    phantom: PhantomData<T>,
}

impl<T, C: Compare<T, T>> From<C> for SourceComparator<T, C> {
    fn from(value: C) -> Self {
        Self {
            inner: value,
            phantom: PhantomData,
        }
    }
}

impl<I: Iterator, C: Compare<I::Item, I::Item>>
    Compare<TaggedSource<I>, TaggedSource<I>> for SourceComparator<I::Item, C>
{
    fn compare(&self, u: &TaggedSource<I>, v: &TaggedSource<I>) -> Ordering {
        match (&u.buf, &v.buf) {
            (Some((u_buf, u_index)), Some((v_buf, v_index))) => {
                let mut order = self.inner.compare(u_buf, v_buf);
                if let Ordering::Equal = order {
                    order = u_index.cmp(v_index)
                }
                order
            }
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

/// Merges `K>0` individually sorted iterators into one sorted stream,
/// comparing with `compare`. Ties between sources are resolved by source
/// index, so the merge is stable with respect to the input order.
///
/// Usage example:
///
/// ```
/// use natural_sort::merge_natural;
///
/// fn merging_listings() {
///     let left = vec!["item1", "item10"];
///     let right = vec!["item2", "item9"];
///     let merged: Vec<&str> =
///         merge_natural([left.into_iter(), right.into_iter()]).collect();
///     assert_eq!(merged, vec!["item1", "item2", "item9", "item10"]);
/// }
/// ```
pub struct MergeSorted<'a, T, C: Compare<T, T>> {
    bh: BinaryHeap<
        TaggedSource<Box<dyn Iterator<Item = T> + 'a>>,
        Rev<SourceComparator<T, C>>,
    >,
}

impl<'a, T: 'a, C: Compare<T, T> + 'a> MergeSorted<'a, T, C> {
    /// Construct new instance from homogeneous collection of iterators.
    /// There should be at least one iterator.
    pub fn new<I: Iterator<Item = T> + 'a>(
        iters: impl IntoIterator<Item = I>,
        compare: C,
    ) -> Self {
        Self::from_boxed(iters.into_iter().map(box_iterator), compare)
    }

    /// Construct new instance from collection of boxed iterators. There
    /// should be at least one iterator.
    pub fn from_boxed(
        iters: impl IntoIterator<Item = Box<dyn Iterator<Item = T> + 'a>>,
        compare: C,
    ) -> Self {
        let iters: Vec<_> = iters
            .into_iter()
            .enumerate()
            .map(|(n, it)| TaggedSource::new(it, n))
            .collect();
        assert!(!iters.is_empty());
        let comparator = <SourceComparator<T, C> as Compare<
            TaggedSource<Box<dyn Iterator<Item = T> + 'a>>,
        >>::rev(SourceComparator::from(compare));
        let bh = BinaryHeap::from_vec_cmp(iters, comparator);
        Self { bh }
    }

    pub fn into_boxed(self) -> Box<dyn Iterator<Item = T> + 'a> {
        Box::new(self)
    }
}

impl<'a, T, C: Compare<T, T>> Iterator for MergeSorted<'a, T, C> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        // The heap top is the smallest live source; if it is exhausted,
        // every source is. `PeekMut` restores the heap order on drop.
        let item = self.bh.peek_mut().and_then(|mut src| src.next());
        item.map(|(item, _)| item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // A plain merge emits every input item exactly once.
        self.bh.iter().fold((0, Some(0)), |(cmin, cmax), it| {
            let (imin, imax) = it.size_hint();
            let cmax =
                cmax.and_then(|cmax| imax.and_then(|imax| cmax.checked_add(imax)));
            (cmin + imin, cmax)
        })
    }
}

/// Merges naturally sorted sequences of string-like items in natural order.
pub fn merge_natural<'a, S, I>(
    iters: impl IntoIterator<Item = I>,
) -> MergeSorted<'a, S, NaturalSortComparator>
where
    S: AsRef<str> + 'a,
    I: Iterator<Item = S> + 'a,
{
    MergeSorted::new(iters, NaturalSortComparator::new())
}
