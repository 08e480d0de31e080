use crate::SeqRes;
use crate::adapter::{Chunks, ConsecutiveGroups, Replay, SkipDuplicates, Window};
use crate::cond::{Cond, SliceBound};
use crate::err::SeqErr;
use itertools::Itertools;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;
use std::fmt;
use std::fmt::Display;
use std::hash::Hash;
use std::ops::{Add, Mul, Sub};

/// A fluent wrapper around a boxed single-pass cursor.
///
/// Every adapter consumes the wrapper and returns a new one, so pipelines
/// chain without intermediate collections:
///
/// ```
/// use lazyseq::Seq;
///
/// let spaced = Seq::new(0..5).filter(|n| n % 2 == 0).map(|n| n * 10);
/// assert_eq!(vec![0, 20, 40], spaced.to_vec());
/// ```
///
/// The cursor is forward-only: indexing and slicing advance it destructively,
/// and after [`Seq::tee`] the original handle refuses all further reads.
pub struct Seq<T> {
    iter: Box<dyn Iterator<Item = T>>,
    forked: bool,
}

impl<T: 'static> Seq<T> {
    pub fn new<I>(source: I) -> Seq<T>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        Seq::from_boxed(Box::new(source.into_iter()))
    }

    pub(crate) fn from_boxed(iter: Box<dyn Iterator<Item = T>>) -> Seq<T> {
        Seq { iter, forked: false }
    }

    /// Whether [`Seq::tee`] already split this handle.
    pub fn is_forked(&self) -> bool {
        self.forked
    }

    fn check_live(&self) {
        assert!(!self.forked, "this Seq was split by tee(), read the forks instead");
    }

    fn live(self) -> Box<dyn Iterator<Item = T>> {
        self.check_live();
        self.iter
    }

    /// Next element, or `default` once exhausted.
    pub fn next_or(&mut self, default: T) -> T {
        self.check_live();
        self.iter.next().unwrap_or(default)
    }

    /// Element at `index`, advancing the cursor past it. The elements before
    /// `index` are gone afterwards; the elements after it remain readable.
    ///
    /// ```
    /// use lazyseq::Seq;
    ///
    /// let mut seq = Seq::new(0..3);
    /// assert_eq!(1, seq.get(1).unwrap());
    /// assert_eq!(vec![2], seq.to_vec());
    /// ```
    pub fn get(&mut self, index: usize) -> SeqRes<T> {
        self.check_live();
        self.iter.nth(index).ok_or(SeqErr::IndexOutOfRange { index })
    }

    /// Slice the remaining sequence. Integer bounds translate to skip/take on
    /// the cursor with every `step`-th element kept; a [`SliceBound::When`]
    /// start defers to [`Seq::starts_when`] and a `When` stop to
    /// [`Seq::stops_when`]. With two conditional bounds the step is not
    /// applied. A step below 1 is rejected.
    pub fn slice(self, start: SliceBound<T>, stop: SliceBound<T>, step: i64) -> SeqRes<Seq<T>>
    where
        T: PartialEq,
    {
        if step < 1 {
            return Err(SeqErr::InvalidStep { step });
        }
        let step = step as usize;
        Ok(match (start, stop) {
            (SliceBound::When(start), SliceBound::When(stop)) => self.starts_when(start).stops_when(stop),
            (SliceBound::When(start), SliceBound::At(stop)) => self.bounded(0, Some(stop), step).starts_when(start),
            (SliceBound::When(start), SliceBound::Open) => self.bounded(0, None, step).starts_when(start),
            (SliceBound::At(start), SliceBound::When(stop)) => self.bounded(start, None, step).stops_when(stop),
            (SliceBound::Open, SliceBound::When(stop)) => self.bounded(0, None, step).stops_when(stop),
            (start, stop) => {
                let start = if let SliceBound::At(index) = start { index } else { 0 };
                let stop = if let SliceBound::At(index) = stop { Some(index) } else { None };
                self.bounded(start, stop, step)
            }
        })
    }

    fn bounded(self, start: usize, stop: Option<usize>, step: usize) -> Seq<T> {
        let skipped = self.live().skip(start);
        match stop {
            Some(stop) => Seq::from_boxed(Box::new(skipped.take(stop.saturating_sub(start)).step_by(step))),
            None => Seq::from_boxed(Box::new(skipped.step_by(step))),
        }
    }

    /// Suppress elements until `cond` first holds, then yield everything from
    /// the first match on, the match included.
    pub fn starts_when(self, mut cond: Cond<T>) -> Seq<T>
    where
        T: PartialEq,
    {
        let mut started = false;
        self.filter(move |item| {
            if !started {
                started = cond.test(item);
            }
            started
        })
    }

    /// Yield elements until `cond` first holds, the match excluded.
    pub fn stops_when(self, mut cond: Cond<T>) -> Seq<T>
    where
        T: PartialEq,
    {
        self.take_while(move |item| !cond.test(item))
    }

    /// Split into `num` independent forks over the shared, buffered source.
    /// The original handle is dead afterwards: any further read through it
    /// panics. Forks advance independently from the current cursor position.
    pub fn tee(&mut self, num: usize) -> Vec<Seq<T>>
    where
        T: Clone,
    {
        self.check_live();
        let mut rest = std::mem::replace(&mut self.iter, Box::new(std::iter::empty()));
        self.forked = true;
        let mut forks = Vec::with_capacity(num);
        if num == 0 {
            return forks;
        }
        for _ in 0..num - 1 {
            let (fork, remainder) = rest.tee();
            forks.push(Seq::from_boxed(Box::new(fork)));
            rest = Box::new(remainder);
        }
        forks.push(Seq::from_boxed(rest));
        forks
    }

    /// Non-destructive fork: tees the cursor internally, keeps one branch
    /// here and returns the other. Both handles stay usable.
    pub fn fork(&mut self) -> Seq<T>
    where
        T: Clone,
    {
        self.check_live();
        let cursor = std::mem::replace(&mut self.iter, Box::new(std::iter::empty()));
        let (kept, forked) = cursor.tee();
        self.iter = Box::new(kept);
        Seq::from_boxed(Box::new(forked))
    }

    /* ------------------------------- adapters ------------------------------- */

    pub fn map<U, F>(self, f: F) -> Seq<U>
    where
        U: 'static,
        F: FnMut(T) -> U + 'static,
    {
        Seq::from_boxed(Box::new(self.live().map(f)))
    }

    pub fn filter<F>(self, pred: F) -> Seq<T>
    where
        F: FnMut(&T) -> bool + 'static,
    {
        Seq::from_boxed(Box::new(self.live().filter(pred)))
    }

    pub fn zip<U, I>(self, other: I) -> Seq<(T, U)>
    where
        U: 'static,
        I: IntoIterator<Item = U>,
        I::IntoIter: 'static,
    {
        Seq::from_boxed(Box::new(self.live().zip(other)))
    }

    pub fn take_while<F>(self, pred: F) -> Seq<T>
    where
        F: FnMut(&T) -> bool + 'static,
    {
        Seq::from_boxed(Box::new(self.live().take_while(pred)))
    }

    pub fn skip_while<F>(self, pred: F) -> Seq<T>
    where
        F: FnMut(&T) -> bool + 'static,
    {
        Seq::from_boxed(Box::new(self.live().skip_while(pred)))
    }

    /// Endless replay of the sequence through an internal recording buffer.
    pub fn cycle(self) -> Seq<T>
    where
        T: Clone,
    {
        Seq::from_boxed(Box::new(Replay::new(self.live(), None)))
    }

    /// Consecutive elements with equal keys gathered into `(key, group)`
    /// pairs, produced lazily one group at a time.
    pub fn group_by<K, F>(self, key: F) -> Seq<(K, Vec<T>)>
    where
        K: PartialEq + 'static,
        F: FnMut(&T) -> K + 'static,
    {
        Seq::from_boxed(Box::new(ConsecutiveGroups::new(self.live(), key)))
    }

    pub fn enumerate_from(self, start: usize) -> Seq<(usize, T)> {
        Seq::from_boxed(Box::new(self.live().enumerate().map(move |(i, item)| (i + start, item))))
    }

    /// Drop every element whose fingerprint was already seen, keeping
    /// first-seen order. The fingerprint is the element itself; use
    /// [`Seq::skip_duplicates_by`] for types that are not hashable.
    pub fn skip_duplicates(self) -> Seq<T>
    where
        T: Clone + Hash + Eq,
    {
        self.skip_duplicates_by(T::clone)
    }

    pub fn skip_duplicates_by<K, F>(self, key: F) -> Seq<T>
    where
        K: Hash + Eq + 'static,
        F: FnMut(&T) -> K + 'static,
    {
        Seq::from_boxed(Box::new(SkipDuplicates::new(self.live(), key)))
    }

    /// Consecutive groups of `size` elements; the last group may be short.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn chunks(self, size: usize) -> Seq<Vec<T>> {
        assert!(size > 0, "chunk size must be greater than zero");
        Seq::from_boxed(Box::new(Chunks::new(self.live(), size)))
    }

    pub fn chunks_map<U, F>(self, size: usize, process: F) -> Seq<U>
    where
        U: 'static,
        F: FnMut(Vec<T>) -> U + 'static,
    {
        self.chunks(size).map(process)
    }

    /// Groups of exactly `size` elements, the final group padded with clones
    /// of `default`.
    pub fn padded_chunks(self, size: usize, default: T) -> Seq<Vec<T>>
    where
        T: Clone,
    {
        self.chunks(size).map(move |mut chunk| {
            chunk.resize(size, default.clone());
            chunk
        })
    }

    /// Overlapping windows of `size` elements, advancing one element per
    /// step, each yielded as an owned snapshot. A source shorter than `size`
    /// yields nothing.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn window(self, size: usize) -> Seq<Vec<T>>
    where
        T: Clone,
    {
        self.window_map(size, |buf| buf.iter().cloned().collect())
    }

    /// Like [`Seq::window`] but hands the internal ring buffer to `cast` by
    /// reference, so a cast that only inspects the window clones nothing. The
    /// buffer is reused between steps; anything kept must be extracted inside
    /// `cast`.
    pub fn window_map<U, F>(self, size: usize, cast: F) -> Seq<U>
    where
        U: 'static,
        F: FnMut(&VecDeque<T>) -> U + 'static,
    {
        assert!(size > 0, "window size must be greater than zero");
        Seq::from_boxed(Box::new(Window::new(self.live(), size, cast)))
    }

    /* ------------------------------- algebra ------------------------------- */

    /// Lazy concatenation, also available as `+`.
    pub fn concat<I>(self, other: I) -> Seq<T>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        Seq::from_boxed(Box::new(self.live().chain(other)))
    }

    /// The reflected form of [`Seq::concat`]: `other` first, then the
    /// remaining sequence. Coherence forbids `Vec<T> + Seq<T>`, so the
    /// reflected `+` is spelled as a method.
    pub fn prepend<I>(self, other: I) -> Seq<T>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        Seq::from_boxed(Box::new(other.into_iter().chain(self.live())))
    }

    /// Elements absent from `other`, in original order, also available as
    /// `-`. The right operand is drained into a set up front, so it must be
    /// finite.
    pub fn difference<I>(self, other: I) -> Seq<T>
    where
        T: Hash + Eq,
        I: IntoIterator<Item = T>,
    {
        let drop: FxHashSet<T> = other.into_iter().collect();
        self.filter(move |item| !drop.contains(item))
    }

    /// The reflected form of [`Seq::difference`]: the elements of `other`
    /// absent from this sequence, which is drained into a set up front.
    pub fn difference_from<I>(self, other: I) -> Seq<T>
    where
        T: Hash + Eq,
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        let drop: FxHashSet<T> = self.live().collect();
        Seq::from_boxed(Box::new(other.into_iter().filter(move |item| !drop.contains(item))))
    }

    /// The whole remaining sequence repeated `times` in order, also available
    /// as `*`. `repeat(0)` is empty and never reads the source.
    pub fn repeat(self, times: usize) -> Seq<T>
    where
        T: Clone,
    {
        Seq::from_boxed(Box::new(Replay::new(self.live(), Some(times))))
    }

    /* ------------------------------ terminals ------------------------------ */

    pub fn to_vec(self) -> Vec<T> {
        self.live().collect()
    }

    pub fn to_boxed_slice(self) -> Box<[T]> {
        self.live().collect()
    }

    pub fn to_set(self) -> FxHashSet<T>
    where
        T: Hash + Eq,
    {
        self.live().collect()
    }

    pub fn join(self, sep: &str) -> String
    where
        T: Display,
    {
        self.live().join(sep)
    }

    pub fn join_with<F>(self, sep: &str, cast: F) -> String
    where
        F: FnMut(T) -> String,
    {
        self.live().map(cast).join(sep)
    }

    /// Number of remaining elements. Trusts `size_hint` when it is exact
    /// (which costs nothing), otherwise drains the cursor counting.
    pub fn count(self) -> usize {
        self.check_live();
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => lower,
            _ => self.live().count(),
        }
    }
}

impl<K: 'static, V: 'static> Seq<(K, V)> {
    /// Collect a sequence of pairs into a map; later keys win.
    pub fn to_map(self) -> FxHashMap<K, V>
    where
        K: Hash + Eq,
    {
        self.live().collect()
    }
}

impl<T> Iterator for Seq<T> {
    type Item = T;

    /// # Panics
    ///
    /// Panics if this handle was split by [`Seq::tee`].
    fn next(&mut self) -> Option<Self::Item> {
        assert!(!self.forked, "this Seq was split by tee(), read the forks instead");
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> fmt::Debug for Seq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.forked { "Seq<forked>" } else { "Seq" })
    }
}

impl<T: 'static, I> Add<I> for Seq<T>
where
    I: IntoIterator<Item = T>,
    I::IntoIter: 'static,
{
    type Output = Seq<T>;

    fn add(self, rhs: I) -> Seq<T> {
        self.concat(rhs)
    }
}

impl<T: Hash + Eq + 'static, I> Sub<I> for Seq<T>
where
    I: IntoIterator<Item = T>,
{
    type Output = Seq<T>;

    fn sub(self, rhs: I) -> Seq<T> {
        self.difference(rhs)
    }
}

impl<T: Clone + 'static> Mul<usize> for Seq<T> {
    type Output = Seq<T>;

    fn mul(self, times: usize) -> Seq<T> {
        self.repeat(times)
    }
}

// The only reflected operator coherence permits: `T` stays covered by
// `Seq<T>` here, while `Vec<T> + Seq<T>` would put an uncovered `T` before
// the first local type. The other reflected forms are `prepend` and
// `difference_from`.
impl<T: Clone + 'static> Mul<Seq<T>> for usize {
    type Output = Seq<T>;

    fn mul(self, seq: Seq<T>) -> Seq<T> {
        seq.repeat(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sources_concatenate_in_order() {
        let seq = Seq::new(vec![1, 2]).concat(vec![3]).concat(4..6);
        assert_eq!(vec![1, 2, 3, 4, 5], seq.to_vec());
    }

    #[test]
    fn test_next_or_falls_back_when_exhausted() {
        assert_eq!(0, Seq::new(0..10).next_or(99));
        assert_eq!(42, Seq::new(0..0).next_or(42));
    }

    #[test]
    fn test_get_advances_destructively() {
        let mut seq = Seq::new(0..3);
        assert_eq!(Ok(1), Seq::get(&mut seq, 1));
        assert_eq!(vec![2], seq.to_vec());
    }

    #[test]
    fn test_get_past_the_end_names_the_index() {
        assert_eq!(Err(SeqErr::IndexOutOfRange { index: 4 }), Seq::get(&mut Seq::new(0..3), 4));
    }

    #[test]
    fn test_slice_with_integer_bounds() {
        let seq = Seq::new(0..100).slice(SliceBound::at(3), SliceBound::at(10), 1).unwrap();
        assert_eq!(vec![3, 4, 5, 6, 7, 8, 9], seq.to_vec());
    }

    #[test]
    fn test_slice_open_bounds_and_step() {
        let seq = Seq::new(0..10).slice(SliceBound::Open, SliceBound::Open, 2).unwrap();
        assert_eq!(vec![0, 2, 4, 6, 8], seq.to_vec());
        let seq = Seq::new(0..100).slice(SliceBound::Open, SliceBound::at(10), 1).unwrap();
        assert_eq!((0..10).collect::<Vec<_>>(), seq.to_vec());
        let seq = Seq::new(0..10).slice(SliceBound::at(7), SliceBound::Open, 1).unwrap();
        assert_eq!(vec![7, 8, 9], seq.to_vec());
    }

    #[test]
    fn test_slice_rejects_a_non_positive_step() {
        assert!(matches!(Seq::new(0..10).slice(SliceBound::Open, SliceBound::Open, -1), Err(SeqErr::InvalidStep { step: -1 })));
        assert!(matches!(Seq::new(0..10).slice(SliceBound::Open, SliceBound::Open, 0), Err(SeqErr::InvalidStep { step: 0 })));
    }

    #[test]
    fn test_slice_with_conditional_bounds() {
        let seq = Seq::new(0..10).slice(SliceBound::is(3), SliceBound::when(|x| *x > 6), 1).unwrap();
        assert_eq!(vec![3, 4, 5, 6], seq.to_vec());
        let seq = Seq::new(0..10).slice(SliceBound::at(2), SliceBound::is(5), 1).unwrap();
        assert_eq!(vec![2, 3, 4], seq.to_vec());
        let seq = Seq::new(0..10).slice(SliceBound::is(4), SliceBound::at(8), 1).unwrap();
        assert_eq!(vec![4, 5, 6, 7], seq.to_vec());
    }

    #[test]
    fn test_starts_when_is_inclusive() {
        assert_eq!(vec![6, 7, 8, 9], Seq::new(0..10).starts_when(Cond::when(|x| *x > 5)).to_vec());
        assert_eq!(vec![7, 8, 9], Seq::new(0..10).starts_when(Cond::is(7)).to_vec());
    }

    #[test]
    fn test_stops_when_excludes_the_match() {
        assert_eq!(vec![0, 1, 2, 3, 4, 5], Seq::new(0..10).stops_when(Cond::when(|x| *x > 5)).to_vec());
        assert_eq!(vec![0, 1, 2, 3, 4, 5, 6], Seq::new(0..10).stops_when(Cond::is(7)).to_vec());
    }

    #[test]
    fn test_add_concatenates_lazily() {
        assert_eq!(vec![0, 1, 2, 3, 4], (Seq::new(0..3) + vec![3, 4]).to_vec());
        assert_eq!(vec![9, 8, 0, 1], Seq::new(0..2).prepend(vec![9, 8]).to_vec());
    }

    #[test]
    fn test_sub_filters_through_a_set() {
        assert_eq!(vec![0, 4, 5], (Seq::new(0..6) - vec![1, 2, 3]).to_vec());
        // duplicates on the left survive as long as they are not in the set
        assert_eq!(vec![1, 1], (Seq::new(vec![1, 1, 2]) - vec![2]).to_vec());
        assert_eq!(vec![7], Seq::new(0..6).difference_from(vec![1, 5, 7]).to_vec());
    }

    #[test]
    fn test_mul_repeats_in_order() {
        assert_eq!(vec![0, 1, 2, 0, 1, 2, 0, 1, 2], (Seq::new(0..3) * 3).to_vec());
        assert_eq!(vec![0, 1, 2, 0, 1, 2], (2usize * Seq::new(0..3)).to_vec());
        assert!((Seq::new(0..3) * 0).to_vec().is_empty());
    }

    #[test]
    fn test_tee_forks_are_independent() {
        let mut seq = Seq::new(0..3);
        let forks = Seq::tee(&mut seq, 2);
        let materialized: Vec<Vec<i32>> = forks.into_iter().map(Seq::to_vec).collect();
        assert_eq!(vec![vec![0, 1, 2], vec![0, 1, 2]], materialized);
    }

    #[test]
    #[should_panic(expected = "split by tee")]
    fn test_tee_poisons_the_original() {
        let mut seq = Seq::new(0..3);
        let _forks = Seq::tee(&mut seq, 2);
        let _ = seq.next();
    }

    #[test]
    #[should_panic(expected = "split by tee")]
    fn test_adapters_refuse_a_forked_handle() {
        let mut seq = Seq::new(0..3);
        let _forks = Seq::tee(&mut seq, 2);
        let _ = seq.map(|x| x + 1);
    }

    #[test]
    fn test_fork_keeps_both_handles_alive() {
        let mut seq = Seq::new(0..3);
        let fork = seq.fork();
        assert_eq!(vec![0, 1, 2], fork.to_vec());
        assert_eq!(vec![0, 1, 2], seq.to_vec());
    }

    #[test]
    fn test_map_filter_zip() {
        let seq = Seq::new(0..6).filter(|x| x % 2 == 0).map(|x| x * 10).zip("ab".chars());
        assert_eq!(vec![(0, 'a'), (20, 'b')], seq.to_vec());
    }

    #[test]
    fn test_take_while_and_skip_while() {
        assert_eq!(vec![0, 1, 2], Seq::new(0..10).take_while(|x| *x < 3).to_vec());
        assert_eq!(vec![8, 9], Seq::new(0..10).skip_while(|x| *x < 8).to_vec());
    }

    #[test]
    fn test_cycle_replays_endlessly() {
        let cycled: Vec<i32> = Seq::new(0..3).cycle().take(7).collect();
        assert_eq!(vec![0, 1, 2, 0, 1, 2, 0], cycled);
    }

    #[test]
    fn test_group_by_collects_consecutive_runs() {
        let groups = Seq::new(vec![1, 1, 2, 2, 2, 1]).group_by(|x| *x).to_vec();
        assert_eq!(vec![(1, vec![1, 1]), (2, vec![2, 2, 2]), (1, vec![1])], groups);
    }

    #[test]
    fn test_enumerate_from_offsets_the_counter() {
        let seq = Seq::new("abc".chars()).enumerate_from(1);
        assert_eq!(vec![(1, 'a'), (2, 'b'), (3, 'c')], seq.to_vec());
    }

    #[test]
    fn test_skip_duplicates_keeps_first_seen_order() {
        let seq = Seq::new(vec![1, 2, 3, 4, 4, 2, 1, 3, 4]).skip_duplicates();
        assert_eq!(vec![1, 2, 3, 4], seq.to_vec());
    }

    #[test]
    fn test_skip_duplicates_by_fingerprint() {
        let seq = Seq::new(vec!["a", "bb", "cc", "d"]).skip_duplicates_by(|s| s.len());
        assert_eq!(vec!["a", "bb"], seq.to_vec());
    }

    #[test]
    fn test_chunks_and_chunks_map() {
        let chunks = Seq::new(1..=7).chunks(3).to_vec();
        assert_eq!(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]], chunks);
        let sums = Seq::new(1..=7).chunks_map(3, |chunk| chunk.iter().sum::<i32>()).to_vec();
        assert_eq!(vec![6, 15, 7], sums);
    }

    #[test]
    fn test_padded_chunks_pads_only_the_tail() {
        let chunks = Seq::new(1..=7).padded_chunks(3, 0).to_vec();
        assert_eq!(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 0, 0]], chunks);
    }

    #[test]
    fn test_window_slides_one_element_per_step() {
        assert_eq!(vec![vec![1, 2], vec![2, 3]], Seq::new(vec![1, 2, 3]).window(2).to_vec());
        assert_eq!(vec![vec![1, 2]], Seq::new(vec![1, 2]).window(2).to_vec());
    }

    #[test]
    fn test_window_over_a_short_source_yields_nothing() {
        assert!(Seq::new(vec![1]).window(2).to_vec().is_empty());
    }

    #[test]
    fn test_window_map_borrows_the_buffer() {
        let sums = Seq::new(1..=5).window_map(3, |buf| buf.iter().sum::<i32>()).to_vec();
        assert_eq!(vec![6, 9, 12], sums);
    }

    #[test]
    fn test_count_with_and_without_an_exact_hint() {
        assert_eq!(1000, Seq::new(0..1000).count());
        // filter drops the exact hint, forcing a draining count
        assert_eq!(5, Seq::new(0..10).filter(|x| x % 2 == 0).count());
    }

    #[test]
    fn test_terminals() {
        assert_eq!("1,2,3", Seq::new(1..4).join(","));
        assert_eq!("<1>-<2>", Seq::new(1..3).join_with("-", |x| format!("<{x}>")));
        assert_eq!(&[1, 2, 3][..], &*Seq::new(1..4).to_boxed_slice());
        let set = Seq::new(vec![1, 2, 2, 3]).to_set();
        assert_eq!(3, set.len());
        let map = Seq::new(vec![("a", 1), ("b", 2)]).to_map();
        assert_eq!(Some(&2), map.get("b"));
    }

    #[test]
    fn test_debug_marks_a_forked_handle() {
        let mut seq = Seq::new(0..3);
        assert_eq!("Seq", format!("{seq:?}"));
        let _forks = Seq::tee(&mut seq, 2);
        assert_eq!("Seq<forked>", format!("{seq:?}"));
    }
}
