//! Hand-rolled iterator adapters backing the non-trivial [`Seq`](crate::Seq)
//! methods. Everything here drives a boxed source cursor exactly once.

use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use std::hash::Hash;

type Source<T> = Box<dyn Iterator<Item = T>>;

/// Consecutive groups of up to `size` elements; the last group may be short.
pub(crate) struct Chunks<T> {
    source: Source<T>,
    size: usize,
}

impl<T> Chunks<T> {
    pub(crate) fn new(source: Source<T>, size: usize) -> Chunks<T> {
        Chunks { source, size }
    }
}

impl<T> Iterator for Chunks<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut chunk = Vec::with_capacity(self.size);
        for _ in 0..self.size {
            if let Some(item) = self.source.next() {
                chunk.push(item);
            } else {
                break;
            }
        }
        if chunk.is_empty() { None } else { Some(chunk) }
    }
}

/// Sliding window of `size` elements, advancing one element per step. The
/// ring buffer is filled on the first call and handed to `cast` by reference,
/// so casts that only inspect the window pay no clone. A source shorter than
/// `size` yields nothing.
pub(crate) struct Window<T, U, F: FnMut(&VecDeque<T>) -> U> {
    source: Source<T>,
    size: usize,
    buf: VecDeque<T>,
    cast: F,
    primed: bool,
}

impl<T, U, F: FnMut(&VecDeque<T>) -> U> Window<T, U, F> {
    pub(crate) fn new(source: Source<T>, size: usize, cast: F) -> Window<T, U, F> {
        Window { source, size, buf: VecDeque::with_capacity(size), cast, primed: false }
    }
}

impl<T, U, F: FnMut(&VecDeque<T>) -> U> Iterator for Window<T, U, F> {
    type Item = U;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.primed {
            self.primed = true;
            while self.buf.len() < self.size {
                self.buf.push_back(self.source.next()?);
            }
            return Some((self.cast)(&self.buf));
        }
        let item = self.source.next()?;
        self.buf.pop_front();
        self.buf.push_back(item);
        Some((self.cast)(&self.buf))
    }
}

/// First-seen-order dedup over fingerprints produced by `key`.
pub(crate) struct SkipDuplicates<T, K, F: FnMut(&T) -> K> {
    source: Source<T>,
    key: F,
    seen: FxHashSet<K>,
}

impl<T, K, F: FnMut(&T) -> K> SkipDuplicates<T, K, F> {
    pub(crate) fn new(source: Source<T>, key: F) -> SkipDuplicates<T, K, F> {
        SkipDuplicates { source, key, seen: FxHashSet::default() }
    }
}

impl<T, K: Hash + Eq, F: FnMut(&T) -> K> Iterator for SkipDuplicates<T, K, F> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.source.next()?;
            let fingerprint = (self.key)(&item);
            if self.seen.insert(fingerprint) {
                return Some(item);
            }
        }
    }
}

/// Streams the source once while recording it, then replays the recording.
/// `passes: None` replays forever (`cycle`); `passes: Some(n)` yields the
/// whole sequence `n` times in total (`repeat`). A boxed cursor cannot be
/// cloned, so this stands in for `chain(tee(it, n))`.
pub(crate) struct Replay<T> {
    source: Source<T>,
    buf: Vec<T>,
    pos: usize,
    // replay passes left after the recording pass, None = endless
    remaining: Option<usize>,
    recorded: bool,
}

impl<T> Replay<T> {
    pub(crate) fn new(source: Source<T>, passes: Option<usize>) -> Replay<T> {
        Replay {
            source,
            buf: Vec::new(),
            pos: 0,
            remaining: passes.map(|n| n.saturating_sub(1)),
            // zero passes must not touch the source at all
            recorded: passes == Some(0),
        }
    }
}

impl<T: Clone> Iterator for Replay<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.recorded {
            if let Some(item) = self.source.next() {
                self.buf.push(item.clone());
                return Some(item);
            }
            self.recorded = true;
        }
        if self.buf.is_empty() {
            return None;
        }
        loop {
            if self.remaining == Some(0) {
                return None;
            }
            if self.pos < self.buf.len() {
                let item = self.buf[self.pos].clone();
                self.pos += 1;
                return Some(item);
            }
            self.pos = 0;
            if let Some(left) = self.remaining.as_mut() {
                *left -= 1;
            }
        }
    }
}

/// Runs of consecutive elements whose keys compare equal, collected one group
/// at a time. The first element of the next run is stashed between calls.
pub(crate) struct ConsecutiveGroups<T, K, F: FnMut(&T) -> K> {
    source: Source<T>,
    key: F,
    pending: Option<(K, T)>,
}

impl<T, K, F: FnMut(&T) -> K> ConsecutiveGroups<T, K, F> {
    pub(crate) fn new(source: Source<T>, key: F) -> ConsecutiveGroups<T, K, F> {
        ConsecutiveGroups { source, key, pending: None }
    }
}

impl<T, K: PartialEq, F: FnMut(&T) -> K> Iterator for ConsecutiveGroups<T, K, F> {
    type Item = (K, Vec<T>);

    fn next(&mut self) -> Option<Self::Item> {
        let (group_key, first) = match self.pending.take() {
            Some(stashed) => stashed,
            None => {
                let item = self.source.next()?;
                let key = (self.key)(&item);
                (key, item)
            }
        };
        let mut group = vec![first];
        for item in self.source.by_ref() {
            let key = (self.key)(&item);
            if key == group_key {
                group.push(item);
            } else {
                self.pending = Some((key, item));
                break;
            }
        }
        Some((group_key, group))
    }
}
