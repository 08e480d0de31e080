use std::fmt;

/// A condition that is either a literal compared by equality or an arbitrary
/// predicate. Call sites accept both forms and normalize once, so
/// `starts_when(Cond::is(7))` and `starts_when(Cond::when(|x| *x > 6))` read
/// the same downstream.
pub enum Cond<T> {
    Is(T),
    When(Box<dyn FnMut(&T) -> bool>),
}

impl<T> Cond<T> {
    pub fn is(value: T) -> Cond<T> {
        Cond::Is(value)
    }

    pub fn when(pred: impl FnMut(&T) -> bool + 'static) -> Cond<T> {
        Cond::When(Box::new(pred))
    }

    pub fn test(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        match self {
            Cond::Is(value) => value == item,
            Cond::When(pred) => pred(item),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Cond<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cond::Is(value) => f.debug_tuple("Is").field(value).finish(),
            Cond::When(_) => f.write_str("When(..)"),
        }
    }
}

/// One end of a [`Seq::slice`](crate::Seq::slice) range: open, a plain index,
/// or a [`Cond`] resolved against elements as they stream past.
pub enum SliceBound<T> {
    Open,
    At(usize),
    When(Cond<T>),
}

impl<T> SliceBound<T> {
    pub fn at(index: usize) -> SliceBound<T> {
        SliceBound::At(index)
    }

    /// Bound at the first element equal to `value`.
    pub fn is(value: T) -> SliceBound<T> {
        SliceBound::When(Cond::is(value))
    }

    /// Bound at the first element satisfying `pred`.
    pub fn when(pred: impl FnMut(&T) -> bool + 'static) -> SliceBound<T> {
        SliceBound::When(Cond::when(pred))
    }
}
