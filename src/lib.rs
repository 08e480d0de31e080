//! Fluent, chainable wrappers over one-pass iterators, plus regex
//! split/replace sugar for strings and small slice/row helpers.
//!
//! The core type is [`Seq`], a boxed forward-only cursor with chained
//! transformation methods, destructive indexing and slicing, fork/tee
//! semantics, windowing and chunking, first-seen-order dedup, and the
//! `+`/`-`/`*` operators for concat, set difference and repetition:
//!
//! ```
//! use lazyseq::{Cond, Seq};
//!
//! let seq = Seq::new(0..6) + vec![2, 7];
//! assert_eq!(vec![0, 1, 2, 3, 4, 5, 2, 7], seq.to_vec());
//!
//! let tail = Seq::new(0..10).starts_when(Cond::is(7));
//! assert_eq!(vec![7, 8, 9], tail.to_vec());
//! ```
//!
//! String sugar lives in [`StrExt`]:
//!
//! ```
//! use lazyseq::StrExt;
//!
//! let fragments = "a-b_c-d".split_all(&["-", "_"], 0, "").unwrap();
//! assert_eq!(vec!["a", "b", "c", "d"], fragments.to_vec());
//! ```

mod adapter;
mod cond;
mod err;
mod pairs;
mod seq;
mod text;

pub use cond::{Cond, SliceBound};
pub use err::SeqErr;
pub use pairs::{SliceExt, rows_to_map};
pub use seq::Seq;
pub use text::StrExt;

pub type SeqRes<T> = Result<T, SeqErr>;
