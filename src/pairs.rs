use crate::SeqRes;
use crate::err::SeqErr;
use rustc_hash::FxHashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Position lookup sugar over slices.
pub trait SliceExt<T> {
    /// Position of the first element equal to `value`, or an error naming it.
    fn index_of(&self, value: &T) -> SeqRes<usize>;
}

impl<T: PartialEq + Debug> SliceExt<T> for [T] {
    fn index_of(&self, value: &T) -> SeqRes<usize> {
        self.iter()
            .position(|item| item == value)
            .ok_or_else(|| SeqErr::NotFound { value: format!("{value:?}") })
    }
}

/// Build a map from rows of exactly two cells, later keys winning. A row of
/// any other length fails, naming the row and its length.
pub fn rows_to_map<T, I>(rows: I) -> SeqRes<FxHashMap<T, T>>
where
    T: Hash + Eq,
    I: IntoIterator<Item = Vec<T>>,
{
    let mut map = FxHashMap::default();
    for (index, row) in rows.into_iter().enumerate() {
        let [key, value]: [T; 2] = match row.try_into() {
            Ok(cells) => cells,
            Err(row) => return Err(SeqErr::RowLength { index, len: row.len() }),
        };
        map.insert(key, value);
    }
    Ok(map)
}
