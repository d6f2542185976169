use super::model::Table;

/// Removes rows of one table by key identity against another.
pub trait KeySetDiff {
    /// `target` minus every row whose `key_column` value appears in
    /// `reference`. Row order of `target` is preserved.
    fn diff(&self, target: &Table, reference: &Table, key_column: &str) -> Table;
}

/// Set-based [`KeySetDiff`].
///
/// Rows without a key (missing cell or `Null`) have no identity: they are
/// never removed and never remove anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyDiff;

impl KeySetDiff for KeyDiff {
    fn diff(&self, target: &Table, reference: &Table, key_column: &str) -> Table {
        let reference_keys = reference.keys(key_column);
        let rows = target
            .rows
            .iter()
            .filter(|r| match r.get(key_column) {
                Some(key) if !key.is_null() => !reference_keys.contains(key),
                _ => true,
            })
            .cloned()
            .collect();
        target.with_rows(rows)
    }
}
