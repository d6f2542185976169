use std::collections::{BTreeSet, HashMap};

use crate::error::{Result, SubsetError};

use super::model::Table;

/// Ranks the words of a text column.
pub trait WordFrequency {
    /// Top `top_n` `(word, count)` pairs of `column`, most frequent first,
    /// skipping every word listed in `excluded`.
    fn top(
        &self,
        table: &Table,
        column: &str,
        top_n: usize,
        excluded: &[String],
    ) -> Result<Vec<(String, usize)>>;
}

/// Lower-cased alphanumeric token counter.
///
/// Ties are broken alphabetically so the ranking is deterministic.
#[derive(Debug, Clone, Copy)]
pub struct WordCounter {
    /// Tokens shorter than this (in chars) are ignored.
    pub min_len: usize,
}

impl Default for WordCounter {
    fn default() -> Self {
        WordCounter { min_len: 1 }
    }
}

impl WordFrequency for WordCounter {
    fn top(
        &self,
        table: &Table,
        column: &str,
        top_n: usize,
        excluded: &[String],
    ) -> Result<Vec<(String, usize)>> {
        if !table.has_column(column) {
            return Err(SubsetError::ColumnNotFound(column.to_string()));
        }
        let excluded: BTreeSet<String> = excluded.iter().map(|w| w.to_lowercase()).collect();

        let mut counts: HashMap<String, usize> = HashMap::new();
        for text in table.column_values(column).filter_map(|v| v.as_text()) {
            for word in text
                .to_lowercase()
                .split(|c: char| !c.is_alphanumeric())
                .filter(|w| w.chars().count() >= self.min_len.max(1))
                .filter(|w| !excluded.contains(*w))
            {
                *counts.entry(word.to_string()).or_default() += 1;
            }
        }

        let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(top_n);
        Ok(ranked)
    }
}
