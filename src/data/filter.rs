use crate::error::{Result, SubsetError};

use super::model::{Row, Table};

// ---------------------------------------------------------------------------
// Keyword query: which column, which words, how they combine
// ---------------------------------------------------------------------------

/// How several keywords combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// A row passes when any keyword matches.
    #[default]
    Or,
    /// A row passes only when every keyword matches.
    And,
}

/// A keyword predicate over one column.
///
/// Defaults to OR, case-insensitive, substring matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordQuery {
    pub column: String,
    pub keywords: Vec<String>,
    pub mode: MatchMode,
    pub case_sensitive: bool,
    pub exact_match: bool,
}

impl KeywordQuery {
    pub fn new<S: Into<String>>(column: impl Into<String>, keywords: impl IntoIterator<Item = S>) -> Self {
        KeywordQuery {
            column: column.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
            mode: MatchMode::Or,
            case_sensitive: false,
            exact_match: false,
        }
    }

    pub fn mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn case_sensitive(mut self, yes: bool) -> Self {
        self.case_sensitive = yes;
        self
    }

    pub fn exact_match(mut self, yes: bool) -> Self {
        self.exact_match = yes;
        self
    }

    /// Whether `row` satisfies the query.
    ///
    /// A row passes when:
    /// * its cell in `column` has text (missing / `Null` never passes)
    /// * the keywords hit that text under the OR / AND combination
    ///
    /// An empty keyword list passes nothing under OR and everything under AND.
    pub fn matches(&self, row: &Row) -> bool {
        let Some(text) = row.get(&self.column).and_then(|v| v.as_text()) else {
            return false;
        };
        let text = if self.case_sensitive {
            text
        } else {
            text.to_lowercase()
        };
        let hit = |kw: &String| {
            let kw = if self.case_sensitive {
                kw.clone()
            } else {
                kw.to_lowercase()
            };
            if self.exact_match {
                text == kw
            } else {
                text.contains(&kw)
            }
        };
        match self.mode {
            MatchMode::Or => self.keywords.iter().any(hit),
            MatchMode::And => self.keywords.iter().all(hit),
        }
    }
}

// ---------------------------------------------------------------------------
// RowFilter – pluggable row selection
// ---------------------------------------------------------------------------

/// Selects the rows of a table that satisfy a [`KeywordQuery`].
pub trait RowFilter {
    /// Return the matching rows, in source order, as a new table with the
    /// source schema. Fails with [`SubsetError::ColumnNotFound`] when the
    /// query column is not part of the schema.
    fn filter(&self, table: &Table, query: &KeywordQuery) -> Result<Table>;
}

/// The stock [`RowFilter`]: a stable linear scan.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordMatcher;

impl RowFilter for KeywordMatcher {
    fn filter(&self, table: &Table, query: &KeywordQuery) -> Result<Table> {
        if !table.has_column(&query.column) {
            return Err(SubsetError::ColumnNotFound(query.column.clone()));
        }
        let rows = table
            .rows
            .iter()
            .filter(|r| query.matches(r))
            .cloned()
            .collect();
        Ok(table.with_rows(rows))
    }
}
