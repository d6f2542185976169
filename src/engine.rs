use log::{debug, info, warn};

use crate::config::EngineConfig;
use crate::data::diff::{KeyDiff, KeySetDiff};
use crate::data::filter::{KeywordMatcher, KeywordQuery, RowFilter};
use crate::data::model::Table;
use crate::data::words::{WordCounter, WordFrequency};
use crate::error::{Result, SubsetError};
use crate::history::HistoryStack;
use crate::store::{Alias, Subset, SubsetStore, SubsetSummary};

// ---------------------------------------------------------------------------
// Inputs and outcomes
// ---------------------------------------------------------------------------

/// Which table a new subset is filtered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source<'a> {
    /// The live working table.
    Principal,
    /// The most recently created subset, or principal if there is none yet.
    Latest,
    /// A subset (or alias) by name.
    Named(&'a str),
}

/// What a cascading deletion did to the parent subset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentCascade {
    pub parent: String,
    /// Rows actually removed from the parent; zero if they were already gone.
    pub removed: usize,
    pub remaining: usize,
}

/// What an applied deletion did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionReport {
    pub subset: String,
    pub removed_from_principal: usize,
    pub principal_remaining: usize,
    /// `None` when propagation was off or the subset has no parent.
    pub parent: Option<ParentCascade>,
}

/// Result of [`HierarchyEngine::apply_deletion`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeletionOutcome {
    /// The subset has no rows; nothing changed and no history was recorded.
    EmptySubset { subset: String },
    Applied(DeletionReport),
}

impl DeletionOutcome {
    pub fn removed_from_principal(&self) -> usize {
        match self {
            DeletionOutcome::EmptySubset { .. } => 0,
            DeletionOutcome::Applied(report) => report.removed_from_principal,
        }
    }

    pub fn is_noop(&self) -> bool {
        matches!(self, DeletionOutcome::EmptySubset { .. })
    }
}

/// Result of [`HierarchyEngine::undo_last_deletion`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoOutcome {
    NothingToUndo,
    /// Principal was restored and now has `rows` rows.
    Restored { rows: usize },
}

// ---------------------------------------------------------------------------
// HierarchyEngine
// ---------------------------------------------------------------------------

/// Owns the principal table, the subset registry and the undo log, and
/// routes keyword filtering and cascading deletion through them.
///
/// Not internally synchronised: share it across threads behind one lock.
#[derive(Debug, Clone)]
pub struct HierarchyEngine<F = KeywordMatcher, D = KeyDiff> {
    config: EngineConfig,
    store: SubsetStore,
    history: HistoryStack,
    filter: F,
    diff: D,
}

impl HierarchyEngine {
    /// Build an engine over `dataset` with the stock filter and diff.
    ///
    /// Fails with `ColumnNotFound` if the configured key column is not part
    /// of the dataset.
    pub fn new(dataset: Table, config: EngineConfig) -> Result<Self> {
        Self::with_collaborators(dataset, config, KeywordMatcher, KeyDiff)
    }
}

impl<F: RowFilter, D: KeySetDiff> HierarchyEngine<F, D> {
    pub fn with_collaborators(dataset: Table, config: EngineConfig, filter: F, diff: D) -> Result<Self> {
        if !dataset.has_column(&config.key_column) {
            return Err(SubsetError::ColumnNotFound(config.key_column.clone()));
        }
        info!(
            "engine ready: {} rows, key column '{}'",
            dataset.len(),
            config.key_column
        );
        Ok(HierarchyEngine {
            config,
            store: SubsetStore::new(dataset),
            history: HistoryStack::new(),
            filter,
            diff,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // -- Subset creation --

    /// Filter `source` with `query` and register the matches as `name`.
    ///
    /// The new subset keeps the source row order. Nothing is touched if
    /// `name` is taken, `parent` or the source is unknown, or the query
    /// column does not exist.
    pub fn create_filtered_subset(
        &mut self,
        source: Source<'_>,
        query: &KeywordQuery,
        name: &str,
        parent: Option<&str>,
    ) -> Result<&Subset> {
        self.store.ensure_available(name)?;
        if let Some(parent) = parent {
            self.store.get(parent)?;
        }

        let source_rows = match source {
            Source::Principal => self.store.principal(),
            Source::Latest => self
                .store
                .latest()
                .map_or(self.store.principal(), |s| &s.rows),
            Source::Named(n) => self.store.rows(n)?,
        };
        let rows = self.filter.filter(source_rows, query)?;

        let subset = self.store.create(name, rows, parent)?;
        info!("subset '{}' created with {} rows", subset.name, subset.len());
        if let Some(parent) = &subset.parent {
            info!("   └─ child of '{parent}'");
        }
        Ok(subset)
    }

    /// Filter the rows of an existing subset and register the result as its
    /// child. Principal is never modified.
    ///
    /// Filtering from `principal` itself creates a parentless subset.
    pub fn create_subset_from_subset(
        &mut self,
        source_name: &str,
        query: &KeywordQuery,
        name: &str,
    ) -> Result<&Subset> {
        let parent = match Alias::parse(source_name) {
            Some(Alias::Principal) => None,
            _ => Some(self.store.get(source_name)?.name.clone()),
        };
        self.create_filtered_subset(Source::Named(source_name), query, name, parent.as_deref())
    }

    // -- Deletion and undo --

    /// Remove the subset's rows from principal and, if `propagate_to_parent`
    /// is set, from its parent subset (one level only).
    ///
    /// An empty subset is a no-op that records no history. Emptiness is
    /// judged on the subset's own rows: re-applying a subset whose rows are
    /// already gone from principal still pushes a snapshot.
    pub fn apply_deletion(&mut self, subset_name: &str, propagate_to_parent: bool) -> Result<DeletionOutcome> {
        let key = self.config.key_column.as_str();
        let subset = self.store.get(subset_name)?;
        let name = subset.name.clone();

        if subset.is_empty() {
            warn!("subset '{name}' is empty; nothing deleted");
            return Ok(DeletionOutcome::EmptySubset { subset: name });
        }

        let before = self.store.principal().len();
        let principal = self.diff.diff(self.store.principal(), &subset.rows, key);

        let cascade = match (&subset.parent, propagate_to_parent) {
            (Some(parent), true) => self
                .store
                .get(parent)
                .ok()
                .map(|p| (p.name.clone(), p.len(), self.diff.diff(&p.rows, &subset.rows, key))),
            _ => None,
        };

        self.history.push(self.store.principal().clone());
        self.store.set_principal(principal);
        let remaining = self.store.principal().len();
        info!(
            "removed {} rows from principal; {remaining} rows remain",
            before - remaining
        );

        let parent = match cascade {
            Some((parent, parent_before, rows)) => {
                let cascade = ParentCascade {
                    removed: parent_before - rows.len(),
                    remaining: rows.len(),
                    parent,
                };
                self.store.get_mut(&cascade.parent)?.rows = rows;
                if cascade.removed > 0 {
                    info!(
                        "removed {} rows from parent subset '{}'; {} rows remain",
                        cascade.removed, cascade.parent, cascade.remaining
                    );
                } else {
                    debug!("parent subset '{}' already had none of these rows", cascade.parent);
                }
                Some(cascade)
            }
            None => None,
        };

        self.store.get_mut(&name)?.applied = true;

        Ok(DeletionOutcome::Applied(DeletionReport {
            subset: name,
            removed_from_principal: before - remaining,
            principal_remaining: remaining,
            parent,
        }))
    }

    /// Restore principal to its state before the last applied deletion.
    ///
    /// Only principal is restored. Rows a cascade removed from a parent
    /// subset stay removed, and the subset stays marked as applied.
    pub fn undo_last_deletion(&mut self) -> UndoOutcome {
        match self.history.pop() {
            Some(snapshot) => {
                let rows = snapshot.len();
                self.store.set_principal(snapshot);
                info!("restored previous state; principal now has {rows} rows");
                UndoOutcome::Restored { rows }
            }
            None => {
                warn!("no operations to undo");
                UndoOutcome::NothingToUndo
            }
        }
    }

    /// Back to the dataset as loaded: principal restored, every subset
    /// dropped, history cleared.
    pub fn reset_all(&mut self) {
        self.store.reset();
        self.history.clear();
        info!(
            "principal restored to original ({} rows); history and subsets cleared",
            self.store.principal().len()
        );
    }

    // -- Metadata --

    /// Append words the frequency ranking should skip for `subset_name`.
    /// Both aliases are accepted.
    pub fn add_excluded_words<I, S>(&mut self, subset_name: &str, words: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let excluded = self.store.excluded_words_mut(subset_name)?;
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        info!("excluded words added to '{subset_name}': {words:?}");
        excluded.extend(words);
        Ok(())
    }

    /// Most frequent words in the configured text column of `subset_name`,
    /// skipping the subset's excluded words and `extra_excluded`.
    pub fn top_words(
        &self,
        subset_name: &str,
        top_n: Option<usize>,
        extra_excluded: &[String],
    ) -> Result<Vec<(String, usize)>> {
        self.top_words_with(&WordCounter::default(), subset_name, top_n, extra_excluded)
    }

    pub fn top_words_with<W: WordFrequency>(
        &self,
        counter: &W,
        subset_name: &str,
        top_n: Option<usize>,
        extra_excluded: &[String],
    ) -> Result<Vec<(String, usize)>> {
        let rows = self.store.rows(subset_name)?;
        let mut excluded = self.store.excluded_words(subset_name)?.to_vec();
        excluded.extend_from_slice(extra_excluded);
        let top_n = top_n.unwrap_or(self.config.default_top_n);
        let ranked = counter.top(rows, &self.config.text_column, top_n, &excluded)?;
        debug!("top {top_n} words in '{subset_name}': {ranked:?}");
        Ok(ranked)
    }

    // -- Accessors --

    /// Copy of the current working table.
    pub fn principal(&self) -> Table {
        self.store.principal().clone()
    }

    /// The dataset as it was at construction.
    pub fn original(&self) -> &Table {
        self.store.original()
    }

    /// Copy of the rows behind `name`; both aliases are accepted.
    pub fn subset(&self, name: &str) -> Result<Table> {
        self.store.rows(name).cloned()
    }

    pub fn get(&self, name: &str) -> Result<&Subset> {
        self.store.get(name)
    }

    pub fn list_subsets(&self) -> Vec<SubsetSummary> {
        self.store.list()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}
