//! Keyword-filtered subset hierarchy over a single tabular dataset.
//!
//! Subsets are cut from the working ("principal") table, or from each other,
//! with keyword filters. Applying a subset deletes its rows from principal and
//! optionally from its parent subset; the last deletion can be undone and the
//! whole session reset to the dataset as loaded.
//!
//! ```text
//!  loader ──▶ Table ──▶ HierarchyEngine
//!                         ├── SubsetStore   named subsets, aliases, principal
//!                         ├── HistoryStack  principal snapshots for undo
//!                         ├── RowFilter     keyword selection
//!                         └── KeySetDiff    key-based row removal
//! ```

pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod history;
pub mod store;

pub use config::EngineConfig;
pub use data::diff::{KeyDiff, KeySetDiff};
pub use data::filter::{KeywordMatcher, KeywordQuery, MatchMode, RowFilter};
pub use data::model::{row, CellValue, Row, Table};
pub use data::words::{WordCounter, WordFrequency};
pub use engine::{DeletionOutcome, DeletionReport, HierarchyEngine, ParentCascade, Source, UndoOutcome};
pub use error::{Result, SubsetError};
pub use history::HistoryStack;
pub use store::{Alias, Subset, SubsetStore, SubsetSummary, LATEST, PRINCIPAL};
