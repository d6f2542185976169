/// Data layer: core types, loading, and the row-level collaborators the
/// hierarchy engine is built on.
///
/// Architecture:
/// ```text
///  .parquet / .json / .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Table
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Table    │  Vec<Row>, column list
///   └──────────┘
///        │
///        ├──▶ filter  keyword predicates → matching rows
///        ├──▶ diff    key-set difference → surviving rows
///        └──▶ words   word frequency of a text column
/// ```
pub mod diff;
pub mod filter;
pub mod loader;
pub mod model;
pub mod words;
