//! Shared datasets and helpers.

use rusty_subsets::{row, CellValue, EngineConfig, HierarchyEngine, KeywordQuery, Table};

/// Route `log` output through the test harness; `RUST_LOG=debug` to see it.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Ten rows keyed `id 1..=10`. Rows 1, 3, 5 mention "x"; of those only 3
/// also mentions "y".
pub fn ten_rows() -> Table {
    let texts = [
        "x alpha", "beta", "x y gamma", "delta", "x epsilon", "zeta", "eta y", "theta", "iota",
        "kappa",
    ];
    Table::from_rows(
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| {
                row([
                    ("id", CellValue::from(i as i64 + 1)),
                    ("descripcion", CellValue::from(*t)),
                ])
            })
            .collect(),
    )
}

pub fn engine(dataset: Table) -> HierarchyEngine {
    init_logging();
    HierarchyEngine::new(dataset, EngineConfig::default()).expect("fixture has an id column")
}

pub fn query(words: &[&str]) -> KeywordQuery {
    KeywordQuery::new("descripcion", words.iter().copied())
}

/// The `id` column as plain integers, in row order.
pub fn ids(table: &Table) -> Vec<i64> {
    table
        .column_values("id")
        .map(|v| match v {
            CellValue::Integer(i) => *i,
            other => panic!("non-integer id {other:?}"),
        })
        .collect()
}
