use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single cell in a table column
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring common Pandas dtypes.
/// Key columns are matched through `BTreeSet`, so `CellValue` must be `Ord`.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    /// ISO-8601 date string kept as text for simplicity.
    Date(String),
    Null,
}

// -- Manual Eq/Ord so we can put CellValue in BTreeSet --

impl Eq for CellValue {}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellValue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use CellValue::*;
        fn discriminant(v: &CellValue) -> u8 {
            match v {
                Null => 0,
                Bool(_) => 1,
                Integer(_) => 2,
                Float(_) => 3,
                String(_) => 4,
                Date(_) => 5,
            }
        }
        let da = discriminant(self);
        let db = discriminant(other);
        if da != db {
            return da.cmp(&db);
        }
        match (self, other) {
            (Null, Null) => std::cmp::Ordering::Equal,
            (Bool(a), Bool(b)) => a.cmp(b),
            (Integer(a), Integer(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (String(a), String(b)) | (Date(a), Date(b)) => a.cmp(b),
            _ => std::cmp::Ordering::Equal,
        }
    }
}

impl std::hash::Hash for CellValue {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            CellValue::String(s) | CellValue::Date(s) => s.hash(state),
            CellValue::Integer(i) => i.hash(state),
            CellValue::Float(f) => f.to_bits().hash(state),
            CellValue::Bool(b) => b.hash(state),
            CellValue::Null => {}
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v:.4}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Date(d) => write!(f, "{d}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Integer(i)
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Float(v)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl CellValue {
    /// Textual form used for keyword matching. `Null` has none.
    ///
    /// Unlike `Display`, floats keep their full precision here so a keyword
    /// like `"2.5"` matches the cell `2.5`.
    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::String(s) | CellValue::Date(s) => Some(s.clone()),
            CellValue::Integer(i) => Some(i.to_string()),
            CellValue::Float(v) => Some(v.to_string()),
            CellValue::Bool(b) => Some(b.to_string()),
            CellValue::Null => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

// ---------------------------------------------------------------------------
// Row – one row of the DataFrame
// ---------------------------------------------------------------------------

static NULL: CellValue = CellValue::Null;

/// Dynamic columns of a single row: column_name → value.
pub type Row = BTreeMap<String, CellValue>;

/// Build a [`Row`] from `(column, value)` pairs.
pub fn row<K, V, I>(cells: I) -> Row
where
    K: Into<String>,
    V: Into<CellValue>,
    I: IntoIterator<Item = (K, V)>,
{
    cells
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

// ---------------------------------------------------------------------------
// Table – an ordered collection of rows with a fixed column list
// ---------------------------------------------------------------------------

/// An ordered row collection.
///
/// The column list is stored explicitly so that a table filtered down to
/// zero rows still knows its schema. Cloning a `Table` copies every row;
/// snapshots never share state with the table they were taken from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    /// All rows, in source order.
    pub rows: Vec<Row>,
    /// Ordered list of column names.
    pub column_names: Vec<String>,
}

impl Table {
    pub fn new(column_names: Vec<String>, rows: Vec<Row>) -> Self {
        Table { rows, column_names }
    }

    /// Build a table whose columns are the sorted union of every row's keys.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let column_names: BTreeSet<String> = rows
            .iter()
            .flat_map(|r| r.keys().cloned())
            .collect();
        Table {
            rows,
            column_names: column_names.into_iter().collect(),
        }
    }

    /// An empty table sharing this table's schema.
    pub fn empty_like(&self) -> Self {
        Table {
            rows: Vec::new(),
            column_names: self.column_names.clone(),
        }
    }

    /// Same schema, different rows.
    pub fn with_rows(&self, rows: Vec<Row>) -> Self {
        Table {
            rows,
            column_names: self.column_names.clone(),
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.column_names.iter().any(|c| c == column)
    }

    /// Values of `column` in row order; missing cells read as `Null`.
    pub fn column_values<'a>(&'a self, column: &'a str) -> impl Iterator<Item = &'a CellValue> {
        self.rows
            .iter()
            .map(move |r| r.get(column).unwrap_or(&NULL))
    }

    /// Set of non-null values found in `key_column`.
    pub fn keys(&self, key_column: &str) -> BTreeSet<&CellValue> {
        self.rows
            .iter()
            .filter_map(|r| r.get(key_column))
            .filter(|v| !v.is_null())
            .collect()
    }
}
