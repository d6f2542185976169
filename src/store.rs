use crate::data::model::Table;
use crate::error::{Result, SubsetError};

/// Name of the alias for the live working table.
pub const PRINCIPAL: &str = "principal";
/// Name of the alias for the most recently created subset.
pub const LATEST: &str = "ultimo";

// ---------------------------------------------------------------------------
// Aliases
// ---------------------------------------------------------------------------

/// The two reserved names. They live outside the subset namespace and
/// resolve to another entry's current value instead of owning data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alias {
    Principal,
    Latest,
}

impl Alias {
    pub fn parse(name: &str) -> Option<Alias> {
        match name {
            PRINCIPAL => Some(Alias::Principal),
            LATEST => Some(Alias::Latest),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Subset
// ---------------------------------------------------------------------------

/// A named row collection derived by filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct Subset {
    pub name: String,
    pub rows: Table,
    /// Back-reference to the subset this one was filtered from. Used only to
    /// route cascading deletions; it does not own anything.
    pub parent: Option<String>,
    /// Set once the subset's rows have been removed from principal.
    pub applied: bool,
    /// Words the frequency analysis should skip for this subset.
    pub excluded_words: Vec<String>,
}

impl Subset {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One line of [`SubsetStore::list`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubsetSummary {
    pub name: String,
    pub rows: usize,
    pub parent: Option<String>,
    pub applied: bool,
}

// ---------------------------------------------------------------------------
// SubsetStore
// ---------------------------------------------------------------------------

/// Registry of named subsets plus the principal table they were cut from.
#[derive(Debug, Clone)]
pub struct SubsetStore {
    /// Snapshot taken at construction, restored by [`SubsetStore::reset`].
    original: Table,
    /// The live working table (the `principal` alias).
    principal: Table,
    /// User subsets, in creation order.
    subsets: Vec<Subset>,
    /// Target of the `ultimo` alias.
    latest: Option<String>,
    /// Excluded words attached to the `principal` alias.
    principal_excluded: Vec<String>,
}

impl SubsetStore {
    pub fn new(dataset: Table) -> Self {
        SubsetStore {
            principal: dataset.clone(),
            original: dataset,
            subsets: Vec::new(),
            latest: None,
            principal_excluded: Vec::new(),
        }
    }

    /// Register a new subset and point the `ultimo` alias at it.
    ///
    /// Fails with `DuplicateName` if `name` is taken (the reserved aliases
    /// are always taken) and with `NotFound` if `parent` names no subset.
    /// A `parent` given as `ultimo` is stored as the subset it resolves to.
    pub fn create(&mut self, name: &str, rows: Table, parent: Option<&str>) -> Result<&Subset> {
        self.ensure_available(name)?;
        let parent = parent
            .map(|p| self.get(p).map(|s| s.name.clone()))
            .transpose()?;

        self.subsets.push(Subset {
            name: name.to_string(),
            rows,
            parent,
            applied: false,
            excluded_words: Vec::new(),
        });
        self.latest = Some(name.to_string());
        Ok(&self.subsets[self.subsets.len() - 1])
    }

    /// Fails with `DuplicateName` unless `name` is free for a new subset.
    pub fn ensure_available(&self, name: &str) -> Result<()> {
        if Alias::parse(name).is_some() || self.position(name).is_some() {
            return Err(SubsetError::DuplicateName(name.to_string()));
        }
        Ok(())
    }

    /// Look up a subset by name. `ultimo` resolves to the latest subset;
    /// `principal` is a table, not a subset, and is reported as not found.
    pub fn get(&self, name: &str) -> Result<&Subset> {
        let idx = self.resolve(name)?;
        Ok(&self.subsets[idx])
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut Subset> {
        let idx = self.resolve(name)?;
        Ok(&mut self.subsets[idx])
    }

    /// Rows behind any name, aliases included.
    pub fn rows(&self, name: &str) -> Result<&Table> {
        match Alias::parse(name) {
            Some(Alias::Principal) => Ok(&self.principal),
            _ => self.get(name).map(|s| &s.rows),
        }
    }

    /// Excluded words behind any name, aliases included.
    pub fn excluded_words(&self, name: &str) -> Result<&[String]> {
        match Alias::parse(name) {
            Some(Alias::Principal) => Ok(self.principal_excluded.as_slice()),
            _ => self.get(name).map(|s| s.excluded_words.as_slice()),
        }
    }

    pub fn excluded_words_mut(&mut self, name: &str) -> Result<&mut Vec<String>> {
        match Alias::parse(name) {
            Some(Alias::Principal) => Ok(&mut self.principal_excluded),
            _ => self.get_mut(name).map(|s| &mut s.excluded_words),
        }
    }

    /// The subset the `ultimo` alias points at, if any subset exists.
    pub fn latest(&self) -> Option<&Subset> {
        self.latest.as_deref().and_then(|n| self.get(n).ok())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_ok()
    }

    pub fn principal(&self) -> &Table {
        &self.principal
    }

    pub fn original(&self) -> &Table {
        &self.original
    }

    /// Replace the working table; the `principal` alias follows it.
    pub fn set_principal(&mut self, rows: Table) {
        self.principal = rows;
    }

    /// Drop every subset and alias target and restore principal to the
    /// construction snapshot.
    pub fn reset(&mut self) {
        self.subsets.clear();
        self.latest = None;
        self.principal_excluded.clear();
        self.principal = self.original.clone();
    }

    /// Number of user subsets (aliases excluded).
    pub fn subset_count(&self) -> usize {
        self.subsets.len()
    }

    /// `principal` first, then every subset in creation order. The `ultimo`
    /// alias is not listed.
    pub fn list(&self) -> Vec<SubsetSummary> {
        let principal = SubsetSummary {
            name: PRINCIPAL.to_string(),
            rows: self.principal.len(),
            parent: None,
            applied: false,
        };
        std::iter::once(principal)
            .chain(self.subsets.iter().map(|s| SubsetSummary {
                name: s.name.clone(),
                rows: s.len(),
                parent: s.parent.clone(),
                applied: s.applied,
            }))
            .collect()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.subsets.iter().position(|s| s.name == name)
    }

    fn resolve(&self, name: &str) -> Result<usize> {
        let target = match Alias::parse(name) {
            Some(Alias::Latest) => self.latest.as_deref(),
            Some(Alias::Principal) => None,
            None => Some(name),
        };
        target
            .and_then(|n| self.position(n))
            .ok_or_else(|| SubsetError::NotFound(name.to_string()))
    }
}
