//! Fan-out aggregation over junction tables.
//!
//! A junction table associates an owner id with zero or more child ids. The
//! aggregators resolve every child through a [`LookupTable`] and group the
//! results by owner, in scan order.

use std::collections::{BTreeMap, HashMap};

use crate::error::Result;
use crate::lookup::{IdBound, LookupTable};
use crate::tables::{TableSchema, TableSource};

/// Owner id mapped to the resolved display values of its children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FanOutMapping {
    entries: HashMap<String, Vec<String>>,
}

impl FanOutMapping {
    /// Children of `owner`; an owner without junction rows has none.
    pub fn children(&self, owner: &str) -> &[String] {
        self.entries.get(owner).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn owners(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of distinct owners.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of resolved values across all owners.
    pub fn total_children(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}

/// Groups a junction table's children by owner.
#[derive(Debug, Clone, Copy)]
pub struct FanOutAggregator {
    pub schema: &'static TableSchema,
    pub owner_field: &'static str,
    pub child_field: &'static str,
    /// Children past this id are excluded from the mapping.
    pub child_bound: Option<IdBound>,
}

impl FanOutAggregator {
    pub fn new(
        schema: &'static TableSchema,
        owner_field: &'static str,
        child_field: &'static str,
    ) -> Self {
        Self {
            schema,
            owner_field,
            child_field,
            child_bound: None,
        }
    }

    /// Skip junction rows whose child id exceeds `bound`.
    ///
    /// Pairs with a lookup bounded the same way, so children the lookup
    /// excluded are dropped instead of reported as dangling.
    pub fn skip_children_past(mut self, bound: Option<IdBound>) -> Self {
        self.child_bound = bound;
        self
    }

    /// Scan the junction table, resolving each child through `children`.
    ///
    /// A child id missing from `children` aborts the scan.
    pub fn aggregate(
        &self,
        source: &dyn TableSource,
        children: &LookupTable,
    ) -> Result<FanOutMapping> {
        self.schema.require(&[self.owner_field, self.child_field])?;

        let mut entries: HashMap<String, Vec<String>> = HashMap::new();
        let mut skipped = 0;
        for row in source.open(self.schema)?.rows() {
            let row = row?;
            if let Some(bound) = self.child_bound {
                if !bound.admits(row.integer(self.child_field)?) {
                    skipped += 1;
                    continue;
                }
            }
            let child = children.resolve(&row, self.child_field)?;
            entries
                .entry(row.text(self.owner_field)?.to_string())
                .or_default()
                .push(child.to_string());
        }

        tracing::debug!(
            "Aggregated {}.{} for {} owners ({} rows past bound skipped)",
            self.schema.name,
            self.child_field,
            entries.len(),
            skipped
        );

        Ok(FanOutMapping { entries })
    }
}

/// Owner id mapped to named integer values, e.g. a creature's base stats.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyedMapping {
    entries: HashMap<String, BTreeMap<String, i64>>,
}

impl KeyedMapping {
    /// Values of `owner`, cloned; an owner without junction rows has none.
    pub fn values(&self, owner: &str) -> BTreeMap<String, i64> {
        self.entries.get(owner).cloned().unwrap_or_default()
    }

    pub fn owners(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Fan-out whose children are keyed by a resolved name instead of appended.
#[derive(Debug, Clone, Copy)]
pub struct KeyedAggregator {
    pub schema: &'static TableSchema,
    pub owner_field: &'static str,
    pub key_field: &'static str,
    pub value_field: &'static str,
}

impl KeyedAggregator {
    pub fn new(
        schema: &'static TableSchema,
        owner_field: &'static str,
        key_field: &'static str,
        value_field: &'static str,
    ) -> Self {
        Self {
            schema,
            owner_field,
            key_field,
            value_field,
        }
    }

    /// Scan the junction table, naming each value through `keys`.
    ///
    /// A repeated (owner, key) pair keeps the later value.
    pub fn aggregate(&self, source: &dyn TableSource, keys: &LookupTable) -> Result<KeyedMapping> {
        self.schema
            .require(&[self.owner_field, self.key_field, self.value_field])?;

        let mut entries: HashMap<String, BTreeMap<String, i64>> = HashMap::new();
        for row in source.open(self.schema)?.rows() {
            let row = row?;
            let key = keys.resolve(&row, self.key_field)?;
            let value = row.integer(self.value_field)?;
            let owner = row.text(self.owner_field)?;

            let previous = entries
                .entry(owner.to_string())
                .or_default()
                .insert(key.to_string(), value);
            if let Some(previous) = previous {
                tracing::warn!(
                    "{} line {}: {} `{}` of owner {} overrides earlier value {}",
                    self.schema.name,
                    row.line(),
                    self.key_field,
                    key,
                    owner,
                    previous
                );
            }
        }

        tracing::debug!(
            "Aggregated {}.{} for {} owners",
            self.schema.name,
            self.value_field,
            entries.len()
        );

        Ok(KeyedMapping { entries })
    }
}
