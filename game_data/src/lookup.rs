//! Lookup tables: one table's ids mapped to a single display value.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{DataError, Result};
use crate::tables::{Row, TableSchema, TableSource};

/// Inclusive upper bound on the ids of a table.
///
/// Source tables append synthetic entries after the canonical ones. Scans
/// stop at the first row whose id exceeds the bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdBound(pub i64);

impl IdBound {
    /// Check whether `id` is within the bound.
    pub fn admits(&self, id: i64) -> bool {
        id <= self.0
    }
}

/// Stop scanning once a row's id exceeds `bound`.
pub(crate) fn past_bound(row: &Row, bound: Option<IdBound>) -> Result<bool> {
    match bound {
        Some(bound) => Ok(!bound.admits(row.integer(row.schema().id_label())?)),
        None => Ok(false),
    }
}

/// Immutable mapping from a table's id to one of its fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTable {
    table: &'static str,
    entries: HashMap<String, String>,
}

impl LookupTable {
    /// Name of the table this lookup was built from.
    pub fn table(&self) -> &'static str {
        self.table
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    /// Resolve the foreign key stored in `field` of `row`.
    ///
    /// A key with no entry is a dangling reference.
    pub fn resolve<'s>(&'s self, row: &Row, field: &str) -> Result<&'s str> {
        let id = row.text(field)?;
        self.get(id).ok_or_else(|| DataError::DanglingReference {
            table: row.table(),
            field: row.schema().position(field).map(|(_, f)| f.label).unwrap_or_default(),
            id: id.to_string(),
            target: self.table,
            line: row.line(),
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Equality filter on an integer column, e.g. a prose table's language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RowFilter {
    field: &'static str,
    value: i64,
}

/// Builds a [`LookupTable`] from one scan of a table.
#[derive(Debug, Clone)]
pub struct LookupBuilder {
    schema: &'static TableSchema,
    value_field: &'static str,
    bound: Option<IdBound>,
    filter: Option<RowFilter>,
}

impl LookupBuilder {
    /// Map the id column of `schema` to `value_field`.
    pub fn new(schema: &'static TableSchema, value_field: &'static str) -> Self {
        Self {
            schema,
            value_field,
            bound: None,
            filter: None,
        }
    }

    /// Stop at the first row whose id exceeds `bound`.
    pub fn bounded(mut self, bound: Option<IdBound>) -> Self {
        self.bound = bound;
        self
    }

    /// Keep only rows whose `field` equals `value`; `None` keeps every row.
    pub fn only_where(mut self, field: &'static str, value: Option<i64>) -> Self {
        self.filter = value.map(|value| RowFilter { field, value });
        self
    }

    pub fn build(&self, source: &dyn TableSource) -> Result<LookupTable> {
        self.schema.require(&[self.value_field])?;
        if let Some(filter) = self.filter {
            self.schema.require(&[filter.field])?;
        }

        let mut entries = HashMap::new();
        for row in source.open(self.schema)?.rows() {
            let row = row?;
            if past_bound(&row, self.bound)? {
                break;
            }
            if let Some(filter) = self.filter {
                if row.integer::<i64>(filter.field)? != filter.value {
                    continue;
                }
            }

            let value = row.text(self.value_field)?.to_string();
            if entries.insert(row.id().to_string(), value).is_some() {
                return Err(DataError::DuplicateId {
                    table: self.schema.name,
                    id: row.id().to_string(),
                    line: row.line(),
                });
            }
        }

        tracing::debug!(
            "Built lookup {}.{} with {} entries",
            self.schema.name,
            self.value_field,
            entries.len()
        );

        Ok(LookupTable {
            table: self.schema.name,
            entries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{catalog, InMemoryTables};

    fn types() -> InMemoryTables {
        InMemoryTables::new().with_table(
            "types",
            "id,identifier,generation_id,damage_class_id\n\
             1,normal,1,2\n\
             2,fighting,1,2\n\
             10,fire,1,3\n\
             10001,unknown,2,\n",
        )
    }

    #[test]
    fn test_lookup_has_one_entry_per_id() {
        let lookup = LookupBuilder::new(&catalog::TYPES, "identifier")
            .build(&types())
            .unwrap();

        assert_eq!(lookup.len(), 4);
        assert_eq!(lookup.get("1"), Some("normal"));
        assert_eq!(lookup.get("10"), Some("fire"));
        assert_eq!(lookup.get("3"), None);
        assert_eq!(lookup.table(), "types");
    }

    #[test]
    fn test_bound_stops_scan() {
        let lookup = LookupBuilder::new(&catalog::TYPES, "identifier")
            .bounded(Some(IdBound(10)))
            .build(&types())
            .unwrap();

        assert_eq!(lookup.len(), 3);
        assert_eq!(lookup.get("10001"), None);
    }

    #[test]
    fn test_unknown_value_field_is_configuration_error() {
        let err = LookupBuilder::new(&catalog::TYPES, "name")
            .build(&InMemoryTables::new())
            .unwrap_err();
        assert!(matches!(err, DataError::UnknownField { table: "types", .. }));
    }

    #[test]
    fn test_language_filter() {
        let source = InMemoryTables::new().with_table(
            "move_effect_prose",
            "move_effect_id,local_language_id,short_effect,effect\n\
             1,5,Inflige des dégâts.,x\n\
             1,9,Inflicts regular damage.,x\n",
        );

        let lookup = LookupBuilder::new(&catalog::MOVE_EFFECT_PROSE, "short_effect")
            .only_where("local_language_id", Some(9))
            .build(&source)
            .unwrap();
        assert_eq!(lookup.get("1"), Some("Inflicts regular damage."));

        let err = LookupBuilder::new(&catalog::MOVE_EFFECT_PROSE, "short_effect")
            .only_where("local_language_id", None)
            .build(&source)
            .unwrap_err();
        assert!(matches!(err, DataError::DuplicateId { line: 3, .. }));
    }

    #[test]
    fn test_resolve_reports_dangling_reference() {
        let lookup = LookupBuilder::new(&catalog::TYPES, "identifier")
            .build(&types())
            .unwrap();
        let pokemon_types = InMemoryTables::new().with_table(
            "pokemon_types",
            "pokemon_id,type_id,slot\n1,10,1\n1,18,2\n",
        );
        let rows: Vec<_> = pokemon_types
            .open(&catalog::POKEMON_TYPES)
            .unwrap()
            .rows()
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(lookup.resolve(&rows[0], "type_id").unwrap(), "fire");
        let err = lookup.resolve(&rows[1], "type_id").unwrap_err();
        assert!(matches!(
            err,
            DataError::DanglingReference {
                table: "pokemon_types",
                field: "type_id",
                target: "types",
                line: 3,
                ..
            }
        ));
    }
}
