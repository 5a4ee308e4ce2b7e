//! Positional table schemas.

use crate::error::{DataError, Result};

/// How the text of a column must be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Numeric identifier; never blank.
    Id,
    /// Integer value; never blank.
    Integer,
    /// Integer value that may be blank in the source.
    OptionalInteger,
    /// Free text.
    Text,
}

impl FieldKind {
    /// Check that a raw column value is acceptable for this kind.
    pub fn accepts(&self, raw: &str) -> bool {
        match self {
            FieldKind::Id | FieldKind::Integer => raw.parse::<i64>().is_ok(),
            FieldKind::OptionalInteger => raw.is_empty() || raw.parse::<i64>().is_ok(),
            FieldKind::Text => true,
        }
    }
}

/// A single column definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FieldDef {
    pub const fn id(label: &'static str) -> Self {
        Self {
            label,
            kind: FieldKind::Id,
        }
    }

    pub const fn integer(label: &'static str) -> Self {
        Self {
            label,
            kind: FieldKind::Integer,
        }
    }

    pub const fn optional_integer(label: &'static str) -> Self {
        Self {
            label,
            kind: FieldKind::OptionalInteger,
        }
    }

    pub const fn text(label: &'static str) -> Self {
        Self {
            label,
            kind: FieldKind::Text,
        }
    }
}

/// Ordered column layout of one source table.
///
/// Columns are matched to the file by position; the header row is only used to
/// check that the file has as many columns as the schema declares. The first
/// field is the row id.
#[derive(Debug, PartialEq, Eq)]
pub struct TableSchema {
    pub name: &'static str,
    pub fields: &'static [FieldDef],
}

impl TableSchema {
    pub const fn new(name: &'static str, fields: &'static [FieldDef]) -> Self {
        Self { name, fields }
    }

    /// File name of this table inside a data directory.
    pub fn file_name(&self) -> String {
        format!("{}.csv", self.name)
    }

    pub fn column_count(&self) -> usize {
        self.fields.len()
    }

    /// Label of the id column.
    pub fn id_label(&self) -> &'static str {
        self.fields.first().map(|f| f.label).unwrap_or_default()
    }

    /// Find the position and definition of a field by label.
    pub fn position(&self, label: &str) -> Result<(usize, &'static FieldDef)> {
        self.fields
            .iter()
            .enumerate()
            .find(|(_, f)| f.label == label)
            .ok_or_else(|| DataError::UnknownField {
                table: self.name,
                field: label.to_string(),
            })
    }

    /// Fail unless every label is declared by this schema.
    pub fn require(&self, labels: &[&str]) -> Result<()> {
        for label in labels {
            self.position(label)?;
        }
        Ok(())
    }
}
