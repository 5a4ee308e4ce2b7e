//! Where tables come from.

use std::collections::HashMap;
use std::fs::File;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use super::{Table, TableSchema};
use crate::error::{DataError, Result};

/// Opens source tables by schema.
pub trait TableSource {
    /// Open the table described by `schema`, positioned after its header.
    fn open(&self, schema: &'static TableSchema) -> Result<Table>;
}

/// A directory holding one `<table>.csv` file per table.
#[derive(Debug, Clone)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing `schema`.
    pub fn table_path(&self, schema: &TableSchema) -> PathBuf {
        self.root.join(schema.file_name())
    }
}

impl TableSource for DataDir {
    fn open(&self, schema: &'static TableSchema) -> Result<Table> {
        let path = self.table_path(schema);
        let file = File::open(&path).map_err(|source| DataError::OpenTable {
            table: schema.name,
            path: path.clone(),
            source,
        })?;
        tracing::debug!("Opened table {} from {}", schema.name, path.display());
        Table::from_reader(schema, file)
    }
}

/// Tables held in memory, keyed by table name.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTables {
    tables: HashMap<String, String>,
}

impl InMemoryTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the CSV text (header included) of a table.
    pub fn with_table(mut self, name: impl Into<String>, contents: impl Into<String>) -> Self {
        self.insert(name, contents);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, contents: impl Into<String>) {
        self.tables.insert(name.into(), contents.into());
    }
}

impl TableSource for InMemoryTables {
    fn open(&self, schema: &'static TableSchema) -> Result<Table> {
        let contents = self
            .tables
            .get(schema.name)
            .ok_or(DataError::MissingTable { table: schema.name })?;
        Table::from_reader(schema, Cursor::new(contents.clone().into_bytes()))
    }
}
