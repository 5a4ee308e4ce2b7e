//! Sequential scans over one headered CSV table.

use std::io::Read;
use std::str::FromStr;

use csv::{StringRecord, StringRecordsIntoIter};

use super::TableSchema;
use crate::error::{DataError, Result};

/// An open table, positioned after its header row.
pub struct Table {
    schema: &'static TableSchema,
    records: StringRecordsIntoIter<Box<dyn Read>>,
}

impl Table {
    /// Open a table from any reader.
    ///
    /// The header row is consumed here and its column count checked against
    /// the schema, so a mismatched schema fails before any data row is read.
    pub fn from_reader(schema: &'static TableSchema, reader: impl Read + 'static) -> Result<Self> {
        let reader: Box<dyn Read> = Box::new(reader);
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let header_len = csv_reader
            .headers()
            .map_err(|source| DataError::Csv {
                table: schema.name,
                source,
            })?
            .len();

        if header_len != schema.column_count() {
            return Err(DataError::ColumnCount {
                table: schema.name,
                expected: schema.column_count(),
                found: header_len,
                line: 1,
            });
        }

        Ok(Self {
            schema,
            records: csv_reader.into_records(),
        })
    }

    pub fn schema(&self) -> &'static TableSchema {
        self.schema
    }

    /// Consume the table, yielding validated rows in file order.
    pub fn rows(self) -> Rows {
        Rows {
            schema: self.schema,
            records: self.records,
        }
    }
}

/// Iterator over the data rows of a [`Table`].
pub struct Rows {
    schema: &'static TableSchema,
    records: StringRecordsIntoIter<Box<dyn Read>>,
}

impl Rows {
    fn validate(&self, record: StringRecord) -> Result<Row> {
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        if record.len() != self.schema.column_count() {
            return Err(DataError::ColumnCount {
                table: self.schema.name,
                expected: self.schema.column_count(),
                found: record.len(),
                line,
            });
        }

        for (field, raw) in self.schema.fields.iter().zip(record.iter()) {
            if !field.kind.accepts(raw) {
                return Err(DataError::InvalidInteger {
                    table: self.schema.name,
                    field: field.label,
                    value: raw.to_string(),
                    line,
                });
            }
        }

        Ok(Row {
            schema: self.schema,
            record,
            line,
        })
    }
}

impl Iterator for Rows {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.records.next()?;
        Some(
            record
                .map_err(|source| DataError::Csv {
                    table: self.schema.name,
                    source,
                })
                .and_then(|record| self.validate(record)),
        )
    }
}

/// One data row whose column count and field kinds match its schema.
#[derive(Debug, Clone)]
pub struct Row {
    schema: &'static TableSchema,
    record: StringRecord,
    line: u64,
}

impl Row {
    /// Name of the table this row came from.
    pub fn table(&self) -> &'static str {
        self.schema.name
    }

    pub fn schema(&self) -> &'static TableSchema {
        self.schema
    }

    /// Line number in the source file.
    pub fn line(&self) -> u64 {
        self.line
    }

    /// Raw text of the id column.
    pub fn id(&self) -> &str {
        self.record.get(0).unwrap_or_default()
    }

    /// Raw text of a field.
    pub fn text(&self, field: &str) -> Result<&str> {
        let (index, _) = self.schema.position(field)?;
        Ok(self.record.get(index).unwrap_or_default())
    }

    /// Parse a field that must hold an integer.
    pub fn integer<T: FromStr>(&self, field: &str) -> Result<T> {
        let (index, def) = self.schema.position(field)?;
        let raw = self.record.get(index).unwrap_or_default();
        raw.parse().map_err(|_| DataError::InvalidInteger {
            table: self.schema.name,
            field: def.label,
            value: raw.to_string(),
            line: self.line,
        })
    }

    /// Parse a field that holds an integer or is blank.
    pub fn optional_integer<T: FromStr>(&self, field: &str) -> Result<Option<T>> {
        if self.text(field)?.is_empty() {
            return Ok(None);
        }
        self.integer(field).map(Some)
    }
}
