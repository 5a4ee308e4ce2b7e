//! Error types raised while reading tables and assembling documents.

use std::path::PathBuf;

use thiserror::Error;

/// Broad classes of failure, used to decide how a run reports a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A schema disagrees with the structure of a table or config file.
    Configuration,
    /// A foreign key has no entry in the table it should resolve against.
    DanglingReference,
    /// A table could not be read or holds a value of the wrong shape.
    Source,
    /// A document collection could not be written.
    Output,
}

/// Errors surfaced by the table pipeline.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to open table {table} at {}: {source}", path.display())]
    OpenTable {
        table: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("table {table} is not registered with this source")]
    MissingTable { table: &'static str },

    #[error("malformed CSV in table {table}: {source}")]
    Csv {
        table: &'static str,
        #[source]
        source: csv::Error,
    },

    #[error("table {table} declares {expected} columns but line {line} has {found}")]
    ColumnCount {
        table: &'static str,
        expected: usize,
        found: usize,
        line: u64,
    },

    #[error("field `{field}` is not declared in table {table}")]
    UnknownField {
        table: &'static str,
        field: String,
    },

    #[error("table {table} repeats id {id} on line {line}")]
    DuplicateId {
        table: &'static str,
        id: String,
        line: u64,
    },

    #[error("{kind} `{name}` appears more than once in table {table}")]
    DuplicateDocument {
        kind: &'static str,
        table: &'static str,
        name: String,
    },

    #[error("{table} line {line}: field `{field}` expected an integer, found `{value}`")]
    InvalidInteger {
        table: &'static str,
        field: &'static str,
        value: String,
        line: u64,
    },

    #[error("{table} line {line}: `{field}` = `{id}` has no entry in {target}")]
    DanglingReference {
        table: &'static str,
        field: &'static str,
        id: String,
        target: &'static str,
        line: u64,
    },

    #[error("failed to read documents {}: {source}", path.display())]
    ReadDocuments {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed documents in {}: {source}", path.display())]
    ParseDocuments {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read config {}: {source}", path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DataError {
    /// Returns the category this error belongs to.
    pub fn category(&self) -> ErrorCategory {
        match self {
            DataError::ColumnCount { .. }
            | DataError::UnknownField { .. }
            | DataError::DuplicateId { .. }
            | DataError::DuplicateDocument { .. }
            | DataError::ReadConfig { .. }
            | DataError::Config(_) => ErrorCategory::Configuration,
            DataError::DanglingReference { .. } => ErrorCategory::DanglingReference,
            DataError::OpenTable { .. }
            | DataError::MissingTable { .. }
            | DataError::Csv { .. }
            | DataError::InvalidInteger { .. }
            | DataError::ReadDocuments { .. }
            | DataError::ParseDocuments { .. } => ErrorCategory::Source,
            DataError::Io(_) | DataError::Json(_) => ErrorCategory::Output,
        }
    }
}

pub type Result<T> = std::result::Result<T, DataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dangling_reference_category() {
        let err = DataError::DanglingReference {
            table: "moves",
            field: "effect_id",
            id: "999".to_string(),
            target: "move_effect_prose",
            line: 4,
        };
        assert_eq!(err.category(), ErrorCategory::DanglingReference);
        assert_eq!(
            err.to_string(),
            "moves line 4: `effect_id` = `999` has no entry in move_effect_prose"
        );
    }

    #[test]
    fn test_schema_errors_are_configuration() {
        let err = DataError::ColumnCount {
            table: "types",
            expected: 4,
            found: 3,
            line: 1,
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);

        let err = DataError::UnknownField {
            table: "types",
            field: "name".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn test_document_reads_are_source_errors() {
        let err = DataError::ReadDocuments {
            path: PathBuf::from("data/pokemon.json"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(err.category(), ErrorCategory::Source);

        let err = DataError::Io(std::io::Error::from(std::io::ErrorKind::PermissionDenied));
        assert_eq!(err.category(), ErrorCategory::Output);
    }
}
