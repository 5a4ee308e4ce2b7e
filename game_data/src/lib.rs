//! # Game Data
//!
//! Builds a denormalized knowledge base of creatures, moves and abilities from
//! relational CSV tables. Entities in the source are related by integer ids,
//! one file per table; the output is one self-contained document per entity,
//! keyed by its display name, so lookups at runtime need no joins.
//!
//! ## Pipeline
//!
//! - **tables**: schemas, table sources and validated row scans
//! - **lookup**: id -> display value maps built from one table
//! - **fanout**: owner id -> resolved children, built from junction tables
//! - **assembler**: per-kind joins producing documents
//! - **emitter**: JSON output of document collections
//! - **generator**: runs and reports every kind
//!
//! Every run rebuilds all documents from scratch. A dangling foreign key
//! aborts its entity kind; it is never replaced by a default value.

pub mod assembler;
pub mod config;
pub mod documents;
pub mod emitter;
pub mod error;
pub mod fanout;
pub mod generator;
pub mod lookup;
pub mod tables;

#[cfg(test)]
pub(crate) mod fixtures;

pub use assembler::*;
pub use config::*;
pub use documents::*;
pub use emitter::*;
pub use error::{DataError, ErrorCategory, Result};
pub use fanout::*;
pub use generator::*;
pub use lookup::{IdBound, LookupBuilder, LookupTable};
pub use tables::{DataDir, InMemoryTables, TableSource};
