//! Source tables: schemas, sources and row scans.
//!
//! Every table is a headered, comma-delimited file whose columns are given
//! meaning by a [`TableSchema`] rather than by the header text.

pub mod catalog;
mod schema;
mod source;
mod table;

pub use schema::*;
pub use source::*;
pub use table::*;
