//! # Sprite Mirror
//!
//! Mirrors the remote sprite catalog for every creature in a generated
//! creature collection. Four variants are fetched per creature. Names the
//! remote catalog spells differently are translated for the request only;
//! files are stored under the canonical name.
//!
//! Runs are idempotent: a sprite whose file already exists is skipped, so a
//! run cut short by rate limiting is resumed by running it again.

pub mod config;
pub mod error;
pub mod fetcher;
pub mod mirror;
pub mod naming;
pub mod variant;

pub use config::MirrorConfig;
pub use error::{MirrorError, Result};
pub use fetcher::{HttpFetcher, SpriteFetcher};
pub use mirror::{creature_names, MirrorReport, SpriteMirror};
pub use naming::NameExceptions;
pub use variant::SpriteVariant;
