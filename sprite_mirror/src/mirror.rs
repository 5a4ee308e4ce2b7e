//! Idempotent, resumable mirroring of the sprite catalog.

use std::fs;
use std::path::{Component, Path, PathBuf};

use game_data::{read_documents, CreatureDocument};

use crate::config::MirrorConfig;
use crate::error::Result;
use crate::fetcher::{HttpFetcher, SpriteFetcher};
use crate::naming::NameExceptions;
use crate::variant::SpriteVariant;

/// Counts from one mirror run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MirrorReport {
    /// Files fetched and written by this run.
    pub downloaded: usize,
    /// Files that already existed and were left alone.
    pub skipped: usize,
    /// Names that are not a plain file name; none of their variants is fetched.
    pub rejected: usize,
}

impl MirrorReport {
    pub fn total(&self) -> usize {
        self.downloaded + self.skipped
    }
}

/// A name usable as a single file name inside a variant directory.
fn is_plain_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !name.contains(['/', '\\'])
}

/// Canonical creature names, read from an emitted creature collection.
pub fn creature_names(documents: &Path) -> Result<Vec<String>> {
    let creatures = read_documents::<CreatureDocument>(documents)?;
    Ok(creatures.into_keys().collect())
}

/// Mirrors one sprite per (creature, variant) pair into the output directory.
///
/// A file that already exists is never fetched again, whatever its size, so
/// a run cut off by the remote source can simply be repeated.
pub struct SpriteMirror<F> {
    fetcher: F,
    base_url: String,
    output_dir: PathBuf,
    documents: PathBuf,
    exceptions: NameExceptions,
}

impl SpriteMirror<HttpFetcher> {
    /// Mirror over HTTP with the configured user agent.
    pub fn from_config(config: &MirrorConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(&config.user_agent)?;
        Ok(Self::new(fetcher, config))
    }
}

impl<F: SpriteFetcher> SpriteMirror<F> {
    pub fn new(fetcher: F, config: &MirrorConfig) -> Self {
        let mut exceptions = NameExceptions::default();
        exceptions.extend(config.exceptions.clone());

        Self {
            fetcher,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            output_dir: config.output_dir.clone(),
            documents: config.documents.clone(),
            exceptions,
        }
    }

    /// Replace the name exceptions.
    pub fn with_exceptions(mut self, exceptions: NameExceptions) -> Self {
        self.exceptions = exceptions;
        self
    }

    /// Remote location of a sprite; uses the translated name.
    pub fn sprite_url(&self, name: &str, variant: SpriteVariant) -> String {
        format!(
            "{}/{}/{}.gif",
            self.base_url,
            variant.remote_dir(),
            self.exceptions.remote_name(name)
        )
    }

    /// Local location of a sprite; always uses the canonical name.
    pub fn sprite_path(&self, name: &str, variant: SpriteVariant) -> PathBuf {
        self.output_dir
            .join(variant.local_dir())
            .join(format!("{}.gif", name))
    }

    /// Mirror every variant of every name.
    ///
    /// The first failed fetch aborts the run; files written before it are
    /// kept and skipped on the next run.
    pub fn run<I, N>(&self, names: I) -> Result<MirrorReport>
    where
        I: IntoIterator<Item = N>,
        N: AsRef<str>,
    {
        let mut report = MirrorReport::default();
        let mut accepted = Vec::new();
        for name in names {
            if is_plain_name(name.as_ref()) {
                accepted.push(name);
            } else {
                tracing::warn!("Skipping creature name {:?}: not a plain file name", name.as_ref());
                report.rejected += 1;
            }
        }

        for variant in SpriteVariant::ALL {
            fs::create_dir_all(self.output_dir.join(variant.local_dir()))?;

            for name in &accepted {
                let name = name.as_ref();
                if self.mirror_one(name, variant)? {
                    report.downloaded += 1;
                } else {
                    report.skipped += 1;
                }
            }
        }

        tracing::info!(
            "Mirror finished: {} downloaded, {} already present, {} names rejected",
            report.downloaded,
            report.skipped,
            report.rejected
        );
        Ok(report)
    }

    /// Mirror the sprites of every creature in a document collection.
    pub fn run_for_documents(&self, documents: &Path) -> Result<MirrorReport> {
        let names = creature_names(documents)?;
        tracing::debug!("Mirroring sprites for {} creatures", names.len());
        self.run(names)
    }

    /// Mirror the sprites of the configured creature collection.
    pub fn mirror_documents(&self) -> Result<MirrorReport> {
        self.run_for_documents(&self.documents)
    }

    /// Returns whether the sprite was fetched.
    fn mirror_one(&self, name: &str, variant: SpriteVariant) -> Result<bool> {
        let path = self.sprite_path(name, variant);
        if path.exists() {
            return Ok(false);
        }

        let bytes = self.fetcher.fetch(&self.sprite_url(name, variant))?;

        let temp_path = path.with_extension("gif.part");
        fs::write(&temp_path, bytes)?;
        fs::rename(&temp_path, &path)?;

        tracing::info!("{} - Added ({})", name, variant);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MirrorError;
    use std::cell::RefCell;
    use std::collections::HashSet;

    /// Serves fixed bytes and records every requested URL.
    #[derive(Default)]
    struct FakeFetcher {
        requested: RefCell<Vec<String>>,
        refuse_after: Option<usize>,
    }

    impl SpriteFetcher for FakeFetcher {
        fn fetch(&self, url: &str) -> Result<Vec<u8>> {
            let mut requested = self.requested.borrow_mut();
            if self.refuse_after.is_some_and(|limit| requested.len() >= limit) {
                return Err(MirrorError::Status {
                    url: url.to_string(),
                    status: 429,
                });
            }
            requested.push(url.to_string());
            Ok(b"GIF89a".to_vec())
        }
    }

    fn mirror_in(dir: &Path, fetcher: FakeFetcher) -> SpriteMirror<FakeFetcher> {
        let config = MirrorConfig {
            base_url: "http://sprites.test/".to_string(),
            output_dir: dir.to_path_buf(),
            documents: dir.join("pokemon.json"),
            ..MirrorConfig::default()
        };
        SpriteMirror::new(fetcher, &config)
    }

    #[test]
    fn test_urls_use_remote_names_paths_use_canonical() {
        let dir = tempfile::tempdir().unwrap();
        let mirror = mirror_in(dir.path(), FakeFetcher::default());

        assert_eq!(
            mirror.sprite_url("mewtwo-mega-x", SpriteVariant::Shiny),
            "http://sprites.test/xyani-shiny/mewtwo-megax.gif"
        );
        assert_eq!(
            mirror.sprite_path("mewtwo-mega-x", SpriteVariant::Shiny),
            dir.path().join("sprites-shiny").join("mewtwo-mega-x.gif")
        );
    }

    #[test]
    fn test_custom_exceptions_replace_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let mirror = mirror_in(dir.path(), FakeFetcher::default())
            .with_exceptions(NameExceptions::empty().with_exception("nidoran-f", "nidoranf"));

        assert_eq!(
            mirror.sprite_url("nidoran-f", SpriteVariant::Normal),
            "http://sprites.test/xyani/nidoranf.gif"
        );
        assert_eq!(
            mirror.sprite_url("mewtwo-mega-x", SpriteVariant::Normal),
            "http://sprites.test/xyani/mewtwo-mega-x.gif"
        );
    }

    #[test]
    fn test_fetches_every_variant() {
        let dir = tempfile::tempdir().unwrap();
        let mirror = mirror_in(dir.path(), FakeFetcher::default());

        let report = mirror.run(["bulbasaur", "floette-eternalflower"]).unwrap();

        assert_eq!(report, MirrorReport { downloaded: 8, skipped: 0, rejected: 0 });
        let requested: HashSet<_> = mirror.fetcher.requested.borrow().iter().cloned().collect();
        assert!(requested.contains("http://sprites.test/xyani-back/floette-eternal.gif"));
        assert!(dir.path().join("back-sprites").join("floette-eternalflower.gif").exists());
        assert_eq!(
            fs::read(dir.path().join("sprites").join("bulbasaur.gif")).unwrap(),
            b"GIF89a"
        );
    }

    #[test]
    fn test_existing_files_are_skipped_even_when_empty() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("sprites")).unwrap();
        fs::write(dir.path().join("sprites").join("bulbasaur.gif"), b"").unwrap();
        let mirror = mirror_in(dir.path(), FakeFetcher::default());

        let report = mirror.run(["bulbasaur"]).unwrap();

        assert_eq!(report, MirrorReport { downloaded: 3, skipped: 1, rejected: 0 });
        assert!(fs::read(dir.path().join("sprites").join("bulbasaur.gif"))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_resume_after_rate_limit() {
        let dir = tempfile::tempdir().unwrap();
        let limited = mirror_in(
            dir.path(),
            FakeFetcher {
                refuse_after: Some(3),
                ..FakeFetcher::default()
            },
        );

        let err = limited.run(["bulbasaur", "ivysaur"]).unwrap_err();
        assert!(err.is_rate_limited());

        let resumed = mirror_in(dir.path(), FakeFetcher::default());
        let report = resumed.run(["bulbasaur", "ivysaur"]).unwrap();

        assert_eq!(report, MirrorReport { downloaded: 5, skipped: 3, rejected: 0 });
        assert_eq!(resumed.fetcher.requested.borrow().len(), 5);
    }

    #[test]
    fn test_names_escaping_output_dir_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("data");
        let config = MirrorConfig {
            base_url: "http://sprites.test".to_string(),
            output_dir: output.clone(),
            ..MirrorConfig::default()
        };
        let mirror = SpriteMirror::new(FakeFetcher::default(), &config);

        let report = mirror
            .run(["../escaped", "nested/name", "..", "", "bulbasaur"])
            .unwrap();

        assert_eq!(report, MirrorReport { downloaded: 4, skipped: 0, rejected: 4 });
        assert!(!dir.path().join("escaped.gif").exists());
        assert!(!output.join("sprites").join("nested").exists());
        assert!(mirror
            .fetcher
            .requested
            .borrow()
            .iter()
            .all(|url| url.ends_with("/bulbasaur.gif")));
    }

    #[test]
    fn test_missing_documents_is_source_error() {
        let dir = tempfile::tempdir().unwrap();

        let err = creature_names(&dir.path().join("pokemon.json")).unwrap_err();
        match err {
            MirrorError::Documents(err) => {
                assert_eq!(err.category(), game_data::ErrorCategory::Source)
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_run_for_documents() {
        let dir = tempfile::tempdir().unwrap();
        let documents = dir.path().join("pokemon.json");
        let creatures = game_data::Collection::from([
            ("bulbasaur".to_string(), CreatureDocument::default()),
            ("charizard-mega-y".to_string(), CreatureDocument::default()),
        ]);
        game_data::DocumentEmitter::default()
            .emit(&documents, &creatures)
            .unwrap();

        assert_eq!(
            creature_names(&documents).unwrap(),
            ["bulbasaur", "charizard-mega-y"]
        );

        let mirror = mirror_in(dir.path(), FakeFetcher::default());
        let report = mirror.mirror_documents().unwrap();
        assert_eq!(report.total(), 8);
        assert!(mirror
            .fetcher
            .requested
            .borrow()
            .contains(&"http://sprites.test/xyani/charizard-megay.gif".to_string()));
    }
}
