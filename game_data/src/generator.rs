//! Full generation runs over every entity kind.

use std::path::PathBuf;

use crate::assembler::{AbilityAssembler, Assembler, CreatureAssembler, MoveAssembler};
use crate::config::GeneratorConfig;
use crate::documents::{AbilityDocument, Collection, CreatureDocument, EntityKind, MoveDocument};
use crate::emitter::DocumentEmitter;
use crate::error::{DataError, Result};
use crate::tables::{DataDir, TableSource};

/// All three document collections, assembled in memory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KnowledgeBase {
    pub creatures: Collection<CreatureDocument>,
    pub moves: Collection<MoveDocument>,
    pub abilities: Collection<AbilityDocument>,
}

impl KnowledgeBase {
    /// Assemble every kind; the first failure aborts the build.
    pub fn build(source: &dyn TableSource, config: &GeneratorConfig) -> Result<Self> {
        Ok(Self {
            abilities: AbilityAssembler::from_config(config).assemble(source)?,
            moves: MoveAssembler::from_config(config).assemble(source)?,
            creatures: CreatureAssembler::from_config(config).assemble(source)?,
        })
    }
}

/// Result of generating one entity kind.
#[derive(Debug)]
pub struct KindOutcome {
    pub kind: EntityKind,
    pub path: PathBuf,
    /// Number of documents written.
    pub result: Result<usize>,
}

/// Per-kind results of a generation run.
#[derive(Debug, Default)]
pub struct RunReport {
    pub outcomes: Vec<KindOutcome>,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }

    pub fn outcome(&self, kind: EntityKind) -> Option<&KindOutcome> {
        self.outcomes.iter().find(|o| o.kind == kind)
    }

    /// Kinds that produced no output, with their errors.
    pub fn failures(&self) -> impl Iterator<Item = (EntityKind, &DataError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.kind, e)))
    }
}

/// Runs every pipeline and writes each kind's collection.
///
/// Kinds are generated independently: a failure leaves that kind's previous
/// output untouched and does not stop the remaining kinds.
pub struct Generator<S> {
    source: S,
    config: GeneratorConfig,
}

impl Generator<DataDir> {
    /// Read tables from the configured data directory.
    pub fn from_config(config: GeneratorConfig) -> Self {
        let source = DataDir::new(&config.data_dir);
        Self::new(source, config)
    }
}

impl<S: TableSource> Generator<S> {
    pub fn new(source: S, config: GeneratorConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn run(&self) -> RunReport {
        let emitter = DocumentEmitter::new(self.config.pretty);

        let outcomes = vec![
            self.generate(&AbilityAssembler::from_config(&self.config), &emitter),
            self.generate(&MoveAssembler::from_config(&self.config), &emitter),
            self.generate(&CreatureAssembler::from_config(&self.config), &emitter),
        ];

        let report = RunReport { outcomes };
        tracing::info!(
            "Generation finished: {} of {} kinds written",
            report.outcomes.iter().filter(|o| o.result.is_ok()).count(),
            report.outcomes.len()
        );
        report
    }

    fn generate<A: Assembler>(&self, assembler: &A, emitter: &DocumentEmitter) -> KindOutcome {
        let kind = assembler.kind();
        let path = self.config.output_path(kind);

        let result = assembler.assemble(&self.source).and_then(|documents| {
            emitter.emit(&path, &documents)?;
            Ok(documents.len())
        });

        if let Err(e) = &result {
            tracing::error!("Failed to generate {} documents: {}", kind, e);
        }

        KindOutcome { kind, path, result }
    }
}
