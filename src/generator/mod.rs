pub mod random;
pub mod short_id;
pub mod tags;
mod tree;

use crate::config::GeneratorConfig;
use crate::constants::{ID_MIN_LENGTH, LEDGER_EXTENSION};
use crate::error::{GenerateError, Result};
use crate::io::ledger::Ledger;
use crate::report::{Reporter, TracingReporter};
use random::RandomSource;
use short_id::ShortId;
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tags::TagPool;

/// What one `generate` call produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    pub seed: u64,
    pub target: PathBuf,
    pub ledger: PathBuf,
    /// Includes the fixture root.
    pub directories: usize,
    pub files: usize,
    pub payload_bytes: u64,
    pub ledger_entries: usize,
    pub distinct_tags: usize,
}

/// Per-call state: the identifier counter, the tag pool and the open ledger.
struct Run {
    counter: u64,
    pool: TagPool,
    ledger: Ledger,
    directories: usize,
    files: usize,
    payload_bytes: u64,
}

impl Run {
    fn new(ledger: Ledger) -> Self {
        Self {
            counter: 0,
            pool: TagPool::default(),
            ledger,
            directories: 1,
            files: 0,
            payload_bytes: 0,
        }
    }

    fn mint(
        &mut self,
        ids: &ShortId,
    ) -> String {
        let id = ids.encode(self.counter);
        self.counter += 1;
        id
    }

    /// Flushes and closes the ledger, then surfaces the build outcome. The
    /// ledger prefix is on disk even when `built` is an error.
    fn close(
        self,
        built: Result<()>,
    ) -> Result<RunTotals> {
        let flushed = self.ledger.finish();
        built?;
        Ok(RunTotals {
            directories: self.directories,
            files: self.files,
            payload_bytes: self.payload_bytes,
            ledger_entries: flushed?,
            distinct_tags: self.pool.len(),
        })
    }
}

struct RunTotals {
    directories: usize,
    files: usize,
    payload_bytes: u64,
    ledger_entries: usize,
    distinct_tags: usize,
}

/// Seeded fixture generator.
///
/// Construction validates the configuration, seeds the random source and
/// shuffles the identifier alphabet; nothing touches the filesystem until
/// [`Generator::generate`].
pub struct Generator {
    config: GeneratorConfig,
    rng: RandomSource,
    ids: ShortId,
    reporter: Box<dyn Reporter>,
}

impl std::fmt::Debug for Generator {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.debug_struct("Generator")
            .field("config", &self.config)
            .field("seed", &self.rng.seed())
            .finish_non_exhaustive()
    }
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        Self::with_reporter(config, Box::new(TracingReporter))
    }

    pub fn with_reporter(
        config: GeneratorConfig,
        reporter: Box<dyn Reporter>,
    ) -> Result<Self> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => RandomSource::new(seed),
            None => RandomSource::from_entropy_seed(),
        };
        reporter.seed(rng.seed());
        let ids = ShortId::shuffled(&mut rng, ID_MIN_LENGTH)?;
        Ok(Self {
            config,
            rng,
            ids,
            reporter,
        })
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Builds `<root>/<name>` and its ledger `<root>/<name>.tag`.
    ///
    /// Fails with [`GenerateError::AlreadyExists`] before writing anything if
    /// the fixture directory is present. The ledger is flushed on every path
    /// once it has been opened.
    pub fn generate(
        &mut self,
        name: &str,
    ) -> Result<GenerationSummary> {
        validate_name(name)?;
        let root = self.prepare_root()?;
        let target = root.join(name);
        match fs::create_dir(&target) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(GenerateError::AlreadyExists { path: target });
            }
            Err(e) => return Err(GenerateError::io("create fixture directory", &target, e)),
        }

        let ledger_path = root.join(format!("{name}.{LEDGER_EXTENSION}"));
        let ledger = Ledger::create(&ledger_path, self.reporter.as_ref())?;
        let mut run = Run::new(ledger);
        tracing::debug!("Generating fixture {}", target.display());
        let built = self.build(&mut run, &target, 0);
        let totals = run.close(built)?;

        Ok(GenerationSummary {
            seed: self.rng.seed(),
            target,
            ledger: ledger_path,
            directories: totals.directories,
            files: totals.files,
            payload_bytes: totals.payload_bytes,
            ledger_entries: totals.ledger_entries,
            distinct_tags: totals.distinct_tags,
        })
    }

    // Creates the test root on first use and resolves it to an absolute path.
    fn prepare_root(&self) -> Result<PathBuf> {
        let root = &self.config.root;
        if !root.exists() {
            self.reporter.warn(&format!(
                "Test directory {} does not exist. Creating one now.",
                root.display()
            ));
            fs::create_dir_all(root).map_err(|e| GenerateError::io("create test root", root, e))?;
        }
        dunce::canonicalize(root).map_err(|e| GenerateError::io("resolve test root", root, e))
    }
}

/// A fixture name must be a single plain path component.
fn validate_name(name: &str) -> Result<()> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(part)), None) if part == name => Ok(()),
        _ => Err(GenerateError::invalid(
            "name",
            format!("{name:?} is not a plain directory name"),
        )),
    }
}
