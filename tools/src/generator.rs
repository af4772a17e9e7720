//! The generation loop.
use crate::{output::write_atomic, ConfigError, GeneratorConfig};
use polkadex_keygen_roles::authority::{GenerationError, KeyType, KeyTypeId, Keyring};
use std::{
    fs, io,
    path::PathBuf,
    sync::atomic::{AtomicBool, Ordering},
};

/// A file which could not be written. Other files are not affected by it.
#[derive(Debug)]
pub struct WriteFailure {
    /// Target path.
    pub path: PathBuf,
    /// Underlying I/O error.
    pub error: io::Error,
}

/// Exit code of a run which generated every node and wrote every file.
pub const EXIT_SUCCESS: u8 = 0;
/// Exit code of a run which failed or was cancelled.
pub const EXIT_FAILURE: u8 = 1;
/// Exit code of a run which completed but lost some of its output.
pub const EXIT_WRITE_FAILURES: u8 = 2;

/// Outcome of [`Generator::run`].
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Nodes whose keys were generated and whose registration line was emitted.
    pub nodes_generated: usize,
    /// Files which exist on disk with their final content.
    pub files_written: Vec<PathBuf>,
    /// Files which could not be written.
    pub failures: Vec<WriteFailure>,
    /// First error of the registration line sink. Once the sink has failed,
    /// no further lines are sent to it.
    pub registration_error: Option<io::Error>,
    /// Whether the run stopped early because it was cancelled.
    pub cancelled: bool,
}

impl GenerationReport {
    /// True iff every configured node was generated and all output was written.
    pub fn is_complete(&self) -> bool {
        !self.cancelled && self.failures.is_empty() && self.registration_error.is_none()
    }

    /// Process exit code for this outcome: cancellation takes precedence over
    /// lost output.
    pub fn exit_code(&self) -> u8 {
        if self.cancelled {
            EXIT_FAILURE
        } else if self.is_complete() {
            EXIT_SUCCESS
        } else {
            EXIT_WRITE_FAILURES
        }
    }
}

/// Error which aborts the whole run.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Mnemonic generation or key derivation failed.
    #[error(transparent)]
    Generation(#[from] GenerationError),
    /// A request could not be serialized.
    #[error("failed to serialize request")]
    Serialize(#[from] serde_json::Error),
    /// The output directory could not be created.
    #[error("failed to create output directory {path:?}")]
    CreateOutputDir {
        /// Directory which could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        error: io::Error,
    },
}

/// Generates authority keys for a batch of nodes and writes their
/// `author_insertKey` request files.
#[derive(Debug)]
pub struct Generator {
    config: GeneratorConfig,
    aura_id: KeyTypeId,
    gran_id: KeyTypeId,
    keyring: Keyring,
}

impl Generator {
    /// Validates `config`. `keyring` is proof that the crypto subsystem is ready.
    pub fn new(config: GeneratorConfig, keyring: Keyring) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            aura_id: config.key_type_id(KeyType::Aura)?,
            gran_id: config.key_type_id(KeyType::Gran)?,
            config,
            keyring,
        })
    }

    /// Configuration of this generator.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    fn key_type_id(&self, key_type: KeyType) -> KeyTypeId {
        match key_type {
            KeyType::Aura => self.aura_id,
            KeyType::Gran => self.gran_id,
        }
    }

    /// Generates `node_count` key sets. For each node both request files are
    /// written and the registration line is emitted to `registrations`.
    ///
    /// A failed file write is logged and recorded in the report, and generation
    /// continues with the next file. A failing `registrations` sink (e.g. a closed
    /// pipe) is logged once and recorded; files are still written for every node,
    /// and `authorities_file` still receives every line. `cancel` is checked
    /// before every node.
    pub fn run(
        &self,
        cancel: &AtomicBool,
        registrations: &mut dyn io::Write,
    ) -> Result<GenerationReport, GeneratorError> {
        let cfg = &self.config;
        tracing::info!(
            node_count = cfg.node_count,
            output_dir = %cfg.output_dir.display(),
            "generating authority keys"
        );
        if cfg.create_output_dir {
            fs::create_dir_all(&cfg.output_dir).map_err(|error| {
                GeneratorError::CreateOutputDir {
                    path: cfg.output_dir.clone(),
                    error,
                }
            })?;
        }

        let mut report = GenerationReport::default();
        let mut lines = vec![];
        for index in 0..cfg.node_count {
            if cancel.load(Ordering::Relaxed) {
                tracing::warn!(index, "generation cancelled");
                report.cancelled = true;
                break;
            }
            let keys = self.keyring.generate(cfg.word_count)?;
            tracing::debug!(index, ?keys, "derived authority keys");

            for key_type in KeyType::ALL {
                let id = self.key_type_id(key_type);
                let json = keys.insert_key_request(key_type, id).to_json()?;
                let path = cfg.file_path(index, id);
                match write_atomic(&path, json.as_bytes()) {
                    Ok(()) => report.files_written.push(path),
                    Err(error) => {
                        tracing::error!(
                            index,
                            path = %path.display(),
                            %error,
                            "failed to write key file"
                        );
                        report.failures.push(WriteFailure { path, error });
                    }
                }
            }

            let line = keys.registration_line();
            if report.registration_error.is_none() {
                if let Err(error) = writeln!(registrations, "{line}") {
                    tracing::error!(index, %error, "failed to emit registration line");
                    report.registration_error = Some(error);
                }
            }
            lines.push(line);
            report.nodes_generated += 1;
        }
        if report.registration_error.is_none() {
            if let Err(error) = registrations.flush() {
                tracing::error!(%error, "failed to flush registration lines");
                report.registration_error = Some(error);
            }
        }

        if let Some(path) = &cfg.authorities_file {
            let snippet: String = lines.iter().map(|line| format!("{line}\n")).collect();
            match write_atomic(path, snippet.as_bytes()) {
                Ok(()) => report.files_written.push(path.clone()),
                Err(error) => {
                    tracing::error!(path = %path.display(), %error, "failed to write authorities file");
                    report.failures.push(WriteFailure {
                        path: path.clone(),
                        error,
                    });
                }
            }
        }

        tracing::info!(
            nodes = report.nodes_generated,
            files = report.files_written.len(),
            failures = report.failures.len(),
            "generation finished"
        );
        Ok(report)
    }
}
