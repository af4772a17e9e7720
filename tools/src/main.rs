//! Generates authority keys for a batch of Polkadex nodes. For every node it writes
//! `author_insertKey` request files for the aura and gran keys and prints an
//! `authority_keys_from_seed(..)` line to stdout, ready to be pasted into the chain spec.
//!
//! Exit codes: 0 on success, 1 on a fatal error or cancellation, 2 if some files
//! or registration lines could not be written.
use anyhow::Context as _;
use clap::Parser;
use polkadex_keygen_roles::authority::Keyring;
use polkadex_keygen_tools::{Generator, GeneratorConfig, EXIT_SUCCESS};
use std::{
    io::{self, IsTerminal as _},
    path::PathBuf,
    process::ExitCode,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};
use tracing_subscriber::{prelude::*, EnvFilter, Registry};

/// Command line arguments. Every flag overrides the corresponding field of the
/// config file (or of the defaults, if no config file is given).
#[derive(Debug, Parser)]
#[command(name = "keygen", version, about)]
struct Args {
    /// Path to a JSON file with generator configuration.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of nodes to generate keys for.
    #[arg(long)]
    node_count: Option<usize>,
    /// Directory the request files are written to.
    #[arg(long)]
    output_dir: Option<PathBuf>,
    /// File name template with `{index}` and `{key_type}` placeholders.
    #[arg(long)]
    naming_template: Option<String>,
    /// Keystore id of the block production (sr25519) key.
    #[arg(long)]
    aura_key_type: Option<String>,
    /// Keystore id of the finality voting (ed25519) key.
    #[arg(long)]
    gran_key_type: Option<String>,
    /// Words per generated mnemonic.
    #[arg(long)]
    word_count: Option<usize>,
    /// Create the output directory if it does not exist.
    #[arg(long)]
    create_output_dir: bool,
    /// Also write all `authority_keys_from_seed(..)` lines to this file.
    #[arg(long)]
    authorities_file: Option<PathBuf>,
    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    /// Loads the config file, if any, and applies the command line overrides.
    fn generator_config(&self) -> anyhow::Result<GeneratorConfig> {
        let mut cfg = match &self.config {
            Some(path) => GeneratorConfig::read(path).context("GeneratorConfig::read()")?,
            None => GeneratorConfig::default(),
        };
        if let Some(node_count) = self.node_count {
            cfg.node_count = node_count;
        }
        if let Some(output_dir) = &self.output_dir {
            cfg.output_dir = output_dir.clone();
        }
        if let Some(template) = &self.naming_template {
            cfg.naming_template = template.clone();
        }
        if let Some(id) = &self.aura_key_type {
            cfg.aura_key_type = id.clone();
        }
        if let Some(id) = &self.gran_key_type {
            cfg.gran_key_type = id.clone();
        }
        if let Some(word_count) = self.word_count {
            cfg.word_count = word_count;
        }
        cfg.create_output_dir |= self.create_output_dir;
        if let Some(path) = &self.authorities_file {
            cfg.authorities_file = Some(path.clone());
        }
        Ok(cfg)
    }
}

/// Logs go to stderr, so that stdout only carries the registration lines.
fn init_logging(default_filter: &str) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter).context("--log-level")?,
    };
    let stderr_log = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(std::env::var("NO_COLOR").is_err() && io::stderr().is_terminal())
        .with_file(false)
        .with_line_number(false)
        .with_filter(filter);
    tracing::subscriber::set_global_default(Registry::default().with(stderr_log))
        .context("set_global_default()")?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    init_logging(&args.log_level)?;
    tracing::trace!(?args, "starting keygen");

    let cfg = args.generator_config()?;
    let keyring = Keyring::ready().context("Keyring::ready()")?;
    let generator = Generator::new(cfg, keyring).context("Generator::new()")?;

    let cancel = Arc::new(AtomicBool::new(false));
    tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::warn!("interrupted, stopping after the current node");
                cancel.store(true, Ordering::Relaxed);
            }
        }
    });

    let node_count = generator.config().node_count;
    let report = tokio::task::spawn_blocking(move || {
        generator.run(&cancel, &mut io::stdout().lock())
    })
    .await
    .context("generator task")?
    .context("Generator::run()")?;

    if report.cancelled {
        anyhow::bail!(
            "cancelled after {} of {node_count} nodes",
            report.nodes_generated
        );
    }
    let code = report.exit_code();
    if code != EXIT_SUCCESS {
        tracing::error!(
            failures = report.failures.len(),
            registration_failed = report.registration_error.is_some(),
            "some output could not be written"
        );
    }
    Ok(ExitCode::from(code))
}
