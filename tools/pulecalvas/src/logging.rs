//! env_logger output routed around the progress bars.

use anyhow::{Context, Result};
use indicatif::MultiProgress;
use log::{Log, Metadata, Record};

/// Clears the bars of `progress` while each record is written, then redraws
/// them below it.
pub struct ProgressAwareLogger {
    inner: env_logger::Logger,
    progress: MultiProgress,
}

impl ProgressAwareLogger {
    pub fn new(inner: env_logger::Logger, progress: MultiProgress) -> Self {
        Self { inner, progress }
    }

    pub fn install(self) -> Result<()> {
        let max_level = self.inner.filter();
        log::set_boxed_logger(Box::new(self)).context("a logger is already installed")?;
        log::set_max_level(max_level);
        Ok(())
    }
}

impl Log for ProgressAwareLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.inner.enabled(metadata)
    }

    fn log(&self, record: &Record<'_>) {
        if self.inner.matches(record) {
            self.progress.suspend(|| self.inner.log(record));
        }
    }

    fn flush(&self) {
        self.inner.flush();
    }
}

/// `RUST_LOG` wins over the level picked by `-v`.
pub fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

pub fn init(verbose: u8, quiet: bool, progress: &MultiProgress) -> Result<()> {
    if quiet {
        return Ok(());
    }

    let inner = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_level(verbose)),
    )
    .build();
    ProgressAwareLogger::new(inner, progress.clone()).install()
}
