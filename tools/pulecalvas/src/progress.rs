//! File progress for corpus walks.
//!
//! Bars are attached to the [`MultiProgress`] the logger also holds, so log
//! records are printed above the bar instead of through it.

use std::time::Duration;

use anyhow::Result;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

pub struct ProgressReporter {
    files: Option<ProgressBar>,
}

impl ProgressReporter {
    /// Reports nothing.
    pub fn hidden() -> Self {
        Self { files: None }
    }

    /// One tick per thread file; no bar at all when `quiet`.
    pub fn files(multi: &MultiProgress, total_files: u64, quiet: bool) -> Result<Self> {
        if quiet {
            return Ok(Self::hidden());
        }

        let pb = multi.add(ProgressBar::new(total_files));
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files {msg}")?
                .progress_chars("=>-"),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        Ok(Self { files: Some(pb) })
    }

    pub fn file_completed(&self, filename: &str) {
        if let Some(pb) = &self.files {
            pb.set_message(filename.to_string());
            pb.inc(1);
        }
    }

    pub fn finish(&self) {
        if let Some(pb) = &self.files {
            pb.finish_with_message("done");
        }
    }

    #[cfg(test)]
    fn position(&self) -> Option<u64> {
        self.files.as_ref().map(ProgressBar::position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indicatif::ProgressDrawTarget;

    fn hidden_multi() -> MultiProgress {
        MultiProgress::with_draw_target(ProgressDrawTarget::hidden())
    }

    #[test]
    fn test_counts_completed_files() {
        let multi = hidden_multi();
        let progress = ProgressReporter::files(&multi, 3, false).unwrap();
        assert_eq!(progress.position(), Some(0));

        progress.file_completed("a.json");
        progress.file_completed("b.json");
        assert_eq!(progress.position(), Some(2));
        progress.finish();
    }

    #[test]
    fn test_quiet_has_no_bar() {
        let progress = ProgressReporter::files(&hidden_multi(), 3, true).unwrap();
        progress.file_completed("a.json");
        assert_eq!(progress.position(), None);
        assert_eq!(ProgressReporter::hidden().position(), None);
    }
}
