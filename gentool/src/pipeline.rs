//! Generation pipeline orchestrator
//!
//! Coordinates a single run:
//! 1. Validate the example directory (before anything is written)
//! 2. Copy the example tree
//! 3. Rename entries and replace file contents
//!
//! With staging enabled (the default) steps 2 and 3 happen in a hidden
//! sibling of the target directory, which is then moved into place. A failed
//! run leaves the destination untouched. Without staging the tree is copied
//! straight into the target and a failure can leave it half processed.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::OutputSettings;
use crate::error::{GenError, Result};
use crate::generation::Args;
use crate::materializer::{copy_tree, ensure_base_dir, gen_dir_path, resolve_example_dir, resolve_gen_dir};
use crate::substitution::RuleSet;
use crate::walker::{WalkStats, Walker};

/// Pipeline phases reported to a [`GenerationObserver`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Copying the example directory
    Copying,
    /// Renaming entries and replacing contents
    Replacing,
    /// Moving the staged tree into place
    Finalizing,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Copying => f.write_str("Copying example directory"),
            Self::Replacing => {
                f.write_str("Replacing file names and contents with your domain name")
            }
            Self::Finalizing => f.write_str("Moving generated files into place"),
        }
    }
}

/// Receives progress notifications from a run
pub trait GenerationObserver {
    /// A new phase started
    fn phase(&mut self, _phase: Phase) {}

    /// An entry was renamed
    fn renamed(&mut self, _from: &Path, _to: &Path) {}

    /// A file's contents were replaced
    fn rewritten(&mut self, _path: &Path) {}
}

/// Observer that ignores every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl GenerationObserver for NoopObserver {}

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Final generated directory
    pub output_dir: PathBuf,
    /// Files copied from the example directory
    pub files_copied: usize,
    /// Rename/replace counters
    pub stats: WalkStats,
}

/// Runs the copy/rename/replace pipeline for one set of [`Args`]
#[derive(Debug, Clone)]
pub struct Generator {
    args: Args,
    staging: bool,
}

impl Generator {
    /// Create a generator
    #[must_use]
    pub const fn new(args: Args, output: &OutputSettings) -> Self {
        Self {
            args,
            staging: output.staging,
        }
    }

    /// Arguments of this run
    #[must_use]
    pub const fn args(&self) -> &Args {
        &self.args
    }

    /// Directory the generated tree ends up in
    #[must_use]
    pub fn target_dir(&self) -> PathBuf {
        gen_dir_path(
            self.args.gen_type(),
            self.args.domain_name(),
            self.args.gen_dir_path(),
        )
    }

    /// Run the pipeline
    ///
    /// # Errors
    ///
    /// - [`GenError::InvalidArgument`] / [`GenError::PathNotFound`] if the
    ///   example or destination directory is unusable
    /// - [`GenError::Io`] on any copy, rename, read or write failure
    pub fn run(&self, observer: &mut dyn GenerationObserver) -> Result<GenerationReport> {
        let example_dir = resolve_example_dir(self.args.src_dir_path())?;
        info!(
            gen_type = %self.args.gen_type(),
            domain = self.args.domain_name(),
            staging = self.staging,
            "Starting generation"
        );

        let report = if self.staging {
            self.run_staged(&example_dir, observer)?
        } else {
            self.run_direct(&example_dir, observer)?
        };

        info!(output = %report.output_dir.display(), "Generation completed");
        Ok(report)
    }

    fn run_direct(
        &self,
        example_dir: &Path,
        observer: &mut dyn GenerationObserver,
    ) -> Result<GenerationReport> {
        let gen_dir = resolve_gen_dir(
            self.args.gen_type(),
            self.args.domain_name(),
            self.args.gen_dir_path(),
        )?;

        let (files_copied, stats) = self.materialize(example_dir, &gen_dir, observer)?;
        Ok(GenerationReport {
            output_dir: gen_dir,
            files_copied,
            stats,
        })
    }

    fn run_staged(
        &self,
        example_dir: &Path,
        observer: &mut dyn GenerationObserver,
    ) -> Result<GenerationReport> {
        let base = self.args.gen_dir_path();
        ensure_base_dir(base)?;

        let target = self.target_dir();
        let staging = StagingDir::create(base, &self.args.gen_type().dir_name(self.args.domain_name()))?;

        let (files_copied, stats) = self.materialize(example_dir, staging.path(), observer)?;

        observer.phase(Phase::Finalizing);
        if target.exists() {
            info!(target = %target.display(), "Target exists, merging generated files into it");
            copy_tree(staging.path(), &target)?;
        } else {
            fs::rename(staging.path(), &target).map_err(|e| GenError::io(&target, e))?;
        }

        Ok(GenerationReport {
            output_dir: target,
            files_copied,
            stats,
        })
    }

    fn materialize(
        &self,
        example_dir: &Path,
        dir: &Path,
        observer: &mut dyn GenerationObserver,
    ) -> Result<(usize, WalkStats)> {
        observer.phase(Phase::Copying);
        let files_copied = copy_tree(example_dir, dir)?;

        observer.phase(Phase::Replacing);
        let subs = RuleSet::for_type(self.args.gen_type()).bind(self.args.domain_name());
        let stats = Walker::new(&subs, observer).walk(dir)?;

        Ok((files_copied, stats))
    }
}

/// Hidden working directory removed when dropped
struct StagingDir {
    path: PathBuf,
}

impl StagingDir {
    fn create(base: &Path, target_name: &str) -> Result<Self> {
        let path = base.join(format!(".{target_name}.staging-{}", std::process::id()));
        if path.exists() {
            fs::remove_dir_all(&path).map_err(|e| GenError::io(&path, e))?;
        }
        fs::create_dir(&path).map_err(|e| GenError::io(&path, e))?;
        Ok(Self { path })
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for StagingDir {
    fn drop(&mut self) {
        // Already moved into place on success
        if self.path.exists() {
            if let Err(e) = fs::remove_dir_all(&self.path) {
                warn!(path = %self.path.display(), error = %e, "Failed to remove staging directory");
            }
        }
    }
}
