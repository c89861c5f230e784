//! Rename/replace walk over a generated tree
//!
//! Visits every entry depth first. Each entry's name is rewritten with the
//! bound [`Substitutions`]; regular files additionally get their text
//! rewritten. Directories are descended into through their new name, so the
//! parent segments of a path are already substituted when a child is visited.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{GenError, Result};
use crate::pipeline::GenerationObserver;
use crate::substitution::Substitutions;

/// Counters collected during a walk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Entries (files and directories) whose name changed
    pub renamed: usize,
    /// Files whose content changed
    pub rewritten: usize,
    /// Files left untouched because they are not UTF-8 text
    pub skipped_binary: usize,
}

/// Recursive rename/replace walker
pub struct Walker<'a> {
    subs: &'a Substitutions,
    observer: &'a mut dyn GenerationObserver,
    stats: WalkStats,
}

impl<'a> Walker<'a> {
    /// Create a walker applying `subs`
    pub fn new(subs: &'a Substitutions, observer: &'a mut dyn GenerationObserver) -> Self {
        Self {
            subs,
            observer,
            stats: WalkStats::default(),
        }
    }

    /// Walk everything below `root` (the root itself is not renamed)
    ///
    /// # Errors
    ///
    /// Returns [`GenError::Io`] on the first failed listing, rename, read or
    /// write, and with [`io::ErrorKind::AlreadyExists`] when a new name is
    /// already taken by a sibling. Nothing is rolled back.
    pub fn walk(mut self, root: &Path) -> Result<WalkStats> {
        self.walk_dir(root)?;
        Ok(self.stats)
    }

    fn walk_dir(&mut self, dir: &Path) -> Result<()> {
        for path in sorted_entries(dir)? {
            let path = self.rename(&path)?;
            let file_type = fs::symlink_metadata(&path)
                .map_err(|e| GenError::io(&path, e))?
                .file_type();

            if file_type.is_file() {
                self.replace_text(&path)?;
            } else if file_type.is_dir() {
                debug!(path = %path.display(), "Processing directory recursively");
                self.walk_dir(&path)?;
            }
        }
        Ok(())
    }

    fn rename(&mut self, path: &Path) -> Result<PathBuf> {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            warn!(path = %path.display(), "Skipping rename of non UTF-8 file name");
            return Ok(path.to_path_buf());
        };

        let new_name = self.subs.apply(name);
        if new_name == name {
            return Ok(path.to_path_buf());
        }

        let new_path = path.with_file_name(&*new_name);
        if fs::symlink_metadata(&new_path).is_ok() {
            return Err(GenError::io(
                &new_path,
                io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("cannot rename {name} onto an existing entry"),
                ),
            ));
        }
        fs::rename(path, &new_path).map_err(|e| GenError::io(path, e))?;
        debug!(from = %path.display(), to = %new_path.display(), "Renamed");

        self.stats.renamed += 1;
        self.observer.renamed(path, &new_path);
        Ok(new_path)
    }

    fn replace_text(&mut self, path: &Path) -> Result<()> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                warn!(path = %path.display(), "Not a UTF-8 text file, contents left as is");
                self.stats.skipped_binary += 1;
                return Ok(());
            }
            Err(e) => return Err(GenError::io(path, e)),
        };

        let replaced = self.subs.apply(&content);
        if replaced == content.as_str() {
            return Ok(());
        }

        fs::write(path, replaced.as_bytes()).map_err(|e| GenError::io(path, e))?;
        debug!(path = %path.display(), "Replaced file contents");

        self.stats.rewritten += 1;
        self.observer.rewritten(path);
        Ok(())
    }
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = fs::read_dir(dir)
        .map_err(|e| GenError::io(dir, e))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<io::Result<Vec<_>>>()
        .map_err(|e| GenError::io(dir, e))?;
    entries.sort();
    Ok(entries)
}
