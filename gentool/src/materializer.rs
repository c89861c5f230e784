//! Source and destination directory resolution, and tree copying

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::{GenError, Result};
use crate::generation::GenerationType;

/// Path of the generated directory, without touching the filesystem
///
/// `base/<lower(domain_name)><suffix>`
#[must_use]
pub fn gen_dir_path(gen_type: GenerationType, domain_name: &str, base: &Path) -> PathBuf {
    base.join(gen_type.dir_name(domain_name))
}

/// Resolve the generated directory, creating it if missing
///
/// # Errors
///
/// Returns [`GenError::PathNotFound`] if `base` does not exist, or
/// [`GenError::Io`] if the directory cannot be created.
pub fn resolve_gen_dir(gen_type: GenerationType, domain_name: &str, base: &Path) -> Result<PathBuf> {
    ensure_base_dir(base)?;

    let gen_dir = gen_dir_path(gen_type, domain_name, base);
    if !gen_dir.exists() {
        fs::create_dir(&gen_dir).map_err(|e| GenError::io(&gen_dir, e))?;
        debug!(path = %gen_dir.display(), "Created generation directory");
    }
    Ok(gen_dir)
}

/// Check that the base destination directory exists
///
/// # Errors
///
/// Returns [`GenError::PathNotFound`] if it does not.
pub fn ensure_base_dir(base: &Path) -> Result<()> {
    if base.exists() {
        Ok(())
    } else {
        Err(GenError::not_found("Generation directory", base))
    }
}

/// Resolve the example (template) directory
///
/// # Errors
///
/// - [`GenError::InvalidArgument`] if `path` is empty or not a directory
/// - [`GenError::PathNotFound`] if `path` does not exist
pub fn resolve_example_dir(path: &Path) -> Result<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(GenError::InvalidArgument(
            "You must provide an example package path".to_string(),
        ));
    }
    if !path.exists() {
        return Err(GenError::not_found("Example directory", path));
    }
    if !path.is_dir() {
        return Err(GenError::InvalidArgument(format!(
            "Example path is not a directory: {}",
            path.display()
        )));
    }
    Ok(path.to_path_buf())
}

/// Recursively copy the contents of `src` into `dst`
///
/// Relative structure is preserved and existing files are overwritten.
/// Symlinks are followed. When `dst` lies inside `src` it is left out of the
/// walk. Returns the number of files copied.
///
/// # Errors
///
/// Returns [`GenError::Io`] on the first failed directory walk, directory
/// creation or file copy. Files copied before the failure are left in place.
pub fn copy_tree(src: &Path, dst: &Path) -> Result<usize> {
    info!(from = %src.display(), to = %dst.display(), "Copying example directory");

    let dst_canon = fs::canonicalize(dst).unwrap_or_else(|_| dst.to_path_buf());
    let walk = WalkDir::new(src)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            !(entry.file_type().is_dir() && is_same_dir(entry.path(), &dst_canon))
        });

    let mut copied = 0;
    for entry in walk {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(src).to_path_buf();
            GenError::io(path, e.into())
        })?;

        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| GenError::InvalidArgument(e.to_string()))?;
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| GenError::io(&target, e))?;
        } else {
            fs::copy(entry.path(), &target).map_err(|e| GenError::io(entry.path(), e))?;
            copied += 1;
        }
    }

    debug!(files = copied, "Directory copied");
    Ok(copied)
}

fn is_same_dir(path: &Path, canonical: &Path) -> bool {
    fs::canonicalize(path).is_ok_and(|p| p == canonical)
}
