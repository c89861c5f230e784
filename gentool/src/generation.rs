//! Generation types and validated run arguments

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GenError, Result};
use crate::substitution::capitalize;

/// Which template family to scaffold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationType {
    /// A whole application module (`ExampleApplication`, `examplemodule`, ...)
    Module,
    /// A CRUD package (`CrudExample`, `crudExample`, ...)
    Crud,
}

impl GenerationType {
    /// Every generation type, in menu order
    pub const ALL: [Self; 2] = [Self::Module, Self::Crud];

    /// Human readable label used in prompts
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Module => "module",
            Self::Crud => "CRUD package",
        }
    }

    /// Suffix appended to the lower-cased domain name to form the output directory
    #[must_use]
    pub const fn dir_suffix(self) -> &'static str {
        match self {
            Self::Module => "module",
            Self::Crud => "",
        }
    }

    /// Directory name generated for `domain_name`
    #[must_use]
    pub fn dir_name(self, domain_name: &str) -> String {
        format!("{}{}", domain_name.to_lowercase(), self.dir_suffix())
    }
}

impl fmt::Display for GenerationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Module => f.write_str("MODULE"),
            Self::Crud => f.write_str("CRUD"),
        }
    }
}

impl FromStr for GenerationType {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "module" => Ok(Self::Module),
            "crud" => Ok(Self::Crud),
            other => Err(GenError::InputParse(format!(
                "unknown generation type '{other}' (expected 'module' or 'crud')"
            ))),
        }
    }
}

/// Arguments of a single generation run
///
/// The domain name is trimmed and capitalized on creation, so every
/// downstream case variant is derived from the same canonical form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    gen_type: GenerationType,
    domain_name: String,
    src_dir_path: PathBuf,
    gen_dir_path: PathBuf,
}

impl Args {
    /// Validate and build run arguments
    ///
    /// # Errors
    ///
    /// Returns [`GenError::InvalidArgument`] if the domain name is empty or
    /// would escape the destination directory.
    pub fn new(
        gen_type: GenerationType,
        domain_name: &str,
        src_dir_path: impl Into<PathBuf>,
        gen_dir_path: impl Into<PathBuf>,
    ) -> Result<Self> {
        let domain_name = validate_domain_name(domain_name)?;

        Ok(Self {
            gen_type,
            domain_name: capitalize(domain_name),
            src_dir_path: src_dir_path.into(),
            gen_dir_path: gen_dir_path.into(),
        })
    }

    /// Selected generation type
    #[must_use]
    pub const fn gen_type(&self) -> GenerationType {
        self.gen_type
    }

    /// Capitalized domain name
    #[must_use]
    pub fn domain_name(&self) -> &str {
        &self.domain_name
    }

    /// Example (template) directory
    #[must_use]
    pub const fn src_dir_path(&self) -> &PathBuf {
        &self.src_dir_path
    }

    /// Base destination directory
    #[must_use]
    pub const fn gen_dir_path(&self) -> &PathBuf {
        &self.gen_dir_path
    }
}

/// Check that a domain name is usable, returning it trimmed
///
/// # Errors
///
/// Returns [`GenError::InvalidArgument`] for empty names and names containing
/// path separators or `..`.
pub fn validate_domain_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(GenError::InvalidArgument(
            "domain name must not be empty".to_string(),
        ));
    }
    if name.contains(&['/', '\\'][..]) || name.contains("..") {
        return Err(GenError::InvalidArgument(format!(
            "domain name '{name}' must not contain path separators"
        )));
    }
    Ok(name)
}
