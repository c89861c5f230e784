//! gentool CLI library

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::missing_errors_doc)]

pub mod commands;
pub mod progress;
pub mod prompt;

pub use commands::GenerateCommand;

use gentool::generation::GenerationType;

/// Generation type as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum GenerationTypeArg {
    /// Application module (`ExampleApplication`, `examplemodule`, ...)
    Module,
    /// CRUD package (`CrudExample`, `crudExample`, ...)
    Crud,
}

impl From<GenerationTypeArg> for GenerationType {
    fn from(arg: GenerationTypeArg) -> Self {
        match arg {
            GenerationTypeArg::Module => Self::Module,
            GenerationTypeArg::Crud => Self::Crud,
        }
    }
}
