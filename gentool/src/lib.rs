//! gentool: scaffold modules and CRUD packages from example directories
//!
//! A template ("example") directory is copied into the destination, then every
//! placeholder token in file names and file contents is replaced with a
//! domain name in several case variants.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use gentool::config::GentoolConfig;
//! use gentool::generation::{Args, GenerationType};
//! use gentool::pipeline::{Generator, NoopObserver};
//!
//! # fn main() -> gentool::error::Result<()> {
//! let config = GentoolConfig::load(None)?;
//! let args = Args::new(GenerationType::Module, "billing", "templates/example", "modules")?;
//!
//! let report = Generator::new(args, &config.output).run(&mut NoopObserver)?;
//! println!("Generated {}", report.output_dir.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Placeholder tokens
//!
//! | Type   | Placeholder          | Replacement         |
//! |--------|----------------------|---------------------|
//! | MODULE | `examplemodule`      | `billing`           |
//! | MODULE | `ExampleApplication` | `BillingApplication`|
//! | MODULE | `Example`            | `Billing`           |
//! | MODULE | `example`            | `billing`           |
//! | MODULE | `EXAMPLE`            | `BILLING`           |
//! | CRUD   | `CrudExample`        | `Order`             |
//! | CRUD   | `crudExample`        | `order`             |
//! | CRUD   | `crudexample`        | `order`             |
//! | CRUD   | `CRUDEXAMPLE`        | `ORDER`             |

// Lint configuration is handled at the workspace level in Cargo.toml
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod generation;
pub mod materializer;
pub mod observability;
pub mod pipeline;
pub mod substitution;
pub mod walker;

pub use config::GentoolConfig;
pub use error::GenError;
pub use generation::{Args, GenerationType};
pub use pipeline::{GenerationObserver, GenerationReport, Generator, NoopObserver, Phase};
pub use substitution::{RuleSet, Substitutions};
