//! Module / CRUD package generation command

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;
use gentool::config::GentoolConfig;
use gentool::generation::{Args, GenerationType};
use gentool::pipeline::{GenerationReport, Generator};
use tracing::debug;

use crate::progress::{generating_bar, ConsoleObserver};
use crate::prompt::{collect_type_and_name, LinePrompt, Prompt, TermPrompt};

/// Generate a module or CRUD package from an example directory
#[derive(Debug, Clone)]
pub struct GenerateCommand {
    /// Example (template) directory
    pub src_dir: PathBuf,
    /// Directory the generated tree is created in
    pub gen_dir: PathBuf,
    /// Generation type given on the command line
    pub gen_type: Option<GenerationType>,
    /// Domain name given on the command line
    pub name: Option<String>,
    /// Explicit configuration file
    pub config: Option<PathBuf>,
    /// Copy straight into the target instead of staging
    pub no_staging: bool,
    /// Override of the cosmetic progress delay
    pub progress_delay_ms: Option<u64>,
}

impl GenerateCommand {
    /// Create a command for the two required paths
    #[must_use]
    pub const fn new(src_dir: PathBuf, gen_dir: PathBuf) -> Self {
        Self {
            src_dir,
            gen_dir,
            gen_type: None,
            name: None,
            config: None,
            no_staging: false,
            progress_delay_ms: None,
        }
    }

    /// Execute the command, prompting on the console for missing input
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration cannot be loaded
    /// - Input is invalid too many times
    /// - The example or destination directory is missing
    /// - Copying, renaming or rewriting fails
    pub fn execute(&self) -> Result<GenerationReport> {
        let config = self.load_config()?;

        let interactive = std::io::stdin().is_terminal() && std::io::stdout().is_terminal();
        if config.prompt.fancy && interactive {
            self.execute_with(&config, &mut TermPrompt::new())
        } else {
            self.execute_with(&config, &mut LinePrompt::stdio())
        }
    }

    /// Execute the command with a given configuration and prompt
    ///
    /// # Errors
    ///
    /// Same as [`GenerateCommand::execute`].
    pub fn execute_with(
        &self,
        config: &GentoolConfig,
        prompt: &mut dyn Prompt,
    ) -> Result<GenerationReport> {
        let (gen_type, name) = collect_type_and_name(
            prompt,
            self.gen_type,
            self.name.as_deref(),
            config.prompt.max_attempts,
        )?;

        generating_bar(&config.progress)?;

        let args = Args::new(gen_type, &name, &self.src_dir, &self.gen_dir)?;
        println!(
            "\n{} {} {}",
            style("Generating").green().bold(),
            style(gen_type.label()).bold(),
            style(args.domain_name()).cyan().bold()
        );

        let generator = Generator::new(args, &config.output);
        debug!(target_dir = %generator.target_dir().display(), "Resolved target directory");

        let mut observer = ConsoleObserver::new()?;
        let result = generator.run(&mut observer);
        observer.finish();

        let report = result.with_context(|| {
            format!(
                "Failed to generate {} from {}",
                gen_type.label(),
                self.src_dir.display()
            )
        })?;

        print_success(&report);
        Ok(report)
    }

    /// Load configuration and apply command line overrides
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration source is invalid.
    pub fn load_config(&self) -> Result<GentoolConfig> {
        let mut config = GentoolConfig::load(self.config.as_deref())
            .context("Failed to load configuration")?;
        self.apply_overrides(&mut config);
        Ok(config)
    }

    /// Apply command line flags on top of loaded configuration
    pub fn apply_overrides(&self, config: &mut GentoolConfig) {
        if self.no_staging {
            config.output.staging = false;
        }
        if let Some(delay_ms) = self.progress_delay_ms {
            config.progress.delay_ms = delay_ms;
        }
    }
}

fn print_success(report: &GenerationReport) {
    println!();
    println!("{}", style("✓ Completed!").green().bold());
    println!();
    println!(
        "  {} {}",
        style("Output:").bold(),
        style(report.output_dir.display()).cyan()
    );
    println!(
        "  {} copied, {} renamed, {} rewritten",
        report.files_copied, report.stats.renamed, report.stats.rewritten
    );
    if report.stats.skipped_binary > 0 {
        println!(
            "  {}",
            style(format!(
                "{} non-text files copied without content replacement",
                report.stats.skipped_binary
            ))
            .yellow()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides() {
        let mut cmd = GenerateCommand::new(PathBuf::from("src"), PathBuf::from("out"));
        cmd.no_staging = true;
        cmd.progress_delay_ms = Some(0);

        let mut config = GentoolConfig::default();
        cmd.apply_overrides(&mut config);
        assert!(!config.output.staging);
        assert_eq!(config.progress.delay_ms, 0);
        assert!(!config.progress.is_visible());
    }

    #[test]
    fn test_no_overrides_keep_config() {
        let cmd = GenerateCommand::new(PathBuf::from("src"), PathBuf::from("out"));
        let mut config = GentoolConfig::default();
        cmd.apply_overrides(&mut config);
        assert_eq!(config, GentoolConfig::default());
    }
}
