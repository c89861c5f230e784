//! Console progress output

use std::path::Path;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use console::style;
use gentool::config::ProgressSettings;
use gentool::pipeline::{GenerationObserver, Phase};
use indicatif::{ProgressBar, ProgressStyle};

/// Show the cosmetic "Generating" bar
///
/// Does nothing when the settings disable it.
pub fn generating_bar(settings: &ProgressSettings) -> Result<()> {
    if !settings.is_visible() {
        return Ok(());
    }

    let bar = ProgressBar::new(settings.steps);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{msg} {bar:50.cyan/dim}")
            .context("Failed to set progress style")?
            .progress_chars("- "),
    );
    bar.set_message("Thanks. Generating");

    let delay = Duration::from_millis(settings.delay_ms);
    for _ in 0..settings.steps {
        bar.inc(1);
        thread::sleep(delay);
    }
    bar.finish_and_clear();

    Ok(())
}

/// Observer driving a spinner and printing renamed entries
pub struct ConsoleObserver {
    spinner: ProgressBar,
}

impl ConsoleObserver {
    /// Create the observer and start its spinner
    pub fn new() -> Result<Self> {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Failed to set progress style")?,
        );
        spinner.enable_steady_tick(Duration::from_millis(100));

        Ok(Self { spinner })
    }

    /// Stop and clear the spinner
    pub fn finish(&self) {
        self.spinner.finish_and_clear();
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}

impl GenerationObserver for ConsoleObserver {
    fn phase(&mut self, phase: Phase) {
        self.spinner.set_message(format!("{phase}..."));
    }

    fn renamed(&mut self, from: &Path, to: &Path) {
        self.spinner.println(format!(
            "  {} {} {} {}",
            style("✓").green(),
            style(display_name(from)).dim(),
            style("→").dim(),
            style(display_name(to)).cyan()
        ));
    }

    fn rewritten(&mut self, path: &Path) {
        self.spinner
            .set_message(format!("Replaced contents of {}", display_name(path)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_uses_file_name() {
        assert_eq!(
            display_name(Path::new("/tmp/a/ExampleApplication.java")),
            "ExampleApplication.java"
        );
    }

    #[test]
    fn test_disabled_bar_returns_immediately() {
        let settings = ProgressSettings {
            enabled: false,
            ..ProgressSettings::default()
        };
        generating_bar(&settings).unwrap();
    }

    #[test]
    fn test_observer_finish_clears_spinner() {
        let mut observer = ConsoleObserver::new().unwrap();
        observer.phase(Phase::Replacing);
        observer.rewritten(Path::new("a.txt"));
        observer.finish();
        assert!(observer.spinner.is_finished());
    }
}
