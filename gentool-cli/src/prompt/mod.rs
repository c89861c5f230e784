//! Interactive input of the generation type and domain name
//!
//! Bad input restarts the whole prompt (type, then name) in a bounded loop.
//! Two backends are available:
//! - [`LinePrompt`]: numbered menu read line by line from any reader
//! - [`TermPrompt`]: arrow-key menu for interactive terminals

use std::io::{self, BufRead, Write};

use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use gentool::error::{GenError, Result};
use gentool::generation::{validate_domain_name, GenerationType};
use tracing::debug;

/// Source of the user's choices
pub trait Prompt {
    /// Ask which of `types` to generate
    ///
    /// # Errors
    ///
    /// [`GenError::InputParse`] for unusable input, [`GenError::Console`] if
    /// the console cannot be read.
    fn select_type(&mut self, types: &[GenerationType]) -> Result<GenerationType>;

    /// Ask for the domain name
    ///
    /// # Errors
    ///
    /// Same as [`Prompt::select_type`].
    fn input_name(&mut self, gen_type: GenerationType) -> Result<String>;

    /// Tell the user their input was rejected and the prompt restarts
    ///
    /// # Errors
    ///
    /// [`GenError::Console`] if the console cannot be written.
    fn wrong_input(&mut self, err: &GenError) -> Result<()>;
}

/// Parse a 1-based menu selection into a 0-based index
///
/// # Errors
///
/// Returns [`GenError::InputParse`] for non-numeric input, zero, or a number
/// greater than `count`.
pub fn parse_selection(input: &str, count: usize) -> Result<usize> {
    let input = input.trim();
    let number: usize = input
        .parse()
        .map_err(|_| GenError::InputParse(format!("'{input}' is not a number")))?;

    if number == 0 || number > count {
        return Err(GenError::InputParse(format!(
            "{number} is not between 1 and {count}"
        )));
    }
    Ok(number - 1)
}

/// Collect the generation type and domain name, re-prompting on bad input
///
/// Values already known (e.g. from command line flags) are not asked for.
/// At most `max_attempts` rounds are made (at least one).
///
/// # Errors
///
/// - [`GenError::TooManyAttempts`] once the attempts are used up
/// - [`GenError::InvalidArgument`] if a preset name is unusable
/// - [`GenError::Console`] if the console fails
pub fn collect_type_and_name(
    prompt: &mut dyn Prompt,
    preset_type: Option<GenerationType>,
    preset_name: Option<&str>,
    max_attempts: u32,
) -> Result<(GenerationType, String)> {
    if let Some(name) = preset_name {
        validate_domain_name(name)?;
    }
    if let (Some(gen_type), Some(name)) = (preset_type, preset_name) {
        return Ok((gen_type, name.to_string()));
    }

    let max_attempts = max_attempts.max(1);
    for attempt in 1..=max_attempts {
        match ask_once(prompt, preset_type, preset_name) {
            Ok(answer) => return Ok(answer),
            Err(err) if err.is_recoverable_input() => {
                debug!(attempt, error = %err, "Rejected input");
                prompt.wrong_input(&err)?;
            }
            Err(err) => return Err(err),
        }
    }

    Err(GenError::TooManyAttempts(max_attempts))
}

fn ask_once(
    prompt: &mut dyn Prompt,
    preset_type: Option<GenerationType>,
    preset_name: Option<&str>,
) -> Result<(GenerationType, String)> {
    let gen_type = match preset_type {
        Some(gen_type) => gen_type,
        None => prompt.select_type(&GenerationType::ALL)?,
    };

    let name = match preset_name {
        Some(name) => name.to_string(),
        None => {
            let name = prompt.input_name(gen_type)?;
            validate_domain_name(&name).map_err(|e| GenError::InputParse(e.to_string()))?;
            name
        }
    };

    Ok((gen_type, name))
}

/// Numbered menu over any line reader and writer
pub struct LinePrompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    /// Create a prompt reading answers from `reader` and writing questions to `writer`
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consume the prompt, returning the writer
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self.reader.read_line(&mut line).map_err(GenError::Console)?;
        if read == 0 {
            return Err(GenError::Console(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            )));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl LinePrompt<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on the process's stdin and stdout
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn select_type(&mut self, types: &[GenerationType]) -> Result<GenerationType> {
        writeln!(self.writer, "\nWhat do you wanna generate?").map_err(GenError::Console)?;
        for (i, gen_type) in types.iter().enumerate() {
            writeln!(self.writer, "{}. {gen_type}", i + 1).map_err(GenError::Console)?;
        }
        writeln!(self.writer, "\nInput number: ").map_err(GenError::Console)?;
        self.writer.flush().map_err(GenError::Console)?;

        let line = self.read_line()?;
        let index = parse_selection(&line, types.len())?;
        Ok(types[index])
    }

    fn input_name(&mut self, gen_type: GenerationType) -> Result<String> {
        writeln!(self.writer, "Name your {}:", gen_type.label()).map_err(GenError::Console)?;
        self.writer.flush().map_err(GenError::Console)?;
        self.read_line()
    }

    fn wrong_input(&mut self, err: &GenError) -> Result<()> {
        writeln!(
            self.writer,
            "\n{} {}",
            style(err).red(),
            style("Let's start again..").yellow()
        )
        .map_err(GenError::Console)
    }
}

/// Arrow-key menu and validated text input for interactive terminals
pub struct TermPrompt {
    theme: ColorfulTheme,
}

impl TermPrompt {
    /// Create a terminal prompt with the colorful theme
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TermPrompt {
    fn default() -> Self {
        Self::new()
    }
}

fn dialoguer_error(err: dialoguer::Error) -> GenError {
    GenError::Console(io::Error::other(err))
}

impl Prompt for TermPrompt {
    fn select_type(&mut self, types: &[GenerationType]) -> Result<GenerationType> {
        let selection = Select::with_theme(&self.theme)
            .with_prompt("What do you wanna generate?")
            .items(types)
            .default(0)
            .interact_opt()
            .map_err(dialoguer_error)?;

        selection
            .map(|index| types[index])
            .ok_or_else(|| GenError::InputParse("no generation type selected".to_string()))
    }

    fn input_name(&mut self, gen_type: GenerationType) -> Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(format!("Name your {}", gen_type.label()))
            .validate_with(|input: &String| {
                validate_domain_name(input)
                    .map(|_| ())
                    .map_err(|e| e.to_string())
            })
            .interact_text()
            .map_err(dialoguer_error)
    }

    fn wrong_input(&mut self, err: &GenError) -> Result<()> {
        eprintln!("{} {}", style(err).red(), style("Let's start again..").yellow());
        Ok(())
    }
}
