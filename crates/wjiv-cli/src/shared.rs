use std::io::{self, IsTerminal, Read, Write};
use std::path::Path;

use wjiv_core::{LineStream, ParseOptions, ReportError};

use crate::cli::ParseArgs;

/// Read an extracted line file with user-friendly error messages.
///
/// A path of `-` reads stdin. Returns `Err(1)` with a message printed to
/// stderr if the file is missing or is not valid UTF-8.
pub fn read_lines(file: &Path) -> Result<LineStream, i32> {
    read_text(file).map(|text| LineStream::from_text(&text)).map_err(|e| {
        eprintln!("Error: {}: {e}", file.display());
        1
    })
}

fn read_text(file: &Path) -> Result<String, ReportError> {
    if file == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    if !file.exists() {
        return Err(ReportError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            "file not found",
        )));
    }
    Ok(std::fs::read_to_string(file)?)
}

/// Build parse options from command-line flags.
pub fn parse_options(args: &ParseArgs) -> ParseOptions {
    ParseOptions {
        id_field: args.id_field.clone(),
        strict: args.strict,
        footer_skip_lines: args.footer_skip,
        footer_lookahead: args.footer_lookahead,
        ..ParseOptions::default()
    }
}

/// A progress reporter that prints "Reading report N/M..." to stderr,
/// but only when stderr is connected to a TTY (terminal).
pub struct ProgressReporter {
    total: usize,
    is_tty: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter for `total` reports.
    pub fn new(total: usize) -> Self {
        Self {
            total,
            is_tty: io::stderr().is_terminal(),
        }
    }

    /// Report progress for report `current` (1-indexed).
    pub fn report(&self, current: usize) {
        if self.is_tty && self.total > 1 {
            eprint!("\rReading report {}/{}...", current, self.total);
            let _ = io::stderr().flush();
        }
    }

    /// Clear the progress line (if TTY).
    pub fn finish(&self) {
        if self.is_tty && self.total > 1 {
            eprint!("\r{}\r", " ".repeat(40));
            let _ = io::stderr().flush();
        }
    }
}
