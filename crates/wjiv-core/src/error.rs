//! Error and warning types for report parsing.
//!
//! Provides [`ReportError`] for the few conditions that stop a document from
//! producing a record, [`ParseWarning`] for fields that were skipped or
//! degraded, and [`ParseResult`] for pairing a value with collected warnings.

use std::fmt;

use thiserror::Error;

/// Fatal errors for a single document.
///
/// Missing sections, tests and labels are not errors; they surface as
/// [`ParseWarning`]s instead.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The line stream cannot hold the fixed header lines.
    #[error("report has {lines} lines, at least {required} are required")]
    TooShort {
        /// Number of lines in the stream.
        lines: usize,
        /// Minimum number of lines needed.
        required: usize,
    },

    /// The field used to join records across documents is absent or empty.
    #[error("identity field '{field}' is missing or empty")]
    MissingIdentity {
        /// Name of the identity header field.
        field: String,
    },

    /// No language discriminator matched and no fallback is configured.
    #[error("could not classify the report language")]
    UnclassifiedLanguage,

    /// A warning was escalated because strict mode is enabled.
    #[error("strict mode: {0}")]
    Strict(String),

    /// Error reading the extracted line file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Machine-readable warning code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WarningCode {
    /// A header label was not found on its expected line.
    MissingHeaderLabel,
    /// The age value did not have the "years, months" shape.
    MalformedAge,
    /// The date of testing had no leading token.
    MalformedDate,
    /// A section anchor was not present in the document.
    MissingAnchor,
    /// A test from the language profile has no row in the score table.
    MissingTest,
    /// Token and metric counts differ on a score row.
    MetricCountMismatch,
    /// A field name was produced twice; the first value was kept.
    DuplicateField,
}

impl WarningCode {
    /// Returns the string tag for this warning code.
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningCode::MissingHeaderLabel => "MISSING_HEADER_LABEL",
            WarningCode::MalformedAge => "MALFORMED_AGE",
            WarningCode::MalformedDate => "MALFORMED_DATE",
            WarningCode::MissingAnchor => "MISSING_ANCHOR",
            WarningCode::MissingTest => "MISSING_TEST",
            WarningCode::MetricCountMismatch => "METRIC_COUNT_MISMATCH",
            WarningCode::DuplicateField => "DUPLICATE_FIELD",
        }
    }

    /// Whether this code only records that something was not present.
    pub fn is_absence(&self) -> bool {
        matches!(
            self,
            WarningCode::MissingHeaderLabel | WarningCode::MissingAnchor | WarningCode::MissingTest
        )
    }
}

impl fmt::Display for WarningCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-fatal degradation encountered while parsing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseWarning {
    /// Machine-readable warning code.
    pub code: WarningCode,
    /// Human-readable description.
    pub description: String,
    /// Line index the warning refers to, if any.
    pub line: Option<usize>,
}

impl ParseWarning {
    /// Create a warning without line context.
    pub fn new(code: WarningCode, description: impl Into<String>) -> Self {
        Self {
            code,
            description: description.into(),
            line: None,
        }
    }

    /// Create a warning tied to a line index.
    pub fn on_line(code: WarningCode, description: impl Into<String>, line: usize) -> Self {
        Self {
            code,
            description: description.into(),
            line: Some(line),
        }
    }
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.description)?;
        if let Some(line) = self.line {
            write!(f, " (line {line})")?;
        }
        Ok(())
    }
}

/// Result wrapper that pairs a value with collected warnings.
#[derive(Debug, Clone)]
pub struct ParseResult<T> {
    /// The extracted value.
    pub value: T,
    /// Warnings collected during extraction.
    pub warnings: Vec<ParseWarning>,
}

impl<T> ParseResult<T> {
    /// Create a result with no warnings.
    pub fn ok(value: T) -> Self {
        Self {
            value,
            warnings: Vec::new(),
        }
    }

    /// Create a result with warnings.
    pub fn with_warnings(value: T, warnings: Vec<ParseWarning>) -> Self {
        Self { value, warnings }
    }

    /// Returns true if there are no warnings.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Transform the value while preserving warnings.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ParseResult<U> {
        ParseResult {
            value: f(self.value),
            warnings: self.warnings,
        }
    }
}
