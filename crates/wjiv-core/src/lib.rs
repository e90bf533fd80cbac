//! wjiv-core: parsing engine for flattened WJ IV assessment reports.
//!
//! Turns the line sequence extracted from an English or Spanish score
//! report into a [`Record`] of header fields, per-test metric scores and
//! per-section observations. Text extraction, export and cross-document
//! merging live outside this crate.

pub mod batch;
pub mod error;
pub mod header;
pub mod layout;
pub mod lines;
pub mod observations;
pub mod options;
pub mod profile;
pub mod record;
pub mod scores;

pub use batch::{DocumentOutcome, parse_batch};
pub use error::{ParseResult, ParseWarning, ReportError, WarningCode};
pub use header::{ID_FIELD, LANGUAGE_FIELD};
pub use layout::{DocumentLayout, SectionAnchors, detect_layout};
pub use lines::LineStream;
pub use observations::{Observation, ObservationScanner, ScanState};
pub use options::ParseOptions;
pub use profile::{Language, LanguageProfile, ObservationSection};
pub use record::{ParsedReport, Record};

use tracing::{debug, warn};

/// Parse one document into its record.
///
/// Fails only when the stream is too short for the header block, the
/// identity field is missing, the language cannot be classified, or strict
/// mode escalates a warning. Everything else degrades to omitted fields
/// reported in [`ParseResult::warnings`].
pub fn parse_report(
    lines: &LineStream,
    options: &ParseOptions,
) -> Result<ParseResult<ParsedReport>, ReportError> {
    if lines.len() < header::MIN_LINES {
        return Err(ReportError::TooShort {
            lines: lines.len(),
            required: header::MIN_LINES,
        });
    }

    let ParseResult {
        value: layout,
        mut warnings,
    } = detect_layout(lines, options)?;

    let mut record = header::extract_headers(lines, layout.language, &mut warnings);
    header::assign_identity(&mut record, &options.id_field)?;

    let scores = scores::parse_scores(lines, &layout, &mut warnings);
    let observations = observations::parse_observations(lines, &layout, options, &mut warnings);
    let mut rejected = record.merge(scores);
    rejected.extend(record.merge(observations));
    for name in rejected {
        warnings.push(ParseWarning::new(
            WarningCode::DuplicateField,
            format!("'{name}' already recorded"),
        ));
    }

    for w in &warnings {
        if w.code.is_absence() {
            debug!(warning = %w, "partial extraction");
        } else {
            warn!(warning = %w, "partial extraction");
        }
    }
    if options.strict {
        if let Some(first) = warnings.first() {
            return Err(ReportError::Strict(first.to_string()));
        }
    }

    Ok(ParseResult::with_warnings(
        ParsedReport {
            language: layout.language,
            record,
        },
        warnings,
    ))
}

/// Split extracted text into lines and parse it.
pub fn parse_text(
    text: &str,
    options: &ParseOptions,
) -> Result<ParseResult<ParsedReport>, ReportError> {
    parse_report(&LineStream::from_text(text), options)
}
