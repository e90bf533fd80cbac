//! Parsing many independent documents.

use crate::error::{ParseResult, ReportError};
use crate::lines::LineStream;
use crate::options::ParseOptions;
use crate::record::ParsedReport;

/// Outcome of one document in a batch.
pub type DocumentOutcome = Result<ParseResult<ParsedReport>, ReportError>;

/// Parse every document on the rayon thread pool, keeping one outcome per
/// input in input order.
///
/// A failing document does not stop the batch. Parsing shares no state
/// between documents.
#[cfg(feature = "parallel")]
pub fn parse_batch(documents: &[LineStream], options: &ParseOptions) -> Vec<DocumentOutcome> {
    use rayon::prelude::*;
    documents
        .par_iter()
        .map(|lines| crate::parse_report(lines, options))
        .collect()
}

/// Parse every document, keeping one outcome per input in input order.
///
/// A failing document does not stop the batch.
#[cfg(not(feature = "parallel"))]
pub fn parse_batch(documents: &[LineStream], options: &ParseOptions) -> Vec<DocumentOutcome> {
    documents
        .iter()
        .map(|lines| crate::parse_report(lines, options))
        .collect()
}
