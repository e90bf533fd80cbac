//! Score table parsing.
//!
//! Each score row starts with a test name followed by whitespace-separated
//! metric values. Two layout artifacts are folded away before tokenizing:
//! a confidence band printed as `"92 (88-96)"` belongs to one column, and
//! multi-word proficiency labels such as `"Very Limited"` are one value.

use regex::Regex;
use tracing::{debug, warn};

use crate::error::{ParseWarning, WarningCode};
use crate::layout::DocumentLayout;
use crate::lines::LineStream;
use crate::record::{Record, score_field_name};

/// Stands in for spaces inside protected proficiency labels.
const PLACEHOLDER: char = '_';

/// Whole-word matcher for multi-word proficiency labels.
///
/// Returns `None` when the profile has no such labels.
pub fn proficiency_matcher(levels: &[&str]) -> Option<Regex> {
    if levels.is_empty() {
        return None;
    }
    let alternation = levels
        .iter()
        .map(|level| regex::escape(level))
        .collect::<Vec<_>>()
        .join("|");
    match Regex::new(&format!(r"\b(?:{alternation})\b")) {
        Ok(re) => Some(re),
        Err(e) => {
            warn!(error = %e, "proficiency labels not protected");
            None
        }
    }
}

/// Split the remainder of a score row (test name already removed) into
/// display-form values, one per whitespace-separated column.
pub fn tokenize_row(remainder: &str, proficiency: Option<&Regex>) -> Vec<String> {
    let joined = remainder.replace(" (", "(");
    let protected = match proficiency {
        Some(re) => re
            .replace_all(&joined, |caps: &regex::Captures<'_>| {
                caps[0].replace(' ', &PLACEHOLDER.to_string())
            })
            .into_owned(),
        None => joined,
    };
    protected
        .split_whitespace()
        .map(|token| {
            token
                .replace(PLACEHOLDER, " ")
                .replace('(', " (")
                .trim()
                .to_string()
        })
        .collect()
}

/// Pair row values with metric names positionally, stopping at the shorter.
pub fn pair_metrics<'a>(
    metrics: &'a [&'a str],
    values: &'a [String],
) -> impl Iterator<Item = (&'a str, &'a str)> {
    metrics
        .iter()
        .copied()
        .zip(values.iter().map(String::as_str))
}

/// Parse every profile test found in the score table range.
///
/// Only the first row starting with a test name is used. Tests without a
/// row are skipped.
pub fn parse_scores(
    lines: &LineStream,
    layout: &DocumentLayout,
    warnings: &mut Vec<ParseWarning>,
) -> Record {
    let mut record = Record::new();
    let Some(start) = layout.anchors.scores else {
        return record;
    };

    let profile = layout.profile();
    let proficiency = proficiency_matcher(profile.proficiency_levels);
    let rows = lines.range(start, layout.end_of_scores_line);

    for &test in profile.tests {
        let Some((offset, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.starts_with(test))
        else {
            debug!(test, "test not in score table");
            warnings.push(ParseWarning::new(
                WarningCode::MissingTest,
                format!("no score row for '{test}'"),
            ));
            continue;
        };

        let values = tokenize_row(&row[test.len()..], proficiency.as_ref());
        if values.len() != profile.metrics.len() {
            warnings.push(ParseWarning::on_line(
                WarningCode::MetricCountMismatch,
                format!(
                    "'{test}' has {} values for {} metrics",
                    values.len(),
                    profile.metrics.len()
                ),
                start + offset,
            ));
        }

        for (metric, value) in pair_metrics(profile.metrics, &values) {
            record.insert(score_field_name(layout.language, test, metric), value);
        }
    }

    record
}
