//! Header field extraction from the two-column block at the top of a report.

use tracing::debug;

use crate::error::{ParseWarning, ReportError, WarningCode};
use crate::lines::LineStream;
use crate::profile::Language;
use crate::record::Record;

/// Field overwritten with the derived join identity.
pub const ID_FIELD: &str = "ID";

/// Field holding the language tag.
pub const LANGUAGE_FIELD: &str = "Language";

/// `(line offset, first label, second label)` rows of the header block.
pub const HEADER_LINES: [(usize, &str, &str); 5] = [
    (1, "Name", "School"),
    (2, "Date of Birth", "Teacher"),
    (3, "Age", "Grade"),
    (4, "Sex", "ID"),
    (5, "Date of Testing", "Examiners"),
];

/// Fewest lines a report may have: a title and the first header row.
pub const MIN_LINES: usize = 2;

/// Text between the first `"{first}:"` and the next `"{second}:"`, trimmed.
fn first_column(line: &str, first: &str, second: &str) -> Option<String> {
    let (_, rest) = line.split_once(&format!("{first}:"))?;
    let (value, _) = rest.split_once(&format!("{second}:"))?;
    Some(value.trim().to_string())
}

/// Text after the first `"{second}:"` to end of line, trimmed.
fn second_column(line: &str, second: &str) -> Option<String> {
    let (_, value) = line.split_once(&format!("{second}:"))?;
    Some(value.trim().to_string())
}

fn leading_number(token: &str) -> Option<u32> {
    let digits: String = token
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Convert `"Y, M"` (years and months as leading digits) to `"<12*Y+M> Months"`.
pub fn normalize_age(value: &str) -> Option<String> {
    let mut parts = value.split(',');
    let years = leading_number(parts.next()?)?;
    let months = leading_number(parts.next()?)?;
    let total = years.checked_mul(12)?.checked_add(months)?;
    Some(format!("{total} Months"))
}

/// Keep only the first whitespace-delimited token of a date.
pub fn normalize_test_date(value: &str) -> Option<String> {
    value.split_whitespace().next().map(str::to_string)
}

fn normalize_first(label: &str, value: String, line: usize, warnings: &mut Vec<ParseWarning>) -> Option<String> {
    match label {
        "Age" => {
            let age = normalize_age(&value);
            if age.is_none() {
                warnings.push(ParseWarning::on_line(
                    WarningCode::MalformedAge,
                    format!("age '{value}' is not 'years, months'"),
                    line,
                ));
            }
            age
        }
        "Date of Testing" => {
            let date = normalize_test_date(&value);
            if date.is_none() {
                warnings.push(ParseWarning::on_line(
                    WarningCode::MalformedDate,
                    "date of testing is empty",
                    line,
                ));
            }
            date
        }
        _ => Some(value),
    }
}

/// Extract the header block and language tag into a fresh record.
///
/// Labels missing from their expected line are omitted and reported.
pub fn extract_headers(
    lines: &LineStream,
    language: Language,
    warnings: &mut Vec<ParseWarning>,
) -> Record {
    let mut record = Record::new();

    for (offset, first, second) in HEADER_LINES {
        let Some(text) = lines.get(offset) else {
            warnings.push(ParseWarning::on_line(
                WarningCode::MissingHeaderLabel,
                format!("header line for '{first}' and '{second}' is past the end"),
                offset,
            ));
            continue;
        };

        match first_column(text, first, second) {
            Some(value) => {
                if let Some(value) = normalize_first(first, value, offset, warnings) {
                    record.insert(first, value);
                }
            }
            None => warnings.push(ParseWarning::on_line(
                WarningCode::MissingHeaderLabel,
                format!("label '{first}' not found"),
                offset,
            )),
        }

        match second_column(text, second) {
            Some(value) => {
                record.insert(second, value);
            }
            None => warnings.push(ParseWarning::on_line(
                WarningCode::MissingHeaderLabel,
                format!("label '{second}' not found"),
                offset,
            )),
        }
    }

    record.insert(LANGUAGE_FIELD, language.as_str());
    debug!(fields = record.len(), "extracted header fields");
    record
}

/// Leading run of word characters of `value`.
fn leading_word(value: &str) -> &str {
    let end = value
        .char_indices()
        .find(|(_, c)| !(c.is_alphanumeric() || *c == '_'))
        .map_or(value.len(), |(i, _)| i);
    &value[..end]
}

/// Overwrite [`ID_FIELD`] with the leading word of `id_field`.
pub fn assign_identity(record: &mut Record, id_field: &str) -> Result<(), ReportError> {
    let id = record
        .get(id_field)
        .map(leading_word)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ReportError::MissingIdentity {
            field: id_field.to_string(),
        })?;
    record.set(ID_FIELD, id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_header() -> LineStream {
        LineStream::from_iter([
            "Woodcock-Johnson IV Score Report",
            "Name: S1042 Smith, Jo School: Elm Street",
            "Date of Birth: 01/02/2017 Teacher: Ms. Park",
            "Age: 7 years, 3 months Grade: 2.1",
            "Sex: Female ID: 55",
            "Date of Testing: 03/14/2024 (Form A) Examiners: R. Diaz",
        ])
    }

    #[test]
    fn extracts_both_columns() {
        let mut warnings = Vec::new();
        let record = extract_headers(&sample_header(), Language::English, &mut warnings);
        assert!(warnings.is_empty(), "{warnings:?}");
        assert_eq!(record.get("Name"), Some("S1042 Smith, Jo"));
        assert_eq!(record.get("School"), Some("Elm Street"));
        assert_eq!(record.get("Teacher"), Some("Ms. Park"));
        assert_eq!(record.get("Grade"), Some("2.1"));
        assert_eq!(record.get("ID"), Some("55"));
        assert_eq!(record.get("Examiners"), Some("R. Diaz"));
        assert_eq!(record.get("Language"), Some("English"));
    }

    #[test]
    fn age_becomes_total_months() {
        assert_eq!(normalize_age("7, 3").as_deref(), Some("87 Months"));
        assert_eq!(normalize_age("0, 11").as_deref(), Some("11 Months"));
        assert_eq!(normalize_age("10 years, 2 months").as_deref(), Some("122 Months"));
    }

    #[test]
    fn malformed_age_is_omitted() {
        assert!(normalize_age("seven").is_none());
        assert!(normalize_age("7").is_none());

        let lines = LineStream::from_iter(["T", "Name: A School: B", "x", "Age: unknown Grade: 2"]);
        let mut warnings = Vec::new();
        let record = extract_headers(&lines, Language::English, &mut warnings);
        assert!(!record.contains("Age"));
        assert_eq!(record.get("Grade"), Some("2"));
        assert!(warnings.iter().any(|w| w.code == WarningCode::MalformedAge));
    }

    #[test]
    fn oversized_age_is_malformed() {
        assert!(normalize_age("4000000000, 1").is_none());
        assert!(normalize_age("357913941, 4294967295").is_none());

        let lines = LineStream::from_iter(["T", "x", "y", "Age: 999999999, 1 Grade: 2"]);
        let mut warnings = Vec::new();
        let record = extract_headers(&lines, Language::English, &mut warnings);
        assert!(!record.contains("Age"));
        assert_eq!(record.get("Grade"), Some("2"));
        assert!(
            warnings
                .iter()
                .any(|w| w.code == WarningCode::MalformedAge && w.line == Some(3))
        );
    }

    #[test]
    fn second_label_must_follow_first() {
        assert_eq!(first_column("School: B Name: A", "Name", "School"), None);
        assert_eq!(second_column("School: B Name: A", "School").as_deref(), Some("B Name: A"));
        assert_eq!(
            first_column("Name: A: x School: B", "Name", "School").as_deref(),
            Some("A: x")
        );
    }

    #[test]
    fn test_date_drops_annotation() {
        let mut warnings = Vec::new();
        let record = extract_headers(&sample_header(), Language::English, &mut warnings);
        assert_eq!(record.get("Date of Testing"), Some("03/14/2024"));
        assert_eq!(record.get("Age"), Some("87 Months"));
    }

    #[test]
    fn normalization_applies_to_first_column_only() {
        let lines = LineStream::from_iter([
            "T",
            "Name: A School: B",
            "Date of Birth: x Teacher: y",
            "Age: 1, 1 Grade: 3, 4",
        ]);
        let mut warnings = Vec::new();
        let record = extract_headers(&lines, Language::English, &mut warnings);
        assert_eq!(record.get("Grade"), Some("3, 4"));
    }

    #[test]
    fn missing_labels_are_absent_not_errors() {
        let lines = LineStream::from_iter(["T", "Name: A", "garbage"]);
        let mut warnings = Vec::new();
        let record = extract_headers(&lines, Language::Spanish, &mut warnings);
        assert!(!record.contains("Name"));
        assert!(!record.contains("Teacher"));
        assert_eq!(record.get("Language"), Some("Spanish"));
        assert!(warnings.iter().all(|w| w.code == WarningCode::MissingHeaderLabel));
    }

    #[test]
    fn identity_is_leading_word_of_name() {
        let mut warnings = Vec::new();
        let mut record = extract_headers(&sample_header(), Language::English, &mut warnings);
        assign_identity(&mut record, "Name").unwrap();
        assert_eq!(record.get("ID"), Some("S1042"));
    }

    #[test]
    fn identity_missing_is_an_error() {
        let mut record = Record::new();
        let err = assign_identity(&mut record, "Name").unwrap_err();
        assert!(matches!(err, ReportError::MissingIdentity { ref field } if field == "Name"));

        record.insert("Name", "  -- ");
        assert!(assign_identity(&mut record, "Name").is_err());
    }

    #[test]
    fn leading_word_handles_multibyte() {
        assert_eq!(leading_word("Muñoz-García"), "Muñoz");
        assert_eq!(leading_word("abc_1 def"), "abc_1");
    }
}
