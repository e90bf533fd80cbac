//! Layout detection: language variant and section anchors.

use tracing::debug;

use crate::error::{ParseResult, ParseWarning, ReportError, WarningCode};
use crate::lines::LineStream;
use crate::options::ParseOptions;
use crate::profile::{Language, LanguageProfile, ObservationSection, SCORE_TABLE_HEADER};

/// Line indices where each section's content begins.
///
/// Each anchor is the index immediately after its header line. An absent
/// anchor means the section is not present in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionAnchors {
    pub scores: Option<usize>,
    pub cognitive: Option<usize>,
    pub achievement: Option<usize>,
    pub qualitative: Option<usize>,
}

impl SectionAnchors {
    pub fn observation(&self, section: ObservationSection) -> Option<usize> {
        match section {
            ObservationSection::Cognitive => self.cognitive,
            ObservationSection::Achievement => self.achievement,
            ObservationSection::Qualitative => self.qualitative,
        }
    }

    fn observation_mut(&mut self, section: ObservationSection) -> &mut Option<usize> {
        match section {
            ObservationSection::Cognitive => &mut self.cognitive,
            ObservationSection::Achievement => &mut self.achievement,
            ObservationSection::Qualitative => &mut self.qualitative,
        }
    }

    /// First observation line; absent sections count as `last_line`.
    pub fn first_observation_line(&self, last_line: usize) -> usize {
        ObservationSection::ALL
            .iter()
            .map(|&s| self.observation(s).unwrap_or(last_line))
            .min()
            .unwrap_or(last_line)
    }
}

/// Everything the extractors need to know about one document's layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentLayout {
    pub language: Language,
    pub anchors: SectionAnchors,
    /// Exclusive end of the score table range.
    pub end_of_scores_line: usize,
    pub last_line: usize,
}

impl DocumentLayout {
    pub fn profile(&self) -> &'static LanguageProfile {
        self.language.profile()
    }
}

/// Classify the document's language variant.
///
/// The first line containing a variant discriminator selects that variant;
/// otherwise the configured fallback applies.
pub fn detect_language(lines: &LineStream, options: &ParseOptions) -> Result<Language, ReportError> {
    for line in lines.iter() {
        for language in Language::DETECTABLE {
            if language.discriminator().is_some_and(|d| line.contains(d)) {
                return Ok(language);
            }
        }
    }
    options
        .fallback_language
        .ok_or(ReportError::UnclassifiedLanguage)
}

/// Record the anchor after each verbatim header line.
///
/// When a header occurs more than once, the last occurrence wins.
pub fn find_anchors(lines: &LineStream, profile: &LanguageProfile) -> SectionAnchors {
    let mut anchors = SectionAnchors::default();
    for (i, line) in lines.iter().enumerate() {
        if line == SCORE_TABLE_HEADER {
            anchors.scores = Some(i + 1);
            continue;
        }
        for section in ObservationSection::ALL {
            if line == profile.section_header(section) {
                *anchors.observation_mut(section) = Some(i + 1);
            }
        }
    }
    anchors
}

/// Detect the language and anchors of a document.
pub fn detect_layout(
    lines: &LineStream,
    options: &ParseOptions,
) -> Result<ParseResult<DocumentLayout>, ReportError> {
    let language = detect_language(lines, options)?;
    let profile = language.profile();
    let anchors = find_anchors(lines, profile);
    let last_line = lines.last_index();

    // English scores stop where observations begin; Spanish scores run to the end.
    let end_of_scores_line = match language {
        Language::English => anchors.first_observation_line(last_line),
        Language::Spanish => last_line,
    };

    debug!(
        %language,
        scores = ?anchors.scores,
        cognitive = ?anchors.cognitive,
        achievement = ?anchors.achievement,
        qualitative = ?anchors.qualitative,
        end_of_scores_line,
        "detected layout"
    );

    let mut warnings = Vec::new();
    if anchors.scores.is_none() {
        warnings.push(ParseWarning::new(
            WarningCode::MissingAnchor,
            format!("no '{SCORE_TABLE_HEADER}' header"),
        ));
    }
    for section in ObservationSection::ALL {
        if anchors.observation(section).is_none() {
            warnings.push(ParseWarning::new(
                WarningCode::MissingAnchor,
                format!("no {} header", section.label()),
            ));
        }
    }

    Ok(ParseResult::with_warnings(
        DocumentLayout {
            language,
            anchors,
            end_of_scores_line,
            last_line,
        },
        warnings,
    ))
}
