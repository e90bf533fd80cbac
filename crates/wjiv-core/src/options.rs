//! Parsing options and layout constants.

use crate::profile::Language;

/// Options controlling report parsing.
///
/// The footer constants are empirical properties of the report layout, not
/// derived from the document, so they live here rather than in the scanner.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Line-start prefixes that mark a page footer (default: "1 of", "2 of", "3 of").
    pub footer_markers: Vec<String>,
    /// Lines swallowed after a footer marker (default: 4).
    pub footer_skip_lines: usize,
    /// Offset from an entry line to the first line after the next page's
    /// boilerplate, used for spillover across a page break (default: 6).
    pub footer_lookahead: usize,
    /// Lead-in phrases of the two-line "poor sample" paragraph.
    pub poor_sample_leads: Vec<String>,
    /// Observation type recorded for a merged poor-sample paragraph (default: "Poor Sample").
    pub poor_sample_label: String,
    /// Header field the join identity is derived from (default: "Name").
    pub id_field: String,
    /// Language used when no discriminator matches (default: English).
    /// `None` makes classification fail closed.
    pub fallback_language: Option<Language>,
    /// When true, the first collected warning is escalated to an error (default: false).
    pub strict: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            footer_markers: vec!["1 of".into(), "2 of".into(), "3 of".into()],
            footer_skip_lines: 4,
            footer_lookahead: 6,
            poor_sample_leads: vec![
                "The results of the WJ IV Tests of".into(),
                "The results of the Batería IV Woodcock-Muñoz Pruebas".into(),
            ],
            poor_sample_label: "Poor Sample".into(),
            id_field: "Name".into(),
            fallback_language: Some(Language::English),
            strict: false,
        }
    }
}

impl ParseOptions {
    /// Whether `line` starts with one of the footer markers.
    pub fn is_footer(&self, line: &str) -> bool {
        self.footer_markers
            .iter()
            .any(|marker| line.starts_with(marker.as_str()))
    }

    /// Whether `line` opens a poor-sample paragraph.
    pub fn is_poor_sample_lead(&self, line: &str) -> bool {
        self.poor_sample_leads
            .iter()
            .any(|lead| line.starts_with(lead.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_report_layout() {
        let opts = ParseOptions::default();
        assert_eq!(opts.footer_skip_lines, 4);
        assert_eq!(opts.footer_lookahead, 6);
        assert_eq!(opts.id_field, "Name");
        assert_eq!(opts.fallback_language, Some(Language::English));
        assert!(!opts.strict);
    }

    #[test]
    fn footer_markers_are_line_start_prefixes() {
        let opts = ParseOptions::default();
        assert!(opts.is_footer("2 of 3"));
        assert!(!opts.is_footer("Page 2 of 3"));
        assert!(!opts.is_footer("4 of 5"));
    }

    #[test]
    fn poor_sample_leads() {
        let opts = ParseOptions::default();
        assert!(opts.is_poor_sample_lead("The results of the WJ IV Tests of Cognitive"));
        assert!(opts.is_poor_sample_lead(
            "The results of the Batería IV Woodcock-Muñoz Pruebas de aprovechamiento"
        ));
        assert!(!opts.is_poor_sample_lead("Conversational Proficiency: Typical"));
    }
}
