//! Language variants and their fixed constant bundles.

use std::fmt;

/// Header line that opens the score table in both variants.
pub const SCORE_TABLE_HEADER: &str = "TABLE OF SCORES";

/// The two report language variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Language {
    English,
    Spanish,
}

impl Language {
    /// Non-default variants in detection order.
    pub const DETECTABLE: [Language; 1] = [Language::Spanish];

    /// Substring that identifies this variant anywhere in the document.
    ///
    /// English is the default layout and has no discriminator.
    pub fn discriminator(self) -> Option<&'static str> {
        match self {
            Language::English => None,
            Language::Spanish => Some("Batería"),
        }
    }

    /// Tag written to the record and used as the field-name prefix.
    pub fn as_str(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
        }
    }

    pub fn profile(self) -> &'static LanguageProfile {
        match self {
            Language::English => &ENGLISH,
            Language::Spanish => &SPANISH,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three observation subsections, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObservationSection {
    Cognitive,
    Achievement,
    Qualitative,
}

impl ObservationSection {
    pub const ALL: [ObservationSection; 3] = [
        ObservationSection::Cognitive,
        ObservationSection::Achievement,
        ObservationSection::Qualitative,
    ];

    /// Snake-case label used to build observation field names.
    pub fn label(self) -> &'static str {
        match self {
            ObservationSection::Cognitive => "cognitive_obs",
            ObservationSection::Achievement => "achievement_obs",
            ObservationSection::Qualitative => "qualitative_obs",
        }
    }

    fn index(self) -> usize {
        match self {
            ObservationSection::Cognitive => 0,
            ObservationSection::Achievement => 1,
            ObservationSection::Qualitative => 2,
        }
    }
}

/// Language-specific names and headers that parameterize parsing.
#[derive(Debug)]
pub struct LanguageProfile {
    pub language: Language,
    /// Recognized test names, in scan order.
    pub tests: &'static [&'static str],
    /// Metric columns of the score table, in column order.
    pub metrics: &'static [&'static str],
    /// Proficiency labels that contain internal whitespace.
    pub proficiency_levels: &'static [&'static str],
    /// Exact header lines of the cognitive, achievement and qualitative sections.
    pub section_headers: [&'static str; 3],
    /// Prefix shared by every section header; marks entry into a new section.
    pub generic_header: &'static str,
}

impl LanguageProfile {
    pub fn section_header(&self, section: ObservationSection) -> &'static str {
        self.section_headers[section.index()]
    }
}

static ENGLISH: LanguageProfile = LanguageProfile {
    language: Language::English,
    tests: &[
        "VISUAL PROCESSING (Gv)",
        "Story Recall",
        "Visualization",
        "Numbers Reversed",
        "Picture Recognition",
        "Pair Cancellation",
        "Applied Problems",
    ],
    metrics: &["W", "AE", "RPI", "Proficiency", "SS 95% Band", "PR", "T"],
    proficiency_levels: &[
        "Very Advanced",
        "Average to Advanced",
        "Limited to Average",
        "Very Limited",
        "Extremely Limited",
    ],
    section_headers: [
        "Woodcock-Johnson IV Tests of Cognitive Abilities Test Session Observations",
        "Woodcock-Johnson IV Tests of Achievement Form A and Extended Test Session Observations",
        "Woodcock-Johnson IV Tests of Achievement Form A and Extended Qualitative Observations",
    ],
    generic_header: "Woodcock-Johnson IV Tests",
};

static SPANISH: LanguageProfile = LanguageProfile {
    language: Language::Spanish,
    tests: &[
        "Rememoración de cuentos",
        "Visualización",
        "Inversión de números",
        "Cancelación de pares",
        "Problemas aplicados",
    ],
    metrics: &["W", "AE", "RPI", "SS 95% Band"],
    proficiency_levels: &[],
    section_headers: [
        "Batería IV Woodcock-Muñoz Pruebas de habilidades cognitivas Test Session Observations",
        "Batería IV Woodcock-Muñoz Pruebas de aprovechamiento Test Session Observations",
        "Batería IV Woodcock-Muñoz Pruebas de aprovechamiento Qualitative Observations",
    ],
    generic_header: "Batería IV Woodcock-Muñoz Pruebas",
};
