//! Synthetic report fixtures shared by the integration tests.

#![allow(dead_code)]

use wjiv_core::{Language, LineStream, ObservationSection};

pub const ENGLISH_COGNITIVE: &str =
    "Woodcock-Johnson IV Tests of Cognitive Abilities Test Session Observations";
pub const ENGLISH_ACHIEVEMENT: &str =
    "Woodcock-Johnson IV Tests of Achievement Form A and Extended Test Session Observations";
pub const ENGLISH_QUALITATIVE: &str =
    "Woodcock-Johnson IV Tests of Achievement Form A and Extended Qualitative Observations";

fn header_block(title: &str) -> Vec<String> {
    [
        title,
        "Name: S1042 Smith, Jo School: Elm Street Elementary",
        "Date of Birth: 01/02/2017 Teacher: Ms. Park",
        "Age: 7 years, 3 months Grade: 2.1",
        "Sex: Female ID: 1042",
        "Date of Testing: 03/14/2024 (Form A) Examiners: R. Diaz",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Lines of a three-page English report.
pub fn english_lines() -> Vec<String> {
    let mut lines = header_block("Woodcock-Johnson IV Score Report");
    lines.extend(
        [
            "TABLE OF SCORES",
            "CLUSTER/Test W AE RPI Proficiency SS (95% Band) PR T",
            "VISUAL PROCESSING (Gv) 495 8-4 93/90 Average 104 (97-111) 60 53",
            "Story Recall 480 7-2 88/90 Average 95 (90-100) 37 47",
            "Visualization 490 8-0 91/90 Average to Advanced 101 (94-108) 52 51",
            "Numbers Reversed 470 6-9 70/90 Limited to Average 85 (80-90) 16 40",
            ENGLISH_COGNITIVE,
            "Conversational Proficiency: Typical for age",
            "Cooperation: Cooperative",
            "Activity Level: Seemed fidgety at times but",
            "remained seated",
            "2 of 3",
            "Name: S1042 Smith, Jo",
            "Date of Testing: 03/14/2024",
            "Woodcock-Johnson IV Score Report",
            "Form A",
            "Attention and Concentration: Typical",
            ENGLISH_ACHIEVEMENT,
            "The results of the WJ IV Tests of",
            "Achievement suggest caution: low effort.",
            "Response to Difficult Tasks: Usually persisted",
            ENGLISH_QUALITATIVE,
            "Applied Problems: Solved problems using fingers",
            "3 of 3",
            "Name: S1042 Smith, Jo",
            "Date of Testing: 03/14/2024",
            "Woodcock-Johnson IV Score Report",
            "Form A",
        ]
        .into_iter()
        .map(String::from),
    );
    lines
}

/// Lines of a two-page Spanish report; its score table sits at the end.
pub fn spanish_lines() -> Vec<String> {
    let profile = Language::Spanish.profile();
    let mut lines = header_block("Batería IV Woodcock-Muñoz Informe de puntuaciones");
    lines.extend(
        [
            profile.section_header(ObservationSection::Cognitive),
            "Conducta: Cooperativa",
            "Atención: Típica para su edad",
            profile.section_header(ObservationSection::Qualitative),
            "Problemas aplicados: Usó los dedos para contar",
            profile.section_header(ObservationSection::Achievement),
            "The results of the Batería IV Woodcock-Muñoz Pruebas de aprovechamiento",
            "deben interpretarse con cautela: fatiga.",
            "TABLE OF SCORES",
            "Rememoración de cuentos 480 7-2 88/90 95 (90-100)",
            "Visualización 490 8-0 91/90 101 (94-108)",
            "Problemas aplicados 470 6-9 70/90 85 (80-90)",
            "2 of 2",
        ]
        .into_iter()
        .map(String::from),
    );
    lines
}

pub fn english_report() -> LineStream {
    LineStream::new(english_lines())
}

pub fn spanish_report() -> LineStream {
    LineStream::new(spanish_lines())
}

/// Fields whose name starts with `prefix`, as owned pairs.
pub fn fields_with_prefix(record: &wjiv_core::Record, prefix: &str) -> Vec<(String, String)> {
    record
        .iter()
        .filter(|(k, _)| k.starts_with(prefix))
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
