//! Observation section scanning.
//!
//! Observation entries are `"Type: value"` lines. Long values spill onto the
//! following line, sometimes across a page break, and page breaks insert a
//! footer marker followed by a fixed block of boilerplate lines. The scanner
//! walks an index cursor through one section with an explicit state:
//!
//! - [`ScanState::Scanning`]: classify the line under the cursor.
//! - [`ScanState::Skip`]: swallow lines already consumed (footer boilerplate,
//!   the second half of a poor-sample paragraph).
//! - [`ScanState::SectionDone`]: the next section header was reached.
//!
//! Spillover is picked up by lookahead from the line that owns it and is
//! single-hop: at most one continuation line is appended per entry.

use tracing::debug;

use crate::error::{ParseWarning, WarningCode};
use crate::layout::DocumentLayout;
use crate::lines::LineStream;
use crate::options::ParseOptions;
use crate::profile::{LanguageProfile, ObservationSection};
use crate::record::{Record, observation_field_name};

/// Scanner state between two lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Scanning,
    /// Number of upcoming lines to swallow.
    Skip(usize),
    SectionDone,
}

/// One reconstructed observation entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    pub obs_type: String,
    pub value: String,
}

impl Observation {
    fn new(obs_type: &str, value: &str) -> Self {
        Self {
            obs_type: obs_type.trim().to_string(),
            value: value.trim().to_string(),
        }
    }
}

/// Whether `line` is exactly a final-page footer such as `"2 of 2"`.
pub fn is_last_page_footer(line: &str) -> bool {
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next(), tokens.next()) {
        (Some(page), Some("of"), Some(total), None) => {
            match (page.parse::<u32>(), total.parse::<u32>()) {
                (Ok(page), Ok(total)) => page == total,
                _ => false,
            }
        }
        _ => false,
    }
}

/// Line-level scanner for the observation sections of one document.
pub struct ObservationScanner<'a> {
    lines: &'a LineStream,
    profile: &'a LanguageProfile,
    options: &'a ParseOptions,
}

impl<'a> ObservationScanner<'a> {
    pub fn new(lines: &'a LineStream, profile: &'a LanguageProfile, options: &'a ParseOptions) -> Self {
        Self {
            lines,
            profile,
            options,
        }
    }

    fn starts_section(&self, line: &str) -> bool {
        line.starts_with(self.profile.generic_header)
    }

    /// A line that can be appended to the previous entry's value.
    fn as_continuation(&self, line: &'a str) -> Option<&'a str> {
        if line.contains(':') || self.starts_section(line) || line.trim().is_empty() {
            None
        } else {
            Some(line)
        }
    }

    /// Continuation text for the entry at `index`, looking past a page
    /// footer when one follows immediately.
    pub fn spillover(&self, index: usize) -> Option<&'a str> {
        let lines: &'a LineStream = self.lines;
        let next = lines.get(index + 1)?;
        if self.options.is_footer(next) {
            if is_last_page_footer(next) {
                return None;
            }
            let resumed = lines.get(index + self.options.footer_lookahead)?;
            return self.as_continuation(resumed);
        }
        self.as_continuation(next)
    }

    fn poor_sample(&self, index: usize, line: &str) -> Observation {
        let merged = match self.lines.get(index + 1) {
            Some(next) => format!("{line} {next}"),
            None => line.to_string(),
        };
        let response = merged.split_once(':').map_or("", |(_, rest)| rest);
        Observation::new(&self.options.poor_sample_label, response)
    }

    /// Advance the scanner over the line at `index`.
    pub fn transition(&self, state: ScanState, index: usize) -> (ScanState, Option<Observation>) {
        match state {
            ScanState::SectionDone => return (ScanState::SectionDone, None),
            ScanState::Skip(n) if n > 1 => return (ScanState::Skip(n - 1), None),
            ScanState::Skip(_) => return (ScanState::Scanning, None),
            ScanState::Scanning => {}
        }

        let Some(line) = self.lines.get(index) else {
            return (ScanState::SectionDone, None);
        };

        if self.options.is_poor_sample_lead(line) {
            return (ScanState::Skip(1), Some(self.poor_sample(index, line)));
        }
        if self.starts_section(line) {
            return (ScanState::SectionDone, None);
        }
        if self.options.is_footer(line) {
            debug!(index, line, "skipping page footer");
            let next = match self.options.footer_skip_lines {
                0 => ScanState::Scanning,
                n => ScanState::Skip(n),
            };
            return (next, None);
        }
        let Some((obs_type, value)) = line.split_once(':') else {
            return (ScanState::Scanning, None);
        };

        let observation = match self.spillover(index) {
            Some(extra) => Observation::new(obs_type, &format!("{value} {extra}")),
            None => Observation::new(obs_type, value),
        };
        (ScanState::Scanning, Some(observation))
    }

    /// Collect the entries of the section whose content begins at `start`.
    pub fn scan(&self, start: usize) -> Vec<Observation> {
        let mut state = ScanState::Scanning;
        let mut observations = Vec::new();
        for index in start..self.lines.len() {
            let (next, observation) = self.transition(state, index);
            observations.extend(observation);
            if next == ScanState::SectionDone {
                break;
            }
            state = next;
        }
        observations
    }
}

/// Scan every observation section present in the document.
pub fn parse_observations(
    lines: &LineStream,
    layout: &DocumentLayout,
    options: &ParseOptions,
    warnings: &mut Vec<ParseWarning>,
) -> Record {
    let scanner = ObservationScanner::new(lines, layout.profile(), options);
    let mut record = Record::new();

    for section in ObservationSection::ALL {
        let Some(start) = layout.anchors.observation(section) else {
            continue;
        };
        let observations = scanner.scan(start);
        debug!(section = section.label(), count = observations.len(), "scanned observations");

        for obs in observations {
            let name = observation_field_name(layout.language, section, &obs.obs_type);
            if !record.insert(name.clone(), obs.value) {
                warnings.push(ParseWarning::new(
                    WarningCode::DuplicateField,
                    format!("'{name}' observed more than once"),
                ));
            }
        }
    }

    record
}
