//! Keyed output record and field-name composition.

use std::fmt;

use indexmap::IndexMap;

use crate::profile::{Language, ObservationSection};

/// Field names and values extracted from one document, in insertion order.
///
/// A field name is written at most once; later writes are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Record {
    fields: IndexMap<String, String>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field unless the name is already present.
    ///
    /// Returns `false` when the name was taken and the value was dropped.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> bool {
        let name = name.into();
        if self.fields.contains_key(&name) {
            return false;
        }
        self.fields.insert(name, value.into());
        true
    }

    /// Insert or replace a field.
    pub(crate) fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Move every field of `other` into `self`, keeping existing names.
    ///
    /// Returns the names that were already present.
    pub fn merge(&mut self, other: Record) -> Vec<String> {
        let mut rejected = Vec::new();
        for (name, value) in other.fields {
            if self.fields.contains_key(&name) {
                rejected.push(name);
            } else {
                self.fields.insert(name, value);
            }
        }
        rejected
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (k, v) in &self.fields {
            if !first {
                f.write_str("\n")?;
            }
            first = false;
            write!(f, "{k}: {v}")?;
        }
        Ok(())
    }
}

/// A parsed document: its record plus the detected language tag.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedReport {
    pub language: Language,
    pub record: Record,
}

impl ParsedReport {
    /// The join identity of this record.
    pub fn id(&self) -> Option<&str> {
        self.record.get(crate::header::ID_FIELD)
    }
}

/// Uppercase each letter that follows a non-letter, lowercase the rest.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alpha = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

/// `"{Language} - {Test} - {Metric}"`
pub fn score_field_name(language: Language, test: &str, metric: &str) -> String {
    format!("{} - {} - {}", language, title_case(test), metric.trim())
}

/// `"{Language} - {Section}: {Observation type}"`
pub fn observation_field_name(
    language: Language,
    section: ObservationSection,
    obs_type: &str,
) -> String {
    let section = title_case(&section.label().replace('_', " "));
    format!("{} - {}: {}", language, section, obs_type.trim())
}
