//! The flattened, paginated line sequence of one report.

use std::fmt;
use std::ops::Index;

/// Ordered text lines of one document, pages already concatenated.
///
/// The line index is the only positional handle downstream stages use.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineStream {
    lines: Vec<String>,
}

impl LineStream {
    /// Create a stream from already-split lines.
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Split extracted text on `\n`, dropping a trailing `\r` from each line.
    pub fn from_text(text: &str) -> Self {
        let lines = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();
        Self { lines }
    }

    /// Concatenate per-page texts in page order.
    pub fn from_pages<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lines = Vec::new();
        for page in pages {
            lines.extend(Self::from_text(page.as_ref()).lines);
        }
        Self { lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Index of the last line, or 0 for an empty stream.
    pub fn last_index(&self) -> usize {
        self.lines.len().saturating_sub(1)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Lines in `start..end`, clamped to the stream bounds.
    pub fn range(&self, start: usize, end: usize) -> &[String] {
        let end = end.min(self.lines.len());
        let start = start.min(end);
        &self.lines[start..end]
    }

    /// Render as `"{index} {line}"` rows for layout debugging.
    pub fn numbered(&self) -> NumberedLines<'_> {
        NumberedLines(self)
    }
}

impl Index<usize> for LineStream {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.lines[index]
    }
}

impl<S: Into<String>> FromIterator<S> for LineStream {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            lines: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Display adapter returned by [`LineStream::numbered`].
pub struct NumberedLines<'a>(&'a LineStream);

impl fmt::Display for NumberedLines<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.0.iter().enumerate() {
            writeln!(f, "{i} {line}")?;
        }
        Ok(())
    }
}
