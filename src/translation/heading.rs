/*!
 * Chapter heading detection.
 *
 * A chapter heading looks like `## Chapter 12 - The Old Man`: one or more `#`,
 * optional whitespace, the word "Chapter" in any case, a number, a hyphen or
 * en-dash, then the title. Everything up to and including the whitespace after
 * the dash is the prefix and is never translated.
 */

use once_cell::sync::Lazy;
use regex::Regex;

static CHAPTER_HEADING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(#+\s*(?i:chapter)\s+\d+\s*[-–]\s*)(.+)$").unwrap()
});

/// A line split into its fixed heading prefix and translatable title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingLine<'a> {
    /// Markers, "Chapter N", dash and trailing whitespace, verbatim
    pub prefix: &'a str,
    /// Remainder of the line
    pub title: &'a str,
}

impl<'a> HeadingLine<'a> {
    /// Split `line` if it is a chapter heading.
    pub fn parse(line: &'a str) -> Option<Self> {
        let caps = CHAPTER_HEADING_REGEX.captures(line)?;
        let prefix = caps.get(1)?.as_str();
        let title = caps.get(2)?.as_str();
        Some(Self { prefix, title })
    }

    /// Reassemble the heading around a new title.
    pub fn with_title(&self, title: &str) -> String {
        let mut line = String::with_capacity(self.prefix.len() + title.len());
        line.push_str(self.prefix);
        line.push_str(title);
        line
    }
}

/// Whether the line starts with a markdown heading marker.
pub fn is_heading_marker(line: &str) -> bool {
    line.starts_with('#')
}
