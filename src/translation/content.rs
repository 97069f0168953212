/*!
 * Line-oriented translation of whole chapter files.
 */

use log::debug;

use super::heading::{HeadingLine, is_heading_marker};
use super::text::TextTranslator;

/// A chapter on disk: its file name and full text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterFile {
    pub file_name: String,
    pub content: String,
}

impl ChapterFile {
    pub fn new(file_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }
}

/// Applies a `TextTranslator` line by line while keeping markdown structure.
pub struct ContentTranslator {
    translator: Box<dyn TextTranslator>,
}

impl ContentTranslator {
    pub fn new(translator: Box<dyn TextTranslator>) -> Self {
        Self { translator }
    }

    /// Translate a single line (without its newline).
    ///
    /// Blank lines and headings that are not chapter headings come back
    /// unchanged. Chapter headings only have their title translated.
    pub fn translate_line(&self, line: &str) -> String {
        if line.trim().is_empty() {
            return line.to_string();
        }

        if is_heading_marker(line) {
            return match HeadingLine::parse(line) {
                Some(heading) => heading.with_title(&self.translator.translate_text(heading.title)),
                None => line.to_string(),
            };
        }

        self.translator.translate_text(line)
    }

    /// Translate full file content. Output has exactly as many `\n`-separated
    /// lines as the input. `file_name` is only used for logging.
    pub fn translate_content(&self, content: &str, file_name: &str) -> String {
        let mut line_count = 0usize;
        let translated = content
            .split('\n')
            .map(|line| {
                line_count += 1;
                self.translate_line(line)
            })
            .collect::<Vec<_>>()
            .join("\n");

        debug!("Translated {} ({} lines)", file_name, line_count);
        translated
    }

    pub fn translate_file(&self, file: &ChapterFile) -> ChapterFile {
        ChapterFile {
            file_name: file.file_name.clone(),
            content: self.translate_content(&file.content, &file.file_name),
        }
    }
}
