/*!
 * Term substitution for spans of text.
 *
 * `GlossaryTranslator` replaces every recognised glossary phrase with its
 * target rendering. Matching is case-sensitive, respects word boundaries and
 * prefers the longest phrase starting at any given position, so "Qi
 * Condensation" is never split into "Qi" + " Condensation".
 */

use anyhow::{Context, Result};
use regex::{Captures, Regex};
use std::collections::HashMap;

use crate::terminology::Glossary;

/// Converts a span of text. Implementations must never fail; unknown text is
/// returned as-is.
pub trait TextTranslator {
    fn translate_text(&self, text: &str) -> String;
}

/// Returns its input unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughTranslator;

impl TextTranslator for PassthroughTranslator {
    fn translate_text(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Dictionary-driven translator over a `Glossary`.
#[derive(Debug, Clone)]
pub struct GlossaryTranslator {
    targets: HashMap<String, String>,
    // None when the glossary is empty
    pattern: Option<Regex>,
}

impl GlossaryTranslator {
    /// Build the matcher for every phrase in `glossary`.
    pub fn new(glossary: &Glossary) -> Result<Self> {
        let mut targets: HashMap<String, String> = HashMap::with_capacity(glossary.len());
        for (source, _) in glossary.entries() {
            if let Some(target) = glossary.lookup(source) {
                targets.insert(source.to_string(), target.to_string());
            }
        }

        let mut phrases: Vec<&str> = targets
            .keys()
            .map(String::as_str)
            .filter(|phrase| !phrase.is_empty())
            .collect();
        // Alternation is leftmost-first, so longer phrases must come first
        phrases.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let pattern = if phrases.is_empty() {
            None
        } else {
            let alternation = phrases
                .iter()
                .map(|phrase| Self::phrase_pattern(phrase))
                .collect::<Vec<_>>()
                .join("|");
            Some(Regex::new(&alternation).context("Failed to compile glossary matcher")?)
        };

        Ok(Self { targets, pattern })
    }

    /// Translator over the compiled-in tables.
    pub fn builtin() -> Result<Self> {
        Self::new(Glossary::builtin())
    }

    /// Number of distinct phrases this translator recognises.
    pub fn term_count(&self) -> usize {
        self.targets.len()
    }

    // Word boundaries only apply at edges that are themselves word characters,
    // otherwise a phrase ending in punctuation could never match.
    fn phrase_pattern(phrase: &str) -> String {
        let is_word = |c: char| c.is_alphanumeric() || c == '_';
        let starts_word = phrase.chars().next().is_some_and(is_word);
        let ends_word = phrase.chars().next_back().is_some_and(is_word);

        format!(
            "{}{}{}",
            if starts_word { r"\b" } else { "" },
            regex::escape(phrase),
            if ends_word { r"\b" } else { "" }
        )
    }
}

impl TextTranslator for GlossaryTranslator {
    fn translate_text(&self, text: &str) -> String {
        let Some(pattern) = &self.pattern else {
            return text.to_string();
        };

        pattern
            .replace_all(text, |caps: &Captures| {
                let matched = &caps[0];
                self.targets
                    .get(matched)
                    .cloned()
                    .unwrap_or_else(|| matched.to_string())
            })
            .into_owned()
    }
}
