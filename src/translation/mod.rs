/*!
 * Terminology-driven translation of chapter files.
 *
 * - `text`: term substitution over a span of text
 * - `heading`: chapter heading detection
 * - `content`: line-by-line translation of whole files
 */

// Re-export main types for easier usage
pub use self::content::{ChapterFile, ContentTranslator};
pub use self::heading::HeadingLine;
pub use self::text::{GlossaryTranslator, PassthroughTranslator, TextTranslator};

// Submodules
pub mod content;
pub mod heading;
pub mod text;
