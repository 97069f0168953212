/*!
 * # episode-translator
 *
 * Batch translation of serialized novel chapters from English to Burmese using
 * a fixed terminology table.
 *
 * ## Features
 *
 * - Translate every markdown chapter in a source directory into a target directory
 * - Preserve file names, line count and markdown heading structure
 * - Longest-match, whole-word substitution of cultivation terms and character names
 * - Optional user glossary (JSON) merged over the built-in tables
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `terminology`: Built-in terminology tables and the `Glossary` type
 * - `translation`: Text, heading and content translation:
 *   - `translation::text`: Term substitution over a span of text
 *   - `translation::heading`: Chapter heading detection
 *   - `translation::content`: Line-by-line file translation
 * - `file_utils`: File system operations
 * - `app_controller`: Batch driver
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod terminology;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{BatchSummary, Controller};
pub use errors::AppError;
pub use terminology::Glossary;
pub use translation::{ContentTranslator, GlossaryTranslator, TextTranslator};
