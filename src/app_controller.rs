use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use std::io::Write;

use crate::app_config::{Config, TranslationMode};
use crate::file_utils::FileManager;
use crate::terminology::Glossary;
use crate::translation::{ChapterFile, ContentTranslator, GlossaryTranslator, PassthroughTranslator, TextTranslator};

// @module: Application controller for batch chapter translation

/// Outcome of a completed batch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// File names in the order they were written
    pub processed: Vec<String>,
}

impl BatchSummary {
    pub fn count(&self) -> usize {
        self.processed.len()
    }
}

/// Main application controller for chapter translation
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Line-oriented translator built from the configured mode
    translator: ContentTranslator,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;

        let text_translator: Box<dyn TextTranslator> = match config.translation.mode {
            TranslationMode::Glossary => {
                let glossary = Self::effective_glossary(&config)?;
                let translator = GlossaryTranslator::new(&glossary)?;
                debug!("Glossary loaded with {} terms", translator.term_count());
                Box::new(translator)
            }
            TranslationMode::Passthrough => Box::new(PassthroughTranslator),
        };

        Ok(Self {
            config,
            translator: ContentTranslator::new(text_translator),
        })
    }

    /// Built-in tables with the configured user glossary merged on top
    pub fn effective_glossary(config: &Config) -> Result<Glossary> {
        let mut glossary = Glossary::builtin().clone();
        if let Some(path) = &config.translation.glossary_path {
            let extra = Glossary::from_json_file(path)?;
            info!("Merging {} glossary entries from {:?}", extra.len(), path);
            glossary.merge(&extra);
        }
        Ok(glossary)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the batch, writing progress lines to stdout
    pub fn run(&self) -> Result<BatchSummary> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        self.run_with_output(&mut handle)
    }

    /// Run the batch, writing progress lines to `out`.
    ///
    /// Any directory, read or write failure aborts immediately. Files written
    /// before the failure are left in place.
    pub fn run_with_output<W: Write>(&self, out: &mut W) -> Result<BatchSummary> {
        let start_time = std::time::Instant::now();
        let source_dir = &self.config.source_dir;
        let target_dir = &self.config.target_dir;

        FileManager::ensure_dir(target_dir)?;

        let files = FileManager::list_files_with_extension(source_dir, &self.config.extension)?;
        writeln!(out, "Found {} files to process", files.len())?;
        debug!("Translating {:?} -> {:?} ({} mode)", source_dir, target_dir, self.config.translation.mode);

        let progress_bar = self.progress_bar(files.len() as u64);
        let mut summary = BatchSummary::default();

        for file_name in &files {
            progress_bar.set_message(file_name.clone());

            let source_path = source_dir.join(file_name);
            let chapter = ChapterFile::new(file_name.as_str(), FileManager::read_to_string(&source_path)?);

            let translated = self.translator.translate_file(&chapter);

            let target_path = FileManager::output_path(target_dir, &translated.file_name);
            FileManager::write_to_file(&target_path, &translated.content)?;

            progress_bar.suspend(|| writeln!(out, "Processed: {}", file_name))?;
            progress_bar.inc(1);
            summary.processed.push(file_name.clone());
        }

        progress_bar.finish_and_clear();

        writeln!(out, "\nAll {} files have been processed!", summary.count())?;
        info!(
            "Batch finished in {}",
            Self::format_duration(start_time.elapsed())
        );

        Ok(summary)
    }

    fn progress_bar(&self, len: u64) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }

        let progress_bar = ProgressBar::new(len);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(template_result.progress_chars("█▓▒░"));
        progress_bar
    }

    // Format duration in a human-readable format
    fn format_duration(duration: std::time::Duration) -> String {
        let total_seconds = duration.as_secs();
        let minutes = total_seconds / 60;
        let seconds = total_seconds % 60;

        if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
