/*!
 * End-to-end tests for batch chapter translation
 */

use anyhow::Result;
use std::fs;
use episode_translator::Controller;
use episode_translator::app_config::TranslationMode;
use crate::common;

const TRANSLATED_SAMPLE: &str = concat!(
    "# Chapter 1 - ဝမ်လင်\n",
    "\n",
    "ဝမ်လင် looked at the ပျံသန်းဓား.\n",
    "### Interlude\n",
    "   \n",
    "\"တာအိုမိတ်ဆွေ, the တာအို is endless,\" said စစ်တူးနမ်.\n",
);

/// Test a full batch over a small directory
#[test]
fn test_batch_withSampleChapters_shouldTranslateEveryFile() -> Result<()> {
    common::init_logging();
    let temp_dir = common::create_temp_dir()?;
    let config = common::test_config(temp_dir.path());
    fs::create_dir_all(&config.source_dir)?;
    common::create_test_chapter(&config.source_dir, "0001.md")?;
    common::create_test_chapter(&config.source_dir, "0002.md")?;

    let controller = Controller::with_config(config.clone())?;
    let (summary, output) = common::run_captured(&controller)?;

    assert_eq!(summary.count(), 2);
    for name in ["0001.md", "0002.md"] {
        let translated = fs::read_to_string(config.target_dir.join(name))?;
        assert_eq!(translated, TRANSLATED_SAMPLE);
    }
    assert_eq!(
        output,
        "Found 2 files to process\nProcessed: 0001.md\nProcessed: 0002.md\n\nAll 2 files have been processed!\n"
    );

    Ok(())
}

/// Output names equal input names and nothing else is written
#[test]
fn test_batch_filenames_shouldMatchInputsExactly() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config = common::test_config(temp_dir.path());
    fs::create_dir_all(&config.source_dir)?;
    common::create_test_file(&config.source_dir, "0001.md", "Qi")?;
    common::create_test_file(&config.source_dir, "0010.md", "Dao")?;
    common::create_test_file(&config.source_dir, "readme.txt", "Qi")?;

    Controller::with_config(config.clone())?.run_with_output(&mut Vec::new())?;

    let mut written: Vec<String> = fs::read_dir(&config.target_dir)?
        .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
        .collect::<Result<_, _>>()?;
    written.sort();

    assert_eq!(written, vec!["0001.md", "0010.md"]);

    Ok(())
}

/// Files are processed in sorted order regardless of creation order
#[test]
fn test_batch_processingOrder_shouldBeSorted() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config = common::test_config(temp_dir.path());
    fs::create_dir_all(&config.source_dir)?;
    for name in ["0003.md", "0001.md", "0002.md"] {
        common::create_test_file(&config.source_dir, name, "text")?;
    }

    let (summary, output) = common::run_captured(&Controller::with_config(config)?)?;

    assert_eq!(summary.processed, vec!["0001.md", "0002.md", "0003.md"]);
    let processed_lines: Vec<&str> = output
        .lines()
        .filter(|line| line.starts_with("Processed: "))
        .collect();
    assert_eq!(
        processed_lines,
        vec!["Processed: 0001.md", "Processed: 0002.md", "Processed: 0003.md"]
    );

    Ok(())
}

/// Two runs over unchanged input produce identical bytes
#[test]
fn test_batch_runTwice_shouldBeDeterministic() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config = common::test_config(temp_dir.path());
    fs::create_dir_all(&config.source_dir)?;
    common::create_test_chapter(&config.source_dir, "0001.md")?;
    common::create_test_file(&config.source_dir, "0002.md", "Core Formation\r\n\r\n# Chapter 2 - Cave Abode")?;

    let controller = Controller::with_config(config.clone())?;
    controller.run_with_output(&mut Vec::new())?;
    let first_1 = fs::read(config.target_dir.join("0001.md"))?;
    let first_2 = fs::read(config.target_dir.join("0002.md"))?;

    controller.run_with_output(&mut Vec::new())?;
    assert_eq!(fs::read(config.target_dir.join("0001.md"))?, first_1);
    assert_eq!(fs::read(config.target_dir.join("0002.md"))?, first_2);

    Ok(())
}

/// Empty source directory yields a zero-count summary
#[test]
fn test_batch_emptySource_shouldReportZeroFiles() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config = common::test_config(temp_dir.path());
    fs::create_dir_all(&config.source_dir)?;

    let (summary, output) = common::run_captured(&Controller::with_config(config.clone())?)?;

    assert_eq!(summary.count(), 0);
    assert!(config.target_dir.is_dir());
    assert_eq!(output, "Found 0 files to process\n\nAll 0 files have been processed!\n");

    Ok(())
}

/// Passthrough mode copies chapters unchanged
#[test]
fn test_batch_passthroughMode_shouldCopyContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let mut config = common::test_config(temp_dir.path());
    config.translation.mode = TranslationMode::Passthrough;
    fs::create_dir_all(&config.source_dir)?;
    common::create_test_chapter(&config.source_dir, "0001.md")?;

    Controller::with_config(config.clone())?.run_with_output(&mut Vec::new())?;

    assert_eq!(fs::read_to_string(config.target_dir.join("0001.md"))?, common::SAMPLE_CHAPTER);

    Ok(())
}

/// A configured glossary file is applied during the batch
#[test]
fn test_batch_withGlossaryFile_shouldApplyExtraTerms() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let mut config = common::test_config(temp_dir.path());
    let glossary = common::create_test_file(
        temp_dir.path(),
        "extra.json",
        r#"{"characters": {"Li Muwan": "လီမူဝမ်"}}"#,
    )?;
    config.translation.glossary_path = Some(glossary);
    fs::create_dir_all(&config.source_dir)?;
    common::create_test_file(&config.source_dir, "0001.md", "Li Muwan and Wang Lin")?;

    Controller::with_config(config.clone())?.run_with_output(&mut Vec::new())?;

    assert_eq!(
        fs::read_to_string(config.target_dir.join("0001.md"))?,
        "လီမူဝမ် and ဝမ်လင်"
    );

    Ok(())
}
