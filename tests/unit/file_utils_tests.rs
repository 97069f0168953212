/*!
 * Tests for file utility functions
 */

use anyhow::Result;
use std::fs;
use episode_translator::errors::AppError;
use episode_translator::file_utils::FileManager;
use crate::common;

/// Test that ensure_dir creates nested directories and can be repeated
#[test]
fn test_ensure_dir_withNestedPath_shouldCreateIdempotently() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let nested = temp_dir.path().join("burmese-episodes").join("0001-0100");

    FileManager::ensure_dir(&nested)?;
    assert!(nested.is_dir());

    // Second call must not fail
    FileManager::ensure_dir(&nested)?;
    assert!(nested.is_dir());

    Ok(())
}

/// Test that listing filters by extension and sorts names
#[test]
fn test_list_files_withMixedEntries_shouldReturnSortedMarkdownOnly() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path();
    common::create_test_file(dir, "0003.md", "c")?;
    common::create_test_file(dir, "0001.md", "a")?;
    common::create_test_file(dir, "0002.md", "b")?;
    common::create_test_file(dir, "notes.txt", "x")?;
    common::create_test_file(dir, "0004.md.bak", "x")?;
    fs::create_dir(dir.join("nested.md"))?;
    common::create_test_file(&dir.join("nested.md"), "0005.md", "x")?;

    let files = FileManager::list_files_with_extension(dir, "md")?;

    assert_eq!(files, vec!["0001.md", "0002.md", "0003.md"]);

    Ok(())
}

/// Test that a leading dot in the extension is accepted
#[test]
fn test_list_files_withDottedExtension_shouldMatchSameFiles() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(temp_dir.path(), "0001.md", "a")?;

    assert_eq!(FileManager::list_files_with_extension(temp_dir.path(), ".md")?, vec!["0001.md"]);

    Ok(())
}

/// Test that listing a missing directory reports a directory access error
#[test]
fn test_list_files_withMissingDir_shouldFailWithDirectoryAccess() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let missing = temp_dir.path().join("does-not-exist");

    let err = FileManager::list_files_with_extension(&missing, "md").unwrap_err();

    match err.downcast_ref::<AppError>() {
        Some(AppError::DirectoryAccess { path, .. }) => assert_eq!(path, &missing),
        other => panic!("unexpected error: {:?}", other),
    }

    Ok(())
}

/// Test that a dangling symlink with another extension does not abort the listing
#[cfg(unix)]
#[test]
fn test_list_files_withDanglingNonMatchingSymlink_shouldSkipIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path();
    common::create_test_file(dir, "0002.md", "b")?;
    common::create_test_file(dir, "0001.md", "a")?;
    std::os::unix::fs::symlink(dir.join("nowhere"), dir.join("stale.txt"))?;

    let files = FileManager::list_files_with_extension(dir, "md")?;

    assert_eq!(files, vec!["0001.md", "0002.md"]);

    Ok(())
}

/// Test that a dangling symlink carrying the extension still fails the listing
#[cfg(unix)]
#[test]
fn test_list_files_withDanglingMatchingSymlink_shouldFailWithReadFile() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path();
    common::create_test_file(dir, "0001.md", "a")?;
    std::os::unix::fs::symlink(dir.join("nowhere"), dir.join("0002.md"))?;

    let err = FileManager::list_files_with_extension(dir, "md").unwrap_err();

    match err.downcast_ref::<AppError>() {
        Some(AppError::ReadFile { path, .. }) => assert_eq!(path, &dir.join("0002.md")),
        other => panic!("unexpected error: {:?}", other),
    }

    Ok(())
}

/// Test that a missing directory whose name carries the extension is still a directory error
#[test]
fn test_list_files_withMissingMarkdownNamedDir_shouldFailWithDirectoryAccess() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let missing = temp_dir.path().join("chapters.md");

    let err = FileManager::list_files_with_extension(&missing, "md").unwrap_err();
    assert!(matches!(err.downcast_ref::<AppError>(), Some(AppError::DirectoryAccess { .. })));

    Ok(())
}

/// Test that reading invalid UTF-8 fails with a read error
#[test]
fn test_read_to_string_withInvalidUtf8_shouldFailWithReadFile() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("bad.md");
    fs::write(&path, [0xff, 0xfe, 0x00])?;

    let err = FileManager::read_to_string(&path).unwrap_err();
    assert!(matches!(err.downcast_ref::<AppError>(), Some(AppError::ReadFile { .. })));

    Ok(())
}

/// Test that writing and reading round-trip the exact bytes
#[test]
fn test_write_to_file_thenRead_shouldPreserveContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = FileManager::output_path(temp_dir.path(), "0001.md");

    FileManager::write_to_file(&path, "ဝမ်လင်\r\nline\n")?;

    assert_eq!(FileManager::read_to_string(&path)?, "ဝမ်လင်\r\nline\n");

    Ok(())
}

/// Test that writing into a missing directory fails with a write error
#[test]
fn test_write_to_file_withMissingParent_shouldFailWithWriteFile() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("missing").join("0001.md");

    let err = FileManager::write_to_file(&path, "x").unwrap_err();
    assert!(matches!(err.downcast_ref::<AppError>(), Some(AppError::WriteFile { .. })));

    Ok(())
}
