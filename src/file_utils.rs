use anyhow::Result;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::errors::AppError;

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @creates: Directory and parents if needed, no-op when present
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        fs::create_dir_all(path).map_err(|source| AppError::DirectoryAccess {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(())
    }

    /// List the names of files directly inside `dir` whose name ends with
    /// `.{extension}`, sorted lexicographically.
    ///
    /// Subdirectories are not descended into. A missing or unreadable `dir`
    /// is an error, as is an eligible entry that cannot be inspected (for
    /// example a dangling `.md` symlink). Broken entries with other names are
    /// ignored.
    pub fn list_files_with_extension<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<String>> {
        let dir = dir.as_ref();
        let suffix = format!(".{}", extension.trim_start_matches('.'));
        let mut names = Vec::new();

        for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    return Err(AppError::DirectoryAccess {
                        path: dir.to_path_buf(),
                        source: e.into(),
                    }
                    .into());
                }
                Err(e) => {
                    let eligible = e
                        .path()
                        .and_then(Path::file_name)
                        .and_then(|name| name.to_str())
                        .is_some_and(|name| name.ends_with(&suffix));
                    if !eligible {
                        debug!("Skipping unreadable entry: {}", e);
                        continue;
                    }
                    let path = e.path().map_or_else(|| dir.to_path_buf(), Path::to_path_buf);
                    return Err(AppError::ReadFile { path, source: e.into() }.into());
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            // Names that are not valid UTF-8 can never carry the suffix we compare against
            if let Some(name) = entry.file_name().to_str() {
                if name.ends_with(&suffix) {
                    names.push(name.to_string());
                }
            }
        }

        names.sort();
        Ok(names)
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| AppError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(content)
    }

    /// Write a string to a file, replacing any previous content
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, content).map_err(|source| AppError::WriteFile {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(())
    }

    // @generates: Path of the translated copy of a source file
    pub fn output_path<P: AsRef<Path>>(target_dir: P, file_name: &str) -> PathBuf {
        target_dir.as_ref().join(file_name)
    }
}
