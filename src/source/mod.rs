//! Filesystem access to the content client's export directory.
//!
//! The client exports its data as plain JSON files:
//!
//! | File | Contents |
//! |------|----------|
//! | `pages.json` | page listing |
//! | `database.json` | database property schema |
//! | `blocks/<slug>.json` | one block tree per page |
//!
//! Everything here is synchronous reads; fetching and caching belong to the
//! client, not to this tool.

pub mod database;
pub mod page;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::content::Block;

pub use database::Database;
pub use page::Page;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed JSON in {}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("database has no select property named \"{0}\"")]
    MissingProperty(String),
}

/// Reader for one export directory.
#[derive(Debug, Clone)]
pub struct FileSource {
    dir: PathBuf,
}

impl FileSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Page listing from `pages.json`.
    pub fn pages(&self) -> Result<Vec<Page>, SourceError> {
        read_json(&self.dir.join("pages.json"))
    }

    /// Database schema from `database.json`.
    pub fn database(&self) -> Result<Database, SourceError> {
        read_json(&self.dir.join("database.json"))
    }

    /// Every block document under `blocks/`, sorted by path.
    pub fn block_files(&self) -> Result<Vec<PathBuf>, SourceError> {
        scan_json_files(&self.dir.join("blocks"))
    }
}

/// Read one exported block tree.
pub fn read_blocks(path: &Path) -> Result<Vec<Block>, SourceError> {
    read_json(path)
}

/// Collect `.json` files under `dir` recursively, sorted by path.
pub fn scan_json_files(dir: &Path) -> Result<Vec<PathBuf>, SourceError> {
    let mut files = Vec::new();
    scan_recursive(dir, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), SourceError> {
    let entries = fs::read_dir(dir).map_err(|source| SourceError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            scan_recursive(&path, files)?;
        } else if path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }

    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, SourceError> {
    let raw = fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| SourceError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn export_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("pages.json"),
            r#"[{"Title": "Home", "Slug": "home", "Rank": 1}]"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("database.json"),
            r#"{"propertiesRaw": {"Collection": {"select": {"options": [{"name": "Essays"}]}}}}"#,
        )
        .unwrap();

        let blocks = dir.path().join("blocks");
        fs::create_dir_all(&blocks).unwrap();
        fs::write(
            blocks.join("home.json"),
            r#"[{"Type": "paragraph", "Paragraph": {"RichTexts": [{"PlainText": "Hi"}]}}]"#,
        )
        .unwrap();

        dir
    }

    #[test]
    fn test_reads_export() {
        let dir = export_dir();
        let source = FileSource::new(dir.path());

        let pages = source.pages().unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].slug, "home");

        let database = source.database().unwrap();
        assert_eq!(
            database.collection_names("Collection", "Page").unwrap(),
            ["Essays"]
        );

        let files = source.block_files().unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(read_blocks(&files[0]).unwrap().len(), 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let source = FileSource::new(dir.path());

        assert!(matches!(source.pages(), Err(SourceError::Io { .. })));
    }

    #[test]
    fn test_malformed_json_names_the_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("pages.json"), "not json").unwrap();

        let err = FileSource::new(dir.path()).pages().unwrap_err();
        assert!(matches!(&err, SourceError::Json { path, .. } if path.ends_with("pages.json")));
    }

    #[test]
    fn test_scan_is_recursive_sorted_and_json_only() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("drafts");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("b.json"), "[]").unwrap();
        fs::write(dir.path().join("a.json"), "[]").unwrap();
        fs::write(dir.path().join("notes.md"), "skip").unwrap();
        fs::write(nested.join("c.json"), "[]").unwrap();

        let files = scan_json_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|path| path.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();

        assert_eq!(
            names,
            [
                PathBuf::from("a.json"),
                PathBuf::from("b.json"),
                PathBuf::from("drafts/c.json"),
            ]
        );
    }

    #[test]
    fn test_scan_missing_dir_errors() {
        let dir = TempDir::new().unwrap();
        assert!(scan_json_files(&dir.path().join("blocks")).is_err());
    }
}
