//! Common utilities shared across CLI commands.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::source;

/// Collect block documents based on CLI paths
///
/// With no paths, every document under the export's `blocks/` directory is
/// used. A lone `-` reads paths from stdin. Files are taken as given;
/// directories are scanned recursively for `.json` files.
pub fn collect_block_files(paths: &[PathBuf], blocks_dir: &Path) -> Result<Vec<PathBuf>> {
    // Handle stdin case: read paths from stdin when `-` is passed
    let paths: Vec<PathBuf> = if paths.len() == 1 && paths[0].as_os_str() == "-" {
        read_paths_from_stdin()?
    } else {
        paths.to_vec()
    };

    if paths.is_empty() {
        // No paths specified: process the whole export
        return Ok(source::scan_json_files(blocks_dir)?);
    }

    // Collect files from all specified paths
    let mut all_files = Vec::new();
    for path in &paths {
        if path.is_file() {
            all_files.push(path.clone());
        } else if path.is_dir() {
            all_files.extend(source::scan_json_files(path)?);
        } else {
            anyhow::bail!("Path not found: {}", path.display());
        }
    }

    Ok(all_files)
}

/// Read file paths from stdin, one per line
pub fn read_paths_from_stdin() -> Result<Vec<PathBuf>> {
    let stdin = io::stdin();
    let mut paths = Vec::new();

    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            paths.push(PathBuf::from(trimmed));
        }
    }

    Ok(paths)
}
