//! Stats command implementation.
//!
//! Reduces each exported block document to `{wordCount, readTime}`. Block
//! trees never fail this reduction; unreadable or undecodable files do.

use anyhow::Result;
use serde::Serialize;

use super::common::collect_block_files;
use crate::cli::args::StatsArgs;
use crate::cli::output::write_json;
use crate::config::SiteConfig;
use crate::content::{self, PageStats};
use crate::source;
use crate::utils::plural_count;
use crate::{debug, log};

/// Result for a single block document
#[derive(Debug, Serialize)]
pub struct PageStatsResult {
    pub path: String,
    #[serde(flatten)]
    pub stats: PageStats,
}

/// Execute stats command
pub fn run_stats(args: &StatsArgs, config: &SiteConfig) -> Result<()> {
    let blocks_dir = config.source_dir().join("blocks");
    let files = collect_block_files(&args.paths, &blocks_dir)?;

    log!("stats"; "processing {}", plural_count(files.len(), "document"));

    let mut results = Vec::with_capacity(files.len());
    for file in &files {
        let blocks = source::read_blocks(file)?;

        let skipped = content::skipped_blocks(&blocks);
        if skipped > 0 {
            debug!(
                "stats";
                "{}: {} ignored",
                file.display(),
                plural_count(skipped, "unsupported block")
            );
        }

        let rel_path = file.strip_prefix(&config.root).unwrap_or(file);
        results.push(PageStatsResult {
            path: rel_path.display().to_string(),
            stats: content::page_stats(&blocks),
        });
    }

    write_json("stats", &results, args.pretty, args.output.as_deref())
}
