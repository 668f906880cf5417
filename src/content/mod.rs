//! Block-tree content model and the reductions computed over it.

pub mod block;
pub mod stats;

pub use block::{Block, BlockBody, RichText};
pub use stats::{PageStats, extract_blocks, flatten_text, page_stats, skipped_blocks};
