//! Configuration section definitions.
//!
//! Each module corresponds to a section in `vellum.toml`:
//!
//! | Module   | TOML Section | Purpose                            |
//! |----------|--------------|------------------------------------|
//! | `site`   | `[site]`     | Site metadata and routing          |
//! | `source` | `[source]`   | Content export location and schema |

mod site;
mod source;

// Re-export section configs
pub use site::SiteSectionConfig;
pub use source::SourceConfig;
