//! Menu command implementation.

use anyhow::Result;

use crate::cli::args::MenuArgs;
use crate::cli::output::write_json;
use crate::config::SiteConfig;
use crate::generator::build_menu;
use crate::source::FileSource;
use crate::utils::plural_count;
use crate::{debug, log};

/// Execute menu command
pub fn run_menu(args: &MenuArgs, config: &SiteConfig) -> Result<()> {
    let source = FileSource::new(config.source_dir());

    debug!(
        "menu";
        "building menu for '{}' from {}",
        config.site.title,
        source.dir().display()
    );

    let pages = source.pages()?;
    let database = source.database()?;
    let collections = database.collection_names(
        &config.source.collection_property,
        &config.source.page_collection,
    )?;

    let menu = build_menu(&pages, &collections, config);

    log!(
        "menu";
        "generated {} ({} ranked, {} collections)",
        plural_count(menu.len(), "link"),
        menu.len() - collections.len(),
        collections.len()
    );

    write_json("menu", &menu, args.pretty, args.output.as_deref())
}
