//! Navigation menu assembly from the exported listings.

use serde::Serialize;

use crate::config::SiteConfig;
use crate::source::Page;
use crate::utils::path::path_join;
use crate::utils::slug::slugify;

/// Route prefix for collection listing pages.
const COLLECTION_ROUTE: &str = "/posts/collection";

/// One navigation link.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuEntry {
    pub title: String,
    pub path: String,
}

/// Assemble the navigation menu.
///
/// Ranked pages come first, ascending by rank with ties keeping listing
/// order, followed by one link per collection in schema order. The home
/// slug maps to `/`; every other page maps to `/<slug>`.
pub fn build_menu(pages: &[Page], collections: &[String], config: &SiteConfig) -> Vec<MenuEntry> {
    let mut ranked: Vec<&Page> = pages.iter().filter(|page| page.is_ranked()).collect();
    ranked.sort_by_key(|page| page.rank);

    let mut menu: Vec<MenuEntry> = ranked
        .into_iter()
        .map(|page| MenuEntry {
            title: page.title.clone(),
            path: page_path(page, &config.site.home_slug),
        })
        .collect();

    menu.extend(collections.iter().map(|name| MenuEntry {
        title: name.clone(),
        path: path_join(COLLECTION_ROUTE, &slugify(name)),
    }));

    menu
}

fn page_path(page: &Page, home_slug: &str) -> String {
    if page.slug == home_slug {
        "/".to_string()
    } else {
        path_join("/", &page.slug)
    }
}
