//! Page metadata from the client's export.

use serde::Deserialize;

/// One entry of the exported page listing (`pages.json`).
///
/// The export carries more fields than these; everything the menu does not
/// need is ignored on deserialization.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Page {
    pub title: String,
    pub slug: String,
    /// Menu position. Absent or zero keeps the page out of the menu.
    #[serde(default)]
    pub rank: Option<i64>,
}

impl Page {
    /// Whether the page takes part in the navigation menu.
    #[inline]
    pub fn is_ranked(&self) -> bool {
        self.rank.is_some_and(|rank| rank != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn page(value: serde_json::Value) -> Page {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_deserialize_listing_entry() {
        let page = page(json!({
            "Title": "About",
            "Slug": "about",
            "Rank": 2,
            "Date": "2024-01-01"
        }));

        assert_eq!(page.title, "About");
        assert_eq!(page.slug, "about");
        assert_eq!(page.rank, Some(2));
        assert!(page.is_ranked());
    }

    #[test]
    fn test_missing_rank_is_unranked() {
        let page = page(json!({"Title": "Draft", "Slug": "draft"}));
        assert_eq!(page.rank, None);
        assert!(!page.is_ranked());
    }

    #[test]
    fn test_zero_rank_is_unranked() {
        let page = page(json!({"Title": "Hidden", "Slug": "hidden", "Rank": 0}));
        assert!(!page.is_ranked());
    }

    #[test]
    fn test_negative_rank_is_ranked() {
        let page = page(json!({"Title": "First", "Slug": "first", "Rank": -1}));
        assert!(page.is_ranked());
    }
}
