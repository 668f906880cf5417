//! Content block export model.
//!
//! The content client exports each page as a tree of typed blocks. Every
//! block object carries a `Type` tag plus one payload object keyed by the
//! kind's PascalCase name:
//!
//! ```json
//! { "Type": "paragraph", "Paragraph": { "RichTexts": [{ "PlainText": "hi" }], "Children": [] } }
//! ```
//!
//! | `Type`               | Payload key        |
//! |----------------------|--------------------|
//! | `heading_1`          | `Heading1`         |
//! | `heading_2`          | `Heading2`         |
//! | `heading_3`          | `Heading3`         |
//! | `paragraph`          | `Paragraph`        |
//! | `bulleted_list_item` | `BulletedListItem` |
//! | `numbered_list_item` | `NumberedListItem` |
//! | `to_do`              | `ToDo`             |
//! | `callout`            | `Callout`          |
//! | `quote`              | `Quote`            |
//!
//! Every other `Type` value deserializes to [`Block::Unsupported`], which
//! drops the payload. Unsupported blocks therefore never expose children;
//! their subtrees are invisible to the stats walk.

use serde::Deserialize;

/// One block from a page's content export.
///
/// The allow-listed kinds each carry an optional [`BlockBody`]; an export
/// may tag a block with a known kind but omit the payload, which counts as
/// malformed and contributes nothing.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "Type", rename_all = "snake_case")]
pub enum Block {
    #[serde(rename = "heading_1")]
    Heading1 {
        #[serde(rename = "Heading1")]
        body: Option<BlockBody>,
    },
    #[serde(rename = "heading_2")]
    Heading2 {
        #[serde(rename = "Heading2")]
        body: Option<BlockBody>,
    },
    #[serde(rename = "heading_3")]
    Heading3 {
        #[serde(rename = "Heading3")]
        body: Option<BlockBody>,
    },
    Paragraph {
        #[serde(rename = "Paragraph")]
        body: Option<BlockBody>,
    },
    BulletedListItem {
        #[serde(rename = "BulletedListItem")]
        body: Option<BlockBody>,
    },
    NumberedListItem {
        #[serde(rename = "NumberedListItem")]
        body: Option<BlockBody>,
    },
    ToDo {
        #[serde(rename = "ToDo")]
        body: Option<BlockBody>,
    },
    Callout {
        #[serde(rename = "Callout")]
        body: Option<BlockBody>,
    },
    Quote {
        #[serde(rename = "Quote")]
        body: Option<BlockBody>,
    },
    /// Any kind outside the allow-list.
    #[serde(other)]
    Unsupported,
}

impl Block {
    /// Payload for the block's kind, if the export carried one.
    ///
    /// `None` for unsupported kinds and for allow-listed blocks whose
    /// payload object is missing.
    pub fn body(&self) -> Option<&BlockBody> {
        match self {
            Self::Heading1 { body }
            | Self::Heading2 { body }
            | Self::Heading3 { body }
            | Self::Paragraph { body }
            | Self::BulletedListItem { body }
            | Self::NumberedListItem { body }
            | Self::ToDo { body }
            | Self::Callout { body }
            | Self::Quote { body } => body.as_ref(),
            Self::Unsupported => None,
        }
    }
}

/// Kind-specific payload: the block's rich-text runs and child blocks.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct BlockBody {
    pub rich_texts: Vec<RichText>,
    pub children: Option<Vec<Block>>,
}

impl BlockBody {
    /// Plain text of all rich-text runs joined with a single space.
    ///
    /// A single space even between runs that already carry their own
    /// whitespace; the word counter depends on this exact joining rule.
    pub fn plain_text(&self) -> String {
        self.rich_texts
            .iter()
            .map(|run| run.plain_text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Child blocks, empty when the export declares none.
    pub fn children(&self) -> &[Block] {
        self.children.as_deref().unwrap_or_default()
    }
}

/// One styled text fragment; only the plain-text value matters here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct RichText {
    pub plain_text: String,
}
