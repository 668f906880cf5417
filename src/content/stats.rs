//! Word-count and read-time estimation over block trees.
//!
//! A page's block tree is projected down to the text-bearing blocks, the
//! text is flattened depth-first into one string, and the stats derive from
//! a split on single spaces. The counting rule is deliberately naive: it
//! counts runs between space characters, so extra separators inflate the
//! count by one per boundary, and an empty page counts as one word.

use serde::Serialize;

use super::block::Block;

/// Fixed reading speed for the read-time estimate.
const WORDS_PER_MINUTE: f64 = 250.0;

/// A block reduced to the text that counts toward reading time.
///
/// Built fresh per computation and discarded after; positions mirror the
/// input blocks one to one.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentBlock {
    pub text: String,
    pub children: Vec<ContentBlock>,
}

impl ContentBlock {
    fn empty() -> Self {
        Self {
            text: String::new(),
            children: Vec::new(),
        }
    }
}

/// Word count and reading-time estimate for one page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageStats {
    pub word_count: usize,
    /// Minutes at 250 wpm, rounded to hundredths, e.g. `"4.2 min"`.
    pub read_time: String,
}

/// Project blocks onto [`ContentBlock`]s, same length and order as the input.
///
/// Blocks with a payload contribute their rich-text runs joined by a single
/// space plus their recursively projected children. Unsupported kinds and
/// payload-less blocks become empty blocks; whatever children they had are
/// not traversed.
pub fn extract_blocks(blocks: &[Block]) -> Vec<ContentBlock> {
    blocks
        .iter()
        .map(|block| match block.body() {
            Some(body) => ContentBlock {
                text: body.plain_text(),
                children: extract_blocks(body.children()),
            },
            None => ContentBlock::empty(),
        })
        .collect()
}

/// Flatten projected blocks into a single string.
///
/// Each block contributes its own text, a newline, then its children's
/// flattened text; sibling contributions are joined with newlines. An empty
/// slice flattens to the empty string.
pub fn flatten_text(blocks: &[ContentBlock]) -> String {
    blocks
        .iter()
        .map(|block| format!("{}\n{}", block.text, flatten_text(&block.children)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Compute reading stats for a page's top-level block list.
///
/// Pure and infallible: malformed blocks have already degraded to empty
/// projections by the time text is flattened.
pub fn page_stats(blocks: &[Block]) -> PageStats {
    let text = flatten_text(&extract_blocks(blocks));

    // Splitting "" still yields one element; an empty page counts 1 word.
    let word_count = text.split(' ').count();

    let minutes = (word_count as f64 / WORDS_PER_MINUTE * 100.0).round() / 100.0;

    PageStats {
        word_count,
        read_time: format!("{minutes} min"),
    }
}

/// Count blocks that degraded to empty projections, recursively.
///
/// Feeds the verbose-only diagnostics in the stats command; the count never
/// affects output or exit status.
pub fn skipped_blocks(blocks: &[Block]) -> usize {
    blocks
        .iter()
        .map(|block| match block.body() {
            Some(body) => skipped_blocks(body.children()),
            None => 1,
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::block::{BlockBody, RichText};
    use serde_json::json;

    fn blocks(value: serde_json::Value) -> Vec<Block> {
        serde_json::from_value(value).unwrap()
    }

    /// Build a paragraph directly, one rich-text run per word.
    fn paragraph(runs: &[&str]) -> Block {
        Block::Paragraph {
            body: Some(BlockBody {
                rich_texts: runs
                    .iter()
                    .map(|text| RichText {
                        plain_text: (*text).to_string(),
                    })
                    .collect(),
                children: None,
            }),
        }
    }

    mod extract {
        use super::*;

        #[test]
        fn joins_runs_with_single_space() {
            let extracted = extract_blocks(&[paragraph(&["Hello", "world"])]);
            assert_eq!(extracted[0].text, "Hello world");
        }

        #[test]
        fn preserves_length_and_order() {
            let input = blocks(json!([
                {"Type": "paragraph", "Paragraph": {"RichTexts": [{"PlainText": "a"}]}},
                {"Type": "divider"},
                {"Type": "quote", "Quote": {"RichTexts": [{"PlainText": "b"}]}}
            ]));

            let extracted = extract_blocks(&input);
            assert_eq!(extracted.len(), 3);
            assert_eq!(extracted[0].text, "a");
            assert_eq!(extracted[1], ContentBlock::empty());
            assert_eq!(extracted[2].text, "b");
        }

        #[test]
        fn unsupported_children_not_traversed() {
            // A toggle's nested paragraphs vanish with the toggle itself.
            let input = blocks(json!([{
                "Type": "toggle",
                "Toggle": {
                    "RichTexts": [{"PlainText": "hidden"}],
                    "Children": [{
                        "Type": "paragraph",
                        "Paragraph": {"RichTexts": [{"PlainText": "nested"}]}
                    }]
                }
            }]));

            assert_eq!(extract_blocks(&input), vec![ContentBlock::empty()]);
        }

        #[test]
        fn missing_payload_degrades_to_empty() {
            let input = blocks(json!([{"Type": "callout"}]));
            assert_eq!(extract_blocks(&input), vec![ContentBlock::empty()]);
        }

        #[test]
        fn recurses_into_supported_children() {
            let input = blocks(json!([{
                "Type": "bulleted_list_item",
                "BulletedListItem": {
                    "RichTexts": [{"PlainText": "outer"}],
                    "Children": [{
                        "Type": "bulleted_list_item",
                        "BulletedListItem": {"RichTexts": [{"PlainText": "inner"}]}
                    }]
                }
            }]));

            let extracted = extract_blocks(&input);
            assert_eq!(extracted[0].text, "outer");
            assert_eq!(extracted[0].children[0].text, "inner");
        }
    }

    mod flatten {
        use super::*;

        #[test]
        fn empty_input_is_empty_string() {
            assert_eq!(flatten_text(&[]), "");
        }

        #[test]
        fn single_block_ends_with_newline() {
            let extracted = extract_blocks(&[paragraph(&["Hello", "world"])]);
            assert_eq!(flatten_text(&extracted), "Hello world\n");
        }

        #[test]
        fn parent_text_precedes_child_text() {
            let input = blocks(json!([{
                "Type": "heading_1",
                "Heading1": {
                    "RichTexts": [{"PlainText": "Intro"}],
                    "Children": [{
                        "Type": "paragraph",
                        "Paragraph": {"RichTexts": [{"PlainText": "Body"}]}
                    }]
                }
            }]));

            assert_eq!(flatten_text(&extract_blocks(&input)), "Intro\nBody\n");
        }

        #[test]
        fn siblings_keep_input_order() {
            let extracted = extract_blocks(&[paragraph(&["first"]), paragraph(&["second"])]);
            assert_eq!(flatten_text(&extracted), "first\n\nsecond\n");
        }
    }

    mod stats {
        use super::*;

        #[test]
        fn empty_page_counts_one_word() {
            let stats = page_stats(&[]);
            assert_eq!(stats.word_count, 1);
            assert_eq!(stats.read_time, "0 min");
        }

        #[test]
        fn all_unsupported_counts_one_word() {
            let input = blocks(json!([
                {"Type": "divider"},
                {"Type": "image"},
                {"Type": "code"}
            ]));

            let stats = page_stats(&input);
            assert_eq!(stats.word_count, 1);
            assert_eq!(stats.read_time, "0 min");
        }

        #[test]
        fn two_words_round_to_a_hundredth() {
            let stats = page_stats(&[paragraph(&["Hello", "world"])]);
            assert_eq!(stats.word_count, 2);
            assert_eq!(stats.read_time, "0.01 min");
        }

        #[test]
        fn exact_minutes_drop_trailing_zeroes() {
            let words: Vec<String> = (0..1050).map(|i| format!("w{i}")).collect();
            let runs: Vec<&str> = words.iter().map(String::as_str).collect();

            let stats = page_stats(&[paragraph(&runs)]);
            assert_eq!(stats.word_count, 1050);
            assert_eq!(stats.read_time, "4.2 min");
        }

        #[test]
        fn whitespace_in_runs_inflates_count() {
            // "Hello " + " " + "world" has a doubled boundary: three fields.
            let stats = page_stats(&[paragraph(&["Hello ", "world"])]);
            assert_eq!(stats.word_count, 3);
        }

        #[test]
        fn idempotent() {
            let input = [paragraph(&["same", "every", "time"])];
            assert_eq!(page_stats(&input), page_stats(&input));
        }

        #[test]
        fn whole_minute_formats_without_fraction() {
            let words: Vec<String> = (0..250).map(|i| format!("w{i}")).collect();
            let runs: Vec<&str> = words.iter().map(String::as_str).collect();

            let stats = page_stats(&[paragraph(&runs)]);
            assert_eq!(stats.read_time, "1 min");
        }
    }

    mod skipped {
        use super::*;

        #[test]
        fn counts_degraded_blocks_at_any_depth() {
            let input = blocks(json!([
                {"Type": "divider"},
                {"Type": "paragraph", "Paragraph": {
                    "RichTexts": [{"PlainText": "kept"}],
                    "Children": [{"Type": "image"}]
                }},
                {"Type": "to_do"}
            ]));

            assert_eq!(skipped_blocks(&input), 3);
        }

        #[test]
        fn zero_for_fully_supported_tree() {
            assert_eq!(skipped_blocks(&[paragraph(&["all", "good"])]), 0);
        }
    }
}
