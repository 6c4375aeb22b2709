//! The rendering pipeline: an ordered list of text-rewrite stages.
//!
//! Each stage consumes the previous stage's output and produces a new
//! string; no stage mutates in place. The order is a contract, not an
//! accident:
//!
//! 1. Headings and emphasis run first so the line-anchored list and
//!    paragraph scans never fire on half-transformed text.
//! 2. The unordered and ordered list passes run separately; the ordered
//!    pass holds its items in a temporary tag until grouping finishes so
//!    neither pass can absorb the other's items.
//! 3. Paragraph wrapping runs last because its block check depends on the
//!    list and heading tags already being present.

use std::sync::LazyLock;

use regex::Regex;

mod emphasis;
mod headings;
mod lists;
mod paragraphs;

/// A single rewrite stage.
type Stage = fn(&str) -> String;

const STAGES: [Stage; 5] = [
    headings::rewrite,
    emphasis::rewrite,
    lists::rewrite_unordered,
    lists::rewrite_ordered,
    paragraphs::wrap,
];

pub(crate) fn run(input: &str) -> String {
    let mut text = input.to_string();
    for (i, stage) in STAGES.iter().enumerate() {
        text = stage(&text);
        log::trace!("stage {} produced {} bytes", i + 1, text.len());
    }
    text
}

static BLOCK_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^<(ul|ol|li|h[1-6]|blockquote|hr|pre|table)").expect("block tag pattern")
});

/// Check if text begins with a block-level tag. Used by the paragraph
/// stage to avoid wrapping finished blocks and by the list stages to stop
/// continuation folding at a block boundary.
pub(crate) fn starts_with_block_tag(text: &str) -> bool {
    BLOCK_TAG.is_match(text)
}
