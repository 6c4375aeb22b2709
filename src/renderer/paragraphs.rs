//! Stage 5: paragraph wrapping.
//!
//! By this point every other construct is already final markup, so any
//! block that does not start with a block-level tag is prose: wrap it in
//! `<p>` and turn its interior line breaks into `<br>`.

use std::sync::LazyLock;

use regex::Regex;

use super::starts_with_block_tag;

/// One or more blank lines (possibly containing whitespace) separate
/// blocks; a run of them collapses into a single separator.
static BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("blank line pattern"));

pub(super) fn wrap(input: &str) -> String {
    let blocks: Vec<String> = BLANK_LINES
        .split(input)
        .map(|block| {
            let trimmed = block.trim();
            if trimmed.is_empty() {
                String::new()
            } else if starts_with_block_tag(trimmed) {
                trimmed.to_string()
            } else {
                format!("<p>{}</p>", trimmed.replace('\n', "<br>"))
            }
        })
        .collect();

    blocks.join("\n\n").trim().to_string()
}
