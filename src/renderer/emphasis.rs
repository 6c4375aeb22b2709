//! Stage 2: inline emphasis.
//!
//! Rules run in priority order (triple, double, single delimiters) with
//! non-greedy spans, so text wrapped by an earlier rule carries no
//! delimiter characters for a later rule to re-match. Spans never cross a
//! line break; a stray unpaired delimiter stays literal on its line.

use std::sync::LazyLock;

use regex::Regex;

static RULES: LazyLock<[(Regex, &'static str); 6]> = LazyLock::new(|| {
    let re = |pattern| Regex::new(pattern).expect("emphasis pattern");
    [
        (re(r"\*\*\*(.*?)\*\*\*"), "<strong><em>$1</em></strong>"),
        (re(r"___(.*?)___"), "<strong><em>$1</em></strong>"),
        (re(r"\*\*(.*?)\*\*"), "<strong>$1</strong>"),
        (re(r"__(.*?)__"), "<strong>$1</strong>"),
        (re(r"\*(.*?)\*"), "<em>$1</em>"),
        (re(r"_(.*?)_"), "<em>$1</em>"),
    ]
});

pub(super) fn rewrite(input: &str) -> String {
    let mut text = input.to_string();
    for (re, replacement) in RULES.iter() {
        text = re.replace_all(&text, *replacement).into_owned();
    }
    text
}
