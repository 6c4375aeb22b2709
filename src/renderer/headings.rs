//! Stage 1: ATX-style headings.

use std::sync::LazyLock;

use regex::Regex;

/// One rule per level, most hashes first so a `######` line is never
/// captured by a shorter run. Each line is matched independently.
static RULES: LazyLock<Vec<(Regex, String)>> = LazyLock::new(|| {
    (1..=6)
        .rev()
        .map(|level| {
            let pattern = format!(r"(?m)^#{{{level}}}\s+(.*)$");
            let replacement = format!("<h{level}>$1</h{level}>");
            (Regex::new(&pattern).expect("heading pattern"), replacement)
        })
        .collect()
});

pub(super) fn rewrite(input: &str) -> String {
    let mut text = input.to_string();
    for (re, replacement) in RULES.iter() {
        text = re.replace_all(&text, replacement.as_str()).into_owned();
    }
    text
}
