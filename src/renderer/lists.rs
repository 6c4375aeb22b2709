//! Stages 3 and 4: list item folding and grouping.
//!
//! Each pass runs the same algorithm for one list kind: convert marker
//! lines (plus their continuation lines) into single-line items, then
//! group adjacent item lines under one wrapper. The ordered pass holds
//! its items in a temporary tag until its own grouping is done, so the
//! unordered grouping can never absorb an ordered item or vice versa.

use std::sync::LazyLock;

use regex::Regex;

use super::starts_with_block_tag;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    fn wrapper(self) -> &'static str {
        match self {
            ListKind::Unordered => "ul",
            ListKind::Ordered => "ol",
        }
    }

    /// Tag carried by a converted item until grouping completes.
    fn item_tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "li",
            ListKind::Ordered => "ol-li",
        }
    }
}

pub(super) fn rewrite_unordered(input: &str) -> String {
    rewrite(input, ListKind::Unordered)
}

pub(super) fn rewrite_ordered(input: &str) -> String {
    rewrite(input, ListKind::Ordered)
}

fn rewrite(input: &str, kind: ListKind) -> String {
    let converted = convert_items(input, kind);
    let grouped = group_items(&converted, kind);
    let normalized = match kind {
        ListKind::Unordered => grouped,
        // Any temporary tag the grouping scan did not reach (e.g. an
        // ordered marker inside pre-existing wrapper markup) becomes a
        // real list item here.
        ListKind::Ordered => grouped.replace("<ol-li>", "<li>").replace("</ol-li>", "</li>"),
    };
    sweep_empty_wrappers(&normalized, kind)
}

/// Returns the item content after this kind's marker, or `None` if the
/// line does not start a list item. Leading indentation is tolerated.
fn try_parse_marker(line: &str, kind: ListKind) -> Option<&str> {
    let trimmed = line.trim_start();
    match kind {
        ListKind::Unordered => {
            let ch = trimmed.chars().next()?;
            if !matches!(ch, '-' | '*' | '+') {
                return None;
            }
            let after = &trimmed[1..];
            if !after.starts_with(|c: char| c.is_whitespace()) {
                return None;
            }
            Some(after.trim_start())
        }
        ListKind::Ordered => {
            let digits = trimmed.chars().take_while(|c| c.is_ascii_digit()).count();
            if digits == 0 {
                return None;
            }
            let after = trimmed[digits..].strip_prefix('.')?;
            if !after.starts_with(|c: char| c.is_whitespace()) {
                return None;
            }
            Some(after.trim_start())
        }
    }
}

/// A continuation line folds into the current item: non-blank, not a new
/// marker of either kind, and not the start of an already-built block.
fn is_continuation(line: &str) -> bool {
    !line.trim().is_empty()
        && try_parse_marker(line, ListKind::Unordered).is_none()
        && try_parse_marker(line, ListKind::Ordered).is_none()
        && !starts_with_block_tag(line.trim_start())
}

fn convert_items(input: &str, kind: ListKind) -> String {
    let lines: Vec<&str> = input.split('\n').collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let tag = kind.item_tag();

    let mut i = 0;
    while i < lines.len() {
        let Some(first) = try_parse_marker(lines[i], kind) else {
            out.push(lines[i].to_string());
            i += 1;
            continue;
        };

        let mut item = vec![first];
        i += 1;
        while i < lines.len() && is_continuation(lines[i]) {
            item.push(lines[i]);
            i += 1;
        }

        let body = item.join("\n").trim().replace('\n', "<br>");
        out.push(format!("<{tag}>{body}</{tag}>"));
    }

    out.join("\n")
}

/// Wraps runs of adjacent item lines. A run ends at any non-item line,
/// including a blank one, so items separated by a blank line land in
/// separate wrappers. Item lines already inside a `<ul>`/`<ol>` are left
/// alone; re-rendering previously rendered output must not double-wrap.
fn group_items(input: &str, kind: ListKind) -> String {
    let item_open = format!("<{}>", kind.item_tag());
    let item_close = format!("</{}>", kind.item_tag());

    let mut out: Vec<String> = Vec::new();
    let mut run: Vec<String> = Vec::new();
    let mut depth = 0usize;

    let flush = |out: &mut Vec<String>, run: &mut Vec<String>| {
        if run.is_empty() {
            return;
        }
        log::debug!("grouping {} item(s) into <{}>", run.len(), kind.wrapper());
        out.push(format!("<{}>", kind.wrapper()));
        out.append(run);
        out.push(format!("</{}>", kind.wrapper()));
    };

    for line in input.split('\n') {
        let trimmed = line.trim();

        if depth == 0 && trimmed.starts_with(&item_open) && trimmed.ends_with(&item_close) {
            let inner = &trimmed[item_open.len()..trimmed.len() - item_close.len()];
            run.push(format!("<li>{inner}</li>"));
            continue;
        }

        flush(&mut out, &mut run);

        let opens = trimmed.matches("<ul>").count() + trimmed.matches("<ol>").count();
        let closes = trimmed.matches("</ul>").count() + trimmed.matches("</ol>").count();
        depth = (depth + opens).saturating_sub(closes);

        out.push(line.to_string());
    }
    flush(&mut out, &mut run);

    out.join("\n")
}

static EMPTY_UL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<ul>\s*</ul>\n?").expect("empty ul pattern"));
static EMPTY_OL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<ol>\s*</ol>\n?").expect("empty ol pattern"));

/// A wrapper that ended up with no items is dropped. The grouping scan
/// never emits one itself; this catches degenerate wrappers already
/// present in the input.
fn sweep_empty_wrappers(input: &str, kind: ListKind) -> String {
    let re = match kind {
        ListKind::Unordered => &EMPTY_UL,
        ListKind::Ordered => &EMPTY_OL,
    };
    re.replace_all(input, "").into_owned()
}
