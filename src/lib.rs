//! A renderer for the Markdown subset produced by AI drafting backends,
//! targeting rich-text editor surfaces.
//!
//! The output is an HTML fragment (no `<html>`/`<body>` shell) meant to be
//! assigned directly as the inner markup of an editable surface such as
//! Quill. The renderer is deliberately permissive: unrecognized or
//! malformed constructs pass through as literal text, and no input ever
//! produces an error. It does not sanitize HTML-significant characters;
//! escaping policy belongs to the caller.

mod renderer;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Renders a Markdown-subset string to an HTML fragment.
///
/// Supported constructs: ATX headings (`#` through `######`), bold/italic
/// emphasis (`*`/`_` runs), flat unordered and ordered lists, and
/// paragraphs with `<br>` line breaks. Everything else is passed through
/// unchanged.
///
/// # Examples
///
/// ```rust
/// use quillmark::render;
///
/// let html = render("## Notes\n\nSome *emphasis* here.");
/// assert_eq!(html, "<h2>Notes</h2>\n\n<p>Some <em>emphasis</em> here.</p>");
/// ```
///
/// # Arguments
///
/// * `input` - The Markdown-like text to render
pub fn render(input: &str) -> String {
    #[cfg(debug_assertions)]
    {
        init_logger();
    }

    let normalized = input.replace("\r\n", "\n");

    renderer::run(&normalized)
}

/// Splits a leading `# Title` line off a generated document body.
///
/// Drafting backends usually emit the post title as the first heading
/// line; the editor surface displays it separately, so the caller strips
/// it before rendering the body. Returns the title text (any heading
/// level) and the trimmed remainder. Input that does not begin with a
/// heading line is returned untouched.
pub fn strip_leading_title(input: &str) -> (Option<&str>, &str) {
    let hashes = input.chars().take_while(|&c| c == '#').count();
    if hashes == 0 {
        return (None, input);
    }

    // The title line must be terminated; a lone heading with no body is
    // left for the renderer.
    let Some((line, rest)) = input.split_once('\n') else {
        return (None, input);
    };

    let title = line[hashes..].trim();
    if title.is_empty() {
        return (None, input);
    }

    (Some(title), rest.trim())
}
