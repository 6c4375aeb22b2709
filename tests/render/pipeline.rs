use quillmark::render;

#[test]
fn empty_input_renders_empty() {
    assert_eq!(render(""), "");
    assert_eq!(render("   \n \n"), "");
}

#[test]
fn full_post_body() {
    let input = "\
## Morning in the Mountains

We woke before dawn and the valley was *still* dark.

### What we packed

- Water bottles
- A **very** old map
- Trail mix

1. Drive to the trailhead
2. Hike to the ridge

It was worth every step.";

    let expected = "\
<h2>Morning in the Mountains</h2>

<p>We woke before dawn and the valley was <em>still</em> dark.</p>

<h3>What we packed</h3>

<ul>
<li>Water bottles</li>
<li>A <strong>very</strong> old map</li>
<li>Trail mix</li>
</ul>

<ol>
<li>Drive to the trailhead</li>
<li>Hike to the ridge</li>
</ol>

<p>It was worth every step.</p>";

    similar_asserts::assert_eq!(render(input), expected);
}

#[test]
fn pathological_input_terminates() {
    // long unterminated emphasis runs must not blow up
    let stars = "*".repeat(10_000);
    let _ = render(&stars);

    let mixed = "# *\n- **\n1. ***\n\n_".repeat(500);
    let _ = render(&mixed);
}

#[test]
fn raw_html_is_not_escaped() {
    // sanitization is the caller's concern
    assert_eq!(
        render("a <script>alert(1)</script> b"),
        "<p>a <script>alert(1)</script> b</p>"
    );
}

#[test]
fn unrecognized_constructs_pass_through() {
    assert_eq!(
        render("> not a supported quote"),
        "<p>> not a supported quote</p>"
    );
    assert_eq!(render("| a | b |"), "<p>| a | b |</p>");
}
