use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quillmark")]
#[command(author, version)]
#[command(about = "Render a Markdown subset to an HTML fragment")]
#[command(
    long_about = "Quillmark renders the Markdown subset emitted by AI drafting backends \
    (ATX headings, bold/italic emphasis, flat lists, paragraphs) into an HTML fragment \
    ready to drop into a rich-text editor surface. Unrecognized constructs pass through \
    as literal text; rendering never fails."
)]
#[command(after_help = "\
EXAMPLES:

    # Render a file to stdout
    quillmark render draft.md

    # Render from stdin
    cat draft.md | quillmark render

    # Strip the leading `# Title` line before rendering
    quillmark render --strip-title draft.md

    # Write the fragment to a file
    quillmark render draft.md -o post.html")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render Markdown-like text to an HTML fragment
    #[command(
        long_about = "Render Markdown-like text to an HTML fragment on stdout. Reads from \
        a file when given, otherwise from stdin. The output is a bare fragment (no \
        <html>/<body> shell) suitable for assigning to an editable surface."
    )]
    Render {
        /// Input file (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Strip a leading `# Title` heading line before rendering
        #[arg(long)]
        strip_title: bool,

        /// Write the fragment to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}
