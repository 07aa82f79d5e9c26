//! JSDoc comments.

use typewriter_codegen::builder::Slot;

/// Render a description as a JSDoc block.
///
/// An absent or empty description yields [`Slot::OmitNextNewline`], so a
/// template that puts the comment on its own line does not leave a blank
/// line behind.
pub fn doc_comment(description: Option<&str>) -> Slot {
    let Some(description) = description.filter(|d| !d.trim().is_empty()) else {
        return Slot::OmitNextNewline;
    };

    let mut out = String::from("/**");
    for line in description.lines() {
        let line = line.trim_end().replace("*/", "*\\/");
        if line.is_empty() {
            out.push_str("\n *");
        } else {
            out.push_str("\n * ");
            out.push_str(&line);
        }
    }
    out.push_str("\n */");
    Slot::Text(out)
}
