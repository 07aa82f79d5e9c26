//! Indentation-aware template composition.

/// A value substituted into a template hole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    /// Text inserted at the hole. Lines after the first are re-indented to
    /// the column where the hole starts.
    Text(String),
    /// Inserts nothing and strips a leading `(space)*\n` from the literal
    /// that follows the hole.
    ///
    /// Used where an optional fragment (a doc comment, say) sits on its own
    /// line and is absent, so no empty line is left behind.
    OmitNextNewline,
}

impl Slot {
    /// A text slot from anything displayable.
    pub fn text(value: impl std::fmt::Display) -> Self {
        Slot::Text(value.to_string())
    }
}

impl From<&str> for Slot {
    fn from(value: &str) -> Self {
        Slot::Text(value.to_string())
    }
}

impl From<String> for Slot {
    fn from(value: String) -> Self {
        Slot::Text(value)
    }
}

impl From<&String> for Slot {
    fn from(value: &String) -> Self {
        Slot::Text(value.clone())
    }
}

/// Compose literals and slots into one string.
///
/// `literals[i]` is followed by `slots[i]`, and the last literal closes the
/// template. After substitution, one leading and one trailing `\n` are removed
/// from the whole result, and lines holding only whitespace become empty.
///
/// Missing literals count as empty; literals beyond `slots.len() + 1` are
/// ignored.
pub fn compose(literals: &[&str], slots: &[Slot]) -> String {
    let mut out = String::from(literals.first().copied().unwrap_or_default());

    for (i, slot) in slots.iter().enumerate() {
        let next = literals.get(i + 1).copied().unwrap_or_default();
        match slot {
            Slot::Text(value) => {
                let column = current_column(&out);
                push_indented(&mut out, value, column);
                out.push_str(next);
            }
            Slot::OmitNextNewline => out.push_str(strip_leading_newline(next)),
        }
    }

    collapse_blank_lines(trim_outer_newlines(&out))
}

/// Characters since the last newline.
fn current_column(text: &str) -> usize {
    let line_start = text.rfind('\n').map_or(0, |pos| pos + 1);
    text[line_start..].chars().count()
}

fn push_indented(out: &mut String, value: &str, column: usize) {
    let mut lines = value.split('\n');
    if let Some(first) = lines.next() {
        out.push_str(first);
    }
    for line in lines {
        out.push('\n');
        out.extend(std::iter::repeat_n(' ', column));
        out.push_str(line);
    }
}

/// Strip `^ *\n`; text without such a prefix is returned unchanged.
fn strip_leading_newline(text: &str) -> &str {
    text.trim_start_matches(' ')
        .strip_prefix('\n')
        .unwrap_or(text)
}

fn trim_outer_newlines(text: &str) -> &str {
    let text = text.strip_prefix('\n').unwrap_or(text);
    text.strip_suffix('\n').unwrap_or(text)
}

fn collapse_blank_lines(text: &str) -> String {
    text.split('\n')
        .map(|line| if line.trim().is_empty() { "" } else { line })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Compose a template written as one string with `${}` holes.
///
/// ```
/// use typewriter_codegen::source;
///
/// let members = "a: string\nb: number";
/// let out = source!("
/// interface X {
///     ${}
/// }
/// ", members);
/// assert_eq!(out, "interface X {\n    a: string\n    b: number\n}");
/// ```
#[macro_export]
macro_rules! source {
    ($template:expr $(, $slot:expr)* $(,)?) => {{
        let literals: ::std::vec::Vec<&str> = $template.split("${}").collect();
        $crate::builder::compose(&literals, &[$($crate::builder::Slot::from($slot)),*])
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source;

    #[test]
    fn test_plain_concatenation() {
        let out = compose(
            &["type ", " = ", ""],
            &[Slot::from("ID"), Slot::from("string")],
        );
        assert_eq!(out, "type ID = string");
    }

    #[test]
    fn test_multiline_value_is_indented_to_hole_column() {
        let out = compose(&["abc\n   ", ""], &[Slot::from("line1\nline2")]);
        assert_eq!(out, "abc\n   line1\n   line2");
    }

    #[test]
    fn test_column_counts_text_before_hole() {
        let out = source!("const x = ${}", "{\n  a: 1\n}");
        assert_eq!(out, "const x = {\n            a: 1\n          }");
    }

    #[test]
    fn test_column_counts_characters() {
        let out = source!("ä ${}", "1\n2");
        assert_eq!(out, "ä 1\n  2");
    }

    #[test]
    fn test_single_outer_newline_is_stripped() {
        assert_eq!(source!("\nein 2\n"), "ein 2");
    }

    #[test]
    fn test_only_one_outer_newline_is_stripped() {
        assert_eq!(source!("\n\nein 2\n\n"), "\nein 2\n");
    }

    #[test]
    fn test_omit_next_newline_removes_spaces_and_newline() {
        let out = compose(
            &["abc", "   \nabc"],
            &[Slot::OmitNextNewline],
        );
        assert_eq!(out, "abcabc");
    }

    #[test]
    fn test_omit_next_newline_keeps_text_after_first_newline() {
        let out = compose(&["a", "\n\n  b"], &[Slot::OmitNextNewline]);
        assert_eq!(out, "a\n  b");
    }

    #[test]
    fn test_omit_next_newline_ignores_literal_without_newline() {
        let out = compose(&["a", "  b\n"], &[Slot::OmitNextNewline]);
        assert_eq!(out, "a  b");
    }

    #[test]
    fn test_absent_comment_leaves_no_blank_line() {
        let render = |comment: Slot| compose(&["\n", "\nid: string\n"], &[comment]);

        assert_eq!(render(Slot::OmitNextNewline), "id: string");
        assert_eq!(
            render(Slot::from("/**\n * An id\n */")),
            "/**\n * An id\n */\nid: string"
        );
    }

    #[test]
    fn test_whitespace_only_lines_are_collapsed() {
        let out = source!("a\n    ${}\nb", "x\n\ny");
        assert_eq!(out, "a\n    x\n\n    y\nb");
    }

    #[test]
    fn test_nested_composition_keeps_structure() {
        let inner = source!("\n{\n    a: 1\n}\n");
        let outer = source!("\nlet x = [\n    ${}\n]\n", inner);
        assert_eq!(outer, "let x = [\n    {\n        a: 1\n    }\n]");
    }

    #[test]
    fn test_mismatched_slot_counts_do_not_panic() {
        assert_eq!(compose(&[], &[Slot::from("a")]), "a");
        assert_eq!(compose(&["a", "b", "c"], &[Slot::from("-")]), "a-b");
        assert_eq!(compose(&[], &[]), "");
    }

    #[test]
    fn test_slot_text_from_display() {
        assert_eq!(Slot::text(42), Slot::Text("42".to_string()));
    }
}
