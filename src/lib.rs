#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod compiler;
pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

pub use config::Config;

/// Byte offset into a named source.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn null() -> Self {
        Span {
            start: Position::null(),
            end: Position::null(),
        }
    }
}

/// Finds the line containing the byte offset `position`.
///
/// Returns the 1-based line number, the line text and the offset of `position`
/// within that line. A position at the very end of the source (where EOF errors
/// point) resolves to the last line.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > content.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;
    let mut last = None;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        last = Some((line_number, line.to_string(), pos - start));
        start = end;
        line_number += 1;
    }

    // Only reachable when pos == content.len()
    last.or_else(|| Some((1, String::new(), 0)))
}

/// Writes the single-line diagnostic for `error` to stderr.
pub fn report_error(error: &Error) {
    eprintln!("{}", format_error_line(error));
}

/// The `Error: <message>` line every parse failure is reported as.
pub fn format_error_line(error: &Error) -> String {
    format!("Error: {}", error)
}

/// Renders `error` with the offending source line underneath.
///
/// ```text
/// Error: expected 'else'
/// -> input.kal
///   |
/// 1 | if a b c
///   | -------^
/// ```
pub fn display_error(error: &Error, source: &str) -> String {
    let mut out = format_error_line(error);

    if let ErrorTip::Suggestion(tip) = error.get_tip() {
        out.push_str(&format!(" ({})", tip));
    }
    out.push('\n');

    let position = error.get_position();
    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("-> {}\n", position.1));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string.len() - string.trim_start_matches(' ').len();
    (&string[start..], start)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        errors::errors::{Error, ErrorImpl},
        Position,
    };

    #[test]
    fn test_get_line_at_position() {
        let content = "Hello, world!\nfoo\nbar\nTesting { }\n";

        let (line_number, line, line_pos) = super::get_line_at_position(content, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(content, 30).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_at_end_of_source() {
        let (line_number, line, line_pos) = super::get_line_at_position("if a b", 6).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "if a b");
        assert_eq!(line_pos, 6);

        assert!(super::get_line_at_position("abc", 10).is_none());
    }

    #[test]
    fn test_format_error_line() {
        let error = Error::new(
            ErrorImpl::ExpectedElse,
            Position(4, Rc::new("test.kal".to_string())),
        );
        assert_eq!(super::format_error_line(&error), "Error: expected 'else'");
    }

    #[test]
    fn test_display_error_points_at_column() {
        let error = Error::new(
            ErrorImpl::ExpectedElse,
            Position(7, Rc::new("test.kal".to_string())),
        );
        let rendered = super::display_error(&error, "if a b c");
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Error: expected 'else'");
        assert_eq!(lines[1], "-> test.kal");
        assert_eq!(lines[3], "1 | if a b c");
        assert_eq!(lines[4], "  | -------^");
    }
}
