#![allow(clippy::module_inception)]

use std::{fmt::Write, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

pub use errors::errors::LexicalError;
pub use lexer::lexer::{tokenize, tokenize_all};
pub use lexer::tokens::{filter_auxiliary, Token, TokenKind};

/// Byte offset into a named source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Returns the 1-based line number, the text of the line (newline included)
/// and the column of `position` within it.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos >= content.len() {
        return None;
    }

    let mut start = 0;

    for (line_number, line) in content.split_inclusive('\n').enumerate() {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number + 1, line.to_string(), pos - start));
        }

        start = end;
    }

    None
}

/// Renders `error` against `source`:
///
/// ```text
/// Error: UnrecognisedToken (You have an error in your syntax near 'a = #;')
/// -> main.java
///    |
/// 20 | a = #;
///    | ----^
/// ```
pub fn render_error(error: &Error, source: &str) -> String {
    let mut out = String::new();
    let position = error.get_position();

    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(out, "Error: {}", error.get_error_name());
    } else {
        let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    let _ = writeln!(out, "-> {}", position.1);

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let _ = writeln!(out, "{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let _ = writeln!(out, "{} | {}", line_string, line_text_removed.trim_end());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    let _ = writeln!(out, "{:>padding$} {:->arrows$}", "|", "^");
    out
}

pub fn display_error(error: &Error, source: &str) {
    print!("{}", render_error(error, source));
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string
        .bytes()
        .take_while(|b| *b == b' ' || *b == b'\t')
        .count();

    (&string[start..], start)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{errors::errors::Error, tokenize, Position};

    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nSecond\n\nTesting { }\n";

        let (line_number, line, line_pos) = super::get_line_at_position(source, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(source, 30).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);

        assert!(super::get_line_at_position(source, 99).is_none());
    }

    #[test]
    fn test_render_error_points_at_offending_character() {
        let source = "class A {\n    int x = 5 @ 3;\n}\n";
        let error: Error = tokenize(source, Some("A.java".to_string())).unwrap_err().into();

        let rendered = super::render_error(&error, source);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(
            lines[0],
            "Error: UnrecognisedToken (You have an error in your syntax near 'int x = 5 @ 3;')"
        );
        assert_eq!(lines[1], "-> A.java");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "2 | int x = 5 @ 3;");
        assert_eq!(lines[4], "  | ----------^");
    }

    #[test]
    fn test_render_error_without_line() {
        let error = Error::new(
            crate::errors::errors::ErrorImpl::UnrecognisedToken {
                token: "@".to_string(),
                snippet: String::new(),
            },
            Position(40, Rc::new("test.java".to_string())),
        );

        assert_eq!(
            super::render_error(&error, "short"),
            "Error: UnrecognisedToken\n-> test.java\n"
        );
    }
}
