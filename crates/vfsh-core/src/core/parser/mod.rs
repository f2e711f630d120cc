//! Command line parser.
//!
//! Splits a raw line into words using POSIX shell quoting rules and
//! separates the command name from its arguments:
//! - Quote handling: `"string with spaces"`, `'literal string'`
//! - Escapes: `a\ b` outside quotes, `\"` and `\\` inside double quotes
//! - Unterminated quotes are reported instead of guessed at

mod lexer;

pub use lexer::Lexer;

use thiserror::Error;

// =============================================================================
// Parse Error
// =============================================================================

/// Structured error type for tokenizing failures.
///
/// Positions are byte offsets into the raw line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Quote opened and never closed: `cat "notes.txt`
    #[error("syntax error at column {}: unterminated {quote} quote", .position + 1)]
    UnterminatedQuote { quote: char, position: usize },
    /// Backslash at the very end of the line: `cd foo\`
    #[error("syntax error at column {}: no character to escape", .position + 1)]
    TrailingEscape { position: usize },
}

// =============================================================================
// Command Representation
// =============================================================================

/// A tokenized command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub name: String,
    pub args: Vec<String>,
}

// =============================================================================
// Parser
// =============================================================================

/// Tokenize a raw line into a command.
///
/// Returns `Ok(None)` for a line with no words (blank or whitespace only).
pub fn parse_input(input: &str) -> Result<Option<ParsedCommand>, ParseError> {
    let mut words = Lexer::new(input).tokenize()?.into_iter();
    Ok(words.next().map(|name| ParsedCommand {
        name,
        args: words.collect(),
    }))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_and_args() {
        let cmd = parse_input("head notes.txt 3").unwrap().unwrap();
        assert_eq!(cmd.name, "head");
        assert_eq!(cmd.args, vec!["notes.txt", "3"]);
    }

    #[test]
    fn test_parse_blank_line() {
        assert_eq!(parse_input(""), Ok(None));
        assert_eq!(parse_input("   \t "), Ok(None));
    }

    #[test]
    fn test_parse_quoted_argument() {
        let cmd = parse_input("cat 'my notes.txt'").unwrap().unwrap();
        assert_eq!(cmd.args, vec!["my notes.txt"]);
    }

    #[test]
    fn test_parse_unterminated_quote() {
        assert_eq!(
            parse_input("cat \"notes.txt"),
            Err(ParseError::UnterminatedQuote {
                quote: '"',
                position: 4
            })
        );
    }

    #[test]
    fn test_parse_error_message() {
        let err = parse_input("ls 'abc").unwrap_err();
        assert_eq!(
            err.to_string(),
            "syntax error at column 4: unterminated ' quote"
        );
    }
}
