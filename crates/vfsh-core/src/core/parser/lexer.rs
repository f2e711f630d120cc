//! Lexer for tokenizing shell input.
//!
//! Handles:
//! - Word splitting on space, tab, CR and LF only
//! - Single quotes (everything literal until the closing quote)
//! - Double quotes (backslash escapes only `"` and `\`)
//! - Backslash escapes outside quotes
//!
//! Adjacent segments join into one word, so `a"b c"'d'` is the single
//! word `ab cd`.

use super::ParseError;

// =============================================================================
// Lexer
// =============================================================================

/// Characters that separate words. Other Unicode spaces are word content.
fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Lexer for tokenizing shell input
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Tokenize the entire input into a vector of words.
    ///
    /// Stops at the first syntax error.
    pub fn tokenize(self) -> Result<Vec<String>, ParseError> {
        self.collect()
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.current_char()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.current_char() {
            if !is_separator(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn read_word(&mut self) -> Result<String, ParseError> {
        let mut word = String::new();

        while let Some(c) = self.current_char() {
            if is_separator(c) {
                break;
            }
            let start = self.pos;
            self.pos += c.len_utf8();

            match c {
                '\'' => self.read_single_quoted(start, &mut word)?,
                '"' => self.read_double_quoted(start, &mut word)?,
                '\\' => match self.bump() {
                    Some(escaped) => word.push(escaped),
                    None => return Err(ParseError::TrailingEscape { position: start }),
                },
                _ => word.push(c),
            }
        }

        Ok(word)
    }

    fn read_single_quoted(&mut self, open: usize, word: &mut String) -> Result<(), ParseError> {
        loop {
            match self.bump() {
                Some('\'') => return Ok(()),
                Some(c) => word.push(c),
                None => {
                    return Err(ParseError::UnterminatedQuote {
                        quote: '\'',
                        position: open,
                    });
                }
            }
        }
    }

    fn read_double_quoted(&mut self, open: usize, word: &mut String) -> Result<(), ParseError> {
        let unterminated = ParseError::UnterminatedQuote {
            quote: '"',
            position: open,
        };

        loop {
            match self.bump() {
                Some('"') => return Ok(()),
                Some('\\') => match self.bump() {
                    Some(c @ ('"' | '\\')) => word.push(c),
                    Some(c) => {
                        word.push('\\');
                        word.push(c);
                    }
                    None => return Err(unterminated),
                },
                Some(c) => word.push(c),
                None => return Err(unterminated),
            }
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<String, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();
        if self.pos >= self.input.len() {
            return None;
        }
        let word = self.read_word();
        if word.is_err() {
            // Nothing after a syntax error is trustworthy.
            self.pos = self.input.len();
        }
        Some(word)
    }
}

// =============================================================================
// Tests
// =============================================================================
