//! Scanner module
//!
//! Converts a character stream into a token stream for the type-name
//! grammar. Three-state machine: `Start`, `InName`, `InSubscript`.
//! Punctuation that terminates a name is pushed back so the next
//! `read()` returns it without rescanning; lookahead depth is exactly
//! one token.

pub mod tokens;

pub use tokens::Token;

use crate::name::{
    is_valid_name_start, is_valid_qualified_name_char_extended, is_whitespace, Delimiter,
};
use std::iter::Peekable;
use std::str::CharIndices;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    InName,
    InSubscript,
}

/// Single-pass forward scanner over one input string.
///
/// Created per parse call and discarded after; holds no state beyond
/// the current position, the capture span, and one pushed-back token.
pub struct Scanner<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
    delimiter: Delimiter,
    state: State,
    pushed_back: Option<Token>,
    token_start: usize,
    token_end: usize,
    last_char: char,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str, delimiter: Delimiter) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
            delimiter,
            state: State::Start,
            pushed_back: None,
            token_start: 0,
            token_end: 0,
            last_char: '\0',
        }
    }

    /// The last character the scanner looked at, frozen for diagnostics.
    pub fn error_char(&self) -> char {
        self.last_char
    }

    /// Advance to and return the next token.
    pub fn read(&mut self) -> Token {
        if let Some(token) = self.pushed_back.take() {
            return token;
        }
        self.token_start = 0;
        self.token_end = 0;
        loop {
            let Some(&(idx, ch)) = self.chars.peek() else {
                // End of input: a pending name closes, a pending
                // subscript is a lexical fault.
                return match self.state {
                    State::Start => Token::None,
                    State::InName => {
                        self.state = State::Start;
                        Token::Name(self.collect())
                    }
                    State::InSubscript => {
                        self.state = State::Start;
                        Token::Error
                    }
                };
            };
            match self.state {
                State::Start => {
                    if is_whitespace(ch) {
                        self.chars.next();
                        continue;
                    }
                    self.last_char = ch;
                    self.chars.next();
                    match ch {
                        '(' => return Token::Open,
                        ')' => return Token::Close,
                        ',' => return Token::Comma,
                        ':' => return Token::Colon,
                        '[' => {
                            self.start_capture(idx, ch);
                            self.state = State::InSubscript;
                        }
                        c if is_valid_name_start(c) => {
                            self.start_capture(idx, c);
                            self.state = State::InName;
                        }
                        _ => return Token::Error,
                    }
                }
                State::InName => {
                    // Whitespace and '[' close the name without being
                    // consumed; the next read() starts fresh on them.
                    if is_whitespace(ch) || ch == '[' {
                        self.state = State::Start;
                        return Token::Name(self.collect());
                    }
                    self.last_char = ch;
                    self.chars.next();
                    let punct = match ch {
                        '(' => Some(Token::Open),
                        ')' => Some(Token::Close),
                        ',' => Some(Token::Comma),
                        ':' => Some(Token::Colon),
                        _ => None,
                    };
                    if let Some(punct) = punct {
                        self.pushed_back = Some(punct);
                        self.state = State::Start;
                        return Token::Name(self.collect());
                    }
                    if is_valid_qualified_name_char_extended(ch, self.delimiter) {
                        self.extend_capture(idx, ch);
                    } else {
                        return Token::Error;
                    }
                }
                State::InSubscript => {
                    self.last_char = ch;
                    self.chars.next();
                    match ch {
                        ']' => {
                            self.extend_capture(idx, ch);
                            self.state = State::Start;
                            return Token::Subscript(self.collect());
                        }
                        ',' => self.extend_capture(idx, ch),
                        c if is_whitespace(c) => self.extend_capture(idx, c),
                        _ => return Token::Error,
                    }
                }
            }
        }
    }

    fn start_capture(&mut self, idx: usize, ch: char) {
        self.token_start = idx;
        self.token_end = idx + ch.len_utf8();
    }

    fn extend_capture(&mut self, idx: usize, ch: char) {
        self.token_end = idx + ch.len_utf8();
    }

    fn collect(&self) -> String {
        self.input[self.token_start..self.token_end].to_string()
    }
}
