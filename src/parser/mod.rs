//! Parser module
//!
//! Recursive-descent parser for the type-name grammar:
//!
//! ```text
//! TypeNameList := TypeName (',' TypeName)*
//! TypeName     := SimpleName ['(' TypeNameList ')'] Subscript*
//! SimpleName   := [Prefix ':'] NAME
//! ```
//!
//! The grammar productions recurse through the call stack, but tree
//! construction goes through an explicit stack of frames: a frame is
//! pushed when a simple name is recognized and popped exactly once
//! when its type (argument list and subscripts included) is complete.
//! The bottom sentinel frame collects the top-level results.

use crate::name::{split_qualified, Delimiter};
use crate::scanner::{Scanner, Token};
use crate::typename::TypeName;
use tracing::trace;

/// Parse error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid character '{ch}' in type name \"{input}\"")]
    InvalidChar { ch: char, input: String },

    #[error("unexpected {found} in type name \"{input}\", expected {expected}")]
    UnexpectedToken {
        expected: &'static str,
        found: &'static str,
        input: String,
    },

    #[error("\"{0}\" is not a valid type name")]
    InvalidTypeString(String),

    #[error("prefix \"{0}\" does not map to a namespace")]
    PrefixNotFound(String),
}

/// In-progress accumulator for one type name.
#[derive(Debug, Default)]
struct Frame {
    name: String,
    namespace: String,
    // Allocated on first use.
    type_args: Option<Vec<TypeName>>,
}

/// Parser state for one input string.
struct Parser<'a, R> {
    input: &'a str,
    scanner: Scanner<'a>,
    token: Token,
    stack: Vec<Frame>,
    resolver: R,
}

impl<'a, R> Parser<'a, R>
where
    R: Fn(&str) -> Option<String>,
{
    fn new(input: &'a str, delimiter: Delimiter, resolver: R) -> Self {
        Self {
            input,
            scanner: Scanner::new(input, delimiter),
            token: Token::None,
            // Bottom sentinel; its children are the final result.
            stack: vec![Frame::default()],
            resolver,
        }
    }

    fn bump(&mut self) {
        self.token = self.scanner.read();
    }

    fn unexpected(&self, expected: &'static str) -> ParseError {
        match self.token {
            Token::Error => ParseError::InvalidChar {
                ch: self.scanner.error_char(),
                input: self.input.to_string(),
            },
            ref token => ParseError::UnexpectedToken {
                expected,
                found: token.describe(),
                input: self.input.to_string(),
            },
        }
    }

    fn parse_name_entry(mut self) -> Result<TypeName, ParseError> {
        self.bump();
        self.p_type_name()?;
        if self.token != Token::None {
            return Err(self.unexpected("end of input"));
        }
        self.collect_name()
    }

    fn parse_list_entry(mut self) -> Result<Vec<TypeName>, ParseError> {
        self.bump();
        self.p_type_name_list()?;
        if self.token != Token::None {
            return Err(self.unexpected("end of input"));
        }
        self.collect_list()
    }

    fn p_type_name(&mut self) -> Result<(), ParseError> {
        let Token::Name(name) = self.token.clone() else {
            return Err(self.unexpected("a type name"));
        };
        self.p_simple_type_name(name)?;
        if self.token == Token::Open {
            self.p_type_parameters()?;
        }
        if matches!(self.token, Token::Subscript(_)) {
            self.p_repeating_subscript();
        }
        self.end_of_type();
        Ok(())
    }

    // The first NAME may turn out to be a prefix; a following ':'
    // decides. Lookahead never exceeds the scanner's one-token
    // pushback.
    fn p_simple_type_name(&mut self, first: String) -> Result<(), ParseError> {
        let mut prefix = String::new();
        let mut name = first;
        self.bump();
        if self.token == Token::Colon {
            prefix = name;
            self.bump();
            let Token::Name(real) = self.token.clone() else {
                return Err(self.unexpected("a name after ':'"));
            };
            name = real;
            self.bump();
        }
        self.found_name(prefix, name)
    }

    fn p_type_parameters(&mut self) -> Result<(), ParseError> {
        self.bump();
        self.p_type_name_list()?;
        if self.token != Token::Close {
            return Err(self.unexpected("')'"));
        }
        self.bump();
        Ok(())
    }

    fn p_type_name_list(&mut self) -> Result<(), ParseError> {
        self.p_type_name()?;
        while self.token == Token::Comma {
            self.bump();
            self.p_type_name()?;
        }
        Ok(())
    }

    // Array-rank suffixes concatenate verbatim onto the type name.
    fn p_repeating_subscript(&mut self) {
        while let Token::Subscript(suffix) = &self.token {
            let suffix = suffix.clone();
            if let Some(top) = self.stack.last_mut() {
                top.name.push_str(&suffix);
            }
            self.bump();
        }
    }

    fn found_name(&mut self, prefix: String, name: String) -> Result<(), ParseError> {
        let Some(namespace) = (self.resolver)(&prefix) else {
            return Err(ParseError::PrefixNotFound(prefix));
        };
        self.stack.push(Frame {
            name,
            namespace,
            type_args: None,
        });
        Ok(())
    }

    fn end_of_type(&mut self) {
        let Some(frame) = self.stack.pop() else {
            return;
        };
        let node = TypeName::with_args(
            frame.namespace,
            frame.name,
            frame.type_args.unwrap_or_default(),
        );
        if let Some(parent) = self.stack.last_mut() {
            parent.type_args.get_or_insert_with(Vec::new).push(node);
        }
    }

    fn collect_name(mut self) -> Result<TypeName, ParseError> {
        let mut args = self.collect_list()?;
        match args.pop() {
            Some(node) if args.is_empty() => Ok(node),
            _ => Err(ParseError::InvalidTypeString(self.input.to_string())),
        }
    }

    fn collect_list(&mut self) -> Result<Vec<TypeName>, ParseError> {
        if self.stack.len() != 1 {
            return Err(ParseError::InvalidTypeString(self.input.to_string()));
        }
        let Some(frame) = self.stack.pop() else {
            return Err(ParseError::InvalidTypeString(self.input.to_string()));
        };
        Ok(frame.type_args.unwrap_or_default())
    }
}

/// Parse a single type name.
///
/// `resolver` maps a prefix (possibly empty, for unprefixed names) to
/// its namespace; a `None` resolution fails the parse. The input must
/// contain exactly one type name and nothing else.
///
/// # Example
/// ```
/// use typename::{parse_name, Delimiter};
///
/// let resolver = |prefix: &str| match prefix {
///     "ns" => Some("http://example".to_string()),
///     _ => None,
/// };
/// let name = parse_name("ns:Foo", Delimiter::default(), resolver).unwrap();
/// assert_eq!(name.namespace(), "http://example");
/// assert_eq!(name.name(), "Foo");
/// ```
pub fn parse_name<R>(text: &str, delimiter: Delimiter, resolver: R) -> Result<TypeName, ParseError>
where
    R: Fn(&str) -> Option<String>,
{
    trace!(input = text, "parse type name");
    if let Some(name) = parse_if_trivial(text, delimiter, &resolver) {
        return Ok(name);
    }
    Parser::new(text, delimiter, resolver).parse_name_entry()
}

/// Parse a comma-separated list of type names, in order.
pub fn parse_list<R>(
    text: &str,
    delimiter: Delimiter,
    resolver: R,
) -> Result<Vec<TypeName>, ParseError>
where
    R: Fn(&str) -> Option<String>,
{
    trace!(input = text, "parse type name list");
    Parser::new(text, delimiter, resolver).parse_list_entry()
}

/// [`parse_name`] with success exposed as `Option`.
pub fn try_parse_name<R>(text: &str, delimiter: Delimiter, resolver: R) -> Option<TypeName>
where
    R: Fn(&str) -> Option<String>,
{
    parse_name(text, delimiter, resolver).ok()
}

/// [`parse_list`] with success exposed as `Option`.
pub fn try_parse_list<R>(text: &str, delimiter: Delimiter, resolver: R) -> Option<Vec<TypeName>>
where
    R: Fn(&str) -> Option<String>,
{
    parse_list(text, delimiter, resolver).ok()
}

// Fast path: a name with no argument list and no subscript is checked
// against the qualified-name grammar and resolved in one step. Any
// rejection falls back to the full parser, which owns error reporting.
// The fast path also insists on a non-empty namespace; the full parser
// accepts an empty one, so that case falls through as well.
fn parse_if_trivial<R>(text: &str, delimiter: Delimiter, resolver: &R) -> Option<TypeName>
where
    R: Fn(&str) -> Option<String>,
{
    if text.contains('(') || text.contains('[') {
        return None;
    }
    let (prefix, name) = split_qualified(text, delimiter)?;
    let namespace = resolver(prefix)?;
    if namespace.is_empty() {
        return None;
    }
    Some(TypeName::new(namespace, name))
}

#[cfg(test)]
mod tests;
