//! Token types

/// One token of the type-name grammar.
///
/// Tokens are produced one at a time and never retained past the parser
/// step that reads them; `Name` and `Subscript` carry their captured
/// text span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// End of input.
    None,
    /// Lexical fault; the offending character is frozen on the scanner.
    Error,
    /// `(`
    Open,
    /// `)`
    Close,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// A bracketed rank marker such as `[,,]`, captured verbatim.
    Subscript(String),
    /// An identifier, possibly dotted or arity-suffixed.
    Name(String),
}

impl Token {
    /// Short description for diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            Token::None => "end of input",
            Token::Error => "an invalid character",
            Token::Open => "'('",
            Token::Close => "')'",
            Token::Colon => "':'",
            Token::Comma => "','",
            Token::Subscript(_) => "a subscript",
            Token::Name(_) => "a name",
        }
    }
}
