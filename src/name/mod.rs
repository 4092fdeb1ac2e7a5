//! Name validation
//!
//! Pure character-class predicates shared by the scanner and the
//! trivial-name fast path, plus the [`Delimiter`] enum for the one
//! configurable character of the grammar.

/// Characters treated as whitespace by the scanner.
pub const WHITESPACE_CHARS: &[char] = &[' ', '\t', '\n', '\r', '\x0c'];

/// Substitute for the canonical generic-arity marker inside a bare name.
///
/// A name like ``List`1`` encodes "arity 1" with the marker character.
/// When the backquote is unusable in the surrounding text format, the
/// caller picks one of the alternates. The chosen character is also
/// accepted as a valid name-continuation character in extended mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Delimiter {
    /// `` ` `` — the canonical arity marker.
    #[default]
    Grave,
    /// `~`
    Tilde,
    /// `!`
    Exclamation,
    /// `@`
    At,
    /// `#`
    Pound,
    /// `$`
    Dollar,
    /// `%`
    Percent,
    /// `^`
    Caret,
    /// `*`
    Star,
    /// `|`
    Pipe,
    /// `/`
    Slash,
    /// `\`
    Backslash,
    /// `?`
    Question,
    /// `=`
    Equals,
}

impl Delimiter {
    /// The raw character this delimiter stands for.
    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            Delimiter::Grave => '`',
            Delimiter::Tilde => '~',
            Delimiter::Exclamation => '!',
            Delimiter::At => '@',
            Delimiter::Pound => '#',
            Delimiter::Dollar => '$',
            Delimiter::Percent => '%',
            Delimiter::Caret => '^',
            Delimiter::Star => '*',
            Delimiter::Pipe => '|',
            Delimiter::Slash => '/',
            Delimiter::Backslash => '\\',
            Delimiter::Question => '?',
            Delimiter::Equals => '=',
        }
    }
}

/// Whitespace as the grammar defines it (space, tab, LF, CR, FF).
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0c')
}

/// A character that can begin a name: a letter or `_`.
#[inline]
pub fn is_valid_name_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

/// A character that can continue a name: a start character, a digit,
/// or a combining mark.
#[inline]
pub fn is_valid_name_char(c: char) -> bool {
    is_valid_name_start(c) || c.is_numeric() || is_combining_mark(c)
}

/// A character that can continue a dotted (qualified) name.
#[inline]
pub fn is_valid_qualified_name_char(c: char) -> bool {
    c == '.' || is_valid_name_char(c)
}

/// Qualified-name continuation in extended mode: additionally accepts
/// `+` (nested types) and the configured delimiter (arity suffixes).
#[inline]
pub fn is_valid_qualified_name_char_extended(c: char, delimiter: Delimiter) -> bool {
    is_valid_qualified_name_char(c) || c == '+' || c == delimiter.as_char()
}

// Unicode nonspacing / spacing-combining marks. The stdlib exposes no
// category query; combining marks are the non-ASCII XID_Continue
// characters that are neither letters nor digits.
#[inline]
fn is_combining_mark(c: char) -> bool {
    !c.is_ascii() && !c.is_alphanumeric() && unicode_ident::is_xid_continue(c)
}

/// A whole string is a valid plain name: start char, then name chars.
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_valid_name_start(first) => chars.all(is_valid_name_char),
        _ => false,
    }
}

/// A whole string is a valid dotted name (used for prefixes).
pub fn is_valid_qualified_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_valid_name_start(first) => chars.all(is_valid_qualified_name_char),
        _ => false,
    }
}

/// A whole string is a valid dotted name in extended mode.
pub fn is_valid_qualified_name_extended(name: &str, delimiter: Delimiter) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_valid_name_start(first) => {
            chars.all(|c| is_valid_qualified_name_char_extended(c, delimiter))
        }
        _ => false,
    }
}

/// Split `[prefix ':'] name` without running the scanner.
///
/// The first `:` separates the prefix (validated against the plain
/// qualified grammar) from the name (validated against the extended
/// grammar). Returns `None` if either part is invalid. A missing colon
/// yields the empty prefix.
pub fn split_qualified(text: &str, delimiter: Delimiter) -> Option<(&str, &str)> {
    let (prefix, name) = match text.find(':') {
        Some(idx) => {
            let prefix = &text[..idx];
            if prefix.is_empty() || !is_valid_qualified_name(prefix) {
                return None;
            }
            (prefix, &text[idx + 1..])
        }
        None => ("", text),
    };
    if name.is_empty() || !is_valid_qualified_name_extended(name, delimiter) {
        return None;
    }
    Some((prefix, name))
}
