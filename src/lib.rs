//! Generic type-name parsing
//!
//! A textual grammar for naming possibly-generic, possibly-array types
//! with namespace prefixes, and the scanner/parser/formatter triad
//! that converts between that text and a structured [`TypeName`] tree:
//!
//! ```text
//! ns:Dictionary(ns:Key, other:Value)[,]
//! ```
//!
//! Parsing resolves each prefix through a caller-supplied resolver;
//! formatting renders the tree back to text under a caller-supplied
//! prefix-generation policy.
//!
//! # Example
//!
//! ```
//! use typename::{parse_name, Delimiter};
//!
//! let resolver = |prefix: &str| match prefix {
//!     "" => Some("clr-namespace:App".to_string()),
//!     "sys" => Some("clr-namespace:System".to_string()),
//!     _ => None,
//! };
//! let name = parse_name("List(sys:Int32)[]", Delimiter::default(), resolver).unwrap();
//! assert_eq!(name.name(), "List[]");
//! assert_eq!(name.type_args()[0].name(), "Int32");
//! ```

#![doc(html_root_url = "https://docs.rs/typename")]
#![warn(rust_2018_idioms)]

pub mod name;
mod scanner;

pub mod parser;
pub mod typename;

// Re-exports
pub use name::Delimiter;
pub use parser::{parse_list, parse_name, try_parse_list, try_parse_name, ParseError};
pub use typename::{FormatError, PrefixGenerator, TypeName};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
