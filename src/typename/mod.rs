//! Type-name tree and stringifier
//!
//! [`TypeName`] is the structured result of parsing one generic/array
//! type reference: a resolved namespace, a raw local name (which may
//! carry a verbatim array-subscript suffix such as `Foo[,]`), and an
//! ordered list of type-argument children. Nodes are immutable once
//! constructed and exclusively own their children.

use crate::name::Delimiter;
use crate::parser;

/// Prefix-generation policy for stringification: maps a namespace to a
/// short prefix, or `None` when no prefix can be generated.
pub type PrefixGenerator<'a> = &'a dyn Fn(&str) -> Option<String>;

/// Stringification error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("cannot generate a prefix for namespace \"{0}\"")]
    CannotGeneratePrefix(String),

    #[error("type name has an empty name")]
    EmptyName,
}

/// A parsed type name: namespace, local name, type arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeName {
    namespace: String,
    name: String,
    type_args: Vec<TypeName>,
}

impl TypeName {
    /// A non-generic type name.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            type_args: Vec::new(),
        }
    }

    /// A type name with type arguments.
    pub fn with_args(
        namespace: impl Into<String>,
        name: impl Into<String>,
        type_args: Vec<TypeName>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            type_args,
        }
    }

    /// The resolved namespace. Opaque: never parsed further.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The raw local name, including any array-subscript suffix.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The ordered type arguments; empty for non-generic types.
    pub fn type_args(&self) -> &[TypeName] {
        &self.type_args
    }

    pub fn has_type_args(&self) -> bool {
        !self.type_args.is_empty()
    }

    /// Parse a single type name. See [`parser::parse_name`].
    pub fn parse<R>(
        text: &str,
        delimiter: Delimiter,
        resolver: R,
    ) -> Result<TypeName, parser::ParseError>
    where
        R: Fn(&str) -> Option<String>,
    {
        parser::parse_name(text, delimiter, resolver)
    }

    /// Parse a comma-separated type-name list. See [`parser::parse_list`].
    pub fn parse_list<R>(
        text: &str,
        delimiter: Delimiter,
        resolver: R,
    ) -> Result<Vec<TypeName>, parser::ParseError>
    where
        R: Fn(&str) -> Option<String>,
    {
        parser::parse_list(text, delimiter, resolver)
    }

    /// Render this type name back to text.
    ///
    /// With a generator, the namespace is rendered as `prefix:`; an
    /// empty generated prefix omits the prefix and the colon, and a
    /// `None` result fails. Without a generator the namespace is
    /// emitted in raw braced form, `{namespace}name`. Subscript
    /// suffixes always render after the closing parenthesis:
    /// `Foo(Bar)[,]`, never `Foo[,](Bar)`.
    pub fn format(&self, generator: Option<PrefixGenerator<'_>>) -> Result<String, FormatError> {
        let mut out = String::new();
        self.format_into(&mut out, generator)?;
        Ok(out)
    }

    /// Render a list of type names joined by `", "`.
    pub fn format_list(
        names: &[TypeName],
        generator: Option<PrefixGenerator<'_>>,
    ) -> Result<String, FormatError> {
        let mut out = String::new();
        format_list_into(&mut out, names, generator)?;
        Ok(out)
    }

    fn format_into(
        &self,
        out: &mut String,
        generator: Option<PrefixGenerator<'_>>,
    ) -> Result<(), FormatError> {
        if self.name.is_empty() {
            return Err(FormatError::EmptyName);
        }
        match generator {
            None => {
                out.push('{');
                out.push_str(&self.namespace);
                out.push('}');
            }
            Some(generator) => match generator(&self.namespace) {
                None => return Err(FormatError::CannotGeneratePrefix(self.namespace.clone())),
                Some(prefix) if prefix.is_empty() => {}
                Some(prefix) => {
                    out.push_str(&prefix);
                    out.push(':');
                }
            },
        }
        if self.has_type_args() {
            let (base, subscript) = strip_subscript(&self.name);
            out.push_str(base);
            out.push('(');
            format_list_into(out, &self.type_args, generator)?;
            out.push(')');
            out.push_str(subscript);
        } else {
            out.push_str(&self.name);
        }
        Ok(())
    }
}

fn format_list_into(
    out: &mut String,
    names: &[TypeName],
    generator: Option<PrefixGenerator<'_>>,
) -> Result<(), FormatError> {
    for (i, name) in names.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        name.format_into(out, generator)?;
    }
    Ok(())
}

/// Split a name into its base and its verbatim subscript suffix
/// (empty when the name carries no subscript).
pub(crate) fn strip_subscript(name: &str) -> (&str, &str) {
    match name.find('[') {
        Some(idx) => name.split_at(idx),
        None => (name, ""),
    }
}
