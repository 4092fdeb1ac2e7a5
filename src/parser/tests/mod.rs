//! Parser 单元测试
//!
//! 测试递归下降解析器、帧栈与快速路径
#![allow(unused_imports)]
use crate::name::Delimiter;
use crate::parser::{
    parse_if_trivial, parse_list, parse_name, try_parse_list, try_parse_name, ParseError, Parser,
};
use crate::typename::TypeName;


fn resolver(prefix: &str) -> Option<String> {
    match prefix {
        "" => Some("http://root".to_string()),
        "ns" => Some("http://example".to_string()),
        "empty" => Some(String::new()),
        _ => None,
    }
}

fn parse(text: &str) -> Result<TypeName, ParseError> {
    parse_name(text, Delimiter::Grave, resolver)
}

#[cfg(test)]
mod parse_name_tests {
    use super::*;

    #[test]
    fn test_prefixed_name() {
        let name = parse("ns:Foo").unwrap();
        assert_eq!(name.namespace(), "http://example");
        assert_eq!(name.name(), "Foo");
        assert!(name.type_args().is_empty());
    }

    #[test]
    fn test_unprefixed_name_uses_empty_prefix() {
        let name = parse("Foo").unwrap();
        assert_eq!(name.namespace(), "http://root");
        assert_eq!(name.name(), "Foo");
    }

    #[test]
    fn test_generic_with_two_args() {
        let name = parse("Foo(ns:Bar, ns:Baz)").unwrap();
        assert_eq!(name.name(), "Foo");
        assert_eq!(name.type_args().len(), 2);
        assert_eq!(name.type_args()[0].name(), "Bar");
        assert_eq!(name.type_args()[0].namespace(), "http://example");
        assert_eq!(name.type_args()[1].name(), "Baz");
        assert_eq!(name.type_args()[1].namespace(), "http://example");
    }

    #[test]
    fn test_nested_generics() {
        let name = parse("Foo(Bar(ns:Baz))").unwrap();
        assert_eq!(name.name(), "Foo");
        let bar = &name.type_args()[0];
        assert_eq!(bar.name(), "Bar");
        assert_eq!(bar.type_args()[0].name(), "Baz");
    }

    #[test]
    fn test_subscript_folds_into_name() {
        let name = parse("Foo[,]").unwrap();
        assert_eq!(name.name(), "Foo[,]");
        assert!(name.type_args().is_empty());
    }

    #[test]
    fn test_subscript_attaches_after_argument_list() {
        let name = parse("Foo(Bar)[,,]").unwrap();
        assert_eq!(name.name(), "Foo[,,]");
        assert_eq!(name.type_args().len(), 1);
        assert_eq!(name.type_args()[0].name(), "Bar");
    }

    #[test]
    fn test_consecutive_subscripts_concatenate() {
        let name = parse("Foo[][,]").unwrap();
        assert_eq!(name.name(), "Foo[][,]");
    }

    #[test]
    fn test_subscript_whitespace_kept_verbatim() {
        let name = parse("Foo[ , ]").unwrap();
        assert_eq!(name.name(), "Foo[ , ]");
    }

    #[test]
    fn test_surrounding_whitespace_ignored() {
        let name = parse("  ns:Foo ( ns:Bar )  ").unwrap();
        assert_eq!(name.name(), "Foo");
        assert_eq!(name.type_args()[0].name(), "Bar");
    }

    #[test]
    fn test_arity_suffixed_generic() {
        let name = parse("ns:List`1(ns:Int32)").unwrap();
        assert_eq!(name.name(), "List`1");
        assert_eq!(name.type_args()[0].name(), "Int32");
    }

    #[test]
    fn test_empty_namespace_accepted_by_full_parser() {
        let name = parse("empty:Foo").unwrap();
        assert_eq!(name.namespace(), "");
        assert_eq!(name.name(), "Foo");
    }
}

#[cfg(test)]
mod parse_name_error_tests {
    use super::*;

    #[test]
    fn test_unresolvable_prefix() {
        assert_eq!(
            parse("zz:Foo"),
            Err(ParseError::PrefixNotFound("zz".to_string()))
        );
    }

    #[test]
    fn test_unbalanced_paren() {
        assert_eq!(
            parse("Foo(Bar"),
            Err(ParseError::UnexpectedToken {
                expected: "')'",
                found: "end of input",
                input: "Foo(Bar".to_string(),
            })
        );
    }

    #[test]
    fn test_trailing_input() {
        assert!(matches!(
            parse("Foo Bar"),
            Err(ParseError::UnexpectedToken {
                expected: "end of input",
                ..
            })
        ));
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            parse(""),
            Err(ParseError::UnexpectedToken {
                expected: "a type name",
                ..
            })
        ));
    }

    #[test]
    fn test_prefix_without_name() {
        assert!(matches!(
            parse("ns:"),
            Err(ParseError::UnexpectedToken {
                expected: "a name after ':'",
                ..
            })
        ));
    }

    #[test]
    fn test_lexical_error_reports_offending_char() {
        assert_eq!(
            parse("Fo;o"),
            Err(ParseError::InvalidChar {
                ch: ';',
                input: "Fo;o".to_string(),
            })
        );
    }

    #[test]
    fn test_unterminated_subscript() {
        assert!(matches!(parse("Foo[,"), Err(ParseError::InvalidChar { .. })));
    }

    #[test]
    fn test_subscript_before_argument_list_rejected() {
        // Subscripts close the type; a '(' after them is trailing input.
        assert!(matches!(
            parse("Foo[,](Bar)"),
            Err(ParseError::UnexpectedToken {
                expected: "end of input",
                ..
            })
        ));
    }

    #[test]
    fn test_empty_argument_list_rejected() {
        assert!(matches!(
            parse("Foo()"),
            Err(ParseError::UnexpectedToken {
                expected: "a type name",
                ..
            })
        ));
    }

    #[test]
    fn test_error_is_terminal_no_partial_tree() {
        assert!(try_parse_name("Foo(Bar", Delimiter::Grave, resolver).is_none());
    }
}

#[cfg(test)]
mod parse_list_tests {
    use super::*;

    #[test]
    fn test_three_names_in_order() {
        let names = parse_list("A, B, C", Delimiter::Grave, resolver).unwrap();
        let names: Vec<&str> = names.iter().map(|n| n.name()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_single_name_list() {
        let names = parse_list("ns:Foo", Delimiter::Grave, resolver).unwrap();
        assert_eq!(names.len(), 1);
        assert_eq!(names[0].namespace(), "http://example");
    }

    #[test]
    fn test_generic_elements() {
        let names = parse_list("Foo(ns:Bar), Baz[,]", Delimiter::Grave, resolver).unwrap();
        assert_eq!(names.len(), 2);
        assert_eq!(names[0].type_args()[0].name(), "Bar");
        assert_eq!(names[1].name(), "Baz[,]");
    }

    #[test]
    fn test_trailing_comma_is_grammar_error() {
        assert!(matches!(
            parse_list("A,", Delimiter::Grave, resolver),
            Err(ParseError::UnexpectedToken {
                expected: "a type name",
                found: "end of input",
                ..
            })
        ));
    }

    #[test]
    fn test_no_fast_path_for_lists() {
        // A single trivial name still goes through the full parser and
        // keeps its empty resolved namespace.
        let names = parse_list("empty:Foo", Delimiter::Grave, resolver).unwrap();
        assert_eq!(names[0].namespace(), "");
    }

    #[test]
    fn test_try_parse_list() {
        assert!(try_parse_list("A, B", Delimiter::Grave, resolver).is_some());
        assert!(try_parse_list("A,,B", Delimiter::Grave, resolver).is_none());
    }
}

#[cfg(test)]
mod fast_path_tests {
    use super::*;

    #[test]
    fn test_trivial_name_resolves_without_parser() {
        let name = parse_if_trivial("ns:Foo.Bar", Delimiter::Grave, &resolver).unwrap();
        assert_eq!(name.namespace(), "http://example");
        assert_eq!(name.name(), "Foo.Bar");
    }

    #[test]
    fn test_fast_path_declines_parens_and_brackets() {
        assert!(parse_if_trivial("Foo(Bar)", Delimiter::Grave, &resolver).is_none());
        assert!(parse_if_trivial("Foo[,]", Delimiter::Grave, &resolver).is_none());
    }

    #[test]
    fn test_fast_path_declines_empty_namespace() {
        assert!(parse_if_trivial("empty:Foo", Delimiter::Grave, &resolver).is_none());
        // ...and the full parser still accepts it.
        assert_eq!(parse("empty:Foo").unwrap().namespace(), "");
    }

    #[test]
    fn test_fast_path_agrees_with_full_parser() {
        for text in ["Foo", "ns:Foo", "ns:Foo.Bar", "ns:List`1", "Outer+Inner"] {
            let fast = parse_if_trivial(text, Delimiter::Grave, &resolver).unwrap();
            let full = Parser::new(text, Delimiter::Grave, resolver)
                .parse_name_entry()
                .unwrap();
            assert_eq!(fast, full, "fast path diverged on {text:?}");
        }
    }
}

#[cfg(test)]
mod delimiter_tests {
    use super::*;

    #[test]
    fn test_alternate_delimiter() {
        let name = parse_name("ns:List~2(A, B)", Delimiter::Tilde, resolver).unwrap();
        assert_eq!(name.name(), "List~2");
        assert_eq!(name.type_args().len(), 2);
    }

    #[test]
    fn test_wrong_delimiter_is_lexical_error() {
        assert!(matches!(
            parse_name("ns:List~2", Delimiter::Grave, resolver),
            Err(ParseError::InvalidChar { ch: '~', .. })
        ));
    }
}
