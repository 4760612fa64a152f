//! Tree builder for the curve dialect
//!
//! A single pass over the token stream maintains a stack of open elements.
//! Recognized start tags push a new element; a recognized end tag must
//! match the open element's kind, which then pops and attaches to its
//! parent, or becomes the finished root when the wrapper closes. Text
//! tokens attach leaf payloads to the open element.
//!
//! Unrecognized tags are structurally transparent in both forms: no
//! element is created for them, and their content attaches to whichever
//! recognized element is currently open. This can silently drop structural
//! grouping around the content of unknown wrappers; it is a documented
//! limitation of the dialect, not an error.
//!
//! An unterminated document yields whatever completed before the end of
//! input: if the wrapper never closes, the result is `Ok(None)`.

use crate::ast::{Element, OpKind, ParseError, Payload, TagKind, TrigFn};
use crate::lexer::{Span, Token};

/// Build the element tree from a spanned token stream.
///
/// `Ok(None)` is the degenerate result for a stream that never opens (and
/// closes) the wrapper, e.g. empty input.
pub fn parse(tokens: &[(Token, Span)]) -> Result<Option<Element>, ParseError> {
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    for (token, span) in tokens {
        let position = span.start;
        match token {
            Token::Tag(tag) => {
                let Some(kind) = TagKind::classify(tag) else {
                    // Undefined tag: transparent, no stack change.
                    continue;
                };
                if !tag.starts_with("</") {
                    open_element(kind, position, &mut stack, &root)?;
                } else {
                    close_element(kind, position, &mut stack, &mut root)?;
                }
            }
            Token::Text(text) => attach_payload(text, position, &mut stack)?,
        }
    }

    Ok(root)
}

fn open_element(
    kind: TagKind,
    position: usize,
    stack: &mut Vec<Element>,
    root: &Option<Element>,
) -> Result<(), ParseError> {
    if kind.is_wrapper() {
        if root.is_some() || !stack.is_empty() {
            return Err(ParseError::DuplicateRoot { position });
        }
    } else if stack.is_empty() {
        return Err(ParseError::OrphanElement { kind, position });
    }
    stack.push(Element::new(kind));
    Ok(())
}

fn close_element(
    kind: TagKind,
    position: usize,
    stack: &mut Vec<Element>,
    root: &mut Option<Element>,
) -> Result<(), ParseError> {
    let Some(open) = stack.pop() else {
        return Err(ParseError::UnmatchedClose {
            found: kind,
            position,
        });
    };
    if open.kind != kind {
        return Err(ParseError::MalformedNesting {
            expected: open.kind,
            found: kind,
            position,
        });
    }
    match stack.last_mut() {
        Some(parent) => parent.push_child(open),
        None => *root = Some(open),
    }
    Ok(())
}

/// Interpret a text token against the open element's kind.
///
/// Text under grouping kinds, or with nothing open at all, is ignored.
fn attach_payload(
    text: &str,
    position: usize,
    stack: &mut [Element],
) -> Result<(), ParseError> {
    let Some(open) = stack.last_mut() else {
        return Ok(());
    };
    match open.kind {
        TagKind::Mi => {
            open.payload = Some(match TrigFn::from_name(text) {
                Some(f) => Payload::Trig(f),
                None => Payload::Ident(text.to_string()),
            });
        }
        TagKind::Mo => match OpKind::from_spelling(text) {
            Some(op) => open.payload = Some(Payload::Op(op)),
            None => {
                return Err(ParseError::UnsupportedOperator {
                    text: text.to_string(),
                    position,
                })
            }
        },
        TagKind::Mn => match text.parse::<f64>() {
            Ok(value) => open.payload = Some(Payload::Num(value)),
            Err(_) => {
                return Err(ParseError::InvalidNumber {
                    text: text.to_string(),
                    position,
                })
            }
        },
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize_with_spans;

    fn parse_str(source: &str) -> Result<Option<Element>, ParseError> {
        parse(&tokenize_with_spans(source))
    }

    #[test]
    fn builds_a_leaf_row() {
        let root = parse_str("<semantics><mrow><mi>x</mi><mo>+</mo><mn>5</mn></mrow></semantics>")
            .unwrap()
            .unwrap();

        assert_eq!(root.kind, TagKind::Semantics);
        assert_eq!(root.children.len(), 1);
        let row = &root.children[0];
        assert_eq!(row.kind, TagKind::Mrow);
        assert_eq!(row.children[0].identifier(), Some("x"));
        assert_eq!(row.children[1].op(), Some(OpKind::Plus));
        assert_eq!(row.children[2].number(), Some(5.0));
    }

    #[test]
    fn trig_spellings_become_markers_not_identifiers() {
        let root = parse_str("<semantics><mi>sin</mi><mi>cos</mi><mi>sinc</mi></semantics>")
            .unwrap()
            .unwrap();

        assert_eq!(root.children[0].trig(), Some(TrigFn::Sin));
        assert_eq!(root.children[0].identifier(), None);
        assert_eq!(root.children[1].trig(), Some(TrigFn::Cos));
        assert_eq!(root.children[2].identifier(), Some("sinc"));
    }

    #[test]
    fn entity_operators_attach_codes() {
        let root = parse_str("<semantics><mo>&#8289;</mo><mo>&#8290;</mo><mo>&#63449;</mo></semantics>")
            .unwrap()
            .unwrap();

        assert_eq!(root.children[0].op(), Some(OpKind::Apply));
        assert_eq!(root.children[1].op(), Some(OpKind::Times));
        assert_eq!(root.children[2].op(), Some(OpKind::Eq));
    }

    #[test]
    fn nesting_mirrors_input() {
        let root = parse_str(
            "<semantics><mfrac><mrow><mi>a</mi></mrow><mn>2</mn></mfrac></semantics>",
        )
        .unwrap()
        .unwrap();

        let frac = &root.children[0];
        assert_eq!(frac.kind, TagKind::Mfrac);
        assert_eq!(frac.children.len(), 2);
        assert_eq!(frac.children[0].kind, TagKind::Mrow);
        assert_eq!(frac.children[1].number(), Some(2.0));
    }

    #[test]
    fn mismatched_end_tag_is_malformed_nesting() {
        let err = parse_str("<semantics><mrow><mi>x</mrow></mi></semantics>").unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedNesting {
                expected: TagKind::Mi,
                found: TagKind::Mrow,
                position: 22,
            }
        );
    }

    #[test]
    fn unknown_tags_are_transparent() {
        // The unknown wrapper contributes no element; the number attaches
        // to the enclosing recognized row.
        let root = parse_str(
            "<semantics><mrow><mi>x</mi><annotation><mn>3</mn></annotation></mrow></semantics>",
        )
        .unwrap()
        .unwrap();

        let row = &root.children[0];
        assert_eq!(row.children.len(), 2);
        assert_eq!(row.children[0].identifier(), Some("x"));
        assert_eq!(row.children[1].number(), Some(3.0));
    }

    #[test]
    fn empty_input_has_no_root() {
        assert_eq!(parse_str(""), Ok(None));
    }

    #[test]
    fn unclosed_wrapper_has_no_root() {
        assert_eq!(parse_str("<semantics><mrow></mrow>"), Ok(None));
    }

    #[test]
    fn stray_text_is_ignored() {
        assert_eq!(parse_str("stray"), Ok(None));
    }

    #[test]
    fn second_wrapper_is_rejected() {
        let err = parse_str("<semantics></semantics><semantics></semantics>").unwrap_err();
        assert!(matches!(err, ParseError::DuplicateRoot { .. }));

        let err = parse_str("<semantics><semantics></semantics></semantics>").unwrap_err();
        assert!(matches!(err, ParseError::DuplicateRoot { .. }));
    }

    #[test]
    fn element_outside_wrapper_is_rejected() {
        let err = parse_str("<mrow></mrow>").unwrap_err();
        assert_eq!(
            err,
            ParseError::OrphanElement {
                kind: TagKind::Mrow,
                position: 0,
            }
        );
    }

    #[test]
    fn unmatched_close_is_rejected() {
        let err = parse_str("</mrow>").unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnmatchedClose {
                found: TagKind::Mrow,
                ..
            }
        ));
    }

    #[test]
    fn unsupported_operator_is_rejected() {
        let err = parse_str("<semantics><mo>&#9999;</mo></semantics>").unwrap_err();
        assert!(matches!(err, ParseError::UnsupportedOperator { .. }));
    }

    #[test]
    fn invalid_number_is_rejected() {
        let err = parse_str("<semantics><mn>five</mn></semantics>").unwrap_err();
        assert!(matches!(err, ParseError::InvalidNumber { .. }));
    }

    #[test]
    fn number_parsing_is_locale_independent_decimal() {
        let root = parse_str("<semantics><mn>0.25</mn></semantics>").unwrap().unwrap();
        assert_eq!(root.children[0].number(), Some(0.25));
    }
}
