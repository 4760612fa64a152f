//! Linearization of an element tree into expression terms
//!
//! [`assemble`] flattens a built tree into an ordered sequence of typed
//! terms; concatenating the term texts in order yields an infix arithmetic
//! expression. The traversal is a pure post-order walk: it borrows the tree
//! and leaves it intact, so a tree can be assembled any number of times.
//!
//! A coordinate definition row linearizes head first (`x⁡(t) =` and then
//! the body); [`definition_rhs`] recovers the body by dropping everything
//! up to and including the first equality term.

use crate::ast::{Element, Payload, TagKind};
use serde::Serialize;
use std::fmt;

/// The type of a linearized term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TermKind {
    Number,
    Function,
    Variable,
    Operator,
}

/// A typed expression token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Term {
    pub kind: TermKind,
    pub text: String,
}

impl Term {
    pub fn number(text: impl Into<String>) -> Self {
        Self {
            kind: TermKind::Number,
            text: text.into(),
        }
    }

    pub fn function(text: impl Into<String>) -> Self {
        Self {
            kind: TermKind::Function,
            text: text.into(),
        }
    }

    pub fn variable(text: impl Into<String>) -> Self {
        Self {
            kind: TermKind::Variable,
            text: text.into(),
        }
    }

    pub fn operator(text: impl Into<String>) -> Self {
        Self {
            kind: TermKind::Operator,
            text: text.into(),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Linearize a node's subtree into terms, in reading order.
pub fn assemble(node: &Element) -> Vec<Term> {
    let mut terms = Vec::new();
    assemble_into(node, &mut terms);
    terms
}

fn assemble_into(node: &Element, dst: &mut Vec<Term>) {
    for (index, child) in node.children.iter().enumerate() {
        if node.kind == TagKind::Mfrac {
            // The grouping wraps the full numerator and denominator
            // expansions, however many terms each child contributes.
            if index == 0 {
                dst.push(Term::operator("("));
            } else if index == 1 {
                dst.push(Term::operator("/"));
            }
        }
        match child.kind {
            TagKind::Mi => match &child.payload {
                Some(Payload::Trig(f)) => dst.push(Term::function(f.name())),
                Some(Payload::Ident(id)) => dst.push(Term::variable(id.clone())),
                _ => {}
            },
            TagKind::Mn => {
                if let Some(Payload::Num(value)) = &child.payload {
                    dst.push(Term::number(render_number(*value)));
                }
            }
            TagKind::Mo => {
                if let Some(Payload::Op(op)) = &child.payload {
                    dst.push(Term::operator(op.symbol()));
                }
            }
            _ => assemble_into(child, dst),
        }
    }
    if node.kind == TagKind::Mfrac {
        dst.push(Term::operator(")"));
    }
}

/// Canonical decimal rendering of a literal.
///
/// The emission target is Rust, so the rendering always carries a decimal
/// point or exponent (`5` renders as `5.0`) and the generated body stays
/// `f64` arithmetic throughout.
pub fn render_number(value: f64) -> String {
    format!("{:?}", value)
}

/// Drop a definition's head: everything up to and including the first
/// equality term. A sequence without an equality is returned whole.
pub fn definition_rhs(terms: Vec<Term>) -> Vec<Term> {
    match terms
        .iter()
        .position(|t| t.kind == TermKind::Operator && t.text == "=")
    {
        Some(eq) => terms.into_iter().skip(eq + 1).collect(),
        None => terms,
    }
}

/// Concatenate term texts in order.
pub fn expression_text(terms: &[Term]) -> String {
    terms.iter().map(|t| t.text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{OpKind, TrigFn};

    fn ident(name: &str) -> Element {
        Element::with_payload(TagKind::Mi, Payload::Ident(name.to_string()))
    }

    fn trig(f: TrigFn) -> Element {
        Element::with_payload(TagKind::Mi, Payload::Trig(f))
    }

    fn op(kind: OpKind) -> Element {
        Element::with_payload(TagKind::Mo, Payload::Op(kind))
    }

    fn num(value: f64) -> Element {
        Element::with_payload(TagKind::Mn, Payload::Num(value))
    }

    #[test]
    fn leaf_row_linearizes_in_order() {
        let row = Element::with_children(
            TagKind::Mrow,
            vec![ident("x"), op(OpKind::Plus), num(5.0)],
        );

        let terms = assemble(&row);
        assert_eq!(
            terms,
            vec![
                Term::variable("x"),
                Term::operator("+"),
                Term::number("5.0"),
            ]
        );
        assert_eq!(expression_text(&terms), "x+5.0");
    }

    #[test]
    fn trig_markers_become_function_terms() {
        let row = Element::with_children(
            TagKind::Mrow,
            vec![
                trig(TrigFn::Sin),
                op(OpKind::Apply),
                op(OpKind::OpenParen),
                ident("t"),
                op(OpKind::CloseParen),
            ],
        );

        let terms = assemble(&row);
        assert_eq!(terms[0], Term::function("sin"));
        assert_eq!(terms[1], Term::operator(""));
        assert_eq!(expression_text(&terms), "sin(t)");
    }

    #[test]
    fn fraction_wraps_leaf_children() {
        let frac = Element::with_children(TagKind::Mfrac, vec![ident("a"), ident("b")]);
        assert_eq!(expression_text(&assemble(&frac)), "(a/b)");
    }

    #[test]
    fn fraction_wraps_full_subtree_expansions() {
        // (t+1)/(t-2), both sides multi-term rows.
        let numerator = Element::with_children(
            TagKind::Mrow,
            vec![ident("t"), op(OpKind::Plus), num(1.0)],
        );
        let denominator = Element::with_children(
            TagKind::Mrow,
            vec![ident("t"), op(OpKind::Minus), num(2.0)],
        );
        let frac = Element::with_children(TagKind::Mfrac, vec![numerator, denominator]);

        assert_eq!(expression_text(&assemble(&frac)), "(t+1.0/t-2.0)");

        let terms = assemble(&frac);
        assert_eq!(terms.first(), Some(&Term::operator("(")));
        assert_eq!(terms[4], Term::operator("/"));
        assert_eq!(terms.last(), Some(&Term::operator(")")));
    }

    #[test]
    fn nested_fractions_group_independently() {
        let inner = Element::with_children(TagKind::Mfrac, vec![ident("a"), ident("b")]);
        let outer = Element::with_children(TagKind::Mfrac, vec![inner, ident("c")]);

        assert_eq!(expression_text(&assemble(&outer)), "((a/b)/c)");
    }

    #[test]
    fn grouping_kinds_are_transparent_to_the_term_stream() {
        let cell = Element::with_children(
            TagKind::Mtd,
            vec![Element::with_children(
                TagKind::Mrow,
                vec![num(2.0), op(OpKind::Times), ident("t")],
            )],
        );
        let row = Element::with_children(TagKind::Mtr, vec![cell]);

        assert_eq!(expression_text(&assemble(&row)), "2.0*t");
    }

    #[test]
    fn payloadless_leaves_contribute_nothing() {
        let row = Element::with_children(
            TagKind::Mrow,
            vec![Element::new(TagKind::Mi), Element::new(TagKind::Mn)],
        );
        assert_eq!(assemble(&row), vec![]);
    }

    #[test]
    fn assembly_is_repeatable() {
        let row = Element::with_children(TagKind::Mrow, vec![ident("t"), op(OpKind::Plus), num(1.0)]);
        assert_eq!(assemble(&row), assemble(&row));
    }

    #[test]
    fn definition_rhs_drops_head_through_equality() {
        let terms = vec![
            Term::variable("x"),
            Term::operator(""),
            Term::operator("("),
            Term::variable("t"),
            Term::operator(")"),
            Term::operator("="),
            Term::number("3.0"),
            Term::operator("*"),
            Term::variable("t"),
        ];

        assert_eq!(
            definition_rhs(terms),
            vec![
                Term::number("3.0"),
                Term::operator("*"),
                Term::variable("t"),
            ]
        );
    }

    #[test]
    fn definition_rhs_without_equality_is_identity() {
        let terms = vec![Term::variable("t"), Term::operator("+"), Term::number("1.0")];
        assert_eq!(definition_rhs(terms.clone()), terms);
    }

    #[test]
    fn number_rendering_always_carries_a_decimal_point() {
        assert_eq!(render_number(5.0), "5.0");
        assert_eq!(render_number(0.25), "0.25");
        assert_eq!(render_number(-3.0), "-3.0");
        assert_eq!(render_number(300.0), "300.0");
    }
}
