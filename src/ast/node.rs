//! Element node definitions
//!
//! An [`Element`] owns its children outright; dropping the root drops the
//! whole tree. The assembler borrows the tree read-only, so a built tree
//! can be traversed any number of times.

use super::op::{OpKind, TrigFn};
use super::tag::TagKind;
use std::fmt;

/// Leaf payload, one variant per payload-bearing tag kind.
///
/// An identifier leaf carries either an identifier or a trig marker, never
/// both; the variant split enforces that structurally.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Identifier text of an `mi` leaf.
    Ident(String),
    /// Trig marker of an `mi` leaf spelled `sin` or `cos`.
    Trig(TrigFn),
    /// Operator code of an `mo` leaf.
    Op(OpKind),
    /// Numeric literal of an `mn` leaf.
    Num(f64),
}

/// One node of the element tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub kind: TagKind,
    pub payload: Option<Payload>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(kind: TagKind) -> Self {
        Self {
            kind,
            payload: None,
            children: Vec::new(),
        }
    }

    pub fn with_payload(kind: TagKind, payload: Payload) -> Self {
        Self {
            kind,
            payload: Some(payload),
            children: Vec::new(),
        }
    }

    pub fn with_children(kind: TagKind, children: Vec<Element>) -> Self {
        Self {
            kind,
            payload: None,
            children,
        }
    }

    pub fn push_child(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn identifier(&self) -> Option<&str> {
        match &self.payload {
            Some(Payload::Ident(id)) => Some(id),
            _ => None,
        }
    }

    pub fn trig(&self) -> Option<TrigFn> {
        match self.payload {
            Some(Payload::Trig(f)) => Some(f),
            _ => None,
        }
    }

    pub fn op(&self) -> Option<OpKind> {
        match self.payload {
            Some(Payload::Op(op)) => Some(op),
            _ => None,
        }
    }

    pub fn number(&self) -> Option<f64> {
        match self.payload {
            Some(Payload::Num(value)) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.payload {
            Some(Payload::Ident(id)) => write!(f, "{}('{}')", self.kind, id),
            Some(Payload::Trig(t)) => write!(f, "{}({})", self.kind, t),
            Some(Payload::Op(op)) => write!(f, "{}('{}')", self.kind, op),
            Some(Payload::Num(n)) => write!(f, "{}({})", self.kind, n),
            None => write!(f, "{}({} children)", self.kind, self.children.len()),
        }
    }
}
