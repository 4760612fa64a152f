//! Structured errors for tree building
//!
//! Well-formed nesting is a precondition on the input; these variants make
//! its violations explicit results instead of aborts, leaving abort-vs-report
//! to the caller. Positions are byte offsets into the layout-stripped source.

use super::tag::TagKind;
use std::fmt;

/// Errors raised while building the element tree.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// An end tag's kind differs from the currently open element's kind.
    MalformedNesting {
        expected: TagKind,
        found: TagKind,
        position: usize,
    },
    /// An end tag with no element open.
    UnmatchedClose { found: TagKind, position: usize },
    /// A second wrapper tag, nested or after the root closed.
    DuplicateRoot { position: usize },
    /// A recognized element outside the wrapper.
    OrphanElement { kind: TagKind, position: usize },
    /// Operator leaf text outside the fixed spelling table.
    UnsupportedOperator { text: String, position: usize },
    /// Number leaf text that does not parse as a decimal literal.
    InvalidNumber { text: String, position: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MalformedNesting {
                expected,
                found,
                position,
            } => write!(
                f,
                "malformed nesting at byte {}: open element is <{}> but end tag is </{}>",
                position, expected, found
            ),
            ParseError::UnmatchedClose { found, position } => write!(
                f,
                "unmatched end tag </{}> at byte {}: no element is open",
                found, position
            ),
            ParseError::DuplicateRoot { position } => write!(
                f,
                "duplicate <semantics> wrapper at byte {}: the wrapper must appear exactly once",
                position
            ),
            ParseError::OrphanElement { kind, position } => write!(
                f,
                "element <{}> at byte {} appears outside the <semantics> wrapper",
                kind, position
            ),
            ParseError::UnsupportedOperator { text, position } => {
                write!(f, "unsupported operator '{}' at byte {}", text, position)
            }
            ParseError::InvalidNumber { text, position } => {
                write!(f, "invalid numeric literal '{}' at byte {}", text, position)
            }
        }
    }
}

impl std::error::Error for ParseError {}
