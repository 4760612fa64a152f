//! Operator and trig-marker codes for leaf payloads
//!
//! Operator leaves spell their operator either literally (`+`, `-`, `(`,
//! `)`) or as one of three numeric character entities: `&#8289;` (invisible
//! function application), `&#8290;` (invisible multiplication), and
//! `&#63449;` (the equality sign separating a definition's head from its
//! body). Entity syntax is recognized with a lazily compiled pattern; the
//! code table itself is closed.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Numeric character entity shape, e.g. `&#8290;`.
static NUMERIC_ENTITY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^&#([0-9]+);$").unwrap());

/// Operator codes carried by operator leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    /// Invisible function application (`&#8289;`); renders as empty text.
    Apply,
    /// Invisible multiplication (`&#8290;`); renders as `*`.
    Times,
    /// Equality (`&#63449;`); separates a definition head from its body.
    Eq,
    Plus,
    Minus,
    OpenParen,
    CloseParen,
}

impl OpKind {
    /// Look up the operator code for a leaf's text content.
    pub fn from_spelling(text: &str) -> Option<OpKind> {
        if let Some(caps) = NUMERIC_ENTITY.captures(text) {
            return match &caps[1] {
                "8289" => Some(OpKind::Apply),
                "8290" => Some(OpKind::Times),
                "63449" => Some(OpKind::Eq),
                _ => None,
            };
        }
        match text {
            "+" => Some(OpKind::Plus),
            "-" => Some(OpKind::Minus),
            "(" => Some(OpKind::OpenParen),
            ")" => Some(OpKind::CloseParen),
            _ => None,
        }
    }

    /// The text this operator contributes to the assembled expression.
    ///
    /// Function application is a silent separator and contributes nothing.
    pub fn symbol(&self) -> &'static str {
        match self {
            OpKind::Apply => "",
            OpKind::Times => "*",
            OpKind::Eq => "=",
            OpKind::Plus => "+",
            OpKind::Minus => "-",
            OpKind::OpenParen => "(",
            OpKind::CloseParen => ")",
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Trig markers carried by identifier leaves spelled `sin` or `cos`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrigFn {
    Sin,
    Cos,
}

impl TrigFn {
    /// Recognize the two reserved identifier spellings.
    pub fn from_name(text: &str) -> Option<TrigFn> {
        match text {
            "sin" => Some(TrigFn::Sin),
            "cos" => Some(TrigFn::Cos),
            _ => None,
        }
    }

    /// The callable name emitted for this marker.
    pub fn name(&self) -> &'static str {
        match self {
            TrigFn::Sin => "sin",
            TrigFn::Cos => "cos",
        }
    }
}

impl fmt::Display for TrigFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
