//! Element tree definitions for the MathML curve dialect
//!
//! The tree mirrors the nesting of the input markup: one [`Element`] per
//! matched tag pair, with leaf payloads attached to identifier, operator,
//! and number elements. See the [`tag`] module for the closed set of
//! recognized tag kinds and the [`op`] module for operator and trig codes.

pub mod error;
pub mod node;
pub mod op;
pub mod tag;

pub use error::ParseError;
pub use node::{Element, Payload};
pub use op::{OpKind, TrigFn};
pub use tag::TagKind;
