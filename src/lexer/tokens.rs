//! Token definitions for the curve dialect
//!
//! Two token shapes cover the whole dialect: a complete tag and a maximal
//! run of text between tags. Both carry their spelling, since tag
//! classification and leaf payload interpretation happen later, in the tag
//! classifier and the tree builder.

use logos::Logos;

/// All possible tokens in the curve dialect.
#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token {
    /// A complete tag, brackets included (`<mi>`, `</mrow>`).
    #[regex(r"<[^<>]*>", |lex| lex.slice().to_owned())]
    Tag(String),

    /// A maximal run of non-tag characters.
    #[regex(r"[^<>]+", |lex| lex.slice().to_owned())]
    Text(String),
}

impl Token {
    pub fn is_tag(&self) -> bool {
        matches!(self, Token::Tag(_))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Token::Text(_))
    }

    /// The token's spelling.
    pub fn text(&self) -> &str {
        match self {
            Token::Tag(s) | Token::Text(s) => s,
        }
    }
}
