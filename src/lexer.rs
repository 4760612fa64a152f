//! Tokenization of the curve dialect
//!
//! The source is first stripped of layout characters (spaces, carriage
//! returns, newlines); the remainder splits into complete `<...>` tag
//! tokens and maximal runs of non-tag text. The split itself is handled
//! entirely by logos. No entity decoding happens here: `&#8290;` and
//! friends travel as plain text and are interpreted by the tree builder.

pub mod tokens;

pub use tokens::Token;

/// Byte range of a token within the layout-stripped source.
pub type Span = std::ops::Range<usize>;

/// Remove the layout characters the dialect ignores.
///
/// The markup exporters this dialect comes from indent freely and use CRLF
/// line endings; tag and leaf content never contains spaces.
pub fn strip_layout(source: &str) -> String {
    source
        .chars()
        .filter(|c| !matches!(c, ' ' | '\r' | '\n'))
        .collect()
}

/// Tokenize a layout-stripped string and collect all tokens.
pub fn tokenize(source: &str) -> Vec<Token> {
    use logos::Logos;
    Token::lexer(source).filter_map(|result| result.ok()).collect()
}

/// Tokenize a layout-stripped string, keeping each token's byte span for
/// diagnostics.
pub fn tokenize_with_spans(source: &str) -> Vec<(Token, Span)> {
    use logos::Logos;
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push((token, lexer.span()));
        }
    }

    tokens
}
