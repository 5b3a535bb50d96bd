//! logos-based selector tokenizer.
//!
//! Token priority in logos is determined by:
//! 1. Longest match wins (e.g. `:--h1` as Pseudo beats `:` alone)
//! 2. For equal length matches, higher priority wins
//!
//! Whitespace is a token rather than skipped: spacing is semantic in a
//! selector (descendant combinators, preserved formatting), so the parser
//! needs to see it. Unmatched characters fall through to [`Token::Other`]
//! one at a time; nothing ever fails to lex.

use logos::Logos;

/// Selector token produced by the lexer.
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
pub enum Token {
    // ── Compound tokens (longer matches, defined first) ──────────────

    /// Class selector: `.classname`.
    #[regex(r"\.-?[a-zA-Z_][a-zA-Z0-9_-]*")]
    Class,

    /// ID selector: `#id`.
    #[regex(r"#-?[a-zA-Z_][a-zA-Z0-9_-]*")]
    Id,

    /// Pseudo-class, pseudo-element, or custom-selector reference:
    /// `:hover`, `::before`, `:--h1-like`.
    #[regex(r"::?-{0,2}[a-zA-Z_][a-zA-Z0-9_-]*")]
    Pseudo,

    /// Type selector (element name): `h1`, `nav`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_-]*")]
    Ident,

    // ── Single-character tokens ──────────────────────────────────────

    /// Universal selector: `*`.
    #[token("*")]
    Star,

    /// Explicit combinator: `>`, `+`, `~`.
    #[regex(r"[>+~]")]
    Combinator,

    /// `,`
    #[token(",")]
    Comma,

    /// `(`
    #[token("(")]
    ParenOpen,

    /// `)`
    #[token(")")]
    ParenClose,

    /// A run of whitespace.
    #[regex(r"[ \t\n\r\f]+")]
    Whitespace,

    /// Any other single character, passed through opaquely.
    #[regex(r".", priority = 0)]
    Other,
}

/// Tokenize a selector string into `(Token, &str)` pairs covering the input.
pub fn tokenize(input: &str) -> Vec<(Token, String)> {
    Token::lexer(input)
        .spanned()
        .filter_map(|(result, span)| result.ok().map(|token| (token, input[span].to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: tokenize and return just the token variants.
    fn tokens(input: &str) -> Vec<Token> {
        tokenize(input).into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn test_simple_selectors() {
        let result = tokenize(".foo #bar h1 *");
        assert_eq!(result[0], (Token::Class, ".foo".into()));
        assert_eq!(result[2], (Token::Id, "#bar".into()));
        assert_eq!(result[4], (Token::Ident, "h1".into()));
        assert_eq!(result[6], (Token::Star, "*".into()));
    }

    #[test]
    fn test_pseudo_forms() {
        let result = tokenize(":hover ::before :--h1-like");
        assert_eq!(result[0], (Token::Pseudo, ":hover".into()));
        assert_eq!(result[2], (Token::Pseudo, "::before".into()));
        assert_eq!(result[4], (Token::Pseudo, ":--h1-like".into()));
    }

    #[test]
    fn test_pseudo_priority_over_colon() {
        // `:--h1` must be one Pseudo token, not `:` + `--h1` fragments.
        assert_eq!(tokens(":--h1"), vec![Token::Pseudo]);
    }

    #[test]
    fn test_class_priority_over_dot() {
        assert_eq!(tokens(".title"), vec![Token::Class]);
    }

    #[test]
    fn test_whitespace_is_a_token() {
        assert_eq!(
            tokens("nav  h1"),
            vec![Token::Ident, Token::Whitespace, Token::Ident]
        );
        let result = tokenize("a \t b");
        assert_eq!(result[1], (Token::Whitespace, " \t ".into()));
    }

    #[test]
    fn test_combinators() {
        assert_eq!(
            tokens("a > b + c ~ d"),
            vec![
                Token::Ident,
                Token::Whitespace,
                Token::Combinator,
                Token::Whitespace,
                Token::Ident,
                Token::Whitespace,
                Token::Combinator,
                Token::Whitespace,
                Token::Ident,
                Token::Whitespace,
                Token::Combinator,
                Token::Whitespace,
                Token::Ident,
            ]
        );
    }

    #[test]
    fn test_functional_pseudo() {
        assert_eq!(
            tokens(":not(.x, .y)"),
            vec![
                Token::Pseudo,
                Token::ParenOpen,
                Token::Class,
                Token::Comma,
                Token::Whitespace,
                Token::Class,
                Token::ParenClose,
            ]
        );
    }

    #[test]
    fn test_unknown_chars_fall_through() {
        // Attribute selector punctuation lexes as opaque single characters.
        assert_eq!(
            tokens("[href]"),
            vec![Token::Other, Token::Ident, Token::Other]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }
}
