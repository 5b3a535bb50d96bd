//! Recursive descent selector parser.
//!
//! Parses selector text into a [`SelectorList`], keeping every run of
//! whitespace: leading/trailing whitespace lands in a node's
//! `spaces.before`/`spaces.after`, whitespace between two compound selectors
//! becomes a descendant [`NodeKind::Combinator`] node, and whitespace around
//! `>`/`+`/`~` attaches to the combinator and the node that follows it.
//!
//! The parser is deliberately lenient and never validates selector syntax.
//! Characters it does not recognize become [`NodeKind::Other`] nodes that
//! serialize back unchanged. The only hard failure is unbalanced parentheses,
//! where no sensible tree exists.

use crate::model::{NodeKind, Selector, SelectorList, SimpleSelector, Spaces};
use crate::tokenizer::{tokenize, Token};

/// Errors from selector parsing.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// A `(` without a matching `)`, or a stray `)` at the top level.
    #[error("unbalanced parentheses in selector")]
    UnbalancedParen,
}

/// Parse selector text into a [`SelectorList`].
///
/// ```
/// use custom_selectors::parse_selector_list;
///
/// let list = parse_selector_list("nav :--heading, .title").unwrap();
/// assert_eq!(list.nodes.len(), 2);
/// assert_eq!(list.to_string(), "nav :--heading, .title");
/// ```
pub fn parse_selector_list(input: &str) -> Result<SelectorList, ParseError> {
    let mut parser = Parser {
        tokens: tokenize(input),
        cursor: 0,
    };

    let list = parser.parse_list(false)?;

    // Any token left over here is a `)` that never opened.
    if !parser.is_eof() {
        return Err(ParseError::UnbalancedParen);
    }

    Ok(list)
}

/// Recursive descent parser state.
struct Parser {
    tokens: Vec<(Token, String)>,
    cursor: usize,
}

impl Parser {
    fn is_eof(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    fn peek(&self) -> Option<&(Token, String)> {
        self.tokens.get(self.cursor)
    }

    /// Parse selectors until EOF, or until the `)` closing a nested argument
    /// list when `nested` is set.
    fn parse_list(&mut self, nested: bool) -> Result<SelectorList, ParseError> {
        let mut list = SelectorList::new();
        let mut current = Selector::new();
        let mut pending = String::new();

        loop {
            let Some((token, text)) = self.peek().cloned() else {
                if nested {
                    return Err(ParseError::UnbalancedParen);
                }
                break;
            };

            match token {
                Token::Whitespace => {
                    self.cursor += 1;
                    pending.push_str(&text);
                }
                Token::Comma => {
                    self.cursor += 1;
                    attach_trailing(&mut current, &mut pending);
                    list.nodes.push(std::mem::take(&mut current));
                }
                Token::ParenClose => {
                    if nested {
                        self.cursor += 1;
                        break;
                    }
                    // Stray `)` at the top level: leave it for the caller,
                    // which reports the imbalance.
                    break;
                }
                _ => {
                    self.cursor += 1;
                    let mut node = self.make_node(token, text)?;
                    place_pending(&mut node, &mut pending, &mut current);
                    current.nodes.push(node);
                }
            }
        }

        attach_trailing(&mut current, &mut pending);
        if !current.nodes.is_empty() {
            list.nodes.push(current);
        }

        Ok(list)
    }

    /// Build one node from a consumed token, recursing into the argument list
    /// of a functional pseudo-class.
    fn make_node(&mut self, token: Token, text: String) -> Result<SimpleSelector, ParseError> {
        let node = match token {
            Token::Ident => SimpleSelector::new(NodeKind::Tag, text),
            Token::Star => SimpleSelector::new(NodeKind::Universal, text),
            Token::Class => SimpleSelector::new(NodeKind::Class, &text[1..]),
            Token::Id => SimpleSelector::new(NodeKind::Id, &text[1..]),
            Token::Pseudo => {
                // Only the first `:` is stripped, so `::before` keeps the
                // value `:before` and round-trips through Display.
                let mut node = SimpleSelector::new(NodeKind::Pseudo, &text[1..]);
                if self.peek().is_some_and(|(t, _)| *t == Token::ParenOpen) {
                    self.cursor += 1;
                    node.nodes = self.parse_list(true)?;
                }
                node
            }
            Token::Combinator => SimpleSelector::new(NodeKind::Combinator, text),
            _ => SimpleSelector::new(NodeKind::Other, text),
        };
        Ok(node)
    }
}

/// Decide where accumulated whitespace goes once the next node is known.
fn place_pending(node: &mut SimpleSelector, pending: &mut String, current: &mut Selector) {
    if pending.is_empty() {
        return;
    }
    let after_combinator = current
        .nodes
        .last()
        .is_some_and(|n| n.kind == NodeKind::Combinator);
    if current.nodes.is_empty() || node.kind == NodeKind::Combinator || after_combinator {
        // Selector-leading space, or space hugging an explicit combinator.
        node.spaces.before = std::mem::take(pending);
    } else {
        // Space between two compound selectors: a descendant combinator.
        current.nodes.push(SimpleSelector {
            kind: NodeKind::Combinator,
            value: std::mem::take(pending),
            spaces: Spaces::default(),
            nodes: SelectorList::new(),
        });
    }
}

/// Attach whitespace sitting before a `,`, `)`, or EOF to the last node.
fn attach_trailing(current: &mut Selector, pending: &mut String) {
    if pending.is_empty() {
        return;
    }
    if let Some(last) = current.nodes.last_mut() {
        last.spaces.after = std::mem::take(pending);
    } else {
        pending.clear();
    }
}
