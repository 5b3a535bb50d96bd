//! # custom-selectors
//!
//! Expansion of CSS custom selectors: replaces every `:--name` reference in a
//! selector with the selectors it was defined to stand for, recursively,
//! until none remain.
//!
//! ```css
//! @custom-selector :--heading h1, h2, h3;
//!
//! nav :--heading { margin: 0; }
//! /* becomes: nav h1, nav h2, nav h3 { margin: 0; } */
//! ```
//!
//! Collecting `@custom-selector` definitions from a stylesheet is the job of
//! the surrounding pipeline; this crate takes the definitions as a ready map
//! and transforms one selector list at a time.
//!
//! ## Core Systems
//!
//! - **[`model`]** — Selector AST: node kinds, whitespace, deep-clone
//!   semantics, and `Display` serialization
//! - **[`tokenizer`]** — logos-based selector lexer (whitespace-preserving)
//! - **[`parser`]** — lenient selector text → [`SelectorList`] parsing
//! - **[`expand`]** — the expansion pass: cross-product substitution,
//!   usage-site whitespace transplant, splice-boundary reordering, and
//!   cycle detection over the definition map
//!
//! ## Example
//!
//! ```
//! use custom_selectors::{expand_selector_list, parse_selector_list, CustomSelectors};
//!
//! let mut custom = CustomSelectors::new();
//! custom.insert("--heading".to_string(), parse_selector_list("h1, h2, h3").unwrap());
//!
//! let mut list = parse_selector_list("nav :--heading").unwrap();
//! expand_selector_list(&mut list, &custom).unwrap();
//! assert_eq!(list.to_string(), "nav h1,nav h2,nav h3");
//! ```

pub mod expand;
pub mod model;
pub mod parser;
pub mod tokenizer;

pub use expand::{expand_selector_list, CustomSelectors, ExpandError};
pub use model::{NodeKind, Selector, SelectorList, SimpleSelector, Spaces};
pub use parser::{parse_selector_list, ParseError};
