//! Selector AST: SelectorList, Selector, SimpleSelector.
//!
//! The tree mirrors what a selector parser hands to the expansion pass: a
//! list of selectors, each an ordered run of simple-selector nodes carrying
//! their own surrounding whitespace. `Display` reproduces the authored text,
//! so `parse → expand → to_string` is the crate's end-to-end seam.

use std::fmt;

/// The kind of a single selector token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Type selector: `h1`, `nav`.
    Tag,
    /// Universal selector: `*`.
    Universal,
    /// Class selector: `.classname`.
    Class,
    /// ID selector: `#id`.
    Id,
    /// Pseudo-class or pseudo-element: `:hover`, `::before`, `:--custom`.
    Pseudo,
    /// Combinator: `>`, `+`, `~`, or a run of whitespace (descendant).
    Combinator,
    /// Anything else (attribute selector punctuation, stray characters).
    Other,
}

impl NodeKind {
    /// Returns `true` for kinds that cannot safely *start* a spliced run
    /// directly after another node.
    ///
    /// Tags and `*` carry no leading sigil (unlike `.`, `#`, `:`), so gluing
    /// one onto a preceding simple selector produces a single malformed token
    /// (`.foo` + `h1` reads as `.fooh1`).
    pub fn is_unsafe_start(self) -> bool {
        matches!(self, Self::Tag | Self::Universal)
    }

    /// Returns `true` for kinds that cannot safely *end* the run preceding a
    /// spliced node: any simple selector without a trailing delimiter that
    /// could run into an unsafe-start node.
    pub fn is_unsafe_end(self) -> bool {
        matches!(
            self,
            Self::Class | Self::Id | Self::Pseudo | Self::Tag | Self::Universal
        )
    }
}

/// Whitespace attached to a node, preserved through expansion.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Spaces {
    /// Whitespace before the node's token.
    pub before: String,
    /// Whitespace after the node's token.
    pub after: String,
}

/// A single token in a selector.
///
/// For a functional pseudo-class like `:not(.x)`, `nodes` holds the argument
/// selectors; it is empty for every other kind. A pseudo's `value` excludes
/// the leading `:` (so `:--h1` has value `--h1`, and `::before` has value
/// `:before`), which makes custom-selector names line up with map keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleSelector {
    pub kind: NodeKind,
    pub value: String,
    pub spaces: Spaces,
    /// Nested argument selectors, non-empty only for functional pseudos.
    pub nodes: SelectorList,
}

impl SimpleSelector {
    /// Create a node with no surrounding whitespace and no nested selectors.
    pub fn new(kind: NodeKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
            spaces: Spaces::default(),
            nodes: SelectorList::new(),
        }
    }
}

impl fmt::Display for SimpleSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.spaces.before)?;
        match self.kind {
            NodeKind::Class => write!(f, ".{}", self.value)?,
            NodeKind::Id => write!(f, "#{}", self.value)?,
            NodeKind::Pseudo => {
                write!(f, ":{}", self.value)?;
                if !self.nodes.is_empty() {
                    write!(f, "({})", self.nodes)?;
                }
            }
            NodeKind::Tag | NodeKind::Universal | NodeKind::Combinator | NodeKind::Other => {
                f.write_str(&self.value)?;
            }
        }
        f.write_str(&self.spaces.after)
    }
}

/// One compound/complex selector: an ordered run of simple-selector nodes.
///
/// For example, `.foo:--custom .bar` is one `Selector` with four nodes:
/// `Class("foo")`, `Pseudo("--custom")`, a whitespace `Combinator`, and
/// `Class("bar")`. `Clone` is a deep copy; every expansion branch owns its
/// nodes exclusively.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selector {
    pub nodes: Vec<SimpleSelector>,
}

impl Selector {
    /// Create an empty selector.
    pub fn new() -> Self {
        Self::default()
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.nodes {
            write!(f, "{node}")?;
        }
        Ok(())
    }
}

/// An ordered list of selectors (comma-separated in source text).
///
/// The root unit fed to expansion, and also the argument list of a
/// functional pseudo-class. Mutated in place by splicing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectorList {
    pub nodes: Vec<Selector>,
}

impl SelectorList {
    /// Create an empty selector list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the list contains no selectors.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl fmt::Display for SelectorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, selector) in self.nodes.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{selector}")?;
        }
        Ok(())
    }
}
