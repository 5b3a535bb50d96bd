//! Custom-selector expansion.
//!
//! Replaces every reference to a custom selector (a node whose value is a key
//! of the definition map, e.g. `--heading` for `:--heading`) with the cross
//! product of its replacement selectors, recursively, until no reference
//! remains. Whitespace at the outer edges of each expansion is taken from the
//! usage site, and a reordering fixup repairs splice boundaries where a bare
//! type selector would otherwise glue onto the preceding token.

use std::collections::{HashMap, HashSet};

use crate::model::{Selector, SelectorList, SimpleSelector};

/// Definitions of custom selectors: name (without the leading `:`, e.g.
/// `--h1-like`) to the list of selectors it stands for. Read-only during
/// expansion.
pub type CustomSelectors = HashMap<String, SelectorList>;

/// Errors from custom-selector expansion.
#[derive(Debug, thiserror::Error)]
pub enum ExpandError {
    /// A definition refers back to itself, directly or through other
    /// definitions. Expanding it would never terminate.
    #[error("custom selector `:{name}` is defined in terms of itself")]
    CyclicDefinition { name: String },
}

/// Expand every custom-selector reference in `list`, in place.
///
/// Each selector containing a reference is replaced by one selector per
/// replacement alternative (so one selector may expand into many), and
/// chained references inside replacements are resolved fully. Selectors
/// without references are left untouched, as are references to names missing
/// from the map.
///
/// Fails without modifying `list` if the definitions are cyclic.
///
/// ```
/// use custom_selectors::{expand_selector_list, parse_selector_list, CustomSelectors};
///
/// let mut custom = CustomSelectors::new();
/// custom.insert("--h1".to_string(), parse_selector_list("h1").unwrap());
///
/// let mut list = parse_selector_list(".title:--h1").unwrap();
/// expand_selector_list(&mut list, &custom).unwrap();
/// assert_eq!(list.to_string(), "h1.title");
/// ```
pub fn expand_selector_list(
    list: &mut SelectorList,
    custom: &CustomSelectors,
) -> Result<(), ExpandError> {
    check_acyclic(custom)?;
    expand_list(list, custom);
    Ok(())
}

/// Walk the reference graph of the definition map and fail on any cycle.
///
/// Every node spliced in during expansion originates from a map value, so an
/// acyclic map bounds the recursion depth of [`expand_selector`]. Validating
/// up front keeps the expansion itself infallible and avoids false positives
/// that an in-progress set threaded through the recursion would produce when
/// one selector holds two independent references.
fn check_acyclic(custom: &CustomSelectors) -> Result<(), ExpandError> {
    let mut done = HashSet::new();
    for name in custom.keys() {
        visit(name, custom, &mut Vec::new(), &mut done)?;
    }
    Ok(())
}

fn visit<'a>(
    name: &'a str,
    custom: &'a CustomSelectors,
    in_progress: &mut Vec<&'a str>,
    done: &mut HashSet<&'a str>,
) -> Result<(), ExpandError> {
    if done.contains(name) {
        return Ok(());
    }
    if in_progress.contains(&name) {
        return Err(ExpandError::CyclicDefinition {
            name: name.to_string(),
        });
    }
    in_progress.push(name);
    if let Some(list) = custom.get(name) {
        visit_references(list, custom, in_progress, done)?;
    }
    in_progress.pop();
    done.insert(name);
    Ok(())
}

fn visit_references<'a>(
    list: &'a SelectorList,
    custom: &'a CustomSelectors,
    in_progress: &mut Vec<&'a str>,
    done: &mut HashSet<&'a str>,
) -> Result<(), ExpandError> {
    for selector in &list.nodes {
        for node in &selector.nodes {
            if custom.contains_key(&node.value) {
                visit(&node.value, custom, in_progress, done)?;
            }
            if !node.nodes.is_empty() {
                visit_references(&node.nodes, custom, in_progress, done)?;
            }
        }
    }
    Ok(())
}

/// Expand each top-level selector, splicing fan-outs in place.
///
/// Iterates from the last index down so the splice never disturbs indices
/// that are still to be visited.
fn expand_list(list: &mut SelectorList, custom: &CustomSelectors) {
    let mut index = list.nodes.len();
    while index > 0 {
        index -= 1;
        let expanded = expand_selector(&mut list.nodes[index], custom);
        if !expanded.is_empty() {
            let _ = list.nodes.splice(index..=index, expanded);
        }
    }
}

/// Expand the first custom-selector reference in `selector`.
///
/// Returns one fully resolved selector per replacement alternative, in
/// definition order. The recursion on each clone resolves both chained
/// references introduced by the replacement and any later references in the
/// same selector, so a single pass over the first match suffices. An empty
/// result means the selector needs no change; argument lists of functional
/// pseudos are still expanded in place in that case.
fn expand_selector(selector: &mut Selector, custom: &CustomSelectors) -> Vec<Selector> {
    for index in 0..selector.nodes.len() {
        if let Some(replacements) = custom.get(&selector.nodes[index].value) {
            let mut expanded = Vec::new();

            for replacement in &replacements.nodes {
                let mut clone = selector.clone();
                let mut spliced = replacement.nodes.clone();

                // The expansion keeps the spacing of the usage site at its
                // outer edges; interior spacing stays as defined.
                if let Some(first) = spliced.first_mut() {
                    first.spaces.before = selector.nodes[index].spaces.before.clone();
                }
                if let Some(last) = spliced.last_mut() {
                    last.spaces.after = selector.nodes[index].spaces.after.clone();
                }

                let _ = clone.nodes.splice(index..=index, spliced);

                let resolved = expand_selector(&mut clone, custom);

                fix_node_order(&mut clone.nodes, index);

                if resolved.is_empty() {
                    expanded.push(clone);
                } else {
                    expanded.extend(resolved);
                }
            }

            return expanded;
        }

        if !selector.nodes[index].nodes.is_empty() {
            expand_list(&mut selector.nodes[index].nodes, custom);
        }
    }

    Vec::new()
}

/// Repair the splice boundary at `index` so that `.class:--h1` expands to
/// `h1.class` rather than the malformed `.classh1`.
///
/// When the node now at `index` is unsafe to start a run (bare tag or `*`)
/// and its predecessor is unsafe to end one, the node moves backward past the
/// whole contiguous run of unsafe-end nodes. The moved node takes over the
/// leading space of the node it displaces, and hands its own trailing space
/// to whichever node now sits at `index`.
fn fix_node_order(nodes: &mut Vec<SimpleSelector>, index: usize) {
    if index == 0 {
        return;
    }
    let starts_unsafe = nodes.get(index).is_some_and(|n| n.kind.is_unsafe_start());
    if !starts_unsafe || !nodes[index - 1].kind.is_unsafe_end() {
        return;
    }

    let mut safe_index = index - 1;
    while safe_index > 0 && nodes[safe_index].kind.is_unsafe_end() {
        safe_index -= 1;
    }

    let node = nodes.remove(index);
    nodes.insert(safe_index, node);

    nodes[safe_index].spaces.before = std::mem::take(&mut nodes[safe_index + 1].spaces.before);
    nodes[index].spaces.after = std::mem::take(&mut nodes[safe_index].spaces.after);
}
