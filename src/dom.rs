//! Tree predicates over the parser-owned document tree.
//!
//! All helpers are pure read-only queries against `markup5ever_rcdom`
//! handles; the tree itself is owned by the parser and never mutated here.

use html5ever::Attribute;
use markup5ever_rcdom::{Handle, NodeData};
use std::cell::Ref;

/// Wildcard attribute value: matches any attribute that is set non-empty.
pub const ANY_VALUE: &str = "*";

/// True iff an attribute with `key` exists and its value matches.
///
/// With the [`ANY_VALUE`] wildcard, any non-empty value matches; otherwise
/// the value must match exactly. The first attribute with the key decides.
pub fn has_attribute(attrs: &[Attribute], key: &str, value: &str) -> bool {
    for a in attrs {
        if &*a.name.local == key {
            if value == ANY_VALUE {
                return !a.value.is_empty();
            }
            return &*a.value == value;
        }
    }
    false
}

/// True iff `node` is an element with the given tag name.
pub fn is_element(node: &Handle, tag: &str) -> bool {
    matches!(&node.data, NodeData::Element { name, .. } if &*name.local == tag)
}

/// Follow the parent link; rcdom keeps it as a weak reference in a `Cell`.
pub fn parent(node: &Handle) -> Option<Handle> {
    let weak = node.parent.take();
    let up = weak.as_ref().and_then(|w| w.upgrade());
    node.parent.set(weak);
    up
}

/// True iff any strict ancestor of `node` is an element with `tag`.
pub fn has_ancestor(node: &Handle, tag: &str) -> bool {
    let mut cur = parent(node);
    while let Some(p) = cur {
        if is_element(&p, tag) {
            return true;
        }
        cur = parent(&p);
    }
    false
}

/// True iff any descendant of `node` is an element with `tag`.
pub fn has_descendant(node: &Handle, tag: &str) -> bool {
    node.children
        .borrow()
        .iter()
        .any(|c| is_element(c, tag) || has_descendant(c, tag))
}

/// Borrow an element's attribute list; `None` for non-element nodes.
pub fn attributes(node: &Handle) -> Option<Ref<'_, Vec<Attribute>>> {
    match &node.data {
        NodeData::Element { attrs, .. } => Some(attrs.borrow()),
        _ => None,
    }
}

/// Character data of a text node; `None` for anything else.
pub fn text_content(node: &Handle) -> Option<String> {
    match &node.data {
        NodeData::Text { contents } => Some(contents.borrow().to_string()),
        _ => None,
    }
}
