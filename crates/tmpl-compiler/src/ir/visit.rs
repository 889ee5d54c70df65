//! Depth-first IR traversal with enter/exit hooks
//!
//! Implement [`Visitor`] and hand the root to [`walk_node`]. Every element is
//! entered before any of its children and exited after all of them, so a
//! visitor can keep per-scope state on a stack that mirrors the tree.
//!
//! Slot content (`CustomElement::slot_set`) is *not* part of the walk; it is
//! lowered separately as its own tree. `enter_element` may also ask the walk
//! to skip an element's children; the element is still exited.

use super::{IrNode, TextNode};
use crate::error::CompileResult;

/// What to do with an entered element's children
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Walk {
    Children,
    SkipChildren,
}

/// IR visitor trait
///
/// Each hook defaults to doing nothing.
pub trait Visitor: Sized {
    fn enter_element(&mut self, _node: &IrNode) -> CompileResult<Walk> {
        Ok(Walk::Children)
    }

    fn exit_element(&mut self, _node: &IrNode) -> CompileResult<()> {
        Ok(())
    }

    fn visit_text(&mut self, _text: &TextNode) -> CompileResult<()> {
        Ok(())
    }
}

/// Walk `node` and its descendants in document order
pub fn walk_node<V: Visitor>(visitor: &mut V, node: &IrNode) -> CompileResult<()> {
    match node {
        IrNode::Text(text) => visitor.visit_text(text),
        IrNode::Element(_) | IrNode::Template(_) | IrNode::Slot(_) | IrNode::Custom(_) => {
            if visitor.enter_element(node)? == Walk::Children {
                for child in node.children() {
                    walk_node(visitor, child)?;
                }
            }
            visitor.exit_element(node)
        }
    }
}
