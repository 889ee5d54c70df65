//! Flattening policy
//!
//! Slot projection and loop expansion can each produce a nested list where a
//! single node would otherwise be. An element only pays for the runtime
//! flatten call when one of its children (directly, or through `<template>`
//! nesting) can do that.

use crate::ir::IrNode;

/// Whether the children of `node` must be flattened at render time
pub fn should_flatten(node: &IrNode) -> bool {
    node.children().iter().any(child_yields_list)
}

fn child_yields_list(child: &IrNode) -> bool {
    match child {
        IrNode::Slot(_) => true,
        _ if child.is_looped() => true,
        IrNode::Template(_) => should_flatten(child),
        IrNode::Text(_) | IrNode::Element(_) | IrNode::Custom(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Element, ForDirective, SlotElement};

    fn div(children: Vec<IrNode>) -> IrNode {
        let mut el = Element::new("div");
        el.children = children;
        IrNode::Element(el)
    }

    fn template(children: Vec<IrNode>) -> IrNode {
        let mut el = Element::new("template");
        el.children = children;
        IrNode::Template(el)
    }

    fn looped(tag: &str) -> IrNode {
        let mut el = Element::new(tag);
        el.for_ = Some(ForDirective::new("items"));
        IrNode::Element(el)
    }

    fn slot() -> IrNode {
        IrNode::Slot(SlotElement {
            element: Element::new("slot"),
            slot_name: String::new(),
        })
    }

    #[test]
    fn test_plain_children_do_not_flatten() {
        let node = div(vec![div(vec![]), div(vec![looped("li")])]);
        assert!(!should_flatten(&node));
    }

    #[test]
    fn test_loop_or_slot_child_flattens() {
        assert!(should_flatten(&div(vec![looped("li")])));
        assert!(should_flatten(&div(vec![div(vec![]), slot()])));
    }

    #[test]
    fn test_template_nested_loop_flattens() {
        let node = div(vec![template(vec![template(vec![looped("li")])])]);
        assert!(should_flatten(&node));
        let node = div(vec![template(vec![div(vec![])])]);
        assert!(!should_flatten(&node));
    }

    #[test]
    fn test_verdict_is_stable() {
        let node = div(vec![template(vec![slot()])]);
        assert_eq!(should_flatten(&node), should_flatten(&node));
    }
}
