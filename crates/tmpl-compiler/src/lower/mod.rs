//! IR to AST Lowering
//!
//! Folds a template IR tree into the single expression a render function
//! returns. Traversal state lives in [`walker`]; this module dispatches each
//! exited element on its role:
//!
//!   element   →  $api.h(tag, data, children), then `if`, then `for`
//!   custom    →  $api.c(tag, Ctor, data + slotset), then `if`, then `for`
//!   slot      →  $slotset.name || children
//!   template  →  its children, gated and/or repeated, spliced into the parent

mod data;
mod directive;
mod flatten;
mod memo;
mod slots;
mod walker;

pub use flatten::should_flatten;
pub use memo::MemoContext;

use crate::assemble::DependencyNames;
use crate::ast::Expression;
use crate::bind::ExpressionBinder;
use crate::config::RuntimeApi;
use crate::error::CompileResult;
use crate::ir::{CustomElement, Element, IrNode, IrValue, SlotElement, TextNode};
use crate::runtime::Runtime;
use walker::TreeWalker;

/// What an exited node contributes to its parent's children
#[derive(Debug)]
enum Lowered {
    /// A single expression (which may itself be a list)
    One(Expression),
    /// Several sibling expressions, spliced in place
    Splice(Vec<Expression>),
}

/// IR to AST lowerer
pub struct Lowerer<'a> {
    /// Runtime primitive call builder
    runtime: Runtime<'a>,
    /// Expression binder
    binder: &'a dyn ExpressionBinder,
    /// Handler slots for the current top-level compile
    memo: &'a mut MemoContext,
    /// Component class locals for the current top-level compile
    names: &'a mut DependencyNames,
}

impl<'a> Lowerer<'a> {
    /// Create a new lowerer.
    ///
    /// `memo` and `names` must be fresh for each top-level compile.
    pub fn new(
        api: &'a RuntimeApi,
        binder: &'a dyn ExpressionBinder,
        memo: &'a mut MemoContext,
        names: &'a mut DependencyNames,
    ) -> Self {
        Self {
            runtime: Runtime::new(api),
            binder,
            memo,
            names,
        }
    }

    /// Lower a template root to its render expression
    pub fn transform(&mut self, root: &IrNode) -> CompileResult<Expression> {
        self.lower_tree(root, &[])
    }

    /// Lower `root` with its own frame stack. `scope` holds the loop locals
    /// visible where the tree is rendered.
    fn lower_tree(&mut self, root: &IrNode, scope: &[String]) -> CompileResult<Expression> {
        let mut walker = TreeWalker::new(self, scope.to_vec());
        crate::ir::walk_node(&mut walker, root)?;
        walker.finish()
    }

    /// Lower a text node
    fn lower_text(&self, text: &TextNode, scope: &[String]) -> Expression {
        let value = self.value_expr(&text.value, scope);
        self.runtime.text(value)
    }

    /// Lower an exited element given its lowered children.
    ///
    /// `scope` includes the element's own loop locals; `outer_scope` does not.
    fn lower_element_exit(
        &mut self,
        node: &IrNode,
        children: Vec<Expression>,
        scope: &[String],
        outer_scope: &[String],
    ) -> CompileResult<Lowered> {
        let children = self.children_expr(node, children);
        match node {
            IrNode::Element(el) => {
                let data = self.element_data_bag(el, scope);
                let expr = self.runtime.element(&el.tag, data, children);
                self.apply_directives(el, expr, scope, outer_scope)
                    .map(Lowered::One)
            }
            IrNode::Custom(custom) => {
                let expr = self.lower_custom_element(custom, scope)?;
                self.apply_directives(&custom.element, expr, scope, outer_scope)
                    .map(Lowered::One)
            }
            IrNode::Slot(slot) => Ok(Lowered::One(self.lower_slot(slot, children))),
            IrNode::Template(el) => self.lower_template(el, children, scope, outer_scope),
            IrNode::Text(text) => Ok(Lowered::One(self.lower_text(text, scope))),
        }
    }

    /// Turn accumulated children into the element's children expression
    fn children_expr(&self, node: &IrNode, mut children: Vec<Expression>) -> Expression {
        if !should_flatten(node) {
            return Expression::array(children);
        }
        if node.children().len() == 1 && children.len() == 1 {
            if let Some(only) = children.pop() {
                return only;
            }
        }
        self.runtime.flatten(Expression::array(children))
    }

    /// `if` then `for`, for elements that render themselves
    fn apply_directives(
        &self,
        el: &Element,
        expr: Expression,
        scope: &[String],
        outer_scope: &[String],
    ) -> CompileResult<Expression> {
        let expr = self.apply_inline_if(el, expr, scope)?;
        Ok(self.apply_inline_for(el, expr, outer_scope))
    }

    /// Direct children of a custom element are never walked; its content
    /// arrives through `slotset` only.
    fn lower_custom_element(
        &mut self,
        custom: &CustomElement,
        scope: &[String],
    ) -> CompileResult<Expression> {
        let el = &custom.element;
        let mut properties = self.data_bag_properties(el, scope);
        if let Some(slotset) = self.project_slots(custom, scope)? {
            properties.push(slotset);
        }

        let ctor = Expression::identifier(self.names.local_name(&custom.component));
        Ok(self
            .runtime
            .custom_element(&el.tag, ctor, Expression::object(properties)))
    }

    /// Caller-provided content for the slot, else the default children
    fn lower_slot(&self, slot: &SlotElement, children: Expression) -> Expression {
        Expression::or(self.runtime.slot_content(&slot.slot_name), children)
    }

    /// A `<template>` never renders. `if` gates each produced sibling on its
    /// own; `for` repeats the (single or list) children; an `if`-only list is
    /// spliced into the parent instead of nesting.
    fn lower_template(
        &self,
        el: &Element,
        children: Expression,
        scope: &[String],
        outer_scope: &[String],
    ) -> CompileResult<Lowered> {
        let mut expr = children;

        if let Some(if_) = &el.if_ {
            let test = self.if_test(if_, scope)?;
            expr = match expr {
                Expression::Array { elements } => Expression::array(
                    elements
                        .into_iter()
                        .map(|e| Expression::conditional(test.clone(), e, Expression::null()))
                        .collect(),
                ),
                other => Expression::conditional(test, other, Expression::null()),
            };
        }

        if el.for_.is_some() {
            let body = match expr {
                Expression::Array { mut elements } if elements.len() == 1 => elements.remove(0),
                other => other,
            };
            return Ok(Lowered::One(self.apply_inline_for(el, body, outer_scope)));
        }

        match expr {
            Expression::Array { elements } if el.if_.is_some() => Ok(Lowered::Splice(elements)),
            other => Ok(Lowered::One(other)),
        }
    }

    /// Literal values are copied, bound values go through the binder
    fn value_expr(&self, value: &IrValue, scope: &[String]) -> Expression {
        match value {
            IrValue::String(s) => Expression::string(s),
            IrValue::Number(n) => Expression::number(*n),
            IrValue::Expression { expr } => self.binder.bind(expr, scope),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::PrettyPrint;
    use crate::bind::ComponentBinder;
    use crate::ir::{ForDirective, IfDirective, IfModifier};

    fn transform(root: &IrNode) -> CompileResult<Expression> {
        let api = RuntimeApi::default();
        let binder = ComponentBinder::new("$cmp");
        let mut memo = MemoContext::new();
        let mut names = DependencyNames::new();
        Lowerer::new(&api, &binder, &mut memo, &mut names).transform(root)
    }

    fn text(s: &str) -> IrNode {
        IrNode::Text(TextNode {
            value: IrValue::from(s),
        })
    }

    fn element(tag: &str, children: Vec<IrNode>) -> Element {
        let mut el = Element::new(tag);
        el.children = children;
        el
    }

    #[test]
    fn test_empty_element() {
        let root = IrNode::Element(element("div", vec![]));
        assert_eq!(transform(&root).unwrap().pretty_print(), "$api.h('div', {}, [])");
    }

    #[test]
    fn test_strict_true_example() {
        let mut div = element("div", vec![text("hi")]);
        div.if_ = Some(IfDirective {
            expression: "x".into(),
            modifier: IfModifier::StrictTrue,
        });
        let out = transform(&IrNode::Element(div)).unwrap();
        assert_eq!(
            out.pretty_print(),
            "$cmp.x === true ? $api.h('div', {}, [$api.t('hi')]) : null"
        );
    }

    #[test]
    fn test_if_nested_inside_for() {
        let mut li = element("li", vec![]);
        li.if_ = Some(IfDirective {
            expression: "item.visible".into(),
            modifier: IfModifier::True,
        });
        li.for_ = Some(ForDirective::new("items"));
        let root = IrNode::Element(element("ul", vec![IrNode::Element(li)]));
        assert_eq!(
            transform(&root).unwrap().pretty_print(),
            "$api.h('ul', {}, $api.i($cmp.items, function (item, index) { \
             return item.visible ? $api.h('li', {}, []) : null; }))"
        );
    }

    #[test]
    fn test_template_if_splices_into_parent() {
        let mut tpl = element("template", vec![text("a"), text("b")]);
        tpl.if_ = Some(IfDirective {
            expression: "on".into(),
            modifier: IfModifier::False,
        });
        let root = IrNode::Element(element("p", vec![IrNode::Template(tpl), text("c")]));
        assert_eq!(
            transform(&root).unwrap().pretty_print(),
            "$api.h('p', {}, [!$cmp.on ? $api.t('a') : null, !$cmp.on ? $api.t('b') : null, $api.t('c')])"
        );
    }
}
