//! Tree walker and frame stack
//!
//! One children accumulator ("frame") is open per element currently being
//! visited, on top of a permanent root frame. Entering an element opens a
//! frame; exiting it closes the frame, lowers the element from the collected
//! children and pushes the result into the parent's frame. When the walk is
//! done the root frame holds the whole tree's expression.

use super::{Lowered, Lowerer};
use crate::ast::Expression;
use crate::error::{CompileError, CompileResult};
use crate::ir::{IrNode, TextNode, Visitor, Walk};

/// Ordered output expressions of one open scope
#[derive(Debug, Default)]
struct Frame {
    children: Vec<Expression>,
}

/// LIFO stack of frames above a root frame that is never popped
#[derive(Debug, Default)]
struct FrameStack {
    root: Frame,
    open: Vec<Frame>,
}

impl FrameStack {
    fn push(&mut self) {
        self.open.push(Frame::default());
    }

    fn pop(&mut self) -> CompileResult<Frame> {
        self.open
            .pop()
            .ok_or_else(|| CompileError::internal("element exit without a matching frame"))
    }

    fn top_mut(&mut self) -> &mut Frame {
        self.open.last_mut().unwrap_or(&mut self.root)
    }

    fn depth(&self) -> usize {
        self.open.len()
    }
}

/// Visitor that folds an IR tree into one expression
pub(super) struct TreeWalker<'l, 'a> {
    lowerer: &'l mut Lowerer<'a>,
    frames: FrameStack,
    /// Loop locals in scope, outermost first
    scope: Vec<String>,
}

impl<'l, 'a> TreeWalker<'l, 'a> {
    pub(super) fn new(lowerer: &'l mut Lowerer<'a>, scope: Vec<String>) -> Self {
        Self {
            lowerer,
            frames: FrameStack::default(),
            scope,
        }
    }

    /// Take the tree's expression out of the root frame
    pub(super) fn finish(self) -> CompileResult<Expression> {
        if self.frames.depth() != 0 {
            return Err(CompileError::internal(format!(
                "{} frames still open after traversal",
                self.frames.depth()
            )));
        }
        let mut roots = self.frames.root.children;
        if roots.len() == 1 {
            if let Some(root) = roots.pop() {
                return Ok(root);
            }
        }
        log::debug!("template root produced {} expressions; returning them as a list", roots.len());
        Ok(Expression::array(roots))
    }
}

impl Visitor for TreeWalker<'_, '_> {
    fn enter_element(&mut self, node: &IrNode) -> CompileResult<Walk> {
        self.frames.push();
        if let Some(for_) = node.element().and_then(|el| el.for_.as_ref()) {
            self.scope.push(for_.item.clone());
            self.scope.push(for_.index.clone());
        }
        if let IrNode::Custom(custom) = node {
            if !custom.element.children.is_empty() {
                log::warn!(
                    "<{}>: direct children are not rendered; project them through a slot",
                    custom.element.tag
                );
            }
            return Ok(Walk::SkipChildren);
        }
        Ok(Walk::Children)
    }

    fn exit_element(&mut self, node: &IrNode) -> CompileResult<()> {
        let frame = self.frames.pop()?;
        let own_locals = if node.is_looped() { 2 } else { 0 };
        let outer_len = self.scope.len().saturating_sub(own_locals);

        log::trace!(
            "exit <{}> with {} children at depth {}",
            node.element().map(|el| el.tag.as_str()).unwrap_or(""),
            frame.children.len(),
            self.frames.depth()
        );

        let lowered = self.lowerer.lower_element_exit(
            node,
            frame.children,
            &self.scope,
            &self.scope[..outer_len],
        )?;
        self.scope.truncate(outer_len);

        let parent = self.frames.top_mut();
        match lowered {
            Lowered::One(expr) => parent.children.push(expr),
            Lowered::Splice(exprs) => parent.children.extend(exprs),
        }
        Ok(())
    }

    fn visit_text(&mut self, text: &TextNode) -> CompileResult<()> {
        let expr = self.lowerer.lower_text(text, &self.scope);
        self.frames.top_mut().children.push(expr);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_stack_discipline() {
        let mut frames = FrameStack::default();
        frames.push();
        frames.top_mut().children.push(Expression::null());
        assert_eq!(frames.depth(), 1);
        let frame = frames.pop().unwrap();
        assert_eq!(frame.children.len(), 1);
        frames.top_mut().children.push(Expression::boolean(true));
        assert_eq!(frames.root.children.len(), 1);
    }

    #[test]
    fn test_root_frame_is_never_popped() {
        let mut frames = FrameStack::default();
        assert!(matches!(frames.pop(), Err(CompileError::Internal { .. })));
    }
}
