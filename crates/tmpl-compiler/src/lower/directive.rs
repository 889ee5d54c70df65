//! Directive lowering
//!
//! `if` wraps an expression in a conditional whose alternate is `null`.
//! `for` wraps it in the runtime iteration primitive with an anonymous
//! `(item, index)` function returning it. Ordinary and custom elements apply
//! `if` first and then `for`, so each iteration is gated on its own.

use super::Lowerer;
use crate::ast::Expression;
use crate::error::{CompileError, CompileResult};
use crate::ir::{Element, IfDirective, IfModifier};

impl<'a> Lowerer<'a> {
    /// Gate `expr` on the element's `if`, if any
    pub(crate) fn apply_inline_if(
        &self,
        element: &Element,
        expr: Expression,
        scope: &[String],
    ) -> CompileResult<Expression> {
        match &element.if_ {
            None => Ok(expr),
            Some(if_) => {
                let test = self.if_test(if_, scope)?;
                Ok(Expression::conditional(test, expr, Expression::null()))
            }
        }
    }

    /// Build the boolean test for an `if` directive
    pub(crate) fn if_test(&self, if_: &IfDirective, scope: &[String]) -> CompileResult<Expression> {
        let bound = self.binder.bind(&if_.expression, scope);
        match &if_.modifier {
            IfModifier::True => Ok(bound),
            IfModifier::False => Ok(Expression::not(bound)),
            IfModifier::StrictTrue => Ok(Expression::strict_equal(bound, Expression::boolean(true))),
            IfModifier::Unknown(modifier) => Err(CompileError::UnknownDirectiveModifier {
                modifier: modifier.clone(),
            }),
        }
    }

    /// Repeat `expr` over the element's `for` iterable, if any.
    ///
    /// `outer_scope` must not contain the element's own loop locals: the
    /// iterable is evaluated outside the loop.
    pub(crate) fn apply_inline_for(
        &self,
        element: &Element,
        expr: Expression,
        outer_scope: &[String],
    ) -> Expression {
        match &element.for_ {
            None => expr,
            Some(for_) => {
                let iterable = self.binder.bind(&for_.expression, outer_scope);
                self.runtime.iterate(iterable, &for_.item, &for_.index, expr)
            }
        }
    }
}
