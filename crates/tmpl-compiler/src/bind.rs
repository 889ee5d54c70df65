//! Expression binding
//!
//! Turns a source-level expression reference from the IR into an AST
//! expression that reads from the right place at render time. Identifier
//! resolution proper happens upstream; lowering only asks the binder to
//! produce the final expression given the loop locals currently in scope.

use crate::ast::Expression;
use crate::ir::TemplateExpr;

/// Binds IR expression references to AST expressions
pub trait ExpressionBinder: Send + Sync {
    /// Bind `expr`. `scope` lists the loop-local identifiers visible at this
    /// point, outermost first.
    fn bind(&self, expr: &TemplateExpr, scope: &[String]) -> Expression;
}

/// Default binder: loop locals are read directly, everything else is read
/// from the component instance parameter.
#[derive(Debug, Clone)]
pub struct ComponentBinder {
    component_param: String,
}

impl ComponentBinder {
    pub fn new(component_param: impl Into<String>) -> Self {
        Self {
            component_param: component_param.into(),
        }
    }
}

impl ExpressionBinder for ComponentBinder {
    fn bind(&self, expr: &TemplateExpr, scope: &[String]) -> Expression {
        let mut segments = expr.path.iter();
        let mut bound = match segments.next() {
            Some(head) if scope.iter().any(|local| local == head) => Expression::identifier(head),
            Some(head) => Expression::member(Expression::identifier(&self.component_param), head),
            None => Expression::identifier(&self.component_param),
        };
        for segment in segments {
            bound = Expression::member(bound, segment);
        }
        bound
    }
}
