//! Runtime primitive call shapes
//!
//! Every call the generated code makes into the runtime goes through here so
//! argument order stays in one place:
//!
//!   element         $api.h(tag, data, children)
//!   text            $api.t(value)
//!   custom element  $api.c(tag, Ctor, data)
//!   iterate         $api.i(iterable, function (item, index) { return node; })
//!   flatten         $api.f(list)
//!   bind            $api.b(handler, slot)

use crate::ast::{Expression, Statement};
use crate::config::RuntimeApi;

/// Builds runtime primitive calls against a configured API
#[derive(Debug, Clone, Copy)]
pub struct Runtime<'a> {
    api: &'a RuntimeApi,
}

impl<'a> Runtime<'a> {
    pub fn new(api: &'a RuntimeApi) -> Self {
        Self { api }
    }

    fn primitive(&self, name: &str, arguments: Vec<Expression>) -> Expression {
        let callee = Expression::member(Expression::identifier(&self.api.api_param), name);
        Expression::call(callee, arguments)
    }

    pub fn element(&self, tag: &str, data: Expression, children: Expression) -> Expression {
        self.primitive(&self.api.element, vec![Expression::string(tag), data, children])
    }

    pub fn text(&self, value: Expression) -> Expression {
        self.primitive(&self.api.text, vec![value])
    }

    pub fn custom_element(&self, tag: &str, ctor: Expression, data: Expression) -> Expression {
        self.primitive(
            &self.api.custom_element,
            vec![Expression::string(tag), ctor, data],
        )
    }

    /// `iterate(iterable, function (item, index) { return body; })`
    pub fn iterate(
        &self,
        iterable: Expression,
        item: &str,
        index: &str,
        body: Expression,
    ) -> Expression {
        let func = Expression::function(
            vec![item.to_string(), index.to_string()],
            vec![Statement::Return { argument: body }],
        );
        self.primitive(&self.api.iterate, vec![iterable, func])
    }

    pub fn flatten(&self, list: Expression) -> Expression {
        self.primitive(&self.api.flatten, vec![list])
    }

    pub fn bind(&self, handler: Expression, slot: u32) -> Expression {
        self.primitive(&self.api.bind, vec![handler, Expression::number(f64::from(slot))])
    }

    /// `$slotset.<name>`
    pub fn slot_content(&self, name: &str) -> Expression {
        Expression::member(Expression::identifier(&self.api.slot_set_param), name)
    }
}
