//! Element data bag
//!
//! The object literal passed to element construction. Only properties the
//! element actually carries are emitted, always in this order:
//!
//!   className, classMap, style, attrs, props, key, on
//!
//! Custom elements append `slotset` after these.

use super::Lowerer;
use crate::ast::{Expression, Property};
use crate::ir::{Element, IrValue};
use indexmap::IndexMap;

impl<'a> Lowerer<'a> {
    /// Build the data bag object for `el`
    pub fn element_data_bag(&mut self, el: &Element, scope: &[String]) -> Expression {
        Expression::object(self.data_bag_properties(el, scope))
    }

    /// Data bag properties, in emission order
    pub(crate) fn data_bag_properties(&mut self, el: &Element, scope: &[String]) -> Vec<Property> {
        let mut properties = Vec::new();

        if let Some(class_name) = &el.class_name {
            properties.push(Property::new("className", self.value_expr(class_name, scope)));
        }

        if let Some(class_map) = &el.class_map {
            // Membership only: every listed class is on.
            let classes = class_map
                .keys()
                .map(|name| Property::new(name, Expression::boolean(true)))
                .collect();
            properties.push(Property::new("classMap", Expression::object(classes)));
        }

        if let Some(style) = &el.style {
            let rules = style
                .iter()
                .map(|(name, value)| Property::new(name, self.value_expr(value, scope)))
                .collect();
            properties.push(Property::new("style", Expression::object(rules)));
        }

        if let Some(attrs) = &el.attrs {
            properties.push(Property::new("attrs", self.attribute_map(attrs, scope)));
        }

        if let Some(props) = &el.props {
            properties.push(Property::new("props", self.attribute_map(props, scope)));
        }

        if let Some(key) = el.for_.as_ref().and_then(|for_| for_.key.as_ref()) {
            properties.push(Property::new("key", key.clone()));
        }

        if let Some(on) = &el.on {
            let mut handlers = Vec::with_capacity(on.len());
            for (event, handler) in on {
                let bound = self.binder.bind(handler, scope);
                let memoized = self.memo.memoize(bound, &self.runtime);
                handlers.push(Property::new(event, memoized));
            }
            properties.push(Property::new("on", Expression::object(handlers)));
        }

        properties
    }

    /// `attrs` / `props`: an empty string literal is a presence flag
    fn attribute_map(&self, values: &IndexMap<String, IrValue>, scope: &[String]) -> Expression {
        let properties = values
            .iter()
            .map(|(name, value)| {
                let expr = match value {
                    IrValue::String(s) if s.is_empty() => Expression::boolean(true),
                    other => self.value_expr(other, scope),
                };
                Property::new(name, expr)
            })
            .collect();
        Expression::object(properties)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::PrettyPrint;
    use crate::bind::ComponentBinder;
    use crate::config::RuntimeApi;
    use crate::ir::{ForDirective, TemplateExpr};
    use crate::assemble::DependencyNames;
    use crate::lower::MemoContext;

    fn data_bag(el: &Element, scope: &[String]) -> String {
        let api = RuntimeApi::default();
        let binder = ComponentBinder::new("$cmp");
        let mut memo = MemoContext::new();
        let mut names = DependencyNames::new();
        let mut lowerer = Lowerer::new(&api, &binder, &mut memo, &mut names);
        lowerer.element_data_bag(el, scope).pretty_print()
    }

    fn map(entries: &[(&str, IrValue)]) -> IndexMap<String, IrValue> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_empty_bag() {
        assert_eq!(data_bag(&Element::new("div"), &[]), "{}");
    }

    #[test]
    fn test_attribute_values() {
        let mut el = Element::new("input");
        el.attrs = Some(map(&[
            ("title", IrValue::from("")),
            ("name", IrValue::from("x")),
            ("value", IrValue::expr("draft")),
        ]));
        assert_eq!(
            data_bag(&el, &[]),
            "{ attrs: { title: true, name: 'x', value: $cmp.draft } }"
        );
    }

    #[test]
    fn test_class_map_and_style() {
        let mut el = Element::new("div");
        el.class_map = Some(map(&[("active", IrValue::from("")), ("big", IrValue::from(""))]));
        el.style = Some(map(&[("width", IrValue::from("10px")), ("z-index", IrValue::from(3.0))]));
        assert_eq!(
            data_bag(&el, &[]),
            "{ classMap: { active: true, big: true }, style: { width: '10px', 'z-index': 3 } }"
        );
    }

    #[test]
    fn test_key_order() {
        let mut el = Element::new("li");
        let mut on = IndexMap::new();
        on.insert("click".to_string(), TemplateExpr::from("handleClick"));
        el.on = Some(on);
        let mut for_ = ForDirective::new("rows");
        for_.key = Some(Expression::member(Expression::identifier("item"), "id"));
        el.for_ = Some(for_);
        el.props = Some(map(&[("value", IrValue::expr("item.value"))]));
        el.class_name = Some(IrValue::from("row"));
        let scope = vec!["item".to_string(), "index".to_string()];
        assert_eq!(
            data_bag(&el, &scope),
            "{ className: 'row', props: { value: item.value }, key: item.id, \
             on: { click: $api.b($cmp.handleClick, 0) } }"
        );
    }
}
