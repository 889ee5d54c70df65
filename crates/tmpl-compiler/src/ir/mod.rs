//! Template Intermediate Representation
//!
//! The validated tree form of a template, produced upstream by the parser and
//! validator. Nodes are immutable input to lowering.
//!
//! # Structure
//!
//! - `IrNode` - Sum type over node roles: text, element, template, slot, custom element
//! - `Element` - Tag, children, directives and data shared by every element role
//! - `IrValue` - A static literal or a bound expression reference
//! - `Metadata` - Per-template compilation metadata (component dependencies)

pub mod visit;

pub use visit::{walk_node, Visitor, Walk};

use crate::ast::Expression;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Template IR node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum IrNode {
    /// Text content
    Text(TextNode),
    /// Ordinary element rendered by the runtime
    Element(Element),
    /// `<template>` pseudo-element: gates or repeats its children, never rendered
    Template(Element),
    /// Slot placeholder
    Slot(SlotElement),
    /// Custom element backed by a component class
    Custom(CustomElement),
}

impl IrNode {
    /// Shared element fields, or None for text
    pub fn element(&self) -> Option<&Element> {
        match self {
            IrNode::Text(_) => None,
            IrNode::Element(el) | IrNode::Template(el) => Some(el),
            IrNode::Slot(slot) => Some(&slot.element),
            IrNode::Custom(custom) => Some(&custom.element),
        }
    }

    pub fn children(&self) -> &[IrNode] {
        self.element().map(|el| el.children.as_slice()).unwrap_or(&[])
    }

    /// Whether the node carries a `for` directive
    pub fn is_looped(&self) -> bool {
        self.element().is_some_and(|el| el.for_.is_some())
    }
}

/// Text node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextNode {
    pub value: IrValue,
}

/// Fields shared by every element role
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Element {
    pub tag: String,
    pub children: Vec<IrNode>,

    #[serde(rename = "if", skip_serializing_if = "Option::is_none")]
    pub if_: Option<IfDirective>,
    #[serde(rename = "for", skip_serializing_if = "Option::is_none")]
    pub for_: Option<ForDirective>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<IrValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_map: Option<IndexMap<String, IrValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<IndexMap<String, IrValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attrs: Option<IndexMap<String, IrValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub props: Option<IndexMap<String, IrValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on: Option<IndexMap<String, TemplateExpr>>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Synthetic `<template>` wrapping `children`, used for slot content
    pub fn synthetic_template(children: Vec<IrNode>) -> IrNode {
        IrNode::Template(Element {
            tag: "template".to_string(),
            children,
            ..Default::default()
        })
    }
}

/// Slot placeholder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotElement {
    #[serde(flatten)]
    pub element: Element,
    #[serde(default)]
    pub slot_name: String,
}

/// Custom element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomElement {
    #[serde(flatten)]
    pub element: Element,
    /// Module specifier of the component class, e.g. `x-foo`
    pub component: String,
    /// Projected content per slot name, in declaration order
    #[serde(default)]
    pub slot_set: IndexMap<String, Vec<IrNode>>,
}

/// `if` directive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfDirective {
    pub expression: TemplateExpr,
    #[serde(default)]
    pub modifier: IfModifier,
}

/// How an `if` expression is coerced to a boolean test
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IfModifier {
    /// Truthy
    #[default]
    True,
    /// Falsy
    False,
    /// `=== true`
    StrictTrue,
    /// Anything else; rejected during lowering
    Unknown(String),
}

impl From<String> for IfModifier {
    fn from(value: String) -> Self {
        match value.as_str() {
            "true" => IfModifier::True,
            "false" => IfModifier::False,
            "strict-true" => IfModifier::StrictTrue,
            _ => IfModifier::Unknown(value),
        }
    }
}

impl From<IfModifier> for String {
    fn from(value: IfModifier) -> Self {
        match value {
            IfModifier::True => "true".to_string(),
            IfModifier::False => "false".to_string(),
            IfModifier::StrictTrue => "strict-true".to_string(),
            IfModifier::Unknown(other) => other,
        }
    }
}

/// `for` directive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForDirective {
    /// Iterable
    pub expression: TemplateExpr,
    /// Loop-local item binding
    #[serde(default = "default_for_item")]
    pub item: String,
    /// Loop-local index binding
    #[serde(default = "default_for_index")]
    pub index: String,
    /// Per-item key, already bound upstream
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<Expression>,
}

fn default_for_item() -> String {
    "item".to_string()
}

fn default_for_index() -> String {
    "index".to_string()
}

impl ForDirective {
    pub fn new(expression: impl Into<TemplateExpr>) -> Self {
        Self {
            expression: expression.into(),
            item: default_for_item(),
            index: default_for_index(),
            key: None,
        }
    }
}

/// A source-level expression reference: a dotted member path such as
/// `item.label`. The binder decides what it reads from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct TemplateExpr {
    pub path: Vec<String>,
}

impl From<&str> for TemplateExpr {
    fn from(value: &str) -> Self {
        Self {
            path: value.split('.').map(str::to_string).collect(),
        }
    }
}

impl From<String> for TemplateExpr {
    fn from(value: String) -> Self {
        TemplateExpr::from(value.as_str())
    }
}

impl From<TemplateExpr> for String {
    fn from(value: TemplateExpr) -> Self {
        value.path.join(".")
    }
}

impl std::fmt::Display for TemplateExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path.join("."))
    }
}

/// A static literal or a bound expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IrValue {
    String(String),
    Number(f64),
    Expression { expr: TemplateExpr },
}

impl IrValue {
    pub fn expr(path: &str) -> Self {
        IrValue::Expression { expr: path.into() }
    }
}

impl From<&str> for IrValue {
    fn from(value: &str) -> Self {
        IrValue::String(value.to_string())
    }
}

impl From<f64> for IrValue {
    fn from(value: f64) -> Self {
        IrValue::Number(value)
    }
}

/// Compilation metadata collected upstream
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    /// Module specifiers of custom component classes, in first-use order
    pub dependencies: Vec<String>,
}

/// Serialized compiler input: the IR root plus its metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateDocument {
    pub root: IrNode,
    #[serde(default)]
    pub metadata: Metadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_element_with_directives() {
        let json = r#"{
            "type": "element",
            "tag": "li",
            "if": { "expression": "visible", "modifier": "strict-true" },
            "for": { "expression": "items", "item": "row", "index": "i" },
            "attrs": { "title": "", "data-id": { "expr": "row.id" }, "tabindex": 0 },
            "children": [{ "type": "text", "value": "hi" }]
        }"#;
        let node: IrNode = serde_json::from_str(json).unwrap();
        let IrNode::Element(el) = node else {
            panic!("expected element");
        };
        assert_eq!(el.tag, "li");
        let if_ = el.if_.unwrap();
        assert_eq!(if_.modifier, IfModifier::StrictTrue);
        assert_eq!(if_.expression.path, vec!["visible"]);
        let for_ = el.for_.unwrap();
        assert_eq!(for_.item, "row");
        assert_eq!(for_.index, "i");
        let attrs = el.attrs.unwrap();
        let keys: Vec<&str> = attrs.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["title", "data-id", "tabindex"]);
        assert_eq!(attrs["data-id"], IrValue::expr("row.id"));
        assert_eq!(attrs["tabindex"], IrValue::Number(0.0));
        assert_eq!(el.children.len(), 1);
    }

    #[test]
    fn test_deserialize_unknown_modifier_is_kept() {
        let json = r#"{ "expression": "x", "modifier": "maybe" }"#;
        let if_: IfDirective = serde_json::from_str(json).unwrap();
        assert_eq!(if_.modifier, IfModifier::Unknown("maybe".to_string()));
    }

    #[test]
    fn test_deserialize_custom_element_slot_order() {
        let json = r#"{
            "type": "custom",
            "tag": "x-card",
            "component": "x-card",
            "slotSet": {
                "header": [{ "type": "text", "value": "H" }],
                "": [{ "type": "text", "value": "body" }]
            }
        }"#;
        let node: IrNode = serde_json::from_str(json).unwrap();
        let IrNode::Custom(custom) = node else {
            panic!("expected custom element");
        };
        let names: Vec<&str> = custom.slot_set.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["header", ""]);
        assert_eq!(custom.element.tag, "x-card");
    }

    #[test]
    fn test_for_defaults() {
        let for_: ForDirective = serde_json::from_str(r#"{ "expression": "rows" }"#).unwrap();
        assert_eq!(for_.item, "item");
        assert_eq!(for_.index, "index");
        assert!(for_.key.is_none());
    }

    #[test]
    fn test_template_expr_display() {
        let expr = TemplateExpr::from("item.label");
        assert_eq!(expr.path, vec!["item", "label"]);
        assert_eq!(expr.to_string(), "item.label");
    }
}
