//! Runtime API naming
//!
//! The generated render function calls into a collaborating runtime library
//! through a handful of primitives. Their names, and the names of the render
//! function's parameters, are collected here so that alternate runtimes can
//! override them from a `[runtime]` configuration table.

use serde::{Deserialize, Serialize};

/// Names of the runtime primitives and render-function parameters
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct RuntimeApi {
    /// Element construction: `(tag, data, children)`
    pub element: String,
    /// Text construction: `(value)`
    pub text: String,
    /// Custom element construction: `(tag, Ctor, data)`
    pub custom_element: String,
    /// Iteration: `(iterable, function (item, index) { ... })`
    pub iterate: String,
    /// Flattening of possibly nested child lists: `(list)`
    pub flatten: String,
    /// Handler memoization: `(handler, slot)`
    pub bind: String,

    /// First render parameter: the runtime API handle
    pub api_param: String,
    /// Second render parameter: the component instance
    pub component_param: String,
    /// Third render parameter: caller-provided slot content
    pub slot_set_param: String,
    /// Fourth render parameter: the rendering context
    pub context_param: String,
    /// Name of the exported render function
    pub function_name: String,
}

impl Default for RuntimeApi {
    fn default() -> Self {
        Self {
            element: "h".to_string(),
            text: "t".to_string(),
            custom_element: "c".to_string(),
            iterate: "i".to_string(),
            flatten: "f".to_string(),
            bind: "b".to_string(),
            api_param: "$api".to_string(),
            component_param: "$cmp".to_string(),
            slot_set_param: "$slotset".to_string(),
            context_param: "$ctx".to_string(),
            function_name: "tmpl".to_string(),
        }
    }
}

impl RuntimeApi {
    /// Render-function parameters, in call order
    pub fn render_params(&self) -> Vec<String> {
        vec![
            self.api_param.clone(),
            self.component_param.clone(),
            self.slot_set_param.clone(),
            self.context_param.clone(),
        ]
    }
}
