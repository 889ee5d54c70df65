//! Target AST
//!
//! A small ECMAScript expression/statement tree, just wide enough to describe a
//! compiled render function. `pretty` turns it into source text.

pub mod pretty;

pub use pretty::PrettyPrint;

use serde::{Deserialize, Serialize};

/// Expression (produces a value)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Expression {
    /// Identifier: `item`
    Identifier { name: String },

    /// String literal: `'div'`
    StringLiteral { value: String },

    /// Numeric literal: `42`
    NumberLiteral { value: f64 },

    /// Boolean literal: `true`, `false`
    BooleanLiteral { value: bool },

    /// `null`
    NullLiteral,

    /// Property access: `object.property` (or `object['prop-erty']`)
    Member {
        object: Box<Expression>,
        property: String,
    },

    /// Call: `callee(arg, ...)`
    Call {
        callee: Box<Expression>,
        arguments: Vec<Expression>,
    },

    /// Array literal: `[a, b]`
    Array { elements: Vec<Expression> },

    /// Object literal: `{ key: value }`
    Object { properties: Vec<Property> },

    /// Conditional: `test ? consequent : alternate`
    Conditional {
        test: Box<Expression>,
        consequent: Box<Expression>,
        alternate: Box<Expression>,
    },

    /// Unary operation: `!argument`
    Unary {
        operator: UnaryOp,
        argument: Box<Expression>,
    },

    /// Binary operation: `left === right`
    Binary {
        operator: BinaryOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },

    /// Logical operation: `left || right`
    Logical {
        operator: LogicalOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },

    /// Anonymous function expression: `function (a, b) { ... }`
    Function {
        params: Vec<String>,
        body: Vec<Statement>,
    },
}

/// Object literal property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub key: String,
    pub value: Expression,
}

impl Property {
    pub fn new(key: impl Into<String>, value: Expression) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnaryOp {
    Not,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BinaryOp {
    StrictEqual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogicalOp {
    Or,
}

impl std::fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnaryOp::Not => write!(f, "!"),
        }
    }
}

impl std::fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinaryOp::StrictEqual => write!(f, "==="),
        }
    }
}

impl std::fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogicalOp::Or => write!(f, "||"),
        }
    }
}

/// Statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Statement {
    /// `return argument;`
    Return { argument: Expression },

    /// `import local from 'source';`
    ImportDefault { local: String, source: String },

    /// `export default function name(params) { body }`
    ExportDefaultFunction {
        name: String,
        params: Vec<String>,
        body: Vec<Statement>,
    },
}

/// A whole compiled module
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Program {
    pub body: Vec<Statement>,
}

// ============================================================================
// Construction helpers
// ============================================================================

impl Expression {
    pub fn identifier(name: impl Into<String>) -> Self {
        Expression::Identifier { name: name.into() }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expression::StringLiteral {
            value: value.into(),
        }
    }

    pub fn number(value: f64) -> Self {
        Expression::NumberLiteral { value }
    }

    pub fn boolean(value: bool) -> Self {
        Expression::BooleanLiteral { value }
    }

    pub fn null() -> Self {
        Expression::NullLiteral
    }

    pub fn member(object: Expression, property: impl Into<String>) -> Self {
        Expression::Member {
            object: Box::new(object),
            property: property.into(),
        }
    }

    pub fn call(callee: Expression, arguments: Vec<Expression>) -> Self {
        Expression::Call {
            callee: Box::new(callee),
            arguments,
        }
    }

    pub fn array(elements: Vec<Expression>) -> Self {
        Expression::Array { elements }
    }

    pub fn object(properties: Vec<Property>) -> Self {
        Expression::Object { properties }
    }

    pub fn conditional(test: Expression, consequent: Expression, alternate: Expression) -> Self {
        Expression::Conditional {
            test: Box::new(test),
            consequent: Box::new(consequent),
            alternate: Box::new(alternate),
        }
    }

    pub fn not(argument: Expression) -> Self {
        Expression::Unary {
            operator: UnaryOp::Not,
            argument: Box::new(argument),
        }
    }

    pub fn strict_equal(left: Expression, right: Expression) -> Self {
        Expression::Binary {
            operator: BinaryOp::StrictEqual,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn or(left: Expression, right: Expression) -> Self {
        Expression::Logical {
            operator: LogicalOp::Or,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn function(params: Vec<String>, body: Vec<Statement>) -> Self {
        Expression::Function { params, body }
    }
}
