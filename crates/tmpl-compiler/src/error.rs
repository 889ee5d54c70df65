//! Compilation errors

use thiserror::Error;

pub type CompileResult<T> = Result<T, CompileError>;

/// Fatal errors raised while lowering a template.
///
/// Any error aborts the whole compile; no partially built AST is returned.
#[derive(Debug, Error, PartialEq)]
pub enum CompileError {
    /// An `if` directive carries a modifier outside {true, false, strict-true}
    #[error("Unknown if modifier: {modifier}")]
    UnknownDirectiveModifier { modifier: String },

    /// The traversal state no longer matches the tree shape
    #[error("Internal compiler error: {message}")]
    Internal { message: String },
}

impl CompileError {
    pub(crate) fn internal(message: impl Into<String>) -> Self {
        CompileError::Internal {
            message: message.into(),
        }
    }
}
