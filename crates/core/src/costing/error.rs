//! Costing error types.

use creperia_shared::AppError;
use thiserror::Error;

/// Errors raised while setting up the costing engine.
///
/// Computation itself never fails; only the cost-element catalog can be
/// rejected when the host builds it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CostingError {
    /// The catalog must contain at least one cost element.
    #[error("Cost element catalog is empty")]
    EmptyCatalog,

    /// A cost element code is empty or whitespace.
    #[error("Cost element code cannot be blank")]
    BlankCode,

    /// Two cost elements share the same code.
    #[error("Duplicate cost element code: {0}")]
    DuplicateCode(String),

    /// The catalog exceeds the number of representable elements.
    #[error("Too many cost elements: {0}")]
    TooManyElements(usize),
}

impl From<CostingError> for AppError {
    fn from(err: CostingError) -> Self {
        Self::Validation(err.to_string())
    }
}
