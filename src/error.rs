//! Error types

use std::fmt;

/// Recoverable failure of a [`decompose`][crate::manager::Manager::decompose] call.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum DecomposeError {
    /// The network would need more than `budget` new internal nodes.
    BudgetExhausted { budget: usize },
}

impl fmt::Display for DecomposeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecomposeError::BudgetExhausted { budget } => {
                write!(f, "decomposition needs more than {} nodes", budget)
            }
        }
    }
}

impl std::error::Error for DecomposeError {}
