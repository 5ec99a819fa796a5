use crate::gate::GateType;

/// Upper bound on [`Params::max_support`]; the table has `2^max_support` buckets.
pub const MAX_SUPPORT_LIMIT: usize = 16;

/// Parameters of a decomposition [`Manager`][crate::manager::Manager].
#[derive(Debug, Clone)]
pub struct Params {
    /// Maximum number of variables of any decomposed function.
    pub max_support: usize,
    /// Report a summary of every `decompose` call.
    pub verbose: bool,
    /// Additionally trace every recursion step.
    pub very_verbose: bool,
    /// Operators tried by the split search. The best split wins; ties go to the earlier operator.
    pub operators: Vec<GateType>,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            max_support: 8,
            verbose: false,
            very_verbose: false,
            operators: GateType::ALL.to_vec(),
        }
    }
}

impl Params {
    pub fn with_max_support(mut self, max_support: usize) -> Self {
        self.max_support = max_support;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_very_verbose(mut self, very_verbose: bool) -> Self {
        self.very_verbose = very_verbose;
        self
    }

    pub fn with_operators(mut self, operators: impl IntoIterator<Item = GateType>) -> Self {
        self.operators = operators.into_iter().collect();
        self
    }
}
