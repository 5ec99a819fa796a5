use std::fmt::{Display, Formatter};

use crate::truth;

/// Two-input operator of a decomposition node.
///
/// Input and output complementation is carried by the polarity of the fanin references and of
/// the reference to the node itself.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GateType {
    And,
    Or,
    Xor,
}

impl GateType {
    pub const ALL: [GateType; 3] = [GateType::And, GateType::Or, GateType::Xor];

    /// Computes `dst = op(a, b)`.
    pub fn apply(self, dst: &mut [u64], a: &[u64], b: &[u64], n_vars: usize) {
        match self {
            GateType::And => truth::and(dst, a, b, n_vars),
            GateType::Or => truth::or(dst, a, b, n_vars),
            GateType::Xor => truth::xor(dst, a, b, n_vars),
        }
    }

    /// Evaluates the operator on two bits.
    pub fn eval(self, a: bool, b: bool) -> bool {
        match self {
            GateType::And => a && b,
            GateType::Or => a || b,
            GateType::Xor => a ^ b,
        }
    }

    /// The operator obtained by complementing both inputs and the output.
    pub fn dual(self) -> GateType {
        match self {
            GateType::And => GateType::Or,
            GateType::Or => GateType::And,
            GateType::Xor => GateType::Xor,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            GateType::And => "AND",
            GateType::Or => "OR",
            GateType::Xor => "XOR",
        }
    }
}

impl Display for GateType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
