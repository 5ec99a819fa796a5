use crate::bitset::BitSet;
use crate::gate::GateType;
use crate::reference::Ref;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum NodeKind {
    /// The constant-1 node.
    Const,
    /// Elementary variable leaf.
    Var(u32),
    /// Caller-supplied divisor leaf. Divisors are numbered by first appearance since the last
    /// [`clear`][crate::manager::Manager::clear]; equal divisors share one leaf.
    Divisor(u32),
    /// Internal node `op(fanins[0], fanins[1])`.
    Gate { op: GateType, fanins: [Ref; 2] },
}

/// One synthesized function in the manager arena.
#[derive(Debug, Clone)]
pub struct Node {
    pub kind: NodeKind,
    /// Truth table of the node, at the manager's `max_support` width.
    pub truth: Vec<u64>,
    /// Support of `truth`.
    pub support: u32,
    /// Opaque slot where callers record the node's counterpart in their own network.
    pub copy: Option<usize>,
    /// Numbers of the divisor leaves reachable from this node.
    pub divisors: BitSet,
}

impl Node {
    pub fn new(kind: NodeKind, truth: Vec<u64>, support: u32) -> Self {
        Self {
            kind,
            truth,
            support,
            copy: None,
            divisors: BitSet::new(),
        }
    }

    pub fn is_gate(&self) -> bool {
        matches!(self.kind, NodeKind::Gate { .. })
    }

    pub fn fanins(&self) -> Option<[Ref; 2]> {
        match self.kind {
            NodeKind::Gate { fanins, .. } => Some(fanins),
            _ => None,
        }
    }

    pub fn op(&self) -> Option<GateType> {
        match self.kind {
            NodeKind::Gate { op, .. } => Some(op),
            _ => None,
        }
    }
}
