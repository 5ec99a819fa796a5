//! Decomposition manager.
//!
//! The [`Manager`] owns every node synthesized during a decomposition session, the canonicalizing
//! [`Table`] and the scratch buffers. Callers only ever hold [`Ref`] handles into its arena.
//!
//! # Arena layout
//!
//! ```text
//! @0                      constant 1 (~@0 is constant 0)
//! @1 ..= @max_support     elementary variables x0, x1, ...
//! @k ...                  divisor leaves and internal nodes, in creation order
//! ```
//!
//! Internal nodes only reference earlier entries, so walking the arena in index order visits
//! fanins before their fanouts.
//!
//! Divisor leaves are shared between calls: a divisor equal to one seen before reuses its leaf.
//! Every node records the divisor leaves in its cone, and the table only hands out nodes whose
//! divisors are all offered by the current call. [`Manager::clear`] drops everything above the
//! variable leaves.

use std::fmt::{Debug, Formatter};

use crate::bitset::BitSet;
use crate::isf::Scratch;
use crate::node::{Node, NodeKind};
use crate::params::{Params, MAX_SUPPORT_LIMIT};
use crate::reference::Ref;
use crate::table::Table;
use crate::truth;

/// Counters describing the last [`decompose`][Manager::decompose] call.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct Stats {
    /// Recursive sub-problems visited.
    pub calls: usize,
    /// Sub-problems resolved by the canonicalizing table.
    pub table_hits: usize,
    /// Sub-problems resolved by a divisor leaf.
    pub divisor_hits: usize,
    /// Sub-problems resolved by an elementary variable.
    pub var_hits: usize,
    pub and_splits: usize,
    pub or_splits: usize,
    pub xor_splits: usize,
    /// Sub-problems without a strong split, expanded around one variable.
    pub shannon: usize,
    /// Internal nodes created.
    pub nodes: usize,
}

pub struct Manager {
    pub(crate) params: Params,
    pub(crate) nodes: Vec<Node>,
    pub(crate) table: Table,
    pub(crate) scratch: Scratch,
    /// Number of variables of the current problem.
    pub(crate) n_vars: usize,
    /// Divisor leaves by number of first appearance.
    pub(crate) divisor_leaves: Vec<u32>,
    /// Divisor leaves of the current problem, by position in the call.
    pub(crate) divisors: Vec<u32>,
    /// Numbers of the divisor leaves offered by the current problem.
    pub(crate) offered: BitSet,
    /// Internal nodes created by the last call, in creation order.
    pub(crate) created: Vec<u32>,
    pub(crate) root: Option<Ref>,
    pub(crate) stats: Stats,
}

impl Manager {
    /// Allocates a manager for functions of up to `params.max_support` variables.
    pub fn new(params: Params) -> Self {
        assert!(
            params.max_support <= MAX_SUPPORT_LIMIT,
            "Maximum support size should be in the range 0..={}",
            MAX_SUPPORT_LIMIT
        );

        let width = params.max_support;
        let mut nodes = Vec::with_capacity(width + 1);
        nodes.push(Node::new(NodeKind::Const, truth::ones(width), 0));
        for v in 0..width {
            nodes.push(Node::new(
                NodeKind::Var(v as u32),
                truth::var(width, v),
                1 << v,
            ));
        }

        Self {
            table: Table::new(width),
            scratch: Scratch::new(width),
            params,
            nodes,
            n_vars: 0,
            divisor_leaves: Vec::new(),
            divisors: Vec::new(),
            offered: BitSet::new(),
            created: Vec::new(),
            root: None,
            stats: Stats::default(),
        }
    }
}

impl Default for Manager {
    fn default() -> Self {
        Manager::new(Params::default())
    }
}

impl Debug for Manager {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Manager")
            .field("max_support", &self.params.max_support)
            .field("n_vars", &self.n_vars)
            .field("nodes", &self.nodes.len())
            .field("table", &self.table.len())
            .field("root", &self.root)
            .finish()
    }
}

impl Manager {
    pub fn params(&self) -> &Params {
        &self.params
    }
    pub fn max_support(&self) -> usize {
        self.params.max_support
    }
    /// Number of variables of the last problem.
    pub fn num_vars(&self) -> usize {
        self.n_vars
    }
    pub fn table(&self) -> &Table {
        &self.table
    }
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Width (in variables) of every truth table stored in the arena.
    pub(crate) fn width(&self) -> usize {
        self.params.max_support
    }

    /// Empties the canonicalizing table and drops every divisor leaf and internal node.
    ///
    /// Only the constant and the elementary variables survive; references to other nodes become
    /// invalid.
    pub fn clear(&mut self) {
        self.table.clear();
        self.nodes.truncate(self.params.max_support + 1);
        self.divisor_leaves.clear();
        self.divisors.clear();
        self.offered.clear();
        self.created.clear();
        self.root = None;
    }

    /// Total number of nodes in the arena, leaves included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the `i`-th internal node created by the last successful decomposition.
    pub fn func(&self, i: usize) -> Ref {
        assert!(
            i < self.created.len(),
            "Node {} does not exist, the last decomposition created {}",
            i,
            self.created.len()
        );
        Ref::new(self.created[i])
    }

    pub fn node(&self, node: Ref) -> &Node {
        &self.nodes[node.index()]
    }

    /// Root of the last successful decomposition.
    pub fn root(&self) -> Option<Ref> {
        self.root
    }

    /// Number of internal nodes created by the last successful decomposition.
    pub fn node_num(&self) -> usize {
        self.created.len()
    }

    /// Internal nodes created by the last successful decomposition, in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = Ref> + '_ {
        self.created.iter().map(|&id| Ref::new(id))
    }

    /// All internal nodes in the arena, fanins before fanouts.
    pub fn gates(&self) -> impl Iterator<Item = Ref> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.is_gate())
            .map(|(i, _)| Ref::new(i as u32))
    }

    pub fn var_ref(&self, var: usize) -> Ref {
        assert!(var < self.params.max_support, "Variable {} is out of range", var);
        Ref::new(var as u32 + 1)
    }

    /// Leaf of the `i`-th divisor of the last call.
    ///
    /// Equal divisors, in this call or earlier ones, share a leaf.
    pub fn divisor_ref(&self, i: usize) -> Ref {
        Ref::new(self.divisors[i])
    }

    pub fn fanin0(&self, node: Ref) -> Ref {
        self.fanins(node)[0]
    }

    pub fn fanin1(&self, node: Ref) -> Ref {
        self.fanins(node)[1]
    }

    fn fanins(&self, node: Ref) -> [Ref; 2] {
        match self.node(node).fanins() {
            Some(fanins) => fanins,
            None => panic!("Node {} is a leaf and has no fanins", node.regular()),
        }
    }

    pub fn copy(&self, node: Ref) -> Option<usize> {
        self.node(node).copy
    }

    pub fn set_copy(&mut self, node: Ref, value: usize) {
        self.nodes[node.index()].copy = Some(value);
    }

    pub fn clear_copies(&mut self) {
        for node in &mut self.nodes {
            node.copy = None;
        }
    }

    /// Truth table of the function referenced by `node`, polarity applied.
    pub fn truth(&self, node: Ref) -> Vec<u64> {
        let width = self.width();
        let t = &self.node(node).truth;
        if node.is_negated() {
            let mut neg = truth::zeros(width);
            truth::not(&mut neg, t, width);
            neg
        } else {
            t.clone()
        }
    }

    /// Evaluates the network below `node` at `point` by walking its structure.
    pub fn evaluate(&self, node: Ref, point: usize) -> bool {
        let value = match self.node(node).kind {
            NodeKind::Const => true,
            NodeKind::Var(v) => (point >> v) & 1 != 0,
            NodeKind::Divisor(_) => truth::get_bit(&self.node(node).truth, point),
            NodeKind::Gate { op, fanins } => {
                op.eval(self.evaluate(fanins[0], point), self.evaluate(fanins[1], point))
            }
        };
        value ^ node.is_negated()
    }

    /// Renders the network below `node` as a nested expression, e.g. `AND(x0, ~x1)`.
    pub fn to_expr_string(&self, node: Ref) -> String {
        let neg = if node.is_negated() { "~" } else { "" };
        match self.node(node).kind {
            NodeKind::Const => if node.is_negated() { "0" } else { "1" }.to_string(),
            NodeKind::Var(v) => format!("{}x{}", neg, v),
            NodeKind::Divisor(i) => format!("{}d{}", neg, i),
            NodeKind::Gate { op, fanins } => format!(
                "{}{}({}, {})",
                neg,
                op,
                self.to_expr_string(fanins[0]),
                self.to_expr_string(fanins[1])
            ),
        }
    }
}
