//! Budgeted recursive bi-decomposition.
//!
//! [`Manager::decompose`] turns a function and a care mask into an ISF and resolves it
//! recursively. Each sub-problem is handled by the first step that applies:
//!
//! 1. an empty on-set or off-set resolves to a constant;
//! 2. after support minimization, a single-variable support resolves to that variable;
//! 3. a node in the canonicalizing table realizing the ISF (in either polarity) is reused;
//! 4. a divisor (or its complement) realizing the ISF is used as a leaf;
//! 5. the best strong split `op(A, B)` over the configured operators is chosen, and both
//!    components are resolved recursively;
//! 6. otherwise the ISF is expanded around one variable, `x ∧ f1 ∨ ¬x ∧ f0`.
//!
//! Steps 5 and 6 strictly shrink the support of every sub-problem, so the recursion depth is
//! bounded by the number of variables. New nodes are only ever created by [`Manager::mk_gate`],
//! which checks the node budget before allocating.

use log::{debug, info};

use crate::error::DecomposeError;
use crate::gate::GateType;
use crate::isf::{full_mask, Isf};
use crate::manager::{Manager, Stats};
use crate::node::{Node, NodeKind};
use crate::reference::Ref;
use crate::split::{self, Split};
use crate::truth;

/// Number of internal nodes a single decomposition may still create.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Budget {
    limit: usize,
    used: usize,
}

impl Budget {
    pub fn new(limit: usize) -> Self {
        Self { limit, used: 0 }
    }

    pub fn used(&self) -> usize {
        self.used
    }

    pub fn remaining(&self) -> usize {
        self.limit - self.used
    }

    pub fn is_exhausted(&self) -> bool {
        self.used >= self.limit
    }

    /// Reserves one node, failing if none is left.
    pub fn spend(&mut self) -> Result<(), DecomposeError> {
        if self.is_exhausted() {
            return Err(DecomposeError::BudgetExhausted { budget: self.limit });
        }
        self.used += 1;
        Ok(())
    }
}

impl Manager {
    /// Synthesizes a network realizing `func` wherever `care` is 1.
    ///
    /// `func`, `care` and every divisor are truth tables over `n_vars` variables. At most
    /// `node_budget` new internal nodes are created; nodes already in the table are reused for
    /// free. On success the root is returned (also available as [`Manager::root`]) and the new
    /// nodes are listed by [`Manager::nodes`].
    ///
    /// On budget exhaustion no result is kept, but nodes built so far stay in the table.
    ///
    /// # Panics
    ///
    /// Panics if `n_vars` exceeds the manager's maximum support size.
    ///
    /// # Examples
    ///
    /// ```
    /// use bidec_rs::manager::Manager;
    /// use bidec_rs::params::Params;
    ///
    /// let mut mgr = Manager::new(Params::default().with_max_support(4));
    /// // AND(x0, x1) over two variables, all points cared for
    /// let root = mgr
    ///     .decompose(&[0b1000], &[0b1111], 2, &[] as &[Vec<u64>], 10)
    ///     .unwrap();
    /// assert_eq!(mgr.node_num(), 1);
    /// assert_eq!(mgr.to_expr_string(root), "AND(x0, x1)");
    /// ```
    pub fn decompose<D>(
        &mut self,
        func: &[u64],
        care: &[u64],
        n_vars: usize,
        divisors: &[D],
        node_budget: usize,
    ) -> Result<Ref, DecomposeError>
    where
        D: AsRef<[u64]>,
    {
        assert!(
            n_vars <= self.params.max_support,
            "Number of variables ({}) exceeds the maximum support size ({})",
            n_vars,
            self.params.max_support
        );
        let words = truth::word_num(n_vars);
        assert!(
            func.len() >= words && care.len() >= words,
            "Truth tables over {} variables need {} words",
            n_vars,
            words
        );

        let width = self.width();
        self.n_vars = n_vars;
        self.root = None;
        self.created.clear();
        self.stats = Stats::default();

        self.divisors.clear();
        self.offered.clear();
        for (i, d) in divisors.iter().enumerate() {
            let d = d.as_ref();
            assert!(d.len() >= words, "Divisor {} needs {} words", i, words);
            let id = self.divisor_leaf(truth::stretch(d, n_vars, width));
            self.divisors.push(id);
        }

        let func = truth::stretch(func, n_vars, width);
        let care = truth::stretch(care, n_vars, width);
        let mut isf = Isf::from_care(&func, &care, width);
        isf.support = full_mask(n_vars);

        debug!(
            "decompose(n_vars = {}, divisors = {}, budget = {})",
            n_vars,
            divisors.len(),
            node_budget
        );

        let mut budget = Budget::new(node_budget);
        match self.decompose_isf(isf, &mut budget) {
            Ok(root) => {
                self.root = Some(root);
                if self.params.verbose {
                    info!(
                        "decompose: root = {}, new nodes = {}, table = {}, stats = {:?}",
                        root,
                        self.created.len(),
                        self.table.len(),
                        self.stats
                    );
                }
                Ok(root)
            }
            Err(e) => {
                if self.params.verbose {
                    info!(
                        "decompose: failed after {} nodes ({}), stats = {:?}",
                        budget.used(),
                        e,
                        self.stats
                    );
                }
                self.created.clear();
                Err(e)
            }
        }
    }

    fn decompose_isf(&mut self, mut isf: Isf, budget: &mut Budget) -> Result<Ref, DecomposeError> {
        let width = self.width();
        self.stats.calls += 1;

        if isf.is_trivial_zero(width) {
            return Ok(Ref::ZERO);
        }
        if isf.is_trivial_one(width) {
            return Ok(Ref::ONE);
        }

        isf.minimize_support(width, &mut self.scratch);
        if self.params.very_verbose {
            debug!("decompose_isf: {}", isf);
        }

        if isf.support_size() == 1 {
            self.stats.var_hits += 1;
            return Ok(self.var_leaf(&isf));
        }

        if let Some(r) = self.table.lookup(&mut isf, &self.nodes, &self.offered, width) {
            self.stats.table_hits += 1;
            return Ok(r);
        }

        if let Some(r) = self.find_divisor(&isf) {
            self.stats.divisor_hits += 1;
            return Ok(r);
        }

        // Every realization depends on the whole minimized support, and no usable node in the
        // table or leaf realizes it, so at least one new node is needed.
        if budget.is_exhausted() {
            return Err(DecomposeError::BudgetExhausted {
                budget: budget.limit,
            });
        }

        let split = split::best(&isf, &self.params.operators, width);

        let r = match split {
            Some(split) => self.apply_split(&isf, &split, budget)?,
            None => self.shannon(&isf, budget)?,
        };
        debug_assert!(isf.is_admissible(&self.truth(r), width));
        Ok(r)
    }

    /// Returns the leaf of divisor `t`, creating it if no equal divisor was seen since the last
    /// clear, and marks it as offered.
    fn divisor_leaf(&mut self, t: Vec<u64>) -> u32 {
        let width = self.width();
        let found = self
            .divisor_leaves
            .iter()
            .position(|&id| truth::is_equal(&self.nodes[id as usize].truth, &t, width));
        let slot = match found {
            Some(slot) => slot,
            None => {
                let slot = self.divisor_leaves.len();
                let id = self.nodes.len() as u32;
                let support = truth::support(&t, width);
                let mut node = Node::new(NodeKind::Divisor(slot as u32), t, support);
                node.divisors.insert(slot);
                self.nodes.push(node);
                self.divisor_leaves.push(id);
                debug!("divisor_leaf: d{} is @{}", slot, id);
                slot
            }
        };
        self.offered.insert(slot);
        self.divisor_leaves[slot]
    }

    /// Elementary variable realizing a single-variable ISF.
    fn var_leaf(&self, isf: &Isf) -> Ref {
        let width = self.width();
        let v = isf.support.trailing_zeros() as usize;
        let x = self.var_ref(v);
        let t = &self.node(x).truth;
        if isf.is_admissible(t, width) {
            return x;
        }
        assert!(
            isf.is_admissible_not(t, width),
            "Single-variable ISF is realized by neither x{} nor its complement",
            v
        );
        !x
    }

    fn find_divisor(&self, isf: &Isf) -> Option<Ref> {
        let width = self.width();
        self.divisors.iter().find_map(|&id| {
            let t = &self.nodes[id as usize].truth;
            if isf.is_admissible(t, width) {
                Some(Ref::new(id))
            } else if isf.is_admissible_not(t, width) {
                Some(-Ref::new(id))
            } else {
                None
            }
        })
    }

    fn apply_split(&mut self, isf: &Isf, split: &Split, budget: &mut Budget) -> Result<Ref, DecomposeError> {
        let width = self.width();
        debug!(
            "apply_split: {} with {:#b} | {:#b} over {:#b}",
            split.op, split.only_a, split.only_b, isf.support
        );

        match split.op {
            GateType::Or => {
                self.stats.or_splits += 1;
                let (a, b) = self.or_components(isf, split, budget)?;
                self.mk_gate(GateType::Or, a, b, budget)
            }
            GateType::And => {
                self.stats.and_splits += 1;
                let mut neg = isf.clone();
                neg.not();
                let (a, b) = self.or_components(&neg, split, budget)?;
                self.mk_gate(GateType::And, !a, !b, budget)
            }
            GateType::Xor => {
                self.stats.xor_splits += 1;
                let (a, b) = split::xor_components(isf, split, width);
                let a = self.decompose_isf(a, budget)?;
                let b = self.decompose_isf(b, budget)?;
                self.mk_gate(GateType::Xor, a, b, budget)
            }
        }
    }

    /// Resolves both components of an OR split; the second one is derived from the realization
    /// chosen for the first.
    fn or_components(&mut self, isf: &Isf, split: &Split, budget: &mut Budget) -> Result<(Ref, Ref), DecomposeError> {
        let width = self.width();
        let a = split::or_component_a(isf, split, width);
        let ra = self.decompose_isf(a, budget)?;
        let fa = self.truth(ra);
        let b = split::or_component_b(isf, split, &fa, width);
        let rb = self.decompose_isf(b, budget)?;
        Ok((ra, rb))
    }

    /// Expands the ISF around its lowest support variable.
    fn shannon(&mut self, isf: &Isf, budget: &mut Budget) -> Result<Ref, DecomposeError> {
        let width = self.width();
        self.stats.shannon += 1;
        let v = isf.support.trailing_zeros() as usize;
        debug!("shannon: x{} over {:#b}", v, isf.support);

        let x = self.var_ref(v);
        let f1 = self.decompose_isf(isf.cofactor(v, true, width), budget)?;
        let f0 = self.decompose_isf(isf.cofactor(v, false, width), budget)?;
        let hi = self.mk_gate(GateType::And, x, f1, budget)?;
        let lo = self.mk_gate(GateType::And, !x, f0, budget)?;
        self.mk_gate(GateType::Or, hi, lo, budget)
    }

    /// Returns a reference to `op(a, b)`, creating a node only when no existing one realizes it.
    ///
    /// Constant and identical/complementary fanins are simplified away, XOR fanin polarities are
    /// moved to the output, and the table is consulted for the exact function before one unit of
    /// budget is spent.
    pub(crate) fn mk_gate(&mut self, op: GateType, a: Ref, b: Ref, budget: &mut Budget) -> Result<Ref, DecomposeError> {
        debug!("mk_gate({}, {}, {})", op, a, b);

        if let Some(r) = simplify(op, a, b) {
            debug!("mk_gate: simplified to {}", r);
            return Ok(r);
        }

        // XOR(~a, b) = ~XOR(a, b)
        let (a, b, out_neg) = match op {
            GateType::Xor => (a.regular(), b.regular(), a.is_negated() ^ b.is_negated()),
            _ => (a, b, false),
        };

        let width = self.width();
        let mut t = truth::zeros(width);
        op.apply(&mut t, &self.truth(a), &self.truth(b), width);

        let mut isf = Isf::exact(&t, width);
        match isf.support_size() {
            0 => {
                let r = if truth::is_const1(&t, width) { Ref::ONE } else { Ref::ZERO };
                return Ok(r.not_cond(out_neg));
            }
            1 => return Ok(self.var_leaf(&isf).not_cond(out_neg)),
            _ => {}
        }
        if let Some(r) = self.table.lookup(&mut isf, &self.nodes, &self.offered, width) {
            debug!("mk_gate: found {} in table", r);
            return Ok(r.not_cond(out_neg));
        }

        budget.spend()?;

        let id = self.nodes.len() as u32;
        let support = isf.support;
        let stale = self.table.find_exact(&t, support, &self.nodes, width);
        let mut node = Node::new(NodeKind::Gate { op, fanins: [a, b] }, t, support);
        node.divisors = self.node(a).divisors.clone();
        node.divisors.union_with(&self.node(b).divisors);
        self.nodes.push(node);
        match stale {
            Some(old) => self.table.replace(support, old, id),
            None => self.table.add(id, support),
        }
        self.created.push(id);
        self.stats.nodes += 1;

        Ok(Ref::new(id).not_cond(out_neg))
    }
}

/// Constant folding for fanins that are constants or equal up to complementation.
fn simplify(op: GateType, a: Ref, b: Ref) -> Option<Ref> {
    match op {
        GateType::And => {
            if a == Ref::ZERO || b == Ref::ZERO || a == !b {
                Some(Ref::ZERO)
            } else if a == Ref::ONE || a == b {
                Some(b)
            } else if b == Ref::ONE {
                Some(a)
            } else {
                None
            }
        }
        GateType::Or => {
            if a == Ref::ONE || b == Ref::ONE || a == !b {
                Some(Ref::ONE)
            } else if a == Ref::ZERO || a == b {
                Some(b)
            } else if b == Ref::ZERO {
                Some(a)
            } else {
                None
            }
        }
        GateType::Xor => {
            if a == b {
                Some(Ref::ZERO)
            } else if a == !b {
                Some(Ref::ONE)
            } else if a.is_const() {
                Some(b.not_cond(a == Ref::ONE))
            } else if b.is_const() {
                Some(a.not_cond(b == Ref::ONE))
            } else {
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::params::Params;

    const NO_DIVISORS: &[Vec<u64>] = &[];

    fn manager(max_support: usize) -> Manager {
        Manager::new(Params::default().with_max_support(max_support))
    }

    /// Checks the network against `func` at every care point.
    fn assert_sound(mgr: &Manager, root: Ref, func: &[u64], care: &[u64], n_vars: usize) {
        let func = truth::stretch(func, n_vars, mgr.max_support());
        let care = truth::stretch(care, n_vars, mgr.max_support());
        for p in 0..truth::point_num(n_vars) {
            if truth::get_bit(&care, p) {
                assert_eq!(
                    mgr.evaluate(root, p),
                    truth::get_bit(&func, p),
                    "point {} of {}",
                    p,
                    mgr.to_expr_string(root)
                );
            }
        }
    }

    #[test]
    fn test_budget() {
        let mut budget = Budget::new(2);
        assert!(budget.spend().is_ok());
        assert_eq!(budget.remaining(), 1);
        assert!(budget.spend().is_ok());
        assert!(budget.is_exhausted());
        assert_eq!(
            budget.spend(),
            Err(DecomposeError::BudgetExhausted { budget: 2 })
        );
        assert_eq!(budget.used(), 2);
    }

    #[test]
    fn test_simplify() {
        let x = Ref::new(3);
        let y = Ref::new(4);
        assert_eq!(simplify(GateType::And, x, Ref::ZERO), Some(Ref::ZERO));
        assert_eq!(simplify(GateType::And, Ref::ONE, x), Some(x));
        assert_eq!(simplify(GateType::And, x, !x), Some(Ref::ZERO));
        assert_eq!(simplify(GateType::Or, x, !x), Some(Ref::ONE));
        assert_eq!(simplify(GateType::Or, x, x), Some(x));
        assert_eq!(simplify(GateType::Xor, Ref::ONE, x), Some(!x));
        assert_eq!(simplify(GateType::Xor, x, Ref::ZERO), Some(x));
        assert_eq!(simplify(GateType::Xor, x, !x), Some(Ref::ONE));
        assert_eq!(simplify(GateType::And, x, y), None);
    }

    #[test]
    fn test_and2() {
        let mut mgr = manager(4);
        let root = mgr.decompose(&[0b1000], &[0b1111], 2, NO_DIVISORS, 10).unwrap();
        assert_eq!(mgr.node_num(), 1);
        assert!(!root.is_negated());
        assert_eq!(mgr.node(root).op(), Some(GateType::And));
        assert_eq!(mgr.fanin0(root), mgr.var_ref(0));
        assert_eq!(mgr.fanin1(root), mgr.var_ref(1));
        assert_eq!(mgr.nodes().last(), Some(root));
    }

    #[test]
    fn test_xor2() {
        let mut mgr = manager(4);
        let root = mgr.decompose(&[0b0110], &[0b1111], 2, NO_DIVISORS, 10).unwrap();
        assert_eq!(mgr.node_num(), 1);
        assert_eq!(mgr.node(root).op(), Some(GateType::Xor));
        assert_sound(&mgr, root, &[0b0110], &[0b1111], 2);
    }

    #[test]
    fn test_nand_uses_output_complement() {
        let mut mgr = manager(4);
        let root = mgr.decompose(&[0b0111], &[0b1111], 2, NO_DIVISORS, 10).unwrap();
        assert_eq!(mgr.node_num(), 1);
        assert_sound(&mgr, root, &[0b0111], &[0b1111], 2);
    }

    #[test]
    fn test_empty_care_is_constant() {
        let mut mgr = manager(4);
        let root = mgr.decompose(&[0b1011], &[0], 2, NO_DIVISORS, 10).unwrap();
        assert_eq!(root, Ref::ZERO);
        assert_eq!(mgr.node_num(), 0);
    }

    #[test]
    fn test_constant_functions() {
        let mut mgr = manager(4);
        assert_eq!(mgr.decompose(&[0xFFFF], &[0xFFFF], 4, NO_DIVISORS, 1), Ok(Ref::ONE));
        assert_eq!(mgr.decompose(&[0], &[0xFFFF], 4, NO_DIVISORS, 1), Ok(Ref::ZERO));
    }

    #[test]
    fn test_single_variable() {
        let mut mgr = manager(4);
        // ~x2 over 3 variables
        let root = mgr.decompose(&[0x0F], &[0xFF], 3, NO_DIVISORS, 0).unwrap();
        assert_eq!(root, !mgr.var_ref(2));
        assert_eq!(mgr.node_num(), 0);
    }

    #[test]
    fn test_majority_falls_back_to_shannon() {
        let mut mgr = manager(3);
        let maj = [0b1110_1000];
        let root = mgr.decompose(&maj, &[0xFF], 3, NO_DIVISORS, 10).unwrap();
        assert_eq!(mgr.stats().shannon, 1);
        assert_sound(&mgr, root, &maj, &[0xFF], 3);
    }

    #[test]
    fn test_dont_cares_reduce_network() {
        let mut mgr = manager(3);
        // x0 ∧ x1 ∧ x2, but only points with x2 = 1 are cared for
        let root = mgr.decompose(&[0b1000_0000], &[0b1111_0000], 3, NO_DIVISORS, 10).unwrap();
        assert_eq!(mgr.node_num(), 1);
        assert_eq!(mgr.to_expr_string(root), "AND(x0, x1)");
    }

    #[test]
    fn test_divisor_leaf() {
        let mut mgr = manager(4);
        // f = x0 ⊕ x1 ⊕ x2, with the divisor ~(x0 ⊕ x1 ⊕ x2) on offer
        let f = [0b1001_0110];
        let divisors = vec![vec![!0b1001_0110u64 & 0xFF]];
        let root = mgr.decompose(&f, &[0xFF], 3, &divisors, 10).unwrap();
        assert_eq!(root, !mgr.divisor_ref(0));
        assert_eq!(mgr.node_num(), 0);
        assert_eq!(mgr.stats().divisor_hits, 1);
        assert_sound(&mgr, root, &f, &[0xFF], 3);
    }

    #[test]
    fn test_budget_exhaustion() {
        let mut mgr = manager(4);
        // x0 ⊕ x1 ⊕ x2 ⊕ x3 needs three nodes
        let f = [0x6996];
        let res = mgr.decompose(&f, &[0xFFFF], 4, NO_DIVISORS, 2);
        assert_eq!(res, Err(DecomposeError::BudgetExhausted { budget: 2 }));
        assert!(mgr.root().is_none());
        assert_eq!(mgr.node_num(), 0);

        let root = mgr.decompose(&f, &[0xFFFF], 4, NO_DIVISORS, 3).unwrap();
        assert_sound(&mgr, root, &f, &[0xFFFF], 4);
    }

    #[test]
    fn test_second_call_reuses_table() {
        let mut mgr = manager(4);
        let f = [0b1110_1000];
        let first = mgr.decompose(&f, &[0xFF], 3, NO_DIVISORS, 10).unwrap();
        assert!(mgr.node_num() > 0);
        let second = mgr.decompose(&f, &[0xFF], 3, NO_DIVISORS, 10).unwrap();
        assert_eq!(mgr.node_num(), 0);
        assert_eq!(first, second);
    }

    #[test]
    fn test_cached_target_needs_no_budget() {
        let mut mgr = manager(3);
        let maj = [0b1110_1000];
        mgr.decompose(&maj, &[0xFF], 3, NO_DIVISORS, 10).unwrap();
        let root = mgr.root();

        // Points 0 and 7 are don't-cares, the support stays {x0, x1, x2}
        let again = mgr.decompose(&maj, &[0b0111_1110], 3, NO_DIVISORS, 0).unwrap();
        assert_eq!(Some(again), root);
        assert_eq!(mgr.node_num(), 0);
    }

    #[test]
    fn test_complement_reuses_node() {
        let mut mgr = manager(4);
        let and = mgr.decompose(&[0b1000], &[0b1111], 2, NO_DIVISORS, 10).unwrap();
        let nand = mgr.decompose(&[0b0111], &[0b1111], 2, NO_DIVISORS, 10).unwrap();
        assert_eq!(mgr.node_num(), 0);
        assert_eq!(nand, !and);
    }

    #[test]
    fn test_clear_forgets_nodes() {
        let mut mgr = manager(4);
        mgr.decompose(&[0b1000], &[0b1111], 2, NO_DIVISORS, 10).unwrap();
        mgr.clear();
        assert!(mgr.table().is_empty());
        assert_eq!(mgr.len(), 5);
        assert!(mgr.root().is_none());
        mgr.decompose(&[0b1000], &[0b1111], 2, NO_DIVISORS, 10).unwrap();
        assert_eq!(mgr.node_num(), 1);
        assert_eq!(mgr.func(0), mgr.root().unwrap());
    }

    #[test]
    fn test_equal_divisors_share_a_leaf() {
        let mut mgr = manager(4);
        let d = vec![0x9696u64];
        let f = [0x9600u64];
        mgr.decompose(&f, &[0xFFFF], 4, &[d.clone()], 10).unwrap();
        let leaf = mgr.divisor_ref(0);
        let len = mgr.len();

        for _ in 0..100 {
            mgr.decompose(&f, &[0xFFFF], 4, &[d.clone(), d.clone()], 10).unwrap();
            assert_eq!(mgr.divisor_ref(0), leaf);
            assert_eq!(mgr.divisor_ref(1), leaf);
        }
        assert_eq!(mgr.len(), len);
    }

    #[test]
    fn test_table_ignores_nodes_over_withdrawn_divisors() {
        let mut mgr = manager(4);
        // f = (x0 ⊕ x1 ⊕ x2) ∧ x3
        let f = [0x9600u64];
        let root = mgr.decompose(&f, &[0xFFFF], 4, &[vec![0x9696u64]], 10).unwrap();
        assert_eq!(mgr.to_expr_string(root), "AND(d0, x3)");

        let root = mgr.decompose(&f, &[0xFFFF], 4, NO_DIVISORS, 10).unwrap();
        assert!(!mgr.to_expr_string(root).contains('d'));
        assert!(mgr.node(root).divisors.is_empty());
        assert_sound(&mgr, root, &f, &[0xFFFF], 4);

        // The divisor-free network replaced the old one for the same function
        assert_eq!(mgr.table().iter().filter(|&id| mgr.node(Ref::new(id)).support == 0b1111).count(), 1);
    }

    #[test]
    fn test_wide_function() {
        let mut mgr = manager(8);
        // (x0 ∧ x7) ∨ (x3 ⊕ x6) over 8 variables
        let n = 8;
        let mut f = truth::zeros(n);
        for p in 0..truth::point_num(n) {
            let b = |v: usize| (p >> v) & 1 != 0;
            if (b(0) && b(7)) || (b(3) ^ b(6)) {
                truth::set_bit(&mut f, p);
            }
        }
        let care = truth::ones(n);
        let root = mgr.decompose(&f, &care, n, NO_DIVISORS, 10).unwrap();
        assert_eq!(mgr.node_num(), 3);
        assert_sound(&mgr, root, &f, &care, n);
    }

    #[test]
    #[should_panic(expected = "exceeds the maximum support size")]
    fn test_too_many_variables_panics() {
        let mut mgr = manager(3);
        let _ = mgr.decompose(&[0], &[0], 4, NO_DIVISORS, 10);
    }
}
