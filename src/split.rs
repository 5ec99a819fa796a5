//! Feasibility search for strong bi-decomposition.
//!
//! A split of an ISF with support `S` assigns every variable of `S` to one of three groups: `XA`
//! (only the first component depends on it), `XB` (only the second one does) and the common
//! remainder `XC`. A split is *strong* when both `XA` and `XB` are nonempty, so that each component
//! has strictly smaller support than the ISF itself.
//!
//! - **OR**: `f = A(XA, XC) ∨ B(XB, XC)` exists iff `on ∧ ∃XA off ∧ ∃XB off = 0`.
//! - **AND**: `f = A ∧ B` iff `¬f = ¬A ∨ ¬B`, i.e. the OR test on the complemented ISF.
//! - **XOR**: `f = A(XA, XC) ⊕ B(XB, XC)` exists iff the parity constraints
//!   `A(a, c) ⊕ B(b, c) = f(a, b, c)` over all care points have no odd cycle.
//!
//! Seeds are all pairs of support variables in ascending order; each feasible seed is grown greedily
//! by moving remaining common variables to `XA`, or failing that to `XB`. Splits are ranked by the
//! size of the smaller exclusive set, then by the total number of exclusive variables.

use log::debug;

use crate::gate::GateType;
use crate::isf::{full_mask, Isf};
use crate::truth;
use crate::utils::ParityUnionFind;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Split {
    pub op: GateType,
    /// Variables only the first component depends on.
    pub only_a: u32,
    /// Variables only the second component depends on.
    pub only_b: u32,
}

impl Split {
    pub fn support_a(&self, support: u32) -> u32 {
        support & !self.only_b
    }

    pub fn support_b(&self, support: u32) -> u32 {
        support & !self.only_a
    }

    /// Balanced splits with many exclusive variables first.
    fn score(&self) -> (u32, u32) {
        let a = self.only_a.count_ones();
        let b = self.only_b.count_ones();
        (a.min(b), a + b)
    }
}

/// Searches every operator of `operators` and keeps the best split. Earlier operators win ties.
pub fn best(isf: &Isf, operators: &[GateType], n_vars: usize) -> Option<Split> {
    operators
        .iter()
        .filter_map(|&op| find(isf, op, n_vars))
        .fold(None, |best, split| match best {
            Some(b) if b.score() >= split.score() => Some(b),
            _ => Some(split),
        })
}

/// Searches for a strong split of `isf` under `op`.
pub fn find(isf: &Isf, op: GateType, n_vars: usize) -> Option<Split> {
    let vars: Vec<usize> = isf.support_vars().collect();
    if vars.len() < 2 {
        return None;
    }

    let checker = match op {
        GateType::Or => Checker::Or {
            on: &isf.on,
            off: &isf.off,
        },
        GateType::And => Checker::Or {
            on: &isf.off,
            off: &isf.on,
        },
        GateType::Xor => Checker::Xor(XorProblem::new(isf)),
    };

    let mut best: Option<Split> = None;
    for (i, &x) in vars.iter().enumerate() {
        for &y in &vars[i + 1..] {
            let (mut a, mut b) = (1u32 << x, 1u32 << y);
            if !checker.feasible(a, b, n_vars) {
                continue;
            }
            for &z in &vars {
                let bit = 1u32 << z;
                if (a | b) & bit != 0 {
                    continue;
                }
                if checker.feasible(a | bit, b, n_vars) {
                    a |= bit;
                } else if checker.feasible(a, b | bit, n_vars) {
                    b |= bit;
                }
            }

            let candidate = Split {
                op,
                only_a: a,
                only_b: b,
            };
            debug!("split: feasible {} {:#b} | {:#b}", op, a, b);
            if best.map_or(true, |s| candidate.score() > s.score()) {
                best = Some(candidate);
            }
            if a | b == isf.support {
                return best;
            }
        }
    }
    best
}

enum Checker<'a> {
    Or { on: &'a [u64], off: &'a [u64] },
    Xor(XorProblem),
}

impl Checker<'_> {
    fn feasible(&self, only_a: u32, only_b: u32, n_vars: usize) -> bool {
        match self {
            Checker::Or { on, off } => or_feasible(on, off, only_a, only_b, n_vars),
            Checker::Xor(problem) => problem.solve(only_a, only_b).is_some(),
        }
    }
}

fn or_feasible(on: &[u64], off: &[u64], only_a: u32, only_b: u32, n_vars: usize) -> bool {
    let mut ea = off[..truth::word_num(n_vars)].to_vec();
    let mut eb = ea.clone();
    truth::exist_set(&mut ea, n_vars, only_a);
    truth::exist_set(&mut eb, n_vars, only_b);
    on.iter()
        .zip(&ea)
        .zip(&eb)
        .all(|((o, a), b)| o & a & b == 0)
}

/// First component of an OR split: `(∃XB(on ∧ ∃XA off), ∃XB off)`.
///
/// For AND splits pass the complemented ISF.
pub fn or_component_a(isf: &Isf, split: &Split, n_vars: usize) -> Isf {
    let mut ea = isf.off.clone();
    truth::exist_set(&mut ea, n_vars, split.only_a);
    let mut on = truth::zeros(n_vars);
    truth::and(&mut on, &isf.on, &ea, n_vars);
    truth::exist_set(&mut on, n_vars, split.only_b);

    let mut off = isf.off.clone();
    truth::exist_set(&mut off, n_vars, split.only_b);

    Isf::new(on, off, split.support_a(isf.support), n_vars)
}

/// Second component of an OR split, given the realization `fa` of the first one:
/// `(∃XA(on ∧ ¬fa), ∃XA off)`.
pub fn or_component_b(isf: &Isf, split: &Split, fa: &[u64], n_vars: usize) -> Isf {
    let mut on = truth::zeros(n_vars);
    truth::sharp(&mut on, &isf.on, fa, n_vars);
    truth::exist_set(&mut on, n_vars, split.only_a);

    let mut off = isf.off.clone();
    truth::exist_set(&mut off, n_vars, split.only_a);

    Isf::new(on, off, split.support_b(isf.support), n_vars)
}

/// Both components of a feasible XOR split.
///
/// Projections touched by some care point carry their solved value, the others are don't-cares.
pub fn xor_components(isf: &Isf, split: &Split, n_vars: usize) -> (Isf, Isf) {
    let problem = XorProblem::new(isf);
    let (mut uf, touched) = problem
        .solve(split.only_a, split.only_b)
        .expect("XOR split must be feasible");
    let ca = problem.compress(split.only_a);
    let cb = problem.compress(split.only_b);
    let size = problem.size();

    let mut a_on = truth::zeros(n_vars);
    let mut a_off = truth::zeros(n_vars);
    let mut b_on = truth::zeros(n_vars);
    let mut b_off = truth::zeros(n_vars);
    for k in 0..size {
        let p = problem.expand(k);
        let u = k & !cb;
        let v = size + (k & !ca);
        if touched[u] {
            truth::set_bit(if uf.value(u) { &mut a_on } else { &mut a_off }, p);
        }
        if touched[v] {
            truth::set_bit(if uf.value(v) { &mut b_on } else { &mut b_off }, p);
        }
    }

    // The points above only cover the support; replicate over the other variables.
    let rest = full_mask(n_vars) & !isf.support;
    let replicate = |mut t: Vec<u64>| {
        truth::exist_set(&mut t, n_vars, rest);
        truth::stretch(&t, n_vars, n_vars)
    };

    (
        Isf::new(
            replicate(a_on),
            replicate(a_off),
            split.support_a(isf.support),
            n_vars,
        ),
        Isf::new(
            replicate(b_on),
            replicate(b_off),
            split.support_b(isf.support),
            n_vars,
        ),
    )
}

/// Care points of an ISF in the sub-cube spanned by its support.
struct XorProblem {
    vars: Vec<usize>,
    points: Vec<(usize, bool)>,
}

impl XorProblem {
    fn new(isf: &Isf) -> Self {
        let vars: Vec<usize> = isf.support_vars().collect();
        let mut problem = Self {
            vars,
            points: Vec::new(),
        };
        for k in 0..problem.size() {
            let p = problem.expand(k);
            if truth::get_bit(&isf.on, p) {
                problem.points.push((k, true));
            } else if truth::get_bit(&isf.off, p) {
                problem.points.push((k, false));
            }
        }
        problem
    }

    fn size(&self) -> usize {
        1 << self.vars.len()
    }

    /// Maps a sub-cube index to a point of the full table (other variables at 0).
    fn expand(&self, k: usize) -> usize {
        self.vars
            .iter()
            .enumerate()
            .fold(0, |p, (i, &v)| p | (((k >> i) & 1) << v))
    }

    /// Maps a variable mask to the sub-cube bit positions.
    fn compress(&self, mask: u32) -> usize {
        self.vars
            .iter()
            .enumerate()
            .filter(|&(_, &v)| mask & (1 << v) != 0)
            .fold(0, |acc, (i, _)| acc | (1 << i))
    }

    /// Solves the parity constraints. Elements `0..size` are the projections of the first
    /// component, `size..2*size` those of the second one.
    fn solve(&self, only_a: u32, only_b: u32) -> Option<(ParityUnionFind, Vec<bool>)> {
        let ca = self.compress(only_a);
        let cb = self.compress(only_b);
        let size = self.size();
        let mut uf = ParityUnionFind::new(2 * size);
        let mut touched = vec![false; 2 * size];
        for &(k, value) in &self.points {
            let u = k & !cb;
            let v = size + (k & !ca);
            if !uf.union(u, v, value) {
                return None;
            }
            touched[u] = true;
            touched[v] = true;
        }
        Some((uf, touched))
    }
}
