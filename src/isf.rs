//! Incompletely specified functions.
//!
//! An [`Isf`] is a pair of disjoint truth tables, the *on-set* (points where the function must be 1)
//! and the *off-set* (points where it must be 0), together with a bitmask of the variables the
//! function is allowed to depend on. Points outside `on ∪ off` are don't-cares.

use std::fmt::{Display, Formatter};

use crate::truth;

/// Scratch buffers reused by [`Isf::minimize_support`].
///
/// Contents are only meaningful during a single call; every ISF operation may overwrite them.
#[derive(Debug, Clone)]
pub struct Scratch {
    on: Vec<u64>,
    off: Vec<u64>,
}

impl Scratch {
    pub fn new(n_vars: usize) -> Self {
        Self {
            on: truth::zeros(n_vars),
            off: truth::zeros(n_vars),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Isf {
    pub on: Vec<u64>,
    pub off: Vec<u64>,
    pub support: u32,
}

impl Isf {
    /// Creates an ISF, asserting that `on` and `off` are disjoint.
    pub fn new(on: Vec<u64>, off: Vec<u64>, support: u32, n_vars: usize) -> Self {
        let isf = Self { on, off, support };
        isf.check(n_vars);
        isf
    }

    /// Builds the ISF of `func` under the `care` mask: `on = func ∧ care`, `off = ¬func ∧ care`.
    ///
    /// The initial support covers all `n_vars` variables.
    pub fn from_care(func: &[u64], care: &[u64], n_vars: usize) -> Self {
        let mut on = truth::zeros(n_vars);
        let mut off = truth::zeros(n_vars);
        truth::and(&mut on, func, care, n_vars);
        truth::sharp(&mut off, care, func, n_vars);
        Self {
            on,
            off,
            support: full_mask(n_vars),
        }
    }

    /// Builds the completely specified ISF of `f`, whose only admissible realization is `f` itself.
    pub fn exact(f: &[u64], n_vars: usize) -> Self {
        let mut off = truth::zeros(n_vars);
        truth::not(&mut off, f, n_vars);
        Self {
            on: f[..truth::word_num(n_vars)].to_vec(),
            off,
            support: truth::support(f, n_vars),
        }
    }

    /// Asserts the ISF invariant `on ∩ off = ∅`.
    pub fn check(&self, n_vars: usize) {
        assert!(
            truth::is_disjoint(&self.on, &self.off, n_vars),
            "ISF on-set and off-set overlap"
        );
    }

    /// Swaps the on-set and the off-set.
    pub fn not(&mut self) {
        std::mem::swap(&mut self.on, &mut self.off);
    }

    /// Number of variables currently in the support.
    pub fn support_size(&self) -> u32 {
        self.support.count_ones()
    }

    /// Iterates over the variables of the support in ascending order.
    pub fn support_vars(&self) -> impl Iterator<Item = usize> + '_ {
        (0..32).filter(move |&v| self.support & (1 << v) != 0)
    }

    /// Returns `true` if the constant 0 is admissible (the on-set is empty).
    pub fn is_trivial_zero(&self, n_vars: usize) -> bool {
        truth::is_const0(&self.on, n_vars)
    }

    /// Returns `true` if the constant 1 is admissible (the off-set is empty).
    pub fn is_trivial_one(&self, n_vars: usize) -> bool {
        truth::is_const0(&self.off, n_vars)
    }

    /// Returns `true` if `f` realizes the ISF: `on ⇒ f` and `f ∧ off = ∅`.
    pub fn is_admissible(&self, f: &[u64], n_vars: usize) -> bool {
        truth::is_imply(&self.on, f, n_vars) && truth::is_disjoint(f, &self.off, n_vars)
    }

    /// Returns `true` if `¬f` realizes the ISF.
    pub fn is_admissible_not(&self, f: &[u64], n_vars: usize) -> bool {
        truth::is_disjoint(&self.on, f, n_vars) && truth::is_imply(&self.off, f, n_vars)
    }

    /// Removes every variable the ISF can be made independent of.
    ///
    /// A variable is removable iff quantifying it out of both sets keeps them disjoint. Each
    /// removal is committed before the next variable is tested.
    pub fn minimize_support(&mut self, n_vars: usize, scratch: &mut Scratch) {
        for v in 0..n_vars {
            if self.support & (1 << v) == 0 {
                continue;
            }
            truth::exist(&mut scratch.on, &self.on, n_vars, v);
            truth::exist(&mut scratch.off, &self.off, n_vars, v);
            if truth::is_disjoint(&scratch.on, &scratch.off, n_vars) {
                std::mem::swap(&mut self.on, &mut scratch.on);
                std::mem::swap(&mut self.off, &mut scratch.off);
                self.support &= !(1 << v);
            }
        }
    }

    /// Returns the ISF of the cofactor w.r.t. `var` set to `phase`.
    pub fn cofactor(&self, var: usize, phase: bool, n_vars: usize) -> Isf {
        let mut on = truth::zeros(n_vars);
        let mut off = truth::zeros(n_vars);
        if phase {
            truth::cofactor1(&mut on, &self.on, n_vars, var);
            truth::cofactor1(&mut off, &self.off, n_vars, var);
        } else {
            truth::cofactor0(&mut on, &self.on, n_vars, var);
            truth::cofactor0(&mut off, &self.off, n_vars, var);
        }
        Isf {
            on,
            off,
            support: self.support & !(1 << var),
        }
    }

    /// Number of care points among the `2^n_vars` points.
    pub fn care_count(&self, n_vars: usize) -> usize {
        truth::count_ones(&self.on, n_vars) + truth::count_ones(&self.off, n_vars)
    }
}

impl Display for Isf {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Isf(support = {:#b}, on = [", self.support)?;
        for (i, w) in self.on.iter().enumerate().rev() {
            if i + 1 < self.on.len() {
                write!(f, "_")?;
            }
            write!(f, "{:016x}", w)?;
        }
        write!(f, "], off = [")?;
        for (i, w) in self.off.iter().enumerate().rev() {
            if i + 1 < self.off.len() {
                write!(f, "_")?;
            }
            write!(f, "{:016x}", w)?;
        }
        write!(f, "])")
    }
}

/// Bitmask of the first `n_vars` variables.
pub const fn full_mask(n_vars: usize) -> u32 {
    if n_vars >= 32 {
        u32::MAX
    } else {
        (1 << n_vars) - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const N: usize = 4;

    fn and2(a: &[u64], b: &[u64]) -> Vec<u64> {
        let mut t = truth::zeros(N);
        truth::and(&mut t, a, b, N);
        t
    }

    #[test]
    fn test_from_care() {
        let f = truth::var(N, 0);
        let care = truth::var(N, 1);
        let isf = Isf::from_care(&f, &care, N);
        assert_eq!(isf.on, and2(&f, &care));
        assert!(truth::is_disjoint(&isf.on, &isf.off, N));
        assert_eq!(isf.support, 0b1111);
        assert_eq!(isf.care_count(N), 8);
    }

    #[test]
    fn test_not_is_involution() {
        let f = truth::var(N, 2);
        let isf = Isf::from_care(&f, &truth::ones(N), N);
        let mut neg = isf.clone();
        neg.not();
        assert_eq!(neg.on, isf.off);
        neg.not();
        assert_eq!(neg, isf);
    }

    #[test]
    fn test_minimize_support_drops_dont_care_variable() {
        // f = v0, cared only where v1 = 1
        let f = truth::var(N, 0);
        let care = truth::var(N, 1);
        let mut isf = Isf::from_care(&f, &care, N);
        let mut scratch = Scratch::new(N);
        isf.minimize_support(N, &mut scratch);
        assert_eq!(isf.support, 0b0001);
        assert!(isf.is_admissible(&f, N));

        let before = isf.clone();
        isf.minimize_support(N, &mut scratch);
        assert_eq!(isf, before);
    }

    #[test]
    fn test_minimize_support_keeps_essential_variables() {
        let f = and2(&truth::var(N, 1), &truth::var(N, 3));
        let mut isf = Isf::from_care(&f, &truth::ones(N), N);
        let mut scratch = Scratch::new(N);
        isf.minimize_support(N, &mut scratch);
        assert_eq!(isf.support, 0b1010);
        assert_eq!(isf.support_vars().collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_minimize_support_empty_care() {
        let f = truth::var(N, 0);
        let mut isf = Isf::from_care(&f, &truth::zeros(N), N);
        let mut scratch = Scratch::new(N);
        isf.minimize_support(N, &mut scratch);
        assert_eq!(isf.support, 0);
        assert!(isf.is_trivial_zero(N));
        assert!(isf.is_trivial_one(N));
    }

    #[test]
    fn test_admissible() {
        let x = truth::var(N, 0);
        let y = truth::var(N, 1);
        let f = and2(&x, &y);
        let isf = Isf::from_care(&f, &truth::var(N, 0), N);
        // Cared only where x = 1, so y itself is admissible there
        assert!(isf.is_admissible(&y, N));
        assert!(isf.is_admissible(&f, N));
        assert!(!isf.is_admissible(&x, N));
        assert!(!isf.is_admissible_not(&y, N));

        let mut neg = isf.clone();
        neg.not();
        assert!(neg.is_admissible_not(&y, N));
    }

    #[test]
    fn test_cofactor() {
        let x = truth::var(N, 0);
        let y = truth::var(N, 1);
        let f = and2(&x, &y);
        let isf = Isf::from_care(&f, &truth::ones(N), N);

        let c1 = isf.cofactor(0, true, N);
        assert_eq!(c1.support, 0b1110);
        assert!(c1.is_admissible(&y, N));

        let c0 = isf.cofactor(0, false, N);
        assert!(c0.is_trivial_zero(N));
    }

    #[test]
    #[should_panic(expected = "ISF on-set and off-set overlap")]
    fn test_overlap_panics() {
        let x = truth::var(N, 0);
        Isf::new(x.clone(), x, 0b1, N);
    }
}
