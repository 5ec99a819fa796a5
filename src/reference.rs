use std::fmt::{Display, Formatter};
use std::ops::{Neg, Not};

/// Polarity-tagged handle to a node in the [`Manager`][crate::manager::Manager] arena.
///
/// The low bit is the complement flag, the remaining bits are the node index. A node and its
/// complement share one physical node accessed through references of opposite polarity.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Ref(u32);

impl Ref {
    /// Constant 1 (the regular reference to node 0).
    pub const ONE: Ref = Ref(0);
    /// Constant 0 (the complemented reference to node 0).
    pub const ZERO: Ref = Ref(1);

    pub const fn new(index: u32) -> Self {
        Self(index << 1)
    }

    pub const fn from_parts(index: u32, negated: bool) -> Self {
        Self((index << 1) | negated as u32)
    }

    pub const fn is_negated(self) -> bool {
        self.0 & 1 != 0
    }

    pub const fn negate(self) -> Self {
        Self(self.0 ^ 1)
    }

    /// Complements the reference iff `cond` holds.
    pub const fn not_cond(self, cond: bool) -> Self {
        Self(self.0 ^ cond as u32)
    }

    /// Drops the complement flag.
    pub const fn regular(self) -> Self {
        Self(self.0 & !1)
    }

    /// Returns the index of the referenced node.
    pub const fn index(self) -> usize {
        (self.0 >> 1) as usize
    }

    pub const fn id(self) -> u32 {
        self.0 >> 1
    }

    pub const fn is_const(self) -> bool {
        self.index() == 0
    }
}

impl Neg for Ref {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Not for Ref {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.negate()
    }
}

impl Display for Ref {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}@{}",
            if self.is_negated() { "~" } else { "" },
            self.id()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(Ref::ZERO, !Ref::ONE);
        assert!(Ref::ZERO.is_negated());
        assert!(!Ref::ONE.is_negated());
        assert!(Ref::ZERO.is_const());
        assert_eq!(Ref::ZERO.regular(), Ref::ONE);
    }

    #[test]
    fn test_polarity() {
        let r = Ref::new(5);
        assert_eq!(r.index(), 5);
        assert_eq!((-r).index(), 5);
        assert_eq!(-(-r), r);
        assert_eq!(r.not_cond(false), r);
        assert_eq!(r.not_cond(true), !r);
        assert_eq!(Ref::from_parts(5, true), !r);
        assert_eq!(r.to_string(), "@5");
        assert_eq!((!r).to_string(), "~@5");
    }
}
