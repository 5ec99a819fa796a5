//! Support-indexed canonicalizing table.
//!
//! The table caches previously built nodes by function, keyed by their minimized support. It
//! holds at most one node per function *up to complementation*: a lookup scans the bucket once for
//! the ISF and once for its negation, so a single stored node answers requests of both polarities.
//!
//! ```text
//! buckets[0b0011] → [@7, @12]       nodes depending on exactly {x0, x1}
//! buckets[0b0101] → [@9]            nodes depending on exactly {x0, x2}
//! spots           = [0b0011, 0b0101]
//! ```
//!
//! The list of nonempty buckets (`spots`) makes [`Table::clear`] proportional to the number of
//! distinct supports in use rather than to the `2^max_support` buckets.

use std::cell::Cell;

use log::debug;

use crate::bitset::BitSet;
use crate::isf::Isf;
use crate::node::Node;
use crate::reference::Ref;
use crate::truth;

pub struct Table {
    buckets: Vec<Vec<u32>>,
    /// Indices of nonempty buckets.
    spots: Vec<u32>,
    len: usize,
    hits: Cell<usize>,
    misses: Cell<usize>,
}

impl Table {
    /// Create a new table with `2^max_support` buckets.
    pub fn new(max_support: usize) -> Self {
        assert!(max_support <= 31, "Support bits should be in the range 0..=31");
        Self {
            buckets: std::iter::repeat_with(Vec::new)
                .take(1 << max_support)
                .collect(),
            spots: Vec::new(),
            len: 0,
            hits: Cell::new(0),
            misses: Cell::new(0),
        }
    }

    /// Number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }
    /// Number of stored nodes.
    pub fn len(&self) -> usize {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
    /// Supports of the nonempty buckets, in order of first use.
    pub fn spots(&self) -> &[u32] {
        &self.spots
    }

    /// Get the number of lookup hits.
    pub fn hits(&self) -> usize {
        self.hits.get()
    }
    /// Get the number of lookup misses.
    pub fn misses(&self) -> usize {
        self.misses.get()
    }

    /// Iterate over all stored node indices.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.spots
            .iter()
            .flat_map(move |&s| self.buckets[s as usize].iter().copied())
    }

    fn scan(&self, isf: &Isf, nodes: &[Node], offered: &BitSet, n_vars: usize) -> Option<u32> {
        self.buckets[isf.support as usize]
            .iter()
            .copied()
            .find(|&id| {
                let node = &nodes[id as usize];
                node.divisors.is_subset(offered) && isf.is_admissible(&node.truth, n_vars)
            })
    }

    /// Finds a stored node realizing `isf`, in either polarity.
    ///
    /// Nodes whose cone reaches a divisor leaf outside `offered` are skipped. The ISF is negated in place for the second scan and restored before returning.
    ///
    /// # Panics
    ///
    /// Panics if the support is empty but the ISF is neither constant 1 nor constant 0.
    pub fn lookup(&self, isf: &mut Isf, nodes: &[Node], offered: &BitSet, n_vars: usize) -> Option<Ref> {
        if isf.support == 0 {
            if truth::is_const1(&isf.on, n_vars) {
                return Some(Ref::ONE);
            }
            assert!(
                truth::is_const1(&isf.off, n_vars),
                "Zero-support ISF must be constant 1 or constant 0"
            );
            return Some(Ref::ZERO);
        }

        if let Some(id) = self.scan(isf, nodes, offered, n_vars) {
            self.hits.set(self.hits.get() + 1);
            return Some(Ref::new(id));
        }

        isf.not();
        let found = self.scan(isf, nodes, offered, n_vars);
        isf.not();

        match found {
            Some(id) => {
                self.hits.set(self.hits.get() + 1);
                Some(-Ref::new(id))
            }
            None => {
                self.misses.set(self.misses.get() + 1);
                None
            }
        }
    }

    /// Registers node `id` under `support`.
    ///
    /// The caller must have checked with [`Table::lookup`] that no stored node realizes the same
    /// function or its complement.
    pub fn add(&mut self, id: u32, support: u32) {
        debug!("table: add @{} under support {:#b}", id, support);
        let bucket = &mut self.buckets[support as usize];
        if bucket.is_empty() {
            self.spots.push(support);
        }
        bucket.push(id);
        self.len += 1;
    }

    /// Finds a stored node computing exactly `f` or its complement, whatever divisors it reaches.
    pub fn find_exact(&self, f: &[u64], support: u32, nodes: &[Node], n_vars: usize) -> Option<u32> {
        self.buckets[support as usize].iter().copied().find(|&id| {
            let t = &nodes[id as usize].truth;
            truth::is_equal(t, f, n_vars) || truth::is_complement(t, f, n_vars)
        })
    }

    /// Replaces node `old` by `new` in the bucket of `support`.
    ///
    /// Used when `old` computes the same function as `new` but reaches divisors that are no
    /// longer on offer, so that the table keeps one node per function.
    pub fn replace(&mut self, support: u32, old: u32, new: u32) {
        debug!("table: replace @{} by @{} under support {:#b}", old, new, support);
        let bucket = &mut self.buckets[support as usize];
        match bucket.iter().position(|&id| id == old) {
            Some(pos) => bucket[pos] = new,
            None => panic!("Node @{} is not stored under support {:#b}", old, support),
        }
    }

    /// Empties the table, touching only the buckets that were used.
    pub fn clear(&mut self) {
        for &s in &self.spots {
            self.buckets[s as usize].clear();
        }
        self.spots.clear();
        self.len = 0;
    }
}
