/// Union-find over elements carrying a parity relative to their representative.
///
/// Each union records the constraint `value(a) ⊕ value(b) = diff`. A system of such constraints
/// is satisfiable iff no union closes an odd cycle.
#[derive(Debug, Clone)]
pub struct ParityUnionFind {
    parent: Vec<u32>,
    /// Parity of each element relative to its parent.
    parity: Vec<bool>,
    size: Vec<u32>,
}

impl ParityUnionFind {
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len as u32).collect(),
            parity: vec![false; len],
            size: vec![1; len],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the representative of `x` and the parity of `x` relative to it.
    pub fn find(&mut self, x: usize) -> (usize, bool) {
        let mut root = x;
        let mut parity = false;
        while self.parent[root] as usize != root {
            parity ^= self.parity[root];
            root = self.parent[root] as usize;
        }

        // Path compression
        let mut cur = x;
        let mut cur_parity = parity;
        while self.parent[cur] as usize != cur {
            let next = self.parent[cur] as usize;
            let next_parity = cur_parity ^ self.parity[cur];
            self.parent[cur] = root as u32;
            self.parity[cur] = cur_parity;
            cur = next;
            cur_parity = next_parity;
        }

        (root, parity)
    }

    /// Adds the constraint `value(a) ⊕ value(b) = diff`.
    ///
    /// Returns `false` if the constraint contradicts the ones added before.
    pub fn union(&mut self, a: usize, b: usize, diff: bool) -> bool {
        let (ra, pa) = self.find(a);
        let (rb, pb) = self.find(b);
        if ra == rb {
            return pa ^ pb == diff;
        }
        let (child, parent) = if self.size[ra] < self.size[rb] {
            (ra, rb)
        } else {
            (rb, ra)
        };
        self.parent[child] = parent as u32;
        self.parity[child] = pa ^ pb ^ diff;
        self.size[parent] += self.size[child];
        true
    }

    /// Value of `x` in the solution where every representative is `false`.
    pub fn value(&mut self, x: usize) -> bool {
        self.find(x).1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consistent_constraints() {
        let mut uf = ParityUnionFind::new(4);
        assert!(uf.union(0, 1, true));
        assert!(uf.union(1, 2, true));
        assert!(uf.union(2, 3, false));
        assert!(uf.union(0, 2, false));

        assert_ne!(uf.value(0), uf.value(1));
        assert_eq!(uf.value(0), uf.value(2));
        assert_eq!(uf.value(2), uf.value(3));
    }

    #[test]
    fn test_odd_cycle() {
        let mut uf = ParityUnionFind::new(3);
        assert!(uf.union(0, 1, true));
        assert!(uf.union(1, 2, true));
        assert!(!uf.union(0, 2, true));
    }

    #[test]
    fn test_long_chain_compression() {
        let n = 100;
        let mut uf = ParityUnionFind::new(n);
        for i in 1..n {
            assert!(uf.union(i - 1, i, true));
        }
        for i in 0..n {
            assert_eq!(uf.value(i) ^ uf.value(0), i % 2 == 1);
        }
        assert_eq!(uf.find(n - 1).0, uf.find(0).0);
    }
}
