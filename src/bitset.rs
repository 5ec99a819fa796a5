//! Small growable bit set.
//!
//! Used to record which divisor leaves a node's cone reaches, and which divisors a
//! [`decompose`][crate::manager::Manager::decompose] call offers.

/// A bit set backed by a vector of u64 words, growing as bits are inserted.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct BitSet {
    words: Vec<u64>,
}

impl BitSet {
    const BITS_PER_WORD: usize = 64;

    pub const fn new() -> Self {
        Self { words: Vec::new() }
    }

    #[inline]
    fn word_and_bit(index: usize) -> (usize, usize) {
        (index / Self::BITS_PER_WORD, index % Self::BITS_PER_WORD)
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Returns the number of set bits.
    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn contains(&self, index: usize) -> bool {
        let (word, bit) = Self::word_and_bit(index);
        self.words.get(word).map_or(false, |&w| w & (1 << bit) != 0)
    }

    /// Sets the bit at the given index. Returns true if the bit was not previously set.
    pub fn insert(&mut self, index: usize) -> bool {
        let (word, bit) = Self::word_and_bit(index);
        if word >= self.words.len() {
            self.words.resize(word + 1, 0);
        }
        let was_clear = self.words[word] & (1 << bit) == 0;
        self.words[word] |= 1 << bit;
        was_clear
    }

    /// Adds every bit of `other`.
    pub fn union_with(&mut self, other: &BitSet) {
        if other.words.len() > self.words.len() {
            self.words.resize(other.words.len(), 0);
        }
        for (w, &o) in self.words.iter_mut().zip(&other.words) {
            *w |= o;
        }
    }

    /// Returns true if every bit of `self` is also set in `other`.
    pub fn is_subset(&self, other: &BitSet) -> bool {
        self.words.iter().enumerate().all(|(i, &w)| {
            let o = other.words.get(i).copied().unwrap_or(0);
            w & !o == 0
        })
    }

    pub fn clear(&mut self) {
        self.words.clear();
    }

    /// Returns an iterator over all set bit indices, in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(i, &w)| {
            (0..Self::BITS_PER_WORD)
                .filter(move |&b| w & (1 << b) != 0)
                .map(move |b| i * Self::BITS_PER_WORD + b)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_contains() {
        let mut set = BitSet::new();
        assert!(set.is_empty());
        assert!(set.insert(3));
        assert!(!set.insert(3));
        assert!(set.insert(130));
        assert!(set.contains(3));
        assert!(set.contains(130));
        assert!(!set.contains(64));
        assert!(!set.contains(1000));
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![3, 130]);
    }

    #[test]
    fn test_subset_and_union() {
        let mut a = BitSet::new();
        a.insert(1);
        let mut b = BitSet::new();
        b.insert(1);
        b.insert(70);

        assert!(a.is_subset(&b));
        assert!(!b.is_subset(&a));
        assert!(BitSet::new().is_subset(&a));

        a.union_with(&b);
        assert_eq!(a, b);

        a.clear();
        assert!(a.is_empty());
        assert!(a.is_subset(&BitSet::new()));
    }
}
