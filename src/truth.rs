//! Fixed-width truth tables over `u64` words.
//!
//! A truth table over `n` variables stores `2^n` bits, bit `p` being the value of the function at
//! the point whose variable `i` equals bit `i` of `p`. For two variables the point index is
//! `v1*2 + v0`, so `AND(v0, v1)` is `0b1000`.
//!
//! Tables over fewer than 6 variables still occupy one full word: the `2^n` meaningful bits are
//! replicated with period `2^n` across the word (see [`stretch`]). With this convention every
//! operation works on whole words, and a table over `n` variables is also a valid table over any
//! `m >= n` variables once [stretched][stretch] to that width.
//!
//! All operations take the number of variables explicitly and operate on the first
//! [`word_num(n_vars)`][word_num] words of their slices.

/// Number of bits per word.
pub const BITS_PER_WORD: usize = 64;

/// Elementary variable masks for the variables living inside a single word.
const VAR_MASKS: [u64; 6] = [
    0xAAAA_AAAA_AAAA_AAAA,
    0xCCCC_CCCC_CCCC_CCCC,
    0xF0F0_F0F0_F0F0_F0F0,
    0xFF00_FF00_FF00_FF00,
    0xFFFF_0000_FFFF_0000,
    0xFFFF_FFFF_0000_0000,
];

/// Returns the number of words in a truth table over `n_vars` variables.
#[inline]
pub const fn word_num(n_vars: usize) -> usize {
    if n_vars <= 6 {
        1
    } else {
        1 << (n_vars - 6)
    }
}

/// Returns the number of meaningful bits (points) in a truth table over `n_vars` variables.
#[inline]
pub const fn point_num(n_vars: usize) -> usize {
    1 << n_vars
}

/// Gets the word index and bit position for a given point.
#[inline]
fn word_and_bit(point: usize) -> (usize, usize) {
    (point / BITS_PER_WORD, point % BITS_PER_WORD)
}

/// Allocates a constant-0 table over `n_vars` variables.
pub fn zeros(n_vars: usize) -> Vec<u64> {
    vec![0; word_num(n_vars)]
}

/// Allocates a constant-1 table over `n_vars` variables.
pub fn ones(n_vars: usize) -> Vec<u64> {
    vec![!0; word_num(n_vars)]
}

/// Allocates the table of the elementary variable `var`.
pub fn var(n_vars: usize, var: usize) -> Vec<u64> {
    let mut t = zeros(n_vars);
    nth_var(&mut t, n_vars, var);
    t
}

/// Widens a table given over `n_vars` variables to `dst_vars` variables.
///
/// Only the low `2^n_vars` bits of `src` are read; they are replicated to fill the wider table,
/// so the result does not depend on the extra variables.
pub fn stretch(src: &[u64], n_vars: usize, dst_vars: usize) -> Vec<u64> {
    assert!(n_vars <= dst_vars, "Cannot stretch {} variables down to {}", n_vars, dst_vars);

    let mut dst = zeros(dst_vars);
    if n_vars < 6 {
        let bits = 1usize << n_vars;
        let mut word = src[0] & (u64::MAX >> (BITS_PER_WORD - bits));
        for s in n_vars..6 {
            word |= word << (1 << s);
        }
        dst.fill(word);
    } else {
        let w = word_num(n_vars);
        for (i, d) in dst.iter_mut().enumerate() {
            *d = src[i % w];
        }
    }
    dst
}

pub fn clear(t: &mut [u64], n_vars: usize) {
    t[..word_num(n_vars)].fill(0);
}

pub fn fill(t: &mut [u64], n_vars: usize) {
    t[..word_num(n_vars)].fill(!0);
}

pub fn copy(dst: &mut [u64], src: &[u64], n_vars: usize) {
    let w = word_num(n_vars);
    dst[..w].copy_from_slice(&src[..w]);
}

pub fn not(dst: &mut [u64], src: &[u64], n_vars: usize) {
    for (d, s) in dst.iter_mut().zip(src).take(word_num(n_vars)) {
        *d = !*s;
    }
}

pub fn and(dst: &mut [u64], a: &[u64], b: &[u64], n_vars: usize) {
    for i in 0..word_num(n_vars) {
        dst[i] = a[i] & b[i];
    }
}

pub fn or(dst: &mut [u64], a: &[u64], b: &[u64], n_vars: usize) {
    for i in 0..word_num(n_vars) {
        dst[i] = a[i] | b[i];
    }
}

pub fn xor(dst: &mut [u64], a: &[u64], b: &[u64], n_vars: usize) {
    for i in 0..word_num(n_vars) {
        dst[i] = a[i] ^ b[i];
    }
}

/// `dst = a ∧ ¬b`
pub fn sharp(dst: &mut [u64], a: &[u64], b: &[u64], n_vars: usize) {
    for i in 0..word_num(n_vars) {
        dst[i] = a[i] & !b[i];
    }
}

/// Writes the table of the elementary variable `var` into `t`.
pub fn nth_var(t: &mut [u64], n_vars: usize, var: usize) {
    assert!(var < n_vars, "Variable {} is out of range for {} variables", var, n_vars);
    let w = word_num(n_vars);
    if var < 6 {
        t[..w].fill(VAR_MASKS[var]);
    } else {
        let shift = var - 6;
        for (k, word) in t[..w].iter_mut().enumerate() {
            *word = if (k >> shift) & 1 != 0 { !0 } else { 0 };
        }
    }
}

pub fn is_const0(t: &[u64], n_vars: usize) -> bool {
    t[..word_num(n_vars)].iter().all(|&w| w == 0)
}

pub fn is_const1(t: &[u64], n_vars: usize) -> bool {
    t[..word_num(n_vars)].iter().all(|&w| w == !0)
}

pub fn is_equal(a: &[u64], b: &[u64], n_vars: usize) -> bool {
    let w = word_num(n_vars);
    a[..w] == b[..w]
}

/// Returns `true` if `b` is the complement of `a`.
pub fn is_complement(a: &[u64], b: &[u64], n_vars: usize) -> bool {
    a.iter()
        .zip(b)
        .take(word_num(n_vars))
        .all(|(x, y)| x ^ y == !0)
}

/// Returns `true` if `a ∧ b` is constant 0.
pub fn is_disjoint(a: &[u64], b: &[u64], n_vars: usize) -> bool {
    (0..word_num(n_vars)).all(|i| a[i] & b[i] == 0)
}

/// Returns `true` if `a ⇒ b`, i.e. `a ∧ ¬b` is constant 0.
pub fn is_imply(a: &[u64], b: &[u64], n_vars: usize) -> bool {
    (0..word_num(n_vars)).all(|i| a[i] & !b[i] == 0)
}

/// Returns `true` if the function depends on `var`.
pub fn has_var(t: &[u64], n_vars: usize, var: usize) -> bool {
    let w = word_num(n_vars);
    if var < 6 {
        let m = VAR_MASKS[var];
        let s = 1 << var;
        t[..w].iter().any(|&x| (x & m) >> s != x & !m)
    } else {
        let step = 1 << (var - 6);
        (0..w)
            .step_by(2 * step)
            .any(|k| t[k..k + step] != t[k + step..k + 2 * step])
    }
}

/// Returns the support of the function as a bitmask.
pub fn support(t: &[u64], n_vars: usize) -> u32 {
    (0..n_vars)
        .filter(|&v| has_var(t, n_vars, v))
        .fold(0, |acc, v| acc | (1 << v))
}

/// Existentially quantifies `var` out of `src` into `dst`.
pub fn exist(dst: &mut [u64], src: &[u64], n_vars: usize, var: usize) {
    let w = word_num(n_vars);
    if var < 6 {
        let m = VAR_MASKS[var];
        let s = 1 << var;
        for i in 0..w {
            let x = src[i];
            dst[i] = x | ((x & m) >> s) | ((x & !m) << s);
        }
    } else {
        let step = 1 << (var - 6);
        for k in (0..w).step_by(2 * step) {
            for i in k..k + step {
                let x = src[i] | src[i + step];
                dst[i] = x;
                dst[i + step] = x;
            }
        }
    }
}

/// Existentially quantifies `var` out of `t` in place.
pub fn exist_in_place(t: &mut [u64], n_vars: usize, var: usize) {
    let w = word_num(n_vars);
    if var < 6 {
        let m = VAR_MASKS[var];
        let s = 1 << var;
        for x in t[..w].iter_mut() {
            *x |= ((*x & m) >> s) | ((*x & !m) << s);
        }
    } else {
        let step = 1 << (var - 6);
        for k in (0..w).step_by(2 * step) {
            for i in k..k + step {
                let x = t[i] | t[i + step];
                t[i] = x;
                t[i + step] = x;
            }
        }
    }
}

/// Existentially quantifies every variable of `mask` out of `t` in place.
pub fn exist_set(t: &mut [u64], n_vars: usize, mask: u32) {
    for v in (0..n_vars).filter(|&v| mask & (1 << v) != 0) {
        exist_in_place(t, n_vars, v);
    }
}

/// Writes the negative cofactor of `src` w.r.t. `var` into `dst`.
pub fn cofactor0(dst: &mut [u64], src: &[u64], n_vars: usize, var: usize) {
    let w = word_num(n_vars);
    if var < 6 {
        let m = VAR_MASKS[var];
        let s = 1 << var;
        for i in 0..w {
            let x = src[i] & !m;
            dst[i] = x | (x << s);
        }
    } else {
        let step = 1 << (var - 6);
        for k in (0..w).step_by(2 * step) {
            for i in k..k + step {
                let x = src[i];
                dst[i] = x;
                dst[i + step] = x;
            }
        }
    }
}

/// Writes the positive cofactor of `src` w.r.t. `var` into `dst`.
pub fn cofactor1(dst: &mut [u64], src: &[u64], n_vars: usize, var: usize) {
    let w = word_num(n_vars);
    if var < 6 {
        let m = VAR_MASKS[var];
        let s = 1 << var;
        for i in 0..w {
            let x = src[i] & m;
            dst[i] = x | (x >> s);
        }
    } else {
        let step = 1 << (var - 6);
        for k in (0..w).step_by(2 * step) {
            for i in k..k + step {
                let x = src[i + step];
                dst[i] = x;
                dst[i + step] = x;
            }
        }
    }
}

/// Returns the value of the function at `point`.
#[inline]
pub fn get_bit(t: &[u64], point: usize) -> bool {
    let (word, bit) = word_and_bit(point);
    (t[word] >> bit) & 1 != 0
}

/// Sets the value of the function at `point`.
///
/// For tables over fewer than 6 variables, callers must set every replica of the point (or
/// [stretch] the result afterwards).
#[inline]
pub fn set_bit(t: &mut [u64], point: usize) {
    let (word, bit) = word_and_bit(point);
    t[word] |= 1 << bit;
}

/// Returns the number of points (among the `2^n_vars` meaningful ones) where the function is 1.
pub fn count_ones(t: &[u64], n_vars: usize) -> usize {
    if n_vars < 6 {
        (t[0] & (u64::MAX >> (BITS_PER_WORD - point_num(n_vars)))).count_ones() as usize
    } else {
        t[..word_num(n_vars)]
            .iter()
            .map(|w| w.count_ones() as usize)
            .sum()
    }
}
