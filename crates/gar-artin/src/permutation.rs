//! Permutation table helpers. A table `t` sends the strand starting at
//! position `i` to its final position `t[i]`.

pub(crate) type Table = Vec<u8>;

pub(crate) fn identity(n: usize) -> Table {
    (0..n).map(|i| i as u8).collect()
}

pub(crate) fn half_twist(n: usize) -> Table {
    (0..n).map(|i| (n - 1 - i) as u8).collect()
}

pub(crate) fn inverse(t: &[u8]) -> Table {
    let mut inv = vec![0u8; t.len()];
    for (i, &v) in t.iter().enumerate() {
        inv[v as usize] = i as u8;
    }
    inv
}

/// `a` followed by `b`.
pub(crate) fn compose(a: &[u8], b: &[u8]) -> Table {
    a.iter().map(|&v| b[v as usize]).collect()
}

pub(crate) fn is_permutation(t: &[usize]) -> bool {
    let mut seen = vec![false; t.len()];
    for &v in t {
        if v >= t.len() || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}

/// Strands starting at `k - 1` and `k` cross, i.e. `σk` is a prefix.
fn descent(t: &[u8], k: usize) -> bool {
    t[k - 1] > t[k]
}

/// Greatest common prefix. Peels off atoms that are prefixes of both
/// remainders, scanning like a gnome sort so each swap is followed by a
/// recheck of its left neighbour.
pub(crate) fn meet(a: &[u8], b: &[u8]) -> Table {
    let n = a.len();
    let mut meet = identity(n);
    let mut ra = a.to_vec();
    let mut rb = b.to_vec();
    let mut k = 1;
    while k < n {
        if descent(&ra, k) && descent(&rb, k) {
            // meet · σk
            for v in meet.iter_mut() {
                if *v as usize == k - 1 {
                    *v = k as u8;
                } else if *v as usize == k {
                    *v = (k - 1) as u8;
                }
            }
            ra.swap(k - 1, k);
            rb.swap(k - 1, k);
            k = k.saturating_sub(1).max(1);
        } else {
            k += 1;
        }
    }
    meet
}

/// Decomposes a positive permutation braid into atoms, always peeling the
/// smallest available generator.
pub(crate) fn atom_word(t: &[u8]) -> Vec<usize> {
    let mut rest = t.to_vec();
    let mut word = Vec::new();
    'peel: loop {
        for k in 1..rest.len() {
            if descent(&rest, k) {
                word.push(k);
                rest.swap(k - 1, k);
                continue 'peel;
            }
        }
        return word;
    }
}
