//! Index tuples for the nuclear-attraction A-factor loop
//!
//! For one Cartesian direction with angular momenta l₀, l₁ the A-factors
//! run over
//!
//!   0 ≤ l ≤ l₀ + l₁,  0 ≤ r ≤ ⌊l/2⌋,  0 ≤ i ≤ ⌊(l - 2r)/2⌋
//!
//! Yielding the triples from a forward iterator keeps the integral body
//! at three nested loops instead of nine, and lets tests enumerate the
//! index set directly.

#[inline]
fn idx_r_count(idx_l: i64) -> i64 {
    idx_l / 2 + 1
}

#[inline]
fn idx_i_count(idx_l: i64, idx_r: i64) -> i64 {
    (idx_l - 2 * idx_r) / 2 + 1
}

/// Yields (l, r, i) in canonical nested-loop order
#[derive(Clone, Debug)]
pub struct NuclearIndexIter {
    idx_l_end: i64,
    idx_l: i64,
    idx_r: i64,
    idx_i: i64,
}

impl NuclearIndexIter {
    pub fn new(angmom_0: i64, angmom_1: i64) -> Self {
        Self {
            idx_l_end: angmom_0 + angmom_1 + 1,
            idx_l: 0,
            idx_r: 0,
            idx_i: 0,
        }
    }
}

impl Iterator for NuclearIndexIter {
    type Item = (i64, i64, i64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx_l == self.idx_l_end {
            return None;
        }

        let current = (self.idx_l, self.idx_r, self.idx_i);

        self.idx_i += 1;
        if self.idx_i == idx_i_count(self.idx_l, self.idx_r) {
            self.idx_i = 0;
            self.idx_r += 1;

            if self.idx_r == idx_r_count(self.idx_l) {
                self.idx_r = 0;
                self.idx_l += 1;
            }
        }

        Some(current)
    }
}
