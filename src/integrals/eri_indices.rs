//! Index tuples for the two-electron B-factor loop
//!
//! For one Cartesian direction with angular momenta (l₀, l₁ | l₂, l₃):
//!
//!   0 ≤ l01 ≤ l₀ + l₁,  0 ≤ r01 ≤ ⌊l01/2⌋
//!   0 ≤ l23 ≤ l₂ + l₃,  0 ≤ r23 ≤ ⌊l23/2⌋
//!   0 ≤ i ≤ ⌊(l01 + l23)/2⌋ - r01 - r23
//!
//! Flattening the five-deep nesting into a forward iterator keeps the
//! integral body readable and the index set testable.

/// One tuple of the two-electron index space
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EriIndices {
    pub idx_l_01: i64,
    pub idx_r_01: i64,
    pub idx_l_23: i64,
    pub idx_r_23: i64,
    pub idx_i: i64,
}

#[inline]
fn idx_r_count(idx_l: i64) -> i64 {
    idx_l / 2 + 1
}

#[inline]
fn idx_i_count(idx_l_01: i64, idx_l_23: i64, idx_r_01: i64, idx_r_23: i64) -> i64 {
    (idx_l_01 + idx_l_23 - 2 * (idx_r_01 + idx_r_23)) / 2 + 1
}

/// Yields EriIndices in canonical nested-loop order
#[derive(Clone, Debug)]
pub struct EriIndexIter {
    idx_l_01_end: i64,
    idx_l_23_end: i64,
    idx_l_01: i64,
    idx_r_01: i64,
    idx_l_23: i64,
    idx_r_23: i64,
    idx_i: i64,
}

impl EriIndexIter {
    pub fn new(angmom_0: i64, angmom_1: i64, angmom_2: i64, angmom_3: i64) -> Self {
        Self {
            idx_l_01_end: angmom_0 + angmom_1 + 1,
            idx_l_23_end: angmom_2 + angmom_3 + 1,
            idx_l_01: 0,
            idx_r_01: 0,
            idx_l_23: 0,
            idx_r_23: 0,
            idx_i: 0,
        }
    }
}

impl Iterator for EriIndexIter {
    type Item = EriIndices;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx_l_01 == self.idx_l_01_end {
            return None;
        }

        let current = EriIndices {
            idx_l_01: self.idx_l_01,
            idx_r_01: self.idx_r_01,
            idx_l_23: self.idx_l_23,
            idx_r_23: self.idx_r_23,
            idx_i: self.idx_i,
        };

        self.idx_i += 1;
        if self.idx_i == idx_i_count(self.idx_l_01, self.idx_l_23, self.idx_r_01, self.idx_r_23) {
            self.idx_i = 0;
            self.idx_r_23 += 1;

            if self.idx_r_23 == idx_r_count(self.idx_l_23) {
                self.idx_r_23 = 0;
                self.idx_l_23 += 1;

                if self.idx_l_23 == self.idx_l_23_end {
                    self.idx_l_23 = 0;
                    self.idx_r_01 += 1;

                    if self.idx_r_01 == idx_r_count(self.idx_l_01) {
                        self.idx_r_01 = 0;
                        self.idx_l_01 += 1;
                    }
                }
            }
        }

        Some(current)
    }
}
