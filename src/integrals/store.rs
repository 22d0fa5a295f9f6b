//! Two-electron integral store with 8-fold permutation symmetry
//!
//! A real (ij|kl) is invariant under i↔j, k↔l and (ij)↔(kl). The
//! Yoshimine composite index folds all eight permutations onto one key,
//! so the storage layer itself carries no symmetry logic. Querying
//! before computing realises the 8× saving during the build.

use std::collections::HashMap;

/// Canonical composite key for the four indices of (ij|kl)
pub fn yoshimine_key(i0: usize, i1: usize, i2: usize, i3: usize) -> usize {
    let ab = if i0 > i1 {
        i0 * (i0 + 1) / 2 + i1
    } else {
        i1 * (i1 + 1) / 2 + i0
    };

    let cd = if i2 > i3 {
        i2 * (i2 + 1) / 2 + i3
    } else {
        i3 * (i3 + 1) / 2 + i2
    };

    if ab > cd {
        ab * (ab + 1) / 2 + cd
    } else {
        cd * (cd + 1) / 2 + ab
    }
}

/// Mapping from the canonical key to the integral value
#[derive(Debug, Default)]
pub struct TwoElectronStore {
    values: HashMap<usize, f64>,
}

impl TwoElectronStore {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    pub fn exists(&self, i0: usize, i1: usize, i2: usize, i3: usize) -> bool {
        self.values.contains_key(&yoshimine_key(i0, i1, i2, i3))
    }

    pub fn set(&mut self, i0: usize, i1: usize, i2: usize, i3: usize, value: f64) {
        self.values.insert(yoshimine_key(i0, i1, i2, i3), value);
    }

    pub fn get(&self, i0: usize, i1: usize, i2: usize, i3: usize) -> Option<f64> {
        self.values.get(&yoshimine_key(i0, i1, i2, i3)).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
