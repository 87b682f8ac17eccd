//! Pivot search over Z_m.
//!
//! Over a field any nonzero entry is a usable pivot. Modulo a composite `m` an
//! entry can be nonzero and still be a zero-divisor, so the search prefers
//! units and otherwise manufactures an entry with a smaller `gcd(e, m)` by
//! adding a multiple of one row to another.

use tracing::{debug, trace};

use super::working::WorkingMatrix;
use crate::ring::{Ring, gcd};

/// Best pivot found so far: `row[row] + multiplier · row[partner]` has
/// `gcd(entry, m) == gcd` at column `col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate {
    gcd: i64,
    multiplier: i64,
    row: usize,
    partner: usize,
    col: usize,
}

/// Minimal `gcd((a + c·b) mod m, m)` for `c` in `[0, a / gcd(a, b))`.
///
/// Returns `(gcd, c)` for the first minimizing `c`, or `None` if no `c` gives
/// anything better than `m`. An empty range (`a == 0`) yields `None`.
///
/// `a + c·b` repeats with period `m / gcd(b, m)`, so at most that many `c` are
/// tried. That is still up to `m` ring operations when `b` is a unit.
pub(crate) fn min_gcd_combination(a: i64, b: i64, ring: &Ring) -> Option<(i64, i64)> {
    let m = ring.modulus as i64;
    let a = ring.normalize(a);
    let b = ring.normalize(b);
    let ab = gcd(a, b);
    if ab == 0 {
        return None;
    }

    let mut best = (m, 0);
    for c in 0..(a / ab).min(period(b, ring)) {
        let g = ring.gcd_with_modulus(ring.add(a, ring.mul(c, b)));
        if g < best.0 {
            best = (g, c);
        }
        if g == 1 {
            break;
        }
    }

    (best.0 < m).then_some(best)
}

/// Number of distinct `c·b mod m`.
fn period(b: i64, ring: &Ring) -> i64 {
    ring.modulus as i64 / ring.gcd_with_modulus(b)
}

impl WorkingMatrix {
    /// Locates a pivot in rows `[i, R)` and coefficient columns `[j, N)`.
    ///
    /// May replace a row of that block with a combination of two of its rows.
    /// The returned pivot's `gcd` with `m` divides every entry below it in its
    /// column, so the elimination multiplier is always defined. Returns `None`
    /// when every entry of the block is `≡ 0`.
    pub(crate) fn find_pivot(&mut self, i: usize, j: usize) -> Option<(usize, usize)> {
        let mut pivot = self.search_pivot(i, j)?;
        loop {
            let (row, col) = pivot;
            let g = self.ring.gcd_with_modulus(self.rows[row][col]);
            let Some(blocker) = (i..self.row_count()).find(|&k| self.rows[k][col] % g != 0) else {
                return Some(pivot);
            };

            // A pair combination with the blocking row always reaches gcd(pivot, blocker, m),
            // which is strictly smaller than g.
            let (improved, c) = self.full_period_combination(row, blocker, col);
            if improved >= g {
                return Some(pivot);
            }
            debug!(step = i, row, blocker, col, from = g, to = improved, "refining pivot");
            self.combine_rows(row, blocker, c);
            pivot = self.search_pivot(i, j)?;
        }
    }

    /// One pass of the unit-first / best-combination search.
    fn search_pivot(&mut self, i: usize, j: usize) -> Option<(usize, usize)> {
        let n = self.unknowns;
        let rows = self.row_count();

        for k in i..rows {
            for l in j..n {
                if self.ring.is_unit(self.rows[k][l]) {
                    trace!(step = i, row = k, col = l, "unit pivot");
                    return Some((k, l));
                }
            }
        }

        let mut best = Candidate {
            gcd: self.ring.modulus as i64,
            multiplier: 0,
            row: i,
            partner: i,
            col: j,
        };

        // Entries on their own; a lone row has no partner to combine with.
        for k in i..rows {
            for l in j..n {
                let g = self.ring.gcd_with_modulus(self.rows[k][l]);
                if g < best.gcd {
                    best = Candidate {
                        gcd: g,
                        multiplier: 0,
                        row: k,
                        partner: k,
                        col: l,
                    };
                }
            }
        }

        'search: for k in i..rows {
            for kk in k + 1..rows {
                for l in j..n {
                    let Some((g, c)) =
                        min_gcd_combination(self.rows[k][l], self.rows[kk][l], &self.ring)
                    else {
                        continue;
                    };
                    if g < best.gcd {
                        best = Candidate {
                            gcd: g,
                            multiplier: c,
                            row: k,
                            partner: kk,
                            col: l,
                        };
                    }
                    if best.gcd == 1 {
                        break 'search;
                    }
                }
            }
        }

        if best.gcd == self.ring.modulus as i64 {
            trace!(step = i, "no pivot candidate");
            return None;
        }

        if best.multiplier != 0 {
            debug!(
                step = i,
                row = best.row,
                partner = best.partner,
                multiplier = best.multiplier,
                gcd = best.gcd,
                "synthesized pivot row"
            );
            self.combine_rows(best.row, best.partner, best.multiplier);
        }

        Some((best.row, best.col))
    }

    /// Minimal `gcd(D[row][col] + c·D[other][col], m)` over a whole period of `c`.
    fn full_period_combination(&self, row: usize, other: usize, col: usize) -> (i64, i64) {
        let m = self.ring.modulus as i64;
        let a = self.rows[row][col];
        let b = self.rows[other][col];
        let target = gcd(gcd(a, b), m);

        let mut best = (self.ring.gcd_with_modulus(a), 0);
        for c in 1..period(b, &self.ring) {
            let g = self.ring.gcd_with_modulus(self.ring.add(a, self.ring.mul(c, b)));
            if g < best.0 {
                best = (g, c);
            }
            if g == target {
                break;
            }
        }
        best
    }
}
