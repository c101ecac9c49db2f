//! Triangle Sides Value Object
//!
//! Three candidate side lengths. Positivity is a validation rule, not a
//! construction invariant, so any `f64` is accepted here.

use derive_more::Display;

/// Three side lengths of a candidate triangle
#[derive(Debug, Clone, Copy, PartialEq, Display)]
#[display("({a}, {b}, {c})")]
pub struct TriangleSides {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl TriangleSides {
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// True if any side is `<= 0`.
    ///
    /// Written as a `<= 0` test rather than `> 0` so that NaN is not
    /// reported as non-positive.
    pub fn has_non_positive_side(&self) -> bool {
        self.a <= 0.0 || self.b <= 0.0 || self.c <= 0.0
    }

    /// Strict triangle inequality on all three pairs. No tolerance.
    pub fn satisfies_triangle_inequality(&self) -> bool {
        let Self { a, b, c } = *self;
        (a + b > c) && (a + c > b) && (b + c > a)
    }
}
