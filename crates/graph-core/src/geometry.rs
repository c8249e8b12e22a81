// File: crates/graph-core/src/geometry.rs
// Summary: Lightweight numeric helpers for sample placement.

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

/// Closed interval spanned by two bounds, in ascending order.
#[inline]
pub fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}
