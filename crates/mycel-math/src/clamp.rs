/// Projects `value` onto the closed interval `[lo, hi]`.
///
/// Returns `lo` if `value < lo`, `hi` if `value > hi`, and `value` otherwise.
/// The caller guarantees `lo <= hi`; this is never checked. Unlike
/// [`f64::clamp`] this never panics, and a NaN `value` passes through
/// unchanged because neither comparison holds.
#[inline]
pub fn clamp<T: PartialOrd + Copy>(value: T, lo: T, hi: T) -> T {
    if value < lo {
        lo
    } else if value > hi {
        hi
    } else {
        value
    }
}
