//! Scoring heuristics for choosing which free rectangle receives a
//! candidate rectangle.
//!
//! A scorer is any `Fn(candidate_size, container_size) -> score` where a
//! lower score means a snugger fit. The maximum value of the coordinate
//! type is reserved as the "does not fit" sentinel, so scorers should stay
//! below it for any candidate that geometrically fits. `Packer::pack` uses
//! [`snug_fit`](fn.snug_fit.html); alternatives can be supplied through
//! `Packer::pack_with`.

use num_traits::Num;

/// The default scorer: the leftover margin on the looser axis.
///
/// Minimizing this picks the free rectangle whose tighter dimension hugs
/// the candidate most closely. Lower means better.
pub fn snug_fit<T>(candidate: (T, T), container: (T, T)) -> T
where
    T: Num + PartialOrd + Copy,
{
    let margin_w = container.0 - candidate.0;
    let margin_h = container.1 - candidate.1;

    if margin_w > margin_h {
        margin_w
    } else {
        margin_h
    }
}

/// Scores by leftover area instead of leftover margin.
///
/// Compared to [`snug_fit`](fn.snug_fit.html), this tends to keep large
/// free rectangles intact at the cost of splintering small ones.
pub fn area_fit<T>(candidate: (T, T), container: (T, T)) -> T
where
    T: Num + PartialOrd + Copy,
{
    container.0 * container.1 - candidate.0 * candidate.1
}
