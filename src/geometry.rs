//! Geometry primitives used by the energy function and the post-pass.
//!
//! All coordinates use top-left origin convention: x increases rightward,
//! y increases downward. Label boxes span `[x, x+width] × [y-height, y]`,
//! i.e. the reference point is the bottom-left corner in screen space.

/// Euclidean distance between two points.
pub fn point_dist(x: f64, y: f64, x0: f64, y0: f64) -> f64 {
    let dx = x - x0;
    let dy = y - y0;
    (dx * dx + dy * dy).sqrt()
}

/// Length of the intersection of two closed intervals, clamped to zero.
///
/// Used per axis to compute rectangle overlap areas: multiply the x-axis
/// span by the y-axis span.
pub fn overlap_span(lo1: f64, hi1: f64, lo2: f64, hi2: f64) -> f64 {
    (hi1.min(hi2) - lo1.max(lo2)).max(0.0)
}

/// Tests whether segment `(x1,y1)-(x2,y2)` intersects segment
/// `(x3,y3)-(x4,y4)`.
///
/// Parametric test after Paul Bourke: the segments intersect iff both
/// line parameters `mua` and `mub` fall in `[0, 1]` (endpoint touches
/// count as intersections).
///
/// Parallel segments — including collinear overlapping ones — have a zero
/// denominator and are treated as non-intersecting.
#[allow(clippy::too_many_arguments)]
pub fn segments_intersect(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    x3: f64,
    y3: f64,
    x4: f64,
    y4: f64,
) -> bool {
    let denom = (y4 - y3) * (x2 - x1) - (x4 - x3) * (y2 - y1);
    if denom == 0.0 {
        return false;
    }
    let mua = ((x4 - x3) * (y1 - y3) - (y4 - y3) * (x1 - x3)) / denom;
    let mub = ((x2 - x1) * (y1 - y3) - (y2 - y1) * (x1 - x3)) / denom;
    (0.0..=1.0).contains(&mua) && (0.0..=1.0).contains(&mub)
}
