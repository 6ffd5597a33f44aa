//! Scalar and planar helpers shared by the placer, the expansion pass and
//! the interpolator.

/// Linear interpolation between `a` and `b`. Values of `t` outside [0, 1]
/// extrapolate linearly; callers own any clamping convention.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

pub fn distance(a: (f32, f32), b: (f32, f32)) -> f32 {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    (dx * dx + dy * dy).sqrt()
}

/// Minimum center-to-center distance at which two circles stop counting as
/// overlapping, including the configured padding fraction.
pub fn required_gap(radius_a: f32, radius_b: f32, padding_fraction: f32) -> f32 {
    (radius_a + radius_b) * (1.0 + padding_fraction)
}

pub fn circles_overlap(
    a: (f32, f32),
    radius_a: f32,
    b: (f32, f32),
    radius_b: f32,
    padding_fraction: f32,
) -> bool {
    distance(a, b) < required_gap(radius_a, radius_b, padding_fraction)
}
