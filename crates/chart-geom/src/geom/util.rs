//! Scalar helpers shared by axis layout and label drawing.
//!
//! Everything here is total: zero, NaN, and infinities flow through to a
//! defined result instead of a panic, so callers never pre-filter values.

use nalgebra::Vector2;

/// Restrict `value` to `[lower, upper]`. Plain min/max composition; callers
/// uphold `lower <= upper` (a reversed range reorders the result, it does not
/// panic).
#[inline]
pub fn clamp<T: PartialOrd>(value: T, lower: T, upper: T) -> T {
    let value = if value < lower { lower } else { value };
    if value > upper {
        upper
    } else {
        value
    }
}

#[inline]
pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

#[inline]
pub fn rad_to_deg(radians: f64) -> f64 {
    radians * 180.0 / std::f64::consts::PI
}

/// Map any degree value into `[0, 360)`. A negative remainder is shifted up
/// by a full turn, so -10 maps to 350 and 730 maps to 10.
#[inline]
pub fn normalize_angle(degrees: f64) -> f64 {
    let angle = degrees % 360.0;
    if angle < 0.0 {
        angle + 360.0
    } else {
        angle
    }
}

/// Translate `point` by `distance` along `angle_degrees`, math convention:
/// 0° points along +x, the angle sweeps through cosine/sine (no screen-Y
/// flip — the surface's coordinate handedness is the caller's concern).
#[inline]
pub fn move_point(point: Vector2<f64>, distance: f64, angle_degrees: f64) -> Vector2<f64> {
    let radians = deg_to_rad(angle_degrees);
    Vector2::new(
        point.x + distance * radians.cos(),
        point.y + distance * radians.sin(),
    )
}

/// Round `x` to exactly one significant digit, preserving its order of
/// magnitude: 1234 becomes 1000, 0.0456 becomes 0.05. Zero, NaN, and
/// infinities pass through unchanged.
pub fn round_to_next_significant(x: f64) -> f64 {
    if x == 0.0 || !x.is_finite() {
        return x;
    }
    let d = x.abs().log10().ceil();
    let magnitude = 10f64.powi(1 - d as i32);
    (x * magnitude).round() / magnitude
}

/// Decimal places needed to display `x`'s leading significant digit.
///
/// Display-precision heuristic for axis labels: rounds to one significant
/// digit, then `ceil(-log10(rounded)) + 2`, floored at zero. Not a general
/// rounding contract; callers get "reasonable display precision", nothing
/// more. Returns 0 for zero and non-finite input (including the negative-x
/// case, where the log degenerates).
pub fn decimal_places(x: f64) -> usize {
    if x == 0.0 || !x.is_finite() {
        return 0;
    }
    let rounded = round_to_next_significant(x);
    if rounded == 0.0 || !rounded.is_finite() {
        return 0;
    }
    let places = (-rounded.log10()).ceil() + 2.0;
    if places.is_finite() && places > 0.0 {
        places as usize
    } else {
        0
    }
}
