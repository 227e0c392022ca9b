//! Pure 2D drawing geometry.
//!
//! Purpose
//! - Provide the small, total arithmetic the chart renderers lean on: angle
//!   normalization, rotated bounding sizes, anchored offsets, and the
//!   significant-digit rounding used for axis labels.
//! - Keep the API minimal (KISS, YAGNI) and numerically explicit: every
//!   function here accepts any f64, including NaN and infinities, and returns
//!   a well-defined fallback instead of panicking.
//!
//! Code cross-refs: `draw::place` consumes `Size::rotated_by` and `Anchor`.

mod types;
mod util;

pub use types::{Anchor, Rect, Size};
pub use util::{
    clamp, decimal_places, deg_to_rad, move_point, normalize_angle, rad_to_deg,
    round_to_next_significant,
};
