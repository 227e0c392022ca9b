//! Drawing-geometry helpers for chart rendering.
//!
//! Two cooperating pieces:
//! - `geom`: angle conversions, rotated bounding sizes, point translation,
//!   significant-digit rounding. Pure, stateless, total over f64.
//! - `draw`: anchored/rotated placement of text and images, delegating the
//!   actual pixels to an external [`draw::Surface`].
//!
//! API Policy
//! - This crate is internal to the chart stack. There is no stable public API;
//!   breaking changes are fine when they improve the drawing call sites.

pub mod draw;
pub mod geom;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Points are plain nalgebra vectors; sizes and anchors carry their own types.
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::draw::{
        draw_aligned_text, draw_anchored_text, draw_image_centered, draw_multiline_text,
        draw_multiline_text_sized, place, Placement, ResizeCache, Surface, TextAlign,
    };
    pub use crate::geom::{
        clamp, decimal_places, deg_to_rad, move_point, normalize_angle, rad_to_deg,
        round_to_next_significant, Anchor, Rect, Size,
    };
    pub use nalgebra::Vector2 as Vec2;
}
