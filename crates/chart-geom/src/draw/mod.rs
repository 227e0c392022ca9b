//! Anchored drawing of text and images.
//!
//! Purpose
//! - Turn a logical placement request (content + target point + anchor +
//!   optional rotation) into the exact origin, or translate/rotate transform
//!   sequence, an external [`Surface`] consumes.
//! - Keep this module stateless: each call is one pure computation followed
//!   by delegation; nothing is retained between calls.
//!
//! Why a trait seam
//! - Text measurement, paragraph layout, and resampling are owned by the host
//!   2D context (Core Graphics, tiny-skia, a test recorder, ...); the seam
//!   keeps this crate free of any concrete backend.
//!
//! Code cross-refs: `geom::{Size, Anchor, Rect}`, `Size::rotated_by`.

mod cache;
mod place;
mod surface;

pub use cache::ResizeCache;
pub use place::{
    draw_aligned_text, draw_anchored_text, draw_image_centered, draw_multiline_text,
    draw_multiline_text_sized, place, Placement, TextAlign,
};
pub use surface::Surface;
