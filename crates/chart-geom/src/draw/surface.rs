//! The external rendering surface contract.

use nalgebra::Vector2;

use crate::geom::{Rect, Size};

/// A 2D drawing context this crate delegates pixels to.
///
/// Implementations own everything glyph- and pixel-shaped: text measurement,
/// paragraph layout, image resampling (and any resize cache, see
/// [`ResizeCache`](crate::draw::ResizeCache)), and the transform stack. The
/// coordinators in [`draw`](crate::draw) only compute where to draw.
///
/// `Attrs` is an opaque styling bag (font, color, paragraph style): it is
/// passed through unmodified, never inspected. `Image` is likewise opaque;
/// the coordinators only ask for its native size.
///
/// Transform-stack contract: `save`/`restore` bracket a `translate` followed
/// by a `rotate`; transforms compose onto the current state the way Core
/// Graphics and tiny-skia transforms do (later calls nest inside earlier
/// ones).
pub trait Surface {
    type Image: ?Sized;
    type Attrs: ?Sized;

    /// Measured extent of a single line of `text` under `attrs`.
    fn text_size(&self, text: &str, attrs: &Self::Attrs) -> Size;

    /// Measured extent of `text` laid out as a paragraph constrained to
    /// `constraint`.
    fn wrapped_text_size(&self, text: &str, constraint: Size, attrs: &Self::Attrs) -> Size;

    /// Draw a single line with its top-left at `origin` in the current
    /// transform.
    fn draw_text_at(&mut self, text: &str, origin: Vector2<f64>, attrs: &Self::Attrs);

    /// Lay out and draw a paragraph inside `rect` in the current transform.
    fn draw_wrapped_text(&mut self, text: &str, rect: Rect, attrs: &Self::Attrs);

    /// Native extent of `image`.
    fn image_size(&self, image: &Self::Image) -> Size;

    /// Draw `image` at native size, top-left at `origin`.
    fn draw_image_at(&mut self, image: &Self::Image, origin: Vector2<f64>);

    /// Draw `image` resampled into `rect`. The surface may serve the resample
    /// from a cache keyed by (image identity, target size); population and
    /// eviction are its business.
    fn draw_image_scaled(&mut self, image: &Self::Image, rect: Rect);

    /// Push the current transform state.
    fn save(&mut self);

    /// Append a translation to the current transform.
    fn translate(&mut self, offset: Vector2<f64>);

    /// Append a rotation (radians, about the current origin) to the current
    /// transform.
    fn rotate(&mut self, radians: f64);

    /// Pop back to the last saved transform state.
    fn restore(&mut self);
}
