//! Anchored/rotated placement math and the drawing coordinators.
//!
//! The rotated path always draws as if the content were centered on the
//! rotation origin and moves the pivot with the transform instead: save,
//! translate to the (anchor-adjusted) target, rotate, draw at the negative
//! half-size, restore. That ordering keeps the pivot at the target point
//! rather than at the untransformed surface origin.

use nalgebra::Vector2;
use tracing::trace;

use super::Surface;
use crate::geom::{Anchor, Rect, Size};

/// Horizontal alignment of single-line text relative to its point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Start,
    Center,
    End,
}

/// Resolved placement for one piece of content.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Placement {
    /// Draw directly at `origin`; no surface transform needed.
    Plain { origin: Vector2<f64> },
    /// Save state, translate by `translate`, rotate by `angle_radians`, draw
    /// with the content's top-left at `local_origin`, restore.
    Rotated {
        translate: Vector2<f64>,
        angle_radians: f64,
        local_origin: Vector2<f64>,
    },
}

/// Resolve where `content`-sized material anchored by `anchor` lands when
/// requested at `target` with an optional rotation.
///
/// With zero rotation the origin is `target - content * anchor`,
/// component-wise. With rotation, content is drawn centered on the pivot
/// (local origin at minus half the size) and the pivot itself shifts off the
/// target by `rotated_size * (anchor - 0.5)` when the anchor is off-center;
/// a center anchor leaves the pivot exactly on the target for every angle.
pub fn place(
    target: Vector2<f64>,
    content: Size,
    anchor: Anchor,
    angle_radians: f64,
) -> Placement {
    if angle_radians == 0.0 {
        return Placement::Plain {
            origin: Vector2::new(
                target.x - content.width * anchor.x,
                target.y - content.height * anchor.y,
            ),
        };
    }

    let mut translate = target;
    if !anchor.is_center() {
        let rotated = content.rotated_by(angle_radians);
        translate.x -= rotated.width * (anchor.x - 0.5);
        translate.y -= rotated.height * (anchor.y - 0.5);
    }
    Placement::Rotated {
        translate,
        angle_radians,
        local_origin: Vector2::new(-content.width * 0.5, -content.height * 0.5),
    }
}

/// Draw one line of text at `point` with horizontal alignment.
///
/// Alignment shifts the point left by zero, half, or the full measured width.
/// With zero rotation the shifted point is the draw origin as-is (alignment
/// stands in for the anchor); any other angle defers to the anchor path with
/// the shifted point.
pub fn draw_aligned_text<S: Surface + ?Sized>(
    surface: &mut S,
    text: &str,
    point: Vector2<f64>,
    align: TextAlign,
    anchor: Anchor,
    angle_radians: f64,
    attrs: &S::Attrs,
) {
    let mut point = point;
    match align {
        TextAlign::Start => {}
        TextAlign::Center => point.x -= surface.text_size(text, attrs).width / 2.0,
        TextAlign::End => point.x -= surface.text_size(text, attrs).width,
    }
    if angle_radians == 0.0 {
        trace!(x = point.x, y = point.y, "aligned text");
        surface.draw_text_at(text, point, attrs);
    } else {
        draw_anchored_text(surface, text, point, anchor, angle_radians, attrs);
    }
}

/// Draw one line of text anchored at `point`, optionally rotated.
pub fn draw_anchored_text<S: Surface + ?Sized>(
    surface: &mut S,
    text: &str,
    point: Vector2<f64>,
    anchor: Anchor,
    angle_radians: f64,
    attrs: &S::Attrs,
) {
    let size = surface.text_size(text, attrs);
    match place(point, size, anchor, angle_radians) {
        Placement::Plain { origin } => {
            trace!(x = origin.x, y = origin.y, "anchored text");
            surface.draw_text_at(text, origin, attrs);
        }
        Placement::Rotated {
            translate,
            angle_radians,
            local_origin,
        } => {
            trace!(
                x = translate.x,
                y = translate.y,
                angle_radians,
                "rotated text"
            );
            surface.save();
            surface.translate(translate);
            surface.rotate(angle_radians);
            surface.draw_text_at(text, local_origin, attrs);
            surface.restore();
        }
    }
}

/// Draw a paragraph anchored at `point`, measuring it against `constraint`
/// first.
pub fn draw_multiline_text<S: Surface + ?Sized>(
    surface: &mut S,
    text: &str,
    point: Vector2<f64>,
    constraint: Size,
    anchor: Anchor,
    angle_radians: f64,
    attrs: &S::Attrs,
) {
    let known_size = surface.wrapped_text_size(text, constraint, attrs);
    draw_multiline_text_sized(surface, text, point, anchor, known_size, angle_radians, attrs);
}

/// Draw a paragraph whose laid-out size the caller already knows.
pub fn draw_multiline_text_sized<S: Surface + ?Sized>(
    surface: &mut S,
    text: &str,
    point: Vector2<f64>,
    anchor: Anchor,
    known_size: Size,
    angle_radians: f64,
    attrs: &S::Attrs,
) {
    match place(point, known_size, anchor, angle_radians) {
        Placement::Plain { origin } => {
            trace!(x = origin.x, y = origin.y, "multiline text");
            surface.draw_wrapped_text(text, Rect::new(origin, known_size), attrs);
        }
        Placement::Rotated {
            translate,
            angle_radians,
            local_origin,
        } => {
            trace!(
                x = translate.x,
                y = translate.y,
                angle_radians,
                "rotated multiline text"
            );
            surface.save();
            surface.translate(translate);
            surface.rotate(angle_radians);
            surface.draw_wrapped_text(text, Rect::new(local_origin, known_size), attrs);
            surface.restore();
        }
    }
}

/// Draw `image` centered on `center` at `size`.
///
/// At native size the image draws directly; otherwise the surface is asked
/// for a scaled draw and may serve the resample from its cache.
pub fn draw_image_centered<S: Surface + ?Sized>(
    surface: &mut S,
    image: &S::Image,
    center: Vector2<f64>,
    size: Size,
) {
    let origin = Vector2::new(center.x - size.width / 2.0, center.y - size.height / 2.0);
    if surface.image_size(image) == size {
        trace!(x = origin.x, y = origin.y, "image at native size");
        surface.draw_image_at(image, origin);
    } else {
        trace!(
            x = origin.x,
            y = origin.y,
            width = size.width,
            height = size.height,
            "scaled image"
        );
        surface.draw_image_scaled(image, Rect::new(origin, size));
    }
}
