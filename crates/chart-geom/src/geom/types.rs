//! Basic drawing-geometry types.
//!
//! - `Size`: axis-aligned extent with the rotated-bound computation.
//! - `Rect`: origin + size, handed to the paragraph renderer.
//! - `Anchor`: fractional reference point within a bounding box.

use nalgebra::Vector2;

/// Axis-aligned extent in surface units. Producers keep both components
/// non-negative; nothing here enforces it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Smallest axis-aligned box containing this box after rotation about its
    /// center. Tight bound, not an estimate:
    /// `(|w·cosθ| + |h·sinθ|, |w·sinθ| + |h·cosθ|)`.
    #[inline]
    pub fn rotated_by(self, radians: f64) -> Size {
        let (sin, cos) = radians.sin_cos();
        Size {
            width: (self.width * cos).abs() + (self.height * sin).abs(),
            height: (self.width * sin).abs() + (self.height * cos).abs(),
        }
    }

    /// Degree-flavored convenience over [`Size::rotated_by`].
    #[inline]
    pub fn rotated_by_degrees(self, degrees: f64) -> Size {
        self.rotated_by(super::deg_to_rad(degrees))
    }
}

/// Origin + size rectangle in surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub origin: Vector2<f64>,
    pub size: Size,
}

impl Rect {
    #[inline]
    pub fn new(origin: Vector2<f64>, size: Size) -> Self {
        Self { origin, size }
    }
}

/// Fractional point in [0,1]² relative to a bounding box; `(0.5, 0.5)` is the
/// box center. Used to offset a draw origin relative to content size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    pub x: f64,
    pub y: f64,
}

impl Anchor {
    pub const CENTER: Anchor = Anchor { x: 0.5, y: 0.5 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_center(self) -> bool {
        self == Self::CENTER
    }
}

impl Default for Anchor {
    fn default() -> Self {
        Self::CENTER
    }
}
