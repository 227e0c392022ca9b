//! Anchored-label walkthrough against a heuristic surface.
//!
//! Purpose
//! - Show the whole label pipeline end to end: significant-digit rounding
//!   picks tick values, `decimal_places` picks their display precision, and
//!   the coordinators place each label against a surface that just prints
//!   the calls it receives.
//! - The surface measures glyphs at ~0.6em, the usual rough estimate when no
//!   shaping backend is wired up yet.

use chart_geom::prelude::*;
use tracing_subscriber::fmt::SubscriberBuilder;

/// Prints every delegated call; measures text heuristically.
struct PrintSurface {
    font_size: f64,
}

impl Surface for PrintSurface {
    type Image = ();
    type Attrs = str;

    fn text_size(&self, text: &str, _attrs: &str) -> Size {
        Size::new(
            0.6 * self.font_size * text.chars().count() as f64,
            self.font_size,
        )
    }

    fn wrapped_text_size(&self, text: &str, constraint: Size, attrs: &str) -> Size {
        let single = self.text_size(text, attrs);
        if single.width <= constraint.width {
            single
        } else {
            let lines = (single.width / constraint.width).ceil();
            Size::new(constraint.width, single.height * lines)
        }
    }

    fn draw_text_at(&mut self, text: &str, origin: Vec2<f64>, attrs: &str) {
        println!("text {text:?} at ({:.1}, {:.1}) [{attrs}]", origin.x, origin.y);
    }

    fn draw_wrapped_text(&mut self, text: &str, rect: Rect, attrs: &str) {
        println!(
            "paragraph {text:?} in ({:.1}, {:.1}) {:.1}x{:.1} [{attrs}]",
            rect.origin.x, rect.origin.y, rect.size.width, rect.size.height
        );
    }

    fn image_size(&self, _image: &()) -> Size {
        Size::new(0.0, 0.0)
    }

    fn draw_image_at(&mut self, _image: &(), origin: Vec2<f64>) {
        println!("image at ({:.1}, {:.1})", origin.x, origin.y);
    }

    fn draw_image_scaled(&mut self, _image: &(), rect: Rect) {
        println!(
            "scaled image in ({:.1}, {:.1}) {:.1}x{:.1}",
            rect.origin.x, rect.origin.y, rect.size.width, rect.size.height
        );
    }

    fn save(&mut self) {
        println!("save");
    }

    fn translate(&mut self, offset: Vec2<f64>) {
        println!("translate ({:.1}, {:.1})", offset.x, offset.y);
    }

    fn rotate(&mut self, radians: f64) {
        println!("rotate {:.0}°", rad_to_deg(radians));
    }

    fn restore(&mut self) {
        println!("restore");
    }
}

fn main() {
    SubscriberBuilder::default().with_target(false).init();
    let mut surface = PrintSurface { font_size: 12.0 };

    // y-axis ticks from a raw data step, rounded to one significant digit
    let raw_step = 2470.0 / 6.0;
    let step = round_to_next_significant(raw_step);
    let precision = decimal_places(step);
    println!("raw step {raw_step:.1} -> tick step {step} ({precision} decimal places)");

    for i in 0..=4 {
        let value = step * f64::from(i);
        let y = 220.0 - 50.0 * f64::from(i);
        draw_aligned_text(
            &mut surface,
            &format!("{value:.precision$}"),
            Vec2::new(48.0, y),
            TextAlign::End,
            Anchor::CENTER,
            0.0,
            "axis-label",
        );
    }

    // rotated x-axis labels, anchored at their top-right corner
    for (i, label) in ["Q1 2025", "Q2 2025", "Q3 2025"].iter().enumerate() {
        let x = 90.0 + 70.0 * i as f64;
        draw_aligned_text(
            &mut surface,
            label,
            Vec2::new(x, 240.0),
            TextAlign::Start,
            Anchor::new(1.0, 0.0),
            deg_to_rad(-45.0),
            "axis-label",
        );
    }

    // a wrapped annotation centered above a data point
    draw_multiline_text(
        &mut surface,
        "peak demand recorded during rollout",
        Vec2::new(160.0, 60.0),
        Size::new(90.0, 100.0),
        Anchor::new(0.5, 1.0),
        0.0,
        "annotation",
    );
}
