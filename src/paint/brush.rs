use std::f64::consts::{PI, TAU};

use crate::{
    foundation::core::{Point, Rgb, Vec2},
    paint::{
        canvas::{Blob, Canvas},
        stream::NumberStream,
    },
};

/// Lateral waviness amplitude as a fraction of stroke width.
pub const WAVE_AMPLITUDE: f64 = 0.3;
/// Per-dab positional jitter (peak-to-peak) as a fraction of stroke width.
pub const DAB_JITTER: f64 = 0.15;
/// Vertical radius of a dab relative to its horizontal radius.
pub const DAB_SQUASH: f64 = 0.85;
/// Path length covered by one step.
pub const STEP_PX: f64 = 8.0;
pub const MIN_STEPS: usize = 10;

/// A gestural mark from `from` to `to`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrushStroke {
    pub from: Point,
    pub to: Point,
    /// Full width at the thickest point (the middle of the path).
    pub width: f64,
    pub color: Rgb,
    pub alpha: f64,
}

impl BrushStroke {
    pub fn length(&self) -> f64 {
        (self.to - self.from).hypot()
    }

    /// Number of subdivisions; the path is stamped at `steps + 1` points.
    pub fn steps(&self) -> usize {
        ((self.length() / STEP_PX).floor() as usize).max(MIN_STEPS)
    }
}

/// Stamp a chain of tapered, jittered blobs along the stroke path.
///
/// Per step, two stream values are drawn for the jitter (x then y) before the dab itself is
/// stamped.
pub fn trace_stroke(canvas: &mut Canvas, stream: &mut NumberStream, stroke: BrushStroke) {
    let delta = stroke.to - stroke.from;
    let length = delta.hypot();
    let normal = if length > 0.0 {
        Vec2::new(-delta.y, delta.x) / length
    } else {
        Vec2::new(0.0, 1.0)
    };

    let steps = stroke.steps();
    let half_width = stroke.width * 0.5;
    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        let wave = (t * TAU).sin() * stroke.width * WAVE_AMPLITUDE;
        let jitter = Vec2::new(
            (stream.next() - 0.5) * stroke.width * DAB_JITTER,
            (stream.next() - 0.5) * stroke.width * DAB_JITTER,
        );
        let center = stroke.from.lerp(stroke.to, t) + normal * wave + jitter;

        let taper = (t * PI).sin();
        let radius_x = (half_width * taper).max(1.0);
        let radius_y = (half_width * taper * DAB_SQUASH).max(1.0);
        canvas.stamp_blob(
            stream,
            Blob {
                center,
                radius_x,
                radius_y,
                color: stroke.color,
                alpha: stroke.alpha,
            },
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/paint/brush.rs"]
mod tests;
