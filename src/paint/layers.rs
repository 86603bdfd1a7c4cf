//! Seeded layer sequencer.
//!
//! A single [`NumberStream`] seeded from the configuration is threaded through every pass in a
//! fixed order:
//!
//! 1. background fill (no draws)
//! 2. swaths
//! 3. gestural strokes
//! 4. accent strokes
//! 5. highlights (skipped when `density == 0`)
//! 6. splashes (skipped when `density == 0`)
//! 7. grain
//!
//! Within a pass, each mark draws its parameters in a documented order before any pixel work.
//! Reordering anything here changes every image produced for a seed.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::{
    config::model::{Direction, PaintParams},
    foundation::core::Point,
    paint::{
        brush::{BrushStroke, trace_stroke},
        canvas::{Blob, Canvas},
        palette::Palette,
        stream::NumberStream,
    },
};

pub const SWATH_RADIUS: (f64, f64) = (100.0, 400.0);
pub const SWATH_ALPHA: (f64, f64) = (0.6, 0.9);

pub const GESTURAL_WIDTH: (f64, f64) = (30.0, 80.0);
pub const GESTURAL_ALPHA: (f64, f64) = (0.55, 0.85);
/// Lengths of mixed-direction gestural strokes.
pub const GESTURAL_LENGTH: (f64, f64) = (150.0, 500.0);
/// Maximum deviation, in radians, from the dominant axis of a biased stroke.
pub const DIRECTION_SPREAD: f64 = 0.25;

pub const ACCENT_WIDTH: (f64, f64) = (10.0, 35.0);
pub const ACCENT_LENGTH: (f64, f64) = (80.0, 280.0);
pub const ACCENT_ALPHA: (f64, f64) = (0.6, 0.9);

pub const HIGHLIGHT_COUNT: (u32, u32) = (6, 12);
pub const HIGHLIGHT_WIDTH: (f64, f64) = (5.0, 17.0);
pub const HIGHLIGHT_LENGTH: (f64, f64) = (40.0, 160.0);
pub const HIGHLIGHT_ALPHA: (f64, f64) = (0.5, 0.8);

pub const SPLASH_COUNT: (u32, u32) = (3, 7);
pub const SPLASH_RADIUS: (f64, f64) = (15.0, 60.0);
pub const SPLASH_ALPHA: (f64, f64) = (0.7, 0.95);

/// Grain amplitude in channel units (noise spans `[-7.5, 7.5)`).
pub const GRAIN_AMPLITUDE: f64 = 7.5;

/// Paint a full canvas for `params` using `palette`.
#[tracing::instrument(level = "debug", skip(palette), fields(palette = palette.name.as_str()))]
pub fn paint_layers(params: &PaintParams, palette: &Palette) -> Canvas {
    let mut stream = NumberStream::new(params.seed);
    let mut canvas = Canvas::new();

    canvas.fill(palette.background);
    tracing::debug!(layer = "background", drawn = stream.drawn());

    paint_swaths(&mut canvas, &mut stream, palette, params.swath_count);
    tracing::debug!(layer = "swaths", count = params.swath_count, drawn = stream.drawn());

    paint_gestural(
        &mut canvas,
        &mut stream,
        palette,
        params.density,
        params.direction,
    );
    tracing::debug!(layer = "gestural", count = params.density, drawn = stream.drawn());

    let accents = params.density / 2;
    paint_accents(&mut canvas, &mut stream, palette, accents, params.direction);
    tracing::debug!(layer = "accents", count = accents, drawn = stream.drawn());

    if params.density > 0 {
        let highlights = paint_highlights(&mut canvas, &mut stream, palette, params.direction);
        tracing::debug!(layer = "highlights", count = highlights, drawn = stream.drawn());

        let splashes = paint_splashes(&mut canvas, &mut stream, palette);
        tracing::debug!(layer = "splashes", count = splashes, drawn = stream.drawn());
    }

    canvas.apply_grain(&mut stream, GRAIN_AMPLITUDE);
    tracing::debug!(layer = "grain", drawn = stream.drawn());

    canvas
}

/// Large soft elliptical blobs.
///
/// Draws per swath: color, center x, center y, radius x, radius y, alpha.
pub fn paint_swaths(canvas: &mut Canvas, stream: &mut NumberStream, palette: &Palette, count: u32) {
    let (w, h) = dims(canvas);
    for _ in 0..count {
        let Some(&color) = stream.pick(palette.primary) else {
            return;
        };
        let center = Point::new(stream.range(0.0, w), stream.range(0.0, h));
        let radius_x = range(stream, SWATH_RADIUS);
        let radius_y = range(stream, SWATH_RADIUS);
        let alpha = range(stream, SWATH_ALPHA);
        canvas.stamp_blob(
            stream,
            Blob {
                center,
                radius_x,
                radius_y,
                color,
                alpha,
            },
        );
    }
}

/// Wide gestural strokes drawn from the primary and accent colors.
///
/// Draws per stroke: color, width, alpha, then the path (see [`gestural_path`]).
pub fn paint_gestural(
    canvas: &mut Canvas,
    stream: &mut NumberStream,
    palette: &Palette,
    count: u32,
    direction: Direction,
) {
    let pool = palette.gestural_colors();
    let (w, h) = dims(canvas);
    for _ in 0..count {
        let Some(&color) = stream.pick(&pool) else {
            return;
        };
        let width = range(stream, GESTURAL_WIDTH);
        let alpha = range(stream, GESTURAL_ALPHA);
        let (from, to) = gestural_path(stream, direction, w, h);
        trace_stroke(
            canvas,
            stream,
            BrushStroke {
                from,
                to,
                width,
                color,
                alpha,
            },
        );
    }
}

/// Endpoints of a gestural stroke.
///
/// - horizontal: start y, start x, length, angle; starts left of the canvas and runs most of
///   its width or beyond.
/// - vertical: start x, start y, length, angle; starts above the canvas and runs most of its
///   height or beyond.
/// - mixed: start x, start y, angle, length.
pub fn gestural_path(stream: &mut NumberStream, direction: Direction, w: f64, h: f64) -> (Point, Point) {
    match direction {
        Direction::Horizontal => {
            let y = stream.range(0.0, h);
            let x = stream.range(-150.0, w * 0.25);
            let length = stream.range(w * 0.6, w * 1.1);
            let angle = stream.range(-DIRECTION_SPREAD, DIRECTION_SPREAD);
            let from = Point::new(x, y);
            (from, project(from, angle, length))
        }
        Direction::Vertical => {
            let x = stream.range(0.0, w);
            let y = stream.range(-150.0, h * 0.2);
            let length = stream.range(h * 0.7, h * 1.2);
            let angle = FRAC_PI_2 + stream.range(-DIRECTION_SPREAD, DIRECTION_SPREAD);
            let from = Point::new(x, y);
            (from, project(from, angle, length))
        }
        Direction::Mixed => {
            let from = Point::new(stream.range(0.0, w), stream.range(0.0, h));
            let angle = stream.range(0.0, TAU);
            let length = range(stream, GESTURAL_LENGTH);
            (from, project(from, angle, length))
        }
    }
}

/// Start x, start y, angle, length for a short mark biased by `direction`.
fn short_path(
    stream: &mut NumberStream,
    direction: Direction,
    length: (f64, f64),
    w: f64,
    h: f64,
) -> (Point, Point) {
    let from = Point::new(stream.range(0.0, w), stream.range(0.0, h));
    let angle = match direction {
        Direction::Horizontal => stream.range(-DIRECTION_SPREAD, DIRECTION_SPREAD),
        Direction::Vertical => FRAC_PI_2 + stream.range(-DIRECTION_SPREAD, DIRECTION_SPREAD),
        Direction::Mixed => stream.range(0.0, TAU),
    };
    let length = range(stream, length);
    (from, project(from, angle, length))
}

/// Narrower strokes in accent colors.
///
/// Draws per stroke: color, width, alpha, start x, start y, angle, length.
pub fn paint_accents(
    canvas: &mut Canvas,
    stream: &mut NumberStream,
    palette: &Palette,
    count: u32,
    direction: Direction,
) {
    let (w, h) = dims(canvas);
    for _ in 0..count {
        let Some(&color) = stream.pick(palette.accent) else {
            return;
        };
        let width = range(stream, ACCENT_WIDTH);
        let alpha = range(stream, ACCENT_ALPHA);
        let (from, to) = short_path(stream, direction, ACCENT_LENGTH, w, h);
        trace_stroke(
            canvas,
            stream,
            BrushStroke {
                from,
                to,
                width,
                color,
                alpha,
            },
        );
    }
}

/// Thin light marks. Draws the count first, then per mark the same order as accents.
pub fn paint_highlights(
    canvas: &mut Canvas,
    stream: &mut NumberStream,
    palette: &Palette,
    direction: Direction,
) -> u32 {
    let count = stream.range_int(HIGHLIGHT_COUNT.0, HIGHLIGHT_COUNT.1);
    let (w, h) = dims(canvas);
    for _ in 0..count {
        let Some(&color) = stream.pick(palette.highlight) else {
            return count;
        };
        let width = range(stream, HIGHLIGHT_WIDTH);
        let alpha = range(stream, HIGHLIGHT_ALPHA);
        let (from, to) = short_path(stream, direction, HIGHLIGHT_LENGTH, w, h);
        trace_stroke(
            canvas,
            stream,
            BrushStroke {
                from,
                to,
                width,
                color,
                alpha,
            },
        );
    }
    count
}

/// Round accent-colored dabs.
///
/// Draws the count first, then per splash: color, center x, center y, radius, alpha.
pub fn paint_splashes(canvas: &mut Canvas, stream: &mut NumberStream, palette: &Palette) -> u32 {
    let count = stream.range_int(SPLASH_COUNT.0, SPLASH_COUNT.1);
    let (w, h) = dims(canvas);
    for _ in 0..count {
        let Some(&color) = stream.pick(palette.accent) else {
            return count;
        };
        let center = Point::new(stream.range(0.0, w), stream.range(0.0, h));
        let radius = range(stream, SPLASH_RADIUS);
        let alpha = range(stream, SPLASH_ALPHA);
        canvas.stamp_blob(
            stream,
            Blob {
                center,
                radius_x: radius,
                radius_y: radius,
                color,
                alpha,
            },
        );
    }
    count
}

fn range(stream: &mut NumberStream, (lo, hi): (f64, f64)) -> f64 {
    stream.range(lo, hi)
}

fn project(from: Point, angle: f64, length: f64) -> Point {
    Point::new(from.x + angle.cos() * length, from.y + angle.sin() * length)
}

fn dims(canvas: &Canvas) -> (f64, f64) {
    (f64::from(canvas.width()), f64::from(canvas.height()))
}

#[cfg(test)]
#[path = "../../tests/unit/paint/layers.rs"]
mod tests;
