//! Opt-in line-art decorations drawn beneath the text block.
//!
//! Like the rest of the overlay they consume no stream values: every shape is fixed geometry
//! anchored to the canvas edges.

use std::{f64::consts::PI, fmt::Write as _};

use kurbo::{Circle, Rect};

use crate::{
    config::model::{ImageConfig, Pattern},
    foundation::core::{HEIGHT, Point, Rgb, WIDTH},
};

pub const GRID_SPACING: u32 = 40;
pub const GRID_ALPHA: u8 = 20;

pub const PATTERN_ALPHA: u8 = 60;
pub const PATTERN_STROKE_WIDTH: f64 = 2.0;

/// Concentric rings around a point inset from the bottom-right corner.
pub const RING_INSET: f64 = 100.0;
pub const RING_STEP: u32 = 50;
pub const RING_LIMIT: u32 = 400;

pub const SPIRAL_INSET: f64 = 150.0;
/// Radius gained per radian of sweep.
pub const SPIRAL_GROWTH: f64 = 2.25;
pub const SPIRAL_MAX_RADIUS: f64 = 300.0;
pub const SPIRAL_MAX_ANGLE: f64 = 8.0 * PI;
pub const SPIRAL_ANGLE_STEP: f64 = 0.1;

pub const WAVE_COUNT: u32 = 3;
pub const WAVE_SAMPLE_STEP: u32 = 5;
/// Wave centerline distance from the bottom edge.
pub const WAVE_BASELINE_INSET: f64 = 150.0;
pub const WAVE_AMPLITUDE: f64 = 80.0;
pub const WAVE_PERIOD_SCALE: f64 = 60.0;
pub const WAVE_PHASE_SHIFT: f64 = 100.0;

pub const HEXAGON_INSET: f64 = 250.0;
pub const HEXAGON_SIZE: f64 = 120.0;

pub const ACCENT_BAR_HEIGHT: f64 = 8.0;

/// Hairline grid over the whole canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Grid {
    pub spacing: u32,
    pub color: Rgb,
    pub opacity: f64,
}

impl Grid {
    /// X positions of the vertical lines, starting at the left edge.
    pub fn columns(&self) -> impl Iterator<Item = u32> {
        (0..WIDTH).step_by(self.spacing.max(1) as usize)
    }

    /// Y positions of the horizontal lines, starting at the top edge.
    pub fn rows(&self) -> impl Iterator<Item = u32> {
        (0..HEIGHT).step_by(self.spacing.max(1) as usize)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Ring(Circle),
    Polyline(Vec<Point>),
}

/// Stroked figure for one [`Pattern`].
#[derive(Clone, Debug, PartialEq)]
pub struct PatternFigure {
    pub kind: Pattern,
    pub shapes: Vec<Shape>,
    pub color: Rgb,
    pub opacity: f64,
}

impl PatternFigure {
    pub fn new(kind: Pattern, color: Rgb) -> Self {
        let shapes = match kind {
            Pattern::Circles => rings(),
            Pattern::Spiral => vec![Shape::Polyline(spiral())],
            Pattern::Waves => waves(),
            Pattern::Geometric => vec![Shape::Polyline(hexagon())],
        };
        Self {
            kind,
            shapes,
            color,
            opacity: f64::from(PATTERN_ALPHA) / 255.0,
        }
    }
}

fn corner_anchor(inset: f64) -> Point {
    Point::new(WIDTH as f64 - inset, HEIGHT as f64 - inset)
}

fn rings() -> Vec<Shape> {
    let center = corner_anchor(RING_INSET);
    (RING_STEP..RING_LIMIT)
        .step_by(RING_STEP as usize)
        .map(|r| Shape::Ring(Circle::new(center, f64::from(r))))
        .collect()
}

fn spiral() -> Vec<Point> {
    let center = corner_anchor(SPIRAL_INSET);
    let mut points = Vec::new();
    for i in 0u32.. {
        let angle = f64::from(i) * SPIRAL_ANGLE_STEP;
        let radius = SPIRAL_GROWTH * angle;
        if angle >= SPIRAL_MAX_ANGLE || radius > SPIRAL_MAX_RADIUS {
            break;
        }
        points.push(Point::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        ));
    }
    points
}

fn waves() -> Vec<Shape> {
    let baseline = HEIGHT as f64 - WAVE_BASELINE_INSET;
    (0..WAVE_COUNT)
        .map(|k| {
            let phase = f64::from(k) * WAVE_PHASE_SHIFT;
            let points = (0..WIDTH)
                .step_by(WAVE_SAMPLE_STEP as usize)
                .map(|x| {
                    let x = f64::from(x);
                    Point::new(
                        x,
                        baseline + ((x + phase) / WAVE_PERIOD_SCALE).sin() * WAVE_AMPLITUDE,
                    )
                })
                .collect();
            Shape::Polyline(points)
        })
        .collect()
}

/// Closed hexagon: seven points, the last repeating the first.
fn hexagon() -> Vec<Point> {
    let center = corner_anchor(HEXAGON_INSET);
    (0..7)
        .map(|i| {
            let angle = PI / 3.0 * f64::from(i);
            Point::new(
                center.x + HEXAGON_SIZE * angle.cos(),
                center.y + HEXAGON_SIZE * angle.sin(),
            )
        })
        .collect()
}

/// Every decoration a configuration enables.
#[derive(Clone, Debug, PartialEq)]
pub struct Decorations {
    pub grid: Option<Grid>,
    pub pattern: Option<PatternFigure>,
    pub accent_bar: Option<Rect>,
    pub accent_color: Rgb,
}

impl Decorations {
    /// `line_color` tints the grid; `accent` tints the pattern and the bar.
    pub fn compute(config: &ImageConfig, line_color: Rgb, accent: Rgb) -> Self {
        Self {
            grid: config.grid.then_some(Grid {
                spacing: GRID_SPACING,
                color: line_color,
                opacity: f64::from(GRID_ALPHA) / 255.0,
            }),
            pattern: config.pattern.map(|kind| PatternFigure::new(kind, accent)),
            accent_bar: config
                .accent_bar
                .then(|| Rect::new(0.0, 0.0, WIDTH as f64, ACCENT_BAR_HEIGHT)),
            accent_color: accent,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.grid.is_none() && self.pattern.is_none() && self.accent_bar.is_none()
    }

    /// Append the decorations as SVG elements, grid first and bar last.
    pub(crate) fn push_svg(&self, out: &mut String) {
        if let Some(grid) = &self.grid {
            // Half-pixel offsets keep each hairline on a single pixel row or column.
            let mut d = String::new();
            for x in grid.columns() {
                let _ = write!(d, "M{}.5 0V{HEIGHT}", x);
            }
            for y in grid.rows() {
                let _ = write!(d, "M0 {}.5H{WIDTH}", y);
            }
            let _ = write!(
                out,
                r##"<path d="{d}" fill="none" stroke="#{}" stroke-width="1" stroke-opacity="{:.4}"/>"##,
                grid.color.to_hex(),
                grid.opacity,
            );
        }

        if let Some(figure) = &self.pattern {
            let _ = write!(
                out,
                r##"<g fill="none" stroke="#{}" stroke-width="{PATTERN_STROKE_WIDTH}" stroke-opacity="{:.4}" stroke-linejoin="round">"##,
                figure.color.to_hex(),
                figure.opacity,
            );
            for shape in &figure.shapes {
                match shape {
                    Shape::Ring(c) => {
                        let _ = write!(
                            out,
                            r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}"/>"#,
                            c.center.x, c.center.y, c.radius
                        );
                    }
                    Shape::Polyline(points) if points.len() > 1 => {
                        out.push_str(r#"<polyline points=""#);
                        for (i, p) in points.iter().enumerate() {
                            if i > 0 {
                                out.push(' ');
                            }
                            let _ = write!(out, "{:.2},{:.2}", p.x, p.y);
                        }
                        out.push_str(r#""/>"#);
                    }
                    Shape::Polyline(_) => {}
                }
            }
            out.push_str("</g>");
        }

        if let Some(bar) = self.accent_bar {
            let _ = write!(
                out,
                r##"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="#{}"/>"##,
                bar.x0,
                bar.y0,
                bar.width(),
                bar.height(),
                self.accent_color.to_hex(),
            );
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/decor.rs"]
mod tests;
