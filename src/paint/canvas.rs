use crate::{
    foundation::core::{HEIGHT, Point, Rgb, WIDTH},
    paint::stream::NumberStream,
};

/// Extra pixels scanned around a blob's nominal radii so the soft edge is not clipped.
pub const BLOB_MARGIN_PX: f64 = 20.0;
/// Normalized elliptical distance beyond which a blob has no influence.
pub const BLOB_REACH: f64 = 1.3;
/// Peak-to-peak width of the per-pixel alpha perturbation.
pub const BLOB_ALPHA_JITTER: f64 = 0.15;

/// One soft-edged elliptical stamp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Blob {
    pub center: Point,
    pub radius_x: f64,
    pub radius_y: f64,
    pub color: Rgb,
    /// Peak opacity at the center, in `[0, 1]`.
    pub alpha: f64,
}

/// Opaque RGBA8 paint surface, row-major with a top-left origin.
///
/// The alpha channel stays 255 for the whole painting phase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// A black `WIDTH x HEIGHT` canvas.
    pub fn new() -> Self {
        Self::with_size(WIDTH, HEIGHT)
    }

    pub(crate) fn with_size(width: u32, height: u32) -> Self {
        let mut data = vec![0u8; (width as usize) * (height as usize) * 4];
        for px in data.chunks_exact_mut(4) {
            px[3] = 255;
        }
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// RGB value at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        Some(Rgb::new(
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
        ))
    }

    /// Set every pixel to `color`.
    pub fn fill(&mut self, color: Rgb) {
        let px = color.to_rgba8();
        for dst in self.data.chunks_exact_mut(4) {
            dst.copy_from_slice(&px);
        }
    }

    /// Paint a soft blob over the current contents.
    ///
    /// Every pixel whose normalized elliptical distance `d` is below [`BLOB_REACH`] draws one
    /// stream value, in row-major order, to perturb `max(0, 1 - d) * alpha`. Degenerate or
    /// fully off-canvas blobs draw nothing.
    pub fn stamp_blob(&mut self, stream: &mut NumberStream, blob: Blob) {
        let Blob {
            center,
            radius_x: rx,
            radius_y: ry,
            color,
            alpha,
        } = blob;
        if !(rx > 0.0 && ry > 0.0 && rx.is_finite() && ry.is_finite())
            || !(center.x.is_finite() && center.y.is_finite())
        {
            return;
        }

        let Some((x0, x1)) = clamp_span(center.x, rx, self.width) else {
            return;
        };
        let Some((y0, y1)) = clamp_span(center.y, ry, self.height) else {
            return;
        };

        let [cr, cg, cb] = color.channels_f64();
        let stride = (self.width as usize) * 4;
        for y in y0..=y1 {
            let dy = (y as f64 - center.y) / ry;
            let row = &mut self.data[y * stride..(y + 1) * stride];
            for x in x0..=x1 {
                let dx = (x as f64 - center.x) / rx;
                let d = (dx * dx + dy * dy).sqrt();
                if d >= BLOB_REACH {
                    continue;
                }
                let strength = (1.0 - d).max(0.0) * alpha;
                let a = (strength + (stream.next() - 0.5) * BLOB_ALPHA_JITTER).clamp(0.0, 1.0);

                let px = &mut row[x * 4..x * 4 + 3];
                px[0] = blend_channel(px[0], cr, a);
                px[1] = blend_channel(px[1], cg, a);
                px[2] = blend_channel(px[2], cb, a);
            }
        }
    }

    /// Add one shared noise value in `[-amplitude, amplitude)` to the RGB channels of every
    /// pixel, row-major, clamping to `[0, 255]`.
    pub fn apply_grain(&mut self, stream: &mut NumberStream, amplitude: f64) {
        for px in self.data.chunks_exact_mut(4) {
            let delta = (stream.next() - 0.5) * 2.0 * amplitude;
            for c in &mut px[..3] {
                *c = (f64::from(*c) + delta).round().clamp(0.0, 255.0) as u8;
            }
        }
    }
}

/// Inclusive pixel span covered by `center +- (radius + margin)`, clamped to `[0, len)`.
fn clamp_span(center: f64, radius: f64, len: u32) -> Option<(usize, usize)> {
    if len == 0 {
        return None;
    }
    let lo = ((center - radius - BLOB_MARGIN_PX).floor() as i64).max(0);
    let hi = ((center + radius + BLOB_MARGIN_PX).ceil() as i64).min(i64::from(len) - 1);
    if lo > hi {
        return None;
    }
    Some((lo as usize, hi as usize))
}

fn blend_channel(dst: u8, src: f64, a: f64) -> u8 {
    (f64::from(dst) * (1.0 - a) + src * a)
        .round()
        .clamp(0.0, 255.0) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/paint/canvas.rs"]
mod tests;
