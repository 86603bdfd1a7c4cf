use crate::{
    foundation::{
        core::{HEIGHT, PremulRgba8, Rgb, WIDTH},
        error::{BrushworkError, BrushworkResult},
    },
    paint::canvas::Canvas,
    render::fingerprint::{FrameFingerprint, fingerprint_frame},
    text::overlay::Overlay,
};

/// Premultiplied source-over.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    match src[3] {
        0 => dst,
        255 => src,
        sa => {
            let inv = 255 - u16::from(sa);
            std::array::from_fn(|i| src[i].saturating_add(mul_div255(u16::from(dst[i]), inv)))
        }
    }
}

/// Blend an RGBA8 `src` buffer over `dst` pixel by pixel. Lengths must match.
pub fn over_in_place(dst: &mut [u8], src: &[u8]) -> BrushworkResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(BrushworkError::render(format!(
            "cannot blend {} overlay bytes onto {} canvas bytes",
            src.len(),
            dst.len()
        )));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

/// Final composited image: opaque RGBA8, `WIDTH x HEIGHT`.
///
/// The destination is opaque, so the premultiplied result equals its straight form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Frame {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

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

    pub fn fingerprint(&self) -> FrameFingerprint {
        fingerprint_frame(self)
    }
}

/// Composite `overlay` over `canvas`.
#[tracing::instrument(level = "debug", skip_all)]
pub fn compose(canvas: &Canvas, overlay: &Overlay) -> BrushworkResult<Frame> {
    if canvas.width() != WIDTH || canvas.height() != HEIGHT {
        return Err(BrushworkError::render(format!(
            "canvas is {}x{}, expected {WIDTH}x{HEIGHT}",
            canvas.width(),
            canvas.height()
        )));
    }
    let mut data = canvas.data().to_vec();
    over_in_place(&mut data, overlay.data())?;
    Ok(Frame {
        width: WIDTH,
        height: HEIGHT,
        data,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
