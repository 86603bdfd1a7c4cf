use crate::foundation::error::{BrushworkError, BrushworkResult};

pub use kurbo::{Point, Vec2};

/// Output width in pixels. Every generated image has exactly this width.
pub const WIDTH: u32 = 1200;
/// Output height in pixels. Every generated image has exactly this height.
pub const HEIGHT: u32 = 630;

/// Premultiplied RGBA8 pixel, the interchange format between overlay and compositor.
pub type PremulRgba8 = [u8; 4];

/// Opaque 8-bit sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Build a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Compile-time hex constructor for static tables.
    ///
    /// Accepts `RRGGBB` with an optional leading `#`. Invalid input is a const-evaluation
    /// failure, so it is only used to initialize `const`/`static` data.
    pub(crate) const fn hex(s: &str) -> Self {
        const fn nibble(c: u8) -> u8 {
            match c {
                b'0'..=b'9' => c - b'0',
                b'a'..=b'f' => c - b'a' + 10,
                b'A'..=b'F' => c - b'A' + 10,
                _ => panic!("invalid hex digit in color literal"),
            }
        }

        let b = s.as_bytes();
        let off = if !b.is_empty() && b[0] == b'#' { 1 } else { 0 };
        if b.len() != off + 6 {
            panic!("color literal must be RRGGBB");
        }
        Self {
            r: (nibble(b[off]) << 4) | nibble(b[off + 1]),
            g: (nibble(b[off + 2]) << 4) | nibble(b[off + 3]),
            b: (nibble(b[off + 4]) << 4) | nibble(b[off + 5]),
        }
    }

    /// Parse `RRGGBB` or `#RRGGBB` (case-insensitive).
    pub fn from_hex(s: &str) -> BrushworkResult<Self> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if s.len() != 6 || !s.is_ascii() {
            return Err(BrushworkError::validation(format!(
                "hex color must be #RRGGBB, got \"{s}\""
            )));
        }

        fn hex_byte(pair: &str) -> BrushworkResult<u8> {
            u8::from_str_radix(pair, 16)
                .map_err(|_| BrushworkError::validation(format!("invalid hex byte \"{pair}\"")))
        }

        Ok(Self {
            r: hex_byte(&s[0..2])?,
            g: hex_byte(&s[2..4])?,
            b: hex_byte(&s[4..6])?,
        })
    }

    /// Lowercase `RRGGBB` form without the leading `#`.
    pub fn to_hex(self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// The color as an opaque RGBA8 pixel.
    pub fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }

    /// Channels as floats, in `r, g, b` order.
    pub fn channels_f64(self) -> [f64; 3] {
        [f64::from(self.r), f64::from(self.g), f64::from(self.b)]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
