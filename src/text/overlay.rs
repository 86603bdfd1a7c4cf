//! Text overlay: layout, SVG description and rasterization.
//!
//! The overlay consumes no stream values. Every position is a function of the configuration,
//! the palette and the constants below.

use kurbo::{Circle, Rect};

use crate::{
    config::model::{ImageConfig, TextPosition},
    foundation::{
        core::{HEIGHT, Point, Rgb, WIDTH},
        error::{BrushworkError, BrushworkResult},
    },
    paint::palette::Palette,
    text::{decor::Decorations, fonts::FontBook},
};

pub const MARGIN_X: f64 = 50.0;
/// Backdrop top edge for [`TextPosition::Top`].
pub const TOP_ANCHOR_Y: f64 = 80.0;
/// Highest backdrop top edge for [`TextPosition::Bottom`].
pub const BOTTOM_ANCHOR_Y: f64 = HEIGHT as f64 - 200.0;
/// Minimum gap between a bottom-anchored backdrop and the lower canvas edge.
pub const BOTTOM_CLEARANCE: f64 = 20.0;
pub const BACKDROP_PADDING: f64 = 28.0;
pub const BACKDROP_OPACITY: f64 = 0.75;
pub const BACKDROP_CORNER_RADIUS: f64 = 16.0;

pub const TITLE_LINE_HEIGHT: f64 = 1.15;
pub const TITLE_ASCENT: f64 = 0.9;
/// Estimated advance of one bold title glyph per pixel of font size.
pub const TITLE_ADVANCE: f64 = 0.6;

pub const SUBTITLE_SIZE: f64 = 36.0;
pub const SUBTITLE_LINE_HEIGHT: f64 = 1.2;
pub const SUBTITLE_GAP: f64 = 20.0;
pub const SUBTITLE_OPACITY: f64 = 0.7;
pub const SUBTITLE_ADVANCE: f64 = 0.55;

pub const CAPTION: &str = "bensiverly.com";
pub const CAPTION_SIZE: f64 = 32.0;
pub const CAPTION_OPACITY: f64 = 0.85;
/// Caption baseline distance from the canvas edge it is anchored to.
pub const CAPTION_EDGE_OFFSET: f64 = 50.0;
pub const MARKER_RADIUS: f64 = 10.0;
pub const MARKER_GAP: f64 = 14.0;

pub const CHROMATIC_OFFSET: f64 = 3.0;
pub const CHROMATIC_ALPHA: u8 = 80;
pub const COBALT: Rgb = Rgb::hex("0047AB");

pub const LIGHT_TEXT: Rgb = Rgb::hex("F8F8F5");
pub const DARK_TEXT: Rgb = Rgb::hex("141414");

const FONT_FAMILY: &str = "DejaVu Sans, Helvetica, Arial, sans-serif";

/// One line of text anchored at its left baseline point.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub origin: Point,
    pub size: f64,
    pub bold: bool,
    pub color: Rgb,
    pub opacity: f64,
}

/// A translucent offset copy of the title drawn beneath it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChromaticCopy {
    pub dx: f64,
    pub color: Rgb,
    pub opacity: f64,
}

/// Resolved overlay geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayLayout {
    /// Drawn first, beneath the backdrop.
    pub decor: Decorations,
    pub backdrop: Rect,
    pub backdrop_color: Rgb,
    pub title: TextLine,
    pub chromatic: Vec<ChromaticCopy>,
    pub subtitle: Option<TextLine>,
    pub caption: TextLine,
    pub marker: Circle,
    pub marker_color: Rgb,
}

impl OverlayLayout {
    pub fn compute(config: &ImageConfig, palette: &Palette) -> Self {
        let title_size = f64::from(config.title_size);
        let text_color = if palette.is_dark() { LIGHT_TEXT } else { DARK_TEXT };
        // A malformed override is rejected by `ImageConfig::validate`; layout alone ignores it.
        let accent = match config.accent_override() {
            Ok(Some(c)) => c,
            _ => palette.accent.first().copied().unwrap_or(COBALT),
        };
        let subtitle = config.subtitle_text();

        let title_chars = config.title.trim().chars().count() as f64;
        let mut content_width = title_chars * title_size * TITLE_ADVANCE;
        let mut height = BACKDROP_PADDING * 2.0 + title_size * TITLE_LINE_HEIGHT;
        if let Some(sub) = subtitle {
            let sub_chars = sub.chars().count() as f64;
            content_width = content_width.max(sub_chars * SUBTITLE_SIZE * SUBTITLE_ADVANCE);
            height += SUBTITLE_GAP + SUBTITLE_SIZE * SUBTITLE_LINE_HEIGHT;
        }
        let width = (content_width + BACKDROP_PADDING * 2.0).min(WIDTH as f64 - MARGIN_X * 2.0);

        let top = match config.text_position {
            TextPosition::Top => TOP_ANCHOR_Y,
            TextPosition::Bottom => {
                BOTTOM_ANCHOR_Y.min(HEIGHT as f64 - BOTTOM_CLEARANCE - height)
            }
        };
        let backdrop = Rect::new(MARGIN_X, top, MARGIN_X + width, top + height);

        let text_x = MARGIN_X + BACKDROP_PADDING;
        let title = TextLine {
            text: config.title.trim().to_owned(),
            origin: Point::new(text_x, top + BACKDROP_PADDING + title_size * TITLE_ASCENT),
            size: title_size,
            bold: true,
            color: text_color,
            opacity: 1.0,
        };

        let subtitle = subtitle.map(|sub| {
            let line_top = top + BACKDROP_PADDING + title_size * TITLE_LINE_HEIGHT + SUBTITLE_GAP;
            TextLine {
                text: sub.to_owned(),
                origin: Point::new(text_x, line_top + SUBTITLE_SIZE * TITLE_ASCENT),
                size: SUBTITLE_SIZE,
                bold: false,
                color: text_color,
                opacity: SUBTITLE_OPACITY,
            }
        });

        let chromatic = if config.chromatic_title {
            let opacity = f64::from(CHROMATIC_ALPHA) / 255.0;
            vec![
                ChromaticCopy {
                    dx: -CHROMATIC_OFFSET,
                    color: COBALT,
                    opacity,
                },
                ChromaticCopy {
                    dx: CHROMATIC_OFFSET,
                    color: accent,
                    opacity,
                },
            ]
        } else {
            Vec::new()
        };

        let caption_baseline = match config.text_position.opposite() {
            TextPosition::Bottom => HEIGHT as f64 - CAPTION_EDGE_OFFSET,
            TextPosition::Top => CAPTION_EDGE_OFFSET + CAPTION_SIZE * TITLE_ASCENT,
        };
        let marker = Circle::new(
            Point::new(MARGIN_X + MARKER_RADIUS, caption_baseline - CAPTION_SIZE * 0.35),
            MARKER_RADIUS,
        );
        let caption = TextLine {
            text: CAPTION.to_owned(),
            origin: Point::new(MARGIN_X + MARKER_RADIUS * 2.0 + MARKER_GAP, caption_baseline),
            size: CAPTION_SIZE,
            bold: false,
            color: text_color,
            opacity: CAPTION_OPACITY,
        };

        Self {
            decor: Decorations::compute(config, text_color, accent),
            backdrop,
            backdrop_color: palette.background,
            title,
            chromatic,
            subtitle,
            caption,
            marker,
            marker_color: accent,
        }
    }

    /// The layout as a standalone `WIDTH x HEIGHT` SVG document.
    pub fn to_svg(&self) -> String {
        let mut out = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}">"#
        );
        self.decor.push_svg(&mut out);
        let b = self.backdrop;
        out.push_str(&format!(
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" rx="{BACKDROP_CORNER_RADIUS}" fill="{}" fill-opacity="{BACKDROP_OPACITY}"/>"#,
            b.x0,
            b.y0,
            b.width(),
            b.height(),
            hex_attr(self.backdrop_color),
        ));
        for copy in &self.chromatic {
            push_text(&mut out, &self.title, copy.dx, copy.color, copy.opacity);
        }
        push_text(&mut out, &self.title, 0.0, self.title.color, self.title.opacity);
        if let Some(sub) = &self.subtitle {
            push_text(&mut out, sub, 0.0, sub.color, sub.opacity);
        }
        out.push_str(&format!(
            r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}"/>"#,
            self.marker.center.x,
            self.marker.center.y,
            self.marker.radius,
            hex_attr(self.marker_color),
        ));
        push_text(
            &mut out,
            &self.caption,
            0.0,
            self.caption.color,
            self.caption.opacity,
        );
        out.push_str("</svg>");
        out
    }
}

fn push_text(out: &mut String, line: &TextLine, dx: f64, color: Rgb, opacity: f64) {
    out.push_str(&format!(
        r#"<text x="{:.2}" y="{:.2}" font-family="{FONT_FAMILY}" font-size="{:.2}" font-weight="{}" fill="{}" fill-opacity="{:.4}">{}</text>"#,
        line.origin.x + dx,
        line.origin.y,
        line.size,
        if line.bold { 700 } else { 400 },
        hex_attr(color),
        opacity,
        escape_xml(&line.text),
    ));
}

fn hex_attr(color: Rgb) -> String {
    format!("#{}", color.to_hex())
}

pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// A rasterized overlay: premultiplied RGBA8, `WIDTH x HEIGHT`, transparent where nothing is
/// drawn.
#[derive(Clone, Debug)]
pub struct Overlay {
    pub layout: OverlayLayout,
    data: Vec<u8>,
}

impl Overlay {
    pub fn width(&self) -> u32 {
        WIDTH
    }

    pub fn height(&self) -> u32 {
        HEIGHT
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Premultiplied pixel at `(x, y)`, or `None` outside the overlay.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= WIDTH || y >= HEIGHT {
            return None;
        }
        let idx = ((y as usize) * (WIDTH as usize) + (x as usize)) * 4;
        let px = self.data.get(idx..idx + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Rasterizes overlay layouts against a shared [`FontBook`].
#[derive(Clone, Debug, Default)]
pub struct OverlayRenderer {
    fonts: FontBook,
}

impl OverlayRenderer {
    pub fn new(fonts: &FontBook) -> Self {
        Self {
            fonts: fonts.clone(),
        }
    }

    #[tracing::instrument(level = "debug", skip_all, fields(title = %config.title))]
    pub fn render(&self, config: &ImageConfig, palette: &Palette) -> BrushworkResult<Overlay> {
        let layout = OverlayLayout::compute(config, palette);
        let data = self.rasterize(&layout.to_svg())?;
        Ok(Overlay { layout, data })
    }

    fn rasterize(&self, svg: &str) -> BrushworkResult<Vec<u8>> {
        let opts = self.fonts.svg_options();
        let tree = usvg::Tree::from_str(svg, &opts)
            .map_err(|e| BrushworkError::render(format!("parse overlay document: {e}")))?;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(WIDTH, HEIGHT)
            .ok_or_else(|| BrushworkError::render("failed to allocate overlay pixmap"))?;
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::identity(),
            &mut pixmap.as_mut(),
        );
        Ok(pixmap.take())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/overlay.rs"]
mod tests;
