//! Brushwork paints deterministic 1200x630 social-card images.
//!
//! A seed and a handful of style parameters drive a fixed sequence of painting passes (soft
//! swaths, tapered brushstrokes, highlights, splashes, grain) over an opaque canvas. A
//! separately laid out text overlay is composited on top and the result is written as a PNG.
//!
//! - Describe an image with [`ImageConfig`]
//! - Produce pixels with [`generate`] or write files with [`generate_to_file`] /
//!   [`generate_batch`]
//!
//! The same configuration always yields byte-identical pixels.
#![forbid(unsafe_code)]

mod foundation;

pub mod config;
pub mod paint;
pub mod render;
pub mod text;

pub use crate::foundation::core::{HEIGHT, Point, PremulRgba8, Rgb, Vec2, WIDTH};
pub use crate::foundation::error::{BrushworkError, BrushworkResult};

pub use crate::config::batch::{load_batch, parse_batch, rebase_outputs};
pub use crate::config::model::{Direction, ImageConfig, PaintParams, Pattern, TextPosition};
pub use crate::config::presets::{PAGES, PagePreset, site_pages};
pub use crate::paint::canvas::Canvas;
pub use crate::paint::layers::paint_layers;
pub use crate::paint::palette::{Palette, PaletteName};
pub use crate::paint::stream::NumberStream;
pub use crate::render::composite::{Frame, compose};
pub use crate::render::fingerprint::FrameFingerprint;
pub use crate::render::output::{encode_png, write_png};
pub use crate::render::pipeline::{
    ImageOutcome, RenderThreading, WrittenImage, generate, generate_batch, generate_to_file,
};
pub use crate::text::decor::Decorations;
pub use crate::text::fonts::FontBook;
pub use crate::text::overlay::{Overlay, OverlayLayout, OverlayRenderer};
