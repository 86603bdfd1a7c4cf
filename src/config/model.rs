use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{
    foundation::{
        core::Rgb,
        error::{BrushworkError, BrushworkResult},
    },
    paint::palette::PaletteName,
};

pub const DEFAULT_SEED: i64 = 1;
pub const DEFAULT_DENSITY: u32 = 15;
pub const DEFAULT_SWATH_COUNT: u32 = 4;
pub const DEFAULT_TITLE_SIZE: u32 = 72;
pub const DEFAULT_OUTPUT_PATH: &str = "og-image.png";
/// Accepted title font sizes, in pixels.
pub const TITLE_SIZE_RANGE: std::ops::RangeInclusive<u32> = 8..=200;

/// Orientation bias of gestural strokes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Long near-horizontal strokes crossing the canvas.
    Horizontal,
    /// Long near-vertical strokes crossing the canvas.
    Vertical,
    /// Uniformly random angles and lengths.
    #[default]
    Mixed,
}

/// Stroked line pattern in the lower right of the overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    /// Concentric rings.
    Circles,
    /// Archimedean spiral.
    Spiral,
    /// Three phase-shifted sine waves across the full width.
    Waves,
    /// A single hexagon outline.
    Geometric,
}

/// Vertical anchor of the title block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextPosition {
    #[default]
    Top,
    Bottom,
}

impl TextPosition {
    /// The anchor opposite this one; the caption sits there.
    pub fn opposite(self) -> Self {
        match self {
            TextPosition::Top => TextPosition::Bottom,
            TextPosition::Bottom => TextPosition::Top,
        }
    }
}

/// Per-image drawing configuration.
///
/// Every field has a default; deserialized configurations fill missing keys from
/// [`ImageConfig::default`]. `title` is required and checked by [`ImageConfig::validate`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageConfig {
    pub title: String,
    pub subtitle: Option<String>,
    #[serde(alias = "palette")]
    pub palette_name: String,
    /// Any signed 64-bit value; negative seeds select stream states at and above `2^63`.
    pub seed: i64,
    /// Number of gestural strokes.
    pub density: u32,
    /// Number of large background blobs.
    pub swath_count: u32,
    pub direction: Direction,
    pub title_size: u32,
    pub text_position: TextPosition,
    pub output_path: PathBuf,
    /// Draw translucent cobalt/accent offset copies under the title.
    pub chromatic_title: bool,
    /// Line pattern drawn beneath the text block.
    pub pattern: Option<Pattern>,
    /// Hairline grid over the whole canvas.
    pub grid: bool,
    /// Solid accent-colored bar along the top edge.
    pub accent_bar: bool,
    /// `#RRGGBB` replacing the palette's first accent in the overlay.
    pub accent_color: Option<String>,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: None,
            palette_name: PaletteName::DEFAULT.as_str().to_owned(),
            seed: DEFAULT_SEED,
            density: DEFAULT_DENSITY,
            swath_count: DEFAULT_SWATH_COUNT,
            direction: Direction::default(),
            title_size: DEFAULT_TITLE_SIZE,
            text_position: TextPosition::default(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            chromatic_title: false,
            pattern: None,
            grid: false,
            accent_bar: false,
            accent_color: None,
        }
    }
}

/// The subset of a configuration that drives the seeded painting passes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaintParams {
    /// Initial stream state.
    pub seed: u64,
    pub density: u32,
    pub swath_count: u32,
    pub direction: Direction,
}

impl ImageConfig {
    /// A default configuration with the given title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Check required fields. `index` identifies the entry in error reports.
    pub fn validate(&self, index: usize) -> BrushworkResult<()> {
        if self.title.trim().is_empty() {
            return Err(BrushworkError::config(index, "title is required"));
        }
        if !TITLE_SIZE_RANGE.contains(&self.title_size) {
            return Err(BrushworkError::config(
                index,
                format!(
                    "titleSize {} is outside {}..={}",
                    self.title_size,
                    TITLE_SIZE_RANGE.start(),
                    TITLE_SIZE_RANGE.end()
                ),
            ));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(BrushworkError::config(index, "outputPath must not be empty"));
        }
        self.accent_override()
            .map_err(|e| BrushworkError::config(index, format!("accentColor: {e}")))?;
        Ok(())
    }

    /// The parsed `accentColor`, if one is set.
    pub fn accent_override(&self) -> BrushworkResult<Option<Rgb>> {
        self.accent_color.as_deref().map(Rgb::from_hex).transpose()
    }

    /// Subtitle text, treating a blank subtitle as absent.
    pub fn subtitle_text(&self) -> Option<&str> {
        self.subtitle
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    pub fn paint_params(&self) -> PaintParams {
        PaintParams {
            seed: self.seed as u64,
            density: self.density,
            swath_count: self.swath_count,
            direction: self.direction,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
