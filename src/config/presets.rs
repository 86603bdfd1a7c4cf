use std::path::Path;

use crate::config::model::{Direction, ImageConfig, Pattern, TextPosition};

/// One built-in site page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PagePreset {
    /// Short key used on the command line.
    pub key: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub title_size: u32,
    pub file_name: &'static str,
    pub palette: &'static str,
    pub seed: i64,
    pub direction: Direction,
    pub pattern: Pattern,
}

pub static PAGES: [PagePreset; 5] = [
    PagePreset {
        key: "home",
        title: "Ben Siverly",
        subtitle: "Product Manager, Builder, Gardener",
        title_size: 84,
        file_name: "og-home.png",
        palette: "brand",
        seed: 42,
        direction: Direction::Mixed,
        pattern: Pattern::Circles,
    },
    PagePreset {
        key: "life-strategy",
        title: "Life Strategy Matrix",
        subtitle: "Score life areas. See where to invest.",
        title_size: 72,
        file_name: "og-life-strategy.png",
        palette: "ocean",
        seed: 7,
        direction: Direction::Horizontal,
        pattern: Pattern::Geometric,
    },
    PagePreset {
        key: "memorial-pamphlet",
        title: "Memorial Pamphlet",
        subtitle: "Create a dignified memorial pamphlet.",
        title_size: 72,
        file_name: "og-memorial-pamphlet.png",
        palette: "lavender",
        seed: 19,
        direction: Direction::Vertical,
        pattern: Pattern::Waves,
    },
    PagePreset {
        key: "native-plant-finder",
        title: "Native Plant Finder",
        subtitle: "Find plants tailored to your region.",
        title_size: 72,
        file_name: "og-native-plant-finder.png",
        palette: "forest",
        seed: 23,
        direction: Direction::Mixed,
        pattern: Pattern::Spiral,
    },
    PagePreset {
        key: "service-of-life",
        title: "Service of Life Builder",
        subtitle: "Build a liturgy for a memorial.",
        title_size: 66,
        file_name: "og-service-of-life.png",
        palette: "desert",
        seed: 31,
        direction: Direction::Horizontal,
        pattern: Pattern::Waves,
    },
];

impl PagePreset {
    pub fn find(key: &str) -> Option<&'static PagePreset> {
        PAGES.iter().find(|p| p.key.eq_ignore_ascii_case(key.trim()))
    }

    /// Configuration writing this page's image into `out_dir`, with the grid, the page's
    /// pattern and the top accent bar enabled.
    pub fn to_config(&self, out_dir: &Path) -> ImageConfig {
        ImageConfig {
            title: self.title.to_owned(),
            subtitle: Some(self.subtitle.to_owned()),
            palette_name: self.palette.to_owned(),
            seed: self.seed,
            direction: self.direction,
            title_size: self.title_size,
            text_position: TextPosition::Top,
            output_path: out_dir.join(self.file_name),
            pattern: Some(self.pattern),
            grid: true,
            accent_bar: true,
            ..ImageConfig::default()
        }
    }
}

/// Configurations for every built-in page, in site order.
pub fn site_pages(out_dir: &Path) -> Vec<ImageConfig> {
    PAGES.iter().map(|p| p.to_config(out_dir)).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/config/presets.rs"]
mod tests;
