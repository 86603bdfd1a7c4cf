use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use usvg::fontdb::{Database, Family, Query, Stretch, Style, Weight};

/// Read-only font database shared by every overlay in a run.
///
/// Cloning is cheap; clones share one database.
///
/// Text output is byte-identical only for a fixed font set: the faces installed on the machine
/// decide which face a family resolves to, and when nothing matches the resolver takes the
/// first face the database holds. Fonts from extra directories are loaded in path order.
#[derive(Clone, Debug)]
pub struct FontBook {
    db: Arc<Database>,
}

impl Default for FontBook {
    fn default() -> Self {
        Self::system()
    }
}

impl FontBook {
    /// System fonts only.
    pub fn system() -> Self {
        Self::with_dirs(&[])
    }

    /// System fonts plus every `ttf`/`otf`/`ttc` file directly inside each of `dirs` and its
    /// `fonts/` subdirectory. Missing directories are skipped.
    #[tracing::instrument(level = "debug", skip_all, fields(dirs = dirs.len()))]
    pub fn with_dirs(dirs: &[PathBuf]) -> Self {
        let mut db = Database::new();
        db.load_system_fonts();
        for dir in dirs {
            let added =
                load_fonts_from_dir(&mut db, dir) + load_fonts_from_dir(&mut db, &dir.join("fonts"));
            tracing::debug!(dir = %dir.display(), added, "loaded font directory");
        }
        tracing::debug!(faces = db.len(), "font database ready");
        Self { db: Arc::new(db) }
    }

    /// A database with no faces. Text nodes then render nothing.
    pub fn empty() -> Self {
        Self {
            db: Arc::new(Database::new()),
        }
    }

    pub fn face_count(&self) -> usize {
        self.db.len()
    }

    /// Parse options wired to this database and the sans-serif-first resolver.
    pub(crate) fn svg_options(&self) -> usvg::Options<'static> {
        usvg::Options {
            fontdb: Arc::clone(&self.db),
            font_resolver: make_font_resolver(),
            ..Default::default()
        }
    }
}

const FONT_EXTENSIONS: [&str; 3] = ["ttf", "otf", "ttc"];

fn is_font_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| FONT_EXTENSIONS.iter().any(|f| e.eq_ignore_ascii_case(f)))
}

/// Load the font files directly inside `dir` in path order; returns the number of faces added.
fn load_fonts_from_dir(db: &mut Database, dir: &Path) -> usize {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return 0;
    };
    let mut paths: Vec<PathBuf> = entries
        .flatten()
        .map(|e| e.path())
        .filter(|p| is_font_file(p))
        .collect();
    paths.sort();

    let before = db.len();
    for path in &paths {
        if let Err(err) = db.load_font_file(path) {
            tracing::debug!(path = %path.display(), %err, "skipping unreadable font");
        }
    }
    db.len() - before
}

fn query_family(family: &usvg::FontFamily) -> Family<'_> {
    match family {
        usvg::FontFamily::Serif => Family::Serif,
        usvg::FontFamily::SansSerif => Family::SansSerif,
        usvg::FontFamily::Cursive => Family::Cursive,
        usvg::FontFamily::Fantasy => Family::Fantasy,
        usvg::FontFamily::Monospace => Family::Monospace,
        usvg::FontFamily::Named(name) => Family::Name(name.as_str()),
    }
}

fn query_style(style: usvg::FontStyle) -> Style {
    match style {
        usvg::FontStyle::Normal => Style::Normal,
        usvg::FontStyle::Italic => Style::Italic,
        usvg::FontStyle::Oblique => Style::Oblique,
    }
}

/// Requested families, then sans-serif and serif, then the first face in the database.
fn make_font_resolver() -> usvg::FontResolver<'static> {
    usvg::FontResolver {
        select_font: Box::new(|font, db| {
            let mut families: Vec<Family<'_>> = font.families().iter().map(query_family).collect();
            families.extend([Family::SansSerif, Family::Serif]);
            let query = Query {
                families: &families,
                weight: Weight(font.weight()),
                stretch: Stretch::Normal,
                style: query_style(font.style()),
            };
            db.query(&query).or_else(|| db.faces().next().map(|f| f.id))
        }),
        select_fallback: usvg::FontResolver::default_fallback_selector(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/fonts.rs"]
mod tests;
