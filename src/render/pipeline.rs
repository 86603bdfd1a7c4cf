use std::path::PathBuf;

use rayon::prelude::*;

use crate::{
    config::model::ImageConfig,
    foundation::error::{BrushworkError, BrushworkResult},
    paint::{layers::paint_layers, palette::Palette},
    render::{
        composite::{Frame, compose},
        fingerprint::FrameFingerprint,
        output::write_png,
    },
    text::{fonts::FontBook, overlay::OverlayRenderer},
};

/// Paint, overlay and composite one image in memory.
///
/// Pipeline:
/// 1. [`ImageConfig::validate`]
/// 2. [`paint_layers`] with the looked-up palette
/// 3. [`OverlayRenderer::render`]
/// 4. [`compose`]
#[tracing::instrument(skip_all, fields(title = %config.title, seed = config.seed))]
pub fn generate(config: &ImageConfig, fonts: &FontBook) -> BrushworkResult<Frame> {
    config.validate(0)?;
    render_validated(config, &OverlayRenderer::new(fonts))
}

/// [`generate`] and write the result to `config.output_path`.
#[tracing::instrument(skip_all, fields(path = %config.output_path.display()))]
pub fn generate_to_file(config: &ImageConfig, fonts: &FontBook) -> BrushworkResult<WrittenImage> {
    config.validate(0)?;
    write_validated(config, &OverlayRenderer::new(fonts))
}

fn render_validated(config: &ImageConfig, renderer: &OverlayRenderer) -> BrushworkResult<Frame> {
    let palette = Palette::lookup(&config.palette_name);
    let canvas = paint_layers(&config.paint_params(), palette);
    let overlay = renderer.render(config, palette)?;
    compose(&canvas, &overlay)
}

fn write_validated(config: &ImageConfig, renderer: &OverlayRenderer) -> BrushworkResult<WrittenImage> {
    let frame = render_validated(config, renderer)?;
    write_png(&frame, &config.output_path)?;
    let written = WrittenImage {
        path: config.output_path.clone(),
        fingerprint: frame.fingerprint(),
    };
    tracing::info!(
        path = %written.path.display(),
        fingerprint = %written.fingerprint,
        "wrote image"
    );
    Ok(written)
}

/// A successfully written image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrittenImage {
    pub path: PathBuf,
    pub fingerprint: FrameFingerprint,
}

/// Result of one batch entry.
#[derive(Debug)]
pub struct ImageOutcome {
    /// Position of the entry in the batch.
    pub index: usize,
    pub output_path: PathBuf,
    pub result: BrushworkResult<WrittenImage>,
}

impl ImageOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Batch execution settings.
#[derive(Clone, Debug, Default)]
pub struct RenderThreading {
    /// Generate entries concurrently on a rayon pool.
    pub parallel: bool,
    /// Pool size; `None` uses rayon's default.
    pub threads: Option<usize>,
}

/// Generate every configuration, in parallel when `threading.parallel` is set.
///
/// Each entry fails independently: a configuration error or a write failure is recorded in that
/// entry's [`ImageOutcome`] and the remaining entries still run. Outcomes are returned in input
/// order. Only an unusable `threading` setting fails the call as a whole.
#[tracing::instrument(skip_all, fields(images = configs.len(), parallel = threading.parallel))]
pub fn generate_batch(
    configs: &[ImageConfig],
    fonts: &FontBook,
    threading: &RenderThreading,
) -> BrushworkResult<Vec<ImageOutcome>> {
    let renderer = OverlayRenderer::new(fonts);

    let outcomes: Vec<ImageOutcome> = if threading.parallel {
        let pool = build_thread_pool(threading.threads)?;
        pool.install(|| {
            configs
                .par_iter()
                .enumerate()
                .map(|(index, config)| run_entry(index, config, &renderer))
                .collect()
        })
    } else {
        configs
            .iter()
            .enumerate()
            .map(|(index, config)| run_entry(index, config, &renderer))
            .collect()
    };

    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    tracing::info!(
        written = outcomes.len() - failed,
        failed,
        "batch finished"
    );
    Ok(outcomes)
}

fn run_entry(index: usize, config: &ImageConfig, renderer: &OverlayRenderer) -> ImageOutcome {
    let result = config
        .validate(index)
        .and_then(|()| write_validated(config, renderer));
    if let Err(err) = &result {
        tracing::warn!(
            index,
            path = %config.output_path.display(),
            error = %err,
            "image failed"
        );
    }
    ImageOutcome {
        index,
        output_path: config.output_path.clone(),
        result,
    }
}

fn build_thread_pool(threads: Option<usize>) -> BrushworkResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(BrushworkError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| BrushworkError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
