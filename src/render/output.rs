use std::{
    path::{Path, PathBuf},
    sync::atomic::{AtomicU64, Ordering},
};

use crate::{
    foundation::error::{BrushworkError, BrushworkResult},
    render::composite::Frame,
};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Write `frame` to `path` as an RGB8 PNG.
///
/// The image is encoded into a temporary file next to `path` and renamed into place, so `path`
/// either keeps its previous contents or holds the complete new image. Missing parent
/// directories are created.
#[tracing::instrument(level = "debug", skip(frame), fields(path = %path.display()))]
pub fn write_png(frame: &Frame, path: &Path) -> BrushworkResult<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&dir).map_err(|e| BrushworkError::io(&dir, e))?;

    let tmp = temp_path_for(&dir, path);
    let mut guard = TempFileGuard(Some(tmp.clone()));

    let rgb = rgb8_bytes(frame);
    image::save_buffer_with_format(
        &tmp,
        &rgb,
        frame.width(),
        frame.height(),
        image::ColorType::Rgb8,
        image::ImageFormat::Png,
    )
    .map_err(|e| match e {
        image::ImageError::IoError(source) => BrushworkError::io(&tmp, source),
        other => BrushworkError::encode(format!("write png '{}': {other}", path.display())),
    })?;

    std::fs::rename(&tmp, path).map_err(|e| BrushworkError::io(path, e))?;
    guard.0 = None;
    Ok(())
}

/// Encode `frame` as PNG bytes in memory.
pub fn encode_png(frame: &Frame) -> BrushworkResult<Vec<u8>> {
    let rgb = rgb8_bytes(frame);
    let mut out = std::io::Cursor::new(Vec::new());
    image::write_buffer_with_format(
        &mut out,
        &rgb,
        frame.width(),
        frame.height(),
        image::ColorType::Rgb8,
        image::ImageFormat::Png,
    )
    .map_err(|e| BrushworkError::encode(e.to_string()))?;
    Ok(out.into_inner())
}

fn rgb8_bytes(frame: &Frame) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(frame.data().len() / 4 * 3);
    for px in frame.data().chunks_exact(4) {
        rgb.extend_from_slice(&px[..3]);
    }
    rgb
}

fn temp_path_for(dir: &Path, path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_owned());
    dir.join(format!(
        ".{name}.{}.{}.tmp",
        std::process::id(),
        TEMP_COUNTER.fetch_add(1, Ordering::Relaxed)
    ))
}

struct TempFileGuard(Option<PathBuf>);

impl Drop for TempFileGuard {
    fn drop(&mut self) {
        if let Some(path) = self.0.take() {
            let _ = std::fs::remove_file(path);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/output.rs"]
mod tests;
