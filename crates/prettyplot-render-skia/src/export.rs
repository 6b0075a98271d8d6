// File: crates/prettyplot-render-skia/src/export.rs
// Summary: Scene output: CPU raster surfaces (PNG bytes, RGBA8 buffers), SVG and PDF documents.

use std::path::Path;

use prettyplot_core::{ImageFormat, PlotError, PlotResult};
use skia_safe as skia;
use tracing::debug;

use crate::draw;
use crate::scene::Scene;

fn raster(scene: &Scene) -> PlotResult<skia::Surface> {
    let (w, h) = (scene.spec.width_px() as i32, scene.spec.height_px() as i32);
    let mut surface = skia::surfaces::raster_n32_premul((w, h))
        .ok_or_else(|| PlotError::Render(format!("failed to create {w}x{h} raster surface")))?;
    draw::render(scene, surface.canvas());
    Ok(surface)
}

/// Encode the scene as PNG.
pub fn png_bytes(scene: &Scene) -> PlotResult<Vec<u8>> {
    let mut surface = raster(scene)?;
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| PlotError::Render("encode PNG failed".into()))?;
    Ok(data.as_bytes().to_vec())
}

/// Unpremultiplied RGBA pixels: `(pixels, width, height, row_bytes)`.
pub fn rgba8(scene: &Scene) -> PlotResult<(Vec<u8>, u32, u32, usize)> {
    let mut surface = raster(scene)?;
    let (w, h) = (scene.spec.width_px(), scene.spec.height_px());
    let info = skia::ImageInfo::new((w as i32, h as i32), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let row_bytes = w as usize * 4;
    let mut pixels = vec![0u8; row_bytes * h as usize];
    if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
        return Err(PlotError::Render("reading back raster pixels failed".into()));
    }
    Ok((pixels, w, h, row_bytes))
}

/// The scene as a standalone SVG document.
pub fn svg_bytes(scene: &Scene) -> PlotResult<Vec<u8>> {
    let (w, h) = (scene.spec.width_px() as f32, scene.spec.height_px() as f32);
    let canvas = skia::svg::Canvas::new(skia::Rect::from_wh(w, h), None);
    draw::render(scene, &canvas);
    let data = canvas.end();
    Ok(data.as_bytes().to_vec())
}

/// The scene as a single-page PDF document.
pub fn pdf_bytes(scene: &Scene) -> PlotResult<Vec<u8>> {
    let (w, h) = (scene.spec.width_px() as f32, scene.spec.height_px() as f32);
    let mut out = Vec::new();
    {
        let document = skia::pdf::new_document(&mut out, None);
        let mut page = document.begin_page((w, h), None);
        draw::render(scene, page.canvas());
        page.end_page().close();
    }
    if out.is_empty() {
        return Err(PlotError::Render("PDF document is empty".into()));
    }
    Ok(out)
}

/// Write the scene to `path` in `format`, creating parent directories as needed.
pub fn write(scene: &Scene, path: &Path, format: ImageFormat) -> PlotResult<()> {
    let bytes = match format {
        ImageFormat::Png => png_bytes(scene)?,
        ImageFormat::Svg => svg_bytes(scene)?,
        ImageFormat::Pdf => pdf_bytes(scene)?,
    };
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    std::fs::write(path, &bytes)?;
    debug!(path = %path.display(), format = %format, bytes = bytes.len(), "figure written");
    Ok(())
}
