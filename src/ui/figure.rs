use std::path::Path;

use anyhow::{Context, Result};
use eframe::egui::{ColorImage, Pos2, Rect, Vec2};
use image::{ImageFormat, Rgba, RgbaImage};

/// Write a viewport capture as PNG, cropped to `crop` (in points) when given.
///
/// A crop that falls outside the capture is clamped; one that ends up empty
/// saves the whole capture instead.
pub fn save_png(
    capture: &ColorImage,
    crop: Option<Rect>,
    pixels_per_point: f32,
    path: &Path,
) -> Result<()> {
    let [w, h] = capture.size;
    let bounds = Rect::from_min_size(
        Pos2::ZERO,
        Vec2::new(w as f32 / pixels_per_point, h as f32 / pixels_per_point),
    );
    let region = match crop.map(|r| r.intersect(bounds)) {
        Some(r) if r.width() >= 1.0 && r.height() >= 1.0 => {
            capture.region(&r, Some(pixels_per_point))
        }
        _ => capture.clone(),
    };

    let ColorImage {
        size: [rw, rh],
        pixels,
        ..
    } = &region;
    let mut out = RgbaImage::new(*rw as u32, *rh as u32);
    for y in 0..*rh {
        for x in 0..*rw {
            let p = pixels[y * *rw + x];
            out.put_pixel(x as u32, y as u32, Rgba([p.r(), p.g(), p.b(), p.a()]));
        }
    }

    out.save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("writing {}", path.display()))?;
    log::info!("Saved {rw}x{rh} figure to {}", path.display());
    Ok(())
}
