use anyhow::{Context, Result};
use black_remover::remove_black_background;
use image::{Rgba, RgbaImage};
use std::{fs, path::PathBuf, time::Instant};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let output_dir = PathBuf::from("./output");
    if !output_dir.exists() {
        fs::create_dir(&output_dir)?;
    }

    // white ring on a black background
    let (width, height) = (256u32, 256u32);
    let img = RgbaImage::from_fn(width, height, |x, y| {
        let dx = x as f32 - width as f32 / 2.0;
        let dy = y as f32 - height as f32 / 2.0;
        let r = (dx * dx + dy * dy).sqrt();
        if (60.0..100.0).contains(&r) {
            Rgba([240, 240, 240, 255])
        } else {
            Rgba([0, 0, 0, 255])
        }
    });

    let input_path = output_dir.join("ring_black.png");
    img.save(&input_path)
        .with_context(|| input_path.to_string_lossy().to_string())?;
    log::info!("Image size: {}x{}", width, height);

    let output_path = output_dir.join("ring_transparent.png");
    let start = Instant::now();
    let summary = remove_black_background(&input_path, &output_path)?;
    log::info!("Remove black background spent: {:?}", start.elapsed());
    log::info!(
        "{} of {} pixels are transparent now",
        summary.replaced_pixels,
        summary.total_pixels
    );

    Ok(())
}
