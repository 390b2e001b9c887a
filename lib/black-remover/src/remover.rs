use crate::{Error, RemoveConfig, Result, io};
use image::{DynamicImage, Rgba, RgbaImage};
use std::path::Path;

/// Channel value below which R, G and B all count as black
pub const BLACK_THRESHOLD: u8 = 10;

pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveSummary {
    pub width: u32,
    pub height: u32,
    pub total_pixels: usize,
    pub replaced_pixels: usize,
}

#[inline]
pub fn is_near_black(pixel: &Rgba<u8>) -> bool {
    pixel[0] < BLACK_THRESHOLD && pixel[1] < BLACK_THRESHOLD && pixel[2] < BLACK_THRESHOLD
}

/// The pixel itself, or `TRANSPARENT` when it is near black
#[inline]
fn cut_out(pixel: &Rgba<u8>) -> Rgba<u8> {
    if is_near_black(pixel) {
        TRANSPARENT
    } else {
        *pixel
    }
}

/// Map every near-black pixel to `TRANSPARENT`, keeping order and length.
/// Other pixels are copied as is, alpha included.
pub fn transform_pixels(pixels: &[Rgba<u8>]) -> Vec<Rgba<u8>> {
    pixels.iter().map(cut_out).collect()
}

/// Convert any decoded colour type (indexed, gray, rgb, 16 bit...) to RGBA8
pub fn normalize(image: DynamicImage) -> RgbaImage {
    image.into_rgba8()
}

/// Build a new image of the same size with the near-black pixels cut out.
/// Also returns how many pixels were replaced.
pub fn make_transparent(image: &RgbaImage) -> Result<(RgbaImage, usize)> {
    let (width, height) = image.dimensions();
    let mut raw = Vec::with_capacity(image.as_raw().len());
    let mut replaced = 0;

    for pixel in image.pixels() {
        if is_near_black(pixel) {
            replaced += 1;
        }
        raw.extend_from_slice(&cut_out(pixel).0);
    }

    let result = RgbaImage::from_raw(width, height, raw).ok_or_else(|| {
        Error::Unexpected(format!(
            "Failed to reshape transformed pixels into {width}x{height} image"
        ))
    })?;

    Ok((result, replaced))
}

/// Read `input`, make its near-black pixels transparent and write the
/// result to `output` as PNG.
///
/// # Example
/// ```no_run
/// # fn main() -> black_remover::Result<()> {
/// let summary = black_remover::remove_black_background("logo.jpg", "logo_transparent.png")?;
/// println!("{} pixels cleared", summary.replaced_pixels);
/// # Ok(())
/// # }
/// ```
pub fn remove_black_background<P, Q>(input: P, output: Q) -> Result<RemoveSummary>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    remove_black_background_with_config(&RemoveConfig::new(
        input.as_ref(),
        output.as_ref(),
    ))
}

pub fn remove_black_background_with_config(config: &RemoveConfig) -> Result<RemoveSummary> {
    log::info!("Loading image from: {}", config.input.display());
    let image = io::load_image(&config.input)?;

    let (result, replaced_pixels) = make_transparent(&image)?;

    let summary = RemoveSummary {
        width: result.width(),
        height: result.height(),
        total_pixels: result.width() as usize * result.height() as usize,
        replaced_pixels,
    };
    log::info!(
        "Replaced {} of {} pixels ({}x{})",
        summary.replaced_pixels,
        summary.total_pixels,
        summary.width,
        summary.height
    );

    log::info!("Saving result to: {}", config.output.display());
    io::save_png(&result, &config.output)?;

    Ok(summary)
}
