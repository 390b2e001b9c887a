use crate::{Error, Result, remover::normalize};
use image::{ImageError, ImageFormat, ImageReader, RgbaImage};
use std::path::Path;

/// Decode an image from disk as RGBA8.
///
/// The format is guessed from the file content, so a mislabelled extension
/// still decodes. Missing, unreadable or undecodable files are `Error::Decode`.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<RgbaImage> {
    let path = path.as_ref();
    let decode_err = |source: ImageError| Error::Decode {
        path: path.to_path_buf(),
        source,
    };

    let image = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| decode_err(ImageError::IoError(e)))?
        .decode()
        .map_err(decode_err)?;

    log::debug!(
        "Decoded {}: {}x{} {:?}",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );

    Ok(normalize(image))
}

/// Encode `image` as PNG regardless of the extension of `path`.
pub fn save_png<P: AsRef<Path>>(image: &RgbaImage, path: P) -> Result<()> {
    let path = path.as_ref();

    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| Error::Encode {
            path: path.to_path_buf(),
            source,
        })?;

    log::debug!("Encoded {}x{} PNG to {}", image.width(), image.height(), path.display());
    Ok(())
}
