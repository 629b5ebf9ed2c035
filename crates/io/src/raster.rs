use image::{ImageResult, RgbImage};
use std::path::Path;

/// Decodes an image file into an 8-bit RGB buffer.
pub fn load_image(path: impl AsRef<Path>) -> ImageResult<RgbImage> {
    Ok(image::open(path)?.to_rgb8())
}

/// Encodes `image` to `path`, picking the format from the file extension.
/// An existing file is overwritten.
pub fn save_image(image: &RgbImage, path: impl AsRef<Path>) -> ImageResult<()> {
    let path = path.as_ref();
    image.save(path)?;
    log::debug!(
        "saved {}x{} image to {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageError, Rgb};
    use tempfile::tempdir;

    #[test]
    fn png_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("frame.png");
        let mut img = RgbImage::new(4, 3);
        img.put_pixel(1, 2, Rgb([10, 20, 30]));

        save_image(&img, &path).unwrap();
        let loaded = load_image(&path).unwrap();
        assert_eq!(loaded.dimensions(), (4, 3));
        assert_eq!(loaded.get_pixel(1, 2), &Rgb([10, 20, 30]));
    }

    #[test]
    fn save_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("frame.png");
        save_image(&RgbImage::new(2, 2), &path).unwrap();
        save_image(&RgbImage::new(5, 1), &path).unwrap();
        assert_eq!(load_image(&path).unwrap().dimensions(), (5, 1));
    }

    #[test]
    fn save_into_missing_directory_is_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("frame.png");
        let err = save_image(&RgbImage::new(2, 2), &path).unwrap_err();
        assert!(matches!(err, ImageError::IoError(_)));
    }
}
