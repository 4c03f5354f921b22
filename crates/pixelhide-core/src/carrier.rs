use std::path::Path;

use image::RgbaImage;
use log::warn;

use crate::error::PixelhideError;
use crate::result::Result;

pub trait Persist {
    fn save_as(&mut self, path: &Path) -> Result<()>;
}

/// The image that carries the hidden payload.
///
/// Wraps the decoded pixel grid for the duration of one inject or extract
/// pass, nothing is retained afterwards.
#[derive(Debug)]
pub struct Carrier {
    image: RgbaImage,
}

impl Carrier {
    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PixelhideError::ImageNotFound(path.to_path_buf()));
        }
        let image = image::open(path)
            .map_err(|_| PixelhideError::InvalidImageMedia(path.to_path_buf()))?
            .to_rgba8();

        Ok(Self { image })
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn image_mut(&mut self) -> &mut RgbaImage {
        &mut self.image
    }
}

impl Persist for Carrier {
    /// Saves the carrier under `path`, the format is taken from the file
    /// extension. Lossy formats get a warning since re-encoding destroys
    /// the LSB data.
    fn save_as(&mut self, path: &Path) -> Result<()> {
        let format = image::ImageFormat::from_path(path)
            .map_err(|_| PixelhideError::UnsupportedOutputFormat(path.to_path_buf()))?;

        let result = match format {
            image::ImageFormat::Jpeg => {
                warn!("writing to a JPEG file can often cause problems due to the lossy compression used");
                warn!("if extracting data from the resulting image fails, try another file format");
                // the jpeg encoder has no alpha support
                image::DynamicImage::ImageRgba8(self.image.clone())
                    .to_rgb8()
                    .save(path)
            }
            _ => self.image.save(path),
        };

        result.map_err(|e| match e {
            image::ImageError::IoError(source) => PixelhideError::WriteError { source },
            other => PixelhideError::WriteError {
                source: std::io::Error::new(std::io::ErrorKind::Other, other),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::prepare_gradient_image;
    use tempfile::TempDir;

    #[test]
    fn should_fail_for_a_missing_image_file() {
        match Carrier::from_file(Path::new("no_such_image.png")) {
            Err(PixelhideError::ImageNotFound(_)) => (),
            other => panic!("expected ImageNotFound, got {other:?}"),
        }
    }

    #[test]
    fn should_fail_for_a_file_that_is_not_an_image() {
        match Carrier::from_file(Path::new("Cargo.toml")) {
            Err(PixelhideError::InvalidImageMedia(_)) => (),
            other => panic!("expected InvalidImageMedia, got {other:?}"),
        }
    }

    #[test]
    fn should_reject_an_output_path_without_an_image_extension() {
        let mut carrier = Carrier::from_image(prepare_gradient_image(4, 4));
        match carrier.save_as(Path::new("/tmp/no-extension")) {
            Err(PixelhideError::UnsupportedOutputFormat(_)) => (),
            other => panic!("expected UnsupportedOutputFormat, got {other:?}"),
        }
    }

    #[test]
    fn should_save_and_reload_a_png_losslessly() {
        let out_dir = TempDir::new().unwrap();
        let path = out_dir.path().join("carrier.png");

        let image = prepare_gradient_image(8, 8);
        let mut carrier = Carrier::from_image(image.clone());
        carrier.save_as(&path).unwrap();

        let reloaded = Carrier::from_file(&path).unwrap();
        assert_eq!(reloaded.image(), &image, "png round trip must be lossless");
    }
}
