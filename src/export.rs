use std::io::Cursor;

use eframe::egui;
use image::{DynamicImage, ImageFormat, RgbaImage};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Chart image export
// ---------------------------------------------------------------------------

/// Raster format for a one-shot chart export. Each format writes a fixed
/// filename in the working directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Jpeg,
}

impl ExportFormat {
    pub fn filename(self) -> &'static str {
        match self {
            ExportFormat::Png => "chart.png",
            ExportFormat::Jpeg => "chart.jpg",
        }
    }

    fn image_format(self) -> ImageFormat {
        match self {
            ExportFormat::Png => ImageFormat::Png,
            ExportFormat::Jpeg => ImageFormat::Jpeg,
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("screenshot buffer does not match its reported dimensions")]
    MalformedImage,
    #[error("encoding image: {0}")]
    Encode(#[from] image::ImageError),
    #[error("writing image file: {0}")]
    Io(#[from] std::io::Error),
}

/// Encode a screenshot into the requested raster format.
pub fn encode(image: &egui::ColorImage, format: ExportFormat) -> Result<Vec<u8>, ExportError> {
    let [width, height] = image.size;
    let raw: Vec<u8> = image.pixels.iter().flat_map(|c| c.to_array()).collect();
    let rgba = RgbaImage::from_raw(width as u32, height as u32, raw)
        .ok_or(ExportError::MalformedImage)?;

    let mut out = Cursor::new(Vec::new());
    match format {
        ExportFormat::Png => rgba.write_to(&mut out, format.image_format())?,
        // JPEG carries no alpha channel.
        ExportFormat::Jpeg => DynamicImage::ImageRgba8(rgba)
            .to_rgb8()
            .write_to(&mut out, format.image_format())?,
    }
    Ok(out.into_inner())
}

/// Encode and write the screenshot to its fixed filename.
/// Returns the filename for logging.
pub fn save_chart(
    image: &egui::ColorImage,
    format: ExportFormat,
) -> Result<&'static str, ExportError> {
    let bytes = encode(image, format)?;
    std::fs::write(format.filename(), bytes)?;
    Ok(format.filename())
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::{Color32, ColorImage};

    fn test_image() -> ColorImage {
        ColorImage::new([4, 2], Color32::from_rgb(0x88, 0x84, 0xd8))
    }

    #[test]
    fn filenames_are_fixed_per_format() {
        assert_eq!(ExportFormat::Png.filename(), "chart.png");
        assert_eq!(ExportFormat::Jpeg.filename(), "chart.jpg");
    }

    #[test]
    fn png_round_trips_dimensions_and_color() {
        let bytes = encode(&test_image(), ExportFormat::Png).expect("encode png");
        let decoded = image::load_from_memory(&bytes).expect("decode png");
        assert_eq!(decoded.width(), 4);
        assert_eq!(decoded.height(), 2);
        let pixel = decoded.to_rgba8().get_pixel(0, 0).0;
        assert_eq!(pixel, [0x88, 0x84, 0xd8, 0xff]);
    }

    #[test]
    fn jpeg_encodes_without_alpha() {
        let bytes = encode(&test_image(), ExportFormat::Jpeg).expect("encode jpeg");
        let decoded = image::load_from_memory(&bytes).expect("decode jpeg");
        assert_eq!(decoded.width(), 4);
        assert_eq!(decoded.height(), 2);
        assert_eq!(decoded.color().channel_count(), 3);
    }
}
