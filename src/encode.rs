//! Image encoders for the tone-mapped framebuffer.
//!
//! The device guarantees deterministic tone-mapped bytes for a given
//! scene; the encoders only package those bytes as binary PPM or PNG.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::render::Device;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("failed to write image file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),
    #[error("framebuffer bytes do not match the device dimensions")]
    Dimensions,
}

/// Supported output encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Raw binary PPM (`P6`).
    #[default]
    Ppm,
    /// PNG via the `image` crate.
    Png,
}

impl OutputFormat {
    /// Picks a format from a file extension; anything but `png` falls
    /// back to PPM.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match path.as_ref().extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("png") => OutputFormat::Png,
            _ => OutputFormat::Ppm,
        }
    }
}

/// Serializes the framebuffer as a binary PPM stream:
/// `P6\n{width} {height}\n255\n` followed by 3 bytes per pixel.
pub fn encode_ppm(device: &Device) -> Vec<u8> {
    let body = device.to_rgb_bytes();
    let mut out = format!("P6\n{} {}\n255\n", device.width(), device.height()).into_bytes();
    out.extend_from_slice(&body);
    out
}

/// Writes the framebuffer to `path` in the given format.
pub fn write(device: &Device, path: impl AsRef<Path>, format: OutputFormat) -> Result<(), EncodeError> {
    match format {
        OutputFormat::Ppm => write_ppm(device, path),
        OutputFormat::Png => write_png(device, path),
    }
}

/// Writes a binary PPM file.
pub fn write_ppm(device: &Device, path: impl AsRef<Path>) -> Result<(), EncodeError> {
    let mut file = BufWriter::new(File::create(path)?);
    file.write_all(&encode_ppm(device))?;
    file.flush()?;
    Ok(())
}

/// Writes a PNG file.
pub fn write_png(device: &Device, path: impl AsRef<Path>) -> Result<(), EncodeError> {
    let image = image::RgbImage::from_raw(device.width(), device.height(), device.to_rgb_bytes())
        .ok_or(EncodeError::Dimensions)?;
    image.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ppm_stream_has_header_and_full_body() {
        let device = Device::new(4, 3);
        let bytes = encode_ppm(&device);
        let header = b"P6\n4 3\n255\n";
        assert!(bytes.starts_with(header));
        assert_eq!(bytes.len(), header.len() + 4 * 3 * 3);
    }

    #[test]
    fn format_is_inferred_from_extension() {
        assert_eq!(OutputFormat::from_path("out.png"), OutputFormat::Png);
        assert_eq!(OutputFormat::from_path("out.PNG"), OutputFormat::Png);
        assert_eq!(OutputFormat::from_path("out.ppm"), OutputFormat::Ppm);
        assert_eq!(OutputFormat::from_path("out"), OutputFormat::Ppm);
    }

    #[test]
    fn ppm_body_is_deterministic() {
        let device = Device::new(8, 8);
        assert_eq!(encode_ppm(&device), encode_ppm(&device));
    }
}
