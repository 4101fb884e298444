//! Deterministic PNG writer.
//!
//! Uses fixed compression settings so the same raster always encodes to
//! byte-identical output, which keeps the generated asset tree
//! bit-reproducible for a given code revision.

use std::io::Write;
use std::path::Path;

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use thiserror::Error;

use crate::canvas::Raster;

/// Errors from PNG operations.
#[derive(Debug, Error)]
pub enum PngError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),
}

/// PNG export configuration for deterministic output.
#[derive(Debug, Clone)]
pub struct PngConfig {
    /// Compression level. Use a fixed value for determinism.
    pub compression: Compression,
    /// Filter type. Use a fixed value for determinism.
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            // No filtering keeps the encoder's output trivially stable.
            filter: FilterType::NoFilter,
        }
    }
}

/// Write an RGBA raster to a PNG file.
pub fn write_rgba(raster: &Raster, path: &Path, config: &PngConfig) -> Result<(), PngError> {
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);

    write_rgba_to_writer(raster, writer, config)
}

/// Write an RGBA raster to any writer.
pub fn write_rgba_to_writer<W: Write>(
    raster: &Raster,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    let mut encoder = Encoder::new(writer, raster.width, raster.height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    // No timestamps or other variable metadata go into the stream.
    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&raster.to_rgba8())?;

    Ok(())
}

/// Compute the BLAKE3 hash of PNG data.
pub fn hash_png(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Encode to a Vec<u8> and return the data with its hash.
pub fn write_rgba_to_vec_with_hash(
    raster: &Raster,
    config: &PngConfig,
) -> Result<(Vec<u8>, String), PngError> {
    let mut data = Vec::new();
    write_rgba_to_writer(raster, &mut data, config)?;
    let hash = hash_png(&data);
    Ok((data, hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_rgba_deterministic() {
        let mut raster = Raster::transparent(16, 16);
        for y in 0..16 {
            for x in 0..16 {
                raster.set(x, y, Color::rgb((x * 16) as u8, (y * 16) as u8, 128));
            }
        }

        let config = PngConfig::default();

        let (data1, hash1) = write_rgba_to_vec_with_hash(&raster, &config).unwrap();
        let (data2, hash2) = write_rgba_to_vec_with_hash(&raster, &config).unwrap();

        assert_eq!(data1, data2, "PNG data should be identical");
        assert_eq!(hash1, hash2, "PNG hashes should be identical");
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.png");

        let raster = Raster::new(8, 8, Color::rgb(255, 0, 0));
        write_rgba(&raster, &path, &PngConfig::default()).unwrap();

        let data = std::fs::read(&path).unwrap();
        assert_eq!(&data[1..4], b"PNG");
    }
}
