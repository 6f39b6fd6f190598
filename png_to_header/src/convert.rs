/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::{ImageReader, RgbaImage};

use crate::config::ConvertConfig;
use crate::error::ConvertError;
use crate::header::write_header;
use crate::pixel::pack_argb;

/// Decoded image with every pixel packed as `0xAARRGGBB`, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u32>,
}

impl PackedImage {
    pub fn from_rgba(img: &RgbaImage) -> Self {
        let (width, height) = img.dimensions();

        Self {
            width,
            height,
            pixels: img.pixels().map(|px| pack_argb(*px)).collect(),
        }
    }
}

/// What a finished conversion produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSummary {
    pub width: u32,
    pub height: u32,
    pub pixel_count: usize,
    pub output: PathBuf,
}

/// Decodes `path` in any supported format and packs it.
///
/// Sources without alpha come out fully opaque.
pub fn load_packed(path: &Path) -> Result<PackedImage, ConvertError> {
    let decode_err = |source| ConvertError::Decode {
        path: path.to_path_buf(),
        source,
    };

    let img = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| decode_err(image::ImageError::IoError(e)))?
        .decode()
        .map_err(decode_err)?;

    tracing::debug!(
        "Decoded {:?}: {}x{} {:?}",
        path,
        img.width(),
        img.height(),
        img.color()
    );

    Ok(PackedImage::from_rgba(&img.to_rgba8()))
}

/// Converts `config.input` into a header at `config.output`.
///
/// The output file is only created once the input has decoded, so a bad
/// input leaves any existing header untouched.
pub fn convert(config: &ConvertConfig) -> Result<ConvertSummary, ConvertError> {
    let image = load_packed(&config.input)?;

    let write_err = |source| ConvertError::Write {
        path: config.output.clone(),
        source,
    };

    let file = File::create(&config.output).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    write_header(&mut writer, &config.symbol, &image).map_err(write_err)?;
    writer.flush().map_err(write_err)?;

    Ok(ConvertSummary {
        width: image.width,
        height: image.height,
        pixel_count: image.pixels.len(),
        output: config.output.clone(),
    })
}
