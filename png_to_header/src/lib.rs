/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

//! Image to C header conversion.
//!
//! Decodes an image, packs every pixel as `0xAARRGGBB` and writes a header
//! exposing `<name>_width`, `<name>_height` and `<name>_data` for the kernel
//! to compile in.

pub mod config;
pub mod convert;
pub mod error;
pub mod header;
pub mod pixel;

pub use config::{ConvertConfig, SymbolName};
pub use convert::{ConvertSummary, PackedImage, convert, load_packed};
pub use error::ConvertError;
pub use header::{render_header, write_header};
pub use pixel::{pack_argb, unpack_argb};
