/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use image::Rgba;

/// Packs an RGBA pixel into the kernel's `0xAARRGGBB` layout.
#[inline]
pub fn pack_argb(px: Rgba<u8>) -> u32 {
    let [r, g, b, a] = px.0;
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Inverse of [`pack_argb`].
#[inline]
pub fn unpack_argb(argb: u32) -> Rgba<u8> {
    Rgba([
        (argb >> 16) as u8,
        (argb >> 8) as u8,
        argb as u8,
        (argb >> 24) as u8,
    ])
}
