/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Pixel formats accepted by the encoder and conversion into png channel order
use zune_core::colorspace::ColorSpace;

use crate::enums::PngColor;
use crate::error::PngEncodeErrors;

/// Colorspaces which can be encoded
pub const SUPPORTED_COLORSPACES: [ColorSpace; 4] =
    [ColorSpace::Luma, ColorSpace::RGB, ColorSpace::BGR, ColorSpace::BGRA];

/// Convert a source raster into a tightly packed destination raster.
///
/// Arguments are `(src, width, height, src_stride, dst, dst_stride)`,
/// strides are in bytes.
pub type ColorConverter = fn(&[u8], usize, usize, usize, &mut [u8], usize);

/// Memory layout of the pixels handed to the encoder
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PixelFormat {
    /// One byte per pixel
    Gray8,
    /// Three bytes per pixel, blue first
    Bgr24,
    /// Four bytes per pixel, blue first, alpha last
    Bgra32,
    /// Three bytes per pixel, red first
    Rgb24
}

impl PixelFormat {
    pub const fn channels(self) -> usize {
        match self {
            PixelFormat::Gray8 => 1,
            PixelFormat::Bgr24 | PixelFormat::Rgb24 => 3,
            PixelFormat::Bgra32 => 4
        }
    }

    /// The png color type this format is stored as
    pub const fn png_color(self) -> PngColor {
        match self {
            PixelFormat::Gray8 => PngColor::Luma,
            PixelFormat::Bgr24 | PixelFormat::Rgb24 => PngColor::RGB,
            PixelFormat::Bgra32 => PngColor::RGBA
        }
    }

    /// Png stores red first, so blue first formats have to be
    /// reordered before filtering.
    pub const fn converter(self) -> Option<ColorConverter> {
        match self {
            PixelFormat::Bgr24 => Some(bgr_to_rgb),
            PixelFormat::Bgra32 => Some(bgra_to_rgba),
            PixelFormat::Gray8 | PixelFormat::Rgb24 => None
        }
    }
}

impl TryFrom<ColorSpace> for PixelFormat {
    type Error = PngEncodeErrors;

    fn try_from(colorspace: ColorSpace) -> Result<Self, Self::Error> {
        match colorspace {
            ColorSpace::Luma => Ok(PixelFormat::Gray8),
            ColorSpace::RGB => Ok(PixelFormat::Rgb24),
            ColorSpace::BGR => Ok(PixelFormat::Bgr24),
            ColorSpace::BGRA => Ok(PixelFormat::Bgra32),
            _ => Err(PngEncodeErrors::UnsupportedColorspace(
                colorspace,
                &SUPPORTED_COLORSPACES
            ))
        }
    }
}

/// Swap the first and third byte of every `COMP` sized pixel
fn swap_red_blue<const COMP: usize>(
    src: &[u8], width: usize, height: usize, src_stride: usize, dst: &mut [u8],
    dst_stride: usize
) {
    let row_bytes = width * COMP;

    for (src_row, dst_row) in src
        .chunks(src_stride)
        .zip(dst.chunks_mut(dst_stride))
        .take(height)
    {
        for (s, d) in src_row[..row_bytes]
            .chunks_exact(COMP)
            .zip(dst_row[..row_bytes].chunks_exact_mut(COMP))
        {
            d.copy_from_slice(s);
            d.swap(0, 2);
        }
    }
}

/// Convert BGR pixels to RGB
pub fn bgr_to_rgb(
    src: &[u8], width: usize, height: usize, src_stride: usize, dst: &mut [u8],
    dst_stride: usize
) {
    swap_red_blue::<3>(src, width, height, src_stride, dst, dst_stride);
}

/// Convert BGRA pixels to RGBA, alpha stays in place
pub fn bgra_to_rgba(
    src: &[u8], width: usize, height: usize, src_stride: usize, dst: &mut [u8],
    dst_stride: usize
) {
    swap_red_blue::<4>(src, width, height, src_stride, dst, dst_stride);
}
