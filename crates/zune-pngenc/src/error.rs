/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

use zune_core::colorspace::ColorSpace;
use zune_deflate::DeflateEncodeErrors;

use crate::constants::PNG_MAX_U31;

/// Errors encountered during encoding
pub enum PngEncodeErrors {
    /// Unsupported colorspace
    ///
    /// The first argument is the colorspace encountered
    /// The second argument is list of supported colorspaces
    UnsupportedColorspace(ColorSpace, &'static [ColorSpace]),
    /// Width or height is zero
    ZeroDimensions,
    /// Too large dimensions
    ///
    /// Png stores width and height as 31 bit integers
    TooLargeDimensions(usize),
    /// The row stride is smaller than a row of pixels
    ///
    /// # Arguments
    /// - 1st argument is the minimum stride
    /// - 2nd argument is the stride given
    StrideTooSmall(usize, usize),
    /// The pixel buffer is too short for the described image
    ///
    /// # Arguments
    /// - 1st argument is the number of bytes we expected
    /// - 2nd argument is the number of bytes present
    InsufficientData(usize, usize),
    /// Image size calculations overflowed `usize`
    Overflow,
    /// The deflate encoder failed
    Deflate(DeflateEncodeErrors),
    /// Writing to the sink failed
    IoError(std::io::Error),
    Generic(&'static str)
}

impl Debug for PngEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            PngEncodeErrors::UnsupportedColorspace(found, supported) => {
                writeln!(f, "Cannot encode image with colorspace {found:?} into PNG, supported ones are {supported:?}")
            }
            PngEncodeErrors::ZeroDimensions => {
                writeln!(f, "Image width and height must be greater than zero")
            }
            PngEncodeErrors::TooLargeDimensions(found) => {
                writeln!(
                    f,
                    "Too large image dimensions {found}, PNG can only encode dimensions up to {PNG_MAX_U31}"
                )
            }
            PngEncodeErrors::StrideTooSmall(expected, found) => {
                writeln!(
                    f,
                    "Stride {found} is smaller than a row of pixels, expected at least {expected}"
                )
            }
            PngEncodeErrors::InsufficientData(expected, found) => {
                writeln!(
                    f,
                    "Insufficient data, expected {expected} bytes but buffer has {found}"
                )
            }
            PngEncodeErrors::Overflow => {
                writeln!(f, "Image dimensions overflow when calculating buffer sizes")
            }
            PngEncodeErrors::Deflate(err) => {
                writeln!(f, "Deflate error {err:?}")
            }
            PngEncodeErrors::IoError(err) => {
                writeln!(f, "I/O error {err:?}")
            }
            PngEncodeErrors::Generic(val) => {
                writeln!(f, "{val}")
            }
        }
    }
}

impl Display for PngEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for PngEncodeErrors {}

impl From<DeflateEncodeErrors> for PngEncodeErrors {
    fn from(value: DeflateEncodeErrors) -> Self {
        Self::Deflate(value)
    }
}

impl From<std::io::Error> for PngEncodeErrors {
    fn from(value: std::io::Error) -> Self {
        Self::IoError(value)
    }
}

impl From<&'static str> for PngEncodeErrors {
    fn from(value: &'static str) -> Self {
        Self::Generic(value)
    }
}
