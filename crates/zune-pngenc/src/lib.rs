/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A png encoder
//!
//! This crate writes 8 bit grayscale, RGB and RGBA png files
//! using its own deflate implementation from `zune-deflate`.
//!
//! # Features
//! - Per row adaptive filter selection
//! - Blue first pixel layouts are reordered on the fly
//! - Padded rows via a custom stride
//! - Optional vertical flip
//!
//! # Usage
//! Add the library to `Cargo.toml`
//!
//! ```toml
//! zune-pngenc = "0.1"
//! ```
//!
//! #### Encode a BGR image
//! ```
//! use zune_core::colorspace::ColorSpace;
//! use zune_pngenc::{PngEncoder, PngEncoderOptions};
//!
//! let pixels = vec![128_u8; 16 * 16 * 3];
//! let options = PngEncoderOptions::new(16, 16, ColorSpace::BGR);
//!
//! let png = PngEncoder::new(&pixels, options).encode_to_vec().unwrap();
//! assert_eq!(&png[1..4], b"PNG");
//! ```
//!
//! #### Force a filter and split the image data
//! ```
//! use zune_core::colorspace::ColorSpace;
//! use zune_pngenc::{FilterMethod, PngEncoder, PngEncoderOptions};
//!
//! let pixels = vec![0_u8; 64 * 64];
//! let options = PngEncoderOptions::new(64, 64, ColorSpace::Luma)
//!     .set_forced_filter(FilterMethod::Paeth)
//!     .set_quality(16)
//!     .set_idat_chunk_size(8192);
//!
//! let mut output = vec![];
//! let size = PngEncoder::new(&pixels, options).encode(&mut output).unwrap();
//! assert_eq!(size, output.len());
//! ```
#![allow(clippy::needless_range_loop)]

pub use zune_core;

pub use crate::convert::{PixelFormat, SUPPORTED_COLORSPACES};
pub use crate::crc::{calc_crc, calc_crc_with_bytes};
pub use crate::encoder::PngEncoder;
pub use crate::enums::{FilterChoice, FilterMethod, PngChunkType, PngColor};
pub use crate::error::PngEncodeErrors;
pub use crate::options::PngEncoderOptions;

pub mod chunks;
mod constants;
pub mod convert;
mod crc;
mod encoder;
mod enums;
mod error;
pub mod filters;
mod options;
