/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A small deflate/zlib encoder.
//!
//! This crate features a compressor producing a single DEFLATE block coded
//! with the fixed Huffman tables from [RFC 1951], optionally wrapped in a
//! zlib container ([RFC 1950]).
//!
//! The match finder is a hash-chain over 3 byte prefixes with one step of
//! lazy matching, and a single `quality` knob bounds how many candidates are
//! kept per hash bucket.
//!
//! It is used by the png encoder of the zune family, but nothing here is png
//! specific.
//!
//! # Usage
//!
//! Compressing into a zlib stream
//!
//! ```
//! use zune_deflate::DeflateEncoder;
//! let data = [0_u8; 100];
//! let mut encoder = DeflateEncoder::new(&data);
//!
//! let compressed = encoder.encode_zlib().unwrap();
//! assert_eq!(&compressed[0..2], &[0x78, 0x5e]);
//! ```
//!
//! Spending more time on finding matches
//! ```
//! use zune_deflate::{DeflateEncoder, DeflateEncodingOptions};
//! let data = [0_u8; 100];
//! let options = DeflateEncodingOptions::default().set_quality(20);
//! let mut encoder = DeflateEncoder::new_with_options(&data, options);
//!
//! let compressed = encoder.encode_deflate().unwrap();
//! ```
//!
//! [RFC 1951]: https://www.rfc-editor.org/rfc/rfc1951
//! [RFC 1950]: https://www.rfc-editor.org/rfc/rfc1950
#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

pub use crate::adler32::calc_adler_hash;
pub use crate::buffer::ByteBuffer;
pub use crate::encoder::{DeflateEncoder, DeflateEncodingOptions};
pub use crate::errors::DeflateEncodeErrors;

mod adler32;
mod bitstream;
mod buffer;
mod constants;
mod encoder;
pub mod errors;
pub mod lz77;
