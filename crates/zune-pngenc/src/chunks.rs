/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Chunk writers
//!
//! Every chunk is laid out as
//! `length(4, big endian) - type(4) - [data] - crc(4, big endian)`,
//! the crc covers the type and the data.
//!
//! Writers operate on a [`ZByteWriter`] over a buffer sized up front,
//! running out of space is reported as an error.
use zune_core::bytestream::ZByteWriter;

use crate::constants::{PNG_CHUNK_OVERHEAD, PNG_IHDR_LENGTH, PNG_MAX_U31};
use crate::crc::calc_crc_with_bytes;
use crate::enums::{PngChunkType, PngColor};
use crate::error::PngEncodeErrors;

/// Write a complete chunk
///
/// The caller ensures `data` fits in a 31 bit length.
pub fn write_chunk(
    writer: &mut ZByteWriter, chunk_type: PngChunkType, data: &[u8]
) -> Result<(), PngEncodeErrors> {
    debug_assert!(data.len() <= PNG_MAX_U31);

    if !writer.has(data.len().saturating_add(PNG_CHUNK_OVERHEAD)) {
        return Err(PngEncodeErrors::Generic("No space left for png chunk"));
    }
    let name = chunk_type.to_bytes();

    writer.write_u32_be_err(data.len() as u32)?;
    writer.write_all(&name)?;
    writer.write_all(data)?;

    let crc = !calc_crc_with_bytes(data, calc_crc_with_bytes(&name, u32::MAX));
    writer.write_u32_be_err(crc)?;

    Ok(())
}

/// Write the image header
///
/// Bit depth is always 8, compression, filter and
/// interlace methods are always zero.
pub fn write_ihdr(
    writer: &mut ZByteWriter, width: usize, height: usize, color: PngColor
) -> Result<(), PngEncodeErrors> {
    for dimension in [width, height] {
        if dimension > PNG_MAX_U31 {
            return Err(PngEncodeErrors::TooLargeDimensions(dimension));
        }
    }
    let mut ihdr = [0_u8; PNG_IHDR_LENGTH];
    let mut header = ZByteWriter::new(&mut ihdr);

    header.write_u32_be(width as u32);
    header.write_u32_be(height as u32);
    // bit depth
    header.write_u8(8);
    header.write_u8(color.to_int());
    // compression, filter and interlace stay zero

    write_chunk(writer, PngChunkType::IHDR, &ihdr)
}

/// Write the compressed image data
///
/// With no `chunk_size` the whole stream goes into a single IDAT.
/// Otherwise the stream is split into chunks of at most `chunk_size`
/// bytes. Chunks never exceed the 31 bit length limit.
///
/// Returns the number of IDAT chunks written
pub fn write_idat(
    writer: &mut ZByteWriter, zlib: &[u8], chunk_size: Option<usize>
) -> Result<usize, PngEncodeErrors> {
    let chunk_size = chunk_size.unwrap_or(PNG_MAX_U31).clamp(1, PNG_MAX_U31);

    if zlib.is_empty() {
        write_chunk(writer, PngChunkType::IDAT, zlib)?;
        return Ok(1);
    }
    let mut count = 0;

    for chunk in zlib.chunks(chunk_size) {
        write_chunk(writer, PngChunkType::IDAT, chunk)?;
        count += 1;
    }
    Ok(count)
}

/// Write the image trailer, an empty chunk
pub fn write_iend(writer: &mut ZByteWriter) -> Result<(), PngEncodeErrors> {
    write_chunk(writer, PngChunkType::IEND, &[])
}
