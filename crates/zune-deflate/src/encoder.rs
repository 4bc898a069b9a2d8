/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec::Vec;

use log::{trace, warn};

use crate::adler32::calc_adler_hash;
use crate::bitstream::BitStreamWriter;
use crate::buffer::ByteBuffer;
use crate::constants::{DEFLATE_BLOCKTYPE_STATIC_HUFFMAN, DEFLATE_END_OF_BLOCK, DEFLATE_MIN_QUALITY};
use crate::errors::DeflateEncodeErrors;
use crate::lz77::{MatchFinder, TokenSink};

/// Options respected by the deflate encoder
#[derive(Debug, Copy, Clone)]
pub struct DeflateEncodingOptions {
    quality: u8
}

impl Default for DeflateEncodingOptions {
    fn default() -> Self {
        DeflateEncodingOptions { quality: 8 }
    }
}

impl DeflateEncodingOptions {
    /// Set the compression quality
    ///
    /// This is the number of positions remembered per hash bucket by
    /// the match finder, higher values find longer matches at the cost
    /// of speed.
    ///
    /// Values below 5 are treated as 5
    ///
    /// - Default value: 8
    pub fn set_quality(mut self, quality: u8) -> Self {
        self.quality = quality;
        self
    }

    /// Get the quality the encoder will actually use
    pub fn quality(&self) -> usize {
        usize::from(self.quality).max(DEFLATE_MIN_QUALITY)
    }
}

impl TokenSink for BitStreamWriter {
    #[inline(always)]
    fn literal(&mut self, byte: u8) -> Result<(), DeflateEncodeErrors> {
        self.put_fixed_symbol(u16::from(byte))
    }

    #[inline(always)]
    fn back_reference(
        &mut self, length: usize, distance: usize
    ) -> Result<(), DeflateEncodeErrors> {
        self.put_fixed_match(length, distance)
    }

    fn end_of_block(&mut self) -> Result<(), DeflateEncodeErrors> {
        self.put_fixed_symbol(DEFLATE_END_OF_BLOCK)
    }
}

/// A deflate encoder producing a single block
/// coded with the fixed huffman tables.
pub struct DeflateEncoder<'a> {
    data:    &'a [u8],
    options: DeflateEncodingOptions
}

impl<'a> DeflateEncoder<'a> {
    /// Create a new deflate encoder with default options
    pub fn new(data: &'a [u8]) -> DeflateEncoder<'a> {
        DeflateEncoder::new_with_options(data, DeflateEncodingOptions::default())
    }

    pub fn new_with_options(data: &'a [u8], options: DeflateEncodingOptions) -> DeflateEncoder<'a> {
        if options.quality < DEFLATE_MIN_QUALITY as u8 {
            warn!(
                "Quality {} is too low, using {} instead",
                options.quality, DEFLATE_MIN_QUALITY
            );
        }
        DeflateEncoder { data, options }
    }

    /// zlib header, 32K window and the level hint of the
    /// fast compressors, i.e `78 5E`
    fn zlib_header() -> [u8; 2] {
        const ZLIB_CM_DEFLATE: u16 = 8;
        const ZLIB_CINFO_32K_WINDOW: u16 = 7;
        const ZLIB_FAST_COMPRESSION: u16 = 1;

        let mut hdr = (ZLIB_CM_DEFLATE << 8) | (ZLIB_CINFO_32K_WINDOW << 12);

        hdr |= ZLIB_FAST_COMPRESSION << 6;
        hdr |= 31 - (hdr % 31);

        hdr.to_be_bytes()
    }

    /// A rough guess of the output size, fixed huffman
    /// rarely does worse than 9 bits per byte.
    fn size_hint(&self) -> usize {
        let len = self.data.len();
        len + len / 8 + 16
    }

    /// Write the compressed block to `output`
    fn encode_block(&self, output: ByteBuffer) -> Result<ByteBuffer, DeflateEncodeErrors> {
        let mut writer = BitStreamWriter::new(output);

        // BFINAL, there is only one block
        writer.put_bits(1, 1)?;
        writer.put_bits(DEFLATE_BLOCKTYPE_STATIC_HUFFMAN, 2)?;

        let mut finder = MatchFinder::new(self.options.quality())?;
        finder.compress(self.data, &mut writer)?;

        writer.align_to_byte()?;

        Ok(writer.output)
    }

    /// Compress the data into a raw deflate stream
    pub fn encode_deflate(&mut self) -> Result<Vec<u8>, DeflateEncodeErrors> {
        let output = ByteBuffer::with_capacity(self.size_hint())?;
        let output = self.encode_block(output)?;

        trace!("Deflate: {} bytes in, {} bytes out", self.data.len(), output.count());

        Ok(output.into_inner())
    }

    /// Compress the data into a zlib stream, a deflate stream with
    /// a two byte header and the adler32 of the uncompressed data
    /// at the end
    pub fn encode_zlib(&mut self) -> Result<Vec<u8>, DeflateEncodeErrors> {
        let mut output = ByteBuffer::with_capacity(self.size_hint() + 6)?;

        output.push_slice(&Self::zlib_header())?;

        let mut output = self.encode_block(output)?;

        // add adler hash
        let hash = calc_adler_hash(self.data);
        output.push_slice(&hash.to_be_bytes())?;

        trace!("Zlib: {} bytes in, {} bytes out", self.data.len(), output.count());

        Ok(output.into_inner())
    }
}
