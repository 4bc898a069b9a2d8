/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Write;

use log::{debug, trace};
use zune_core::bytestream::ZByteWriter;
use zune_deflate::DeflateEncoder;

use crate::chunks::{write_idat, write_iend, write_ihdr};
use crate::constants::{PNG_CHUNK_OVERHEAD, PNG_IHDR_LENGTH, PNG_MAX_U31, PNG_SIGNATURE};
use crate::convert::PixelFormat;
use crate::error::PngEncodeErrors;
use crate::filters::{filter_image, ScanlineLayout};
use crate::options::PngEncoderOptions;

/// Validated image geometry
struct ImageLayout {
    format:    PixelFormat,
    row_bytes: usize,
    stride:    usize
}

/// A png encoder
///
/// Working buffers live only for the duration of a single
/// [`encode`](Self::encode) call.
pub struct PngEncoder<'a> {
    options: PngEncoderOptions,
    data:    &'a [u8]
}

impl<'a> PngEncoder<'a> {
    /// Create a new encoder which will encode `data`
    /// using the layout described by `options`
    pub fn new(data: &'a [u8], options: PngEncoderOptions) -> PngEncoder<'a> {
        PngEncoder { options, data }
    }

    pub const fn options(&self) -> &PngEncoderOptions {
        &self.options
    }

    fn validate(&self) -> Result<ImageLayout, PngEncodeErrors> {
        let format = PixelFormat::try_from(self.options.colorspace())?;
        let width = self.options.width();
        let height = self.options.height();

        if width == 0 || height == 0 {
            return Err(PngEncodeErrors::ZeroDimensions);
        }
        if width > PNG_MAX_U31 {
            return Err(PngEncodeErrors::TooLargeDimensions(width));
        }
        if height > PNG_MAX_U31 {
            return Err(PngEncodeErrors::TooLargeDimensions(height));
        }
        let row_bytes = width
            .checked_mul(format.channels())
            .ok_or(PngEncodeErrors::Overflow)?;

        let stride = self.options.stride().unwrap_or(row_bytes);

        if stride < row_bytes {
            return Err(PngEncodeErrors::StrideTooSmall(row_bytes, stride));
        }
        // the last row does not need padding after it
        let expected = (height - 1)
            .checked_mul(stride)
            .and_then(|x| x.checked_add(row_bytes))
            .ok_or(PngEncodeErrors::Overflow)?;

        if self.data.len() < expected {
            return Err(PngEncodeErrors::InsufficientData(
                expected,
                self.data.len()
            ));
        }
        Ok(ImageLayout {
            format,
            row_bytes,
            stride
        })
    }

    /// Encode the image writing the png file to `sink`
    ///
    /// Nothing is written to `sink` if encoding fails before
    /// the file is complete.
    ///
    /// Returns the number of bytes written
    pub fn encode<W: Write>(&self, mut sink: W) -> Result<usize, PngEncodeErrors> {
        let png = self.encode_to_vec()?;
        sink.write_all(&png)?;

        Ok(png.len())
    }

    /// Encode the image returning the png file
    pub fn encode_to_vec(&self) -> Result<Vec<u8>, PngEncodeErrors> {
        let layout = self.validate()?;
        let width = self.options.width();
        let height = self.options.height();

        trace!("Image width: {width}");
        trace!("Image height: {height}");
        trace!("Pixel format: {:?}", layout.format);

        let mut converted = Vec::new();

        let (pixels, stride) = match layout.format.converter() {
            Some(converter) => {
                let size = layout
                    .row_bytes
                    .checked_mul(height)
                    .ok_or(PngEncodeErrors::Overflow)?;

                converted.try_reserve_exact(size).map_err(|_| {
                    PngEncodeErrors::Generic("Could not allocate space for converted pixels")
                })?;
                converted.resize(size, 0);

                (converter)(
                    self.data,
                    width,
                    height,
                    layout.stride,
                    &mut converted,
                    layout.row_bytes
                );
                (&converted[..], layout.row_bytes)
            }
            None => (self.data, layout.stride)
        };

        let scanlines = ScanlineLayout {
            row_bytes: layout.row_bytes,
            stride,
            height,
            components: layout.format.channels()
        };
        let mut filtered = Vec::new();
        let mut line = Vec::new();

        filter_image(
            pixels,
            scanlines,
            self.options.filter(),
            self.options.flip_vertically(),
            &mut filtered,
            &mut line
        )?;

        let zlib = DeflateEncoder::new_with_options(&filtered, self.options.deflate_options())
            .encode_zlib()?;

        debug!(
            "Compressed {} filtered bytes into {} bytes",
            filtered.len(),
            zlib.len()
        );

        let idat_chunks = match self.options.idat_chunk_size() {
            Some(size) => zlib.len().div_ceil(size.min(PNG_MAX_U31)).max(1),
            None => 1
        };
        let total_size = zlib
            .len()
            .checked_add(8 + PNG_CHUNK_OVERHEAD + PNG_IHDR_LENGTH + PNG_CHUNK_OVERHEAD)
            .and_then(|x| x.checked_add(idat_chunks.checked_mul(PNG_CHUNK_OVERHEAD)?))
            .ok_or(PngEncodeErrors::Overflow)?;

        // release the filtered plane before the output is allocated
        drop(filtered);
        drop(converted);

        let mut png = Vec::new();
        png.try_reserve_exact(total_size)
            .map_err(|_| PngEncodeErrors::Generic("Could not allocate space for the png"))?;
        png.resize(total_size, 0);

        let mut writer = ZByteWriter::new(&mut png);

        writer.write_u64_be_err(PNG_SIGNATURE)?;
        write_ihdr(&mut writer, width, height, layout.format.png_color())?;
        let written_chunks = write_idat(&mut writer, &zlib, self.options.idat_chunk_size())?;
        write_iend(&mut writer)?;

        let position = writer.position();

        debug_assert_eq!(written_chunks, idat_chunks);

        if position != total_size {
            return Err(PngEncodeErrors::Generic("Png size does not match the computed size"));
        }

        trace!("IDAT chunks: {written_chunks}");
        trace!("Png size: {position}");

        Ok(png)
    }
}
