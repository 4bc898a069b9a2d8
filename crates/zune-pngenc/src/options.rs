/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use log::warn;
use zune_core::colorspace::ColorSpace;
use zune_deflate::DeflateEncodingOptions;

use crate::enums::{FilterChoice, FilterMethod};

/// Options respected by the png encoder
#[derive(Debug, Copy, Clone)]
pub struct PngEncoderOptions {
    width:           usize,
    height:          usize,
    colorspace:      ColorSpace,
    stride:          Option<usize>,
    quality:         u8,
    filter:          FilterChoice,
    flip_vertically: bool,
    idat_chunk_size: Option<usize>
}

impl Default for PngEncoderOptions {
    fn default() -> Self {
        Self {
            width:           0,
            height:          0,
            colorspace:      ColorSpace::RGB,
            stride:          None,
            quality:         8,
            filter:          FilterChoice::Adaptive,
            flip_vertically: false,
            idat_chunk_size: None
        }
    }
}

impl PngEncoderOptions {
    /// Create options for an image of the given size and layout,
    /// everything else uses defaults
    pub fn new(width: usize, height: usize, colorspace: ColorSpace) -> PngEncoderOptions {
        PngEncoderOptions::default()
            .set_width(width)
            .set_height(height)
            .set_colorspace(colorspace)
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn colorspace(&self) -> ColorSpace {
        self.colorspace
    }

    /// Bytes between the start of consecutive rows, if set
    ///
    /// When not set rows are assumed to be tightly packed
    pub const fn stride(&self) -> Option<usize> {
        self.stride
    }

    /// The quality as configured, see [`set_quality`](Self::set_quality)
    pub const fn quality(&self) -> u8 {
        self.quality
    }

    pub const fn filter(&self) -> FilterChoice {
        self.filter
    }

    pub const fn flip_vertically(&self) -> bool {
        self.flip_vertically
    }

    pub const fn idat_chunk_size(&self) -> Option<usize> {
        self.idat_chunk_size
    }

    pub fn set_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn set_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    /// Set the layout of the input pixels
    ///
    /// Supported colorspaces are `Luma`, `RGB`, `BGR` and `BGRA`
    pub fn set_colorspace(mut self, colorspace: ColorSpace) -> Self {
        self.colorspace = colorspace;
        self
    }

    /// Set the distance in bytes between the starts of two rows
    pub fn set_stride(mut self, stride: usize) -> Self {
        self.stride = Some(stride);
        self
    }

    /// Set the compression quality
    ///
    /// This is how many earlier positions the match finder remembers
    /// per hash bucket. Higher is slower but may compress better.
    ///
    /// - Default value: 8
    /// - Values below 5 are treated as 5
    pub fn set_quality(mut self, quality: u8) -> Self {
        self.quality = quality;
        self
    }

    pub fn set_filter(mut self, filter: FilterChoice) -> Self {
        self.filter = filter;
        self
    }

    /// Force a single filter for every row, `0..=4` select
    /// None, Sub, Up, Average or Paeth, anything else means adaptive
    pub fn set_filter_index(mut self, index: i32) -> Self {
        if index > 4 {
            warn!("Filter index {index} is out of range, using adaptive filtering");
        }
        self.filter = FilterChoice::from_index(index);
        self
    }

    pub fn set_forced_filter(self, method: FilterMethod) -> Self {
        self.set_filter(FilterChoice::Forced(method))
    }

    /// Store the last input row first
    pub fn set_flip_vertically(mut self, yes: bool) -> Self {
        self.flip_vertically = yes;
        self
    }

    /// Split compressed data into IDAT chunks of at most `size` bytes
    ///
    /// By default everything goes into a single IDAT chunk,
    /// a size of zero restores that.
    pub fn set_idat_chunk_size(mut self, size: usize) -> Self {
        self.idat_chunk_size = if size == 0 { None } else { Some(size) };
        self
    }

    pub(crate) fn deflate_options(&self) -> DeflateEncodingOptions {
        DeflateEncodingOptions::default().set_quality(self.quality)
    }
}
