/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(clippy::upper_case_acronyms)]

/// Chunks written by the encoder, see table 5.3 of
/// the png spec at https://www.w3.org/TR/2003/REC-PNG-20031110/
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PngChunkType {
    IHDR,
    IDAT,
    IEND
}

impl PngChunkType {
    /// The four byte tag identifying the chunk in the stream
    pub const fn to_bytes(self) -> [u8; 4] {
        match self {
            Self::IHDR => *b"IHDR",
            Self::IDAT => *b"IDAT",
            Self::IEND => *b"IEND"
        }
    }
}

/// Per scanline filter types
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FilterMethod {
    None,
    Sub,
    Up,
    Average,
    Paeth
}

impl FilterMethod {
    /// All filters in the order the adaptive selection tries them
    pub const ALL: [FilterMethod; 5] = [
        FilterMethod::None,
        FilterMethod::Sub,
        FilterMethod::Up,
        FilterMethod::Average,
        FilterMethod::Paeth
    ];

    pub const fn from_int(int: u8) -> Option<FilterMethod> {
        match int {
            0 => Some(FilterMethod::None),
            1 => Some(FilterMethod::Sub),
            2 => Some(FilterMethod::Up),
            3 => Some(FilterMethod::Average),
            4 => Some(FilterMethod::Paeth),
            _ => None
        }
    }

    /// The filter type byte which starts each filtered scanline
    pub const fn to_int(self) -> u8 {
        match self {
            FilterMethod::None => 0,
            FilterMethod::Sub => 1,
            FilterMethod::Up => 2,
            FilterMethod::Average => 3,
            FilterMethod::Paeth => 4
        }
    }
}

/// How the encoder picks a filter for each scanline
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum FilterChoice {
    /// Try all filters for each row and keep the one whose output has
    /// the smallest sum of absolute (signed) byte values
    #[default]
    Adaptive,
    /// Use the same filter for every row
    Forced(FilterMethod)
}

impl FilterChoice {
    /// Map an integer to a filter choice, `0..=4` force that filter
    /// and anything else means adaptive.
    pub const fn from_index(index: i32) -> FilterChoice {
        if index < 0 || index > 4 {
            return FilterChoice::Adaptive;
        }
        match FilterMethod::from_int(index as u8) {
            Some(method) => FilterChoice::Forced(method),
            None => FilterChoice::Adaptive
        }
    }
}

/// Png color types the encoder can produce
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PngColor {
    Luma,
    RGB,
    RGBA
}

impl PngColor {
    /// Color type byte stored in IHDR
    pub const fn to_int(self) -> u8 {
        match self {
            PngColor::Luma => 0,
            PngColor::RGB => 2,
            PngColor::RGBA => 6
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::enums::{FilterChoice, FilterMethod};

    #[test]
    fn test_filter_index_mapping() {
        for (i, method) in FilterMethod::ALL.iter().enumerate() {
            assert_eq!(method.to_int() as usize, i);
            assert_eq!(FilterChoice::from_index(i as i32), FilterChoice::Forced(*method));
        }
        assert_eq!(FilterChoice::from_index(-1), FilterChoice::Adaptive);
        assert_eq!(FilterChoice::from_index(5), FilterChoice::Adaptive);
        assert_eq!(FilterChoice::from_index(100), FilterChoice::Adaptive);
    }
}
