/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Conformance tests for the png encoder
//!
//! Cases live in `tests/encode.json`, each describes a synthetic
//! image which is encoded and then decoded by independent decoders.
#![allow(unused)]

use std::path::{Path, PathBuf};

use nanorand::Rng;
use serde::Deserialize;
use xxhash_rust::xxh3::xxh3_128;
use zune_core::colorspace::ColorSpace;

mod encode;

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonColorspace {
    Luma,
    RGB,
    BGR,
    BGRA
}

impl JsonColorspace {
    pub fn to_colorspace(self) -> ColorSpace {
        match self {
            Self::Luma => ColorSpace::Luma,
            Self::RGB => ColorSpace::RGB,
            Self::BGR => ColorSpace::BGR,
            Self::BGRA => ColorSpace::BGRA
        }
    }
}

/// How the pixels of a test image are generated
#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pattern {
    Flat,
    Gradient,
    Checker,
    Noise,
    Smooth
}

#[derive(Clone, Deserialize, Debug)]
pub struct TestEntry {
    pub name:       String,
    pub width:      usize,
    pub height:     usize,
    pub colorspace: JsonColorspace,
    pub pattern:    Pattern,
    pub filter:     Option<i32>,
    pub quality:    Option<u8>,
    pub padding:    Option<usize>,
    pub flip:       Option<bool>,
    pub idat_size:  Option<usize>,
    pub comment:    Option<String>
}

pub fn sample_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests")
}

fn hash(contents: &[u8]) -> u128 {
    xxh3_128(contents)
}

/// Generate `height` rows of `row_bytes` bytes, each row followed
/// by `padding` bytes of junk
pub fn generate(pattern: Pattern, row_bytes: usize, height: usize, padding: usize, seed: u64) -> Vec<u8> {
    let mut rand = nanorand::WyRand::new_seed(seed);
    let stride = row_bytes + padding;
    let mut data = vec![0xCD_u8; stride * height];

    for y in 0..height {
        for x in 0..row_bytes {
            let value = match pattern {
                Pattern::Flat => 77,
                Pattern::Gradient => (x + y) as u8,
                Pattern::Checker => {
                    if ((x / 3) + (y / 3)) % 2 == 0 {
                        0
                    } else {
                        255
                    }
                }
                Pattern::Noise => rand.generate::<u8>(),
                Pattern::Smooth => {
                    let up = if y > 0 { data[(y - 1) * stride + x] } else { 128 };
                    up.wrapping_add(rand.generate_range(0_u8..5)).wrapping_sub(2)
                }
            };
            data[y * stride + x] = value;
        }
    }
    data
}
