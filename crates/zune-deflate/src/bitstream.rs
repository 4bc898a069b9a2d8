/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Bit level writer and the fixed huffman code.
//!
//! Deflate packs codes starting from the least significant bit of each
//! byte, huffman codes are stored most significant bit first, so they are
//! reversed before being added to the accumulator while extra bits go in
//! as they are.
use crate::buffer::ByteBuffer;
use crate::constants::{
    DEFLATE_DISTANCE_BASE, DEFLATE_DISTANCE_EXTRA_BITS, DEFLATE_LENGTH_BASE,
    DEFLATE_LENGTH_EXTRA_BITS, DEFLATE_MAX_MATCH_LEN, DEFLATE_MIN_MATCH_LEN, DEFLATE_WINDOW_SIZE
};
use crate::errors::DeflateEncodeErrors;

/// Reverse the lowest `length` bits of `code`
#[inline(always)]
pub(crate) const fn reverse_bits(code: u32, length: u32) -> u32 {
    code.reverse_bits() >> (32 - length)
}

/// Return the code and its length for a literal/length symbol
/// using the fixed huffman table.
///
/// | symbols  | bits | codes           |
/// |----------|------|-----------------|
/// | 0-143    | 8    | 0x30  - 0xBF    |
/// | 144-255  | 9    | 0x190 - 0x1FF   |
/// | 256-279  | 7    | 0x00  - 0x17    |
/// | 280-287  | 8    | 0xC0  - 0xC7    |
#[inline(always)]
pub(crate) const fn fixed_litlen_code(symbol: u16) -> (u32, u32) {
    let symbol = symbol as u32;

    match symbol {
        0..=143 => (0x30 + symbol, 8),
        144..=255 => (0x190 + symbol - 144, 9),
        256..=279 => (symbol - 256, 7),
        _ => (0xC0 + symbol - 280, 8)
    }
}

/// Map a match length to its length code index (0..29, add 257 for the symbol)
#[inline]
pub(crate) fn length_code(length: usize) -> usize {
    debug_assert!((DEFLATE_MIN_MATCH_LEN..=DEFLATE_MAX_MATCH_LEN).contains(&length));

    let mut code = 0;
    while length >= usize::from(DEFLATE_LENGTH_BASE[code + 1]) {
        code += 1;
    }
    code
}

/// Map a match distance to its distance code (0..30)
#[inline]
pub(crate) fn distance_code(distance: usize) -> usize {
    debug_assert!((1..=DEFLATE_WINDOW_SIZE).contains(&distance));

    let mut code = 0;
    while distance >= DEFLATE_DISTANCE_BASE[code + 1] as usize {
        code += 1;
    }
    code
}

/// Packs variable sized codes into bytes
///
/// Bits accumulate in a small register and whole bytes are moved
/// to the output as soon as they are available, so the register never
/// holds more than 7 bits between writes.
pub(crate) struct BitStreamWriter {
    buffer:            u32,
    bits:              u32,
    pub(crate) output: ByteBuffer
}

impl BitStreamWriter {
    pub fn new(output: ByteBuffer) -> BitStreamWriter {
        BitStreamWriter {
            buffer: 0,
            bits:   0,
            output
        }
    }

    /// Add the lowest `length` bits of `value` to the stream.
    ///
    /// `length` must not exceed 24.
    #[inline(always)]
    pub fn put_bits(&mut self, value: u32, length: u32) -> Result<(), DeflateEncodeErrors> {
        debug_assert!(length <= 24);
        debug_assert!(length == 0 || value >> length == 0);

        self.buffer |= value << self.bits;
        self.bits += length;
        self.flush()
    }

    /// Move all whole bytes in the accumulator to the output
    #[inline(always)]
    fn flush(&mut self) -> Result<(), DeflateEncodeErrors> {
        while self.bits >= 8 {
            self.output.push((self.buffer & 0xFF) as u8)?;
            self.buffer >>= 8;
            self.bits -= 8;
        }
        Ok(())
    }

    /// Write a huffman code, which is stored most significant bit first
    #[inline(always)]
    pub fn put_code(&mut self, code: u32, length: u32) -> Result<(), DeflateEncodeErrors> {
        self.put_bits(reverse_bits(code, length), length)
    }

    /// Write a literal/length symbol with the fixed huffman table
    #[inline(always)]
    pub fn put_fixed_symbol(&mut self, symbol: u16) -> Result<(), DeflateEncodeErrors> {
        let (code, length) = fixed_litlen_code(symbol);
        self.put_code(code, length)
    }

    /// Write a `(length, distance)` back reference with the fixed tables
    pub fn put_fixed_match(
        &mut self, length: usize, distance: usize
    ) -> Result<(), DeflateEncodeErrors> {
        let l_code = length_code(length);

        self.put_fixed_symbol(257 + l_code as u16)?;

        let l_extra = u32::from(DEFLATE_LENGTH_EXTRA_BITS[l_code]);
        if l_extra != 0 {
            let extra = (length - usize::from(DEFLATE_LENGTH_BASE[l_code])) as u32;
            self.put_bits(extra, l_extra)?;
        }

        let d_code = distance_code(distance);
        // fixed distance codes are plain 5 bit numbers
        self.put_code(d_code as u32, 5)?;

        let d_extra = u32::from(DEFLATE_DISTANCE_EXTRA_BITS[d_code]);
        if d_extra != 0 {
            let extra = (distance - DEFLATE_DISTANCE_BASE[d_code] as usize) as u32;
            self.put_bits(extra, d_extra)?;
        }
        Ok(())
    }

    /// Pad the stream with zero bits until it ends on a byte boundary
    pub fn align_to_byte(&mut self) -> Result<(), DeflateEncodeErrors> {
        if self.bits > 0 {
            self.output.push((self.buffer & 0xFF) as u8)?;
        }
        self.buffer = 0;
        self.bits = 0;
        Ok(())
    }

    /// Number of bits waiting in the accumulator
    #[cfg(test)]
    pub const fn pending_bits(&self) -> u32 {
        self.bits
    }
}
