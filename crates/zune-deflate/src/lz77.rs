/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! LZ77 match finding
//!
//! Positions are indexed by a hash of the three bytes starting at them,
//! each hash bucket keeps the positions in the order they were seen so the
//! most recent one is last.
//!
//! Buckets are bounded: once a bucket holds `2*quality` positions the oldest
//! half is thrown away, so searching a bucket never costs more than
//! `2*quality` comparisons.
use alloc::vec::Vec;

use log::trace;

use crate::constants::{
    DEFLATE_HASH_SIZE, DEFLATE_MAX_MATCH_LEN, DEFLATE_MIN_MATCH_LEN, DEFLATE_MIN_QUALITY,
    DEFLATE_WINDOW_SIZE
};
use crate::errors::DeflateEncodeErrors;

/// A single output of the match finder
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Token {
    /// A byte copied as is
    Literal(u8),
    /// Copy `length` bytes starting `distance` bytes behind the current position
    Match { length: u16, distance: u16 },
    /// End of the block, symbol 256
    EndOfBlock
}

/// Receives tokens from the match finder in stream order
pub trait TokenSink {
    fn literal(&mut self, byte: u8) -> Result<(), DeflateEncodeErrors>;

    fn back_reference(&mut self, length: usize, distance: usize)
        -> Result<(), DeflateEncodeErrors>;

    fn end_of_block(&mut self) -> Result<(), DeflateEncodeErrors>;
}

impl TokenSink for Vec<Token> {
    fn literal(&mut self, byte: u8) -> Result<(), DeflateEncodeErrors> {
        self.push(Token::Literal(byte));
        Ok(())
    }

    fn back_reference(
        &mut self, length: usize, distance: usize
    ) -> Result<(), DeflateEncodeErrors> {
        self.push(Token::Match {
            length:   length as u16,
            distance: distance as u16
        });
        Ok(())
    }

    fn end_of_block(&mut self) -> Result<(), DeflateEncodeErrors> {
        self.push(Token::EndOfBlock);
        Ok(())
    }
}

/// Hash the three bytes at the start of `data` into a bucket index
#[inline(always)]
fn hash3(data: &[u8]) -> usize {
    let mut hash = u32::from(data[0]) | (u32::from(data[1]) << 8) | (u32::from(data[2]) << 16);

    hash ^= hash << 3;
    hash = hash.wrapping_add(hash >> 5);
    hash ^= hash << 4;
    hash = hash.wrapping_add(hash >> 17);
    hash ^= hash << 25;
    hash = hash.wrapping_add(hash >> 6);

    (hash as usize) & (DEFLATE_HASH_SIZE - 1)
}

/// Count how many bytes starting at `earlier` match those starting at
/// `current`, stopping at `limit` or the longest encodable match.
#[inline(always)]
fn match_length(data: &[u8], earlier: usize, current: usize, limit: usize) -> usize {
    let limit = limit.min(DEFLATE_MAX_MATCH_LEN);

    data[earlier..]
        .iter()
        .zip(&data[current..])
        .take(limit)
        .take_while(|(a, b)| a == b)
        .count()
}

/// Hash chain match finder
pub struct MatchFinder {
    table:   Vec<Vec<usize>>,
    quality: usize
}

impl MatchFinder {
    /// Create a new match finder
    ///
    /// `quality` bounds how many positions are remembered per bucket,
    /// values below 5 are treated as 5.
    pub fn new(quality: usize) -> Result<MatchFinder, DeflateEncodeErrors> {
        let mut table = Vec::new();

        table
            .try_reserve_exact(DEFLATE_HASH_SIZE)
            .map_err(|_| DeflateEncodeErrors::AllocationFailed(DEFLATE_HASH_SIZE))?;
        table.resize_with(DEFLATE_HASH_SIZE, Vec::new);

        Ok(MatchFinder {
            table,
            quality: quality.max(DEFLATE_MIN_QUALITY)
        })
    }

    pub const fn quality(&self) -> usize {
        self.quality
    }

    /// Remember that the bytes at `position` hash to `bucket`
    fn insert(&mut self, bucket: usize, position: usize) -> Result<(), DeflateEncodeErrors> {
        let quality = self.quality;
        let entries = &mut self.table[bucket];

        if entries.capacity() == 0 {
            // a bucket never holds more than 2*quality entries, so one
            // allocation is all it will ever need
            entries
                .try_reserve_exact(2 * quality)
                .map_err(|_| DeflateEncodeErrors::AllocationFailed(2 * quality))?;
        }
        if entries.len() == 2 * quality {
            // drop the oldest half
            entries.copy_within(quality.., 0);
            entries.truncate(quality);
        }
        entries.push(position);
        Ok(())
    }

    /// Find the longest match for `position` among the remembered positions
    /// in `bucket` that are no further back than the window allows.
    ///
    /// Returns `(length, start)` of the best match, later entries win ties.
    fn longest_match(&self, data: &[u8], bucket: usize, position: usize) -> Option<(usize, usize)> {
        let mut best_length = DEFLATE_MIN_MATCH_LEN;
        let mut best_start = None;

        for &start in &self.table[bucket] {
            if position - start < DEFLATE_WINDOW_SIZE {
                let length = match_length(data, start, position, data.len() - position);

                if length >= best_length {
                    best_length = length;
                    best_start = Some(start);
                }
            }
        }
        best_start.map(|start| (best_length, start))
    }

    /// Check whether any position in `bucket` gives a match for `position`
    /// longer than `length`
    fn has_longer_match(&self, data: &[u8], bucket: usize, position: usize, length: usize) -> bool {
        self.table[bucket].iter().any(|&start| {
            position - start < DEFLATE_WINDOW_SIZE
                && match_length(data, start, position, data.len() - position) > length
        })
    }

    /// Run the match finder over `data`, sending tokens to `sink`.
    ///
    /// The stream is terminated by an end of block token.
    pub fn compress<S: TokenSink>(
        &mut self, data: &[u8], sink: &mut S
    ) -> Result<(), DeflateEncodeErrors> {
        let mut matches = 0_usize;
        let mut i = 0;

        while i + DEFLATE_MIN_MATCH_LEN < data.len() {
            let bucket = hash3(&data[i..]);

            let mut best = self.longest_match(data, bucket, i);

            self.insert(bucket, i)?;

            if let Some((length, _)) = best {
                // lazy matching, if the next byte starts a longer match
                // emit this one as a literal and take that one instead
                let next_bucket = hash3(&data[i + 1..]);

                if self.has_longer_match(data, next_bucket, i + 1, length) {
                    best = None;
                }
            }

            match best {
                Some((length, start)) => {
                    sink.back_reference(length, i - start)?;
                    matches += 1;
                    i += length;
                }
                None => {
                    sink.literal(data[i])?;
                    i += 1;
                }
            }
        }
        // trailing bytes too short to start a match
        for byte in &data[i..] {
            sink.literal(*byte)?;
        }
        sink.end_of_block()?;

        trace!("Compressed {} bytes using {} back references", data.len(), matches);

        Ok(())
    }
}
