/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Size of the sliding window, back references can't go further than this
pub const DEFLATE_WINDOW_SIZE: usize = 32768;

/// Shortest match worth a back reference
pub const DEFLATE_MIN_MATCH_LEN: usize = 3;

/// Longest match a length code can represent
pub const DEFLATE_MAX_MATCH_LEN: usize = 258;

/// Number of hash buckets in the match finder, must be a power of two
pub const DEFLATE_HASH_SIZE: usize = 1 << 14;

/// Lowest quality we accept, anything lower is bumped up to this
pub const DEFLATE_MIN_QUALITY: usize = 5;

/// Symbol terminating a block
pub const DEFLATE_END_OF_BLOCK: u16 = 256;

/// Block type for blocks coded with the fixed huffman tables
pub const DEFLATE_BLOCKTYPE_STATIC_HUFFMAN: u32 = 1;

/// Base match length for length codes 257..=285, with a sentinel
/// at the end so that lookups can always peek at the next entry.
pub static DEFLATE_LENGTH_BASE: [u16; 30] = [
    3, 4, 5, 6, 7, 8, 9, 10, 11, 13, 15, 17, 19, 23, 27, 31, 35, 43, 51, 59, 67, 83, 99, 115, 131,
    163, 195, 227, 258, 259
];

/// Extra bits following each length code
pub static DEFLATE_LENGTH_EXTRA_BITS: [u8; 29] = [
    0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 3, 4, 4, 4, 4, 5, 5, 5, 5, 0
];

/// Base distance for distance codes 0..=29, with a sentinel.
pub static DEFLATE_DISTANCE_BASE: [u32; 31] = [
    1, 2, 3, 4, 5, 7, 9, 13, 17, 25, 33, 49, 65, 97, 129, 193, 257, 385, 513, 769, 1025, 1537, 2049,
    3073, 4097, 6145, 8193, 12289, 16385, 24577, 32769
];

/// Extra bits following each distance code
pub static DEFLATE_DISTANCE_EXTRA_BITS: [u8; 30] = [
    0, 0, 0, 0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9, 10, 10, 11, 11, 12, 12, 13,
    13
];
