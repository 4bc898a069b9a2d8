/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Largest prime smaller than 65536
const ADLER_MOD: u32 = 65521;

/// Largest n such that 255n(n+1)/2 + (n+1)(ADLER_MOD-1) fits in a u32,
/// so sums can run that many bytes between modulo reductions.
const ADLER_NMAX: usize = 5552;

/// Calculate the adler32 checksum of `data` as used by the zlib trailer.
pub fn calc_adler_hash(data: &[u8]) -> u32 {
    let mut s1: u32 = 1;
    let mut s2: u32 = 0;

    for block in data.chunks(ADLER_NMAX) {
        for byte in block {
            s1 += u32::from(*byte);
            s2 += s1;
        }
        s1 %= ADLER_MOD;
        s2 %= ADLER_MOD;
    }
    (s2 << 16) | s1
}
