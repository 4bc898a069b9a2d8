/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! CRC-32 as used by png chunks (reflected polynomial 0xEDB88320)

const CRC_TABLE: [u32; 256] = make_crc_table();

const fn make_crc_table() -> [u32; 256] {
    let mut table = [0_u32; 256];
    let mut n = 0;

    while n < 256 {
        let mut c = n as u32;
        let mut k = 0;

        while k < 8 {
            if c & 1 == 1 {
                c = 0xEDB8_8320 ^ (c >> 1);
            } else {
                c >>= 1;
            }
            k += 1;
        }
        table[n] = c;
        n += 1;
    }
    table
}

/// Update a running crc with `data`
///
/// The running value starts at `u32::MAX` and must be inverted
/// once all bytes have been fed, this allows a crc over
/// several disjoint slices.
pub fn calc_crc_with_bytes(data: &[u8], crc: u32) -> u32 {
    let mut crc = crc;

    for byte in data {
        crc = CRC_TABLE[((crc ^ u32::from(*byte)) & 0xFF) as usize] ^ (crc >> 8);
    }
    crc
}

/// Calculate the crc of `data`
pub fn calc_crc(data: &[u8]) -> u32 {
    !calc_crc_with_bytes(data, u32::MAX)
}
