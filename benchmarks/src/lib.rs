/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::Rng;

/// A synthetic photo-like image
///
/// Neighbouring bytes differ by small random steps, which gives
/// the filters and the match finder realistic work.
pub fn sample_image(width: usize, height: usize, channels: usize, seed: u64) -> Vec<u8> {
    let mut rand = nanorand::WyRand::new_seed(seed);
    let row_bytes = width * channels;
    let mut data = vec![0_u8; row_bytes * height];

    for y in 0..height {
        for x in 0..row_bytes {
            let left = if x >= channels { data[y * row_bytes + x - channels] } else { 0 };
            let up = if y > 0 { data[(y - 1) * row_bytes + x] } else { 0 };
            let step = rand.generate_range(0_u8..6);

            data[y * row_bytes + x] = (((u16::from(left) + u16::from(up)) / 2) as u8)
                .wrapping_add(step)
                .wrapping_sub(2);
        }
    }
    data
}
