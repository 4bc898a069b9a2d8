/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Scanline filters applied before compression
//!
//! A filtered scanline is the filter type byte followed by
//! one byte per input byte, all arithmetic is modulo 256.
//! The first row has no row above it, filters treat the
//! missing row as zeros.
use log::trace;

use crate::enums::{FilterChoice, FilterMethod};
use crate::error::PngEncodeErrors;

#[inline(always)]
pub fn paeth(a: u8, b: u8, c: u8) -> u8 {
    // branch free formulation from stb, it picks the same
    // predictor as the reference, ties go to a, then b, then c
    let a = i32::from(a);
    let b = i32::from(b);
    let c = i32::from(c);
    let thresh = c * 3 - (a + b);
    let lo = if a < b { a } else { b };
    let hi = if a < b { b } else { a };

    let t0 = if hi <= thresh { lo } else { c };
    let t1 = if thresh <= lo { hi } else { t0 };
    t1 as u8
}

fn filter_sub(current: &[u8], out: &mut [u8], components: usize) {
    out[..components].copy_from_slice(&current[..components]);

    for ((out_px, cur), left) in out[components..]
        .iter_mut()
        .zip(&current[components..])
        .zip(current)
    {
        *out_px = cur.wrapping_sub(*left);
    }
}

fn filter_up(current: &[u8], previous: Option<&[u8]>, out: &mut [u8]) {
    match previous {
        Some(previous) => {
            for ((out_px, cur), up) in out.iter_mut().zip(current).zip(previous) {
                *out_px = cur.wrapping_sub(*up);
            }
        }
        None => out.copy_from_slice(current)
    }
}

fn filter_average(current: &[u8], previous: Option<&[u8]>, out: &mut [u8], components: usize) {
    match previous {
        Some(previous) => {
            for i in 0..components {
                out[i] = current[i].wrapping_sub(previous[i] >> 1);
            }
            for (i, out_px) in out.iter_mut().enumerate().skip(components) {
                // nine bits of precision needed here
                let sum = u16::from(current[i - components]) + u16::from(previous[i]);
                *out_px = current[i].wrapping_sub((sum >> 1) as u8);
            }
        }
        None => {
            out[..components].copy_from_slice(&current[..components]);

            for (i, out_px) in out.iter_mut().enumerate().skip(components) {
                *out_px = current[i].wrapping_sub(current[i - components] >> 1);
            }
        }
    }
}

fn filter_paeth(current: &[u8], previous: Option<&[u8]>, out: &mut [u8], components: usize) {
    match previous {
        Some(previous) => {
            for i in 0..components {
                out[i] = current[i].wrapping_sub(paeth(0, previous[i], 0));
            }
            for (i, out_px) in out.iter_mut().enumerate().skip(components) {
                let predictor = paeth(
                    current[i - components],
                    previous[i],
                    previous[i - components]
                );
                *out_px = current[i].wrapping_sub(predictor);
            }
        }
        None => {
            out[..components].copy_from_slice(&current[..components]);

            for (i, out_px) in out.iter_mut().enumerate().skip(components) {
                *out_px = current[i].wrapping_sub(paeth(current[i - components], 0, 0));
            }
        }
    }
}

/// Filter a single scanline
///
/// # Arguments
/// - current: Unfiltered bytes of the row being encoded
/// - previous: Unfiltered bytes of the row encoded before this one,
///   `None` for the first row
/// - out: Filtered row without the filter type byte, must be as long as `current`
/// - method: Filter to apply
/// - components: Bytes per pixel
pub fn filter_scanline(
    current: &[u8], previous: Option<&[u8]>, out: &mut [u8], method: FilterMethod,
    components: usize
) {
    debug_assert_eq!(current.len(), out.len());
    debug_assert!(previous.map_or(true, |p| p.len() == current.len()));
    debug_assert!(current.len() >= components);

    match method {
        FilterMethod::None => out.copy_from_slice(current),
        FilterMethod::Sub => filter_sub(current, out, components),
        FilterMethod::Up => filter_up(current, previous, out),
        FilterMethod::Average => filter_average(current, previous, out, components),
        FilterMethod::Paeth => filter_paeth(current, previous, out, components)
    }
}

/// Estimate how well a filtered row will compress, lower is better
///
/// Bytes are read as signed so that small negative
/// differences count as small.
pub fn filter_cost(filtered: &[u8]) -> u64 {
    filtered
        .iter()
        .map(|x| u64::from((*x as i8).unsigned_abs()))
        .sum()
}

/// Geometry of the pixels being filtered
#[derive(Debug, Copy, Clone)]
pub(crate) struct ScanlineLayout {
    pub(crate) row_bytes:  usize,
    pub(crate) stride:     usize,
    pub(crate) height:     usize,
    pub(crate) components: usize
}

impl ScanlineLayout {
    fn row<'a>(&self, pixels: &'a [u8], y: usize, flip: bool) -> &'a [u8] {
        let source_row = if flip { self.height - 1 - y } else { y };
        let start = source_row * self.stride;

        &pixels[start..start + self.row_bytes]
    }
}

/// Filter every row of `pixels` into `plane`
///
/// `plane` ends up holding `height` rows of `row_bytes + 1` bytes,
/// `line` is scratch space used while comparing filters.
///
/// Rows are emitted last to first when `flip` is set, the row above
/// is always the one emitted before.
pub(crate) fn filter_image(
    pixels: &[u8], layout: ScanlineLayout, choice: FilterChoice, flip: bool,
    plane: &mut Vec<u8>, line: &mut Vec<u8>
) -> Result<(), PngEncodeErrors> {
    let filtered_row = layout.row_bytes + 1;
    let plane_size = filtered_row
        .checked_mul(layout.height)
        .ok_or(PngEncodeErrors::Overflow)?;

    plane.clear();
    plane
        .try_reserve_exact(plane_size)
        .map_err(|_| PngEncodeErrors::Generic("Could not allocate space for filtered rows"))?;
    plane.resize(plane_size, 0);

    if choice == FilterChoice::Adaptive {
        line.clear();
        line.try_reserve_exact(layout.row_bytes)
            .map_err(|_| PngEncodeErrors::Generic("Could not allocate space for a scanline"))?;
        line.resize(layout.row_bytes, 0);
    }

    let mut previous: Option<&[u8]> = None;

    for (y, out_row) in plane.chunks_exact_mut(filtered_row).enumerate() {
        let current = layout.row(pixels, y, flip);
        let (filter_byte, out) = out_row.split_at_mut(1);

        let method = match choice {
            FilterChoice::Forced(method) => {
                filter_scanline(current, previous, out, method, layout.components);
                method
            }
            FilterChoice::Adaptive => {
                let mut best_method = FilterMethod::None;
                let mut best_cost = u64::MAX;

                for method in FilterMethod::ALL {
                    filter_scanline(current, previous, line, method, layout.components);

                    let cost = filter_cost(line);
                    // strict comparison, earlier filters win ties
                    if cost < best_cost {
                        best_cost = cost;
                        best_method = method;
                        out.copy_from_slice(line);
                    }
                }
                best_method
            }
        };
        filter_byte[0] = method.to_int();
        previous = Some(current);
    }
    trace!(
        "Filtered {} rows of {} bytes with {:?}",
        layout.height,
        layout.row_bytes,
        choice
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::enums::{FilterChoice, FilterMethod};
    use crate::filters::{filter_cost, filter_image, filter_scanline, paeth, ScanlineLayout};

    fn reference_paeth(a: u8, b: u8, c: u8) -> u8 {
        let p = i32::from(a) + i32::from(b) - i32::from(c);
        let pa = (p - i32::from(a)).abs();
        let pb = (p - i32::from(b)).abs();
        let pc = (p - i32::from(c)).abs();

        if pa <= pb && pa <= pc {
            a
        } else if pb <= pc {
            b
        } else {
            c
        }
    }

    #[test]
    fn test_paeth_matches_reference() {
        for a in (0..=255).step_by(5) {
            for b in (0..=255).step_by(3) {
                for c in (0..=255).step_by(7) {
                    assert_eq!(paeth(a, b, c), reference_paeth(a, b, c), "{a} {b} {c}");
                }
            }
        }
        // ties
        assert_eq!(paeth(10, 10, 10), 10);
        assert_eq!(paeth(0, 50, 0), 50);
        assert_eq!(paeth(40, 0, 0), 40);
    }

    #[test]
    fn test_zero_rows_filter_to_zero() {
        let row = [0_u8; 12];
        let mut out = [0xAA_u8; 12];

        for method in FilterMethod::ALL {
            filter_scanline(&row, Some(&row[..]), &mut out, method, 3);
            assert_eq!(out, [0; 12]);
            filter_scanline(&row, None, &mut out, method, 3);
            assert_eq!(out, [0; 12]);
        }
    }

    #[test]
    fn test_first_row_variants() {
        let row = [10, 20, 30, 40, 50, 60];
        let mut out = [0; 6];

        filter_scanline(&row, None, &mut out, FilterMethod::Up, 2);
        assert_eq!(out, row);

        filter_scanline(&row, None, &mut out, FilterMethod::Sub, 2);
        assert_eq!(out, [10, 20, 20, 20, 20, 20]);

        // left only average
        filter_scanline(&row, None, &mut out, FilterMethod::Average, 2);
        assert_eq!(out, [10, 20, 25, 30, 35, 40]);

        // paeth(left, 0, 0) is always left
        filter_scanline(&row, None, &mut out, FilterMethod::Paeth, 2);
        assert_eq!(out, [10, 20, 20, 20, 20, 20]);
    }

    #[test]
    fn test_rows_with_previous() {
        let previous = [100, 200, 50];
        let current = [90, 210, 60];
        let mut out = [0; 3];

        filter_scanline(&current, Some(&previous[..]), &mut out, FilterMethod::Up, 1);
        assert_eq!(out, [246, 10, 10]);

        filter_scanline(&current, Some(&previous[..]), &mut out, FilterMethod::Average, 1);
        // 90-50, 210-((90+200)>>1), 60-((210+50)>>1)
        assert_eq!(out, [40, 65, 186]);

        filter_scanline(&current, Some(&previous[..]), &mut out, FilterMethod::Paeth, 1);
        let expected = [
            90_u8.wrapping_sub(100),
            210_u8.wrapping_sub(reference_paeth(90, 200, 100)),
            60_u8.wrapping_sub(reference_paeth(210, 50, 200))
        ];
        assert_eq!(out, expected);
    }

    #[test]
    fn test_filter_cost_is_signed() {
        assert_eq!(filter_cost(&[0, 1, 255, 128, 127]), 1 + 1 + 128 + 127);
    }

    #[test]
    fn test_adaptive_picks_cheapest() {
        // a horizontal gradient, sub turns it into a constant
        let pixels: Vec<u8> = (0..2).flat_map(|_| (0..16_u8).map(|x| x * 10)).collect();
        let layout = ScanlineLayout {
            row_bytes:  16,
            stride:     16,
            height:     2,
            components: 1
        };
        let mut plane = vec![];
        let mut line = vec![];

        filter_image(&pixels, layout, FilterChoice::Adaptive, false, &mut plane, &mut line).unwrap();

        assert_eq!(plane.len(), 34);
        assert_eq!(plane[0], FilterMethod::Sub.to_int());
        // identical rows, up gives all zeros
        assert_eq!(plane[17], FilterMethod::Up.to_int());
        assert!(plane[18..].iter().all(|x| *x == 0));
    }

    #[test]
    fn test_flat_image_prefers_none() {
        // every filter yields zeros, the first one wins the tie
        let pixels = [0_u8; 30];
        let layout = ScanlineLayout {
            row_bytes:  9,
            stride:     10,
            height:     3,
            components: 3
        };
        let mut plane = vec![];
        let mut line = vec![];

        filter_image(&pixels, layout, FilterChoice::Adaptive, false, &mut plane, &mut line).unwrap();
        assert_eq!(plane, vec![0; 30]);
    }

    #[test]
    fn test_flip_and_stride() {
        // rows of 2 bytes with 1 byte padding
        let pixels = [1, 2, 99, 3, 4, 99, 5, 6, 99];
        let layout = ScanlineLayout {
            row_bytes:  2,
            stride:     3,
            height:     3,
            components: 1
        };
        let mut plane = vec![];
        let mut line = vec![];

        filter_image(
            &pixels,
            layout,
            FilterChoice::Forced(FilterMethod::None),
            true,
            &mut plane,
            &mut line
        )
        .unwrap();
        assert_eq!(plane, [0, 5, 6, 0, 3, 4, 0, 1, 2]);

        // the row above a flipped row is the one emitted before it
        filter_image(
            &pixels,
            layout,
            FilterChoice::Forced(FilterMethod::Up),
            true,
            &mut plane,
            &mut line
        )
        .unwrap();
        assert_eq!(plane, [2, 5, 6, 2, 254, 254, 2, 254, 254]);
    }
}
