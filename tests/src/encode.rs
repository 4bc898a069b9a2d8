/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::read;

use zune_core::colorspace::ColorSpace;
use zune_pngenc::{PngEncoder, PngEncoderOptions};

use crate::{generate, hash, sample_path, TestEntry};

fn decode_ref(data: &[u8]) -> (png::OutputInfo, Vec<u8>) {
    let mut decoder = png::Decoder::new(data);
    decoder.set_transformations(png::Transformations::IDENTITY);
    let mut reader = decoder.read_info().unwrap();

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).unwrap();
    buf.truncate(info.buffer_size());

    (info, buf)
}

/// Concatenated IDAT payloads
fn idat_stream(png: &[u8]) -> Vec<u8> {
    let mut stream = Vec::new();
    let mut position = 8;

    while position + 12 <= png.len() {
        let length = u32::from_be_bytes(png[position..position + 4].try_into().unwrap()) as usize;
        if &png[position + 4..position + 8] == b"IDAT" {
            stream.extend_from_slice(&png[position + 8..position + 8 + length]);
        }
        position += 12 + length;
    }
    stream
}

/// What a decoder should give back, tightly packed rows in
/// png channel order and storage order
fn expected_pixels(entry: &TestEntry, source: &[u8], row_bytes: usize) -> Vec<u8> {
    let stride = row_bytes + entry.padding.unwrap_or(0);

    let mut rows: Vec<&[u8]> = source
        .chunks(stride)
        .take(entry.height)
        .map(|row| &row[..row_bytes])
        .collect();

    if entry.flip.unwrap_or(false) {
        rows.reverse();
    }
    let mut pixels: Vec<u8> = rows.concat();

    match entry.colorspace.to_colorspace() {
        ColorSpace::BGR => pixels.chunks_exact_mut(3).for_each(|x| x.swap(0, 2)),
        ColorSpace::BGRA => pixels.chunks_exact_mut(4).for_each(|x| x.swap(0, 2)),
        _ => ()
    }
    pixels
}

fn check_entry(entry: &TestEntry) -> Result<(), String> {
    let colorspace = entry.colorspace.to_colorspace();
    let row_bytes = entry.width * colorspace.num_components();
    let padding = entry.padding.unwrap_or(0);

    let source = generate(entry.pattern, row_bytes, entry.height, padding, entry.width as u64);

    let mut options = PngEncoderOptions::new(entry.width, entry.height, colorspace)
        .set_flip_vertically(entry.flip.unwrap_or(false));

    if padding != 0 {
        options = options.set_stride(row_bytes + padding);
    }
    if let Some(filter) = entry.filter {
        options = options.set_filter_index(filter);
    }
    if let Some(quality) = entry.quality {
        options = options.set_quality(quality);
    }
    if let Some(size) = entry.idat_size {
        options = options.set_idat_chunk_size(size);
    }

    let png = PngEncoder::new(&source, options)
        .encode_to_vec()
        .map_err(|e| format!("encoding failed {e:?}"))?;

    // inflate independently, every row must be a filter byte followed by the row
    let filtered = zune_inflate::DeflateDecoder::new(&idat_stream(&png))
        .decode_zlib()
        .map_err(|e| format!("inflate failed {e:?}"))?;

    if filtered.len() != (row_bytes + 1) * entry.height {
        return Err(format!("filtered size {} is wrong", filtered.len()));
    }
    if filtered.chunks_exact(row_bytes + 1).any(|row| row[0] > 4) {
        return Err("invalid filter type".to_string());
    }
    if let Some(filter @ 0..=4) = entry.filter {
        if filtered
            .chunks_exact(row_bytes + 1)
            .any(|row| i32::from(row[0]) != filter)
        {
            return Err(format!("rows not filtered with {filter}"));
        }
    }

    let (info, decoded) = decode_ref(&png);
    if (info.width as usize, info.height as usize) != (entry.width, entry.height) {
        return Err(format!("dimensions {}x{} are wrong", info.width, info.height));
    }

    let expected = hash(&expected_pixels(entry, &source, row_bytes));
    let found = hash(&decoded);

    if expected != found {
        return Err(format!("Expected {expected} but found {found}"));
    }
    Ok(())
}

#[test]
fn test_encode() {
    let file = sample_path().join("encode.json");
    let json_file = read(file).unwrap();

    let entries: Vec<TestEntry> = serde_json::from_slice(&json_file).unwrap();
    let mut errors = Vec::new();

    for entry in &entries {
        if let Err(reason) = check_entry(entry) {
            eprintln!("Mismatch for {}\n{}\nConfig:{:#?}\n", entry.name, reason, entry);
            errors.push(entry.name.clone());
        }
    }
    if !errors.is_empty() {
        panic!("Errors found during test encoding\n {:#?}", errors);
    }
}
