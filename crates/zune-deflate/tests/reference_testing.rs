/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Read;

use nanorand::Rng;
use zune_deflate::{calc_adler_hash, DeflateEncoder, DeflateEncodingOptions};

fn decode_flate_zlib(data: &[u8]) -> Vec<u8> {
    let mut decoder = flate2::read::ZlibDecoder::new(data);
    let mut out = Vec::new();
    decoder.read_to_end(&mut out).unwrap();
    out
}

fn decode_flate_raw(data: &[u8]) -> Vec<u8> {
    let mut decoder = flate2::read::DeflateDecoder::new(data);
    let mut out = Vec::new();
    decoder.read_to_end(&mut out).unwrap();
    out
}

fn decode_zune(data: &[u8]) -> Vec<u8> {
    zune_inflate::DeflateDecoder::new(data).decode_zlib().unwrap()
}

fn random_bytes(len: usize, alphabet: u8, seed: u64) -> Vec<u8> {
    let mut rand = nanorand::WyRand::new_seed(seed);
    (0..len).map(|_| rand.generate_range(0..alphabet)).collect()
}

fn test_round_trip(data: &[u8], quality: u8) {
    let options = DeflateEncodingOptions::default().set_quality(quality);

    let zlib = DeflateEncoder::new_with_options(data, options)
        .encode_zlib()
        .unwrap();

    assert_eq!(&zlib[0..2], &[0x78, 0x5e]);
    assert_eq!(
        &zlib[zlib.len() - 4..],
        &calc_adler_hash(data).to_be_bytes()
    );
    assert_eq!(decode_flate_zlib(&zlib), data);
    assert_eq!(decode_zune(&zlib), data);

    let raw = DeflateEncoder::new_with_options(data, options)
        .encode_deflate()
        .unwrap();
    // zlib is the raw stream with a header and trailer
    assert_eq!(&zlib[2..zlib.len() - 4], &raw[..]);
    assert_eq!(decode_flate_raw(&raw), data);
}

#[test]
fn test_empty_and_tiny() {
    test_round_trip(&[], 8);
    test_round_trip(&[0], 8);
    test_round_trip(&[1, 2], 8);
    test_round_trip(&[1, 2, 3], 8);
    test_round_trip(&[1, 2, 3, 1, 2, 3], 8);
}

#[test]
fn test_runs() {
    test_round_trip(&[0; 100_000], 8);
    test_round_trip(&[255; 70_000], 5);
}

#[test]
fn test_random_data() {
    // a small alphabet gives plenty of matches, a full one almost none
    test_round_trip(&random_bytes(50_000, 4, 1), 8);
    test_round_trip(&random_bytes(50_000, 16, 2), 20);
    test_round_trip(&random_bytes(50_000, 255, 3), 8);
}

#[test]
fn test_text_like() {
    let sentence = b"the quick brown fox jumps over the lazy dog, ";
    let data: Vec<u8> = sentence.iter().cycle().take(200_000).copied().collect();

    test_round_trip(&data, 8);
}

#[test]
fn test_matches_beyond_window() {
    // a pattern which repeats every 40000 bytes, too far to reference
    let block = random_bytes(40_000, 255, 4);
    let mut data = block.clone();
    data.extend_from_slice(&block);

    test_round_trip(&data, 8);
}

#[test]
fn test_deterministic() {
    let data = random_bytes(30_000, 8, 5);

    let a = DeflateEncoder::new(&data).encode_zlib().unwrap();
    let b = DeflateEncoder::new(&data).encode_zlib().unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_repetitive_data_compresses_at_lowest_quality() {
    let sentence = b"abcabdabeabfabgabhabiabjabkablabm";
    let data: Vec<u8> = sentence.iter().cycle().take(100_000).copied().collect();

    let options = DeflateEncodingOptions::default().set_quality(5);
    let compressed = DeflateEncoder::new_with_options(&data, options)
        .encode_zlib()
        .unwrap();

    assert!(compressed.len() < data.len() / 4);
    assert_eq!(decode_zune(&compressed), data);
}
