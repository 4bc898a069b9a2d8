/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// The eight bytes every png starts with
pub const PNG_SIGNATURE: u64 = 0x89504E470D0A1A0A;

/// Largest value allowed in a chunk length field and in
/// the width and height fields of IHDR
pub const PNG_MAX_U31: usize = (1 << 31) - 1;

/// Bytes in IHDR's payload
pub const PNG_IHDR_LENGTH: usize = 13;

/// Length, type and crc fields surrounding every chunk payload
pub const PNG_CHUNK_OVERHEAD: usize = 12;
