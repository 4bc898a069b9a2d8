/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during compression
use core::fmt::{Debug, Display, Formatter};

/// Errors encountered during encoding
///
/// Compression itself cannot fail on any input, the only failure
/// is running out of memory for the output or the match finder tables.
pub enum DeflateEncodeErrors {
    /// Could not grow a buffer to the requested capacity
    ///
    /// The argument is the capacity in elements which we asked for
    AllocationFailed(usize)
}

impl Debug for DeflateEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::AllocationFailed(size) => {
                writeln!(f, "Could not allocate space for {size} elements")
            }
        }
    }
}

impl Display for DeflateEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DeflateEncodeErrors {}
