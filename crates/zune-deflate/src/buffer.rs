/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A growable byte sink for compressed output
use alloc::vec::Vec;

use crate::errors::DeflateEncodeErrors;

/// Extra room added on every growth, so that a freshly created buffer
/// doesn't need to reallocate for the first few bytes.
const GROWTH_CONSTANT: usize = 64;

/// A byte buffer which grows on demand.
///
/// Growth doubles the current capacity and adds a small constant,
/// happening at most once per push. Unlike `Vec::push`, failing to grow
/// is reported as an error instead of aborting the process.
#[derive(Default)]
pub struct ByteBuffer {
    data: Vec<u8>
}

impl ByteBuffer {
    /// Create an empty buffer, no allocation happens until the first push
    pub const fn new() -> ByteBuffer {
        ByteBuffer { data: Vec::new() }
    }

    /// Create a buffer able to hold `capacity` bytes before growing
    pub fn with_capacity(capacity: usize) -> Result<ByteBuffer, DeflateEncodeErrors> {
        let mut data = Vec::new();
        data.try_reserve_exact(capacity)
            .map_err(|_| DeflateEncodeErrors::AllocationFailed(capacity))?;

        Ok(ByteBuffer { data })
    }

    #[cold]
    fn grow(&mut self) -> Result<(), DeflateEncodeErrors> {
        let additional = self.data.capacity() + GROWTH_CONSTANT;

        self.data
            .try_reserve_exact(additional)
            .map_err(|_| DeflateEncodeErrors::AllocationFailed(self.data.len() + additional))
    }

    /// Append a single byte to the end of the buffer
    #[inline(always)]
    pub fn push(&mut self, byte: u8) -> Result<(), DeflateEncodeErrors> {
        if self.data.len() == self.data.capacity() {
            self.grow()?;
        }
        self.data.push(byte);
        Ok(())
    }

    /// Append all bytes in `bytes` to the end of the buffer
    pub fn push_slice(&mut self, bytes: &[u8]) -> Result<(), DeflateEncodeErrors> {
        while self.data.capacity() - self.data.len() < bytes.len() {
            self.grow()?;
        }
        self.data.extend_from_slice(bytes);
        Ok(())
    }

    /// Number of bytes written so far
    pub fn count(&self) -> usize {
        self.data.len()
    }

    #[cfg(test)]
    fn capacity(&self) -> usize {
        self.data.capacity()
    }

    #[cfg(test)]
    pub(crate) fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer returning the written bytes
    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }
}
