use std::fmt::Debug;
use std::io;

use byteorder::ByteOrder;

use super::{Digest, DigestAlgorithm};

pub trait Chunk: AsMut<[u8]> + Debug + Clone {
    fn new() -> Self;
    fn len() -> usize;
}

/// A compression function over fixed-size chunks.
///
/// Buffering, padding and the trailing length field are handled by
/// `ChunkedDigestWrapper`; implementors only ever see whole chunks.
pub trait ChunkedDigestAlgorithm {
    type Chunk: Chunk;
    type Digest: Digest;
    /// Byte order of the message length appended during padding.
    type LengthOrder: ByteOrder;

    fn new() -> Self;
    fn update_chunk(&mut self, chunk: &[u8]);
    fn digest(self) -> Self::Digest;
}

#[derive(Debug, Clone)]
pub struct ChunkedDigestWrapper<Inner: ChunkedDigestAlgorithm> {
    // Hash state
    inner: Inner,
    // Message length in bits, mod 2^64
    ml: u64,
    // In-progress chunk
    buffer_len: usize,
    buffer: Inner::Chunk
}

impl<Inner: ChunkedDigestAlgorithm> ChunkedDigestWrapper<Inner> {
    /// Total number of bits fed so far, modulo 2^64.
    pub fn message_len_bits(&self) -> u64 {
        self.ml
    }

    /// Number of bytes waiting for a full chunk.
    pub fn buffered_len(&self) -> usize {
        self.buffer_len
    }
}

impl<Inner: ChunkedDigestAlgorithm> DigestAlgorithm for ChunkedDigestWrapper<Inner> {
    type Digest = Inner::Digest;

    fn new() -> Self {
        ChunkedDigestWrapper {
            inner: Inner::new(),
            ml: 0,
            buffer_len: 0,
            buffer: Inner::Chunk::new()
        }
    }

    fn update(&mut self, mut input: &[u8]) {
        // Update message length (in bits)
        self.ml = self.ml.wrapping_add((input.len() as u64).wrapping_mul(8));

        let buffer_len = self.buffer_len;
        let chunk_len = Inner::Chunk::len();
        let buffer = self.buffer.as_mut();

        // If buffer is already partially filled
        if buffer_len > 0 {
            let remaining = chunk_len - buffer_len;
            // If input is not long enough to fill remaining space in buffer
            if input.len() < remaining {
                // Copy the whole input into the buffer and return
                buffer[buffer_len..buffer_len + input.len()].copy_from_slice(input);
                self.buffer_len += input.len();
                return;
            } else {
                // Fill the remaining space with input data and process the chunk
                buffer[buffer_len..].copy_from_slice(&input[..remaining]);
                input = &input[remaining..];
                self.inner.update_chunk(buffer);
            }
        }

        // Buffer is empty at this point, so can directly read chunks from input
        while input.len() >= chunk_len {
            self.inner.update_chunk(&input[..chunk_len]);
            input = &input[chunk_len..];
        }

        // Partially fill the buffer with any left-over input
        buffer[..input.len()].copy_from_slice(input);
        self.buffer_len = input.len();
    }

    fn digest(mut self) -> Self::Digest {
        let chunk_len = Inner::Chunk::len();
        let buffer = self.buffer.as_mut();

        // Append 1 bit
        buffer[self.buffer_len] = 0x80;
        self.buffer_len += 1;

        // Ensure there's room to write the message length
        if self.buffer_len + 8 > chunk_len {
            buffer[self.buffer_len..].fill(0);
            self.buffer_len = 0;
            self.inner.update_chunk(buffer);
        }

        // Fill remaining space with zeros followed by the message length
        buffer[self.buffer_len..chunk_len - 8].fill(0);
        Inner::LengthOrder::write_u64(&mut buffer[chunk_len - 8..], self.ml);
        // Final chunk computation
        self.inner.update_chunk(buffer);
        self.inner.digest()
    }
}

impl<Inner: ChunkedDigestAlgorithm> io::Write for ChunkedDigestWrapper<Inner> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
