//! MD5 (RFC 1321).
//!
//! Not collision resistant. Only suitable for integrity checks against other
//! MD5 tools.

use byteorder::{ByteOrder, LittleEndian};

use super::chunked::{ChunkedDigestAlgorithm, ChunkedDigestWrapper};

define_digest!(MD5Digest, 16);
define_chunk!(MD5Chunk, 64);

// floor(abs(sin(i + 1)) * 2^32)
const K: [u32; 64] = [
    0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee, 0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501,
    0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be, 0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821,
    0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa, 0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8,
    0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed, 0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a,
    0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c, 0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70,
    0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05, 0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665,
    0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039, 0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1,
    0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1, 0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391
];

// Left rotation per step
const S: [u32; 64] = [
    7, 12, 17, 22, 7, 12, 17, 22, 7, 12, 17, 22, 7, 12, 17, 22,
    5,  9, 14, 20, 5,  9, 14, 20, 5,  9, 14, 20, 5,  9, 14, 20,
    4, 11, 16, 23, 4, 11, 16, 23, 4, 11, 16, 23, 4, 11, 16, 23,
    6, 10, 15, 21, 6, 10, 15, 21, 6, 10, 15, 21, 6, 10, 15, 21
];

#[derive(Debug, Clone)]
pub struct MD5Chunked {
    h: [u32; 4],
}

impl ChunkedDigestAlgorithm for MD5Chunked {
    type Digest = MD5Digest;
    type Chunk = MD5Chunk;
    type LengthOrder = LittleEndian;

    fn new() -> Self {
        MD5Chunked {
            h: [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476]
        }
    }

    fn update_chunk(&mut self, chunk: &[u8]) {
        let mut m = [0; 16];
        LittleEndian::read_u32_into(chunk, &mut m);

        // Copy hash state
        let mut h = self.h;

        // Bitwise functions
        let f_fn = |x: u32, y: u32, z: u32| (x & y) | (!x & z);
        let g_fn = |x: u32, y: u32, z: u32| (x & z) | (y & !z);
        let h_fn = |x: u32, y: u32, z: u32| x ^ y ^ z;
        let i_fn = |x: u32, y: u32, z: u32| y ^ (x | !z);

        for i in 0..64 {
            let (mix, word) = match i {
                 0..=15 => (f_fn(h[1], h[2], h[3]), i),
                16..=31 => (g_fn(h[1], h[2], h[3]), (5*i + 1) % 16),
                32..=47 => (h_fn(h[1], h[2], h[3]), (3*i + 5) % 16),
                48..=63 => (i_fn(h[1], h[2], h[3]), (7*i) % 16),
                      _ => unreachable!()
            };
            let temp = h[0]
                .wrapping_add(mix)
                .wrapping_add(K[i])
                .wrapping_add(m[word])
                .rotate_left(S[i]);

            // (a, b, c, d) <- (d, b + temp, b, c)
            h = [h[3], h[1].wrapping_add(temp), h[1], h[2]];
        }

        // Update hash state
        for i in 0..4 {
            self.h[i] = self.h[i].wrapping_add(h[i]);
        }
    }

    fn digest(self) -> Self::Digest {
        let mut result = [0; 16];
        LittleEndian::write_u32_into(&self.h, &mut result);
        MD5Digest(result)
    }
}

pub type MD5 = ChunkedDigestWrapper<MD5Chunked>;
