use std::fmt::Debug;

#[macro_use]
pub mod macros;
pub mod chunked;
pub mod md5;

pub trait Digest: Clone + AsRef<[u8]> + Into<Box<[u8]>> + Debug {
    /// Lowercase hex, two characters per byte.
    fn to_hex(&self) -> String {
        hex::encode(self.as_ref())
    }
}

/// An incremental hash context.
///
/// `digest` consumes the context, so a finalized context can't be fed more
/// input; start over with `new`.
pub trait DigestAlgorithm {
    type Digest: Digest;

    fn new() -> Self;
    fn update(&mut self, input: &[u8]);
    fn digest(self) -> Self::Digest;

    fn compute(input: &[u8]) -> Self::Digest where Self: Sized {
        let mut state = Self::new();
        state.update(input);
        state.digest()
    }
}
