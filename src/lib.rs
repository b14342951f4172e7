#[cfg(test)]
#[macro_use]
extern crate binary_macros;

pub mod digest;
pub mod error;
pub mod hash;
pub mod cli;
pub mod logging;

pub use error::{Error, Result};
