//! The `hash` command: digest a file or a literal string.

use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::debug;

use crate::digest::md5::MD5;
use crate::digest::{Digest, DigestAlgorithm};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Md5,
}

impl Algorithm {
    /// Label used in output lines.
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Md5 => "MD5",
        }
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "md5" => Ok(Algorithm::Md5),
            _ => Err(Error::UnsupportedAlgorithm(name.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    File(PathBuf),
    Text(String),
}

/// A computed digest together with what it was computed over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashLine {
    pub algorithm: Algorithm,
    pub target: Target,
    pub hex: String,
}

impl fmt::Display for HashLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.target {
            Target::File(ref path) => write!(f, "{} ({}) = {}", self.algorithm.label(), path.display(), self.hex),
            Target::Text(ref text) => write!(f, "{} (\"{}\") = {}", self.algorithm.label(), text, self.hex),
        }
    }
}

/// Streams `reader` to the end through a fresh context.
pub fn hash_reader<R: Read>(algorithm: Algorithm, reader: &mut R) -> io::Result<String> {
    match algorithm {
        Algorithm::Md5 => {
            let mut state = MD5::new();
            let copied = io::copy(reader, &mut state)?;
            debug!(bytes = copied, "hashed stream");
            Ok(state.digest().to_hex())
        }
    }
}

pub fn hash_bytes(algorithm: Algorithm, input: &[u8]) -> String {
    match algorithm {
        Algorithm::Md5 => MD5::compute(input).to_hex(),
    }
}

pub fn hash_file<P: AsRef<Path>>(algorithm: Algorithm, path: P) -> Result<HashLine> {
    let path = path.as_ref();
    debug!(?algorithm, path = %path.display(), "hashing file");

    let mut file = File::open(path).map_err(|source| Error::Open { path: path.to_owned(), source })?;
    let hex = hash_reader(algorithm, &mut file).map_err(|source| Error::Read { path: path.to_owned(), source })?;

    Ok(HashLine {
        algorithm,
        target: Target::File(path.to_owned()),
        hex,
    })
}

pub fn hash_text(algorithm: Algorithm, text: &str) -> HashLine {
    debug!(?algorithm, len = text.len(), "hashing text");
    HashLine {
        algorithm,
        target: Target::Text(text.to_owned()),
        hex: hash_bytes(algorithm, text.as_bytes()),
    }
}

/// Parses `algorithm` first so a bad selector fails before any I/O.
pub fn hash_target(algorithm: &str, target: Target) -> Result<HashLine> {
    let algorithm: Algorithm = algorithm.parse()?;
    match target {
        Target::File(path) => hash_file(algorithm, path),
        Target::Text(text) => Ok(hash_text(algorithm, &text)),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::Cursor;

    use super::*;

    fn scratch_file(name: &str, contents: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("caffeinated-hash-{}-{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn algorithm_selector() {
        assert_eq!("md5".parse::<Algorithm>().unwrap(), Algorithm::Md5);
        for name in ["MD5", "sha256", "", "md5 "] {
            match name.parse::<Algorithm>() {
                Err(Error::UnsupportedAlgorithm(n)) => assert_eq!(n, name),
                other => panic!("unexpected {:?}", other),
            }
        }
    }

    #[test]
    fn reader_matches_bytes() {
        let data: Vec<u8> = (0..5000u32).map(|i| (i * 31) as u8).collect();
        let streamed = hash_reader(Algorithm::Md5, &mut Cursor::new(&data)).unwrap();
        assert_eq!(streamed, hash_bytes(Algorithm::Md5, &data));
    }

    #[test]
    fn file_line() {
        let path = scratch_file("abc", b"abc");
        let line = hash_file(Algorithm::Md5, &path).unwrap();
        assert_eq!(line.to_string(), format!("MD5 ({}) = 900150983cd24fb0d6963f7d28e17f72", path.display()));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn empty_file() {
        let path = scratch_file("empty", b"");
        let line = hash_file(Algorithm::Md5, &path).unwrap();
        assert_eq!(line.hex, "d41d8cd98f00b204e9800998ecf8427e");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn text_line() {
        let line = hash_text(Algorithm::Md5, "hello world");
        assert_eq!(line.to_string(), "MD5 (\"hello world\") = 5eb63bbbe01eeed093cb22bb8f5acdc3");
    }

    #[test]
    fn missing_file() {
        let path = std::env::temp_dir().join("caffeinated-hash-does-not-exist");
        match hash_file(Algorithm::Md5, &path) {
            Err(Error::Open { path: p, .. }) => assert_eq!(p, path),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn directory_is_a_read_error() {
        // Opening a directory succeeds on unix; reading it fails.
        let dir = std::env::temp_dir().join(format!("caffeinated-hash-{}-dir", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let result = hash_file(Algorithm::Md5, &dir);
        fs::remove_dir(&dir).unwrap();

        match result {
            Err(err @ Error::Read { .. }) => {
                assert!(err.to_string().starts_with(&format!("Cannot read file: {}: ", dir.display())));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn algorithm_checked_before_io() {
        let target = Target::File(std::env::temp_dir().join("caffeinated-hash-does-not-exist"));
        match hash_target("sha256", target) {
            Err(err @ Error::UnsupportedAlgorithm(_)) => {
                assert_eq!(err.to_string(), "Unsupported algorithm: sha256 (use: md5)");
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
