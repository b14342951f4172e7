use std::io;
use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Cannot open file: {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },
    #[error("Cannot read file: {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("Unsupported algorithm: {0} (use: md5)")]
    UnsupportedAlgorithm(String),
}
