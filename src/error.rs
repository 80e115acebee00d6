use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("empty input buffer")]
    EmptyInput,
    #[error("buffer lengths differ: {left} vs {right} bytes")]
    LengthMismatch { left: usize, right: usize },
    #[error("ciphertext too short to score any keysize in the given range")]
    ShortCiphertext,
    #[error("invalid PKCS#7 padding")]
    InvalidPadding,
    #[error("cannot pad a {len} byte block to {target} bytes")]
    PadTarget { len: usize, target: usize },
    #[error("ciphertext length {len} is not a multiple of the {block_size} byte block size")]
    TruncatedCiphertext { len: usize, block_size: usize },
}
