use crate::{Error, Result};

/// XOR two equal-length buffers together.
pub fn xor_fixed(buf_a: &[u8], buf_b: &[u8]) -> Result<Vec<u8>> {
    if buf_a.is_empty() || buf_b.is_empty() {
        return Err(Error::EmptyInput);
    }
    if buf_a.len() != buf_b.len() {
        return Err(Error::LengthMismatch {
            left: buf_a.len(),
            right: buf_b.len(),
        });
    }
    Ok(buf_a
        .iter()
        .zip(buf_b.iter())
        .map(|(a, b)| a ^ b)
        .collect())
}

/// XOR `data` against `key`, cycling the key when it is shorter than the
/// data and truncating it when it is longer.
pub fn repeating_xor(data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    if data.is_empty() || key.is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(data
        .iter()
        .zip(key.iter().cycle())
        .map(|(d, k)| d ^ k)
        .collect())
}

/// XOR every byte of `data` with the same key byte.
pub fn xor_with_byte(data: &[u8], key: u8) -> Vec<u8> {
    data.iter().map(|b| b ^ key).collect()
}
