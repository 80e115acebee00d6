use std::ops::Range;

use log::debug;

use crate::{Error, Result};

/// Keysizes tried when the caller has no better idea.
pub const DEFAULT_KEYSIZE_RANGE: Range<usize> = 2..40;

/// Number of differing bits between two equal-length buffers.
pub fn hamming_distance(left: &[u8], right: &[u8]) -> Result<u32> {
    if left.len() != right.len() {
        return Err(Error::LengthMismatch {
            left: left.len(),
            right: right.len(),
        });
    }
    Ok(bit_difference(left, right))
}

fn bit_difference(left: &[u8], right: &[u8]) -> u32 {
    left.iter()
        .zip(right.iter())
        .map(|(a, b)| (a ^ b).count_ones())
        .sum()
}

/// A candidate repeating-key length and its normalized average Hamming
/// distance over block samples. Lower distance means a better candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct KeysizeScore {
    pub keysize: usize,
    pub distance: f64,
}

/// Score every keysize in `range` against `ciphertext` and return them
/// sorted best-first. Keysizes the ciphertext is too short to sample
/// (fewer than two full chunks) are skipped; if that leaves nothing the
/// ciphertext cannot be estimated at all.
pub fn rank_keysizes(ciphertext: &[u8], range: Range<usize>) -> Result<Vec<KeysizeScore>> {
    if ciphertext.is_empty() {
        return Err(Error::EmptyInput);
    }
    let mut scores: Vec<KeysizeScore> = range
        .filter(|&keysize| keysize > 0 && ciphertext.len() >= 2 * keysize)
        .map(|keysize| KeysizeScore {
            keysize,
            distance: score_keysize(ciphertext, keysize),
        })
        .collect();
    if scores.is_empty() {
        return Err(Error::ShortCiphertext);
    }
    scores.sort_by(|a, b| {
        a.distance
            .total_cmp(&b.distance)
            .then(a.keysize.cmp(&b.keysize))
    });
    Ok(scores)
}

/// The single most promising repeating-key length for `ciphertext`.
pub fn estimate_keysize(ciphertext: &[u8], range: Range<usize>) -> Result<usize> {
    let ranked = rank_keysizes(ciphertext, range)?;
    let best = &ranked[0];
    debug!(
        "keysize guess: {} (normalized distance {:.3})",
        best.keysize, best.distance
    );
    Ok(best.keysize)
}

// Chunked at the true key period, ciphertext blocks were XOR-ed with the
// same key bytes, so the key cancels out of their pairwise XOR and the
// bit-level divergence drops to that of the underlying plaintext. The
// first two chunks are each compared against every other full-length
// chunk; a short trailing chunk is excluded from the sampling.
fn score_keysize(ciphertext: &[u8], keysize: usize) -> f64 {
    let chunks: Vec<&[u8]> = ciphertext
        .chunks(keysize)
        .filter(|chunk| chunk.len() == keysize)
        .collect();

    let mut total_bits = 0u64;
    let mut n_pairs = 0u64;
    for (i, probe) in chunks.iter().take(2).enumerate() {
        for (j, other) in chunks.iter().enumerate() {
            if i == j {
                continue;
            }
            total_bits += u64::from(bit_difference(probe, other));
            n_pairs += 1;
        }
    }

    total_bits as f64 / n_pairs as f64 / keysize as f64
}
