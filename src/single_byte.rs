// Breaking a single-byte XOR cipher is a brute force over a key space of
// 256: decrypt under every possible key byte, score each result as
// English, and keep the best fit. The candidates are independent, so the
// key space is walked with rayon; the reduction compares (score, key)
// pairs rather than arrival order, which keeps the result identical to a
// sequential ascending-key scan no matter how the work is scheduled.

use rayon::prelude::*;

use crate::{xor::xor_with_byte, Error, FrequencyModel, Result};

/// One brute-force attempt at a single-byte XOR key.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub key: u8,
    pub plaintext: Vec<u8>,
    pub score: f64,
}

/// Try all 256 key bytes against `ciphertext` and return the candidate
/// whose decryption best fits the frequency model. Ties go to the lowest
/// key byte. The solver always produces a candidate; if nothing decodes
/// to printable text the winner carries an infinite score, which callers
/// can rank or discard as usual.
pub fn break_single_byte_xor(ciphertext: &[u8], model: &FrequencyModel) -> Result<Candidate> {
    if ciphertext.is_empty() {
        return Err(Error::EmptyInput);
    }
    let best = (0..=255u8)
        .into_par_iter()
        .map(|key| {
            let plaintext = xor_with_byte(ciphertext, key);
            let score = model.score(&plaintext);
            Candidate {
                key,
                plaintext,
                score,
            }
        })
        .min_by(|a, b| a.score.total_cmp(&b.score).then(a.key.cmp(&b.key)))
        .expect("key space is never empty");
    Ok(best)
}

/// Run the single-byte solver over a batch of candidate buffers and
/// return the index and candidate of the one that decodes best. Useful
/// when exactly one buffer in a haystack is known to be XOR-encrypted.
pub fn find_single_byte_xor(
    candidates: &[Vec<u8>],
    model: &FrequencyModel,
) -> Result<(usize, Candidate)> {
    let mut best: Option<(usize, Candidate)> = None;
    for (index, buffer) in candidates.iter().enumerate() {
        let candidate = break_single_byte_xor(buffer, model)?;
        let better = match &best {
            Some((_, current)) => candidate.score < current.score,
            None => true,
        };
        if better {
            best = Some((index, candidate));
        }
    }
    best.ok_or(Error::EmptyInput)
}
