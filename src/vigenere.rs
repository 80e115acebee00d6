// A repeating-key XOR cipher is 256-way brute force in a trench coat.
// Every byte at the same offset modulo the key length was XOR-ed with the
// same key byte, so slicing the ciphertext into key-length chunks and
// transposing them yields one single-byte XOR problem per key position.
// The key length itself is estimated first from the normalized Hamming
// distance between chunk samples; because that estimate is statistical,
// the top few candidate lengths are each broken in full and the plaintext
// frequency score arbitrates between them.

use std::ops::Range;

use log::debug;

use crate::{
    break_single_byte_xor, rank_keysizes, repeating_xor, FrequencyModel, Result,
    DEFAULT_KEYSIZE_RANGE,
};

/// Number of ranked keysize candidates broken in full before the
/// plaintext scores decide the winner.
const KEYSIZE_CANDIDATES_TRIED: usize = 3;

/// Key and plaintext recovered from a repeating-key XOR ciphertext.
#[derive(Debug, Clone)]
pub struct Recovered {
    pub key: Vec<u8>,
    pub plaintext: Vec<u8>,
    pub score: f64,
}

/// Break a repeating-key XOR ciphertext, trying keysizes in the default
/// `2..40` range.
pub fn break_repeating_xor(ciphertext: &[u8], model: &FrequencyModel) -> Result<Recovered> {
    break_repeating_xor_in(ciphertext, model, DEFAULT_KEYSIZE_RANGE)
}

/// Break a repeating-key XOR ciphertext, trying keysizes from `keysizes`.
pub fn break_repeating_xor_in(
    ciphertext: &[u8],
    model: &FrequencyModel,
    keysizes: Range<usize>,
) -> Result<Recovered> {
    let ranked = rank_keysizes(ciphertext, keysizes)?;

    let mut best: Option<Recovered> = None;
    for candidate in ranked.iter().take(KEYSIZE_CANDIDATES_TRIED) {
        let recovered = break_with_keysize(ciphertext, model, candidate.keysize)?;
        let better = match &best {
            // A strictly lower plaintext score wins; on an exact tie the
            // shorter key does, so a key never loses to its own multiple.
            Some(current) => {
                recovered.score < current.score
                    || (recovered.score == current.score
                        && recovered.key.len() < current.key.len())
            }
            None => true,
        };
        if better {
            best = Some(recovered);
        }
    }

    let best = best.expect("rank_keysizes returns at least one viable keysize");
    debug!(
        "recovered a {} byte repeating key (plaintext score {:.3})",
        best.key.len(),
        best.score
    );
    Ok(best)
}

fn break_with_keysize(
    ciphertext: &[u8],
    model: &FrequencyModel,
    keysize: usize,
) -> Result<Recovered> {
    // Transpose: column c collects the bytes XOR-ed with key byte c. A
    // short final chunk simply contributes nothing to the late columns,
    // which then solve on one sample fewer.
    let mut key = (0..keysize)
        .map(|column| {
            let column_bytes: Vec<u8> = ciphertext
                .iter()
                .skip(column)
                .step_by(keysize)
                .copied()
                .collect();
            break_single_byte_xor(&column_bytes, model).map(|candidate| candidate.key)
        })
        .collect::<Result<Vec<u8>>>()?;

    // Estimating a multiple of the true key length recovers the key
    // repeated; collapse it back to its period.
    key.truncate(shortest_period(&key));

    let plaintext = repeating_xor(ciphertext, &key)?;
    let score = model.score(&plaintext);
    Ok(Recovered {
        key,
        plaintext,
        score,
    })
}

fn shortest_period(key: &[u8]) -> usize {
    for period in 1..key.len() {
        if key.len() % period == 0 && key.chunks(period).all(|chunk| chunk == &key[..period]) {
            return period;
        }
    }
    key.len()
}
