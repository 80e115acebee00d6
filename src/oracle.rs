// ECB is stateless and deterministic per block: the same plaintext block
// always becomes the same ciphertext block under one key. Any ciphertext
// with a repeated block-sized chunk almost certainly came out of ECB,
// while CBC's chaining makes such a collision vanishingly unlikely. The
// detector is a heuristic, not a proof: it only bites when the plaintext
// contained repeated block-sized spans, so probes should feed the target
// a long run of identical bytes.

use std::collections::HashSet;

use log::debug;
use rand::Rng;

use crate::{cbc_encrypt, ecb_encrypt, Aes128, Mode, Result};

/// Number of block-sized chunks of `ciphertext` that also occur earlier
/// in the same ciphertext.
pub fn repeated_block_count(ciphertext: &[u8], block_size: usize) -> usize {
    let mut seen = HashSet::new();
    ciphertext
        .chunks(block_size)
        .filter(|block| !seen.insert(*block))
        .count()
}

/// Label an opaque ciphertext as ECB or CBC from repeated-block
/// collisions. Advisory: a best guess, not a verdict.
pub fn detect_mode(ciphertext: &[u8], block_size: usize) -> Mode {
    let repeats = repeated_block_count(ciphertext, block_size);
    let mode = if repeats > 0 { Mode::Ecb } else { Mode::Cbc };
    debug!("{repeats} repeated blocks, calling it {mode:?}");
    mode
}

/// A fresh random key or IV.
pub fn random_key<const N: usize>(rng: &mut impl Rng) -> [u8; N] {
    let mut key = [0u8; N];
    rng.fill(&mut key[..]);
    key
}

/// Encrypt `input` under a fresh random key, with 5-10 random bytes of
/// junk on either side, flipping a coin between ECB and CBC (random IV).
/// Returns the mode actually used so detection can be scored against it.
pub fn encryption_oracle(input: &[u8], rng: &mut impl Rng) -> Result<(Vec<u8>, Mode)> {
    let key = random_key::<16>(rng);
    let cipher = Aes128::new(&key);

    let n_prefix: usize = rng.gen_range(5..=10);
    let n_suffix: usize = rng.gen_range(5..=10);
    let mut message = Vec::with_capacity(n_prefix + input.len() + n_suffix);
    message.extend((0..n_prefix).map(|_| rng.gen::<u8>()));
    message.extend_from_slice(input);
    message.extend((0..n_suffix).map(|_| rng.gen::<u8>()));

    if rng.gen::<bool>() {
        Ok((ecb_encrypt(&cipher, &message)?, Mode::Ecb))
    } else {
        let iv = random_key::<16>(rng);
        Ok((cbc_encrypt(&cipher, &message, &iv)?, Mode::Cbc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::{cbc_decrypt, ecb_decrypt, pkcs7_unpad};

    #[test]
    fn repeated_blocks_are_counted() {
        let mut ciphertext = Vec::new();
        ciphertext.extend_from_slice(&[1u8; 16]);
        ciphertext.extend_from_slice(&[2u8; 16]);
        ciphertext.extend_from_slice(&[1u8; 16]);
        ciphertext.extend_from_slice(&[1u8; 16]);

        assert_eq!(repeated_block_count(&ciphertext, 16), 2);
        assert_eq!(detect_mode(&ciphertext, 16), Mode::Ecb);
    }

    #[test]
    fn distinct_blocks_read_as_cbc() {
        let mut ciphertext = Vec::new();
        ciphertext.extend_from_slice(&[1u8; 16]);
        ciphertext.extend_from_slice(&[2u8; 16]);

        assert_eq!(repeated_block_count(&ciphertext, 16), 0);
        assert_eq!(detect_mode(&ciphertext, 16), Mode::Cbc);
    }

    #[test]
    fn oracle_mode_is_detected_across_trials() {
        let mut rng = StdRng::seed_from_u64(0x1ce1ce);
        // A run of identical bytes long enough to survive any 5-10 byte
        // misalignment with at least two aligned identical blocks.
        let probe = [b'A'; 64];

        for _ in 0..50 {
            let (ciphertext, mode) = encryption_oracle(&probe, &mut rng).unwrap();

            assert_eq!(detect_mode(&ciphertext, 16), mode);
        }
    }

    #[test]
    fn oracle_output_decrypts_under_nothing_we_hold() {
        // The oracle never reveals its key; all a caller can rely on is
        // the ciphertext shape.
        let mut rng = StdRng::seed_from_u64(42);

        let (ciphertext, _) = encryption_oracle(b"some probe", &mut rng).unwrap();

        assert_eq!(ciphertext.len() % 16, 0);
        assert!(ciphertext.len() >= 32);
    }

    #[test]
    fn random_keys_differ() {
        let mut rng = StdRng::seed_from_u64(7);

        let key_a = random_key::<16>(&mut rng);
        let key_b = random_key::<16>(&mut rng);

        assert_ne!(key_a, key_b);
    }

    #[test]
    fn detection_works_on_ciphertext_we_can_also_decrypt() {
        let mut rng = StdRng::seed_from_u64(99);
        let key = random_key::<16>(&mut rng);
        let iv = random_key::<16>(&mut rng);
        let cipher = Aes128::new(&key);
        let message = [b'A'; 64];

        let ecb = ecb_encrypt(&cipher, &message).unwrap();
        let cbc = cbc_encrypt(&cipher, &message, &iv).unwrap();

        assert_eq!(detect_mode(&ecb, 16), Mode::Ecb);
        assert_eq!(detect_mode(&cbc, 16), Mode::Cbc);
        assert_eq!(
            pkcs7_unpad(&ecb_decrypt(&cipher, &ecb).unwrap()).unwrap(),
            message
        );
        assert_eq!(cbc_decrypt(&cipher, &cbc, &iv).unwrap(), message);
    }
}
