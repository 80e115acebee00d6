use aes::cipher::{generic_array::GenericArray, BlockDecrypt, BlockEncrypt, KeyInit};

/// A keyed cipher that transforms exactly one block at a time. The block
/// modes are written against this seam, so anything with a fixed block
/// size can be chained or codebook-ed; the cryptanalysis side only ever
/// sees the resulting ciphertext.
pub trait BlockCipher {
    fn block_size(&self) -> usize;

    /// Encrypt a single block in place. `block` must be exactly
    /// `block_size` bytes.
    fn encrypt_block(&self, block: &mut [u8]);

    /// Decrypt a single block in place. `block` must be exactly
    /// `block_size` bytes.
    fn decrypt_block(&self, block: &mut [u8]);
}

/// AES-128 behind the [`BlockCipher`] seam. The 16 byte key doubles as
/// the block size, which is the assumption the rest of the toolkit makes.
pub struct Aes128 {
    inner: aes::Aes128,
}

impl Aes128 {
    pub const BLOCK_SIZE: usize = 16;

    pub fn new(key: &[u8; 16]) -> Self {
        Self {
            inner: aes::Aes128::new(GenericArray::from_slice(key)),
        }
    }
}

impl BlockCipher for Aes128 {
    fn block_size(&self) -> usize {
        Self::BLOCK_SIZE
    }

    fn encrypt_block(&self, block: &mut [u8]) {
        self.inner.encrypt_block(GenericArray::from_mut_slice(block));
    }

    fn decrypt_block(&self, block: &mut [u8]) {
        self.inner.decrypt_block(GenericArray::from_mut_slice(block));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // FIPS-197 appendix C.1.
    const KEY: [u8; 16] = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
        0x0f,
    ];
    const PLAINTEXT: [u8; 16] = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ];
    const CIPHERTEXT: [u8; 16] = [
        0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30, 0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4, 0xc5,
        0x5a,
    ];

    #[test]
    fn encrypts_the_fips_197_vector() {
        let cipher = Aes128::new(&KEY);
        let mut block = PLAINTEXT;

        cipher.encrypt_block(&mut block);

        assert_eq!(block, CIPHERTEXT);
    }

    #[test]
    fn decrypts_the_fips_197_vector() {
        let cipher = Aes128::new(&KEY);
        let mut block = CIPHERTEXT;

        cipher.decrypt_block(&mut block);

        assert_eq!(block, PLAINTEXT);
    }
}
