use crate::{pkcs7_pad, pkcs7_unpad, xor_fixed, BlockCipher, Error, Result};

/// Block-cipher modes this toolkit can run and detect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Ecb,
    Cbc,
}

/// Encrypt under ECB: pad the message, then transform every block
/// independently under the same key.
pub fn ecb_encrypt<C: BlockCipher>(cipher: &C, plaintext: &[u8]) -> Result<Vec<u8>> {
    let block_size = cipher.block_size();
    let mut ciphertext = pkcs7_pad(plaintext, block_size);
    for block in ciphertext.chunks_mut(block_size) {
        cipher.encrypt_block(block);
    }
    Ok(ciphertext)
}

/// Decrypt an ECB ciphertext. Padding is left in place; strip it with
/// [`pkcs7_unpad`] once the plaintext is known to be well-formed.
pub fn ecb_decrypt<C: BlockCipher>(cipher: &C, ciphertext: &[u8]) -> Result<Vec<u8>> {
    let block_size = cipher.block_size();
    check_block_multiple(ciphertext, block_size)?;

    let mut plaintext = ciphertext.to_vec();
    for block in plaintext.chunks_mut(block_size) {
        cipher.decrypt_block(block);
    }
    Ok(plaintext)
}

/// Encrypt under CBC: each padded plaintext block is XOR-ed with the
/// previous ciphertext block (the IV for the first) before the block
/// transform. The chain makes encryption strictly sequential.
pub fn cbc_encrypt<C: BlockCipher>(cipher: &C, plaintext: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
    let block_size = cipher.block_size();
    check_iv(iv, block_size)?;

    let mut ciphertext = pkcs7_pad(plaintext, block_size);
    let mut previous = iv.to_vec();
    for block in ciphertext.chunks_mut(block_size) {
        let mixed = xor_fixed(block, &previous)?;
        block.copy_from_slice(&mixed);
        cipher.encrypt_block(block);
        previous.copy_from_slice(block);
    }
    Ok(ciphertext)
}

/// Decrypt a CBC ciphertext: transform each block, then XOR with the
/// previous ciphertext block (the IV for the first). The chain advances
/// on the original ciphertext blocks, not the decrypted ones. Padding is
/// validated and stripped; a padding failure means tampering or the
/// wrong key and is fatal for the call.
pub fn cbc_decrypt<C: BlockCipher>(cipher: &C, ciphertext: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
    let block_size = cipher.block_size();
    check_iv(iv, block_size)?;
    check_block_multiple(ciphertext, block_size)?;

    let mut plaintext = Vec::with_capacity(ciphertext.len());
    let mut previous = iv;
    for block in ciphertext.chunks(block_size) {
        let mut decrypted = block.to_vec();
        cipher.decrypt_block(&mut decrypted);
        plaintext.extend_from_slice(&xor_fixed(&decrypted, previous)?);
        previous = block;
    }

    let message_len = pkcs7_unpad(&plaintext)?.len();
    plaintext.truncate(message_len);
    Ok(plaintext)
}

fn check_iv(iv: &[u8], block_size: usize) -> Result<()> {
    if iv.len() != block_size {
        return Err(Error::LengthMismatch {
            left: iv.len(),
            right: block_size,
        });
    }
    Ok(())
}

fn check_block_multiple(ciphertext: &[u8], block_size: usize) -> Result<()> {
    if ciphertext.is_empty() {
        return Err(Error::EmptyInput);
    }
    if ciphertext.len() % block_size != 0 {
        return Err(Error::TruncatedCiphertext {
            len: ciphertext.len(),
            block_size,
        });
    }
    Ok(())
}
