mod cipher;
mod english;
mod error;
mod keysize;
mod modes;
mod oracle;
mod padding;
mod single_byte;
mod vigenere;
mod xor;

pub use cipher::{Aes128, BlockCipher};
pub use english::FrequencyModel;
pub use error::{Error, Result};
pub use keysize::{
    estimate_keysize, hamming_distance, rank_keysizes, KeysizeScore, DEFAULT_KEYSIZE_RANGE,
};
pub use modes::{cbc_decrypt, cbc_encrypt, ecb_decrypt, ecb_encrypt, Mode};
pub use oracle::{detect_mode, encryption_oracle, random_key, repeated_block_count};
pub use padding::{pkcs7_pad, pkcs7_pad_to, pkcs7_unpad};
pub use single_byte::{break_single_byte_xor, find_single_byte_xor, Candidate};
pub use vigenere::{break_repeating_xor, break_repeating_xor_in, Recovered};
pub use xor::{repeating_xor, xor_fixed, xor_with_byte};
