use crate::{Error, Result};

/// Pad `block` to exactly `target_len` bytes, PKCS#7 style: the value of
/// every appended byte is the number of bytes appended. A block already
/// at `target_len` gains a full extra `target_len` bytes of padding so
/// that unpadding is never ambiguous.
pub fn pkcs7_pad_to(block: &[u8], target_len: usize) -> Result<Vec<u8>> {
    if target_len < block.len() {
        return Err(Error::PadTarget {
            len: block.len(),
            target: target_len,
        });
    }
    let delta = target_len - block.len();
    let n_pad = if delta == 0 { target_len } else { delta };
    if n_pad == 0 || n_pad > u8::MAX as usize {
        return Err(Error::PadTarget {
            len: block.len(),
            target: target_len,
        });
    }

    let mut padded = Vec::with_capacity(block.len() + n_pad);
    padded.extend_from_slice(block);
    padded.extend(std::iter::repeat(n_pad as u8).take(n_pad));
    Ok(padded)
}

/// Pad a whole message up to the next multiple of `block_size`. A message
/// already on a block boundary gains one full block of padding.
pub fn pkcs7_pad(bytes: &[u8], block_size: usize) -> Vec<u8> {
    debug_assert!(block_size >= 1 && block_size <= u8::MAX as usize);
    let remainder = bytes.len() % block_size;
    let n_pad = block_size - remainder;
    let mut padded = Vec::with_capacity(bytes.len() + n_pad);
    padded.extend_from_slice(bytes);
    padded.extend(std::iter::repeat(n_pad as u8).take(n_pad));
    padded
}

/// Strip PKCS#7 padding, validating that all trailing pad bytes carry the
/// pad length. Inconsistent padding means tampering or the wrong key.
pub fn pkcs7_unpad(bytes: &[u8]) -> Result<&[u8]> {
    let &last = bytes.last().ok_or(Error::InvalidPadding)?;
    let n_pad = last as usize;
    if n_pad == 0 || n_pad > bytes.len() {
        return Err(Error::InvalidPadding);
    }
    let (body, pad) = bytes.split_at(bytes.len() - n_pad);
    if pad.iter().all(|&byte| byte == last) {
        Ok(body)
    } else {
        Err(Error::InvalidPadding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(b"YELLOW SUBMARINE", 20, b"YELLOW SUBMARINE\x04\x04\x04\x04")]
    #[case(b"YELLOWS!!!", 12, b"YELLOWS!!!\x02\x02")]
    #[case(b"YELL", 4, b"YELL\x04\x04\x04\x04")]
    fn pad_to_appends_self_describing_bytes(
        #[case] block: &[u8],
        #[case] target_len: usize,
        #[case] expected: &[u8],
    ) {
        let padded = pkcs7_pad_to(block, target_len).unwrap();

        assert_eq!(padded, expected);
    }

    #[test]
    fn pad_to_rejects_a_target_shorter_than_the_block() {
        let result = pkcs7_pad_to(b"YELLOW SUBMARINE", 10);

        assert_eq!(result, Err(Error::PadTarget { len: 16, target: 10 }));
    }

    #[test]
    fn pad_to_rejects_a_pad_run_wider_than_a_byte() {
        let block = vec![b'a'; 300];

        let result = pkcs7_pad_to(&block, 300);

        assert_eq!(
            result,
            Err(Error::PadTarget {
                len: 300,
                target: 300
            })
        );
    }

    #[rstest]
    #[case(b"YELL", 4)]
    #[case(b"YELLOW SUBMARINE", 20)]
    #[case(b"", 8)]
    fn unpad_reverses_pad_to(#[case] block: &[u8], #[case] target_len: usize) {
        let padded = pkcs7_pad_to(block, target_len).unwrap();

        let unpadded = pkcs7_unpad(&padded).unwrap();

        assert_eq!(unpadded, block);
    }

    #[rstest]
    #[case(b"ICE ICE BABY")]
    #[case(b"sixteen byte msg")]
    #[case(b"")]
    fn whole_message_pad_round_trips(#[case] message: &[u8]) {
        let padded = pkcs7_pad(message, 16);

        assert_eq!(padded.len() % 16, 0);
        assert!(padded.len() > message.len());
        assert_eq!(pkcs7_unpad(&padded).unwrap(), message);
    }

    #[test]
    fn aligned_messages_gain_a_full_block() {
        let padded = pkcs7_pad(b"YELLOW SUBMARINE", 16);

        assert_eq!(padded.len(), 32);
        assert_eq!(&padded[16..], &[16u8; 16]);
    }

    #[rstest]
    #[case(b"ICE ICE BABY\x05\x05\x05\x05")]
    #[case(b"ICE ICE BABY\x01\x02\x03\x04")]
    #[case(b"ICE ICE BABY\x00")]
    #[case(b"\x05")]
    #[case(b"")]
    fn unpad_rejects_inconsistent_padding(#[case] padded: &[u8]) {
        let result = pkcs7_unpad(padded);

        assert_eq!(result, Err(Error::InvalidPadding));
    }
}
