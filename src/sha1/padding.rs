use crate::sha1::Sha1Error;

pub const BLOCK_LEN: usize = 64;

const LENGTH_LEN: usize = 8;

/// Bit length of a `len` byte message, or `InputTooLarge` if it needs more than 64 bits.
pub fn bit_length(len: usize) -> Result<u64, Sha1Error> {
    u64::try_from(len)
        .ok()
        .and_then(|n| n.checked_mul(8))
        .ok_or(Sha1Error::InputTooLarge(len))
}

fn padded_len(len: usize) -> Result<usize, Sha1Error> {
    len.checked_add(LENGTH_LEN)
        .and_then(|n| (n / BLOCK_LEN).checked_add(1))
        .and_then(|blocks| blocks.checked_mul(BLOCK_LEN))
        .ok_or(Sha1Error::InputTooLarge(len))
}

/// Returns a new buffer holding `bytes`, the 0x80 marker, zero fill up to 56 mod 64,
/// and the original bit length as a big-endian u64.
pub fn pad(bytes: &[u8]) -> Result<Vec<u8>, Sha1Error> {
    let message_length = bit_length(bytes.len())?;
    let total = padded_len(bytes.len())?;

    let mut message: Vec<u8> = Vec::with_capacity(total);
    message.extend_from_slice(bytes);
    message.push(0x80);
    message.resize(total - LENGTH_LEN, 0);
    message.extend(message_length.to_be_bytes());

    debug_assert_eq!(message.len() % BLOCK_LEN, 0);
    Ok(message)
}
