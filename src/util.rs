use thiserror::Error;

pub mod io;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    #[error("hex string has odd length {0}")]
    OddLength(usize),
    #[error("invalid hex character {character:?} at index {index}")]
    InvalidCharacter { index: usize, character: char },
    #[error("expected {expected} bytes of hex but found {actual}")]
    WrongLength { expected: usize, actual: usize },
}

pub fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|&byte| format!("{byte:02x}")).collect::<Vec<_>>().join("")
}

fn nibble(index: usize, character: char) -> Result<u8, HexError> {
    character
        .to_digit(16)
        .map(|d| d as u8)
        .ok_or(HexError::InvalidCharacter { index, character })
}

pub fn from_hex(text: &str) -> Result<Vec<u8>, HexError> {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() % 2 != 0 {
        return Err(HexError::OddLength(chars.len()))
    }
    let mut bytes: Vec<u8> = Vec::with_capacity(chars.len() / 2);
    for (i, pair) in chars.chunks_exact(2).enumerate() {
        let high = nibble(i*2, pair[0])?;
        let low = nibble(i*2 + 1, pair[1])?;
        bytes.push((high << 4) | low);
    }
    Ok(bytes)
}

/// Stops at whichever of `bytes` or `words` runs out first.
pub fn load_be_words(bytes: &[u8], words: &mut [u32]) {
    for (word, quad) in words.iter_mut().zip(bytes.chunks_exact(4)) {
        *word = u32::from_be_bytes([quad[0], quad[1], quad[2], quad[3]]);
    }
}

pub fn store_be_words(words: &[u32], bytes: &mut [u8]) {
    for (quad, word) in bytes.chunks_exact_mut(4).zip(words) {
        quad.copy_from_slice(&word.to_be_bytes());
    }
}
