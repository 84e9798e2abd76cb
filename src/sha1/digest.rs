use std::fmt;
use std::str::FromStr;

use crate::sha1::state::{ChainingState, STATE_WORDS};
use crate::util::{from_hex, store_be_words, to_hex, HexError};

pub const DIGEST_LEN: usize = STATE_WORDS * 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    pub(crate) fn from_state(state: &ChainingState) -> Self {
        let mut bytes: [u8; DIGEST_LEN] = [0; DIGEST_LEN];
        store_be_words(state.words(), &mut bytes);
        Digest(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        to_hex(&self.0)
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Digest(bytes)
    }
}

impl From<Digest> for [u8; DIGEST_LEN] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Digest {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, HexError> {
        let bytes = from_hex(s.trim())?;
        let bytes: [u8; DIGEST_LEN] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| HexError::WrongLength { expected: DIGEST_LEN, actual: bytes.len() })?;
        Ok(Digest(bytes))
    }
}
