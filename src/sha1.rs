use thiserror::Error;
use tracing::debug;

pub mod compress;
pub mod digest;
pub mod padding;
pub mod schedule;
pub mod state;

use compress::compress;
use digest::Digest;
use padding::{pad, BLOCK_LEN};
use schedule::Schedule;
use state::ChainingState;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Sha1Error {
    #[error("input of {0} bytes has a bit length that does not fit in 64 bits")]
    InputTooLarge(usize),
}

/// A reusable SHA-1 hasher.
///
/// Every call to [`Sha1::digest`] or [`Sha1::hash`] starts from the initial
/// constants, so one instance can hash any number of unrelated inputs. The
/// calls take `&mut self`; share an instance across threads only behind a lock.
#[derive(Debug, Clone, Default)]
pub struct Sha1 {
    state: ChainingState,
}

impl Sha1 {
    pub fn new() -> Self {
        Sha1 { state: ChainingState::INITIAL }
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    pub fn digest(&mut self, bytes: &[u8]) -> Result<Digest, Sha1Error> {
        self.reset();
        let message = pad(bytes)?;
        debug!(input_len = bytes.len(), blocks = message.len() / BLOCK_LEN, "hashing");

        for offset in (0..message.len()).step_by(BLOCK_LEN) {
            let schedule = Schedule::new(&message, offset);
            compress(&mut self.state, &schedule);
        }

        Ok(Digest::from_state(&self.state))
    }

    pub fn hash(&mut self, bytes: &[u8]) -> Result<String, Sha1Error> {
        self.digest(bytes).map(|digest| digest.to_hex())
    }
}

pub fn sha1_hash(bytes: &[u8]) -> Result<Digest, Sha1Error> {
    Sha1::new().digest(bytes)
}

pub fn hash(bytes: &[u8]) -> Result<String, Sha1Error> {
    Sha1::new().hash(bytes)
}
