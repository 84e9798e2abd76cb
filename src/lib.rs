//! SHA-1 (FIPS 180-4) implemented from first principles.
//!
//! ```
//! assert_eq!(sha1::hash(b"abc").unwrap(), "a9993e364706816aba3e25717850c26c9cd0d89d");
//! ```

mod sha1;
mod util;

pub mod selftest;

pub use sha1::digest::{Digest, DIGEST_LEN};
pub use sha1::padding::{pad, BLOCK_LEN};
pub use sha1::{hash, sha1_hash, Sha1, Sha1Error};
pub use util::HexError;
pub use util::io::read_input;
