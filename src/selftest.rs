use std::fmt;

use tracing::{info, warn};

use crate::sha1::{Sha1, Sha1Error};

/// A message together with its published SHA-1 digest.
#[derive(Debug, Clone, Copy)]
pub struct KnownAnswer {
    pub name: &'static str,
    pub input: &'static [u8],
    pub expected: &'static str,
}

pub const KNOWN_ANSWERS: &[KnownAnswer] = &[
    KnownAnswer {
        name: "empty",
        input: b"",
        expected: "da39a3ee5e6b4b0d3255bfef95601890afd80709",
    },
    KnownAnswer {
        name: "abc",
        input: b"abc",
        expected: "a9993e364706816aba3e25717850c26c9cd0d89d",
    },
    KnownAnswer {
        name: "448-bit",
        input: b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        expected: "84983e441c3bd26ebaae4aa1f95129e5e54670f1",
    },
    KnownAnswer {
        name: "896-bit",
        input: b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu",
        expected: "a49b2446a02c645bf419f995b67091253a04a259",
    },
    KnownAnswer {
        name: "quick brown fox",
        input: b"The quick brown fox jumps over the lazy dog",
        expected: "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12",
    },
    KnownAnswer {
        name: "git empty blob",
        input: b"blob 0\0",
        expected: "e69de29bb2d1d6434b8b29ae775ad8c2e48c5391",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub name: &'static str,
    pub expected: &'static str,
    pub actual: String,
}

impl Outcome {
    pub fn passed(&self) -> bool {
        self.actual == self.expected
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let status = if self.passed() { "ok" } else { "FAILED" };
        write!(f, "{:<16} {} {}", self.name, self.actual, status)?;
        if !self.passed() {
            write!(f, " (expected {})", self.expected)?;
        }
        Ok(())
    }
}

/// Hashes every known-answer vector with a single reused hasher.
pub fn run(hasher: &mut Sha1) -> Result<Vec<Outcome>, Sha1Error> {
    let mut outcomes: Vec<Outcome> = Vec::with_capacity(KNOWN_ANSWERS.len());
    for vector in KNOWN_ANSWERS {
        let actual = hasher.hash(vector.input)?;
        let outcome = Outcome { name: vector.name, expected: vector.expected, actual };
        if outcome.passed() {
            info!(vector = vector.name, "known answer matched");
        } else {
            warn!(vector = vector.name, expected = vector.expected, actual = %outcome.actual, "known answer mismatch");
        }
        outcomes.push(outcome);
    }
    Ok(outcomes)
}
