use crate::sha1::padding::BLOCK_LEN;
use crate::util::load_be_words;

pub const SCHEDULE_LEN: usize = 80;

const BLOCK_WORDS: usize = BLOCK_LEN / 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    w: [u32; SCHEDULE_LEN],
}

impl Schedule {
    /// Expands the 64-byte block of `padded` starting at `offset`.
    ///
    /// `offset` must be a multiple of 64 with a whole block behind it, which
    /// every buffer returned by `pad` satisfies.
    pub fn new(padded: &[u8], offset: usize) -> Self {
        debug_assert_eq!(offset % BLOCK_LEN, 0);
        let block = &padded[offset..offset + BLOCK_LEN];

        let mut w: [u32; SCHEDULE_LEN] = [0; SCHEDULE_LEN];
        load_be_words(block, &mut w[..BLOCK_WORDS]);
        for i in BLOCK_WORDS..SCHEDULE_LEN {
            w[i] = (w[i-3] ^ w[i-8] ^ w[i-14] ^ w[i-16]).rotate_left(1);
        }
        Schedule { w }
    }

    pub fn words(&self) -> &[u32; SCHEDULE_LEN] {
        &self.w
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sha1::padding::pad;

    #[test]
    fn abc_block_words() {
        let padded = pad(b"abc").unwrap();
        let schedule = Schedule::new(&padded, 0);
        let w = schedule.words();
        assert_eq!(w[0], 0x61626380);
        assert!(w[1..15].iter().all(|&word| word == 0));
        assert_eq!(w[15], 0x00000018);
        // w13 ^ w8 ^ w2 ^ w0 is just w0 here
        assert_eq!(w[16], 0xC2C4C700);
    }

    #[test]
    fn second_block_is_read_from_offset() {
        let mut message = vec![0u8; 64];
        message.extend_from_slice(&[0xde, 0xad, 0xbe, 0xef]);
        let padded = pad(&message).unwrap();

        assert_eq!(Schedule::new(&padded, 0).words()[0], 0);
        let second = Schedule::new(&padded, 64);
        assert_eq!(second.words()[0], 0xdeadbeef);
        assert_eq!(second.words()[1], 0x80000000);
        assert_eq!(second.words()[15], 68 * 8);
    }

    #[test]
    fn expansion_follows_recurrence() {
        let block: Vec<u8> = (0u8..64).map(|b| b.wrapping_mul(37)).collect();
        let w = *Schedule::new(&block, 0).words();
        for i in 16..SCHEDULE_LEN {
            let mixed = w[i-3] ^ w[i-8] ^ w[i-14] ^ w[i-16];
            assert_eq!(w[i], (mixed << 1) | (mixed >> 31), "word {i}");
        }
    }

    #[test]
    fn rotate_left_round_trips() {
        let samples = [0u32, 1, 0x80000000, 0x61626380, 0xDEADBEEF, u32::MAX];
        for n in samples {
            for r in 1..32 {
                assert_eq!(n.rotate_left(r).rotate_left(32 - r), n);
            }
        }
    }
}
