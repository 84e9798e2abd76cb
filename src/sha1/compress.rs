use tracing::trace;

use crate::sha1::schedule::{Schedule, SCHEDULE_LEN};
use crate::sha1::state::ChainingState;

const K: [u32; 4] = [0x5A827999, 0x6ED9EBA1, 0x8F1BBCDC, 0xCA62C1D6];

fn round_function(j: usize, b: u32, c: u32, d: u32) -> (u32, u32) {
    match j {
        0..=19 => ((b & c) | ((!b) & d), K[0]),
        20..=39 => (b ^ c ^ d, K[1]),
        40..=59 => ((b & c) | (b & d) | (c & d), K[2]),
        _ => (b ^ c ^ d, K[3]),
    }
}

/// Runs the 80 rounds over one block's schedule and folds the result into `state`.
pub fn compress(state: &mut ChainingState, schedule: &Schedule) {
    let [mut a, mut b, mut c, mut d, mut e] = *state.words();
    let w = schedule.words();

    for j in 0..SCHEDULE_LEN {
        let (f, k) = round_function(j, b, c, d);
        let temp = a.rotate_left(5)
                    .wrapping_add(f)
                    .wrapping_add(e)
                    .wrapping_add(k)
                    .wrapping_add(w[j]);
        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = temp;
    }

    state.fold([a, b, c, d, e]);
    trace!(state = ?state.words(), "folded block");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sha1::padding::pad;

    #[test]
    fn choose_majority_and_parity() {
        let (b, c, d) = (0xF0F0F0F0, 0xCCCCCCCC, 0xAAAAAAAA);
        assert_eq!(round_function(0, b, c, d), (0xCACACACA, 0x5A827999));
        assert_eq!(round_function(19, b, c, d).0, 0xCACACACA);
        assert_eq!(round_function(20, b, c, d), (0x96969696, 0x6ED9EBA1));
        assert_eq!(round_function(40, b, c, d), (0xE8E8E8E8, 0x8F1BBCDC));
        assert_eq!(round_function(79, b, c, d), (0x96969696, 0xCA62C1D6));
    }

    #[test]
    fn single_block_abc() {
        let padded = pad(b"abc").unwrap();
        let mut state = ChainingState::INITIAL;
        compress(&mut state, &Schedule::new(&padded, 0));
        assert_eq!(state.words(), &[0xA9993E36, 0x4706816A, 0xBA3E2571, 0x7850C26C, 0x9CD0D89D]);
    }

    #[test]
    fn blocks_chain_through_state() {
        let padded = pad(&[0x5a; 100]).unwrap();
        assert_eq!(padded.len(), 128);

        let mut chained = ChainingState::INITIAL;
        compress(&mut chained, &Schedule::new(&padded, 0));
        compress(&mut chained, &Schedule::new(&padded, 64));

        let mut second_only = ChainingState::INITIAL;
        compress(&mut second_only, &Schedule::new(&padded, 64));

        assert_ne!(chained, second_only);
    }
}
