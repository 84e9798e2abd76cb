pub const STATE_WORDS: usize = 5;

const H0: u32 = 0x67452301;
const H1: u32 = 0xEFCDAB89;
const H2: u32 = 0x98BADCFE;
const H3: u32 = 0x10325476;
const H4: u32 = 0xC3D2E1F0;

/// The running digest carried from one block to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainingState {
    h: [u32; STATE_WORDS],
}

impl ChainingState {
    pub const INITIAL: ChainingState = ChainingState { h: [H0, H1, H2, H3, H4] };

    pub fn words(&self) -> &[u32; STATE_WORDS] {
        &self.h
    }

    pub fn reset(&mut self) {
        *self = Self::INITIAL;
    }

    pub(crate) fn fold(&mut self, working: [u32; STATE_WORDS]) {
        for (h, v) in self.h.iter_mut().zip(working) {
            *h = h.wrapping_add(v);
        }
    }
}

impl Default for ChainingState {
    fn default() -> Self {
        Self::INITIAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_wraps_on_overflow() {
        let mut state = ChainingState::INITIAL;
        state.fold([u32::MAX, 0, 1, 0, 0]);
        assert_eq!(state.words(), &[H0 - 1, H1, H2 + 1, H3, H4]);
    }

    #[test]
    fn reset_restores_initial_constants() {
        let mut state = ChainingState::INITIAL;
        state.fold([7; STATE_WORDS]);
        assert_ne!(state, ChainingState::INITIAL);
        state.reset();
        assert_eq!(state, ChainingState::default());
    }
}
