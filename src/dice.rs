//! Source of randomness shared by the board generator and the targeting AI.
//!
//! Every `rand::Rng` is a `Dice`, so callers normally hand over a
//! `SmallRng` or `rand::rng()`. Tests can script exact draws instead.

use rand::Rng;

pub trait Dice {
    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Fair coin.
    fn flip(&mut self) -> bool;
}

impl<R: Rng + ?Sized> Dice for R {
    fn pick_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }

    fn flip(&mut self) -> bool {
        self.random()
    }
}

#[cfg(test)]
pub(crate) mod scripted {
    use super::Dice;
    use alloc::collections::VecDeque;
    use alloc::vec::Vec;

    /// Replays a fixed list of draws, then falls back to index 0 / `false`.
    pub(crate) struct ScriptedDice {
        indices: VecDeque<usize>,
        flips: VecDeque<bool>,
    }

    impl ScriptedDice {
        pub(crate) fn new(indices: Vec<usize>, flips: Vec<bool>) -> Self {
            Self {
                indices: indices.into(),
                flips: flips.into(),
            }
        }
    }

    impl Dice for ScriptedDice {
        fn pick_index(&mut self, len: usize) -> usize {
            let idx = self.indices.pop_front().unwrap_or(0);
            assert!(idx < len, "scripted index {} out of range 0..{}", idx, len);
            idx
        }

        fn flip(&mut self) -> bool {
            self.flips.pop_front().unwrap_or(false)
        }
    }
}
