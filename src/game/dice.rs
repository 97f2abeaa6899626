use rand::Rng;
use rand_chacha::ChaCha8Rng;
use std::ops::RangeInclusive;

/// Every random draw the rules make goes through this trait, so a session can
/// run on a seeded generator and tests can replay exact draws.
pub trait Dice {
    /// Uniform integer in `range`, both ends inclusive.
    fn roll(&mut self, range: RangeInclusive<u32>) -> u32;

    /// Uniform element of a non-empty table.
    fn pick(&mut self, options: &[&'static str]) -> &'static str;
}

impl Dice for ChaCha8Rng {
    fn roll(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.gen_range(range)
    }

    fn pick(&mut self, options: &[&'static str]) -> &'static str {
        let idx = self.gen_range(0..options.len());
        options[idx]
    }
}

#[cfg(test)]
pub(crate) use scripted::ScriptedDice;

#[cfg(test)]
mod scripted {
    use super::Dice;
    use std::collections::VecDeque;
    use std::ops::RangeInclusive;

    /// Replays a fixed queue of draws. `roll` consumes the value itself,
    /// `pick` consumes a table index.
    pub(crate) struct ScriptedDice {
        draws: VecDeque<u32>,
    }

    impl ScriptedDice {
        pub(crate) fn new(draws: &[u32]) -> Self {
            Self {
                draws: draws.iter().copied().collect(),
            }
        }

        pub(crate) fn remaining(&self) -> usize {
            self.draws.len()
        }

        fn next(&mut self) -> u32 {
            self.draws.pop_front().expect("scripted dice exhausted")
        }
    }

    impl Dice for ScriptedDice {
        fn roll(&mut self, range: RangeInclusive<u32>) -> u32 {
            let value = self.next();
            assert!(
                range.contains(&value),
                "scripted draw {value} outside {range:?}"
            );
            value
        }

        fn pick(&mut self, options: &[&'static str]) -> &'static str {
            let idx = self.next() as usize;
            options[idx]
        }
    }
}
