//! The latest-answer read façade.
//!
//! External consumers price the derivative through a minimal feed
//! interface: a fixed decimals constant and a latest-answer query.
//! The façade holds no state of its own; it reads the accumulator and
//! the live supply/clock supplied by the host.

use halyard_types::RATE_DECIMALS;

use crate::rate::RateAccumulator;

/// Read-only price feed over a [`RateAccumulator`].
#[derive(Clone, Copy, Debug)]
pub struct PriceFeed<'a> {
    accumulator: &'a RateAccumulator,
}

impl<'a> PriceFeed<'a> {
    /// Wrap an accumulator for reading.
    pub fn new(accumulator: &'a RateAccumulator) -> Self {
        Self { accumulator }
    }

    /// Fixed-point precision of [`latest_answer`](Self::latest_answer).
    pub fn decimals(&self) -> u8 {
        RATE_DECIMALS
    }

    /// The current exchange rate at [`decimals`](Self::decimals)
    /// precision. Defined for every input, including zero supply;
    /// callable by anyone, mutates nothing.
    pub fn latest_answer(&self, derivative_supply: u64, now: u64) -> u128 {
        self.accumulator.current_rate(derivative_supply, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use halyard_types::WAD;

    const T0: u64 = 1_700_000_000;

    #[test]
    fn test_decimals_fixed() {
        let acc = RateAccumulator::new(0, T0);
        assert_eq!(PriceFeed::new(&acc).decimals(), 18);
    }

    #[test]
    fn test_latest_answer_delegates() {
        let mut acc = RateAccumulator::new(2_000, T0);
        acc.harvest(500, 0, T0 + 10).expect("harvest");

        let feed = PriceFeed::new(&acc);
        assert_eq!(feed.latest_answer(2_000, T0 + 10), 2_500 * WAD / 2_000);
        assert_eq!(
            feed.latest_answer(2_000, T0 + 10),
            acc.current_rate(2_000, T0 + 10)
        );
    }

    #[test]
    fn test_latest_answer_zero_supply() {
        let acc = RateAccumulator::new(9_999, T0);
        let feed = PriceFeed::new(&acc);
        assert_eq!(feed.latest_answer(0, T0), WAD);
    }
}
