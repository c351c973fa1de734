use {
  crate::feed::{Error, PriceFeed},
  fundme_primitives::Address,
  serde::{Deserialize, Serialize},
  std::sync::atomic::{AtomicI64, Ordering},
};

/// In-memory price aggregator for development networks.
///
/// Dev chains have no deployed oracles, so the harness stands up one
/// of these instead and wires its address into the contract. The
/// answer is mutable through a shared reference, which lets tests move
/// the price while a contract holds the feed.
#[derive(Debug, Serialize, Deserialize)]
pub struct MockAggregator {
  address: Address,
  decimals: u8,
  answer: AtomicI64,
}

impl MockAggregator {
  pub fn new(address: Address, decimals: u8, answer: i64) -> Self {
    Self {
      address,
      decimals,
      answer: AtomicI64::new(answer),
    }
  }

  /// Repoints the feed at a new price.
  pub fn set_answer(&self, answer: i64) {
    self.answer.store(answer, Ordering::Relaxed);
  }
}

impl PriceFeed for MockAggregator {
  fn address(&self) -> Address {
    self.address
  }

  fn decimals(&self) -> u8 {
    self.decimals
  }

  fn latest_answer(&self) -> Result<i64, Error> {
    Ok(self.answer.load(Ordering::Relaxed))
  }
}
