use {
  fundme_contracts::{
    FeedError, FundMe, MockAggregator, Payout, PriceFeed, Rejected,
  },
  fundme_primitives::{Address, Usd, Wei},
  std::sync::Arc,
};

pub const DECIMALS: u8 = 8;
pub const INITIAL_ANSWER: i64 = 200_000_000_000;
pub const MINIMUM_USD: Usd = Usd::new(5);

/// Deterministic address from a one-byte tag.
pub fn address(tag: u8) -> Address {
  Address::from([tag; 20])
}

pub fn owner() -> Address {
  address(0xa0)
}

pub fn aggregator() -> Arc<MockAggregator> {
  Arc::new(MockAggregator::new(address(0xfd), DECIMALS, INITIAL_ANSWER))
}

/// A fresh ledger wired to its own mock aggregator, the way dev
/// deployments construct one. The returned handle to the aggregator
/// can move the price while the ledger holds the feed.
pub fn deploy() -> (FundMe<Arc<MockAggregator>>, Arc<MockAggregator>) {
  let feed = aggregator();
  let fund_me = FundMe::new(owner(), MINIMUM_USD, Arc::clone(&feed));
  (fund_me, feed)
}

/// Records every transfer it is asked to make, standing in for the
/// owner's wallet.
#[derive(Debug, Default)]
pub struct Treasury {
  pub received: Vec<(Address, Wei)>,
}

impl Payout for Treasury {
  fn transfer(&mut self, to: Address, amount: Wei) -> Result<(), Rejected> {
    self.received.push((to, amount));
    Ok(())
  }
}

/// Refuses every transfer.
pub struct Rejecting;

impl Payout for Rejecting {
  fn transfer(&mut self, _: Address, _: Wei) -> Result<(), Rejected> {
    Err(Rejected)
  }
}

/// A feed that has gone dark.
pub struct OfflineFeed(pub Address);

impl PriceFeed for OfflineFeed {
  fn address(&self) -> Address {
    self.0
  }

  fn decimals(&self) -> u8 {
    DECIMALS
  }

  fn latest_answer(&self) -> Result<i64, FeedError> {
    Err(FeedError::Unavailable)
  }
}
