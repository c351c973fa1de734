use {fundme_primitives::Address, std::sync::Arc, thiserror::Error};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("Price feed has no data")]
  Unavailable,

  #[error("Price feed answered a non-positive price of {0}")]
  NonPositive(i64),

  #[error("USD conversion arithmetic overflowed")]
  Overflow,
}

/// Read-side capability of an external price aggregator.
///
/// The funding ledger never talks to an oracle directly; it holds one
/// handle to something implementing this trait, injected at
/// construction. Production deployments would back it with a live
/// aggregator contract, development chains and tests back it with
/// [`crate::MockAggregator`]. The answer is a signed fixed-point price
/// at the feed's own decimal precision, the shape aggregator contracts
/// report.
pub trait PriceFeed {
  /// Address the feed is deployed at. This is what deployment records
  /// and the `price_feed` accessor expose.
  fn address(&self) -> Address;

  /// Decimal precision of [`PriceFeed::latest_answer`].
  fn decimals(&self) -> u8;

  /// Most recent price of one whole native unit, in USD at
  /// [`PriceFeed::decimals`] precision.
  fn latest_answer(&self) -> Result<i64, Error>;
}

impl<F: PriceFeed + ?Sized> PriceFeed for &F {
  fn address(&self) -> Address {
    (**self).address()
  }

  fn decimals(&self) -> u8 {
    (**self).decimals()
  }

  fn latest_answer(&self) -> Result<i64, Error> {
    (**self).latest_answer()
  }
}

impl<F: PriceFeed + ?Sized> PriceFeed for Arc<F> {
  fn address(&self) -> Address {
    (**self).address()
  }

  fn decimals(&self) -> u8 {
    (**self).decimals()
  }

  fn latest_answer(&self) -> Result<i64, Error> {
    (**self).latest_answer()
  }
}
