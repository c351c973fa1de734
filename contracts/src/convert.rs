use {
  crate::feed::{Error, PriceFeed},
  fundme_primitives::{Usd, Wei, NATIVE_DECIMALS},
};

/// Converts a native amount into whole truncated dollars through the
/// given feed.
///
/// The feed reports the price of one whole native unit at its own
/// decimal precision, so the product `wei * answer` carries
/// `feed.decimals() + 18` decimals that must be divided away to land
/// on whole dollars: 1 ETH against a 200000000000 answer at 8 decimals
/// converts to exactly 2000. All arithmetic is checked; a value too
/// large to convert surfaces as [`Error::Overflow`] rather than a
/// wrapped result.
pub fn to_usd(value: Wei, feed: &impl PriceFeed) -> Result<Usd, Error> {
  let answer = feed.latest_answer()?;
  if answer <= 0 {
    return Err(Error::NonPositive(answer));
  }
  let scale = 10u128
    .checked_pow(feed.decimals() as u32 + NATIVE_DECIMALS)
    .ok_or(Error::Overflow)?;
  let product = value
    .as_wei()
    .checked_mul(answer as u128)
    .ok_or(Error::Overflow)?;
  let dollars = u64::try_from(product / scale).map_err(|_| Error::Overflow)?;
  Ok(Usd::new(dollars))
}

#[cfg(test)]
mod tests {
  use {
    super::to_usd,
    crate::{feed, MockAggregator},
    fundme_primitives::{Address, Usd, Wei},
  };

  fn aggregator(decimals: u8, answer: i64) -> MockAggregator {
    let address: Address = "0x00000000000000000000000000000000000000fd"
      .parse()
      .unwrap();
    MockAggregator::new(address, decimals, answer)
  }

  #[test]
  fn one_eth_at_2000() -> anyhow::Result<()> {
    let feed = aggregator(8, 200_000_000_000);
    assert_eq!(to_usd(Wei::from_eth(1), &feed)?, Usd::new(2000));
    Ok(())
  }

  #[test]
  fn normalizes_any_feed_precision() -> anyhow::Result<()> {
    // the same 2000 USD/ETH price expressed at three precisions
    let answers = [
      (0, 2000),
      (8, 200_000_000_000),
      (12, 2_000_000_000_000_000),
    ];
    for (decimals, answer) in answers {
      let feed = aggregator(decimals, answer);
      assert_eq!(to_usd(Wei::from_eth(3), &feed)?, Usd::new(6000));
    }
    Ok(())
  }

  #[test]
  fn truncates_partial_dollars() -> anyhow::Result<()> {
    let feed = aggregator(8, 200_000_000_000);
    // 0.0012 ETH at 2000 USD/ETH is 2.40 USD, recorded as 2
    assert_eq!(to_usd("0.0012".parse()?, &feed)?, Usd::new(2));
    // just below one dollar truncates to zero
    assert_eq!(to_usd("0.00049".parse()?, &feed)?, Usd::ZERO);
    assert_eq!(to_usd(Wei::ZERO, &feed)?, Usd::ZERO);
    Ok(())
  }

  #[test]
  fn rejects_non_positive_answers() {
    for answer in [0, -1, -200_000_000_000] {
      let feed = aggregator(8, answer);
      assert_eq!(
        to_usd(Wei::from_eth(1), &feed),
        Err(feed::Error::NonPositive(answer))
      );
    }
  }

  #[test]
  fn surfaces_overflow_instead_of_wrapping() {
    let feed = aggregator(8, i64::MAX);
    assert_eq!(
      to_usd(Wei::new(u128::MAX), &feed),
      Err(feed::Error::Overflow)
    );
  }
}
