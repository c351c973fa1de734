use {
  serde::{Deserialize, Serialize},
  std::{
    fmt::{Debug, Display},
    iter::Sum,
    ops::{Add, AddAssign, Sub},
    str::FromStr,
  },
  thiserror::Error,
};

/// Decimal precision of the native currency (1 ETH = 10^18 wei).
pub const NATIVE_DECIMALS: u32 = 18;

/// Number of wei in one whole ETH.
pub const WEI_PER_ETH: u128 = 1_000_000_000_000_000_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("Malformed ether amount '{0}'")]
  Malformed(String),

  #[error("Ether amount '{0}' has more than {NATIVE_DECIMALS} fractional digits")]
  TooPrecise(String),

  #[error("Ether amount '{0}' exceeds the native value range")]
  TooLarge(String),
}

/// An amount of native currency in its smallest unit.
///
/// Values parse from and display as decimal ether ("0.04", "1.5"),
/// which is the form operational scripts and configuration use, while
/// all arithmetic happens on the integer wei representation.
#[derive(
  Debug,
  Copy,
  Clone,
  Default,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
  Serialize,
  Deserialize,
)]
pub struct Wei(u128);

impl Wei {
  pub const ZERO: Wei = Wei(0);

  pub const fn new(wei: u128) -> Self {
    Self(wei)
  }

  pub const fn from_eth(eth: u64) -> Self {
    Self(eth as u128 * WEI_PER_ETH)
  }

  pub const fn as_wei(&self) -> u128 {
    self.0
  }

  pub const fn is_zero(&self) -> bool {
    self.0 == 0
  }
}

impl Add for Wei {
  type Output = Wei;

  fn add(self, rhs: Wei) -> Wei {
    Wei(self.0 + rhs.0)
  }
}

impl AddAssign for Wei {
  fn add_assign(&mut self, rhs: Wei) {
    self.0 += rhs.0;
  }
}

impl Sub for Wei {
  type Output = Wei;

  fn sub(self, rhs: Wei) -> Wei {
    Wei(self.0 - rhs.0)
  }
}

impl Sum for Wei {
  fn sum<I: Iterator<Item = Wei>>(iter: I) -> Wei {
    iter.fold(Wei::ZERO, Add::add)
  }
}

impl Display for Wei {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let whole = self.0 / WEI_PER_ETH;
    let frac = self.0 % WEI_PER_ETH;
    if frac == 0 {
      write!(f, "{whole}")
    } else {
      let frac = format!("{frac:018}");
      write!(f, "{whole}.{}", frac.trim_end_matches('0'))
    }
  }
}

impl FromStr for Wei {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let (whole, frac) = match s.split_once('.') {
      Some((whole, frac)) => (whole, frac),
      None => (s, ""),
    };
    if whole.is_empty() && frac.is_empty() {
      return Err(Error::Malformed(s.to_owned()));
    }
    if frac.len() > NATIVE_DECIMALS as usize {
      return Err(Error::TooPrecise(s.to_owned()));
    }
    let whole: u128 = match whole {
      "" => 0,
      digits => digits
        .parse()
        .map_err(|_| Error::Malformed(s.to_owned()))?,
    };
    let frac: u128 = match frac {
      "" => 0,
      digits => {
        let parsed: u128 =
          digits.parse().map_err(|_| Error::Malformed(s.to_owned()))?;
        parsed * 10u128.pow(NATIVE_DECIMALS - digits.len() as u32)
      }
    };
    whole
      .checked_mul(WEI_PER_ETH)
      .and_then(|wei| wei.checked_add(frac))
      .map(Wei)
      .ok_or_else(|| Error::TooLarge(s.to_owned()))
  }
}

/// A USD-equivalent value in whole truncated dollars.
///
/// This is the unit the funding ledger accounts in: 1 ETH converted at
/// a 2000 USD/ETH feed answer records as 2000. Sub-dollar remainders
/// are truncated by the conversion, never stored.
#[derive(
  Debug,
  Copy,
  Clone,
  Default,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
  Serialize,
  Deserialize,
)]
pub struct Usd(u64);

impl Usd {
  pub const ZERO: Usd = Usd(0);

  pub const fn new(dollars: u64) -> Self {
    Self(dollars)
  }

  pub const fn as_dollars(&self) -> u64 {
    self.0
  }

  pub const fn is_zero(&self) -> bool {
    self.0 == 0
  }
}

impl Add for Usd {
  type Output = Usd;

  fn add(self, rhs: Usd) -> Usd {
    Usd(self.0 + rhs.0)
  }
}

impl AddAssign for Usd {
  fn add_assign(&mut self, rhs: Usd) {
    self.0 += rhs.0;
  }
}

impl Sum for Usd {
  fn sum<I: Iterator<Item = Usd>>(iter: I) -> Usd {
    iter.fold(Usd::ZERO, Add::add)
  }
}

impl Display for Usd {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    Display::fmt(&self.0, f)
  }
}
