use {
  crate::{
    convert::to_usd,
    feed::{self, PriceFeed},
    payout::Payout,
  },
  fundme_primitives::{Address, Usd, Wei},
  serde::{Deserialize, Serialize},
  std::collections::BTreeMap,
  thiserror::Error,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("Contribution worth {0} USD is below the minimum of {1} USD")]
  InsufficientContribution(Usd, Usd),

  #[error("Caller {0} is not the contract owner")]
  NotOwner(Address),

  #[error("Transfer of {1} ETH to {0} was rejected")]
  TransferFailed(Address, Wei),

  #[error("Price oracle unavailable: {0}")]
  OracleUnavailable(#[from] feed::Error),

  #[error("Funder index {0} is out of range, only {1} funders are recorded")]
  IndexOutOfRange(usize, usize),
}

/// Selects how [`FundMe::withdraw_with`] clears funder records after a
/// successful payout.
///
/// Both variants produce identical end state. They exist because the
/// clearing loop is the hot path of a withdrawal and the two shapes
/// have measurably different storage access patterns: [`Direct`]
/// re-reads the funder sequence on every step, [`Cached`] takes one
/// copy up front and walks that.
///
/// [`Direct`]: WithdrawStrategy::Direct
/// [`Cached`]: WithdrawStrategy::Cached
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WithdrawStrategy {
  /// Indexed reads against the live funder sequence.
  #[default]
  Direct,
  /// One upfront copy of the funder sequence, then local iteration.
  Cached,
}

/// The persisted form of a funding ledger.
///
/// A snapshot carries everything except the live price feed, which is
/// deployed as its own contract and only referenced here by address.
/// [`FundMe::from_snapshot`] rehydrates a ledger by wiring a feed back
/// in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
  pub owner: Address,
  pub minimum_usd: Usd,
  pub price_feed: Address,
  pub records: BTreeMap<Address, Usd>,
  pub funders: Vec<Address>,
  pub balance: Wei,
}

impl Snapshot {
  /// The state of a freshly constructed ledger with no contributions.
  pub fn genesis(
    owner: Address,
    minimum_usd: Usd,
    price_feed: Address,
  ) -> Self {
    Self {
      owner,
      minimum_usd,
      price_feed,
      records: BTreeMap::new(),
      funders: Vec::new(),
      balance: Wei::ZERO,
    }
  }
}

/// A crowdfunding escrow ledger.
///
/// Anyone may fund it with native currency; each contribution is
/// converted to USD through the attached price feed and rejected
/// unless it meets the configured minimum. Accepted contributions
/// accumulate per address, first-time contributors are appended to an
/// ordered funder sequence, and the escrowed balance grows by the raw
/// native value.
///
/// Only the owner set at construction can withdraw. A withdrawal pays
/// the entire balance out to the owner and resets every funder record,
/// as one atomic step: if the payout is rejected the ledger is left
/// exactly as it was.
#[derive(Debug)]
pub struct FundMe<F> {
  owner: Address,
  minimum_usd: Usd,
  feed: F,
  records: BTreeMap<Address, Usd>,
  funders: Vec<Address>,
  balance: Wei,
}

impl<F: PriceFeed> FundMe<F> {
  pub fn new(owner: Address, minimum_usd: Usd, feed: F) -> Self {
    Self {
      owner,
      minimum_usd,
      feed,
      records: BTreeMap::new(),
      funders: Vec::new(),
      balance: Wei::ZERO,
    }
  }

  /// Rehydrates a ledger from its persisted form.
  ///
  /// The caller is responsible for handing in the feed deployed at
  /// `snapshot.price_feed`; the ledger itself only ever stores the
  /// feed address.
  pub fn from_snapshot(snapshot: Snapshot, feed: F) -> Self {
    Self {
      owner: snapshot.owner,
      minimum_usd: snapshot.minimum_usd,
      feed,
      records: snapshot.records,
      funders: snapshot.funders,
      balance: snapshot.balance,
    }
  }

  pub fn snapshot(&self) -> Snapshot {
    Snapshot {
      owner: self.owner,
      minimum_usd: self.minimum_usd,
      price_feed: self.feed.address(),
      records: self.records.clone(),
      funders: self.funders.clone(),
      balance: self.balance,
    }
  }

  pub fn owner(&self) -> Address {
    self.owner
  }

  pub fn minimum_usd(&self) -> Usd {
    self.minimum_usd
  }

  pub fn price_feed(&self) -> &F {
    &self.feed
  }

  /// Native value currently held in escrow.
  pub fn balance(&self) -> Wei {
    self.balance
  }

  /// Cumulative USD credited to an address, zero if it never funded.
  pub fn contribution_of(&self, funder: Address) -> Usd {
    self.records.get(&funder).copied().unwrap_or(Usd::ZERO)
  }

  /// Funders in the order of their first accepted contribution.
  pub fn funders(&self) -> &[Address] {
    &self.funders
  }

  pub fn funder_count(&self) -> usize {
    self.funders.len()
  }

  pub fn funder_at(&self, index: usize) -> Result<Address, Error> {
    self
      .funders
      .get(index)
      .copied()
      .ok_or(Error::IndexOutOfRange(index, self.funders.len()))
  }

  pub fn ensure_owner(&self, caller: Address) -> Result<(), Error> {
    if caller != self.owner {
      return Err(Error::NotOwner(caller));
    }
    Ok(())
  }

  /// Contributes `value` to the escrow on behalf of `caller`.
  ///
  /// The value is converted to USD through the price feed first;
  /// contributions below the minimum (or worth less than one whole
  /// dollar) are rejected without any state change. On success returns
  /// the credited USD amount.
  pub fn fund(&mut self, caller: Address, value: Wei) -> Result<Usd, Error> {
    let credit = to_usd(value, &self.feed)?;
    if credit < self.minimum_usd || credit.is_zero() {
      return Err(Error::InsufficientContribution(credit, self.minimum_usd));
    }
    if !self.records.contains_key(&caller) {
      self.funders.push(caller);
    }
    *self.records.entry(caller).or_default() += credit;
    self.balance += value;
    Ok(credit)
  }

  /// Pays the whole escrowed balance out to the owner and clears all
  /// funder records. See [`FundMe::withdraw_with`].
  pub fn withdraw(
    &mut self,
    caller: Address,
    payout: impl Payout,
  ) -> Result<Wei, Error> {
    self.withdraw_with(WithdrawStrategy::Direct, caller, payout)
  }

  /// [`FundMe::withdraw`] with the cheaper record-clearing loop.
  pub fn cheaper_withdraw(
    &mut self,
    caller: Address,
    payout: impl Payout,
  ) -> Result<Wei, Error> {
    self.withdraw_with(WithdrawStrategy::Cached, caller, payout)
  }

  /// Withdraws the entire balance to the owner.
  ///
  /// Fails with [`Error::NotOwner`] for any other caller and with
  /// [`Error::TransferFailed`] when the payout is rejected; in both
  /// cases the ledger is untouched. The payout attempt comes before
  /// any mutation and everything after it is infallible, so a
  /// withdrawal either completes in full or not at all. Returns the
  /// amount handed to the owner, which is zero for an empty escrow.
  pub fn withdraw_with(
    &mut self,
    strategy: WithdrawStrategy,
    caller: Address,
    mut payout: impl Payout,
  ) -> Result<Wei, Error> {
    self.ensure_owner(caller)?;
    let amount = self.balance;
    payout
      .transfer(self.owner, amount)
      .map_err(|_| Error::TransferFailed(self.owner, amount))?;
    match strategy {
      WithdrawStrategy::Direct => {
        for index in 0..self.funders.len() {
          let funder = self.funders[index];
          self.records.remove(&funder);
        }
        self.funders.clear();
      }
      WithdrawStrategy::Cached => {
        for funder in std::mem::take(&mut self.funders) {
          self.records.remove(&funder);
        }
      }
    }
    self.balance = Wei::ZERO;
    Ok(amount)
  }
}
