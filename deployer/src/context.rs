use {
  crate::{deploy::FUND_ME, networks::DEV_CHAINS},
  fundme_contracts::{FundMe, MockAggregator, WithdrawStrategy},
  fundme_devnet::{Bank, BankError, DeploymentRecord, Store, StoreError},
  fundme_primitives::{Address, Usd, Wei},
  thiserror::Error,
};

#[derive(Debug, Error)]
pub enum Error {
  #[error("No {0} deployment found, run the deploy binary first")]
  NotDeployed(&'static str),

  #[error("Network {0} is not a local development chain")]
  NotLocal(String),

  #[error("The contract state at {0} is missing from the store")]
  SnapshotMissing(Address),

  #[error("The mock feed at {0} is missing from the store")]
  FeedMissing(Address),

  #[error("The development bank is not initialized")]
  BankMissing,

  #[error("Bank rejected the operation: {0}")]
  Bank(#[from] BankError),

  #[error("Contract rejected the operation: {0}")]
  Contract(#[from] fundme_contracts::Error),

  #[error("Storage error: {0}")]
  Store(#[from] StoreError),
}

/// A deployed contract rehydrated from a development store, together
/// with the chain state needed to operate it.
///
/// Mutations happen on the in-memory copy; nothing touches the store
/// until [`Deployed::persist`], so a failed operation can simply be
/// dropped and the persisted world stays consistent.
pub struct Deployed {
  pub record: DeploymentRecord,
  pub fund_me: FundMe<MockAggregator>,
  pub bank: Bank,
}

impl Deployed {
  /// Loads the [`FUND_ME`] deployment from a development store.
  pub fn load(store: &Store) -> Result<Self, Error> {
    let record = store
      .deployment(FUND_ME)?
      .ok_or(Error::NotDeployed(FUND_ME))?;
    if !DEV_CHAINS.contains(&record.network.as_str()) {
      return Err(Error::NotLocal(record.network.clone()));
    }

    let snapshot = store
      .snapshot(record.address)?
      .ok_or(Error::SnapshotMissing(record.address))?;
    let feed = store
      .feed(snapshot.price_feed)?
      .ok_or(Error::FeedMissing(snapshot.price_feed))?;
    let bank = store.bank()?.ok_or(Error::BankMissing)?;

    Ok(Self {
      record,
      fund_me: FundMe::from_snapshot(snapshot, feed),
      bank,
    })
  }

  /// Writes the contract state and the bank back to the store.
  pub fn persist(&self, store: &Store) -> Result<(), Error> {
    store.save_snapshot(self.record.address, &self.fund_me.snapshot())?;
    store.save_bank(&self.bank)?;
    Ok(())
  }

  /// Contributes `value` from `caller`'s account to the contract.
  ///
  /// The native value moves into the contract's escrow account first,
  /// the way value travels with a call. A rejected contribution
  /// transfers it back, leaving both ledgers as they were.
  pub fn fund(&mut self, caller: Address, value: Wei) -> Result<Usd, Error> {
    self.bank.transfer(caller, self.record.address, value)?;
    match self.fund_me.fund(caller, value) {
      Ok(credit) => Ok(credit),
      Err(error) => {
        self.bank.transfer(self.record.address, caller, value)?;
        Err(error.into())
      }
    }
  }

  /// Withdraws the whole escrow to the owner's account.
  pub fn withdraw(
    &mut self,
    caller: Address,
    strategy: WithdrawStrategy,
  ) -> Result<Wei, Error> {
    let payout = self.bank.payout(self.record.address);
    Ok(self.fund_me.withdraw_with(strategy, caller, payout)?)
  }
}
