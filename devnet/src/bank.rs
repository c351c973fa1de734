use {
  fundme_contracts::{Payout, Rejected},
  fundme_primitives::{Address, Wei},
  serde::{Deserialize, Serialize},
  std::collections::BTreeMap,
  thiserror::Error,
};

/// Native balance every development account starts with.
pub const GENESIS_BALANCE: Wei = Wei::from_eth(10_000);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("Account {0} holds {1} ETH, cannot debit {2} ETH")]
  InsufficientFunds(Address, Wei, Wei),
}

/// Native currency ledger of a development chain.
///
/// This is where value physically lives on a dev chain: contract
/// escrows and account wallets are all rows in the same table, and a
/// transfer is a debit plus a credit. Debits never overdraw.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bank {
  balances: BTreeMap<Address, Wei>,
}

impl Bank {
  /// A bank with [`GENESIS_BALANCE`] credited to every account.
  pub fn genesis(accounts: impl IntoIterator<Item = Address>) -> Self {
    let mut bank = Bank::default();
    for account in accounts {
      bank.credit(account, GENESIS_BALANCE);
    }
    bank
  }

  pub fn balance_of(&self, account: Address) -> Wei {
    self.balances.get(&account).copied().unwrap_or(Wei::ZERO)
  }

  pub fn credit(&mut self, account: Address, amount: Wei) {
    *self.balances.entry(account).or_default() += amount;
  }

  pub fn debit(&mut self, account: Address, amount: Wei) -> Result<(), Error> {
    let balance = self.balance_of(account);
    if balance < amount {
      return Err(Error::InsufficientFunds(account, balance, amount));
    }
    self.balances.insert(account, balance - amount);
    Ok(())
  }

  pub fn transfer(
    &mut self,
    from: Address,
    to: Address,
    amount: Wei,
  ) -> Result<(), Error> {
    self.debit(from, amount)?;
    self.credit(to, amount);
    Ok(())
  }

  /// A payout capability drawing from `source`, typically the escrow
  /// account of a deployed contract.
  pub fn payout(&mut self, source: Address) -> BankPayout<'_> {
    BankPayout { bank: self, source }
  }
}

/// Settles contract payouts against the chain's bank.
#[derive(Debug)]
pub struct BankPayout<'a> {
  bank: &'a mut Bank,
  source: Address,
}

impl Payout for BankPayout<'_> {
  fn transfer(&mut self, to: Address, amount: Wei) -> Result<(), Rejected> {
    self
      .bank
      .transfer(self.source, to, amount)
      .map_err(|_| Rejected)
  }
}
