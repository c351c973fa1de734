use {
  fundme_primitives::{Address, Wei},
  thiserror::Error,
};

/// The receiving side refused or failed to take delivery of a native
/// transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Recipient rejected the transfer")]
pub struct Rejected;

/// Capability for moving native value out of a contract.
///
/// The contract has no opinion about where value physically lives;
/// callers provide the transfer mechanism, the contract decides when
/// and how much to move. A failed transfer must leave the recipient
/// untouched.
pub trait Payout {
  fn transfer(&mut self, to: Address, amount: Wei) -> Result<(), Rejected>;
}

impl<P: Payout + ?Sized> Payout for &mut P {
  fn transfer(&mut self, to: Address, amount: Wei) -> Result<(), Rejected> {
    (**self).transfer(to, amount)
  }
}
