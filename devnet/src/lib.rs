pub mod accounts;

mod bank;
mod store;

pub use {
  bank::{Bank, BankPayout, Error as BankError, GENESIS_BALANCE},
  store::{DeploymentRecord, Error as StoreError, Store, VerificationRecord},
};
