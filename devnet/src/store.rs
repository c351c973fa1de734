use {
  crate::bank::Bank,
  fundme_contracts::{MockAggregator, PriceFeed, Snapshot},
  fundme_primitives::{Address, ChainId, Usd},
  rmp_serde::{from_slice, to_vec},
  serde::{de::DeserializeOwned, Deserialize, Serialize},
  std::path::Path,
  thiserror::Error,
};

#[derive(Debug, Error)]
pub enum Error {
  #[error("Storage error: {0}")]
  Storage(#[from] sled::Error),

  #[error("Stored value failed to serialize: {0}")]
  Encode(#[from] rmp_serde::encode::Error),

  #[error("Stored value failed to deserialize: {0}")]
  Decode(#[from] rmp_serde::decode::Error),
}

/// Everything worth remembering about one contract deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentRecord {
  pub name: String,
  pub address: Address,
  pub network: String,
  pub chain_id: ChainId,
  pub owner: Address,
  pub price_feed: Address,
  pub minimum_usd: Usd,
}

/// A verified source registration, the dev stand-in for what a block
/// explorer keeps about a contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRecord {
  pub address: Address,
  pub name: String,
  pub arguments: Vec<String>,
}

const BANK_KEY: &[u8] = b"bank";

/// On-disk state of one development network.
///
/// Every logical collection lives in its own sled tree. Contract
/// snapshots and mock feeds are keyed by their 0x-hex address;
/// deployments are keyed by contract name so operational scripts can
/// find a contract without knowing where it landed.
pub struct Store {
  deployments: sled::Tree,
  snapshots: sled::Tree,
  feeds: sled::Tree,
  bank: sled::Tree,
  verifications: sled::Tree,
}

impl Store {
  pub fn open(path: &Path) -> Result<Self, Error> {
    Self::with_db(sled::open(path)?)
  }

  /// A throwaway store for tests and one-shot runs.
  pub fn temporary() -> Result<Self, Error> {
    Self::with_db(sled::Config::new().temporary(true).open()?)
  }

  fn with_db(db: sled::Db) -> Result<Self, Error> {
    Ok(Self {
      deployments: db.open_tree("deployments")?,
      snapshots: db.open_tree("snapshots")?,
      feeds: db.open_tree("feeds")?,
      bank: db.open_tree("bank")?,
      verifications: db.open_tree("verifications")?,
    })
  }

  pub fn deployment(
    &self,
    name: &str,
  ) -> Result<Option<DeploymentRecord>, Error> {
    get(&self.deployments, name)
  }

  pub fn save_deployment(
    &self,
    record: &DeploymentRecord,
  ) -> Result<(), Error> {
    put(&self.deployments, record.name.as_str(), record)
  }

  pub fn snapshot(&self, address: Address) -> Result<Option<Snapshot>, Error> {
    get(&self.snapshots, address.to_string())
  }

  pub fn save_snapshot(
    &self,
    address: Address,
    snapshot: &Snapshot,
  ) -> Result<(), Error> {
    put(&self.snapshots, address.to_string(), snapshot)
  }

  pub fn feed(
    &self,
    address: Address,
  ) -> Result<Option<MockAggregator>, Error> {
    get(&self.feeds, address.to_string())
  }

  pub fn save_feed(&self, feed: &MockAggregator) -> Result<(), Error> {
    put(&self.feeds, feed.address().to_string(), feed)
  }

  pub fn bank(&self) -> Result<Option<Bank>, Error> {
    get(&self.bank, BANK_KEY)
  }

  pub fn save_bank(&self, bank: &Bank) -> Result<(), Error> {
    put(&self.bank, BANK_KEY, bank)
  }

  pub fn verification(
    &self,
    address: Address,
  ) -> Result<Option<VerificationRecord>, Error> {
    get(&self.verifications, address.to_string())
  }

  pub fn save_verification(
    &self,
    record: &VerificationRecord,
  ) -> Result<(), Error> {
    put(&self.verifications, record.address.to_string(), record)
  }
}

fn get<T: DeserializeOwned>(
  tree: &sled::Tree,
  key: impl AsRef<[u8]>,
) -> Result<Option<T>, Error> {
  Ok(match tree.get(key)? {
    Some(bytes) => Some(from_slice(&bytes)?),
    None => None,
  })
}

fn put<T: Serialize>(
  tree: &sled::Tree,
  key: impl AsRef<[u8]>,
  value: &T,
) -> Result<(), Error> {
  tree.insert(key, to_vec(value)?)?;
  tree.flush()?;
  Ok(())
}
