use {
  ed25519_dalek::PublicKey,
  multihash::{Hasher, Sha3_256},
  serde::{Deserialize, Serialize},
  std::{
    fmt::{Debug, Display},
    ops::Deref,
    str::FromStr,
  },
  thiserror::Error,
};

/// Number of bytes in an account address.
pub const ADDRESS_LEN: usize = 20;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
  #[error("Expected {ADDRESS_LEN} address bytes, got {0}")]
  BadLength(usize),

  #[error("Invalid hex string: {0}")]
  Hex(#[from] hex::FromHexError),
}

// `hex::FromHexError` implements `PartialEq` but not `Eq`, so `Eq`
// cannot be derived; the manual impl keeps `Error: Eq` in the public
// API.
impl Eq for Error {}

/// Represents an address of an account.
///
/// The same address could either identify an externally owned account
/// that has a corresponding ed25519 keypair (a wallet, such as the
/// contract owner or a funder), or a contract-style account derived
/// from a parent address and a set of seeds (the funding ledger itself,
/// or the mock price feed on development chains).
///
/// Addresses render in the conventional 0x-prefixed hex form, so the
/// well-known feed addresses from per-network configuration can be
/// written down verbatim.
#[derive(
  Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
  /// Given a list of seeds this method will generate a new address
  /// derived from the current one.
  ///
  /// The same set of seeds always produces the same derived address,
  /// which is how deployments assign stable addresses to the funding
  /// contract and its mock feed without a transaction counter.
  pub fn derive(&self, seeds: &[&[u8]]) -> Self {
    let mut hasher = Sha3_256::default();
    hasher.update(&self.0);
    for seed in seeds.iter() {
      hasher.update(seed);
    }
    Self::from_digest(hasher.finalize())
  }

  /// Truncates a 32-byte SHA3-256 digest to the low 20 address bytes.
  fn from_digest(digest: &[u8]) -> Self {
    let mut bytes = [0u8; ADDRESS_LEN];
    bytes.copy_from_slice(&digest[digest.len() - ADDRESS_LEN..]);
    Self(bytes)
  }
}

impl AsRef<[u8]> for Address {
  fn as_ref(&self) -> &[u8] {
    &self.0
  }
}

impl Deref for Address {
  type Target = [u8];

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl Display for Address {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "0x{}", hex::encode(self.0))
  }
}

impl Debug for Address {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "address(0x{})", hex::encode(self.0))
  }
}

impl From<Address> for String {
  fn from(address: Address) -> Self {
    address.to_string()
  }
}

impl From<[u8; ADDRESS_LEN]> for Address {
  fn from(bytes: [u8; ADDRESS_LEN]) -> Self {
    Self(bytes)
  }
}

impl FromStr for Address {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    let bytes = hex::decode(s)?;
    if bytes.len() != ADDRESS_LEN {
      return Err(Error::BadLength(bytes.len()));
    }
    let mut fixed = [0u8; ADDRESS_LEN];
    fixed.copy_from_slice(&bytes);
    Ok(Self(fixed))
  }
}

impl TryFrom<&str> for Address {
  type Error = Error;

  fn try_from(value: &str) -> Result<Self, Self::Error> {
    FromStr::from_str(value)
  }
}

impl From<PublicKey> for Address {
  fn from(p: PublicKey) -> Self {
    let mut hasher = Sha3_256::default();
    hasher.update(p.as_bytes());
    Self::from_digest(hasher.finalize())
  }
}
