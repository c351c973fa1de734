use {
  serde::{Deserialize, Serialize},
  std::fmt::Display,
};

/// Numeric identifier of a chain, as used by per-network configuration
/// tables (31337 for local development chains, 11155111 for sepolia).
#[derive(
  Debug,
  Copy,
  Clone,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
  Serialize,
  Deserialize,
)]
pub struct ChainId(u64);

impl ChainId {
  pub const fn new(id: u64) -> Self {
    Self(id)
  }

  pub const fn as_u64(&self) -> u64 {
    self.0
  }
}

impl Display for ChainId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    Display::fmt(&self.0, f)
  }
}

impl From<u64> for ChainId {
  fn from(id: u64) -> Self {
    Self(id)
  }
}
