//! Deterministic accounts of a development chain.
//!
//! Every run of the harness sees the same account roster, the same way
//! local development nodes ship a fixed set of funded keypairs. Keys
//! are derived by hashing a fixed seed with the account index, so no
//! key material is ever stored.

use {
  ed25519_dalek::{Keypair, PublicKey, SecretKey},
  fundme_primitives::Address,
  multihash::{Hasher, Sha3_256},
};

const ACCOUNT_SEED: &[u8] = b"fundme-devnet-account";

/// Number of prefunded accounts on a development chain.
pub const COUNT: u64 = 10;

/// Signing keypair of the development account at `index`.
pub fn keypair(index: u64) -> Keypair {
  let mut hasher = Sha3_256::default();
  hasher.update(ACCOUNT_SEED);
  hasher.update(&index.to_le_bytes());
  let secret = SecretKey::from_bytes(hasher.finalize())
    .expect("a sha3-256 digest is a valid ed25519 secret");
  let public = PublicKey::from(&secret);
  Keypair { secret, public }
}

/// Address of the development account at `index`.
pub fn address(index: u64) -> Address {
  Address::from(keypair(index).public)
}

/// The account deployments run under, by convention the first one.
pub fn deployer() -> Address {
  address(0)
}

/// Addresses of all prefunded accounts.
pub fn all() -> impl Iterator<Item = Address> {
  (0..COUNT).map(address)
}
