use {
  fundme_primitives::{Address, ChainId},
  once_cell::sync::Lazy,
  std::collections::BTreeMap,
};

/// Chain id every development network reports.
pub const DEV_CHAIN_ID: ChainId = ChainId::new(31337);

/// Network names that stand for a local development chain.
pub const DEV_CHAINS: [&str; 2] = ["localnet", "localhost"];

/// Decimal precision of the mock aggregator deployed on dev chains.
pub const MOCK_DECIMALS: u8 = 8;

/// Initial ETH/USD answer of the mock aggregator, 2000 USD at
/// [`MOCK_DECIMALS`] precision.
pub const MOCK_INITIAL_ANSWER: i64 = 200_000_000_000;

/// Static deployment configuration of one network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
  pub name: &'static str,
  pub chain_id: ChainId,
  pub eth_usd_feed: Option<Address>,
}

impl NetworkConfig {
  /// Development chains have no well-known aggregators and deploy
  /// their own mock feed instead.
  pub fn is_dev(&self) -> bool {
    DEV_CHAINS.contains(&self.name)
  }
}

/// Live networks with a well-known ETH/USD aggregator deployment,
/// keyed by chain id.
pub static NETWORKS: Lazy<BTreeMap<ChainId, NetworkConfig>> = Lazy::new(|| {
  [
    NetworkConfig {
      name: "sepolia",
      chain_id: ChainId::new(11155111),
      eth_usd_feed: Some(feed("0x5f4eC3Df9cbd43714FE2740f5E3616155c5b8419")),
    },
    NetworkConfig {
      name: "polygon",
      chain_id: ChainId::new(137),
      eth_usd_feed: Some(feed("0xF9680D99D6C9589e2a93a78A04A279e509205945")),
    },
  ]
  .into_iter()
  .map(|config| (config.chain_id, config))
  .collect()
});

fn feed(hex: &str) -> Address {
  hex.parse().expect("well-known feed addresses are valid hex")
}

/// Resolves a network name to its deployment configuration.
///
/// Development names resolve to a dev config with no well-known feed,
/// anything else must appear in [`NETWORKS`].
pub fn resolve(name: &str) -> Option<NetworkConfig> {
  if let Some(dev) = DEV_CHAINS.iter().find(|dev| **dev == name) {
    return Some(NetworkConfig {
      name: dev,
      chain_id: DEV_CHAIN_ID,
      eth_usd_feed: None,
    });
  }
  NETWORKS.values().find(|config| config.name == name).cloned()
}

#[cfg(test)]
mod tests {
  use super::{resolve, DEV_CHAIN_ID, NETWORKS};

  #[test]
  fn development_names_resolve_locally() {
    for name in ["localnet", "localhost"] {
      let config = resolve(name).unwrap();
      assert!(config.is_dev());
      assert_eq!(config.chain_id, DEV_CHAIN_ID);
      assert!(config.eth_usd_feed.is_none());
    }
  }

  #[test]
  fn live_networks_carry_their_feed() -> anyhow::Result<()> {
    let sepolia = resolve("sepolia").unwrap();
    assert!(!sepolia.is_dev());
    assert_eq!(sepolia.chain_id.as_u64(), 11155111);
    assert_eq!(
      sepolia.eth_usd_feed,
      Some("0x5f4eC3Df9cbd43714FE2740f5E3616155c5b8419".parse()?)
    );

    let polygon = resolve("polygon").unwrap();
    assert_eq!(polygon.chain_id.as_u64(), 137);
    assert!(polygon.eth_usd_feed.is_some());
    Ok(())
  }

  #[test]
  fn unknown_networks_do_not_resolve() {
    assert!(resolve("mainnet").is_none());
    assert!(resolve("").is_none());
  }

  #[test]
  fn table_is_keyed_by_chain_id() {
    for (chain_id, config) in NETWORKS.iter() {
      assert_eq!(*chain_id, config.chain_id);
    }
  }
}
