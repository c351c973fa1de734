use {
  crate::networks::{NetworkConfig, MOCK_DECIMALS, MOCK_INITIAL_ANSWER},
  fundme_contracts::{MockAggregator, Snapshot},
  fundme_devnet::{accounts, Bank, DeploymentRecord, Store, StoreError},
  fundme_primitives::{Address, Usd},
  thiserror::Error,
  tracing::info,
};

/// Name the funding contract is registered under in deployment
/// records.
pub const FUND_ME: &str = "FundMe";

/// Name the mock aggregator is registered under on dev chains.
pub const MOCK_AGGREGATOR: &str = "MockAggregator";

#[derive(Debug, Error)]
pub enum Error {
  #[error("Network {0} has no well-known ETH/USD feed configured")]
  MissingFeed(&'static str),

  #[error("Storage error: {0}")]
  Store(#[from] StoreError),
}

/// Deploys the funding contract and records the deployment under
/// [`FUND_ME`].
///
/// On development chains this stands up the whole world: genesis
/// balances for the prefunded accounts, a mock ETH/USD aggregator and
/// a fresh contract wired to it. Live networks use their well-known
/// aggregator and only the deployment record is produced, since the
/// harness holds no transport to a real chain.
///
/// Contract addresses are derived from the deployer and the
/// constructor parameters, so repeating a deployment with the same
/// parameters reuses the existing contract while changed parameters
/// deploy a fresh one at a new address.
pub fn deploy_fund_me(
  store: &Store,
  config: &NetworkConfig,
  minimum_usd: Usd,
) -> Result<DeploymentRecord, Error> {
  let owner = accounts::deployer();

  let price_feed = match config.eth_usd_feed {
    Some(feed) => feed,
    None if config.is_dev() => deploy_mock_feed(store, owner)?,
    None => return Err(Error::MissingFeed(config.name)),
  };

  let contract = owner.derive(&[
    FUND_ME.as_bytes(),
    &minimum_usd.as_dollars().to_le_bytes(),
    price_feed.as_ref(),
  ]);

  if config.is_dev() {
    init_genesis(store)?;
    if store.snapshot(contract)?.is_none() {
      let genesis = Snapshot::genesis(owner, minimum_usd, price_feed);
      store.save_snapshot(contract, &genesis)?;
      info!("deployed {FUND_ME} at {contract} on {}", config.name);
    } else {
      info!("reusing the {FUND_ME} deployment at {contract}");
    }
  }

  let record = DeploymentRecord {
    name: FUND_ME.into(),
    address: contract,
    network: config.name.into(),
    chain_id: config.chain_id,
    owner,
    price_feed,
    minimum_usd,
  };
  store.save_deployment(&record)?;
  Ok(record)
}

/// Stands up the mock ETH/USD aggregator, reusing one from an earlier
/// deployment if it is already on the chain.
fn deploy_mock_feed(store: &Store, owner: Address) -> Result<Address, Error> {
  let address = owner.derive(&[MOCK_AGGREGATOR.as_bytes()]);
  if store.feed(address)?.is_none() {
    let feed = MockAggregator::new(address, MOCK_DECIMALS, MOCK_INITIAL_ANSWER);
    store.save_feed(&feed)?;
    info!("deployed {MOCK_AGGREGATOR} at {address}");
  }
  Ok(address)
}

/// Credits the genesis balance to every prefunded account on the first
/// deployment to a chain.
fn init_genesis(store: &Store) -> Result<(), Error> {
  if store.bank()?.is_none() {
    store.save_bank(&Bank::genesis(accounts::all()))?;
    info!("credited genesis balances to {} accounts", accounts::COUNT);
  }
  Ok(())
}
