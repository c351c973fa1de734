use {
  crate::cli::Options,
  clap::Parser,
  fundme_deployer::{deploy_fund_me, networks, verify_contract},
  fundme_devnet::{Store, VerificationRecord},
  tracing::info,
  tracing_subscriber::FmtSubscriber,
};

mod cli;

fn main() -> anyhow::Result<()> {
  tracing::subscriber::set_global_default(FmtSubscriber::new())?;

  let opts = Options::parse();
  info!("deployment options: {opts:?}");

  let config = networks::resolve(opts.network())
    .ok_or_else(|| anyhow::anyhow!("unknown network '{}'", opts.network()))?;

  let store = Store::open(&opts.store_path())?;
  let record = deploy_fund_me(&store, &config, opts.minimum_usd())?;

  // explorers only exist for live networks and submission needs an
  // api key in the environment
  if !config.is_dev() && std::env::var("ETHERSCAN_API_KEY").is_ok() {
    verify_contract(&store, &VerificationRecord {
      address: record.address,
      name: record.name.clone(),
      arguments: vec![
        record.price_feed.to_string(),
        record.minimum_usd.to_string(),
      ],
    });
  }

  info!(
    "{} is at {} on {} (feed {}, minimum {} USD)",
    record.name,
    record.address,
    record.network,
    record.price_feed,
    record.minimum_usd
  );
  Ok(())
}
