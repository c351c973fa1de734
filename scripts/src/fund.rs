use {
  clap::Parser,
  fundme_deployer::Deployed,
  fundme_devnet::{accounts, Store},
  fundme_primitives::Wei,
  std::path::PathBuf,
  tracing::info,
  tracing_subscriber::FmtSubscriber,
};

/// Funds the deployed FundMe contract
///
/// Sends native value from one of the prefunded development accounts
/// to the contract, crediting the caller's USD contribution.
#[derive(Debug, Parser)]
struct Options {
  /// Network the contract is deployed on
  #[clap(long, short, default_value = "localnet", value_name = "NAME")]
  network: String,

  /// Directory holding per-network chain state
  #[clap(long, default_value = ".fundme", value_name = "DIR")]
  data_dir: PathBuf,

  /// Amount of ether to send
  #[clap(long, short, default_value = "0.04", value_name = "ETH")]
  amount: Wei,

  /// Index of the development account to fund from
  #[clap(long, default_value_t = 0, value_name = "INDEX")]
  account: u64,
}

fn main() -> anyhow::Result<()> {
  tracing::subscriber::set_global_default(FmtSubscriber::new())?;

  let opts = Options::parse();
  info!("funding options: {opts:?}");

  let store = Store::open(&opts.data_dir.join(&opts.network))?;
  let mut deployed = Deployed::load(&store)?;
  let caller = accounts::address(opts.account);

  let credit = deployed.fund(caller, opts.amount)?;
  deployed.persist(&store)?;

  info!(
    "Funded {} with {} ETH from {}, {} USD credited",
    deployed.record.address, opts.amount, caller, credit
  );
  Ok(())
}
