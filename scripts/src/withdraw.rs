use {
  clap::Parser,
  fundme_contracts::WithdrawStrategy,
  fundme_deployer::Deployed,
  fundme_devnet::{accounts, Store},
  std::path::PathBuf,
  tracing::info,
  tracing_subscriber::FmtSubscriber,
};

/// Withdraws the FundMe escrow to the owner
///
/// Sweeps the whole contract balance into the owner's account and
/// resets all funder records. Only the owner account can do this.
#[derive(Debug, Parser)]
struct Options {
  /// Network the contract is deployed on
  #[clap(long, short, default_value = "localnet", value_name = "NAME")]
  network: String,

  /// Directory holding per-network chain state
  #[clap(long, default_value = ".fundme", value_name = "DIR")]
  data_dir: PathBuf,

  /// Index of the development account to withdraw as
  #[clap(long, default_value_t = 0, value_name = "INDEX")]
  account: u64,

  /// Clear funder records with the cheaper loop
  #[clap(long)]
  cheaper: bool,
}

fn main() -> anyhow::Result<()> {
  tracing::subscriber::set_global_default(FmtSubscriber::new())?;

  let opts = Options::parse();
  info!("withdraw options: {opts:?}");

  let store = Store::open(&opts.data_dir.join(&opts.network))?;
  let mut deployed = Deployed::load(&store)?;
  let caller = accounts::address(opts.account);
  let strategy = if opts.cheaper {
    WithdrawStrategy::Cached
  } else {
    WithdrawStrategy::Direct
  };

  let amount = deployed.withdraw(caller, strategy)?;
  deployed.persist(&store)?;

  info!(
    "Withdrawn {amount} ETH from {} to {caller}",
    deployed.record.address
  );
  Ok(())
}
