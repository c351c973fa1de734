use {
  clap::Parser,
  fundme_primitives::Usd,
  std::path::PathBuf,
};

/// FundMe deployment pipeline
///
/// Deploys the funding contract to the selected network. Development
/// chains get a mock price aggregator and genesis balances along with
/// it, live networks resolve their well-known aggregator and submit
/// source verification to the block explorer.
#[derive(Debug, Parser)]
pub struct Options {
  /// Network to deploy to
  #[clap(long, short, default_value = "localnet", value_name = "NAME")]
  network: String,

  /// Directory holding per-network chain state
  #[clap(long, default_value = ".fundme", value_name = "DIR")]
  data_dir: PathBuf,

  /// Minimum accepted contribution in whole USD
  #[clap(long, default_value_t = 5, value_name = "USD")]
  minimum_usd: u64,
}

impl Options {
  pub fn network(&self) -> &str {
    &self.network
  }

  pub fn minimum_usd(&self) -> Usd {
    Usd::new(self.minimum_usd)
  }

  /// Every network keeps its state in its own store directory.
  pub fn store_path(&self) -> PathBuf {
    self.data_dir.join(&self.network)
  }
}
