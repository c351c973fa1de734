pub mod networks;

mod context;
mod deploy;
mod verify;

pub use {
  context::{Deployed, Error as ContextError},
  deploy::{deploy_fund_me, Error as DeployError, FUND_ME, MOCK_AGGREGATOR},
  verify::{verify_contract, Error as VerifyError, Explorer},
};
