use {
  fundme_devnet::{Store, StoreError, VerificationRecord},
  fundme_primitives::Address,
  thiserror::Error,
  tracing::{info, warn},
};

#[derive(Debug, Error)]
pub enum Error {
  #[error("Contract {0} is already verified")]
  AlreadyVerified(Address),

  #[error("Sources submitted for {0} do not match the verified ones")]
  SourceMismatch(Address),

  #[error("Explorer backend error: {0}")]
  Backend(#[from] StoreError),
}

/// Submission side of a block explorer's source verification.
///
/// An address verifies at most once. Resubmitting identical sources is
/// the benign [`Error::AlreadyVerified`] case, resubmitting different
/// ones is refused.
pub trait Explorer {
  fn submit(&self, record: &VerificationRecord) -> Result<(), Error>;
}

/// The development store doubles as the explorer backend, keeping
/// verification registrations next to the chain state they describe.
impl Explorer for Store {
  fn submit(&self, record: &VerificationRecord) -> Result<(), Error> {
    match self.verification(record.address)? {
      Some(existing) if existing == *record => {
        Err(Error::AlreadyVerified(record.address))
      }
      Some(_) => Err(Error::SourceMismatch(record.address)),
      None => Ok(self.save_verification(record)?),
    }
  }
}

/// Submits a contract's sources for verification.
///
/// Verification never aborts a deployment pipeline: the already
/// verified answer counts as success and every other failure is logged
/// and swallowed. Returns whether the contract ends up verified.
pub fn verify_contract(
  explorer: &impl Explorer,
  record: &VerificationRecord,
) -> bool {
  info!("verifying {} at {}", record.name, record.address);
  match explorer.submit(record) {
    Ok(()) => {
      info!("verified {} at {}", record.name, record.address);
      true
    }
    Err(Error::AlreadyVerified(_)) => {
      info!("already verified");
      true
    }
    Err(error) => {
      warn!("verification failed: {error}");
      false
    }
  }
}
