use {
  fundme_contracts::WithdrawStrategy,
  fundme_deployer::{
    deploy_fund_me, networks, verify_contract, ContextError, Deployed,
  },
  fundme_devnet::{
    accounts, DeploymentRecord, Store, VerificationRecord, GENESIS_BALANCE,
  },
  fundme_primitives::{Address, Usd, Wei},
};

fn dev_world() -> anyhow::Result<(Store, DeploymentRecord)> {
  let store = Store::temporary()?;
  let config = networks::resolve("localnet").unwrap();
  let record = deploy_fund_me(&store, &config, Usd::new(5))?;
  Ok((store, record))
}

#[test]
fn funds_flow_from_accounts_through_escrow_to_the_owner() -> anyhow::Result<()>
{
  let (store, record) = dev_world()?;

  let mut deployed = Deployed::load(&store)?;
  for index in 1..=6 {
    deployed.fund(accounts::address(index), Wei::from_eth(1))?;
  }
  deployed.persist(&store)?;

  // every funder paid and the escrow holds the total
  let deployed = Deployed::load(&store)?;
  assert_eq!(deployed.fund_me.balance(), Wei::from_eth(6));
  assert_eq!(deployed.fund_me.funder_count(), 6);
  assert_eq!(deployed.bank.balance_of(record.address), Wei::from_eth(6));
  assert_eq!(
    deployed.bank.balance_of(accounts::address(1)),
    GENESIS_BALANCE - Wei::from_eth(1)
  );

  let mut deployed = Deployed::load(&store)?;
  let amount = deployed.withdraw(record.owner, WithdrawStrategy::Direct)?;
  deployed.persist(&store)?;
  assert_eq!(amount, Wei::from_eth(6));

  let deployed = Deployed::load(&store)?;
  assert_eq!(deployed.fund_me.balance(), Wei::ZERO);
  assert!(deployed.fund_me.funders().is_empty());
  assert_eq!(deployed.bank.balance_of(record.address), Wei::ZERO);
  assert_eq!(
    deployed.bank.balance_of(record.owner),
    GENESIS_BALANCE + Wei::from_eth(6)
  );
  Ok(())
}

#[test]
fn fund_then_cheaper_withdraw_empties_the_escrow() -> anyhow::Result<()> {
  let (store, record) = dev_world()?;

  let mut deployed = Deployed::load(&store)?;
  deployed.fund(accounts::address(1), "0.02".parse()?)?;
  deployed.withdraw(record.owner, WithdrawStrategy::Cached)?;
  deployed.persist(&store)?;

  let deployed = Deployed::load(&store)?;
  assert_eq!(deployed.fund_me.balance(), Wei::ZERO);
  assert_eq!(deployed.bank.balance_of(record.address), Wei::ZERO);
  Ok(())
}

#[test]
fn rejected_contributions_refund_the_caller() -> anyhow::Result<()> {
  let (store, record) = dev_world()?;
  let mut deployed = Deployed::load(&store)?;
  let alice = accounts::address(3);

  // worth 4 USD at the mock price, one short of the minimum
  assert!(deployed.fund(alice, "0.002".parse()?).is_err());
  assert_eq!(deployed.bank.balance_of(alice), GENESIS_BALANCE);
  assert_eq!(deployed.bank.balance_of(record.address), Wei::ZERO);
  assert_eq!(deployed.fund_me.balance(), Wei::ZERO);

  // accounts outside the prefunded roster hold nothing to fund with
  let outsider = Address::from([0x99; 20]);
  assert!(matches!(
    deployed.fund(outsider, Wei::from_eth(1)),
    Err(ContextError::Bank(_))
  ));
  assert_eq!(deployed.fund_me.balance(), Wei::ZERO);
  Ok(())
}

#[test]
fn redeploying_with_same_parameters_reuses_the_contract() -> anyhow::Result<()>
{
  let (store, record) = dev_world()?;

  let mut deployed = Deployed::load(&store)?;
  deployed.fund(accounts::address(2), Wei::from_eth(3))?;
  deployed.persist(&store)?;

  let config = networks::resolve("localnet").unwrap();
  let again = deploy_fund_me(&store, &config, Usd::new(5))?;
  assert_eq!(again, record);

  // contributions survived the redeploy
  let deployed = Deployed::load(&store)?;
  assert_eq!(deployed.fund_me.balance(), Wei::from_eth(3));
  Ok(())
}

#[test]
fn changed_parameters_deploy_a_fresh_contract() -> anyhow::Result<()> {
  let (store, record) = dev_world()?;

  let mut deployed = Deployed::load(&store)?;
  deployed.fund(accounts::address(2), Wei::from_eth(3))?;
  deployed.persist(&store)?;

  let config = networks::resolve("localnet").unwrap();
  let raised = deploy_fund_me(&store, &config, Usd::new(50))?;
  assert_ne!(raised.address, record.address);
  assert_eq!(raised.minimum_usd, Usd::new(50));

  // the registered deployment now points at the fresh, empty contract
  let deployed = Deployed::load(&store)?;
  assert_eq!(deployed.record.address, raised.address);
  assert_eq!(deployed.fund_me.balance(), Wei::ZERO);
  assert_eq!(deployed.fund_me.minimum_usd(), Usd::new(50));
  Ok(())
}

#[test]
fn live_networks_record_verify_and_refuse_local_operation(
) -> anyhow::Result<()> {
  let store = Store::temporary()?;
  let config = networks::resolve("sepolia").unwrap();
  let record = deploy_fund_me(&store, &config, Usd::new(5))?;

  assert_eq!(
    record.price_feed,
    "0x5f4eC3Df9cbd43714FE2740f5E3616155c5b8419".parse::<Address>()?
  );
  assert_eq!(record.chain_id.as_u64(), 11155111);
  // no chain state materializes for live networks
  assert!(store.snapshot(record.address)?.is_none());
  assert!(store.bank()?.is_none());

  let submission = VerificationRecord {
    address: record.address,
    name: record.name.clone(),
    arguments: vec![record.price_feed.to_string(), "5".into()],
  };
  assert!(verify_contract(&store, &submission));
  // resubmitting hits the already verified answer and stays benign
  assert!(verify_contract(&store, &submission));
  assert_eq!(store.verification(record.address)?, Some(submission));

  assert!(matches!(
    Deployed::load(&store),
    Err(ContextError::NotLocal(network)) if network == "sepolia"
  ));
  Ok(())
}

#[test]
fn loading_before_deploying_fails() -> anyhow::Result<()> {
  let store = Store::temporary()?;
  assert!(matches!(
    Deployed::load(&store),
    Err(ContextError::NotDeployed(_))
  ));
  Ok(())
}
