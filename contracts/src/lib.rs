mod convert;
mod feed;
mod fund_me;
mod mock;
mod payout;

pub use {
  convert::to_usd,
  feed::{Error as FeedError, PriceFeed},
  fund_me::{Error, FundMe, Snapshot, WithdrawStrategy},
  mock::MockAggregator,
  payout::{Payout, Rejected},
};
