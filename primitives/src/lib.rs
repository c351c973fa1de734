mod address;
mod chain;
mod units;

pub use {
  address::{Address, Error as AddressError, ADDRESS_LEN},
  chain::ChainId,
  units::{Error as UnitsError, Usd, Wei, NATIVE_DECIMALS, WEI_PER_ETH},
};
