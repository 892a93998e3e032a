#![no_std]

mod contract;
mod errors;
mod liquidator;
mod registry;
mod storage;
mod utils;

mod tests;

pub use crate::contract::{LendingPoolContract, LendingPoolContractClient};
pub use crate::errors::SCErrors;
