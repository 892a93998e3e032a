use soroban_sdk::{contractclient, Address, Env};

/// Entry point a liquidator module exposes to the pool.
///
/// While this call runs the module may move exactly the liquidation amount of the pool
/// asset from the pool to itself and nothing else. Returns the amount the module settled.
#[contractclient(name = "LiquidatorClient")]
pub trait Liquidator {
    fn liquidate(e: Env, borrower: Address, debt_amount: u128) -> u128;
}
