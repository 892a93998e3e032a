use crate::errors::SCErrors;
use soroban_sdk::{panic_with_error, token, Address, Env};

pub fn make_deposit(e: &Env, asset: &Address, depositor: &Address, amount: u128) {
    token::Client::new(e, asset).transfer(
        depositor,
        &e.current_contract_address(),
        &(amount as i128),
    );
}

pub fn make_withdrawal(e: &Env, asset: &Address, recipient: &Address, amount: u128) {
    token::Client::new(e, asset).transfer(
        &e.current_contract_address(),
        recipient,
        &(amount as i128),
    );
}

pub fn pool_balance(e: &Env, asset: &Address) -> u128 {
    let balance: i128 = token::Client::new(e, asset).balance(&e.current_contract_address());
    if balance < 0 {
        0
    } else {
        balance as u128
    }
}

/// Deposits can be lent out, so the recorded totals say nothing about what the pool holds right now.
pub fn assert_pool_funds(e: &Env, asset: &Address, amount: u128) {
    if pool_balance(e, asset) < amount {
        panic_with_error!(e, &SCErrors::InsufficientFunds);
    }
}
