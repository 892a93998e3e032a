use crate::errors::SCErrors;
use crate::liquidator::LiquidatorClient;
use crate::registry::CodeRegistryClient;
use crate::storage::core::{CoreState, CoreStorageFunc};
use crate::utils::payments::{make_withdrawal, pool_balance};
use num_integer::div_floor;
use soroban_sdk::auth::{ContractContext, InvokerContractAuthEntry, SubContractInvocation};
use soroban_sdk::{log, panic_with_error, symbol_short, Address, BytesN, Env, IntoVal, Vec};

/// Positions under 120% can be liquidated.
pub const MIN_HEALTH_FACTOR: u128 = 120;

/// Percentage of the debt paid to the liquidator on top of the debt itself.
pub const LIQUIDATION_BONUS: u128 = 10;

/// A zero debt gives a zero factor, persisted loans always carry a positive principal.
pub fn calculate_health_factor(collateral_amount: u128, total_debt: u128) -> u128 {
    if total_debt == 0 {
        return 0;
    }

    div_floor(collateral_amount * 100, total_debt)
}

pub fn calculate_liquidation_amount(total_debt: u128) -> u128 {
    total_debt + div_floor(total_debt * LIQUIDATION_BONUS, 100)
}

/// Asks the registry for the code fingerprint currently deployed at `module`.
pub fn fetch_fingerprint(e: &Env, core_state: &CoreState, module: &Address) -> BytesN<32> {
    match CodeRegistryClient::new(e, &core_state.code_registry).try_fingerprint(module) {
        Ok(Ok(fingerprint)) => fingerprint,
        _ => panic_with_error!(e, &SCErrors::ContractVerificationFailed),
    }
}

/// The code at an address can change after it was registered, so the check runs on every liquidation.
pub fn verify_liquidator(e: &Env, core_state: &CoreState, liquidator: &Address) {
    let trusted: BytesN<32> = e
        ._verified_liquidator()
        .unwrap_or_else(|| panic_with_error!(e, &SCErrors::ContractVerificationFailed));

    if fetch_fingerprint(e, core_state, liquidator) != trusted {
        log!(e, "liquidator fingerprint mismatch", liquidator.clone());
        panic_with_error!(e, &SCErrors::ContractVerificationFailed);
    }
}

/// Lets `liquidator` move exactly `amount` of the pool asset from the pool to itself during
/// the next contract call. The host enforces the entry, any other transfer out of the pool
/// made by the liquidator fails its authorization.
///
/// Returns the pool balance before the call so the settlement knows what was already drawn.
pub fn grant_asset_restriction(
    e: &Env,
    core_state: &CoreState,
    liquidator: &Address,
    amount: u128,
) -> u128 {
    let balance: u128 = pool_balance(e, &core_state.asset);
    if balance < amount {
        panic_with_error!(e, &SCErrors::AssetRestrictionFailed);
    }

    e.authorize_as_current_contract(Vec::from_array(
        e,
        [InvokerContractAuthEntry::Contract(SubContractInvocation {
            context: ContractContext {
                contract: core_state.asset.clone(),
                fn_name: symbol_short!("transfer"),
                args: (
                    e.current_contract_address(),
                    liquidator.clone(),
                    amount as i128,
                )
                    .into_val(e),
            },
            sub_invocations: Vec::new(e),
        })],
    ));

    balance
}

/// A failed liquidator call, including one that went over its ticket, aborts the whole liquidation.
pub fn invoke_liquidator(
    e: &Env,
    liquidator: &Address,
    borrower: &Address,
    total_debt: u128,
) -> u128 {
    match LiquidatorClient::new(e, liquidator).try_liquidate(borrower, &total_debt) {
        Ok(Ok(settlement)) => settlement,
        _ => panic_with_error!(e, &SCErrors::LiquidationFailed),
    }
}

/// Pays the liquidator whatever part of `amount` it didn't draw through its ticket.
pub fn settle_liquidation(
    e: &Env,
    core_state: &CoreState,
    liquidator: &Address,
    amount: u128,
    balance_before: u128,
) {
    let balance_after: u128 = pool_balance(e, &core_state.asset);
    let drawn: u128 = balance_before.saturating_sub(balance_after);
    let pending: u128 = amount.saturating_sub(drawn);

    if pending > 0 {
        make_withdrawal(e, &core_state.asset, liquidator, pending);
    }
}
