use crate::errors::SCErrors;
use crate::storage::core::{CoreState, CoreStats, CoreStorageFunc};
use crate::storage::positions::{Collateral, Deposit, Loan, PositionsStorageFunc};
use crate::utils::core::{assert_not_paused, assert_positive, get_core_state, validate_admin};
use crate::utils::events::{
    emit_admin, emit_borrow, emit_collateral, emit_collateral_asset, emit_deposit,
    emit_liquidation, emit_paused, emit_repay, emit_verified_liquidator, emit_withdraw,
};
use crate::utils::interest::{calculate_current_interest, calculate_total_debt};
use crate::utils::liquidations::{
    calculate_health_factor, calculate_liquidation_amount, fetch_fingerprint,
    grant_asset_restriction, invoke_liquidator, settle_liquidation, verify_liquidator,
    MIN_HEALTH_FACTOR,
};
use crate::utils::payments::{assert_pool_funds, make_deposit, make_withdrawal};
use crate::utils::positions::calculate_max_borrow;
use soroban_sdk::{
    contract, contractimpl, log, panic_with_error, symbol_short, Address, BytesN, Env, Symbol,
};

pub const CONTRACT_DESCRIPTION: Symbol = symbol_short!("LendPool");
pub const CONTRACT_VERSION: Symbol = symbol_short!("0_1_0");

pub trait LendingPoolContractTrait {
    fn init(e: Env, admin: Address, asset: Address, code_registry: Address);

    fn version(e: Env) -> (Symbol, Symbol);

    fn get_core_state(e: Env) -> CoreState;
    fn get_core_stats(e: Env) -> CoreStats;

    // Admin
    fn upgrade(e: Env, caller: Address, hash: BytesN<32>);
    fn set_admin(e: Env, caller: Address, new_admin: Address);
    fn set_paused(e: Env, caller: Address, status: bool);
    fn set_collateral_asset(e: Env, caller: Address, asset: Symbol, token: Address);
    fn register_verified_liquidator(e: Env, caller: Address, liquidator: Address) -> BytesN<32>;
    fn get_verified_liquidator(e: Env) -> Option<BytesN<32>>;

    // Positions
    fn deposit(e: Env, caller: Address, amount: u128);
    fn withdraw(e: Env, caller: Address, amount: u128);
    fn add_collateral(e: Env, caller: Address, amount: u128, asset: Symbol);
    fn borrow(e: Env, caller: Address, amount: u128);
    fn repay(e: Env, caller: Address, amount: u128);

    fn get_deposit(e: Env, account: Address) -> Deposit;
    fn get_collateral(e: Env, account: Address) -> Option<Collateral>;
    fn get_loan(e: Env, account: Address) -> Option<Loan>;
    fn get_current_interest(e: Env, borrower: Address) -> u128;
    fn get_total_debt(e: Env, borrower: Address) -> u128;
    fn get_health_factor(e: Env, borrower: Address) -> u128;

    // Liquidation
    fn liquidate(e: Env, borrower: Address, liquidator: Address) -> u128;
}

#[contract]
pub struct LendingPoolContract;

#[contractimpl]
impl LendingPoolContractTrait for LendingPoolContract {
    fn init(e: Env, admin: Address, asset: Address, code_registry: Address) {
        if e._core_state().is_some() {
            panic_with_error!(&e, &SCErrors::ContractAlreadyInitiated);
        }

        e._set_core_state(&CoreState {
            admin,
            asset,
            code_registry,
            paused: false,
        });
        e._set_core_stats(&CoreStats {
            total_deposits: 0,
            total_borrows: 0,
        });
        e._bump_instance();
    }

    fn version(e: Env) -> (Symbol, Symbol) {
        e._bump_instance();
        (CONTRACT_DESCRIPTION, CONTRACT_VERSION)
    }

    fn get_core_state(e: Env) -> CoreState {
        e._bump_instance();
        get_core_state(&e)
    }

    fn get_core_stats(e: Env) -> CoreStats {
        e._bump_instance();
        e._core_stats()
    }

    fn upgrade(e: Env, caller: Address, hash: BytesN<32>) {
        e._bump_instance();
        validate_admin(&e, &get_core_state(&e), &caller);
        e.deployer().update_current_contract_wasm(hash);
    }

    fn set_admin(e: Env, caller: Address, new_admin: Address) {
        e._bump_instance();
        let mut core_state: CoreState = get_core_state(&e);
        validate_admin(&e, &core_state, &caller);

        core_state.admin = new_admin;
        e._set_core_state(&core_state);
        emit_admin(&e, &core_state.admin);
    }

    fn set_paused(e: Env, caller: Address, status: bool) {
        e._bump_instance();
        let mut core_state: CoreState = get_core_state(&e);
        validate_admin(&e, &core_state, &caller);

        core_state.paused = status;
        e._set_core_state(&core_state);
        emit_paused(&e, status);
    }

    fn set_collateral_asset(e: Env, caller: Address, asset: Symbol, token: Address) {
        e._bump_instance();
        validate_admin(&e, &get_core_state(&e), &caller);

        e._set_collateral_asset(&asset, &token);
        emit_collateral_asset(&e, &asset, &token);
    }

    fn register_verified_liquidator(e: Env, caller: Address, liquidator: Address) -> BytesN<32> {
        e._bump_instance();
        let core_state: CoreState = get_core_state(&e);
        validate_admin(&e, &core_state, &caller);

        let fingerprint: BytesN<32> = fetch_fingerprint(&e, &core_state, &liquidator);
        e._set_verified_liquidator(&fingerprint);
        emit_verified_liquidator(&e, &liquidator, &fingerprint);

        fingerprint
    }

    fn get_verified_liquidator(e: Env) -> Option<BytesN<32>> {
        e._bump_instance();
        e._verified_liquidator()
    }

    fn deposit(e: Env, caller: Address, amount: u128) {
        e._bump_instance();
        caller.require_auth();
        let core_state: CoreState = get_core_state(&e);
        assert_not_paused(&e, &core_state);
        assert_positive(&e, amount);

        make_deposit(&e, &core_state.asset, &caller, amount);

        let mut deposit: Deposit = e._positions().deposit(&caller).unwrap_or(Deposit {
            owner: caller.clone(),
            amount: 0,
            timestamp: 0,
        });
        deposit.amount += amount;
        deposit.timestamp = e.ledger().timestamp();
        e._positions().set_deposit(&deposit);

        let mut core_stats: CoreStats = e._core_stats();
        core_stats.total_deposits += amount;
        e._set_core_stats(&core_stats);

        emit_deposit(&e, &caller, amount, deposit.amount);
    }

    fn withdraw(e: Env, caller: Address, amount: u128) {
        e._bump_instance();
        caller.require_auth();
        let core_state: CoreState = get_core_state(&e);
        assert_not_paused(&e, &core_state);
        assert_positive(&e, amount);

        let mut deposit: Deposit = match e._positions().deposit(&caller) {
            Some(deposit) if deposit.amount >= amount => deposit,
            _ => panic_with_error!(&e, &SCErrors::InsufficientBalance),
        };

        assert_pool_funds(&e, &core_state.asset, amount);

        // The deposit time only follows new deposits
        deposit.amount -= amount;
        e._positions().set_deposit(&deposit);

        let mut core_stats: CoreStats = e._core_stats();
        core_stats.total_deposits -= amount;
        e._set_core_stats(&core_stats);

        make_withdrawal(&e, &core_state.asset, &caller, amount);

        emit_withdraw(&e, &caller, amount, deposit.amount);
    }

    fn add_collateral(e: Env, caller: Address, amount: u128, asset: Symbol) {
        e._bump_instance();
        caller.require_auth();
        let core_state: CoreState = get_core_state(&e);
        assert_not_paused(&e, &core_state);
        assert_positive(&e, amount);

        let token: Address = e
            ._collateral_asset(&asset)
            .unwrap_or_else(|| panic_with_error!(&e, &SCErrors::CollateralAssetNotSupported));

        make_deposit(&e, &token, &caller, amount);

        let mut collateral: Collateral =
            e._positions().collateral(&caller).unwrap_or(Collateral {
                owner: caller.clone(),
                amount: 0,
                asset: asset.clone(),
            });
        collateral.amount += amount;
        collateral.asset = asset;
        e._positions().set_collateral(&collateral);

        emit_collateral(&e, &caller, &collateral.asset, amount, collateral.amount);
    }

    fn borrow(e: Env, caller: Address, amount: u128) {
        e._bump_instance();
        caller.require_auth();
        let core_state: CoreState = get_core_state(&e);
        assert_not_paused(&e, &core_state);
        assert_positive(&e, amount);

        let now: u64 = e.ledger().timestamp();
        let collateral_amount: u128 = e
            ._positions()
            .collateral(&caller)
            .map(|collateral| collateral.amount)
            .unwrap_or(0);

        let (principal, interest, borrow_time) = match e._positions().loan(&caller) {
            Some(loan) => (
                loan.principal,
                calculate_current_interest(&loan, now),
                loan.borrow_time,
            ),
            None => (0, 0, now),
        };

        let new_debt: u128 = principal + interest + amount;
        if new_debt > calculate_max_borrow(collateral_amount) {
            panic_with_error!(&e, &SCErrors::InsufficientCollateral);
        }

        assert_pool_funds(&e, &core_state.asset, amount);

        // Live interest is folded into the principal and accrual restarts from now
        e._positions().set_loan(&Loan {
            owner: caller.clone(),
            principal: new_debt,
            interest_accrued: 0,
            borrow_time,
            last_interest_update: now,
        });

        let mut core_stats: CoreStats = e._core_stats();
        core_stats.total_borrows += interest + amount;
        e._set_core_stats(&core_stats);

        make_withdrawal(&e, &core_state.asset, &caller, amount);

        emit_borrow(&e, &caller, amount, new_debt);
    }

    fn repay(e: Env, caller: Address, amount: u128) {
        e._bump_instance();
        caller.require_auth();
        let core_state: CoreState = get_core_state(&e);
        assert_not_paused(&e, &core_state);
        assert_positive(&e, amount);

        let mut loan: Loan = e
            ._positions()
            .loan(&caller)
            .unwrap_or_else(|| panic_with_error!(&e, &SCErrors::LoanNotFound));

        let now: u64 = e.ledger().timestamp();
        let interest: u128 = calculate_current_interest(&loan, now);
        let total_debt: u128 = loan.principal + interest;

        if amount > total_debt {
            panic_with_error!(&e, &SCErrors::InvalidAmount);
        }

        make_deposit(&e, &core_state.asset, &caller, amount);

        let mut core_stats: CoreStats = e._core_stats();
        core_stats.total_borrows = core_stats.total_borrows + interest - amount;
        e._set_core_stats(&core_stats);

        if amount == total_debt {
            e._positions().remove_loan(&caller);
            emit_repay(&e, &caller, amount, 0);
        } else {
            loan.principal = total_debt - amount;
            loan.interest_accrued = 0;
            loan.last_interest_update = now;
            e._positions().set_loan(&loan);
            emit_repay(&e, &caller, amount, loan.principal);
        }
    }

    fn get_deposit(e: Env, account: Address) -> Deposit {
        e._bump_instance();
        e._positions().deposit(&account).unwrap_or(Deposit {
            owner: account,
            amount: 0,
            timestamp: 0,
        })
    }

    fn get_collateral(e: Env, account: Address) -> Option<Collateral> {
        e._bump_instance();
        e._positions().collateral(&account)
    }

    fn get_loan(e: Env, account: Address) -> Option<Loan> {
        e._bump_instance();
        e._positions().loan(&account)
    }

    fn get_current_interest(e: Env, borrower: Address) -> u128 {
        e._bump_instance();
        let loan: Loan = e
            ._positions()
            .loan(&borrower)
            .unwrap_or_else(|| panic_with_error!(&e, &SCErrors::LoanNotFound));

        calculate_current_interest(&loan, e.ledger().timestamp())
    }

    fn get_total_debt(e: Env, borrower: Address) -> u128 {
        e._bump_instance();
        let loan: Loan = e
            ._positions()
            .loan(&borrower)
            .unwrap_or_else(|| panic_with_error!(&e, &SCErrors::LoanNotFound));

        calculate_total_debt(&loan, e.ledger().timestamp())
    }

    fn get_health_factor(e: Env, borrower: Address) -> u128 {
        e._bump_instance();
        let loan: Loan = e
            ._positions()
            .loan(&borrower)
            .unwrap_or_else(|| panic_with_error!(&e, &SCErrors::LoanNotFound));
        let collateral_amount: u128 = e
            ._positions()
            .collateral(&borrower)
            .map(|collateral| collateral.amount)
            .unwrap_or(0);

        calculate_health_factor(
            collateral_amount,
            calculate_total_debt(&loan, e.ledger().timestamp()),
        )
    }

    // The liquidation process goes this way:
    // 1.- We check the position is below the minimum health factor
    // 2.- We confirm the liquidator's current code is the one the admin trusted
    // 3.- We let the liquidator move at most the liquidation amount out of the pool and call it
    // 4.- We pay what the liquidator didn't draw and close the position
    // Any failure panics, so nothing of the above is kept
    fn liquidate(e: Env, borrower: Address, liquidator: Address) -> u128 {
        e._bump_instance();
        let core_state: CoreState = get_core_state(&e);
        assert_not_paused(&e, &core_state);

        let loan: Loan = e
            ._positions()
            .loan(&borrower)
            .unwrap_or_else(|| panic_with_error!(&e, &SCErrors::LoanNotFound));
        let collateral: Collateral = e
            ._positions()
            .collateral(&borrower)
            .unwrap_or_else(|| panic_with_error!(&e, &SCErrors::CollateralNotFound));

        let total_debt: u128 = calculate_total_debt(&loan, e.ledger().timestamp());
        let health_factor: u128 = calculate_health_factor(collateral.amount, total_debt);
        log!(
            &e,
            "liquidation requested",
            borrower.clone(),
            total_debt,
            health_factor
        );

        if health_factor >= MIN_HEALTH_FACTOR {
            panic_with_error!(&e, &SCErrors::PositionHealthy);
        }

        verify_liquidator(&e, &core_state, &liquidator);

        let liquidation_amount: u128 = calculate_liquidation_amount(total_debt);
        let balance_before: u128 =
            grant_asset_restriction(&e, &core_state, &liquidator, liquidation_amount);

        let settlement: u128 = invoke_liquidator(&e, &liquidator, &borrower, total_debt);

        settle_liquidation(
            &e,
            &core_state,
            &liquidator,
            liquidation_amount,
            balance_before,
        );

        e._positions().remove_loan(&borrower);
        e._positions().remove_collateral(&borrower);

        // The aggregate only holds the principal, the live interest is added before the full debt leaves
        let mut core_stats: CoreStats = e._core_stats();
        core_stats.total_borrows =
            core_stats.total_borrows + (total_debt - loan.principal) - total_debt;
        e._set_core_stats(&core_stats);

        emit_liquidation(
            &e,
            &borrower,
            &liquidator,
            total_debt,
            liquidation_amount,
            settlement,
        );

        liquidation_amount
    }
}
