#![cfg(test)]

use crate::errors::SCErrors;
use crate::storage::core::CoreStats;
use crate::storage::positions::Loan;
use crate::tests::test_utils::{
    create_test_data, init_contract, make_pool_deposit, open_loan, set_timestamp, TestData,
};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env};

const YEAR: u64 = 31_536_000;

#[test]
pub fn test_borrow_against_collateral() {
    let e: Env = Env::default();
    let test_data: TestData = create_test_data(&e);
    init_contract(&test_data);

    let lender: Address = Address::generate(&e);
    let borrower: Address = Address::generate(&e);

    make_pool_deposit(&test_data, &lender, 1000);

    let no_collateral_error = test_data
        .contract_client
        .mock_all_auths()
        .try_borrow(&borrower, &1)
        .unwrap_err()
        .unwrap();
    assert_eq!(
        &no_collateral_error,
        &SCErrors::InsufficientCollateral.into()
    );

    set_timestamp(&e, 100);
    open_loan(&test_data, &borrower, 1500, 900);

    assert_eq!(test_data.asset_client.balance(&borrower), 900);
    assert_eq!(
        test_data.contract_client.get_loan(&borrower),
        Some(Loan {
            owner: borrower.clone(),
            principal: 900,
            interest_accrued: 0,
            borrow_time: 100,
            last_interest_update: 100,
        })
    );
    assert_eq!(test_data.contract_client.get_current_interest(&borrower), 0);
    assert_eq!(test_data.contract_client.get_total_debt(&borrower), 900);
    assert_eq!(test_data.contract_client.get_health_factor(&borrower), 166);

    let core_stats: CoreStats = test_data.contract_client.get_core_stats();
    assert_eq!(core_stats.total_deposits, 1000);
    assert_eq!(core_stats.total_borrows, 900);

    // 1500 of collateral backs at most 1000 of debt
    let over_limit_error = test_data
        .contract_client
        .mock_all_auths()
        .try_borrow(&borrower, &101)
        .unwrap_err()
        .unwrap();
    assert_eq!(&over_limit_error, &SCErrors::InsufficientCollateral.into());

    let zero_error = test_data
        .contract_client
        .mock_all_auths()
        .try_borrow(&borrower, &0)
        .unwrap_err()
        .unwrap();
    assert_eq!(&zero_error, &SCErrors::InvalidAmount.into());

    test_data
        .contract_client
        .mock_all_auths()
        .borrow(&borrower, &100);
    assert_eq!(test_data.contract_client.get_total_debt(&borrower), 1000);
    assert_eq!(
        test_data
            .asset_client
            .balance(&test_data.contract_client.address),
        0
    );
}

#[test]
pub fn test_borrow_without_pool_funds() {
    let e: Env = Env::default();
    let test_data: TestData = create_test_data(&e);
    init_contract(&test_data);

    let lender: Address = Address::generate(&e);
    let borrower: Address = Address::generate(&e);

    make_pool_deposit(&test_data, &lender, 500);

    test_data
        .collateral_stellar
        .mock_all_auths()
        .mint(&borrower, &1500);
    test_data.contract_client.mock_all_auths().add_collateral(
        &borrower,
        &1500,
        &test_data.collateral_symbol,
    );

    let no_funds_error = test_data
        .contract_client
        .mock_all_auths()
        .try_borrow(&borrower, &501)
        .unwrap_err()
        .unwrap();
    assert_eq!(&no_funds_error, &SCErrors::InsufficientFunds.into());
    assert_eq!(test_data.contract_client.get_loan(&borrower), None);
    assert_eq!(test_data.contract_client.get_core_stats().total_borrows, 0);
}

#[test]
pub fn test_borrow_folds_interest() {
    let e: Env = Env::default();
    let test_data: TestData = create_test_data(&e);
    init_contract(&test_data);

    let lender: Address = Address::generate(&e);
    let borrower: Address = Address::generate(&e);

    make_pool_deposit(&test_data, &lender, 2_000_000_000);
    open_loan(&test_data, &borrower, 3_000_000_000, 1_000_000_000);

    set_timestamp(&e, YEAR);
    assert_eq!(
        test_data.contract_client.get_current_interest(&borrower),
        50_000_000
    );
    assert_eq!(
        test_data.contract_client.get_total_debt(&borrower),
        1_050_000_000
    );
    assert_eq!(test_data.contract_client.get_health_factor(&borrower), 285);

    // Interest isn't part of the aggregate until the loan is touched
    assert_eq!(
        test_data.contract_client.get_core_stats().total_borrows,
        1_000_000_000
    );

    test_data
        .contract_client
        .mock_all_auths()
        .borrow(&borrower, &100_000_000);

    let loan: Loan = test_data.contract_client.get_loan(&borrower).unwrap();
    assert_eq!(loan.principal, 1_150_000_000);
    assert_eq!(loan.interest_accrued, 0);
    assert_eq!(loan.borrow_time, 0);
    assert_eq!(loan.last_interest_update, YEAR);
    assert_eq!(test_data.contract_client.get_current_interest(&borrower), 0);
    assert_eq!(
        test_data.contract_client.get_core_stats().total_borrows,
        1_150_000_000
    );
}

#[test]
pub fn test_repayments() {
    let e: Env = Env::default();
    let test_data: TestData = create_test_data(&e);
    init_contract(&test_data);

    let lender: Address = Address::generate(&e);
    let borrower: Address = Address::generate(&e);

    let no_loan_error = test_data
        .contract_client
        .mock_all_auths()
        .try_repay(&borrower, &1)
        .unwrap_err()
        .unwrap();
    assert_eq!(&no_loan_error, &SCErrors::LoanNotFound.into());

    let no_loan_debt_error = test_data
        .contract_client
        .try_get_total_debt(&borrower)
        .unwrap_err()
        .unwrap();
    assert_eq!(&no_loan_debt_error, &SCErrors::LoanNotFound.into());

    make_pool_deposit(&test_data, &lender, 2_000_000_000);
    open_loan(&test_data, &borrower, 3_000_000_000, 1_150_000_000);

    set_timestamp(&e, YEAR);
    assert_eq!(
        test_data.contract_client.get_total_debt(&borrower),
        1_207_500_000
    );

    let over_debt_error = test_data
        .contract_client
        .mock_all_auths()
        .try_repay(&borrower, &1_207_500_001)
        .unwrap_err()
        .unwrap();
    assert_eq!(&over_debt_error, &SCErrors::InvalidAmount.into());

    let zero_error = test_data
        .contract_client
        .mock_all_auths()
        .try_repay(&borrower, &0)
        .unwrap_err()
        .unwrap();
    assert_eq!(&zero_error, &SCErrors::InvalidAmount.into());

    assert!(test_data
        .contract_client
        .try_repay(&borrower, &207_500_000)
        .is_err());

    test_data
        .contract_client
        .mock_all_auths()
        .repay(&borrower, &207_500_000);

    let loan: Loan = test_data.contract_client.get_loan(&borrower).unwrap();
    assert_eq!(loan.principal, 1_000_000_000);
    assert_eq!(loan.interest_accrued, 0);
    assert_eq!(loan.borrow_time, 0);
    assert_eq!(loan.last_interest_update, YEAR);
    assert_eq!(
        test_data.contract_client.get_core_stats().total_borrows,
        1_000_000_000
    );
    assert_eq!(
        test_data.asset_client.balance(&borrower),
        1_150_000_000 - 207_500_000
    );

    // The borrower needs the interest on top of what was lent
    test_data
        .asset_stellar
        .mock_all_auths()
        .mint(&borrower, &57_500_000);
    test_data
        .contract_client
        .mock_all_auths()
        .repay(&borrower, &1_000_000_000);

    assert_eq!(test_data.contract_client.get_loan(&borrower), None);
    assert_eq!(test_data.asset_client.balance(&borrower), 0);
    assert_eq!(
        test_data
            .asset_client
            .balance(&test_data.contract_client.address),
        2_057_500_000
    );

    let core_stats: CoreStats = test_data.contract_client.get_core_stats();
    assert_eq!(core_stats.total_borrows, 0);
    assert_eq!(core_stats.total_deposits, 2_000_000_000);

    // Repaying doesn't release the collateral
    assert_eq!(
        test_data
            .contract_client
            .get_collateral(&borrower)
            .unwrap()
            .amount,
        3_000_000_000
    );
}
