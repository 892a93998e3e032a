use crate::storage::positions::Loan;
use num_integer::div_floor;

/// 5% a year expressed in basis points.
pub const INTEREST_RATE_BPS: u128 = 500;
pub const BPS_DENOMINATOR: u128 = 10_000;
pub const SECONDS_PER_YEAR: u128 = 31_536_000;

/// Interest owed on `loan` at `now`: what was already accrued plus the simple interest since
/// the last checkpoint. Floor division drops fractional units.
pub fn calculate_current_interest(loan: &Loan, now: u64) -> u128 {
    let elapsed: u128 = now.saturating_sub(loan.last_interest_update) as u128;
    let new_interest: u128 = div_floor(
        loan.principal * INTEREST_RATE_BPS * elapsed,
        SECONDS_PER_YEAR * BPS_DENOMINATOR,
    );

    loan.interest_accrued + new_interest
}

pub fn calculate_total_debt(loan: &Loan, now: u64) -> u128 {
    loan.principal + calculate_current_interest(loan, now)
}
