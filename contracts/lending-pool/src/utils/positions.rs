use num_integer::div_floor;

/// Loans must stay backed by 150% of their value in collateral.
pub const COLLATERAL_RATIO: u128 = 150;

pub fn calculate_max_borrow(collateral_amount: u128) -> u128 {
    div_floor(collateral_amount * 100, COLLATERAL_RATIO)
}
