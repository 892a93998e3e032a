use soroban_sdk::{symbol_short, Address, BytesN, Env, Symbol};

pub fn emit_deposit(e: &Env, owner: &Address, amount: u128, total: u128) {
    e.events()
        .publish((symbol_short!("deposit"), owner.clone()), (amount, total));
}

pub fn emit_withdraw(e: &Env, owner: &Address, amount: u128, total: u128) {
    e.events()
        .publish((symbol_short!("withdraw"), owner.clone()), (amount, total));
}

pub fn emit_collateral(e: &Env, owner: &Address, asset: &Symbol, amount: u128, total: u128) {
    e.events().publish(
        (symbol_short!("col_add"), owner.clone()),
        (asset.clone(), amount, total),
    );
}

pub fn emit_borrow(e: &Env, owner: &Address, amount: u128, principal: u128) {
    e.events()
        .publish((symbol_short!("borrow"), owner.clone()), (amount, principal));
}

pub fn emit_repay(e: &Env, owner: &Address, amount: u128, principal: u128) {
    e.events()
        .publish((symbol_short!("repay"), owner.clone()), (amount, principal));
}

pub fn emit_liquidation(
    e: &Env,
    borrower: &Address,
    liquidator: &Address,
    total_debt: u128,
    liquidation_amount: u128,
    settlement: u128,
) {
    e.events().publish(
        (symbol_short!("liquidate"), borrower.clone()),
        (liquidator.clone(), total_debt, liquidation_amount, settlement),
    );
}

pub fn emit_paused(e: &Env, status: bool) {
    e.events().publish((symbol_short!("paused"),), status);
}

pub fn emit_admin(e: &Env, admin: &Address) {
    e.events().publish((symbol_short!("admin"),), admin.clone());
}

pub fn emit_verified_liquidator(e: &Env, liquidator: &Address, fingerprint: &BytesN<32>) {
    e.events().publish(
        (symbol_short!("verified"), liquidator.clone()),
        fingerprint.clone(),
    );
}

pub fn emit_collateral_asset(e: &Env, asset: &Symbol, token: &Address) {
    e.events()
        .publish((symbol_short!("col_asset"), asset.clone()), token.clone());
}
