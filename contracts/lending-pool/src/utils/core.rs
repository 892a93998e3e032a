use crate::errors::SCErrors;
use crate::storage::core::{CoreState, CoreStorageFunc};
use soroban_sdk::{panic_with_error, Address, Env};

pub fn get_core_state(e: &Env) -> CoreState {
    e._core_state()
        .unwrap_or_else(|| panic_with_error!(e, &SCErrors::NotStarted))
}

/// The caller must sign the invocation and be the stored admin, there is no role hierarchy.
pub fn validate_admin(e: &Env, core_state: &CoreState, caller: &Address) {
    caller.require_auth();
    if caller != &core_state.admin {
        panic_with_error!(e, &SCErrors::Unauthorized);
    }
}

pub fn assert_not_paused(e: &Env, core_state: &CoreState) {
    if core_state.paused {
        panic_with_error!(e, &SCErrors::ProtocolPaused);
    }
}

pub fn assert_positive(e: &Env, amount: u128) {
    if amount == 0 {
        panic_with_error!(e, &SCErrors::InvalidAmount);
    }
}
