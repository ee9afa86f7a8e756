#![no_std]
//! Registry of community units and their voting rights.
//!
//! Units are never deleted; the administrator can only toggle voting rights.
//! Other contracts read it through `shared::UnitRegistryClient`.

use soroban_sdk::{contract, contractimpl, log, symbol_short, Address, Env, Symbol};

use shared::errors::ContractError;
use shared::types::Unit;

mod storage;

#[contract]
pub struct UnitRegistryContract;

#[contractimpl]
impl UnitRegistryContract {
    pub fn initialize(env: Env, admin: Address) -> Result<(), ContractError> {
        admin.require_auth();
        authorization::initialize_admin(&env, &admin)?;

        env.events().publish((symbol_short!("init"),), admin);
        Ok(())
    }

    /// Register a unit with voting rights enabled. Admin only.
    ///
    /// Registering an address twice fails with `AlreadyRegistered`.
    pub fn register(env: Env, unit: Address) -> Result<(), ContractError> {
        authorization::require_admin(&env)?;

        if storage::has_unit(&env, &unit) {
            return Err(ContractError::AlreadyRegistered);
        }

        let record = Unit {
            address: unit.clone(),
            registered: true,
            voting_rights: true,
            registered_at: env.ledger().timestamp(),
        };
        storage::save_unit(&env, &record);
        let total = storage::increment_unit_count(&env)?;

        log!(&env, "unit registered", unit, total);
        env.events().publish((symbol_short!("unit_reg"),), unit);
        Ok(())
    }

    /// Grant or revoke a unit's voting rights. Admin only.
    pub fn set_voting_rights(env: Env, unit: Address, enabled: bool) -> Result<(), ContractError> {
        authorization::require_admin(&env)?;

        let mut record = storage::get_unit(&env, &unit).ok_or(ContractError::UnitNotRegistered)?;
        record.voting_rights = enabled;
        storage::save_unit(&env, &record);

        env.events()
            .publish((Symbol::new(&env, "rights_set"),), (unit, enabled));
        Ok(())
    }

    pub fn is_registered(env: Env, unit: Address) -> bool {
        storage::get_unit(&env, &unit)
            .map(|u| u.registered)
            .unwrap_or(false)
    }

    pub fn has_voting_rights(env: Env, unit: Address) -> bool {
        storage::get_unit(&env, &unit)
            .map(|u| u.registered && u.voting_rights)
            .unwrap_or(false)
    }

    pub fn get_unit(env: Env, unit: Address) -> Result<Unit, ContractError> {
        storage::get_unit(&env, &unit).ok_or(ContractError::UnitNotRegistered)
    }

    pub fn unit_count(env: Env) -> u32 {
        storage::get_unit_count(&env)
    }

    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        Ok(authorization::get_admin(&env)?)
    }

    pub fn transfer_admin(env: Env, new_admin: Address) -> Result<(), ContractError> {
        let previous = authorization::transfer_admin(&env, &new_admin)?;
        env.events()
            .publish((symbol_short!("adm_xfer"),), (previous, new_admin));
        Ok(())
    }
}
