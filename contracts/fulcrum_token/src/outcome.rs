//! One-way campaign outcome flag. Nothing in the schedule can be minted
//! until success has been declared.

use soroban_sdk::{contracttype, symbol_short, Env, Symbol};

use crate::ContractError;

const OUTCOME: Symbol = symbol_short!("OUTCOME");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CampaignOutcome {
    Pending,
    Declared,
}

pub fn get(env: &Env) -> CampaignOutcome {
    env.storage()
        .instance()
        .get(&OUTCOME)
        .unwrap_or(CampaignOutcome::Pending)
}

pub fn is_successful(env: &Env) -> bool {
    get(env) == CampaignOutcome::Declared
}

pub fn declare(env: &Env) -> Result<(), ContractError> {
    if is_successful(env) {
        return Err(ContractError::AlreadyDeclared);
    }
    env.storage()
        .instance()
        .set(&OUTCOME, &CampaignOutcome::Declared);
    Ok(())
}
