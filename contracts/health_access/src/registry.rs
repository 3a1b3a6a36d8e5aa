use soroban_sdk::{contracttype, symbol_short, Env, String, Symbol};

use crate::{extend_ttl, ContractError};

const PATIENT: Symbol = symbol_short!("PATIENT");

pub const MAX_PUBLIC_KEY_LEN: u32 = 64;

/// Patient profile structure
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientProfile {
    pub patient_id: u64,
    pub public_key: String,
    pub is_active: bool,
    /// Ledger sequence at registration.
    pub created_seq: u32,
}

fn patient_key(patient_id: u64) -> (Symbol, u64) {
    (PATIENT, patient_id)
}

pub fn exists(env: &Env, patient_id: u64) -> bool {
    env.storage().persistent().has(&patient_key(patient_id))
}

pub fn get(env: &Env, patient_id: u64) -> Option<PatientProfile> {
    env.storage().persistent().get(&patient_key(patient_id))
}

fn set(env: &Env, profile: &PatientProfile) {
    let key = patient_key(profile.patient_id);
    env.storage().persistent().set(&key, profile);
    extend_ttl(env, &key);
}

pub fn register(
    env: &Env,
    patient_id: u64,
    public_key: String,
) -> Result<PatientProfile, ContractError> {
    if public_key.is_empty() || public_key.len() > MAX_PUBLIC_KEY_LEN {
        return Err(ContractError::InvalidInput);
    }
    if exists(env, patient_id) {
        return Err(ContractError::PatientAlreadyRegistered);
    }

    let profile = PatientProfile {
        patient_id,
        public_key,
        is_active: true,
        created_seq: env.ledger().sequence(),
    };
    set(env, &profile);
    Ok(profile)
}

/// Flips the active flag. Grants are gated on existence only, so this has no
/// effect on `grant_access`.
pub fn set_active(
    env: &Env,
    patient_id: u64,
    is_active: bool,
) -> Result<PatientProfile, ContractError> {
    let mut profile = get(env, patient_id).ok_or(ContractError::PatientNotFound)?;
    profile.is_active = is_active;
    set(env, &profile);
    Ok(profile)
}
