use soroban_sdk::{contracttype, symbol_short, Env, String, Symbol, Vec};

use crate::{extend_ttl, registry, ContractError};

const RECORD: Symbol = symbol_short!("RECORD");

pub const MAX_RECORD_DATA_LEN: u32 = 256;

/// One line of a record's audit trail.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccessLogEntry {
    pub provider_id: u64,
    /// Ledger sequence at which the entry was appended.
    pub logged_at: u32,
    /// Granted permission value, or `audit::REVOKED`.
    pub action: u32,
}

/// Medical record structure
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MedicalRecord {
    pub data: String,
    pub created_seq: u32,
    pub access_log: Vec<AccessLogEntry>,
}

fn record_key(patient_id: u64, record_id: u64) -> (Symbol, u64, u64) {
    (RECORD, patient_id, record_id)
}

pub fn get(env: &Env, patient_id: u64, record_id: u64) -> Option<MedicalRecord> {
    env.storage()
        .persistent()
        .get(&record_key(patient_id, record_id))
}

pub fn set(env: &Env, patient_id: u64, record_id: u64, record: &MedicalRecord) {
    let key = record_key(patient_id, record_id);
    env.storage().persistent().set(&key, record);
    extend_ttl(env, &key);
}

/// Stores a fresh record with an empty access log.
pub fn create(
    env: &Env,
    patient_id: u64,
    record_id: u64,
    data: String,
) -> Result<MedicalRecord, ContractError> {
    if data.is_empty() || data.len() > MAX_RECORD_DATA_LEN {
        return Err(ContractError::InvalidInput);
    }
    if !registry::exists(env, patient_id) {
        return Err(ContractError::PatientNotFound);
    }
    if env
        .storage()
        .persistent()
        .has(&record_key(patient_id, record_id))
    {
        return Err(ContractError::DuplicateRecord);
    }

    let record = MedicalRecord {
        data,
        created_seq: env.ledger().sequence(),
        access_log: Vec::new(env),
    };
    set(env, patient_id, record_id, &record);
    Ok(record)
}
