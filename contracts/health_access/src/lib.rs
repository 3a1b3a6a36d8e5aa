#![no_std]
//! Healthcare record access control.
//!
//! Patients and their medical records are stored by numeric id. A single
//! contract-wide register holds the one active grant: granting access for any
//! `(patient, provider, record)` triple replaces whatever grant was active
//! before. Every grant and revocation is appended to the record's bounded
//! access log.
//!
//! Grant and revoke do not authenticate the caller.

pub mod access;
pub mod audit;
pub mod errors;
pub mod events;
pub mod grant;
pub mod permission;
pub mod records;
pub mod registry;
mod txn;

use soroban_sdk::{contract, contractimpl, Env, IntoVal, String, Val, Vec};

pub use access::AccessController;
pub use errors::{ContractError, ErrorCategory, ErrorSeverity};
pub use grant::{ActiveGrant, GrantSlot};
pub use records::{AccessLogEntry, MedicalRecord};
pub use registry::PatientProfile;

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

/// Extends the time-to-live (TTL) for a persistent storage key.
pub(crate) fn extend_ttl<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

#[contract]
pub struct HealthAccessContract;

#[contractimpl]
impl HealthAccessContract {
    /// Register a patient profile under `patient_id`
    pub fn register_patient(
        env: Env,
        patient_id: u64,
        public_key: String,
    ) -> Result<PatientProfile, ContractError> {
        let profile = registry::register(&env, patient_id, public_key)
            .map_err(|err| errors::reject(&env, err, patient_id, 0))?;
        events::publish_patient_registered(&env, patient_id);
        Ok(profile)
    }

    /// Get a patient profile
    pub fn get_patient(env: Env, patient_id: u64) -> Result<PatientProfile, ContractError> {
        registry::get(&env, patient_id).ok_or(ContractError::PatientNotFound)
    }

    /// Set the patient's active flag. Does not affect grants.
    pub fn set_patient_active(
        env: Env,
        patient_id: u64,
        is_active: bool,
    ) -> Result<PatientProfile, ContractError> {
        let profile = registry::set_active(&env, patient_id, is_active)
            .map_err(|err| errors::reject(&env, err, patient_id, 0))?;
        events::publish_patient_active_changed(&env, patient_id, is_active);
        Ok(profile)
    }

    /// Store a medical record for an existing patient
    pub fn add_medical_record(
        env: Env,
        patient_id: u64,
        record_id: u64,
        data: String,
    ) -> Result<MedicalRecord, ContractError> {
        let record = records::create(&env, patient_id, record_id, data)
            .map_err(|err| errors::reject(&env, err, patient_id, record_id))?;
        events::publish_record_added(&env, patient_id, record_id);
        Ok(record)
    }

    /// Get a medical record
    pub fn get_medical_record(
        env: Env,
        patient_id: u64,
        record_id: u64,
    ) -> Result<MedicalRecord, ContractError> {
        records::get(&env, patient_id, record_id).ok_or(ContractError::RecordNotFound)
    }

    /// Grant `permissions` (1, 2, 4 or 7) on a record to a provider.
    /// Replaces the active grant, whatever triple it was for.
    pub fn grant_access(
        env: Env,
        patient_id: u64,
        provider_id: u64,
        record_id: u64,
        permissions: u32,
    ) -> Result<ActiveGrant, ContractError> {
        let slot = GrantSlot::global();
        AccessController::new(&env, &slot)
            .grant(patient_id, provider_id, record_id, permissions)
            .map(|outcome| outcome.grant)
    }

    /// Revoke the active grant. The triple must match it exactly.
    pub fn revoke_access(
        env: Env,
        patient_id: u64,
        provider_id: u64,
        record_id: u64,
    ) -> Result<bool, ContractError> {
        let slot = GrantSlot::global();
        AccessController::new(&env, &slot).revoke(patient_id, provider_id, record_id)
    }

    /// Check whether the active grant covers `required_permission` for the triple
    pub fn has_access(
        env: Env,
        patient_id: u64,
        provider_id: u64,
        record_id: u64,
        required_permission: u32,
    ) -> bool {
        let slot = GrantSlot::global();
        AccessController::new(&env, &slot).has_access(
            patient_id,
            provider_id,
            record_id,
            required_permission,
        )
    }

    /// Get a record's access log, oldest entry first
    pub fn get_access_log(
        env: Env,
        patient_id: u64,
        record_id: u64,
    ) -> Result<Vec<AccessLogEntry>, ContractError> {
        let slot = GrantSlot::global();
        AccessController::new(&env, &slot).access_log(patient_id, record_id)
    }

    /// Get the raw register contents; all zeros when nothing is granted
    pub fn get_active_grant(env: Env) -> ActiveGrant {
        GrantSlot::global().load(&env)
    }

    /// Contract version
    pub fn version() -> u32 {
        1
    }
}
