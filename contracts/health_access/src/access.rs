//! Grant, revoke, and access checks against the single active-grant slot.
//!
//! Neither `grant` nor `revoke` checks who is calling. Any invoker may grant
//! or revoke for any patient, provider, and record.

use soroban_sdk::{Env, Vec};

use crate::errors::reject;
use crate::grant::{ActiveGrant, GrantSlot};
use crate::records::{self, AccessLogEntry};
use crate::txn::Transaction;
use crate::{audit, events, permission, registry, ContractError};

/// Outcome of a grant: the new register value and the one it displaced.
pub struct GrantOutcome {
    pub grant: ActiveGrant,
    pub previous: ActiveGrant,
    pub log_remaining: u32,
}

pub struct AccessController<'a> {
    env: &'a Env,
    slot: &'a GrantSlot,
}

impl<'a> AccessController<'a> {
    pub fn new(env: &'a Env, slot: &'a GrantSlot) -> Self {
        Self { env, slot }
    }

    /// Checks run in order and the first failure wins: patient, record,
    /// permission value. The log append comes last and may fail fatally.
    pub fn grant(
        &self,
        patient_id: u64,
        provider_id: u64,
        record_id: u64,
        permissions: u32,
    ) -> Result<GrantOutcome, ContractError> {
        let env = self.env;

        if !registry::exists(env, patient_id) {
            return Err(reject(env, ContractError::PatientNotFound, patient_id, record_id));
        }
        let record = records::get(env, patient_id, record_id)
            .ok_or_else(|| reject(env, ContractError::RecordNotFound, patient_id, record_id))?;
        if !permission::is_valid(permissions) {
            return Err(reject(env, ContractError::InvalidPermission, patient_id, record_id));
        }

        let mut txn = Transaction::begin(env, self.slot);
        let record = audit::append(env, record, provider_id, permissions)
            .map_err(|err| reject(env, err, patient_id, record_id))?;
        let log_remaining = audit::remaining_capacity(&record);
        txn.stage_record(patient_id, record_id, record);

        let grant = ActiveGrant {
            patient_id,
            provider_id,
            record_id,
            permissions,
        };
        let previous = self.slot.load(env);
        txn.stage_grant(grant.clone());
        txn.commit();

        events::publish_access_granted(env, grant.clone(), previous.clone(), log_remaining);

        Ok(GrantOutcome {
            grant,
            previous,
            log_remaining,
        })
    }

    /// Succeeds only when the slot holds exactly this triple. A grant for any
    /// other triple, or an empty slot, yields `AccessNotFound`.
    pub fn revoke(
        &self,
        patient_id: u64,
        provider_id: u64,
        record_id: u64,
    ) -> Result<bool, ContractError> {
        let env = self.env;

        let record = records::get(env, patient_id, record_id)
            .ok_or_else(|| reject(env, ContractError::RecordNotFound, patient_id, record_id))?;
        let current = self.slot.load(env);
        if !current.matches(patient_id, provider_id, record_id) {
            return Err(reject(env, ContractError::AccessNotFound, patient_id, record_id));
        }

        let mut txn = Transaction::begin(env, self.slot);
        let record = audit::append(env, record, provider_id, audit::REVOKED)
            .map_err(|err| reject(env, err, patient_id, record_id))?;
        let log_remaining = audit::remaining_capacity(&record);
        txn.stage_record(patient_id, record_id, record);
        txn.stage_grant(ActiveGrant::none());
        txn.commit();

        events::publish_access_revoked(env, current, log_remaining);

        Ok(true)
    }

    /// Pure read of the slot. The registry and record store are not consulted.
    pub fn has_access(
        &self,
        patient_id: u64,
        provider_id: u64,
        record_id: u64,
        required: u32,
    ) -> bool {
        let current = self.slot.load(self.env);
        current.matches(patient_id, provider_id, record_id)
            && permission::sufficient(current.permissions, required)
    }

    pub fn access_log(
        &self,
        patient_id: u64,
        record_id: u64,
    ) -> Result<Vec<AccessLogEntry>, ContractError> {
        records::get(self.env, patient_id, record_id)
            .map(|record| record.access_log)
            .ok_or(ContractError::RecordNotFound)
    }
}
